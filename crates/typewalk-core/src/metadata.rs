// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Type and struct metadata contracts.
//!
//! Metadata is authored per type and describes its shape. A [`TypeMetadata`]
//! classifies its type as an int, a string or a struct and calls exactly one
//! matching case on a [`TypeVisitor`]. A [`StructMetadata`] enumerates the
//! fields of a struct, in declaration order, handing each one to a
//! [`StructVisitor`] together with a getter and the field's own metadata.
//!
//! # Dispatch
//!
//! ```text
//! visit(&metadata, visitor)
//!   -> metadata.accept(Identity, visitor)
//!        -> visitor.visit_struct(get, &struct_metadata)
//!             -> struct_metadata.accept_fields(&mut struct_visitor)
//!                  -> struct_visitor.visit_field(name, field_get, &field_metadata)
//!                       -> field_metadata.accept(compose(get, field_get), visitor)
//! ```
//!
//! Getters are threaded down the recursion rather than values, so a visitor
//! can read or write through to the original value without copying it.

use std::fmt;


use crate::getter::{Getter, Identity};
use crate::visitor::{StructVisitor, TypeVisitor};

/// Describes a type `T` and drives double dispatch into a visitor.
pub trait TypeMetadata<T> {
    /// Classify `T` and invoke the matching case of `visitor`.
    ///
    /// `get` leads from the visitor's root `P` to the `T` being described.
    /// Exactly one of `visit_int`, `visit_string` or `visit_struct` is
    /// called, receiving `get` extended by this metadata's own access path.
    fn accept<P, G, V>(&self, get: G, visitor: V) -> Result<(), V::Error>
    where
        G: Getter<P, T>,
        V: TypeVisitor<P>;
}

/// Enumerates the fields of a struct type `T`.
pub trait StructMetadata<T> {
    /// Call `visitor.visit_field` once per field, in declaration order.
    ///
    /// Stops at the first field whose visit fails.
    fn accept_fields<V>(&self, visitor: &mut V) -> Result<(), V::Error>
    where
        V: StructVisitor<T>;
}

/// Start a traversal at the root of a value described by `metadata`.
pub fn visit<T, M, V>(metadata: &M, visitor: V) -> Result<(), V::Error>
where
    M: TypeMetadata<T>,
    V: TypeVisitor<T>,
{
    metadata.accept(Identity, visitor)
}

/// The closed set of shapes a type can be classified as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Int,
    String,
    Struct,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Kind::Int => "int",
            Kind::String => "string",
            Kind::Struct => "struct",
        };
        f.write_str(name)
    }
}

/// Classify the type described by `metadata` without a value.
///
/// Returns `None` only if the metadata calls no visitor case at all, which
/// is a metadata authoring error.
pub fn classify<T, M>(metadata: &M) -> Option<Kind>
where
    M: TypeMetadata<T>,
{
    let mut kind = None;
    let probe = KindProbe { kind: &mut kind };
    match visit(metadata, probe) {
        Ok(()) => kind,
        Err(never) => match never {},
    }
}

/// Records which case fired.
struct KindProbe<'k> {
    kind: &'k mut Option<Kind>,
}

impl<'k, P> TypeVisitor<P> for KindProbe<'k> {
    type Error = std::convert::Infallible;

    fn visit_int<G: Getter<P, i32>>(self, _get: G) -> Result<(), Self::Error> {
        *self.kind = Some(Kind::Int);
        Ok(())
    }

    fn visit_string<G: Getter<P, String>>(self, _get: G) -> Result<(), Self::Error> {
        *self.kind = Some(Kind::String);
        Ok(())
    }

    fn visit_struct<S, G, M>(self, _get: G, _metadata: &M) -> Result<(), Self::Error>
    where
        G: Getter<P, S>,
        M: StructMetadata<S>,
    {
        *self.kind = Some(Kind::Struct);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitive::{IntMetadata, StringMetadata};

    struct Pair {
        left: i32,
        right: String,
    }

    struct PairMetadata;

    impl TypeMetadata<Pair> for PairMetadata {
        fn accept<P, G, V>(&self, get: G, visitor: V) -> Result<(), V::Error>
        where
            G: Getter<P, Pair>,
            V: TypeVisitor<P>,
        {
            visitor.visit_struct(get, self)
        }
    }

    impl StructMetadata<Pair> for PairMetadata {
        fn accept_fields<V>(&self, visitor: &mut V) -> Result<(), V::Error>
        where
            V: StructVisitor<Pair>,
        {
            visitor.visit_field("left", crate::field!(Pair, left: i32), &IntMetadata)?;
            visitor.visit_field("right", crate::field!(Pair, right: String), &StringMetadata)
        }
    }

    #[test]
    fn test_classify_primitives() {
        assert_eq!(classify(&IntMetadata), Some(Kind::Int));
        assert_eq!(classify(&StringMetadata), Some(Kind::String));
    }

    #[test]
    fn test_classify_struct_is_stable() {
        for _ in 0..3 {
            assert_eq!(classify(&PairMetadata), Some(Kind::Struct));
        }
    }

    #[test]
    fn test_visit_reaches_fields_of_value() {
        let pair = Pair {
            left: 4,
            right: "four".to_string(),
        };
        let leaves = crate::visitor::collect_leaves(&pair, &PairMetadata);
        assert_eq!(leaves.len(), 2);
        assert_eq!(leaves[0].path, "left");
        assert_eq!(leaves[1].path, "right");
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(Kind::Int.to_string(), "int");
        assert_eq!(Kind::Struct.to_string(), "struct");
    }
}
