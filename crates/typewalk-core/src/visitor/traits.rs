// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Visitor trait definitions for metadata-driven traversal.

use crate::getter::Getter;
use crate::metadata::{StructMetadata, TypeMetadata};

/// Per-kind dispatch target, rooted at `P`.
///
/// Metadata calls exactly one case, consuming the visitor. The getter leads
/// from `P` to the visited value; use [`Getter::get`] to read it and
/// [`Getter::get_mut`] to write it in place.
///
/// The set of cases is closed. Adding a primitive kind means adding a case
/// to every visitor.
pub trait TypeVisitor<P>: Sized {
    /// Failure raised by this visitor, propagated out of the traversal.
    type Error;

    /// Visit an `i32`.
    fn visit_int<G: Getter<P, i32>>(self, get: G) -> Result<(), Self::Error>;

    /// Visit a `String`.
    fn visit_string<G: Getter<P, String>>(self, get: G) -> Result<(), Self::Error>;

    /// Visit a struct `S` described by `metadata`.
    ///
    /// Implementations usually call [`StructMetadata::accept_fields`] with a
    /// [`StructVisitor`] that carries `get` forward.
    fn visit_struct<S, G, M>(self, get: G, metadata: &M) -> Result<(), Self::Error>
    where
        G: Getter<P, S>,
        M: StructMetadata<S>;
}

/// Per-field dispatch target for a struct `T`.
pub trait StructVisitor<T> {
    /// Failure raised by this visitor, propagated out of the traversal.
    type Error;

    /// Visit the field `name`, reachable from `T` through `get`.
    ///
    /// Implementations usually recurse with `metadata.accept(...)`.
    fn visit_field<F, G, M>(
        &mut self,
        name: &'static str,
        get: G,
        metadata: &M,
    ) -> Result<(), Self::Error>
    where
        G: Getter<T, F>,
        M: TypeMetadata<F>;
}
