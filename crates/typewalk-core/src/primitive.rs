// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Metadata for the primitive kinds.
//!
//! Primitive metadata has no access path of its own, so the getter it
//! receives is handed to the visitor as is.

use tracing::trace;

use crate::getter::Getter;
use crate::metadata::TypeMetadata;
use crate::visitor::TypeVisitor;

/// Metadata for `i32`, classified as an int.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IntMetadata;

impl TypeMetadata<i32> for IntMetadata {
    fn accept<P, G, V>(&self, get: G, visitor: V) -> Result<(), V::Error>
    where
        G: Getter<P, i32>,
        V: TypeVisitor<P>,
    {
        trace!("dispatch int");
        visitor.visit_int(get)
    }
}

/// Metadata for `String`, classified as a string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StringMetadata;

impl TypeMetadata<String> for StringMetadata {
    fn accept<P, G, V>(&self, get: G, visitor: V) -> Result<(), V::Error>
    where
        G: Getter<P, String>,
        V: TypeVisitor<P>,
    {
        trace!("dispatch string");
        visitor.visit_string(get)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::visit;
    use crate::visitor::{collect_leaves, LeafValue, Trademarker};

    #[test]
    fn test_int_at_root() {
        let leaves = collect_leaves(&12, &IntMetadata);
        assert_eq!(leaves.len(), 1);
        assert_eq!(leaves[0].path, "");
        assert_eq!(leaves[0].value, LeafValue::Int(12));
    }

    #[test]
    fn test_string_at_root_is_mutable() {
        let mut value = "brand".to_string();
        visit(&StringMetadata, Trademarker::new(&mut value)).unwrap();
        assert_eq!(value, "brand™");
    }

    #[test]
    fn test_int_is_left_alone_by_mutator() {
        let mut value = 5;
        visit(&IntMetadata, Trademarker::new(&mut value)).unwrap();
        assert_eq!(value, 5);
    }
}
