// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Reflection-free visitors driven by explicitly authored type metadata.
//!
//! This crate lets a library describe the shape of its types once, and lets
//! independent visitors act on any value of that shape, with full static
//! typing and in-place mutation.
//!
//! # Overview
//!
//! - **Getters**: [`Getter`] projections from a parent to a field, composable
//!   with [`compose`] and built with [`field!`].
//! - **Metadata**: [`TypeMetadata`] classifies a type (int, string, struct)
//!   and [`StructMetadata`] enumerates a struct's fields.
//! - **Visitors**: [`TypeVisitor`] and [`StructVisitor`] are the double
//!   dispatch targets. [`AdapterVisitor`] reinterprets one root as another.
//! - **Versions**: [`SchemaVersion`] is threaded through versioned metadata
//!   to select fields and representations.
//!
//! # Quick Start
//!
//! ```
//! use typewalk_core::{
//!     debug_string, field, trademark, Getter, IntMetadata, StringMetadata, StructMetadata,
//!     StructVisitor, TypeMetadata, TypeVisitor,
//! };
//!
//! struct Item {
//!     name: String,
//!     count: i32,
//! }
//!
//! struct ItemMetadata;
//!
//! impl TypeMetadata<Item> for ItemMetadata {
//!     fn accept<P, G, V>(&self, get: G, visitor: V) -> Result<(), V::Error>
//!     where
//!         G: Getter<P, Item>,
//!         V: TypeVisitor<P>,
//!     {
//!         visitor.visit_struct(get, self)
//!     }
//! }
//!
//! impl StructMetadata<Item> for ItemMetadata {
//!     fn accept_fields<V>(&self, visitor: &mut V) -> Result<(), V::Error>
//!     where
//!         V: StructVisitor<Item>,
//!     {
//!         visitor.visit_field("name", field!(Item, name: String), &StringMetadata)?;
//!         visitor.visit_field("count", field!(Item, count: i32), &IntMetadata)
//!     }
//! }
//!
//! let mut item = Item { name: "lamp".to_string(), count: 2 };
//! trademark(&mut item, &ItemMetadata);
//! assert_eq!(
//!     debug_string(&item, &ItemMetadata).unwrap(),
//!     "{\n  name: lamp™\n  count: 2\n}\n"
//! );
//! ```
//!
//! # Preconditions
//!
//! Schemas must be tree-shaped. Metadata that (directly or indirectly)
//! describes a type in terms of itself recurses without bound.

// ============================================================================
// Public modules and re-exports
// ============================================================================

/// Error types for output-producing visitors.
pub mod error;
pub use error::{WalkError, WalkResult};

/// Composable field accessors.
pub mod getter;
pub use getter::{compose, Compose, Field, Getter, Identity};

/// Type and struct metadata contracts.
pub mod metadata;
pub use metadata::{classify, visit, Kind, StructMetadata, TypeMetadata};

/// Metadata for the primitive kinds.
pub mod primitive;
pub use primitive::{IntMetadata, StringMetadata};

/// Schema version abstraction for versioned metadata.
pub mod version;
pub use version::SchemaVersion;

/// Visitor contracts and shipped visitors.
pub mod visitor;
pub use visitor::{
    collect_leaves, debug_string, field_names, strip_marks, trademark, write_debug,
    AdapterVisitor, DebugPrinter, FieldNameCollector, Leaf, LeafCollector, LeafValue, MarkAction,
    StructVisitor, Trademarker, TypeVisitor, TRADEMARK,
};
