// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Visitor contracts and the visitors shipped with typewalk.
//!
//! A [`TypeVisitor<P>`] receives one case per kind. Every case gets a getter
//! leading from the visitor's root `P` to the value being visited; the struct
//! case also gets the struct's metadata and is expected to continue the
//! traversal through a [`StructVisitor`].
//!
//! # Traversal Order
//!
//! - **Depth-first**: a struct is entered before its fields are visited
//! - **Declaration order**: fields are visited in the order the struct
//!   metadata emits them for the current version
//!
//! # Visitor Pattern
//!
//! ```ignore
//! use typewalk_core::{Getter, StructMetadata, TypeVisitor};
//!
//! struct StringCounter<'a, P> {
//!     root: &'a P,
//!     count: &'a mut usize,
//! }
//!
//! impl<'a, P> TypeVisitor<P> for StringCounter<'a, P> {
//!     type Error = std::convert::Infallible;
//!
//!     fn visit_string<G: Getter<P, String>>(self, _get: G) -> Result<(), Self::Error> {
//!         *self.count += 1;
//!         Ok(())
//!     }
//!     // visit_int, visit_struct ...
//! }
//! ```
//!
//! # Shipped Visitors
//!
//! - [`DebugPrinter`] - read-only, writes an indented text rendering
//! - [`Trademarker`] - mutates strings in place through the getters
//! - [`LeafCollector`] - records every leaf with its field path
//! - [`FieldNameCollector`] - records the fields a struct metadata emits
//! - [`AdapterVisitor`] - reinterprets a traversal of one type as another

mod adapter;
mod collect;
mod mutator;
mod printer;
mod traits;

pub use adapter::AdapterVisitor;
pub use collect::{
    collect_leaves, field_names, FieldNameCollector, Leaf, LeafCollector, LeafFields, LeafValue,
};
pub use mutator::{strip_marks, trademark, MarkAction, TrademarkFields, Trademarker, TRADEMARK};
pub use printer::{debug_string, write_debug, DebugPrinter, DebugStructPrinter, INDENT_WIDTH};
pub use traits::{StructVisitor, TypeVisitor};
