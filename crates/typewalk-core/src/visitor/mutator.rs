// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Trademarker visitor for in-place string mutation.
//!
//! A [`Trademarker`] is bound to a unique reference when it is created.
//! Strings reached by the traversal are edited through the getters, so the
//! caller observes every change on its own value once the traversal returns;
//! there is no separate write-back step.
//!
//! Unlike [`DebugPrinter`](super::DebugPrinter), which keeps the traversal
//! root and extends one getter per level, the trademarker rebinds at every
//! struct: each field gets a fresh trademarker bound to that field's storage.

use std::convert::Infallible;

use tracing::trace;

use crate::getter::{Getter, Identity};
use crate::metadata::{visit, StructMetadata, TypeMetadata};
use crate::visitor::traits::{StructVisitor, TypeVisitor};

/// The marker appended to every string.
pub const TRADEMARK: &str = "™";

/// What a [`Trademarker`] does to each string it reaches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MarkAction {
    /// Append [`TRADEMARK`].
    #[default]
    Append,
    /// Remove one trailing [`TRADEMARK`], if present.
    Strip,
}

impl MarkAction {
    fn apply(self, value: &mut String) {
        match self {
            MarkAction::Append => value.push_str(TRADEMARK),
            MarkAction::Strip => {
                if let Some(kept) = value.strip_suffix(TRADEMARK).map(str::len) {
                    value.truncate(kept);
                }
            }
        }
    }
}

/// Mutating visitor that marks strings and leaves ints untouched.
#[derive(Debug)]
pub struct Trademarker<'v, T> {
    value: &'v mut T,
    action: MarkAction,
}

impl<'v, T> Trademarker<'v, T> {
    /// A trademarker that appends the marker.
    pub fn new(value: &'v mut T) -> Self {
        Self::with_action(value, MarkAction::Append)
    }

    /// A trademarker that strips one marker.
    pub fn strip(value: &'v mut T) -> Self {
        Self::with_action(value, MarkAction::Strip)
    }

    /// A trademarker applying `action` to every string.
    pub fn with_action(value: &'v mut T, action: MarkAction) -> Self {
        Self { value, action }
    }
}

impl<'v, T> TypeVisitor<T> for Trademarker<'v, T> {
    type Error = Infallible;

    fn visit_int<G: Getter<T, i32>>(self, _get: G) -> Result<(), Infallible> {
        Ok(())
    }

    fn visit_string<G: Getter<T, String>>(self, get: G) -> Result<(), Infallible> {
        self.action.apply(get.get_mut(self.value));
        Ok(())
    }

    fn visit_struct<S, G, M>(self, get: G, metadata: &M) -> Result<(), Infallible>
    where
        G: Getter<T, S>,
        M: StructMetadata<S>,
    {
        let mut fields = TrademarkFields {
            value: get.get_mut(self.value),
            action: self.action,
        };
        metadata.accept_fields(&mut fields)
    }
}

/// Struct visitor half of [`Trademarker`], bound to the struct itself.
#[derive(Debug)]
pub struct TrademarkFields<'v, S> {
    value: &'v mut S,
    action: MarkAction,
}

impl<'v, S> StructVisitor<S> for TrademarkFields<'v, S> {
    type Error = Infallible;

    fn visit_field<F, G, M>(
        &mut self,
        name: &'static str,
        get: G,
        metadata: &M,
    ) -> Result<(), Infallible>
    where
        G: Getter<S, F>,
        M: TypeMetadata<F>,
    {
        trace!(field = name, action = ?self.action, "marking field");
        let field = get.get_mut(&mut *self.value);
        metadata.accept(Identity, Trademarker::with_action(field, self.action))
    }
}

/// Append the marker to every string of `value`.
pub fn trademark<T, M>(value: &mut T, metadata: &M)
where
    M: TypeMetadata<T>,
{
    match visit(metadata, Trademarker::new(value)) {
        Ok(()) => {}
        Err(never) => match never {},
    }
}

/// Remove one marker from every string of `value` that ends with it.
pub fn strip_marks<T, M>(value: &mut T, metadata: &M)
where
    M: TypeMetadata<T>,
{
    match visit(metadata, Trademarker::strip(value)) {
        Ok(()) => {}
        Err(never) => match never {},
    }
}
