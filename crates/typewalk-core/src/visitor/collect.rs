// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Collector visitors for leaves and field names.
//!
//! - [`LeafCollector`] records every primitive reached by a traversal, in
//!   visit order, together with its dotted field path.
//! - [`FieldNameCollector`] records the field names a struct metadata emits,
//!   without needing a value at all.
//!
//! Both are infallible.

use std::convert::Infallible;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::getter::{compose, Getter};
use crate::metadata::{visit, StructMetadata, TypeMetadata};
use crate::visitor::traits::{StructVisitor, TypeVisitor};

/// A primitive value read by a traversal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum LeafValue {
    Int(i32),
    String(String),
}

/// A leaf and the field path leading to it.
///
/// The path of a primitive root is empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leaf {
    pub path: String,
    pub value: LeafValue,
}

/// Read-only visitor pushing each leaf it reaches onto a list.
pub struct LeafCollector<'v, P> {
    root: &'v P,
    path: String,
    leaves: &'v mut Vec<Leaf>,
}

impl<'v, P> LeafCollector<'v, P> {
    /// Collect the leaves of `root` into `leaves`.
    pub fn new(root: &'v P, leaves: &'v mut Vec<Leaf>) -> Self {
        Self {
            root,
            path: String::new(),
            leaves,
        }
    }

    fn push(self, value: LeafValue) {
        self.leaves.push(Leaf {
            path: self.path,
            value,
        });
    }
}

impl<'v, P> TypeVisitor<P> for LeafCollector<'v, P> {
    type Error = Infallible;

    fn visit_int<G: Getter<P, i32>>(self, get: G) -> Result<(), Infallible> {
        let value = *get.get(self.root);
        self.push(LeafValue::Int(value));
        Ok(())
    }

    fn visit_string<G: Getter<P, String>>(self, get: G) -> Result<(), Infallible> {
        let value = get.get(self.root).clone();
        self.push(LeafValue::String(value));
        Ok(())
    }

    fn visit_struct<S, G, M>(self, get: G, metadata: &M) -> Result<(), Infallible>
    where
        G: Getter<P, S>,
        M: StructMetadata<S>,
    {
        let mut fields = LeafFields {
            root: self.root,
            outer: get,
            prefix: self.path,
            leaves: self.leaves,
        };
        metadata.accept_fields(&mut fields)
    }
}

/// Struct visitor half of [`LeafCollector`].
pub struct LeafFields<'v, P, O> {
    root: &'v P,
    outer: O,
    /// Path of the struct being walked
    prefix: String,
    leaves: &'v mut Vec<Leaf>,
}

impl<'v, P, S, O> StructVisitor<S> for LeafFields<'v, P, O>
where
    O: Getter<P, S>,
{
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
        let path = if self.prefix.is_empty() {
            name.to_string()
        } else {
            format!("{}.{}", self.prefix, name)
        };
        let collector = LeafCollector {
            root: self.root,
            path,
            leaves: &mut *self.leaves,
        };
        metadata.accept(compose(self.outer.clone(), get), collector)
    }
}

/// Collect every leaf of `value`, in traversal order.
pub fn collect_leaves<T, M>(value: &T, metadata: &M) -> Vec<Leaf>
where
    M: TypeMetadata<T>,
{
    let mut leaves = Vec::new();
    match visit(metadata, LeafCollector::new(value, &mut leaves)) {
        Ok(()) => {}
        Err(never) => match never {},
    }
    debug!(count = leaves.len(), "collected leaves");
    leaves
}

/// Records the names of the fields a struct metadata emits, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldNameCollector {
    names: Vec<&'static str>,
}

impl FieldNameCollector {
    /// An empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Names recorded so far, in visit order.
    pub fn names(&self) -> &[&'static str] {
        &self.names
    }

    /// Consume the collector, returning the recorded names.
    pub fn into_names(self) -> Vec<&'static str> {
        self.names
    }
}

impl<S> StructVisitor<S> for FieldNameCollector {
    type Error = Infallible;

    fn visit_field<F, G, M>(
        &mut self,
        name: &'static str,
        _get: G,
        _metadata: &M,
    ) -> Result<(), Infallible>
    where
        G: Getter<S, F>,
        M: TypeMetadata<F>,
    {
        self.names.push(name);
        Ok(())
    }
}

/// The field names `metadata` emits, in order.
pub fn field_names<S, M>(metadata: &M) -> Vec<&'static str>
where
    M: StructMetadata<S>,
{
    let mut collector = FieldNameCollector::new();
    match metadata.accept_fields(&mut collector) {
        Ok(()) => {}
        Err(never) => match never {},
    }
    collector.into_names()
}
