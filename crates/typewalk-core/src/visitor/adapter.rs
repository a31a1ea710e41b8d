// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! AdapterVisitor for reinterpreting one traversal root as another.
//!
//! An [`AdapterVisitor`] wraps a visitor rooted at `O` together with a
//! getter from `O` to `I`, and presents itself as a visitor rooted at `I`.
//! Every case prefixes the getter it receives with the mapping getter and
//! forwards to the same case on the inner visitor. Struct metadata is passed
//! through unchanged: only the access path is reinterpreted, never the shape
//! below the mapped point.
//!
//! This lets metadata describe an `O` by dispatching on the metadata of a
//! part of it. A versioned struct can present itself as a single string
//! field to visitors written against the older, flatter schema:
//!
//! ```ignore
//! StringMetadata.accept(
//!     Identity,
//!     AdapterVisitor::new(visitor, compose(get, field!(Contacts, email: String))),
//! )
//! ```

use std::fmt;
use std::marker::PhantomData;

use tracing::trace;

use crate::getter::{compose, Getter};
use crate::metadata::StructMetadata;
use crate::visitor::traits::TypeVisitor;

/// Visitor decorator rooted at `I`, forwarding to an inner visitor rooted at `O`.
pub struct AdapterVisitor<V, Map, O> {
    inner: V,
    map: Map,
    _outer: PhantomData<fn(&O)>,
}

impl<V, Map, O> AdapterVisitor<V, Map, O> {
    /// Wrap `inner`, using `map` to lead from its root to the adapted root.
    pub fn new(inner: V, map: Map) -> Self {
        Self {
            inner,
            map,
            _outer: PhantomData,
        }
    }

    /// Unwrap the inner visitor and mapping getter.
    pub fn into_parts(self) -> (V, Map) {
        (self.inner, self.map)
    }
}

impl<V: fmt::Debug, Map: fmt::Debug, O> fmt::Debug for AdapterVisitor<V, Map, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdapterVisitor")
            .field("inner", &self.inner)
            .field("map", &self.map)
            .finish()
    }
}

impl<I, O, V, Map> TypeVisitor<I> for AdapterVisitor<V, Map, O>
where
    V: TypeVisitor<O>,
    Map: Getter<O, I>,
{
    type Error = V::Error;

    fn visit_int<G: Getter<I, i32>>(self, get: G) -> Result<(), Self::Error> {
        trace!("adapter forwarding int");
        self.inner.visit_int(compose(self.map, get))
    }

    fn visit_string<G: Getter<I, String>>(self, get: G) -> Result<(), Self::Error> {
        trace!("adapter forwarding string");
        self.inner.visit_string(compose(self.map, get))
    }

    fn visit_struct<S, G, M>(self, get: G, metadata: &M) -> Result<(), Self::Error>
    where
        G: Getter<I, S>,
        M: StructMetadata<S>,
    {
        trace!("adapter forwarding struct");
        self.inner.visit_struct(compose(self.map, get), metadata)
    }
}
