// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! DebugPrinter visitor for indented text rendering.
//!
//! This module provides a read-only [`DebugPrinter`] that renders any value
//! described by metadata as indented text:
//!
//! ```text
//! {
//!   Name: Peter Parker
//!   Age: 28
//!   Contacts: {
//!     Email: peter.parker@example.org
//!     PhoneNumber: +1 (311) 555-2368
//!   }
//! }
//! ```
//!
//! # Layout
//!
//! - Primitives print their value followed by a newline
//! - A struct prints `{`, one line per field indented one level deeper,
//!   then `}` at the struct's own indent
//! - Each level indents by [`INDENT_WIDTH`] spaces
//!
//! The printer only reads through the getters it receives; it never writes
//! to the visited value.

use std::io::Write;

use tracing::{debug, trace};

use crate::error::{WalkError, WalkResult};
use crate::getter::{compose, Getter};
use crate::metadata::{visit, StructMetadata, TypeMetadata};
use crate::visitor::traits::{StructVisitor, TypeVisitor};

/// Spaces per nesting level.
pub const INDENT_WIDTH: usize = 2;

/// Read-only visitor that writes an indented rendering of the value.
pub struct DebugPrinter<'v, P, W> {
    /// Root of the traversal
    root: &'v P,
    /// Destination for rendered text
    out: &'v mut W,
    /// Nesting level of the value being printed
    indent: usize,
}

impl<'v, P, W: Write> DebugPrinter<'v, P, W> {
    /// Create a printer for `root` at indent level zero.
    pub fn new(root: &'v P, out: &'v mut W) -> Self {
        Self::with_indent(root, out, 0)
    }

    /// Create a printer for `root` starting at `indent`.
    pub fn with_indent(root: &'v P, out: &'v mut W, indent: usize) -> Self {
        Self { root, out, indent }
    }
}

impl<'v, P, W: Write> TypeVisitor<P> for DebugPrinter<'v, P, W> {
    type Error = WalkError;

    fn visit_int<G: Getter<P, i32>>(self, get: G) -> WalkResult<()> {
        writeln!(self.out, "{}", get.get(self.root))?;
        Ok(())
    }

    fn visit_string<G: Getter<P, String>>(self, get: G) -> WalkResult<()> {
        writeln!(self.out, "{}", get.get(self.root))?;
        Ok(())
    }

    fn visit_struct<S, G, M>(self, get: G, metadata: &M) -> WalkResult<()>
    where
        G: Getter<P, S>,
        M: StructMetadata<S>,
    {
        trace!(indent = self.indent, "printing struct");
        writeln!(self.out, "{{")?;
        let mut fields = DebugStructPrinter {
            root: self.root,
            outer: get,
            out: &mut *self.out,
            indent: self.indent + 1,
        };
        metadata.accept_fields(&mut fields)?;
        write_indent(self.out, self.indent)?;
        writeln!(self.out, "}}")?;
        Ok(())
    }
}

/// Struct visitor half of [`DebugPrinter`]: one line per field.
pub struct DebugStructPrinter<'v, P, O, W> {
    root: &'v P,
    /// Getter from the root to the struct being printed
    outer: O,
    out: &'v mut W,
    indent: usize,
}

impl<'v, P, S, O, W> StructVisitor<S> for DebugStructPrinter<'v, P, O, W>
where
    O: Getter<P, S>,
    W: Write,
{
    type Error = WalkError;

    fn visit_field<F, G, M>(
        &mut self,
        name: &'static str,
        get: G,
        metadata: &M,
    ) -> WalkResult<()>
    where
        G: Getter<S, F>,
        M: TypeMetadata<F>,
    {
        write_indent(self.out, self.indent)?;
        write!(self.out, "{name}: ")?;
        let printer = DebugPrinter::with_indent(self.root, &mut *self.out, self.indent);
        metadata.accept(compose(self.outer.clone(), get), printer)
    }
}

fn write_indent<W: Write>(out: &mut W, indent: usize) -> WalkResult<()> {
    write!(out, "{:width$}", "", width = indent * INDENT_WIDTH)?;
    Ok(())
}

/// Write the debug rendering of `value` to `out`.
pub fn write_debug<T, M, W>(value: &T, metadata: &M, out: &mut W) -> WalkResult<()>
where
    M: TypeMetadata<T>,
    W: Write,
{
    visit(metadata, DebugPrinter::new(value, out))
}

/// Render `value` to a `String`.
pub fn debug_string<T, M>(value: &T, metadata: &M) -> WalkResult<String>
where
    M: TypeMetadata<T>,
{
    let mut buf = Vec::new();
    write_debug(value, metadata, &mut buf)?;
    let rendered = String::from_utf8(buf)?;
    debug!(bytes = rendered.len(), "rendered debug output");
    Ok(rendered)
}
