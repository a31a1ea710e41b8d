// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Error types for the shipped visitors.
//!
//! Traversal itself cannot fail: metadata classification is total. Only
//! visitors that perform I/O report errors, through their associated
//! `Error` type. [`WalkError`] is that type for the visitors in this crate
//! that write output; visitors that never fail use
//! [`std::convert::Infallible`].

use std::io;
use std::string::FromUtf8Error;

use thiserror::Error;

/// Errors raised by output-producing visitors.
#[derive(Debug, Error)]
pub enum WalkError {
    /// The underlying writer failed.
    #[error("failed to write visitor output: {0}")]
    Io(#[from] io::Error),

    /// Rendered output was not valid UTF-8.
    #[error("visitor output is not valid UTF-8: {0}")]
    Utf8(#[from] FromUtf8Error),
}

/// Result alias for output-producing visitors.
pub type WalkResult<T> = Result<T, WalkError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_message() {
        let err = WalkError::from(io::Error::new(io::ErrorKind::BrokenPipe, "closed"));
        assert_eq!(err.to_string(), "failed to write visitor output: closed");
    }

    #[test]
    fn test_utf8_error_converts() {
        let bad = String::from_utf8(vec![0xff]).unwrap_err();
        let err: WalkError = bad.into();
        assert!(matches!(err, WalkError::Utf8(_)));
    }
}
