//! Error type for the demo driver.
//!
//! Bridges the framework's [`WalkError`] and the I/O and JSON failures of the
//! driver itself into one type the binary can report.

use std::io;
use std::path::PathBuf;

use thiserror::Error;
use typewalk_core::WalkError;

/// Errors raised while running the demo.
#[derive(Debug, Error)]
pub enum DemoError {
    /// A visitor failed while rendering.
    #[error(transparent)]
    Walk(#[from] WalkError),

    /// Encoding or decoding JSON failed.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Writing the demo output failed.
    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),

    /// The input file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Input {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Result alias for the demo driver.
pub type DemoResult<T> = Result<T, DemoError>;
