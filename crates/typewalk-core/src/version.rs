// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Schema version abstraction for version-aware metadata.
//!
//! A [`SchemaVersion`] is supplied by the caller per traversal and threaded
//! through versioned metadata. It is never stored on the visited value.
//! Which fields or representations a version selects is policy owned by the
//! metadata author; this module only provides the comparison helpers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Version number selecting the shape a versioned metadata exposes.
///
/// # Example
///
/// ```
/// use typewalk_core::SchemaVersion;
///
/// let v2 = SchemaVersion::new(2);
/// assert!(v2.at_least(2));
/// assert!(!v2.at_least(3));
/// assert_eq!(v2.to_string(), "v2");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct SchemaVersion(u32);

impl SchemaVersion {
    /// Create a version from its number.
    pub const fn new(number: u32) -> Self {
        Self(number)
    }

    /// The version number.
    #[must_use]
    pub const fn number(self) -> u32 {
        self.0
    }

    /// Returns whether this version is `threshold` or newer.
    #[must_use]
    pub const fn at_least(self, threshold: u32) -> bool {
        self.0 >= threshold
    }
}

impl From<u32> for SchemaVersion {
    fn from(number: u32) -> Self {
        Self(number)
    }
}

impl fmt::Display for SchemaVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}
