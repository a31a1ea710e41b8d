//! Sample domain for the typewalk visitor framework.
//!
//! This crate defines a small `User` / `Contacts` domain, describes it with
//! versioned metadata, and drives the visitors from
//! [`typewalk_core`] over it:
//!
//! - [`types`]: the plain data types and the sample value
//! - [`schema`]: `UserMetadata` and the version policy
//! - [`demo`]: the per-version rendering used by the `typewalk` binary
//!
//! ```
//! use typewalk::schema::UserMetadata;
//! use typewalk::types::sample_user;
//! use typewalk_core::{debug_string, SchemaVersion};
//!
//! let text = debug_string(&sample_user(), &UserMetadata::new(SchemaVersion::new(1))).unwrap();
//! assert_eq!(text, "{\n  Name: Peter Parker\n  Contacts: peter.parker@example.org\n}\n");
//! ```

pub mod demo;
pub mod error;
pub mod schema;
pub mod types;

pub use demo::{load_user, run_demo, DemoOptions, OutputFormat};
pub use error::{DemoError, DemoResult};
