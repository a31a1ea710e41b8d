//! Demo driver: render the sample user once per schema version.
//!
//! Each requested version produces a header line `=== Version N ===`
//! followed by either the debug printer output or the collected leaves as
//! pretty JSON.

use std::fs;
use std::io::Write;
use std::path::Path;

use clap::ValueEnum;
use tracing::{debug, info, info_span};
use typewalk_core::{collect_leaves, trademark, write_debug, SchemaVersion};

use crate::error::{DemoError, DemoResult};
use crate::schema::{UserMetadata, LATEST_VERSION, VERSIONS};
use crate::types::User;

/// How each version's rendering is written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Indented text from the debug printer.
    #[default]
    Text,
    /// Collected leaves as a JSON array.
    Json,
}

/// Options for [`run_demo`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoOptions {
    /// Versions to render, in order. Repeats are rendered again.
    pub versions: Vec<SchemaVersion>,
    pub format: OutputFormat,
    /// Trademark every string, at the latest version, before rendering.
    pub mark: bool,
}

impl Default for DemoOptions {
    fn default() -> Self {
        Self {
            versions: VERSIONS.to_vec(),
            format: OutputFormat::Text,
            mark: false,
        }
    }
}

/// Load a [`User`] from a JSON file.
pub fn load_user(path: &Path) -> DemoResult<User> {
    let text = fs::read_to_string(path).map_err(|source| DemoError::Input {
        path: path.to_path_buf(),
        source,
    })?;
    let user = serde_json::from_str(&text)?;
    debug!(path = %path.display(), "loaded user");
    Ok(user)
}

/// Render `user` to `out` for every version in `options`.
///
/// `user` is marked in place when `options.mark` is set, so the caller sees
/// the marked value afterwards.
pub fn run_demo<W: Write>(out: &mut W, user: &mut User, options: &DemoOptions) -> DemoResult<()> {
    if options.mark {
        info!(version = %LATEST_VERSION, "marking strings");
        trademark(user, &UserMetadata::new(LATEST_VERSION));
    }

    for &version in &options.versions {
        let _span = info_span!("render", %version).entered();
        writeln!(out, "=== Version {} ===", version.number())?;
        render(out, user, version, options.format)?;
    }
    out.flush()?;
    Ok(())
}

fn render<W: Write>(
    out: &mut W,
    user: &User,
    version: SchemaVersion,
    format: OutputFormat,
) -> DemoResult<()> {
    let metadata = UserMetadata::new(version);
    match format {
        OutputFormat::Text => write_debug(user, &metadata, out)?,
        OutputFormat::Json => {
            let leaves = collect_leaves(user, &metadata);
            serde_json::to_writer_pretty(&mut *out, &leaves)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::sample_user;

    fn run(options: &DemoOptions) -> String {
        let mut user = sample_user();
        let mut buf = Vec::new();
        run_demo(&mut buf, &mut user, options).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_default_renders_every_version_in_order() {
        let output = run(&DemoOptions::default());
        let headers: Vec<&str> = output
            .lines()
            .filter(|line| line.starts_with("==="))
            .collect();
        assert_eq!(
            headers,
            vec![
                "=== Version 1 ===",
                "=== Version 2 ===",
                "=== Version 3 ==="
            ]
        );
    }

    #[test]
    fn test_no_versions_prints_nothing() {
        let options = DemoOptions {
            versions: Vec::new(),
            ..DemoOptions::default()
        };
        assert_eq!(run(&options), "");
    }

    #[test]
    fn test_mark_mutates_callers_value() {
        let mut user = sample_user();
        let options = DemoOptions {
            versions: Vec::new(),
            mark: true,
            ..DemoOptions::default()
        };
        run_demo(&mut Vec::new(), &mut user, &options).unwrap();
        assert_eq!(user.name, "Peter Parker™");
        assert_eq!(user.contacts.phone_number, "+1 (311) 555-2368™");
    }

    #[test]
    fn test_json_output_parses_back() {
        let options = DemoOptions {
            versions: vec![SchemaVersion::new(2)],
            format: OutputFormat::Json,
            mark: false,
        };
        let output = run(&options);
        let body = output.strip_prefix("=== Version 2 ===\n").unwrap();
        let leaves: Vec<typewalk_core::Leaf> = serde_json::from_str(body).unwrap();
        assert_eq!(leaves.len(), 3);
        assert_eq!(leaves[1].path, "Age");
    }

    #[test]
    fn test_output_format_parses_from_cli_names() {
        assert_eq!(OutputFormat::from_str("text", false), Ok(OutputFormat::Text));
        assert_eq!(OutputFormat::from_str("json", false), Ok(OutputFormat::Json));
        assert!(OutputFormat::from_str("yaml", false).is_err());
    }

    #[test]
    fn test_load_user_missing_file() {
        let err = load_user(Path::new("/nonexistent/typewalk/user.json")).unwrap_err();
        assert!(matches!(err, DemoError::Input { .. }));
    }
}
