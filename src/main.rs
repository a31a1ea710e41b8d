//! Binary entry point for the typewalk demo.
//!
//! ## Usage
//!
//! ```bash
//! # Render the sample user at every schema version
//! typewalk
//!
//! # Only version 1, as JSON leaves
//! typewalk --schema-version 1 --format json
//!
//! # Trademark every string first
//! typewalk --mark
//! ```

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use typewalk::demo::{load_user, run_demo, DemoOptions, OutputFormat};
use typewalk::error::{DemoError, DemoResult};
use typewalk::schema::VERSIONS;
use typewalk::types::sample_user;
use typewalk_core::SchemaVersion;

// ============================================================================
// CLI Structure
// ============================================================================

/// Render a sample value through versioned metadata visitors.
#[derive(Parser, Debug)]
#[command(name = "typewalk", version, about = "Versioned metadata visitor demo")]
struct Cli {
    /// Schema version to render. Repeat for several (default: 1, 2, 3).
    #[arg(long = "schema-version", value_name = "N")]
    schema_versions: Vec<u32>,

    /// Output format for each version.
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Append a trademark to every string before rendering.
    #[arg(long)]
    mark: bool,

    /// Read the user from a JSON file instead of the built-in sample.
    #[arg(long, value_name = "PATH")]
    input: Option<PathBuf>,

    /// Log level for tracing output.
    #[arg(long, value_enum, default_value = "warn")]
    log_level: LogLevel,
}

/// Log level for tracing output.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    fn to_tracing_level(self) -> tracing::Level {
        match self {
            LogLevel::Trace => tracing::Level::TRACE,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}

impl Cli {
    fn options(&self) -> DemoOptions {
        let versions = if self.schema_versions.is_empty() {
            VERSIONS.to_vec()
        } else {
            self.schema_versions
                .iter()
                .copied()
                .map(SchemaVersion::new)
                .collect()
        };
        DemoOptions {
            versions,
            format: self.format,
            mark: self.mark,
        }
    }
}

// ============================================================================
// Main Entry Point
// ============================================================================

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_tracing(cli.log_level);

    match execute(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_failure(&mut io::stderr(), &err);
            ExitCode::FAILURE
        }
    }
}

/// Write the single stderr line for a failed run.
fn report_failure<W: Write>(out: &mut W, err: &DemoError) {
    let _ = writeln!(out, "typewalk: {err}");
}

/// Initialize tracing subscriber.
fn init_tracing(level: LogLevel) {
    use tracing_subscriber::fmt::format::FmtSpan;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.to_tracing_level().to_string()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_span_events(FmtSpan::CLOSE)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn execute(cli: &Cli) -> DemoResult<()> {
    let mut user = match &cli.input {
        Some(path) => load_user(path)?,
        None => sample_user(),
    };
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_demo(&mut out, &mut user, &cli.options())?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_defaults() {
        let cli = Cli::try_parse_from(["typewalk"]).unwrap();
        assert!(cli.schema_versions.is_empty());
        assert_eq!(cli.format, OutputFormat::Text);
        assert!(!cli.mark);
        assert!(cli.input.is_none());
        assert_eq!(cli.options(), DemoOptions::default());
    }

    #[test]
    fn parse_repeated_schema_versions() {
        let cli =
            Cli::try_parse_from(["typewalk", "--schema-version", "3", "--schema-version", "1"])
                .unwrap();
        assert_eq!(
            cli.options().versions,
            vec![SchemaVersion::new(3), SchemaVersion::new(1)]
        );
    }

    #[test]
    fn parse_format_and_mark() {
        let cli = Cli::try_parse_from(["typewalk", "--format", "json", "--mark"]).unwrap();
        let options = cli.options();
        assert_eq!(options.format, OutputFormat::Json);
        assert!(options.mark);
    }

    #[test]
    fn parse_log_level_debug() {
        let cli = Cli::try_parse_from(["typewalk", "--log-level", "debug"]).unwrap();
        assert!(matches!(cli.log_level, LogLevel::Debug));
        assert_eq!(cli.log_level.to_tracing_level(), tracing::Level::DEBUG);
    }

    #[test]
    fn failure_is_reported_once() {
        let err = DemoError::from(io::Error::other("pipe closed"));
        let mut buf = Vec::new();
        report_failure(&mut buf, &err);
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "typewalk: failed to write output: pipe closed\n"
        );
    }

    #[test]
    fn parse_rejects_non_numeric_version() {
        assert!(Cli::try_parse_from(["typewalk", "--schema-version", "two"]).is_err());
    }

    #[test]
    fn builtin_version_flag_is_still_available() {
        let err = Cli::try_parse_from(["typewalk", "--version"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }
}
