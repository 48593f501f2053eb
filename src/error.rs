//! Domain-specific error types for the resume engine.
//!
//! Internal modules return typed errors via [`thiserror`]; command handlers
//! at the CLI boundary convert them to [`anyhow::Error`] with `?`.
//!
//! # Error hierarchy
//!
//! ```text
//! ResumakeError
//! ├── Config(ConfigError) — ordering validation, config file loading
//! ├── Render(RenderError) — date parsing, icon resolution
//! └── Build(BuildError)   — workspace staging, toolchain invocation
//! ```

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for the resume engine.
#[derive(Error, Debug)]
pub enum ResumakeError {
    /// Configuration error (file loading, section ordering).
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Rendering error (date parsing, icon resolution).
    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    /// Build orchestration error (staging, compilation).
    #[error("Build error: {0}")]
    Build(#[from] BuildError),
}

/// Errors raised before any rendering starts: unreadable or unparsable
/// config files and invalid section ordering.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The user-supplied section order names an unknown section kind.
    #[error(
        "Unknown section '{0}' in ordering: must be one of \
         experience, education, technical_skill, project, achievement"
    )]
    UnknownSection(String),

    /// A config file could not be read.
    #[error("IO error reading {path}: {source}")]
    Io {
        /// Path to the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// A config file could not be parsed as JSON.
    #[error("Invalid JSON in {path}: {message}")]
    Parse {
        /// Path to the offending file.
        path: PathBuf,
        /// Parser diagnostic.
        message: String,
    },
}

/// Errors raised while rendering records into markup fragments.
#[derive(Error, Debug)]
pub enum RenderError {
    /// A required date field was present but not parseable as `YYYY-MM-DD`.
    ///
    /// Fatal for the current document: dates are structurally required.
    #[error("unparsable date in {section} entry: {field}=\"{value}\" (expected YYYY-MM-DD)")]
    DateParse {
        /// Record kind the field belongs to (e.g. `"experience"`).
        section: &'static str,
        /// Field name (e.g. `"startDate"`).
        field: &'static str,
        /// The raw value that failed to parse.
        value: String,
    },

    /// A profile network has no icon descriptor in either registry table.
    ///
    /// Recoverable: the caller logs a warning and omits the entry.
    #[error("no icon descriptor for network '{network}' in custom or fontawesome tables")]
    IconNotFound {
        /// The lowercased network identifier that failed to resolve.
        network: String,
    },
}

/// Errors raised by the build orchestrator.
#[derive(Error, Debug)]
pub enum BuildError {
    /// Preparing the compile workspace failed; the toolchain never ran.
    #[error("failed to stage build workspace: {0}")]
    Staging(String),

    /// The toolchain exited non-zero.
    #[error("toolchain failed with exit code {code:?}")]
    CompileFailed {
        /// Exit code, if the process terminated normally.
        code: Option<i32>,
    },

    /// The toolchain exceeded its time budget and was killed.
    #[error("toolchain timed out after {seconds}s")]
    Timeout {
        /// The configured budget, in seconds.
        seconds: u64,
    },

    /// The toolchain reported success but produced no artifact.
    #[error("toolchain succeeded but no artifact found at {0}")]
    ArtifactMissing(PathBuf),
}
