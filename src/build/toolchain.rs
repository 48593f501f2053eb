//! The external typesetting toolchain behind a capability interface.
//!
//! The orchestrator's state machine only sees this trait, so it can be
//! exercised with a fake implementation; [`Latexmk`] is the real one.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Result;

use crate::exec::{self, ExecOutcome};

/// Result of one toolchain invocation.
#[derive(Debug)]
pub enum CompileOutcome {
    /// The toolchain exited zero; the artifact should exist.
    Success,
    /// The toolchain exited non-zero. The exit code is kept for the
    /// operator; diagnostics come from the log file.
    Failed {
        /// Exit code, if the process terminated normally.
        code: Option<i32>,
    },
    /// The time budget expired and the process was killed. The exit code
    /// is unknown and irrelevant; captured stdout is preserved for
    /// diagnostics.
    TimedOut {
        /// Stdout collected before the kill.
        stdout: String,
    },
}

/// Capability interface over the external typesetting toolchain.
pub trait Toolchain {
    /// Human-readable toolchain name for logs.
    fn name(&self) -> &str;

    /// Compile the staged workspace with a bounded time budget.
    ///
    /// # Errors
    ///
    /// Returns an error only when the toolchain process cannot be spawned
    /// or polled; compile failures and timeouts are reported through
    /// [`CompileOutcome`].
    fn compile(&self, workspace: &Path, timeout: Duration) -> Result<CompileOutcome>;

    /// Where the binary artifact lands inside the workspace.
    fn artifact_path(&self, workspace: &Path) -> PathBuf;

    /// Where the diagnostic log lands inside the workspace.
    fn log_path(&self, workspace: &Path) -> PathBuf;

    /// File extension of the produced artifact (no leading dot).
    fn artifact_ext(&self) -> &str;
}

/// The real toolchain: `latexmk -xelatex` against the staged `resume.tex`.
#[derive(Debug, Default)]
pub struct Latexmk;

impl Latexmk {
    /// Check that `latexmk` is on PATH.
    #[must_use]
    pub fn is_available() -> bool {
        exec::available("latexmk")
    }
}

impl Toolchain for Latexmk {
    fn name(&self) -> &str {
        "latexmk"
    }

    fn compile(&self, workspace: &Path, timeout: Duration) -> Result<CompileOutcome> {
        let outcome = exec::run_in_with_timeout(
            workspace,
            "latexmk",
            &["-xelatex", "-interaction=nonstopmode", "resume.tex"],
            timeout,
        )?;

        Ok(match outcome {
            ExecOutcome::Completed(result) if result.success => CompileOutcome::Success,
            ExecOutcome::Completed(result) => CompileOutcome::Failed { code: result.code },
            ExecOutcome::TimedOut { stdout, .. } => CompileOutcome::TimedOut { stdout },
        })
    }

    fn artifact_path(&self, workspace: &Path) -> PathBuf {
        workspace.join("resume.pdf")
    }

    fn log_path(&self, workspace: &Path) -> PathBuf {
        workspace.join("resume.log")
    }

    fn artifact_ext(&self) -> &str {
        "pdf"
    }
}
