//! Build orchestration: stage an isolated workspace, drive the toolchain,
//! retrieve the artifact and the diagnostic log.
//!
//! State machine: `Init → StagingFiles → Compiling → {Success,
//! CompileFailed, StagingFailed, Timeout}`. The workspace is a
//! [`tempfile::TempDir`], dropped (and deleted) on every exit path. Log
//! retrieval runs in every terminal state except `StagingFailed` and is
//! never allowed to mask the original failure.

pub mod toolchain;

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};

use crate::assemble::AssembledDocument;
use crate::config::{BuildSettings, Paths};
use crate::error::BuildError;
use crate::logging::Logger;

use self::toolchain::{CompileOutcome, Toolchain};

/// Terminal state of one build.
#[derive(Debug)]
pub enum BuildOutcome {
    /// Artifact produced and copied to the output directory.
    Success {
        /// Final artifact path (`<output_dir>/<name>.<ext>`).
        artifact: PathBuf,
    },
    /// The toolchain exited non-zero; no artifact.
    CompileFailed {
        /// Exit code, if the process terminated normally.
        code: Option<i32>,
        /// Diagnostic log contents, when retrievable.
        log: Option<String>,
    },
    /// The toolchain exceeded its budget; no artifact, exit code unknown.
    Timeout {
        /// Diagnostic log contents, when retrievable.
        log: Option<String>,
    },
    /// Workspace preparation failed; the toolchain never ran.
    StagingFailed {
        /// What went wrong.
        reason: String,
    },
}

impl BuildOutcome {
    /// Whether this outcome produced an artifact.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Convert a non-success outcome into its typed error.
    ///
    /// # Errors
    ///
    /// Returns the [`BuildError`] corresponding to every outcome except
    /// `Success`.
    pub fn into_result(self, timeout_secs: u64) -> Result<PathBuf, BuildError> {
        match self {
            Self::Success { artifact } => Ok(artifact),
            Self::CompileFailed { code, .. } => Err(BuildError::CompileFailed { code }),
            Self::Timeout { .. } => Err(BuildError::Timeout {
                seconds: timeout_secs,
            }),
            Self::StagingFailed { reason } => Err(BuildError::Staging(reason)),
        }
    }
}

/// Everything one build needs besides the toolchain.
#[derive(Debug)]
pub struct BuildRequest<'a> {
    /// Assembled content/meta markup.
    pub document: &'a AssembledDocument,
    /// Repository layout and output directory.
    pub paths: &'a Paths,
    /// Timeout and debug-copy settings.
    pub settings: &'a BuildSettings,
    /// Output base name (no extension).
    pub output_name: &'a str,
}

/// Run one build to a terminal state.
///
/// Staging and compile failures are reported through [`BuildOutcome`], not
/// as errors; the orchestrator itself only errs on unexpected conditions
/// (a toolchain that cannot be spawned, or a successful compile that left
/// no artifact behind).
///
/// # Errors
///
/// Returns an error when the toolchain process cannot be driven at all or
/// reports success without producing its artifact.
pub fn run_build(
    toolchain: &dyn Toolchain,
    req: &BuildRequest<'_>,
    log: &Logger,
) -> Result<BuildOutcome> {
    // Init: ensure the output directory before anything touches disk.
    if let Err(e) = std::fs::create_dir_all(&req.paths.output_dir) {
        return Ok(BuildOutcome::StagingFailed {
            reason: format!(
                "cannot create output directory {}: {e}",
                req.paths.output_dir.display()
            ),
        });
    }

    // StagingFiles: isolated workspace, deleted on drop on every path out.
    log.stage("Staging build workspace");
    let workspace = match tempfile::tempdir() {
        Ok(ws) => ws,
        Err(e) => {
            return Ok(BuildOutcome::StagingFailed {
                reason: format!("cannot create temp workspace: {e}"),
            });
        }
    };

    if let Err(e) = stage_files(req, workspace.path()) {
        log.error(&format!("staging failed: {e:#}"));
        if req.settings.keep_sources {
            copy_debug_sources(req, workspace.path(), log);
        }
        return Ok(BuildOutcome::StagingFailed {
            reason: format!("{e:#}"),
        });
    }
    log.debug(&format!("staged workspace at {}", workspace.path().display()));

    if req.settings.keep_sources {
        copy_debug_sources(req, workspace.path(), log);
    }

    // Compiling.
    log.stage(&format!("Compiling with {}", toolchain.name()));
    let compile = toolchain.compile(workspace.path(), req.settings.compile_timeout)?;

    let outcome = match compile {
        CompileOutcome::Success => {
            let artifact = req
                .paths
                .output_dir
                .join(format!("{}.{}", req.output_name, toolchain.artifact_ext()));
            std::fs::copy(toolchain.artifact_path(workspace.path()), &artifact)
                .map_err(|_| {
                    BuildError::ArtifactMissing(toolchain.artifact_path(workspace.path()))
                })
                .context("retrieving artifact")?;
            log.info(&format!("built {}", artifact.display()));
            BuildOutcome::Success { artifact }
        }
        CompileOutcome::Failed { code } => {
            log.error(&format!(
                "{} failed with exit code {code:?}",
                toolchain.name()
            ));
            BuildOutcome::CompileFailed { code, log: None }
        }
        CompileOutcome::TimedOut { stdout } => {
            log.error(&format!(
                "{} timed out after {}s",
                toolchain.name(),
                req.settings.compile_timeout.as_secs()
            ));
            preserve_stdout(req, &stdout, log);
            BuildOutcome::Timeout { log: None }
        }
    };

    // Finally: best-effort log retrieval in every terminal state that got
    // past staging. Retrieval errors never mask the compile result.
    let retrieved = retrieve_log(toolchain, req, workspace.path(), log);
    Ok(match outcome {
        BuildOutcome::CompileFailed { code, .. } => BuildOutcome::CompileFailed {
            code,
            log: retrieved,
        },
        BuildOutcome::Timeout { .. } => BuildOutcome::Timeout { log: retrieved },
        other => other,
    })
}

/// Write the generated markup and copy template/asset files into the
/// workspace.
fn stage_files(req: &BuildRequest<'_>, workspace: &Path) -> Result<()> {
    std::fs::write(workspace.join("content.tex"), &req.document.content)
        .context("writing content.tex")?;
    std::fs::write(workspace.join("meta.tex"), &req.document.meta).context("writing meta.tex")?;

    for file in ["macros.tex", "resume.tex"] {
        let src = req.paths.template_dir.join(file);
        std::fs::copy(&src, workspace.join(file))
            .with_context(|| format!("copying {}", src.display()))?;
    }

    if req.paths.assets_dir.is_dir() {
        copy_dir_recursive(&req.paths.assets_dir, &workspace.join("assets"))
            .context("copying assets directory")?;
    }
    Ok(())
}

/// Best-effort copy of the staged `.tex` sources to `<output_dir>/resume/`.
fn copy_debug_sources(req: &BuildRequest<'_>, workspace: &Path, log: &Logger) {
    let debug_dir = req.paths.output_dir.join("resume");
    if let Err(e) = std::fs::create_dir_all(&debug_dir) {
        log.warn(&format!("cannot create debug directory: {e}"));
        return;
    }
    for file in ["content.tex", "meta.tex", "macros.tex", "resume.tex"] {
        let src = workspace.join(file);
        if src.exists()
            && let Err(e) = std::fs::copy(&src, debug_dir.join(file))
        {
            log.warn(&format!("cannot preserve {file}: {e}"));
        }
    }
    log.debug(&format!("kept generated sources in {}", debug_dir.display()));
}

/// Preserve the toolchain's captured stdout after a timeout.
fn preserve_stdout(req: &BuildRequest<'_>, stdout: &str, log: &Logger) {
    if stdout.is_empty() {
        return;
    }
    let path = req.paths.output_dir.join("latex_stdout.txt");
    if let Err(e) = std::fs::write(&path, stdout) {
        log.warn(&format!("cannot preserve toolchain stdout: {e}"));
    }
}

/// Copy the toolchain log to `<output_dir>/<name>.log` and return its
/// contents. Failures are logged and swallowed.
fn retrieve_log(
    toolchain: &dyn Toolchain,
    req: &BuildRequest<'_>,
    workspace: &Path,
    log: &Logger,
) -> Option<String> {
    let src = toolchain.log_path(workspace);
    let dst = req.paths.output_dir.join(format!("{}.log", req.output_name));

    match std::fs::copy(&src, &dst) {
        Ok(_) => match std::fs::read_to_string(&dst) {
            Ok(text) => {
                log.debug(&format!("saved toolchain log to {}", dst.display()));
                Some(text)
            }
            Err(e) => {
                log.warn(&format!("cannot read toolchain log: {e}"));
                None
            }
        },
        Err(e) => {
            log.warn(&format!("cannot retrieve toolchain log: {e}"));
            None
        }
    }
}

/// Recursively copy a directory tree.
fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    std::fs::create_dir_all(dst)?;
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let target = dst.join(entry.file_name());
        if entry.file_type()?.is_dir() {
            copy_dir_recursive(&entry.path(), &target)?;
        } else {
            std::fs::copy(entry.path(), &target)?;
        }
    }
    Ok(())
}
