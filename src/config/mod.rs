//! Configuration loading: resume document, icon registry, section
//! templates, and filesystem layout.

pub mod icons;
pub mod jsonc;
pub mod resume;
pub mod templates;

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Result;

use crate::cli::GlobalOpts;

/// Filesystem layout of a resume repository root.
///
/// The root must contain `template/` (macro definitions and master
/// document skeleton) and `assets/` (static files copied into the build
/// workspace, including the registry and template-table config under
/// `assets/data/`).
#[derive(Debug, Clone)]
pub struct Paths {
    /// Repository root.
    pub root: PathBuf,
    /// Directory holding `macros.tex` and `resume.tex`.
    pub template_dir: PathBuf,
    /// Static asset directory staged into the workspace.
    pub assets_dir: PathBuf,
    /// Icon registry config file.
    pub social_profiles: PathBuf,
    /// Section template table config file.
    pub section_templates: PathBuf,
    /// Directory receiving artifacts and logs.
    pub output_dir: PathBuf,
}

impl Paths {
    /// Derive all paths from a repository root and an output directory.
    #[must_use]
    pub fn new(root: &Path, output_dir: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
            template_dir: root.join("template"),
            assets_dir: root.join("assets"),
            social_profiles: root.join("assets/data/social_profiles.json"),
            section_templates: root.join("assets/data/section_templates.json"),
            output_dir: output_dir.to_path_buf(),
        }
    }
}

/// Build-orchestration settings resolved from CLI flags.
#[derive(Debug, Clone)]
pub struct BuildSettings {
    /// Time budget for the toolchain invocation.
    pub compile_timeout: Duration,
    /// Preserve generated `.tex` sources in a debug subdirectory.
    pub keep_sources: bool,
}

/// Resolve the resume repository root from CLI arguments or auto-detection.
///
/// Precedence: `--root`, the `RESUMAKE_ROOT` environment variable, then the
/// current directory if it contains a `template/` directory.
///
/// # Errors
///
/// Returns an error if no candidate contains a `template/` directory.
pub fn resolve_root(global: &GlobalOpts) -> Result<PathBuf> {
    if let Some(ref root) = global.root {
        return Ok(root.clone());
    }

    if let Ok(root) = std::env::var("RESUMAKE_ROOT") {
        return Ok(PathBuf::from(root));
    }

    let cwd = std::env::current_dir()?;
    if cwd.join("template").exists() {
        return Ok(cwd);
    }

    anyhow::bail!("cannot determine resume root. Use --root or set RESUMAKE_ROOT env var")
}
