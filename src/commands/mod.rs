//! Top-level subcommand orchestration.

pub mod build;

use anyhow::Result;

use crate::cli::GlobalOpts;
use crate::config::icons::IconRegistry;
use crate::config::templates::SectionTemplates;
use crate::config::{self, Paths};
use crate::logging::Logger;

/// Shared state produced by the common command setup sequence: root
/// resolution and pre-build config loading.
///
/// Config errors here fail fast, before any rendering or file I/O.
#[derive(Debug)]
pub struct CommandSetup {
    pub paths: Paths,
    pub registry: IconRegistry,
    pub templates: SectionTemplates,
}

impl CommandSetup {
    /// Resolve the repository root and load the registry and template
    /// table.
    ///
    /// # Errors
    ///
    /// Returns an error if the root cannot be determined or either config
    /// file fails to load.
    pub fn init(global: &GlobalOpts, output_dir: &std::path::Path, log: &Logger) -> Result<Self> {
        let root = config::resolve_root(global)?;
        let paths = Paths::new(&root, output_dir);

        log.stage("Loading configuration");
        let registry = IconRegistry::load(&paths.social_profiles)?;
        let templates = SectionTemplates::load(&paths.section_templates)?;
        log.debug(&format!("config loaded from {}", root.display()));

        Ok(Self {
            paths,
            registry,
            templates,
        })
    }
}
