//! Icon registry: profile-network identifier → rendering descriptor.
//!
//! Backed by `assets/data/social_profiles.json`, which carries two tables:
//! `custom_icons` (hand-drawn icons shipped with the template) and
//! `fontawesome` (icon-font glyphs). Custom icons win. A network present in
//! the `fontawesome` table with an empty descriptor renders with the
//! default link command instead of failing.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use super::jsonc;
use crate::error::{ConfigError, RenderError};

/// Default color used when the registry carries no descriptor body.
const DEFAULT_COLOR: &str = "MaterialGrey700";
/// Default link command used when the registry carries no descriptor body.
const DEFAULT_COMMAND: &str = "\\ProfileLink";

/// How to render one profile network's icon and link.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct IconDescriptor {
    /// LaTeX command that typesets the link (e.g. `\ProfileLink`).
    pub command: String,
    /// Color name understood by the template's palette.
    pub color: String,
    /// Icon asset file, for custom icons.
    pub file: Option<String>,
    /// Raw color-definition command the template must emit before use.
    pub custom_color_command: Option<String>,
}

impl IconDescriptor {
    fn is_empty(&self) -> bool {
        self.command.is_empty()
            && self.color.is_empty()
            && self.file.is_none()
            && self.custom_color_command.is_none()
    }

    fn default_link() -> Self {
        Self {
            command: DEFAULT_COMMAND.to_string(),
            color: DEFAULT_COLOR.to_string(),
            file: None,
            custom_color_command: None,
        }
    }
}

/// The two-table icon registry, loaded once per process.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct IconRegistry {
    custom_icons: HashMap<String, IconDescriptor>,
    fontawesome: HashMap<String, IconDescriptor>,
}

impl IconRegistry {
    /// Load the registry from its JSON file.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        jsonc::load(path)
    }

    /// Build a registry from in-memory tables.
    #[must_use]
    pub fn from_tables(
        custom_icons: HashMap<String, IconDescriptor>,
        fontawesome: HashMap<String, IconDescriptor>,
    ) -> Self {
        Self {
            custom_icons,
            fontawesome,
        }
    }

    /// Resolve a lowercased network identifier to its descriptor.
    ///
    /// Lookup order: `custom_icons` first, then `fontawesome`. An empty
    /// descriptor in the fontawesome table resolves to the default link
    /// command rather than failing.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::IconNotFound`] when the network is absent
    /// from both tables. Callers log a warning and omit the entry; they
    /// must not abort the document.
    pub fn resolve(&self, network: &str) -> Result<IconDescriptor, RenderError> {
        if let Some(desc) = self.custom_icons.get(network) {
            return Ok(desc.clone());
        }
        if let Some(desc) = self.fontawesome.get(network) {
            if desc.is_empty() {
                return Ok(IconDescriptor::default_link());
            }
            return Ok(desc.clone());
        }
        Err(RenderError::IconNotFound {
            network: network.to_string(),
        })
    }
}
