//! The resume document model.
//!
//! Mirrors the JSON-resume-style input schema: identity under `basics`,
//! then `work`, `education`, `skills`, `projects`, `awards`, and an
//! optional `meta` block carrying section ordering and the color scheme.
//! All optional keys default to empty; required date fields are validated
//! later, at render time.

use std::path::Path;

use serde::Deserialize;

use super::jsonc;
use crate::error::ConfigError;

/// A parsed resume document.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Resume {
    pub basics: Basics,
    pub work: Vec<Experience>,
    pub education: Vec<Education>,
    pub skills: Vec<Skill>,
    pub projects: Vec<Project>,
    pub awards: Vec<Achievement>,
    pub meta: Option<Meta>,
}

impl Resume {
    /// Load a resume document from a JSON-with-comments file.
    ///
    /// Profile network identifiers are lowercased on load so registry
    /// lookups are case-insensitive.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let mut resume: Self = jsonc::load(path)?;
        for profile in &mut resume.basics.profiles {
            profile.network = profile.network.to_lowercase();
        }
        Ok(resume)
    }
}

/// Identity block: name, label, contact details, profile links.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Basics {
    pub name: String,
    pub label: String,
    pub email: String,
    pub phone: String,
    pub phone_format: String,
    pub summary: Option<String>,
    pub profiles: Vec<ProfileLink>,
}

/// A social/profile link entry.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProfileLink {
    /// Lowercased network identifier (e.g. `"github"`).
    pub network: String,
    pub username: String,
    pub url: String,
}

/// One work-history entry.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Experience {
    pub company: String,
    pub position: String,
    pub location: String,
    pub website: String,
    pub start_date: String,
    pub end_date: String,
    pub highlights: Vec<String>,
    pub summary: Option<String>,
}

/// One education entry.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Education {
    pub institution: String,
    pub area: String,
    pub study_type: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    pub gpa: Option<String>,
    pub highlights: Vec<String>,
    pub url: Option<String>,
}

/// One project entry.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Project {
    pub name: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub highlights: Vec<String>,
    pub start_date: String,
    pub end_date: String,
    pub url: String,
    pub roles: Vec<String>,
    pub entity: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// One skill group.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Skill {
    pub name: String,
    /// Present in the schema but unused in output.
    pub level: Option<String>,
    pub keywords: Vec<String>,
}

/// One award/achievement entry.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Achievement {
    pub title: String,
}

/// Optional document metadata: section order and color scheme.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Meta {
    pub order: Option<Vec<String>>,
    pub colors: Option<ColorScheme>,
}

/// Two-color theme declaration.
///
/// Accepts the modern `main`/`secondary` keys as well as the legacy
/// `main_color` and `secn_color`/`sec_color` spellings.
#[derive(Debug, Clone, Deserialize)]
pub struct ColorScheme {
    #[serde(alias = "main_color")]
    pub main: String,
    #[serde(alias = "secn_color", alias = "sec_color", default = "default_secondary")]
    pub secondary: String,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self {
            main: "MaterialBlue".to_string(),
            secondary: default_secondary(),
        }
    }
}

fn default_secondary() -> String {
    "MaterialGrey".to_string()
}
