//! Section template table: per-kind (begin, mid, end) markup triples.
//!
//! Loaded once per process from `assets/data/section_templates.json`. Each
//! value holds `begin`, `mid`, and `end` keys, each a list of markup lines
//! joined with newlines. A missing kind or a missing key is equivalent to
//! the empty string, so assembly is always well-defined.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use super::jsonc;
use crate::error::ConfigError;
use crate::render::SectionKind;

/// Markup emitted before a section's entries, between consecutive entries,
/// and after, respectively.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateTriple {
    pub begin: String,
    pub mid: String,
    pub end: String,
}

/// Raw file representation: each piece is an optional list of lines.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawTriple {
    begin: Option<Vec<String>>,
    mid: Option<Vec<String>>,
    end: Option<Vec<String>>,
}

fn join_lines(lines: Option<Vec<String>>) -> String {
    lines.map(|l| l.join("\n")).unwrap_or_default()
}

/// The table of section templates, keyed by section kind.
#[derive(Debug, Clone, Default)]
pub struct SectionTemplates {
    triples: HashMap<SectionKind, TemplateTriple>,
}

impl SectionTemplates {
    /// Load the table from its JSON file.
    ///
    /// Keys that do not name a known section kind are ignored.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw: HashMap<String, RawTriple> = jsonc::load(path)?;
        let triples = raw
            .into_iter()
            .filter_map(|(key, raw)| {
                SectionKind::from_key(&key).map(|kind| {
                    (
                        kind,
                        TemplateTriple {
                            begin: join_lines(raw.begin),
                            mid: join_lines(raw.mid),
                            end: join_lines(raw.end),
                        },
                    )
                })
            })
            .collect();
        Ok(Self { triples })
    }

    /// Build a table from in-memory triples (tests, embedded defaults).
    #[must_use]
    pub fn from_map(triples: HashMap<SectionKind, TemplateTriple>) -> Self {
        Self { triples }
    }

    /// Look up the triple for a section kind.
    ///
    /// A kind absent from the table yields three empty strings.
    #[must_use]
    pub fn lookup(&self, kind: SectionKind) -> TemplateTriple {
        self.triples.get(&kind).cloned().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_missing_kind_is_empty() {
        let table = SectionTemplates::default();
        let triple = table.lookup(SectionKind::Experience);
        assert_eq!(triple, TemplateTriple::default());
    }

    #[test]
    fn load_joins_lines_with_newlines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("section_templates.json");
        std::fs::write(
            &path,
            r#"{
  "experience": {
    "begin": ["\\section{Experience}", ""],
    "mid": ["%", "\\bigskip", "%"],
    "end": [""]
  }
}"#,
        )
        .unwrap();
        let table = SectionTemplates::load(&path).unwrap();
        let triple = table.lookup(SectionKind::Experience);
        assert_eq!(triple.begin, "\\section{Experience}\n");
        assert_eq!(triple.mid, "%\n\\bigskip\n%");
        assert_eq!(triple.end, "");
    }

    #[test]
    fn load_tolerates_missing_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("section_templates.json");
        std::fs::write(&path, r#"{"achievement": {"begin": ["\\begin{AchievementList}"]}}"#)
            .unwrap();
        let table = SectionTemplates::load(&path).unwrap();
        let triple = table.lookup(SectionKind::Achievement);
        assert_eq!(triple.begin, "\\begin{AchievementList}");
        assert_eq!(triple.mid, "");
        assert_eq!(triple.end, "");
    }

    #[test]
    fn load_ignores_unknown_kinds() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("section_templates.json");
        std::fs::write(&path, r#"{"volunteering": {"begin": ["x"]}}"#).unwrap();
        let table = SectionTemplates::load(&path).unwrap();
        assert_eq!(
            table.lookup(SectionKind::Project),
            TemplateTriple::default()
        );
    }
}
