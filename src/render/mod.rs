//! Section renderers: one module per record kind.
//!
//! Each renderer is a pure function from a record (plus the shared
//! [`RenderContext`]) to a LaTeX fragment. Fragments carry no trailing
//! separator; the assembler joins entries with the section's `mid`
//! template and wraps them with `begin`/`end`.

pub mod achievements;
pub mod education;
pub mod experience;
pub mod metadata;
pub mod profile;
pub mod project;
pub mod skills;

use std::cell::RefCell;

use chrono::NaiveDate;

use crate::config::icons::IconRegistry;
use crate::error::RenderError;

/// The section kinds the assembler knows how to order and render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    /// Profile links; always rendered first, not orderable.
    ProfileLink,
    Experience,
    Education,
    TechnicalSkill,
    Project,
    Achievement,
}

impl SectionKind {
    /// All kinds that may appear in a user-supplied ordering.
    pub const ORDERABLE: [Self; 5] = [
        Self::Experience,
        Self::Education,
        Self::TechnicalSkill,
        Self::Project,
        Self::Achievement,
    ];

    /// Stable config key for this kind (template table, `meta.order`).
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::ProfileLink => "profile_link",
            Self::Experience => "experience",
            Self::Education => "education",
            Self::TechnicalSkill => "technical_skill",
            Self::Project => "project",
            Self::Achievement => "achievement",
        }
    }

    /// Parse a config key back into a kind.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "profile_link" => Some(Self::ProfileLink),
            "experience" => Some(Self::Experience),
            "education" => Some(Self::Education),
            "technical_skill" => Some(Self::TechnicalSkill),
            "project" => Some(Self::Project),
            "achievement" => Some(Self::Achievement),
            _ => None,
        }
    }
}

/// Renderer behavior switches, threaded through every render call.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Date display format for dated entries.
    pub date_format: String,
    /// Wrap the employer name in `\href{website}{company}`.
    pub link_website: bool,
    /// Render the per-entry summary paragraph of work entries.
    pub show_summary: bool,
    /// Escape skill keywords. Off by default: keywords may already carry
    /// markup.
    pub escape_keywords: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            date_format: "%b %Y".to_string(),
            link_website: false,
            show_summary: false,
            escape_keywords: false,
        }
    }
}

/// Per-build rendering state shared by all section renderers.
///
/// Owns the custom-color-command accumulator, scoping it to one document
/// build: consecutive builds in the same process each construct a fresh
/// context, so no commands leak across documents.
#[derive(Debug)]
pub struct RenderContext<'a> {
    /// Icon registry for profile-link resolution.
    pub registry: &'a IconRegistry,
    /// Behavior switches.
    pub options: RenderOptions,
    /// Color-definition commands collected while rendering profile links;
    /// replayed by the metadata renderer. Duplicates are harmless (the
    /// markup tolerates redefinition).
    colors: RefCell<Vec<String>>,
}

impl<'a> RenderContext<'a> {
    /// Create a context for one document build.
    #[must_use]
    pub fn new(registry: &'a IconRegistry, options: RenderOptions) -> Self {
        Self {
            registry,
            options,
            colors: RefCell::new(Vec::new()),
        }
    }

    /// Record a custom color command for the metadata block.
    pub fn push_color_command(&self, command: &str) {
        self.colors.borrow_mut().push(command.to_string());
    }

    /// The commands accumulated so far, in insertion order.
    #[must_use]
    pub fn color_commands(&self) -> Vec<String> {
        self.colors.borrow().clone()
    }
}

/// Parse a `YYYY-MM-DD` date field, naming the offending record kind and
/// field on failure.
///
/// # Errors
///
/// Returns [`RenderError::DateParse`] when the value does not parse.
pub fn parse_date(
    section: &'static str,
    field: &'static str,
    value: &str,
) -> Result<NaiveDate, RenderError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| RenderError::DateParse {
        section,
        field,
        value: value.to_string(),
    })
}

/// Format a `start to end` date range with the configured display format.
pub(crate) fn format_range(start: NaiveDate, end: NaiveDate, format: &str) -> String {
    format!("{} to {}", start.format(format), end.format(format))
}

/// Render a highlights list as an `itemize` environment.
///
/// Every kind with an optional highlights list emits the container even
/// when the list is empty: the downstream markup expects balanced
/// environment delimiters.
pub(crate) fn render_highlights(highlights: &[String]) -> String {
    let items: String = highlights
        .iter()
        .map(|h| format!("\t\\item {}\n", crate::escape::escape(h)))
        .collect();
    format!("\\begin{{itemize}}\n{items}\\end{{itemize}}\n")
}
