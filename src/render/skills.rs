//! Skill group renderer.

use crate::config::resume::Skill;
use crate::escape::escape;

use super::RenderContext;

/// Render one skill group as an `\ItemSkill` line.
///
/// Keywords are joined with `, \ ` (a LaTeX spacing control after the
/// comma). Keyword escaping follows `RenderOptions::escape_keywords`:
/// off by default, keywords are treated as possibly-formatted strings.
#[must_use]
pub fn render(entry: &Skill, ctx: &RenderContext<'_>) -> String {
    let keywords: Vec<String> = if ctx.options.escape_keywords {
        entry.keywords.iter().map(|k| escape(k)).collect()
    } else {
        entry.keywords.clone()
    };

    format!(
        "\\ItemSkill{{{name}}} {items}",
        name = escape(&entry.name),
        items = keywords.join(", \\ "),
    )
}
