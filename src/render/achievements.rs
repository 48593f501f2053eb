//! Achievement entry renderer.

use crate::config::resume::Achievement;
use crate::escape::escape;

/// Render one achievement as a single `\item` line with an escaped title.
#[must_use]
pub fn render(entry: &Achievement) -> String {
    format!("\t\\item {}", escape(entry.title.trim()))
}
