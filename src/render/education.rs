//! Education entry renderer.

use crate::config::resume::Education;
use crate::error::RenderError;
use crate::escape::escape;

use super::{RenderContext, format_range, parse_date, render_highlights};

/// Render one education entry as an `\Education` block with its highlights
/// list.
///
/// # Errors
///
/// Returns [`RenderError::DateParse`] if either date field is unparsable.
pub fn render(entry: &Education, ctx: &RenderContext<'_>) -> Result<String, RenderError> {
    let start = parse_date("education", "startDate", &entry.start_date)?;
    let end = parse_date("education", "endDate", &entry.end_date)?;

    Ok(format!(
        "\\Education\n{{{study_type}}}\n{{{location}}}\n{{{institution}}}\n{{{range}}}\n{highlights}",
        study_type = escape(&entry.study_type),
        location = escape(&entry.location),
        institution = escape(&entry.institution),
        range = format_range(start, end, &ctx.options.date_format),
        highlights = render_highlights(&entry.highlights),
    ))
}
