//! Project entry renderer.

use crate::config::resume::Project;
use crate::error::RenderError;
use crate::escape::escape;

use super::{RenderContext, format_range, parse_date, render_highlights};

/// Render one project entry as a `\Project` block with its highlights list.
///
/// The URL is passed through unescaped; keywords are joined with `, `.
///
/// # Errors
///
/// Returns [`RenderError::DateParse`] if either date field is unparsable.
pub fn render(entry: &Project, ctx: &RenderContext<'_>) -> Result<String, RenderError> {
    let start = parse_date("project", "startDate", &entry.start_date)?;
    let end = parse_date("project", "endDate", &entry.end_date)?;

    Ok(format!(
        "\\Project\n{{{name}}}\n{{{domain}}}\n{{{range}}}\n{{{url}}}\n{{{keywords}}}\n{highlights}",
        name = escape(&entry.name),
        domain = escape(&entry.kind),
        range = format_range(start, end, &ctx.options.date_format),
        url = entry.url,
        keywords = entry.keywords.join(", "),
        highlights = render_highlights(&entry.highlights),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::icons::IconRegistry;
    use crate::render::RenderOptions;

    fn entry() -> Project {
        Project {
            name: "Miss Direction".to_string(),
            description: "A mapping engine that misguides you".to_string(),
            keywords: vec!["GoogleMaps".to_string(), "Javascript".to_string()],
            highlights: vec!["Won award at AIHacks 2016".to_string()],
            start_date: "2016-08-24".to_string(),
            end_date: "2016-08-24".to_string(),
            url: "https://missdirection.example.com".to_string(),
            roles: vec!["Team lead".to_string()],
            entity: "Smoogle".to_string(),
            kind: "application".to_string(),
        }
    }

    #[test]
    fn renders_block() {
        let registry = IconRegistry::default();
        let ctx = RenderContext::new(&registry, RenderOptions::default());
        let fragment = render(&entry(), &ctx).unwrap();
        assert!(fragment.starts_with("\\Project\n{Miss Direction}\n{application}\n"));
        assert!(fragment.contains("{Aug 2016 to Aug 2016}"));
        assert!(fragment.contains("{https://missdirection.example.com}"));
        assert!(fragment.contains("{GoogleMaps, Javascript}"));
        assert!(fragment.contains("\\item Won award at AIHacks 2016"));
    }

    #[test]
    fn url_is_not_escaped() {
        let registry = IconRegistry::default();
        let ctx = RenderContext::new(&registry, RenderOptions::default());
        let mut e = entry();
        e.url = "https://example.com/a_b".to_string();
        let fragment = render(&e, &ctx).unwrap();
        assert!(fragment.contains("{https://example.com/a_b}"));
    }

    #[test]
    fn empty_highlights_still_emit_container() {
        let registry = IconRegistry::default();
        let ctx = RenderContext::new(&registry, RenderOptions::default());
        let mut e = entry();
        e.highlights.clear();
        let fragment = render(&e, &ctx).unwrap();
        assert!(fragment.contains("\\begin{itemize}\n\\end{itemize}\n"));
    }

    #[test]
    fn bad_date_names_project_section() {
        let registry = IconRegistry::default();
        let ctx = RenderContext::new(&registry, RenderOptions::default());
        let mut e = entry();
        e.start_date = "August 2016".to_string();
        let err = render(&e, &ctx).unwrap_err();
        assert!(matches!(
            err,
            RenderError::DateParse {
                section: "project",
                ..
            }
        ));
    }
}
