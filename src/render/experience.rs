//! Work-history entry renderer.

use crate::config::resume::Experience;
use crate::error::RenderError;
use crate::escape::escape;

use super::{RenderContext, format_range, parse_date, render_highlights};

/// Render one work entry as a `\Experience` block with its highlights list.
///
/// # Errors
///
/// Returns [`RenderError::DateParse`] if either date field is unparsable.
pub fn render(entry: &Experience, ctx: &RenderContext<'_>) -> Result<String, RenderError> {
    let start = parse_date("experience", "startDate", &entry.start_date)?;
    let end = parse_date("experience", "endDate", &entry.end_date)?;

    let company = escape(&entry.company);
    let work_place = if ctx.options.link_website && !entry.website.is_empty() {
        format!("\\href{{{}}}{{{company}}}", entry.website)
    } else {
        company
    };

    let summary = match entry.summary.as_deref().map(str::trim) {
        Some(text) if ctx.options.show_summary && !text.is_empty() => {
            format!("{}\n", escape(text))
        }
        _ => String::new(),
    };

    Ok(format!(
        "\\Experience\n{{{position}}}\n{{{location}}}\n{{{work_place}}}\n{{{range}}}\n{summary}{highlights}",
        position = escape(&entry.position),
        location = escape(&entry.location),
        range = format_range(start, end, &ctx.options.date_format),
        highlights = render_highlights(&entry.highlights),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::icons::IconRegistry;
    use crate::render::RenderOptions;

    fn entry() -> Experience {
        Experience {
            company: "Acme".to_string(),
            position: "Engineer".to_string(),
            location: "Remote".to_string(),
            website: "https://acme.example".to_string(),
            start_date: "2020-01-01".to_string(),
            end_date: "2021-01-01".to_string(),
            highlights: vec!["Did X".to_string()],
            summary: None,
        }
    }

    fn ctx(registry: &IconRegistry, options: RenderOptions) -> RenderContext<'_> {
        RenderContext::new(registry, options)
    }

    #[test]
    fn renders_block_with_formatted_dates() {
        let registry = IconRegistry::default();
        let fragment = render(&entry(), &ctx(&registry, RenderOptions::default())).unwrap();
        assert!(fragment.starts_with("\\Experience\n{Engineer}\n{Remote}\n{Acme}\n"));
        assert!(fragment.contains("{Jan 2020 to Jan 2021}"));
        assert!(fragment.contains("\\item Did X"));
        assert!(fragment.ends_with("\\end{itemize}\n"));
    }

    #[test]
    fn link_website_wraps_company() {
        let registry = IconRegistry::default();
        let options = RenderOptions {
            link_website: true,
            ..RenderOptions::default()
        };
        let fragment = render(&entry(), &ctx(&registry, options)).unwrap();
        assert!(fragment.contains("{\\href{https://acme.example}{Acme}}"));
    }

    #[test]
    fn empty_highlights_still_emit_container() {
        let registry = IconRegistry::default();
        let mut e = entry();
        e.highlights.clear();
        let fragment = render(&e, &ctx(&registry, RenderOptions::default())).unwrap();
        assert!(fragment.contains("\\begin{itemize}\n\\end{itemize}\n"));
    }

    #[test]
    fn bad_start_date_is_fatal() {
        let registry = IconRegistry::default();
        let mut e = entry();
        e.start_date = "not-a-date".to_string();
        let err = render(&e, &ctx(&registry, RenderOptions::default())).unwrap_err();
        assert!(matches!(err, RenderError::DateParse { field: "startDate", .. }));
    }

    #[test]
    fn end_before_start_is_not_validated() {
        let registry = IconRegistry::default();
        let mut e = entry();
        e.start_date = "2021-01-01".to_string();
        e.end_date = "2020-01-01".to_string();
        assert!(render(&e, &ctx(&registry, RenderOptions::default())).is_ok());
    }

    #[test]
    fn summary_hidden_unless_enabled() {
        let registry = IconRegistry::default();
        let mut e = entry();
        e.summary = Some("Shipped the flagship product.".to_string());

        let hidden = render(&e, &ctx(&registry, RenderOptions::default())).unwrap();
        assert!(!hidden.contains("Shipped the flagship product."));

        let options = RenderOptions {
            show_summary: true,
            ..RenderOptions::default()
        };
        let shown = render(&e, &ctx(&registry, options)).unwrap();
        assert!(shown.contains("Shipped the flagship product.\n"));
    }

    #[test]
    fn company_is_escaped() {
        let registry = IconRegistry::default();
        let mut e = entry();
        e.company = "AT&T".to_string();
        let fragment = render(&e, &ctx(&registry, RenderOptions::default())).unwrap();
        assert!(fragment.contains("{AT\\&T}"));
    }
}
