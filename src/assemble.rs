//! Document assembly: section ordering, entry joining, content/meta split.
//!
//! Renderers emit self-contained fragments; this module owns the
//! separators. Each section is wrapped as `begin + entries joined with mid
//! + end`, so the last entry never carries a trailing separator, only its
//! terminating newline.

use crate::config::resume::{ColorScheme, Resume};
use crate::config::templates::{SectionTemplates, TemplateTriple};
use crate::error::{ConfigError, RenderError, ResumakeError};
use crate::logging::Logger;
use crate::render::{
    RenderContext, SectionKind, achievements, education, experience, metadata, profile, project,
    skills,
};

/// The two markup files produced by assembly.
#[derive(Debug, Clone)]
pub struct AssembledDocument {
    /// Section content (`content.tex`).
    pub content: String,
    /// Metadata newcommands plus the profile-link section (`meta.tex`).
    pub meta: String,
}

/// Resolve the section order from document metadata, falling back to the
/// default order.
///
/// # Errors
///
/// Returns [`ConfigError::UnknownSection`] when the ordering names an
/// identifier that is not an orderable section kind. This is fatal at
/// build start, before any rendering or file I/O.
pub fn resolve_order(resume: &Resume) -> Result<Vec<SectionKind>, ConfigError> {
    let Some(order) = resume.meta.as_ref().and_then(|m| m.order.as_ref()) else {
        return Ok(SectionKind::ORDERABLE.to_vec());
    };

    order
        .iter()
        .map(|name| {
            SectionKind::from_key(name)
                .filter(|kind| SectionKind::ORDERABLE.contains(kind))
                .ok_or_else(|| ConfigError::UnknownSection(name.clone()))
        })
        .collect()
}

/// Wrap rendered entries with a section's template triple.
///
/// Empty `begin`/`mid`/`end` pieces are simply omitted. An empty entry
/// list still produces the begin/end wrapper, keeping the fragment
/// syntactically balanced.
#[must_use]
pub fn assemble_section(triple: &TemplateTriple, fragments: &[String]) -> String {
    let mut out = String::new();
    if !triple.begin.is_empty() {
        out.push_str(&triple.begin);
        out.push('\n');
    }
    for (i, fragment) in fragments.iter().enumerate() {
        if i > 0 && !triple.mid.is_empty() {
            out.push_str(&triple.mid);
            out.push('\n');
        }
        out.push_str(fragment);
        if !fragment.ends_with('\n') {
            out.push('\n');
        }
    }
    if !triple.end.is_empty() {
        out.push_str(&triple.end);
        out.push('\n');
    }
    out
}

/// Assemble the full document: validate the order, render every section,
/// and split the result into content and metadata files.
///
/// The profile-link section is rendered first (it feeds the metadata
/// block's custom color commands) and lands in the metadata file together
/// with the identity block; it is never subject to the user order.
///
/// # Errors
///
/// Returns a [`ConfigError`] for an invalid ordering and a
/// [`RenderError`] for an unparsable date. Unknown profile networks are
/// logged as warnings and omitted, never escalated.
pub fn assemble(
    resume: &Resume,
    ctx: &RenderContext<'_>,
    templates: &SectionTemplates,
    log: &Logger,
) -> Result<AssembledDocument, ResumakeError> {
    let order = resolve_order(resume)?;

    let profile_section = assemble_profiles(resume, ctx, templates, log);

    let colors = resume
        .meta
        .as_ref()
        .and_then(|m| m.colors.clone())
        .unwrap_or_default();
    let meta_block = metadata::render(&resume.basics, &colors, ctx);
    let meta = format!("{meta_block}\n{profile_section}");

    let mut content = String::new();
    for kind in order {
        let fragments = render_section(kind, resume, ctx)?;
        content.push_str(&assemble_section(&templates.lookup(kind), &fragments));
        log.debug(&format!("assembled section: {}", kind.key()));
    }

    Ok(AssembledDocument { content, meta })
}

/// Render the profile-link section, skipping entries whose network has no
/// registry descriptor.
fn assemble_profiles(
    resume: &Resume,
    ctx: &RenderContext<'_>,
    templates: &SectionTemplates,
    log: &Logger,
) -> String {
    let mut fragments = Vec::new();
    for link in &resume.basics.profiles {
        match profile::render(link, ctx) {
            Ok(fragment) => fragments.push(fragment),
            Err(e) => log.warn(&format!("{e}; skipping entry")),
        }
    }
    assemble_section(&templates.lookup(SectionKind::ProfileLink), &fragments)
}

/// Render all entries of one orderable section kind.
fn render_section(
    kind: SectionKind,
    resume: &Resume,
    ctx: &RenderContext<'_>,
) -> Result<Vec<String>, RenderError> {
    match kind {
        SectionKind::Experience => resume
            .work
            .iter()
            .map(|e| experience::render(e, ctx))
            .collect(),
        SectionKind::Education => resume
            .education
            .iter()
            .map(|e| education::render(e, ctx))
            .collect(),
        SectionKind::Project => resume
            .projects
            .iter()
            .map(|p| project::render(p, ctx))
            .collect(),
        SectionKind::TechnicalSkill => {
            Ok(resume.skills.iter().map(|s| skills::render(s, ctx)).collect())
        }
        SectionKind::Achievement => {
            Ok(resume.awards.iter().map(achievements::render).collect())
        }
        // Profile links are handled by assemble_profiles; never ordered.
        SectionKind::ProfileLink => Ok(Vec::new()),
    }
}
