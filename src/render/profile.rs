//! Profile-link renderer.

use crate::config::resume::ProfileLink;
use crate::error::RenderError;
use crate::escape::escape;

use super::RenderContext;

/// Render one profile link using its registry descriptor.
///
/// The username is escaped; the URL and the network identifier are not.
/// If the descriptor declares a custom color command it is recorded on the
/// context for the metadata block.
///
/// # Errors
///
/// Returns [`RenderError::IconNotFound`] when the network has no registry
/// entry. Callers log a warning and omit the entry; one unknown network
/// never aborts the document.
pub fn render(link: &ProfileLink, ctx: &RenderContext<'_>) -> Result<String, RenderError> {
    let descriptor = ctx.registry.resolve(&link.network)?;

    if let Some(command) = &descriptor.custom_color_command {
        ctx.push_color_command(command);
    }

    Ok(format!(
        "{command}\n{{{color}}}\n{{{network}}}\n{{{url}}}\n{{{username}}}",
        command = descriptor.command,
        color = descriptor.color,
        network = link.network,
        url = link.url,
        username = escape(&link.username),
    ))
}
