//! Document metadata renderer: author identity, theme colors, summary.

use crate::config::resume::{Basics, ColorScheme};
use crate::escape::escape;

use super::RenderContext;

/// Render the metadata block: identity newcommands, the two-color theme
/// declaration, any custom color commands accumulated while rendering
/// profile links, the derived color shades, and the summary slot.
///
/// The summary slot is always emitted — an explicitly empty
/// `\SummaryText` command when no summary is supplied — so the master
/// document can reference it unconditionally.
#[must_use]
pub fn render(basics: &Basics, colors: &ColorScheme, ctx: &RenderContext<'_>) -> String {
    let mut out = format!(
        "\\newcommand{{\\AuthorName}}{{{name}}}\n\
         \\newcommand{{\\PositionName}}{{{position}}}\n\
         \\newcommand{{\\email}}{{{email}}}\n\
         \\newcommand{{\\phone}}{{{phone}}}\n\
         \\newcommand{{\\PhoneFormatted}}{{{phone_fmt}}}\n\
         \n\
         \\newcommand{{\\maincolor}}{{{main}}}\n\
         \\newcommand{{\\seccolor}}{{{secondary}}}\n",
        name = escape(&basics.name),
        position = escape(&basics.label),
        email = escape(&basics.email),
        phone = escape(&basics.phone),
        phone_fmt = escape(&basics.phone_format),
        main = colors.main,
        secondary = colors.secondary,
    );

    for command in ctx.color_commands() {
        out.push_str(&command);
        out.push('\n');
    }

    out.push_str(
        "\n\
         \\newcommand{\\MainColorDark}{\\maincolor800}\n\
         \\newcommand{\\SecColorDark}{\\seccolor800}\n\
         \\newcommand{\\SecColorLight}{\\seccolor500}\n\
         \\renewcommand{\\maketitle}{\\ResumeHeader}\n\
         \n",
    );

    match basics.summary.as_deref().map(str::trim) {
        Some(summary) if !summary.is_empty() => {
            out.push_str(&format!("\\newcommand{{\\SummaryText}}\n{{{}}}\n", escape(summary)));
        }
        _ => out.push_str("\\newcommand{\\SummaryText}{ }\n"),
    }

    out
}
