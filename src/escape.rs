//! Escaping of free text for inclusion in LaTeX markup.

/// Escape LaTeX-reserved characters in `text` so the result can be embedded
/// in a document verbatim.
///
/// Applied to names, titles, summaries, and highlight strings before
/// template substitution. Never applied to URLs or to values that are
/// themselves markup commands (a custom color command, for instance).
///
/// # Examples
///
/// ```
/// use resumake::escape::escape;
///
/// assert_eq!(escape("R&D"), "R\\&D");
/// assert_eq!(escape("90% coverage"), "90\\% coverage");
/// assert_eq!(escape("plain text"), "plain text");
/// ```
#[must_use]
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("\\&"),
            '%' => out.push_str("\\%"),
            '$' => out.push_str("\\$"),
            '#' => out.push_str("\\#"),
            '_' => out.push_str("\\_"),
            '{' => out.push_str("\\{"),
            '}' => out.push_str("\\}"),
            '~' => out.push_str("\\textasciitilde{}"),
            '^' => out.push_str("\\textasciicircum{}"),
            '\\' => out.push_str("\\textbackslash{}"),
            '[' => out.push_str("{[}"),
            ']' => out.push_str("{]}"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_reserved_characters() {
        assert_eq!(escape("a&b"), "a\\&b");
        assert_eq!(escape("100%"), "100\\%");
        assert_eq!(escape("#1"), "\\#1");
        assert_eq!(escape("snake_case"), "snake\\_case");
        assert_eq!(escape("{braces}"), "\\{braces\\}");
        assert_eq!(escape("$5"), "\\$5");
    }

    #[test]
    fn escapes_special_command_characters() {
        assert_eq!(escape("~"), "\\textasciitilde{}");
        assert_eq!(escape("^"), "\\textasciicircum{}");
        assert_eq!(escape("\\"), "\\textbackslash{}");
    }

    #[test]
    fn escapes_brackets() {
        assert_eq!(escape("[opt]"), "{[}opt{]}");
    }

    #[test]
    fn plain_text_unchanged() {
        assert_eq!(escape("Acme Corp 2020"), "Acme Corp 2020");
    }

    #[test]
    fn idempotent_on_plain_text() {
        let x = "Senior Engineer with 10 years of experience";
        assert_eq!(escape(&escape(x)), escape(x));
    }

    #[test]
    fn empty_input() {
        assert_eq!(escape(""), "");
    }
}
