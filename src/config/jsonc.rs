//! Generic structured-config loading: JSON with comments.
//!
//! Resume documents are authored as `.jsonc`; registry and template config
//! files are plain JSON. Both go through [`load`], which strips `//` and
//! `/* */` comments (string-literal aware) before handing the text to
//! [`serde_json`].

use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::ConfigError;

/// Read `path` and deserialize it, tolerating JSONC comments.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] if the file cannot be read and
/// [`ConfigError::Parse`] if the stripped content is not valid JSON for `T`.
pub fn load<T: DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&strip_comments(&content)).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Remove `//` line comments and `/* */` block comments.
///
/// Comment markers inside string literals are left alone. Stripped spans are
/// replaced with spaces so serde_json error positions stay meaningful.
#[must_use]
pub fn strip_comments(input: &str) -> String {
    enum State {
        Code,
        Str,
        StrEscape,
        Line,
        Block,
        BlockStar,
    }

    let mut out = String::with_capacity(input.len());
    let mut state = State::Code;
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        match state {
            State::Code => match c {
                '"' => {
                    state = State::Str;
                    out.push(c);
                }
                '/' => match chars.peek() {
                    Some('/') => {
                        chars.next();
                        state = State::Line;
                        out.push_str("  ");
                    }
                    Some('*') => {
                        chars.next();
                        state = State::Block;
                        out.push_str("  ");
                    }
                    _ => out.push(c),
                },
                _ => out.push(c),
            },
            State::Str => {
                out.push(c);
                match c {
                    '\\' => state = State::StrEscape,
                    '"' => state = State::Code,
                    _ => {}
                }
            }
            State::StrEscape => {
                out.push(c);
                state = State::Str;
            }
            State::Line => {
                if c == '\n' {
                    state = State::Code;
                    out.push(c);
                } else {
                    out.push(' ');
                }
            }
            State::Block => {
                if c == '*' {
                    state = State::BlockStar;
                }
                out.push(if c == '\n' { '\n' } else { ' ' });
            }
            State::BlockStar => {
                state = match c {
                    '/' => State::Code,
                    '*' => State::BlockStar,
                    _ => State::Block,
                };
                out.push(if c == '\n' { '\n' } else { ' ' });
            }
        }
    }
    out
}
