//! Input normalization that runs before any Markdown is recognized.

use std::borrow::Cow;

const BYTE_ORDER_MARK: char = '\u{FEFF}';
const NO_BREAK_SPACE: char = '\u{00A0}';

/// Normalize raw input so later stages only ever see `\n` line endings,
/// plain spaces and no surrounding whitespace.
///
/// - byte-order marks are dropped and non-breaking spaces become spaces
/// - each tab becomes two spaces
/// - `\r\n` and lone `\r` become `\n`
/// - the whole document is trimmed
pub fn normalize(input: &str) -> Cow<'_, str> {
    let needs_rewrite = input
        .chars()
        .any(|c| matches!(c, BYTE_ORDER_MARK | NO_BREAK_SPACE | '\t' | '\r'));

    if !needs_rewrite {
        return Cow::Borrowed(input.trim());
    }

    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            BYTE_ORDER_MARK => {}
            NO_BREAK_SPACE => out.push(' '),
            '\t' => out.push_str("  "),
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                out.push('\n');
            }
            _ => out.push(c),
        }
    }

    let trimmed = out.trim();
    if trimmed.len() == out.len() {
        Cow::Owned(out)
    } else {
        Cow::Owned(trimmed.to_string())
    }
}
