//! Whole-document block transforms: ATX headings and blockquote lines.
//!
//! Each matching line is rewritten in place into a single line of HTML, which
//! the assembly stage later recognizes and emits verbatim.

use crate::theme::Theme;
use crate::types::HeadingLevel;
use crate::utils::regex_cache::{ATX_HEADING_REGEX, BLOCKQUOTE_REGEX};
use regex::Captures;

pub fn apply(text: &str, base_level: HeadingLevel, theme: &Theme) -> String {
    let text = headings(text, base_level, theme);
    blockquotes(&text, theme)
}

/// The `<hN>` tag follows the number of `#` markers as written, while the
/// visual style follows the level shifted by `base_level`. With a base level
/// of 3, `# Intro` becomes an `<h1>` that looks like a third-level heading.
fn headings(text: &str, base_level: HeadingLevel, theme: &Theme) -> String {
    ATX_HEADING_REGEX
        .replace_all(text, |caps: &Captures| {
            let markers = caps[1].len();
            let effective = base_level.offset_by_markers(markers);
            let style = theme.heading(effective);

            let glyph = style
                .glyph
                .as_deref()
                .map(|g| format!(r#"<span class="heading-glyph" aria-hidden="true">{g}</span> "#))
                .unwrap_or_default();

            format!(
                r#"<h{markers}><span class="{}">{}{}</span></h{markers}>"#,
                style.class, glyph, &caps[2]
            )
        })
        .into_owned()
}

fn blockquotes(text: &str, theme: &Theme) -> String {
    BLOCKQUOTE_REGEX
        .replace_all(text, |caps: &Captures| {
            format!(r#"<blockquote class="{}">{}</blockquote>"#, theme.blockquote, &caps[1])
        })
        .into_owned()
}
