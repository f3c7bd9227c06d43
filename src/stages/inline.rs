//! Inline formatting: code spans, links and bold text.
//!
//! Runs on already escaped text. Each rendered code span and link is parked
//! behind an opaque token until the bold pass has finished, so a later pass
//! never matches inside markup an earlier one produced. Bold can wrap a whole
//! code span or link, but never opens inside one and closes outside it.

use crate::stages::escape::escape_attribute;
use crate::theme::Theme;
use crate::utils::regex_cache::{BOLD_REGEX, INLINE_CODE_REGEX, INLINE_LINK_REGEX, INLINE_TOKEN_REGEX};
use regex::Captures;

/// Rendered fragment waiting to be put back, with the escaped source it replaced
struct Parked {
    source: String,
    html: String,
}

#[derive(Default)]
struct Stash {
    parked: Vec<Parked>,
}

impl Stash {
    fn park(&mut self, source: &str, html: String) -> String {
        let token = format!("\u{E000}{}\u{E000}", self.parked.len());
        self.parked.push(Parked {
            source: source.to_string(),
            html,
        });
        token
    }

    fn restore_html(&self, text: &str) -> String {
        self.restore_with(text, |parked| &parked.html)
    }

    fn restore_source(&self, text: &str) -> String {
        self.restore_with(text, |parked| &parked.source)
    }

    fn restore_with(&self, text: &str, pick: impl Fn(&Parked) -> &String) -> String {
        INLINE_TOKEN_REGEX
            .replace_all(text, |caps: &Captures| {
                caps[1]
                    .parse::<usize>()
                    .ok()
                    .and_then(|index| self.parked.get(index))
                    .map_or_else(|| caps[0].to_string(), |parked| pick(parked).clone())
            })
            .into_owned()
    }
}

pub fn apply(text: &str, theme: &Theme) -> String {
    let mut stash = Stash::default();
    let text = code_spans(text, theme, &mut stash);
    let text = links(&text, theme, &mut stash);
    let text = bold(&text, theme);
    stash.restore_html(&text)
}

fn code_spans(text: &str, theme: &Theme, stash: &mut Stash) -> String {
    INLINE_CODE_REGEX
        .replace_all(text, |caps: &Captures| {
            let html = format!(r#"<code class="{}">{}</code>"#, theme.inline_code, &caps[1]);
            stash.park(&caps[0], html)
        })
        .into_owned()
}

fn links(text: &str, theme: &Theme, stash: &mut Stash) -> String {
    INLINE_LINK_REGEX
        .replace_all(text, |caps: &Captures| {
            // A code span inside the url goes back to its source text; the label keeps it rendered
            let href = escape_attribute(&stash.restore_source(&caps[2]));
            let label = stash.restore_html(&bold(&caps[1], theme));
            let html = format!(
                r#"<a href="{}" target="_blank" rel="noopener noreferrer" class="{}">{}</a>"#,
                href, theme.link, label
            );
            stash.park(&caps[0], html)
        })
        .into_owned()
}

fn bold(text: &str, theme: &Theme) -> String {
    BOLD_REGEX
        .replace_all(text, |caps: &Captures| {
            format!(r#"<strong class="{}">{}</strong>"#, theme.strong, &caps[1])
        })
        .into_owned()
}
