//! Line-oriented assembly of paragraphs and lists.
//!
//! By the time this stage runs, headings and blockquotes are single lines of
//! HTML and code blocks are placeholder lines. Every line is classified first
//! and then acted on, so the first matching kind wins.

use crate::theme::Theme;
use crate::utils::regex_cache::{
    CODE_SENTINEL_LINE_REGEX, ORDERED_ITEM_REGEX, RENDERED_BLOCK_LINE_REGEX, UNORDERED_ITEM_REGEX,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Ordered,
    Unordered,
}

/// What a single line of the transformed document is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    Blank,
    /// A heading or blockquote already rendered by the block stage, or a code placeholder
    Block(&'a str),
    OrderedItem { number: &'a str, text: &'a str },
    UnorderedItem { text: &'a str },
    Text(&'a str),
}

impl<'a> LineKind<'a> {
    pub fn classify(line: &'a str) -> Self {
        if line.trim().is_empty() {
            return LineKind::Blank;
        }
        if RENDERED_BLOCK_LINE_REGEX.is_match(line) || CODE_SENTINEL_LINE_REGEX.is_match(line) {
            return LineKind::Block(line.trim());
        }
        if let Some(caps) = ORDERED_ITEM_REGEX.captures(line) {
            let (Some(number), Some(text)) = (caps.get(1), caps.get(2)) else {
                return LineKind::Text(line.trim());
            };
            return LineKind::OrderedItem {
                number: number.as_str(),
                text: text.as_str().trim_end(),
            };
        }
        if let Some(text) = UNORDERED_ITEM_REGEX.captures(line).and_then(|caps| caps.get(1)) {
            return LineKind::UnorderedItem {
                text: text.as_str().trim_end(),
            };
        }
        LineKind::Text(line.trim())
    }
}

struct Assembler<'t> {
    theme: &'t Theme,
    out: Vec<String>,
    paragraph: Vec<String>,
    open_list: Option<ListKind>,
}

impl<'t> Assembler<'t> {
    fn new(theme: &'t Theme) -> Self {
        Self {
            theme,
            out: Vec::new(),
            paragraph: Vec::new(),
            open_list: None,
        }
    }

    fn flush_paragraph(&mut self) {
        if self.paragraph.is_empty() {
            return;
        }
        let joined = self.paragraph.join(" ");
        self.paragraph.clear();
        self.out
            .push(format!(r#"<p class="{}">{}</p>"#, self.theme.paragraph, joined));
    }

    fn close_list(&mut self) {
        match self.open_list.take() {
            Some(ListKind::Ordered) => self.out.push("</ol>".to_string()),
            Some(ListKind::Unordered) => self.out.push("</ul>".to_string()),
            None => {}
        }
    }

    /// Make sure a list of `kind` is open, closing a list of the other kind first.
    fn ensure_list(&mut self, kind: ListKind, start: Option<&str>) {
        if self.open_list == Some(kind) {
            return;
        }
        self.close_list();

        let open = match kind {
            ListKind::Unordered => format!(r#"<ul class="{}">"#, self.theme.unordered_list),
            ListKind::Ordered => {
                // Leading zeros are dropped; an unparsable number just omits `start`
                let start_attr = start
                    .and_then(|n| n.parse::<u64>().ok())
                    .filter(|&n| n != 1)
                    .map(|n| format!(r#" start="{n}""#))
                    .unwrap_or_default();
                format!(r#"<ol class="{}"{}>"#, self.theme.ordered_list, start_attr)
            }
        };
        self.out.push(open);
        self.open_list = Some(kind);
    }

    fn push_item(&mut self, text: &str) {
        self.out
            .push(format!(r#"<li class="{}">{}</li>"#, self.theme.list_item, text));
    }

    fn line(&mut self, kind: LineKind<'_>) {
        log::trace!("assemble: {kind:?}");
        match kind {
            LineKind::Blank => {
                self.flush_paragraph();
                self.close_list();
            }
            LineKind::Block(html) => {
                self.flush_paragraph();
                self.close_list();
                self.out.push(html.to_string());
            }
            LineKind::OrderedItem { number, text } => {
                self.flush_paragraph();
                self.ensure_list(ListKind::Ordered, Some(number));
                self.push_item(text);
            }
            LineKind::UnorderedItem { text } => {
                self.flush_paragraph();
                self.ensure_list(ListKind::Unordered, None);
                self.push_item(text);
            }
            LineKind::Text(text) => {
                self.close_list();
                self.paragraph.push(text.to_string());
            }
        }
    }

    fn finish(mut self) -> String {
        self.flush_paragraph();
        self.close_list();
        self.out.join("\n")
    }
}

/// Build the block structure of the document from its transformed lines.
pub fn assemble(text: &str, theme: &Theme) -> String {
    let mut assembler = Assembler::new(theme);
    for line in text.split('\n') {
        assembler.line(LineKind::classify(line));
    }
    assembler.finish()
}
