//! Fenced code block extraction and restoration.
//!
//! Code blocks are pulled out before anything else touches the text and are
//! replaced by `%%%CODE_BLOCK_<n>%%%` placeholders. Their content is escaped
//! exactly once here; the placeholders pass untouched through every later
//! stage and are swapped back for the finished `<pre><code>` fragments last.

use crate::stages::escape::{escape_attribute, escape_html};
use crate::theme::Theme;
use crate::utils::regex_cache::{CODE_FENCE_REGEX, CODE_SENTINEL_REGEX};
use regex::Captures;

/// Rendered code blocks, indexed by placeholder number.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CodeBlockTable {
    blocks: Vec<String>,
}

impl CodeBlockTable {
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.blocks.get(index).map(String::as_str)
    }

    fn push(&mut self, html: String) -> usize {
        self.blocks.push(html);
        self.blocks.len() - 1
    }
}

pub fn sentinel(index: usize) -> String {
    format!("%%%CODE_BLOCK_{index}%%%")
}

/// Replace every fenced block in `text` with a placeholder on its own line.
pub fn extract(text: &str, theme: &Theme) -> (String, CodeBlockTable) {
    let mut table = CodeBlockTable::default();

    let replaced = CODE_FENCE_REGEX.replace_all(text, |caps: &Captures| {
        let language = caps.get(1).map(|m| m.as_str()).filter(|lang| !lang.is_empty());
        let body = caps.get(2).map_or("", |m| m.as_str());
        let body = body.strip_suffix('\n').unwrap_or(body);

        let index = table.push(render_block(body, language, theme));
        format!("\n{}\n", sentinel(index))
    });

    if !table.is_empty() {
        log::debug!("Extracted {} fenced code block(s)", table.len());
    }

    (replaced.into_owned(), table)
}

fn render_block(body: &str, language: Option<&str>, theme: &Theme) -> String {
    let language_attr = language
        .map(|lang| format!(r#" data-language="{}""#, escape_attribute(lang)))
        .unwrap_or_default();

    format!(
        r#"<pre class="{}"><code class="{}"{}>{}</code></pre>"#,
        theme.code_block,
        theme.code_block_code,
        language_attr,
        escape_html(body)
    )
}

/// Swap every placeholder in `html` for its stored fragment.
///
/// Placeholders without a table entry are left as they are.
pub fn restore(html: &str, table: &CodeBlockTable) -> String {
    if table.is_empty() {
        return html.to_string();
    }

    CODE_SENTINEL_REGEX
        .replace_all(html, |caps: &Captures| {
            let block = caps[1].parse::<usize>().ok().and_then(|index| table.get(index));
            match block {
                Some(block) => block.to_string(),
                None => {
                    log::debug!("No code block stored for placeholder {}", &caps[0]);
                    caps[0].to_string()
                }
            }
        })
        .into_owned()
}
