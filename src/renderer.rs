//! The Markdown renderer: text in, HTML fragment out.

use crate::stages::{assemble, block, code_fence, escape, inline, preprocess};
use crate::theme::Theme;
use crate::types::HeadingLevel;

/// Per-call rendering options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Effective level a single `#` heading is styled as
    pub base_level: HeadingLevel,
    pub theme: Theme,
}

impl RenderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base heading level; values outside `1..=6` are clamped.
    pub fn with_base_level(mut self, level: i64) -> Self {
        self.base_level = HeadingLevel::clamped(level);
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }
}

/// Renders the site's Markdown dialect to HTML.
///
/// Rendering is a pure function of the input and the options. A renderer can
/// be shared between threads and called any number of times.
#[derive(Debug, Clone, Default)]
pub struct MarkdownRenderer {
    options: RenderOptions,
}

impl MarkdownRenderer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Render `text` to an HTML fragment.
    ///
    /// Empty or whitespace-only input yields an empty string. Malformed markup is
    /// never rejected; whatever no stage recognizes ends up as escaped paragraph text.
    pub fn render(&self, text: &str) -> String {
        render_with_options(text, &self.options)
    }

    /// Like [`render`](Self::render), treating `None` as empty input.
    pub fn render_optional(&self, text: Option<&str>) -> String {
        text.map(|t| self.render(t)).unwrap_or_default()
    }
}

/// Render with default options.
pub fn render(text: &str) -> String {
    MarkdownRenderer::default().render(text)
}

pub fn render_with_options(text: &str, options: &RenderOptions) -> String {
    let theme = &options.theme;

    let normalized = preprocess::normalize(text);
    if normalized.is_empty() {
        return String::new();
    }

    let (extracted, code_blocks) = code_fence::extract(&normalized, theme);
    let escaped = escape::escape_html(&extracted);
    let inlined = inline::apply(&escaped, theme);
    let blocks = block::apply(&inlined, options.base_level, theme);
    let html = assemble::assemble(&blocks, theme);
    let html = code_fence::restore(&html, &code_blocks);

    log::debug!("Rendered {} bytes of Markdown to {} bytes of HTML", normalized.len(), html.len());
    html
}

pub fn render_optional(text: Option<&str>, options: &RenderOptions) -> String {
    text.map(|t| render_with_options(t, options)).unwrap_or_default()
}
