//! Visual theme: the CSS classes and decorative glyphs the renderer emits.
//!
//! The renderer never hard-codes presentation. Every element it produces takes
//! its `class` attribute from a [`Theme`], and each of the six heading levels has
//! its own [`HeadingStyle`]. The defaults target a dark site with Tailwind
//! utility classes; any field can be replaced from `inkmd.toml`.

use crate::types::HeadingLevel;
use serde::{Deserialize, Serialize};

/// Presentation of one effective heading level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(default, rename_all = "kebab-case")]
pub struct HeadingStyle {
    /// Classes applied to the `<span>` wrapping the heading text
    pub class: String,
    /// Decorative glyph placed before the heading text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub glyph: Option<String>,
}

impl HeadingStyle {
    fn new(class: &str, glyph: Option<&str>) -> Self {
        Self {
            class: class.to_string(),
            glyph: glyph.map(str::to_string),
        }
    }
}

impl Default for HeadingStyle {
    fn default() -> Self {
        Self::new("", None)
    }
}

/// Heading styles keyed by effective level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(default)]
pub struct HeadingStyles {
    pub h1: HeadingStyle,
    pub h2: HeadingStyle,
    pub h3: HeadingStyle,
    pub h4: HeadingStyle,
    pub h5: HeadingStyle,
    pub h6: HeadingStyle,
}

impl HeadingStyles {
    pub fn get(&self, level: HeadingLevel) -> &HeadingStyle {
        match level.index() {
            0 => &self.h1,
            1 => &self.h2,
            2 => &self.h3,
            3 => &self.h4,
            4 => &self.h5,
            _ => &self.h6,
        }
    }
}

impl Default for HeadingStyles {
    fn default() -> Self {
        Self {
            h1: HeadingStyle::new(
                "text-4xl md:text-5xl font-extrabold tracking-tight bg-gradient-to-r from-violet-400 via-fuchsia-400 to-pink-500 bg-clip-text text-transparent",
                Some("✦"),
            ),
            h2: HeadingStyle::new(
                "text-3xl md:text-4xl font-bold bg-gradient-to-r from-cyan-400 to-blue-500 bg-clip-text text-transparent",
                Some("▹"),
            ),
            h3: HeadingStyle::new("text-2xl md:text-3xl font-semibold text-violet-300", None),
            h4: HeadingStyle::new("text-xl md:text-2xl font-semibold text-cyan-300", None),
            h5: HeadingStyle::new("text-lg font-medium text-slate-200", None),
            h6: HeadingStyle::new("text-base font-medium uppercase tracking-widest text-slate-400", None),
        }
    }
}

/// Class strings for every element the renderer can produce.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(default, rename_all = "kebab-case")]
pub struct Theme {
    /// `<p>` blocks
    pub paragraph: String,
    /// `<ul>` containers
    pub unordered_list: String,
    /// `<ol>` containers
    pub ordered_list: String,
    /// `<li>` items of either list kind
    pub list_item: String,
    /// `<blockquote>` lines
    pub blockquote: String,
    /// Inline `<code>` spans
    pub inline_code: String,
    /// `<pre>` wrapper of fenced code blocks
    pub code_block: String,
    /// `<code>` element inside fenced code blocks
    pub code_block_code: String,
    /// `<a>` links
    pub link: String,
    /// `<strong>` spans
    pub strong: String,
    /// Per-level heading styles
    pub headings: HeadingStyles,
}

impl Theme {
    pub fn heading(&self, level: HeadingLevel) -> &HeadingStyle {
        self.headings.get(level)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            paragraph: "mb-4 leading-relaxed text-slate-300".to_string(),
            unordered_list: "mb-4 ml-6 list-disc space-y-1 text-slate-300".to_string(),
            ordered_list: "mb-4 ml-6 list-decimal space-y-1 text-slate-300".to_string(),
            list_item: "pl-1".to_string(),
            blockquote: "my-4 border-l-4 border-violet-500 pl-4 italic text-slate-400".to_string(),
            inline_code: "rounded bg-slate-800 px-1.5 py-0.5 font-mono text-sm text-pink-300".to_string(),
            code_block: "my-4 overflow-x-auto rounded-lg border border-slate-700 bg-slate-900 p-4".to_string(),
            code_block_code: "font-mono text-sm text-slate-200".to_string(),
            link: "text-cyan-400 underline decoration-dotted underline-offset-4 hover:text-cyan-300".to_string(),
            strong: "font-semibold text-white".to_string(),
            headings: HeadingStyles::default(),
        }
    }
}
