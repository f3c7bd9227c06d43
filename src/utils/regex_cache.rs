//! Compiled regular expressions used by the render stages.
//!
//! Every pattern is compiled once on first use and shared read-only afterwards.
//! Block-level patterns assume line endings were already normalized to `\n`.

use regex::Regex;
use std::sync::LazyLock;

// Fenced code block: optional info string on the opening line (first word is
// the language, the rest is ignored), then a non-greedy body up to the next
// triple backtick.
pub static CODE_FENCE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```(?:([A-Za-z0-9_+#.\-]*)(?:[ ]+[^`\n]*)?\n)?(.*?)```").unwrap());

// Placeholder left behind for an extracted code block
pub static CODE_SENTINEL_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"%%%CODE_BLOCK_(\d+)%%%").unwrap());

// A line holding nothing but a placeholder
pub static CODE_SENTINEL_LINE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*%%%CODE_BLOCK_\d+%%%\s*$").unwrap());

// Inline patterns
pub static INLINE_CODE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`([^`\n]+)`").unwrap());
pub static INLINE_LINK_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]\n]+)\]\(([^)\s]+)\)").unwrap());
// Token standing in for a rendered code span or link during the inline passes
pub static INLINE_TOKEN_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\x{E000}(\d+)\x{E000}").unwrap());
pub static BOLD_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*([^\n]+?)\*\*").unwrap());

// Block patterns. `>` is matched in its escaped form since escaping runs first.
pub static ATX_HEADING_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ ]{0,3}(#{1,6})[ ]*(\S.*?)[ ]*$").unwrap());
pub static BLOCKQUOTE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^[ ]{0,3}&gt;[ ]?(.*?)[ ]*$").unwrap());

// Lines produced by the block stage
pub static RENDERED_BLOCK_LINE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*<(?:h[1-6]|blockquote)[\s>]").unwrap());

// List items
pub static ORDERED_ITEM_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*(\d+)\.\s+(\S.*)$").unwrap());
pub static UNORDERED_ITEM_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*[-*+]\s+(\S.*)$").unwrap());
