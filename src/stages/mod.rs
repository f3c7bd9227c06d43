//! The render pipeline, one module per stage.
//!
//! Stages must run in this order:
//!
//! 1. [`preprocess`] normalizes whitespace and line endings
//! 2. [`code_fence::extract`] replaces fenced code with placeholders
//! 3. [`escape`] neutralizes `&`, `<` and `>`
//! 4. [`inline`] renders code spans, links and bold text
//! 5. [`block`] renders headings and blockquotes
//! 6. [`assemble`] groups lines into paragraphs and lists
//! 7. [`code_fence::restore`] puts the code blocks back

pub mod assemble;
pub mod block;
pub mod code_fence;
pub mod escape;
pub mod inline;
pub mod preprocess;
