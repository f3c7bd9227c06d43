//! Render a small Markdown dialect to themed HTML fragments.
//!
//! ```
//! let html = inkmd_lib::render("Some **bold** text.");
//! assert!(html.contains("<strong"));
//! ```

pub mod config;
pub mod exit_codes;
pub mod renderer;
pub mod stages;
pub mod theme;
pub mod types;
pub mod utils;

// WASM module
#[cfg(feature = "wasm")]
pub mod wasm;

pub use crate::renderer::{MarkdownRenderer, RenderOptions, render, render_optional, render_with_options};
pub use crate::theme::{HeadingStyle, HeadingStyles, Theme};
pub use crate::types::HeadingLevel;
