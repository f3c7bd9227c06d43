//! WASM bindings so pages can render Markdown in the browser.

use wasm_bindgen::prelude::*;

use crate::renderer::{RenderOptions, render_with_options};

/// Install the panic hook so panics show up in the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Render Markdown to an HTML fragment.
///
/// `base_level` defaults to 1 and is clamped to `1..=6`.
#[wasm_bindgen(js_name = renderMarkdown)]
pub fn render_markdown(text: Option<String>, base_level: Option<i32>) -> String {
    let options = RenderOptions::new().with_base_level(base_level.map_or(1, i64::from));
    text.map(|t| render_with_options(&t, &options)).unwrap_or_default()
}
