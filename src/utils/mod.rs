//! Shared helpers for the render stages.

pub mod regex_cache;
