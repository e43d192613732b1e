//! Markdown rendering with GitHub Flavored Markdown support.
//!
//! This module renders issue and comment bodies with comrak and highlights
//! fenced code blocks with syntect. The matching token stylesheet comes from
//! a bundled syntect theme so the generated page needs no external assets.

mod renderer;
mod theme;

pub use renderer::{EMPTY_BODY_HTML, MarkdownRenderer};
pub use theme::{DEFAULT_THEME, theme_css};
