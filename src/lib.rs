//! Single-page HTML renderer for GitHub issues.

mod assets;
pub mod components;
mod config;
pub mod cxml;
mod document;
mod error;
pub mod github;
mod issue;
mod markdown;
mod navigation;
pub mod output;
pub mod pages;
mod repo;
mod util;

pub use config::Config;
pub use document::{Document, RenderedIssue};
pub use error::{IssuesError, Result};
pub use github::{DEFAULT_API_URL, IssueFetcher};
pub use issue::{Comment, Issue, IssueState, Label, normalize};
pub use markdown::{DEFAULT_THEME, EMPTY_BODY_HTML, MarkdownRenderer, theme_css};
pub use navigation::{LABEL_KEY_PREFIX, Navigation};
pub use repo::RepoRef;
pub use util::{format_date, format_file_size};
