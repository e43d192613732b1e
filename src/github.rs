//! GitHub REST API access.
//!
//! This module fetches issue lists and issue comments page by page with a
//! blocking reqwest client and maps HTTP failures onto [`crate::IssuesError`].

mod client;
pub mod model;

pub use client::{DEFAULT_API_URL, IssueFetcher, PER_PAGE};
