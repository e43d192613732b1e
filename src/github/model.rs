//! Raw GitHub REST API records.
//!
//! Only the fields the renderer consumes are declared; everything else in
//! the payload is ignored by serde.

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

#[derive(Debug, Clone, Deserialize)]
pub struct RawUser {
    pub login: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawLabel {
    pub name: String,
    #[serde(default)]
    pub color: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawMilestone {
    pub title: String,
}

/// Issue list entry as returned by `GET /repos/{owner}/{repo}/issues`.
///
/// The endpoint also returns pull requests; those carry a `pull_request`
/// key.
#[derive(Debug, Clone, Deserialize)]
pub struct RawIssue {
    pub number: u64,
    pub title: String,
    #[serde(default)]
    pub body: Option<String>,
    pub state: String,
    #[serde(default)]
    pub labels: Vec<RawLabel>,
    pub created_at: String,
    pub updated_at: String,
    #[serde(default)]
    pub user: Option<RawUser>,
    pub html_url: String,
    #[serde(default)]
    pub comments: u64,
    #[serde(default)]
    pub comments_url: Option<String>,
    #[serde(default)]
    pub milestone: Option<RawMilestone>,
    /// Whether the `pull_request` key is present, whatever its value.
    #[serde(default, rename = "pull_request", deserialize_with = "key_present")]
    pub has_pull_request: bool,
}

impl RawIssue {
    pub fn is_pull_request(&self) -> bool {
        self.has_pull_request
    }
}

/// Only called by serde when the key exists, so any value means present.
fn key_present<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    IgnoredAny::deserialize(deserializer).map(|_| true)
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawComment {
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub user: Option<RawUser>,
    pub created_at: String,
    #[serde(default)]
    pub html_url: String,
}
