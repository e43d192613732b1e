//! Normalized issue records.
//!
//! Converts raw API payloads into the flat issue list the page generators
//! consume. Pull requests are dropped and issue numbers are unique.

use std::collections::HashSet;
use std::fmt;

use crate::github::model::{RawComment, RawIssue, RawLabel};

/// Label color used when the API omits one or returns garbage.
pub const DEFAULT_LABEL_COLOR: &str = "666666";

/// Author shown for records whose user account no longer exists.
const GHOST_AUTHOR: &str = "ghost";

/// Issue state as reported by GitHub.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IssueState {
    Open,
    Closed,
}

impl IssueState {
    /// Maps the API state string. Anything other than `open` is closed.
    pub fn from_api(state: &str) -> Self {
        if state.eq_ignore_ascii_case("open") {
            IssueState::Open
        } else {
            IssueState::Closed
        }
    }

    /// Lowercase name, also used as CSS class.
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueState::Open => "open",
            IssueState::Closed => "closed",
        }
    }

    /// Capitalized name for badges.
    pub fn title(&self) -> &'static str {
        match self {
            IssueState::Open => "Open",
            IssueState::Closed => "Closed",
        }
    }
}

impl fmt::Display for IssueState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Issue label with its hex color (no leading `#`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    name: String,
    color: String,
}

impl Label {
    /// Creates a label, normalizing the color to six lowercase hex digits.
    ///
    /// A leading `#` is stripped. Colors that are not six hex digits fall
    /// back to [`DEFAULT_LABEL_COLOR`].
    pub fn new(name: impl Into<String>, color: Option<&str>) -> Self {
        let color = color
            .map(|c| c.trim().trim_start_matches('#').to_ascii_lowercase())
            .filter(|c| c.len() == 6 && c.chars().all(|ch| ch.is_ascii_hexdigit()))
            .unwrap_or_else(|| DEFAULT_LABEL_COLOR.to_string());

        Self {
            name: name.into(),
            color,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Hex color without `#`.
    pub fn color(&self) -> &str {
        &self.color
    }

    /// Contrasting text color for the label background.
    ///
    /// Colors numerically above `0x808080` get black text, the rest white.
    pub fn text_color(&self) -> &'static str {
        match u32::from_str_radix(&self.color, 16) {
            Ok(value) if value > 0x808080 => "#000",
            _ => "#fff",
        }
    }
}

impl From<RawLabel> for Label {
    fn from(raw: RawLabel) -> Self {
        Label::new(raw.name, raw.color.as_deref())
    }
}

/// Issue comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    author: String,
    body: String,
    created_at: String,
    html_url: String,
}

impl Comment {
    pub fn new(
        author: impl Into<String>,
        body: impl Into<String>,
        created_at: impl Into<String>,
        html_url: impl Into<String>,
    ) -> Self {
        Self {
            author: author.into(),
            body: body.into(),
            created_at: created_at.into(),
            html_url: html_url.into(),
        }
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    /// Raw markdown body.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// ISO 8601 creation timestamp as returned by the API.
    pub fn created_at(&self) -> &str {
        &self.created_at
    }

    pub fn html_url(&self) -> &str {
        &self.html_url
    }
}

impl From<RawComment> for Comment {
    fn from(raw: RawComment) -> Self {
        Comment {
            author: raw
                .user
                .map(|u| u.login)
                .unwrap_or_else(|| GHOST_AUTHOR.to_string()),
            body: raw.body.unwrap_or_default(),
            created_at: raw.created_at,
            html_url: raw.html_url,
        }
    }
}

/// Normalized GitHub issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    number: u64,
    title: String,
    body: String,
    state: IssueState,
    author: String,
    created_at: String,
    updated_at: String,
    labels: Vec<Label>,
    milestone: Option<String>,
    comments: Vec<Comment>,
    html_url: String,
}

impl Issue {
    /// Converts a raw API record, attaching already fetched comments.
    ///
    /// A missing body becomes the empty string and a missing user becomes
    /// `ghost`. Callers are responsible for dropping pull requests first.
    pub fn from_raw(raw: RawIssue, comments: Vec<Comment>) -> Self {
        Self {
            number: raw.number,
            title: raw.title,
            body: raw.body.unwrap_or_default(),
            state: IssueState::from_api(&raw.state),
            author: raw
                .user
                .map(|u| u.login)
                .unwrap_or_else(|| GHOST_AUTHOR.to_string()),
            created_at: raw.created_at,
            updated_at: raw.updated_at,
            labels: raw.labels.into_iter().map(Label::from).collect(),
            milestone: raw.milestone.map(|m| m.title),
            comments,
            html_url: raw.html_url,
        }
    }

    pub fn number(&self) -> u64 {
        self.number
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Raw markdown body, empty when the issue has no description.
    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn state(&self) -> IssueState {
        self.state
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    /// ISO 8601 creation timestamp as returned by the API.
    pub fn created_at(&self) -> &str {
        &self.created_at
    }

    /// ISO 8601 update timestamp as returned by the API.
    pub fn updated_at(&self) -> &str {
        &self.updated_at
    }

    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// Milestone title, if the issue is assigned to one.
    pub fn milestone(&self) -> Option<&str> {
        self.milestone.as_deref()
    }

    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    /// Canonical issue page on github.com.
    pub fn html_url(&self) -> &str {
        &self.html_url
    }

    /// Element id of this issue's card in the generated page.
    pub fn anchor(&self) -> String {
        format!("issue-{}", self.number)
    }
}

/// Normalizes raw issue list records into issues.
///
/// Pull requests are dropped and only the first record for each issue
/// number is kept. `comments_for` is asked for the comments of every
/// surviving record, in input order.
///
/// # Arguments
///
/// * `records`: Raw records in fetch order
/// * `comments_for`: Comment lookup for a record that will be kept
///
/// # Returns
///
/// Issues in fetch order
pub fn normalize<F>(records: Vec<RawIssue>, mut comments_for: F) -> Vec<Issue>
where
    F: FnMut(&RawIssue) -> Vec<Comment>,
{
    let mut seen = HashSet::new();
    let mut issues = Vec::with_capacity(records.len());

    for raw in records {
        if raw.is_pull_request() {
            tracing::debug!(number = raw.number, "Skipping pull request");
            continue;
        }
        if !seen.insert(raw.number) {
            tracing::warn!(number = raw.number, "Skipping duplicate issue record");
            continue;
        }

        let comments = comments_for(&raw);
        issues.push(Issue::from_raw(raw, comments));
    }

    issues
}
