//! Error taxonomy for fetching and rendering issues.

use thiserror::Error;

/// Failures surfaced by the issue pipeline.
///
/// Repository, rate limit, network and API failures are fatal and end the
/// run with a nonzero exit code. `MarkdownRenderError` is recoverable: callers log
/// it and fall back to the raw body text.
#[derive(Error, Debug)]
pub enum IssuesError {
    #[error("Could not parse repository from: {0}")]
    InvalidRepositoryReference(String),

    #[error("Repository not found: {0}")]
    RepositoryNotFound(String),

    #[error(
        "GitHub API rate limit exceeded{}. Use a personal access token with --token or GITHUB_TOKEN",
        .reset.as_ref().map(|r| format!(" (resets at {r})")).unwrap_or_default()
    )]
    RateLimitExceeded { reset: Option<String> },

    #[error("GitHub token contains characters not allowed in an HTTP header")]
    InvalidToken,

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("GitHub API error: {message} (HTTP {status})")]
    ApiError { status: u16, message: String },

    #[error("Failed to render markdown: {0}")]
    MarkdownRenderError(String),
}

pub type Result<T> = std::result::Result<T, IssuesError>;
