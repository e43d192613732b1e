//! Blocking GitHub REST client for the issues endpoints.

use std::time::Duration;

use chrono::DateTime;
use reqwest::StatusCode;
use reqwest::blocking::{Client, Response};
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use super::model::{RawComment, RawIssue};
use crate::error::{IssuesError, Result};
use crate::issue::{self, Comment, Issue};
use crate::repo::RepoRef;

/// Public GitHub API root.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Page size requested from list endpoints. GitHub caps this at 100.
pub const PER_PAGE: usize = 100;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

const USER_AGENT: &str = concat!("render-issues/", env!("CARGO_PKG_VERSION"));

const RATE_LIMIT_REMAINING: &str = "x-ratelimit-remaining";
const RATE_LIMIT_RESET: &str = "x-ratelimit-reset";

/// Sequential fetcher for repository issues and their comments.
///
/// Issues one request at a time. Pages are requested in order until an
/// empty or short page comes back.
pub struct IssueFetcher {
    client: Client,
    api_url: String,
}

impl IssueFetcher {
    /// Creates fetcher against an API root with optional bearer token.
    ///
    /// # Arguments
    ///
    /// * `api_url`: API root such as `https://api.github.com`
    /// * `token`: Personal access token sent as `Authorization: Bearer`
    ///
    /// # Errors
    ///
    /// Returns `InvalidToken` if the token cannot be sent as a header, or
    /// `NetworkError` if the HTTP client cannot be built.
    pub fn new(api_url: impl Into<String>, token: Option<&str>) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "x-github-api-version",
            HeaderValue::from_static("2022-11-28"),
        );

        if let Some(token) = token {
            let mut value = HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|_| IssuesError::InvalidToken)?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            api_url: api_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Fetches every issue of a repository, excluding pull requests.
    ///
    /// With `include_comments`, issues reporting a nonzero comment count get
    /// one extra paginated request for their comments. A failed comments
    /// request is logged and leaves that issue without comments.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryNotFound` on HTTP 404, `RateLimitExceeded` when the
    /// rate limit is exhausted, `ApiError` for other HTTP failures and
    /// `NetworkError` for transport or decoding failures.
    pub fn fetch_issues(&self, repo: &RepoRef, include_comments: bool) -> Result<Vec<Issue>> {
        info!("Fetching issues from {}", repo);

        let url = format!(
            "{}/repos/{}/{}/issues",
            self.api_url,
            repo.owner(),
            repo.name()
        );
        let records: Vec<RawIssue> = self.fetch_all_pages(&url, &[("state", "all")], repo)?;

        let issues = issue::normalize(records, |raw| {
            if include_comments && raw.comments > 0 {
                let url = raw
                    .comments_url
                    .clone()
                    .unwrap_or_else(|| self.comments_url(repo, raw.number));
                self.fetch_comments_or_empty(&url, repo, raw.number)
            } else {
                Vec::new()
            }
        });

        info!("Fetched {} total issues", issues.len());
        Ok(issues)
    }

    /// Fetches all comments of one issue.
    ///
    /// # Errors
    ///
    /// Same classification as [`IssueFetcher::fetch_issues`].
    pub fn fetch_comments(&self, repo: &RepoRef, number: u64) -> Result<Vec<Comment>> {
        self.fetch_comments_at(&self.comments_url(repo, number), repo)
    }

    /// Fetches all comments from a comments endpoint, such as the
    /// `comments_url` of an issue record.
    fn fetch_comments_at(&self, url: &str, repo: &RepoRef) -> Result<Vec<Comment>> {
        let records: Vec<RawComment> = self.fetch_all_pages(url, &[], repo)?;
        Ok(records.into_iter().map(Comment::from).collect())
    }

    fn comments_url(&self, repo: &RepoRef, number: u64) -> String {
        format!(
            "{}/repos/{}/{}/issues/{}/comments",
            self.api_url,
            repo.owner(),
            repo.name(),
            number
        )
    }

    fn fetch_comments_or_empty(&self, url: &str, repo: &RepoRef, number: u64) -> Vec<Comment> {
        match self.fetch_comments_at(url, repo) {
            Ok(comments) => {
                debug!(number, count = comments.len(), "Fetched comments");
                comments
            }
            Err(e) => {
                warn!("Failed to fetch comments for issue #{}: {}", number, e);
                Vec::new()
            }
        }
    }

    fn fetch_all_pages<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, &str)],
        repo: &RepoRef,
    ) -> Result<Vec<T>> {
        let mut items = Vec::new();
        let mut page = 1usize;

        loop {
            let batch: Vec<T> = self.get_page(url, query, page, repo)?;
            let count = batch.len();
            debug!(url, page, count, "Fetched page");

            items.extend(batch);
            if count < PER_PAGE {
                break;
            }
            page += 1;
        }

        Ok(items)
    }

    fn get_page<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, &str)],
        page: usize,
        repo: &RepoRef,
    ) -> Result<Vec<T>> {
        let per_page = PER_PAGE.to_string();
        let page = page.to_string();

        let response = self
            .client
            .get(url)
            .query(query)
            .query(&[("per_page", per_page.as_str()), ("page", page.as_str())])
            .send()?;

        let response = check_status(response, repo)?;
        Ok(response.json()?)
    }
}

/// Maps unsuccessful responses onto the error taxonomy.
fn check_status(response: Response, repo: &RepoRef) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    if status == StatusCode::NOT_FOUND {
        return Err(IssuesError::RepositoryNotFound(repo.to_string()));
    }

    let is_limit_status =
        status == StatusCode::FORBIDDEN || status == StatusCode::TOO_MANY_REQUESTS;
    if is_limit_status && rate_limit_exhausted(response.headers()) {
        return Err(IssuesError::RateLimitExceeded {
            reset: rate_limit_reset(response.headers()),
        });
    }

    let body = response.text().unwrap_or_default();
    Err(IssuesError::ApiError {
        status: status.as_u16(),
        message: api_message(&body, status),
    })
}

fn rate_limit_exhausted(headers: &HeaderMap) -> bool {
    headers
        .get(RATE_LIMIT_REMAINING)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.trim() == "0")
}

/// Formats the `x-ratelimit-reset` epoch seconds as UTC time.
fn rate_limit_reset(headers: &HeaderMap) -> Option<String> {
    let seconds = headers
        .get(RATE_LIMIT_RESET)?
        .to_str()
        .ok()?
        .trim()
        .parse::<i64>()
        .ok()?;
    DateTime::from_timestamp(seconds, 0).map(|t| t.format("%Y-%m-%d %H:%M UTC").to_string())
}

/// Extracts GitHub's `message` field, falling back to the status reason.
fn api_message(body: &str, status: StatusCode) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("message")?.as_str().map(String::from))
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("Unknown error")
                .to_string()
        })
}
