//! Shared test utilities for integration tests.
//!
//! Provides GitHub API payload builders and wiremock helpers that serve
//! issue and comment pages the way the REST API does.

#![allow(dead_code)]

use render_issues::github::model::RawIssue;
use render_issues::{Issue, normalize};
use serde_json::{Value, json};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const OWNER: &str = "octocat";
pub const REPO: &str = "Hello-World";

/// Issue record as returned by the issues list endpoint.
pub fn issue_json(number: u64, title: &str, state: &str) -> Value {
    json!({
        "number": number,
        "title": title,
        "body": format!("Body of issue {}", number),
        "state": state,
        "labels": [],
        "created_at": format!("2024-01-{:02}T10:00:00Z", (number % 28) + 1),
        "updated_at": "2024-02-01T10:00:00Z",
        "user": { "login": "octocat" },
        "html_url": format!("https://github.com/{}/{}/issues/{}", OWNER, REPO, number),
        "comments": 0,
        "milestone": null
    })
}

/// Pull request record, which the issues endpoint mixes into its results.
pub fn pull_request_json(number: u64) -> Value {
    let mut value = issue_json(number, &format!("PR {}", number), "open");
    value["pull_request"] = json!({
        "url": format!("https://api.github.com/repos/{}/{}/pulls/{}", OWNER, REPO, number)
    });
    value
}

pub fn label_json(name: &str, color: &str) -> Value {
    json!({ "id": 1, "name": name, "color": color, "default": false })
}

pub fn comment_json(login: &str, body: &str, created_at: &str) -> Value {
    json!({
        "id": 1,
        "body": body,
        "user": { "login": login },
        "created_at": created_at,
        "html_url": format!("https://github.com/{}/{}/issues/1#issuecomment-1", OWNER, REPO)
    })
}

/// Builds `count` sequential open issues starting at `first`.
pub fn issue_range(first: u64, count: u64) -> Vec<Value> {
    (first..first + count)
        .map(|n| issue_json(n, &format!("Issue {}", n), "open"))
        .collect()
}

fn issues_path() -> String {
    format!("/repos/{}/{}/issues", OWNER, REPO)
}

/// Serves one page of the issues list.
pub async fn mount_issues_page(server: &MockServer, page: usize, items: Vec<Value>) {
    Mock::given(method("GET"))
        .and(path(issues_path()))
        .and(query_param("state", "all"))
        .and(query_param("per_page", "100"))
        .and(query_param("page", page.to_string()))
        .respond_with(ResponseTemplate::new(200).set_body_json(Value::Array(items)))
        .mount(server)
        .await;
}

/// Serves the comments of one issue on a single page.
pub async fn mount_comments(server: &MockServer, number: u64, items: Vec<Value>) {
    Mock::given(method("GET"))
        .and(path(format!("{}/{}/comments", issues_path(), number)))
        .respond_with(ResponseTemplate::new(200).set_body_json(Value::Array(items)))
        .mount(server)
        .await;
}

/// Serves one page of an issue's comments.
pub async fn mount_comments_page(server: &MockServer, number: u64, page: usize, items: Vec<Value>) {
    Mock::given(method("GET"))
        .and(path(format!("{}/{}/comments", issues_path(), number)))
        .and(query_param("per_page", "100"))
        .and(query_param("page", page.to_string()))
        .respond_with(ResponseTemplate::new(200).set_body_json(Value::Array(items)))
        .mount(server)
        .await;
}

/// Builds `count` comments by one author with numbered bodies.
pub fn comment_range(first: u64, count: u64) -> Vec<Value> {
    (first..first + count)
        .map(|n| comment_json("commenter", &format!("Comment {}", n), "2024-01-02T08:00:00Z"))
        .collect()
}

/// Answers the issues list with an arbitrary status and body.
pub async fn mount_issues_error(server: &MockServer, template: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(issues_path()))
        .respond_with(template)
        .mount(server)
        .await;
}

/// Normalizes raw payloads without comments, as the fetcher would.
pub fn issues_from_json(values: Vec<Value>) -> Vec<Issue> {
    let records: Vec<RawIssue> = values
        .into_iter()
        .map(|v| serde_json::from_value(v).expect("Should deserialize issue record"))
        .collect();
    normalize(records, |_| Vec::new())
}
