//! Issue card component for the human view

use maud::{Markup, PreEscaped, html};

use super::labels::label_chips;
use crate::document::RenderedIssue;
use crate::issue::Comment;
use crate::util::format_date;

/// Raw bodies longer than this many characters start collapsed.
pub const COLLAPSE_THRESHOLD: usize = 500;

/// Renders one issue as a card
///
/// The card id is the issue anchor, its classes carry the state for
/// filtering and `data-labels` lists the label filter keys. Long bodies
/// start collapsed behind a read more button.
///
/// # Arguments
///
/// * `rendered`: Issue with rendered body and comments
/// * `show_comments`: Whether to include the comments section
///
/// # Returns
///
/// Card section markup
pub fn issue_card(rendered: &RenderedIssue<'_>, show_comments: bool) -> Markup {
    let issue = rendered.issue();
    let state = issue.state().as_str();
    let body_id = format!("body-{}", issue.number());
    let collapsed = issue.body().chars().count() > COLLAPSE_THRESHOLD;

    html! {
        section class=(format!("issue-card {}", state)) id=(issue.anchor()) data-labels=(rendered.label_keys().join(" ")) {
            div class="issue-header" {
                h2 {
                    a href=(issue.html_url()) target="_blank" rel="noopener" class="issue-link" {
                        "#" (issue.number()) ": " (issue.title())
                    }
                    span class=(format!("state-badge {}", state)) { (issue.state().title()) }
                }
                div class="issue-meta" {
                    span { strong { "Author:" } " " (issue.author()) }
                    span { strong { "Created:" } " " time datetime=(issue.created_at()) { (format_date(issue.created_at())) } }
                    span { strong { "Updated:" } " " time datetime=(issue.updated_at()) { (format_date(issue.updated_at())) } }
                }
                (label_chips(issue.labels()))
                @if let Some(milestone) = issue.milestone() {
                    div class="milestone" { strong { "Milestone:" } " " (milestone) }
                }
            }
            @if collapsed {
                div class="issue-body collapsed" id=(body_id) { (PreEscaped(rendered.body_html())) }
                button type="button" class="read-more-btn" data-target=(body_id) { "READ MORE..." }
            } @else {
                div class="issue-body" id=(body_id) { (PreEscaped(rendered.body_html())) }
            }
            @if show_comments && !rendered.comments().is_empty() {
                (comments(rendered.comments()))
            }
            div class="back-top" { a href="#top" { "Back to top" } }
        }
    }
}

fn comments(comments: &[(&Comment, String)]) -> Markup {
    html! {
        div class="comments" {
            h4 { "Comments:" }
            @for (comment, body_html) in comments {
                div class="comment" {
                    div class="comment-meta" {
                        strong { (comment.author()) }
                        " • "
                        @if comment.html_url().is_empty() {
                            time datetime=(comment.created_at()) { (format_date(comment.created_at())) }
                        } @else {
                            a href=(comment.html_url()) target="_blank" rel="noopener" {
                                time datetime=(comment.created_at()) { (format_date(comment.created_at())) }
                            }
                        }
                    }
                    div class="comment-body" { (PreEscaped(body_html)) }
                }
            }
        }
    }
}
