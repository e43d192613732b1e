//! Sidebar navigation component

use maud::{Markup, html};

use crate::issue::Issue;
use crate::navigation::Navigation;
use crate::util::truncate;

/// Maximum title length in the "All Issues" list.
const ALL_TITLE_LEN: usize = 50;

/// Maximum title length inside milestone groups.
const MILESTONE_TITLE_LEN: usize = 40;

/// Renders the fixed sidebar with issue and milestone navigation
///
/// Lists every issue newest first, then one collapsible group per
/// milestone. The milestone section is omitted when no issue has one.
pub fn sidebar(nav: &Navigation<'_>) -> Markup {
    html! {
        nav id="sidebar" {
            div class="nav-section" {
                h3 { "All Issues (" (nav.chronological().len()) ")" }
                (issue_links(nav.chronological(), ALL_TITLE_LEN))
            }
            @if nav.has_milestones() {
                div class="nav-section" {
                    h3 { "Milestones" }
                    @for (milestone, issues) in nav.milestones() {
                        details {
                            summary { (milestone) " (" (issues.len()) ")" }
                            (issue_links(issues, MILESTONE_TITLE_LEN))
                        }
                    }
                }
            }
        }
    }
}

fn issue_links(issues: &[&Issue], title_len: usize) -> Markup {
    html! {
        ul class="nav-list" {
            @for issue in issues {
                li {
                    a href=(format!("#{}", issue.anchor())) class=(issue.state().as_str()) {
                        "#" (issue.number()) ": " (truncate(issue.title(), title_len))
                    }
                }
            }
        }
    }
}
