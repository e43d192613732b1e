//! CSS and JavaScript asset bundling

const BASE: &str = include_str!("../assets/base.css");
const SIDEBAR: &str = include_str!("../assets/components/sidebar.css");
const HEADER: &str = include_str!("../assets/components/header.css");
const ISSUE_CARD: &str = include_str!("../assets/components/issue-card.css");

const ISSUES_PAGE: &str = include_str!("../assets/page-issues.css");

/// Client-side search, filtering, view toggle and mobile menu.
pub const SCRIPT: &str = include_str!("../assets/issues.js");

/// Returns the bundled page stylesheet
pub fn stylesheet() -> String {
    [BASE, SIDEBAR, HEADER, ISSUE_CARD, ISSUES_PAGE].join("\n")
}
