//! Page header with repository info, counters, search and filters

use maud::{Markup, html};

use crate::navigation::Navigation;
use crate::repo::RepoRef;

/// Renders page header
///
/// Shows the repository link, open/closed/total counters, the search box
/// and one filter chip per state and label. Chips carry their filter key
/// in `data-filter`; label keys come from [`Navigation::label_key`].
pub fn page_header(repo: &RepoRef, nav: &Navigation<'_>) -> Markup {
    html! {
        div class="header" {
            h1 { "GitHub Issues" }
            div class="repo-info" {
                strong { "Repository: " }
                a href=(repo.html_url()) target="_blank" rel="noopener" { (repo.to_string()) }
            }
            div class="stats" {
                div class="stat open" { (nav.open_count()) " open" }
                div class="stat closed" { (nav.closed_count()) " closed" }
                div class="stat" { (nav.chronological().len()) " total" }
            }
            div class="search-container" {
                input type="search" class="search-input" placeholder="Search issues..." aria-label="Search issues";
            }
            div class="filter-chips" {
                div class="chips-label" { strong { "Filter by:" } }
                button type="button" class="filter-chip active" data-filter="all" { "All issues" }
                button type="button" class="filter-chip" data-filter="open" { "Open" }
                button type="button" class="filter-chip" data-filter="closed" { "Closed" }
                @for name in nav.label_names() {
                    @if let Some(key) = nav.label_key(name) {
                        button type="button" class="filter-chip" data-filter=(key) { (name) }
                    }
                }
            }
        }
    }
}

/// Renders the human/LLM view toggle buttons
pub fn view_toggle() -> Markup {
    html! {
        div class="view-toggle" {
            strong { "View:" }
            button type="button" class="toggle-btn active" data-view="human-view" { "Human view" }
            button type="button" class="toggle-btn" data-view="llm-view" { "LLM view" }
        }
    }
}
