//! Issues page generation combining the human and LLM views

use maud::{Markup, html};

use crate::assets;
use crate::components::header::{page_header, view_toggle};
use crate::components::issue_card::issue_card;
use crate::components::layout::page_wrapper;
use crate::components::sidebar::sidebar;
use crate::document::Document;

/// Generates the complete issues page
///
/// The human view shows one card per issue, newest first. The LLM view
/// holds the CXML export in a read-only textarea. Only one view is visible
/// at a time; the bundled script switches between them.
///
/// # Arguments
///
/// * `doc`: Assembled document
/// * `highlight_css`: Code highlighting stylesheet for the chosen theme
///
/// # Returns
///
/// Rendered HTML markup
///
/// # Examples
///
/// ```
/// use render_issues::{Document, MarkdownRenderer, RepoRef, pages};
///
/// let repo = RepoRef::new("octocat", "Hello-World");
/// let renderer = MarkdownRenderer::new();
/// let doc = Document::assemble(&repo, &[], &renderer, false);
/// let html = pages::issues::generate(&doc, "").into_string();
/// assert!(html.contains("octocat/Hello-World"));
/// ```
pub fn generate(doc: &Document<'_>, highlight_css: &str) -> Markup {
    let repo = doc.repo();
    let title = format!("GitHub Issues - {}", repo);
    let stylesheet = assets::stylesheet();

    page_wrapper(
        &title,
        &[stylesheet.as_str(), highlight_css],
        &[assets::SCRIPT],
        html! {
            button type="button" class="mobile-menu-toggle" { "☰ Menu" }
            div class="sidebar-overlay" {}
            div class="page" {
                (sidebar(doc.navigation()))
                main class="container" {
                    (page_header(repo, doc.navigation()))
                    (view_toggle())
                    div id="human-view" {
                        @if doc.issues().is_empty() {
                            p class="empty-state" { "No issues found" }
                        }
                        @for rendered in doc.issues() {
                            (issue_card(rendered, doc.show_comments()))
                        }
                    }
                    div id="llm-view" {
                        section {
                            h2 { "LLM View - CXML Format" }
                            p { "Copy the text below and paste it to an LLM for analysis:" }
                            textarea id="llm-text" readonly { (doc.cxml()) }
                            div class="copy-hint" {
                                strong { "Tip:" }
                                " Click in the text area and press Ctrl+A (Cmd+A on Mac) to select all, then Ctrl+C (Cmd+C) to copy."
                            }
                        }
                    }
                }
            }
        },
    )
}
