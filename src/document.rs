//! Assembled page model: issues with rendered bodies plus navigation.

use crate::cxml;
use crate::issue::{Comment, Issue};
use crate::markdown::MarkdownRenderer;
use crate::navigation::Navigation;
use crate::repo::RepoRef;

/// Issue paired with the HTML of its body and comments.
#[derive(Debug)]
pub struct RenderedIssue<'a> {
    issue: &'a Issue,
    body_html: String,
    label_keys: Vec<String>,
    comments: Vec<(&'a Comment, String)>,
}

impl<'a> RenderedIssue<'a> {
    pub fn issue(&self) -> &'a Issue {
        self.issue
    }

    pub fn body_html(&self) -> &str {
        &self.body_html
    }

    /// Navigation filter keys of the issue's labels.
    pub fn label_keys(&self) -> &[String] {
        &self.label_keys
    }

    /// Comments with their rendered bodies, in API order.
    pub fn comments(&self) -> &[(&'a Comment, String)] {
        &self.comments
    }
}

/// Everything the issues page needs, computed once.
#[derive(Debug)]
pub struct Document<'a> {
    repo: &'a RepoRef,
    issues: Vec<RenderedIssue<'a>>,
    navigation: Navigation<'a>,
    cxml: String,
    show_comments: bool,
}

impl<'a> Document<'a> {
    /// Renders markdown and builds navigation for an issue list.
    ///
    /// # Arguments
    ///
    /// * `repo`: Repository the issues were fetched from
    /// * `issues`: Normalized issues in fetch order
    /// * `renderer`: Markdown renderer for bodies and comments
    /// * `show_comments`: Whether cards include a comments section
    ///
    /// # Returns
    ///
    /// Document with issues in chronological (newest first) order and the
    /// CXML export in fetch order
    pub fn assemble(
        repo: &'a RepoRef,
        issues: &'a [Issue],
        renderer: &MarkdownRenderer<'_>,
        show_comments: bool,
    ) -> Self {
        let navigation = Navigation::build(issues);

        let rendered = navigation
            .chronological()
            .iter()
            .copied()
            .map(|issue| RenderedIssue {
                issue,
                body_html: renderer.render_body(issue.body()),
                label_keys: issue
                    .labels()
                    .iter()
                    .filter_map(|label| navigation.label_key(label.name()))
                    .collect(),
                comments: if show_comments {
                    issue
                        .comments()
                        .iter()
                        .map(|c| (c, renderer.render_body(c.body())))
                        .collect()
                } else {
                    Vec::new()
                },
            })
            .collect();

        Self {
            repo,
            issues: rendered,
            cxml: cxml::generate(repo, issues),
            navigation,
            show_comments,
        }
    }

    pub fn repo(&self) -> &RepoRef {
        self.repo
    }

    /// Rendered issues, newest first.
    pub fn issues(&self) -> &[RenderedIssue<'a>] {
        &self.issues
    }

    pub fn navigation(&self) -> &Navigation<'a> {
        &self.navigation
    }

    /// CXML export of all issues.
    pub fn cxml(&self) -> &str {
        &self.cxml
    }

    pub fn show_comments(&self) -> bool {
        self.show_comments
    }
}
