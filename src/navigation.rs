//! Navigation indices over the issue list.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::issue::{Issue, IssueState};

/// Prefix of the filter key assigned to each label.
pub const LABEL_KEY_PREFIX: &str = "label-";

/// Chronological, per-label and per-milestone views of one issue list.
///
/// Groups are keyed in sorted order and every group lists its issues newest
/// first, so the same input always yields the same navigation. The `None`
/// group collects issues without any label or without a milestone.
#[derive(Debug)]
pub struct Navigation<'a> {
    chronological: Vec<&'a Issue>,
    by_label: BTreeMap<Option<String>, Vec<&'a Issue>>,
    by_milestone: BTreeMap<Option<String>, Vec<&'a Issue>>,
}

impl<'a> Navigation<'a> {
    /// Builds all indices for the given issues.
    pub fn build(issues: &'a [Issue]) -> Self {
        let mut chronological: Vec<&Issue> = issues.iter().collect();
        chronological.sort_by(|a, b| newest_first(a, b));

        let mut by_label: BTreeMap<Option<String>, Vec<&Issue>> = BTreeMap::new();
        let mut by_milestone: BTreeMap<Option<String>, Vec<&Issue>> = BTreeMap::new();

        // Walking the sorted list keeps every group in chronological order
        for issue in chronological.iter().copied() {
            if issue.labels().is_empty() {
                by_label.entry(None).or_default().push(issue);
            }
            for label in issue.labels() {
                let group = by_label.entry(Some(label.name().to_string())).or_default();
                if group.last().map(|i| i.number()) != Some(issue.number()) {
                    group.push(issue);
                }
            }

            by_milestone
                .entry(issue.milestone().map(String::from))
                .or_default()
                .push(issue);
        }

        Self {
            chronological,
            by_label,
            by_milestone,
        }
    }

    /// All issues, newest first.
    pub fn chronological(&self) -> &[&'a Issue] {
        &self.chronological
    }

    /// Label name to issues; `None` holds unlabeled issues.
    pub fn by_label(&self) -> &BTreeMap<Option<String>, Vec<&'a Issue>> {
        &self.by_label
    }

    /// Milestone title to issues; `None` holds issues without milestone.
    pub fn by_milestone(&self) -> &BTreeMap<Option<String>, Vec<&'a Issue>> {
        &self.by_milestone
    }

    /// Label names in sorted order.
    pub fn label_names(&self) -> impl Iterator<Item = &str> {
        self.by_label.keys().filter_map(|name| name.as_deref())
    }

    /// Filter key of a label: [`LABEL_KEY_PREFIX`] plus its position in
    /// [`Navigation::label_names`].
    ///
    /// Keys are unique per distinct name and never empty, whatever
    /// characters the name contains.
    pub fn label_key(&self, name: &str) -> Option<String> {
        self.label_names()
            .position(|n| n == name)
            .map(|index| format!("{}{}", LABEL_KEY_PREFIX, index))
    }

    /// Milestone groups excluding issues without milestone.
    pub fn milestones(&self) -> impl Iterator<Item = (&str, &[&'a Issue])> {
        self.by_milestone
            .iter()
            .filter_map(|(name, issues)| Some((name.as_deref()?, issues.as_slice())))
    }

    /// Whether at least one issue is assigned to a milestone.
    pub fn has_milestones(&self) -> bool {
        self.milestones().next().is_some()
    }

    pub fn open_count(&self) -> usize {
        self.chronological
            .iter()
            .filter(|i| i.state() == IssueState::Open)
            .count()
    }

    pub fn closed_count(&self) -> usize {
        self.chronological.len() - self.open_count()
    }
}

/// Orders by creation time descending, then by number descending.
fn newest_first(a: &Issue, b: &Issue) -> Ordering {
    b.created_at()
        .cmp(a.created_at())
        .then_with(|| b.number().cmp(&a.number()))
}
