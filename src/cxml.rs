//! Flattened CXML export of an issue list.
//!
//! Produces one tag-delimited `<document>` per issue, the format the LLM
//! view of the page embeds for copy and paste into language models. Text
//! is written verbatim; escaping happens where the export is embedded.

use crate::issue::Issue;
use crate::repo::RepoRef;
use crate::util::format_date;

/// Generates the CXML document collection for issues in the given order.
///
/// # Arguments
///
/// * `repo`: Repository the issues belong to
/// * `issues`: Issues, emitted with 1-based `index` attributes
///
/// # Returns
///
/// Newline separated CXML text without trailing newline
pub fn generate(repo: &RepoRef, issues: &[Issue]) -> String {
    let mut lines: Vec<String> = vec![
        "<documents>".to_string(),
        format!("<repository>{}</repository>", repo),
    ];

    for (index, issue) in issues.iter().enumerate() {
        push_document(&mut lines, index + 1, issue);
    }

    lines.push("</documents>".to_string());
    lines.join("\n")
}

fn push_document(lines: &mut Vec<String>, index: usize, issue: &Issue) {
    lines.push(format!("<document index=\"{}\">", index));
    lines.push(format!(
        "<source>Issue #{}: {}</source>",
        issue.number(),
        issue.title()
    ));

    lines.push("<metadata>".to_string());
    lines.push(format!("  <state>{}</state>", issue.state()));
    lines.push(format!("  <author>{}</author>", issue.author()));
    lines.push(format!("  <created>{}</created>", issue.created_at()));
    if !issue.labels().is_empty() {
        let names: Vec<&str> = issue.labels().iter().map(|l| l.name()).collect();
        lines.push(format!("  <labels>{}</labels>", names.join(", ")));
    }
    if let Some(milestone) = issue.milestone() {
        lines.push(format!("  <milestone>{}</milestone>", milestone));
    }
    lines.push("</metadata>".to_string());

    lines.push("<document_content>".to_string());
    lines.push(format!("# {}", issue.title()));
    lines.push(String::new());
    lines.push(issue.body().to_string());

    if !issue.comments().is_empty() {
        lines.push(String::new());
        lines.push("## Comments".to_string());
        for comment in issue.comments() {
            lines.push(format!(
                "### Comment by {} ({})",
                comment.author(),
                format_date(comment.created_at())
            ));
            lines.push(comment.body().to_string());
            lines.push(String::new());
        }
    }

    lines.push("</document_content>".to_string());
    lines.push("</document>".to_string());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::model::RawIssue;
    use crate::issue::Comment;
    use serde_json::json;

    fn sample_issue(comments: Vec<Comment>) -> Issue {
        let raw: RawIssue = serde_json::from_value(json!({
            "number": 12,
            "title": "Parser panics on empty input",
            "body": "Steps:\n1. run `parse(\"\")`",
            "state": "open",
            "labels": [
                { "name": "bug", "color": "d73a4a" },
                { "name": "parser", "color": "0e8a16" }
            ],
            "created_at": "2024-05-01T08:00:00Z",
            "updated_at": "2024-05-02T08:00:00Z",
            "user": { "login": "alice" },
            "html_url": "https://github.com/o/r/issues/12",
            "milestone": { "title": "v0.3" }
        }))
        .expect("Should build raw issue");
        Issue::from_raw(raw, comments)
    }

    #[test]
    fn test_generate_full_document() {
        // Arrange
        let repo = RepoRef::new("octocat", "Hello-World");
        let issues = vec![sample_issue(vec![Comment::new(
            "bob",
            "Reproduced.",
            "2024-05-03T12:30:00Z",
            "https://github.com/o/r/issues/12#issuecomment-1",
        )])];

        // Act
        let text = generate(&repo, &issues);

        // Assert
        let expected = [
            "<documents>",
            "<repository>octocat/Hello-World</repository>",
            "<document index=\"1\">",
            "<source>Issue #12: Parser panics on empty input</source>",
            "<metadata>",
            "  <state>open</state>",
            "  <author>alice</author>",
            "  <created>2024-05-01T08:00:00Z</created>",
            "  <labels>bug, parser</labels>",
            "  <milestone>v0.3</milestone>",
            "</metadata>",
            "<document_content>",
            "# Parser panics on empty input",
            "",
            "Steps:\n1. run `parse(\"\")`",
            "",
            "## Comments",
            "### Comment by bob (2024-05-03 12:30)",
            "Reproduced.",
            "",
            "</document_content>",
            "</document>",
            "</documents>",
        ]
        .join("\n");
        assert_eq!(text, expected);
    }

    #[test]
    fn test_generate_omits_optional_sections() {
        // Arrange
        let repo = RepoRef::new("o", "r");
        let raw: RawIssue = serde_json::from_value(json!({
            "number": 1,
            "title": "Plain",
            "state": "closed",
            "created_at": "2024-01-01T00:00:00Z",
            "updated_at": "2024-01-01T00:00:00Z",
            "html_url": "https://github.com/o/r/issues/1"
        }))
        .expect("Should build raw issue");
        let issues = vec![Issue::from_raw(raw, Vec::new())];

        // Act
        let text = generate(&repo, &issues);

        // Assert
        assert!(text.contains("  <state>closed</state>"));
        assert!(!text.contains("<labels>"));
        assert!(!text.contains("<milestone>"));
        assert!(!text.contains("## Comments"));
    }

    #[test]
    fn test_generate_indexes_from_one() {
        let repo = RepoRef::new("o", "r");
        let issues = vec![sample_issue(Vec::new()), sample_issue(Vec::new())];

        let text = generate(&repo, &issues);

        assert!(text.contains("<document index=\"1\">"));
        assert!(text.contains("<document index=\"2\">"));
        assert!(!text.contains("<document index=\"0\">"));
    }

    #[test]
    fn test_generate_empty() {
        let text = generate(&RepoRef::new("o", "r"), &[]);

        assert_eq!(
            text,
            "<documents>\n<repository>o/r</repository>\n</documents>"
        );
    }
}
