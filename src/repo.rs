//! Repository reference parsing.

use std::fmt;

use crate::error::{IssuesError, Result};

const GITHUB_HOST: &str = "github.com";

/// GitHub repository identified by owner and name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoRef {
    owner: String,
    name: String,
}

impl RepoRef {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }

    /// Parses a user supplied repository reference.
    ///
    /// Accepts full URLs (`https://github.com/owner/repo`), URLs with a
    /// `.git` suffix, scheme-less URLs (`github.com/owner/repo`) and the
    /// `owner/repo` shorthand. Trailing slashes and extra path segments
    /// after the repository name (`/issues`, `/tree/main`) are ignored.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRepositoryReference` when no owner and name can be
    /// extracted, or the URL points at a host other than GitHub.
    ///
    /// # Examples
    ///
    /// ```
    /// use render_issues::RepoRef;
    ///
    /// let repo = RepoRef::parse("https://github.com/octocat/Hello-World")?;
    /// assert_eq!(repo.owner(), "octocat");
    /// assert_eq!(repo.name(), "Hello-World");
    /// # Ok::<(), render_issues::IssuesError>(())
    /// ```
    pub fn parse(input: &str) -> Result<Self> {
        let invalid = || IssuesError::InvalidRepositoryReference(input.to_string());

        let trimmed = input.trim().trim_end_matches('/');
        let trimmed = trimmed.strip_suffix(".git").unwrap_or(trimmed);

        let (had_scheme, rest) = match trimmed
            .strip_prefix("https://")
            .or_else(|| trimmed.strip_prefix("http://"))
        {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };
        let rest = rest.strip_prefix("www.").unwrap_or(rest);

        let segments: Vec<&str> = if let Some(path) = rest.strip_prefix(GITHUB_HOST) {
            let path = path.strip_prefix('/').ok_or_else(invalid)?;
            path.split('/').take(2).collect()
        } else if had_scheme || rest.contains(':') {
            return Err(invalid());
        } else {
            let parts: Vec<&str> = rest.split('/').collect();
            if parts.len() != 2 {
                return Err(invalid());
            }
            parts
        };

        match segments.as_slice() {
            [owner, name] if is_valid_segment(owner) && is_valid_segment(name) => {
                let name = name.strip_suffix(".git").unwrap_or(name);
                if name.is_empty() {
                    return Err(invalid());
                }
                Ok(Self::new(*owner, name))
            }
            _ => Err(invalid()),
        }
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the repository page on github.com.
    pub fn html_url(&self) -> String {
        format!("https://{}/{}/{}", GITHUB_HOST, self.owner, self.name)
    }
}

impl fmt::Display for RepoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

fn is_valid_segment(segment: &str) -> bool {
    !segment.is_empty()
        && segment
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::https_url("https://github.com/octocat/Hello-World")]
    #[case::git_suffix("https://github.com/octocat/Hello-World.git")]
    #[case::trailing_slash("https://github.com/octocat/Hello-World/")]
    #[case::http_www("http://www.github.com/octocat/Hello-World")]
    #[case::no_scheme("github.com/octocat/Hello-World")]
    #[case::shorthand("octocat/Hello-World")]
    #[case::extra_segments("https://github.com/octocat/Hello-World/issues/42")]
    #[case::surrounding_whitespace("  octocat/Hello-World \n")]
    fn test_parse_valid_formats(#[case] input: &str) {
        // Act
        let repo = RepoRef::parse(input).expect("Should parse repository reference");

        // Assert
        assert_eq!(repo, RepoRef::new("octocat", "Hello-World"));
    }

    #[rstest]
    #[case::empty("")]
    #[case::single_segment("octocat")]
    #[case::too_many_segments("octocat/Hello-World/extra")]
    #[case::other_host("https://gitlab.com/octocat/Hello-World")]
    #[case::missing_name("https://github.com/octocat")]
    #[case::empty_owner("/Hello-World")]
    #[case::only_git_suffix("octocat/.git")]
    #[case::host_without_path("github.com")]
    #[case::invalid_chars("octo cat/Hello World")]
    fn test_parse_invalid_formats(#[case] input: &str) {
        // Act
        let result = RepoRef::parse(input);

        // Assert
        assert!(
            matches!(result, Err(IssuesError::InvalidRepositoryReference(_))),
            "Expected invalid reference for {:?}, got {:?}",
            input,
            result
        );
    }

    #[test]
    fn test_display_and_html_url() {
        // Arrange
        let repo = RepoRef::new("rust-lang", "rust");

        // Act & Assert
        assert_eq!(repo.to_string(), "rust-lang/rust");
        assert_eq!(repo.html_url(), "https://github.com/rust-lang/rust");
    }
}
