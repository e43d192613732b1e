//! Command line configuration.

use anyhow::{Result, bail};
use clap::Parser;
use std::path::PathBuf;

use crate::github::DEFAULT_API_URL;
use crate::markdown::DEFAULT_THEME;
use crate::output::default_output_path;
use crate::repo::RepoRef;

/// Command line configuration for render-issues.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "render-issues",
    version,
    about = "Render GitHub issues into one searchable HTML page",
    long_about = None
)]
pub struct Config {
    /// Repository URL or owner/repo shorthand
    pub repo_url: String,

    /// Output HTML file (defaults to a file in the temp directory)
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// GitHub personal access token for higher rate limits
    #[arg(short, long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Fetch and include issue comments
    #[arg(short, long)]
    pub comments: bool,

    /// Do not open the page in a browser
    #[arg(long)]
    pub no_open: bool,

    /// GitHub API base URL
    #[arg(long, env = "GITHUB_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Syntax highlighting theme for code blocks (InspiredGitHub, base16-ocean.light, etc.)
    #[arg(long, default_value = DEFAULT_THEME)]
    pub theme: String,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parses configuration from command line arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Validates configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the token is blank or the API URL is not http(s).
    pub fn validate(&self) -> Result<()> {
        if self.token.as_deref().is_some_and(|t| t.trim().is_empty()) {
            bail!("GitHub token must not be empty");
        }

        if !(self.api_url.starts_with("https://") || self.api_url.starts_with("http://")) {
            bail!("API URL must start with http:// or https://: {}", self.api_url);
        }

        Ok(())
    }

    /// Returns the explicit output path or the default one for `repo`.
    pub fn output_path(&self, repo: &RepoRef) -> PathBuf {
        self.out
            .clone()
            .unwrap_or_else(|| default_output_path(repo))
    }
}
