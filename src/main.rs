use anyhow::{Context, Result};
use render_issues::{Config, Document, IssueFetcher, MarkdownRenderer, RepoRef, output, pages};
use std::process::ExitCode;
use tracing::{Level, info};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Builds the log filter.
///
/// Non-empty `RUST_LOG` directives win outright, bare levels included.
/// Otherwise the crate logs at info, or debug with `--verbose`.
fn log_filter(verbose: bool, directives: Option<&str>) -> EnvFilter {
    let level = if verbose { Level::DEBUG } else { Level::INFO };

    directives
        .filter(|d| !d.trim().is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::default().add_directive(level.into()))
}

/// Installs the stderr log subscriber.
fn init_tracing(verbose: bool) {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(log_filter(verbose, directives.as_deref()))
        .try_init();
}

fn run(config: &Config) -> Result<()> {
    config.validate().context("Invalid configuration")?;

    let repo = RepoRef::parse(&config.repo_url)?;
    let highlight_css = render_issues::theme_css(&config.theme)?;

    let fetcher = IssueFetcher::new(config.api_url.as_str(), config.token.as_deref())
        .context("Failed to create GitHub client")?;

    let issues = fetcher
        .fetch_issues(&repo, config.comments)
        .with_context(|| format!("Failed to fetch issues for {}", repo))?;

    if issues.is_empty() {
        info!("No issues found in {}", repo);
        return Ok(());
    }

    let renderer = MarkdownRenderer::new();
    let document = Document::assemble(&repo, &issues, &renderer, config.comments);
    let html = pages::issues::generate(&document, &highlight_css).into_string();

    let path = config.output_path(&repo);
    let size = output::write_document(&path, &html)?;
    info!(
        "Generated: {} ({})",
        path.display(),
        render_issues::format_file_size(size)
    );

    if !config.no_open {
        output::open_in_browser(&path);
    }

    Ok(())
}

fn main() -> ExitCode {
    let config = Config::parse();
    init_tracing(config.verbose);

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
