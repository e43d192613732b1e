//! Writing the generated page and handing it to a browser.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::repo::RepoRef;

/// Default output location: `{tmpdir}/{owner}-{repo}-issues.html`.
pub fn default_output_path(repo: &RepoRef) -> PathBuf {
    std::env::temp_dir().join(format!("{}-{}-issues.html", repo.owner(), repo.name()))
}

/// Writes the page, creating missing parent directories.
///
/// # Arguments
///
/// * `path`: Destination file
/// * `html`: Complete page markup
///
/// # Returns
///
/// Number of bytes written
///
/// # Errors
///
/// Returns error if the directory cannot be created or the file cannot be
/// written.
pub fn write_document(path: &Path, html: &str) -> Result<u64> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    fs::write(path, html).with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(html.len() as u64)
}

/// Opens the file with the system's default handler.
///
/// Failure is logged and otherwise ignored.
pub fn open_in_browser(path: &Path) {
    debug!(path = %path.display(), "opening in browser");
    if let Err(e) = open::that(path) {
        warn!("Could not open {} in a browser: {}", path.display(), e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_output_path() {
        // Arrange
        let repo = RepoRef::new("octocat", "Hello-World");

        // Act
        let path = default_output_path(&repo);

        // Assert
        assert_eq!(path.parent(), Some(std::env::temp_dir().as_path()));
        assert_eq!(
            path.file_name().and_then(|n| n.to_str()),
            Some("octocat-Hello-World-issues.html")
        );
    }

    #[test]
    fn test_write_document_creates_parents() {
        // Arrange
        let temp = TempDir::new().expect("Failed to create temp dir");
        let path = temp.path().join("nested/dir/page.html");

        // Act
        let size = write_document(&path, "<html>ü</html>").expect("Should write");

        // Assert
        assert_eq!(size, "<html>ü</html>".len() as u64);
        let written = fs::read_to_string(&path).expect("Should read back");
        assert_eq!(written, "<html>ü</html>");
    }

    #[test]
    fn test_write_document_overwrites() {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let path = temp.path().join("page.html");

        write_document(&path, "first").expect("Should write");
        write_document(&path, "second").expect("Should overwrite");

        assert_eq!(fs::read_to_string(&path).expect("Should read"), "second");
    }

    #[test]
    fn test_write_document_into_file_parent_fails() {
        // Arrange
        let temp = TempDir::new().expect("Failed to create temp dir");
        let blocker = temp.path().join("blocker");
        fs::write(&blocker, "x").expect("Should create file");

        // Act
        let result = write_document(&blocker.join("page.html"), "html");

        // Assert
        assert!(result.is_err());
    }
}
