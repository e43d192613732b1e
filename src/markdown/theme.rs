//! Code highlighting stylesheets from bundled syntect themes.

use anyhow::{Context, Result, anyhow};
use syntect::highlighting::ThemeSet;
use syntect::html::{ClassStyle, css_for_theme_with_class_style};

use super::renderer::CLASS_PREFIX;

/// Theme used when none is configured.
pub const DEFAULT_THEME: &str = "InspiredGitHub";

/// Generates CSS rules for highlighted code blocks.
///
/// # Arguments
///
/// * `name`: Bundled syntect theme name (InspiredGitHub, base16-ocean.light, etc.)
///
/// # Errors
///
/// Returns error listing the available themes if `name` is unknown.
pub fn theme_css(name: &str) -> Result<String> {
    let themes = ThemeSet::load_defaults();

    let theme = themes.themes.get(name).ok_or_else(|| {
        let mut available: Vec<&str> = themes.themes.keys().map(String::as_str).collect();
        available.sort_unstable();
        anyhow!(
            "Unknown theme '{}'. Available themes: {}",
            name,
            available.join(", ")
        )
    })?;

    css_for_theme_with_class_style(
        theme,
        ClassStyle::SpacedPrefixed {
            prefix: CLASS_PREFIX,
        },
    )
    .with_context(|| format!("Failed to generate stylesheet for theme {}", name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme_css_uses_prefix() {
        // Act
        let css = theme_css(DEFAULT_THEME).expect("Default theme should exist");

        // Assert
        assert!(css.contains(".hljs-"));
    }

    #[test]
    fn test_unknown_theme_lists_alternatives() {
        // Act
        let err = theme_css("No-Such-Theme").expect_err("Unknown theme should fail");

        // Assert
        let message = err.to_string();
        assert!(message.contains("No-Such-Theme"));
        assert!(message.contains("InspiredGitHub"));
    }
}
