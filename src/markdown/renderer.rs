//! Issue body rendering with GitHub Flavored Markdown.

use comrak::Options;
use syntect::html::{ClassStyle, ClassedHTMLGenerator};
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;

use crate::error::{IssuesError, Result};

/// Placeholder rendered for issues and comments without text.
pub const EMPTY_BODY_HTML: &str = "<p><em>No description provided.</em></p>";

/// CSS class prefix for highlighted tokens, shared with the theme stylesheet.
pub(crate) const CLASS_PREFIX: &str = "hljs-";

const CODE_OPEN: &str = "<code class=\"language-";
const CODE_CLOSE: &str = "</code>";

/// Renders issue and comment markdown to HTML fragments.
///
/// Enables the GFM extensions GitHub applies to issue bodies: tables,
/// strikethrough, autolinks, task lists and footnotes. Raw HTML inside
/// bodies is escaped, not passed through, because issue text is written by
/// arbitrary users. Fenced code blocks with a known language are
/// highlighted with syntect CSS classes.
pub struct MarkdownRenderer<'a> {
    options: Options<'a>,
    syntax_set: SyntaxSet,
}

impl<'a> MarkdownRenderer<'a> {
    pub fn new() -> Self {
        let mut options = Options::default();

        options.extension.strikethrough = true;
        options.extension.table = true;
        options.extension.autolink = true;
        options.extension.tasklist = true;
        options.extension.footnotes = true;

        // Untrusted input: show raw HTML as text
        options.render.unsafe_ = false;
        options.render.escape = true;

        Self {
            options,
            syntax_set: SyntaxSet::load_defaults_newlines(),
        }
    }

    /// Renders markdown to HTML.
    ///
    /// # Errors
    ///
    /// Returns `MarkdownRenderError` if a code block cannot be highlighted.
    pub fn render(&self, content: &str) -> Result<String> {
        let html = comrak::markdown_to_html(content, &self.options);
        self.highlight_code_blocks(&html)
    }

    /// Renders an issue or comment body for display.
    ///
    /// Blank bodies become [`EMPTY_BODY_HTML`]. Rendering failures are
    /// logged and degrade to the escaped raw text in a `<pre>` block.
    pub fn render_body(&self, content: &str) -> String {
        if content.trim().is_empty() {
            return EMPTY_BODY_HTML.to_string();
        }

        match self.render(content) {
            Ok(html) => html,
            Err(e) => {
                tracing::warn!("{}; falling back to raw text", e);
                format!("<pre class=\"raw-body\">{}</pre>", html_escape(content))
            }
        }
    }

    /// Replaces the text of `<code class="language-X">` blocks with
    /// highlighted spans.
    fn highlight_code_blocks(&self, html: &str) -> Result<String> {
        let mut result = String::with_capacity(html.len());
        let mut copied = 0;

        while let Some(block) = find_code_block(html, copied) {
            let language = &html[block.language.clone()];
            let code = html_decode(&html[block.content.clone()]);
            let highlighted = self.highlight_code(&code, language)?;

            result.push_str(&html[copied..block.start]);
            result.push_str(CODE_OPEN);
            result.push_str(language);
            result.push_str("\">");
            result.push_str(&highlighted);
            result.push_str(CODE_CLOSE);

            copied = block.end;
        }

        result.push_str(&html[copied..]);
        Ok(result)
    }

    /// Highlights code for a language token, escaping it when unknown.
    fn highlight_code(&self, code: &str, language: &str) -> Result<String> {
        if code.is_empty() {
            return Ok(String::new());
        }

        let Some(syntax) = self
            .syntax_set
            .find_syntax_by_token(language)
            .or_else(|| self.syntax_set.find_syntax_by_extension(language))
        else {
            return Ok(html_escape(code));
        };

        let mut generator = ClassedHTMLGenerator::new_with_class_style(
            syntax,
            &self.syntax_set,
            ClassStyle::SpacedPrefixed {
                prefix: CLASS_PREFIX,
            },
        );

        for line in LinesWithEndings::from(code) {
            generator
                .parse_html_for_line_which_includes_newline(line)
                .map_err(|e| {
                    IssuesError::MarkdownRenderError(format!(
                        "cannot highlight {} code block: {}",
                        language, e
                    ))
                })?;
        }

        Ok(generator.finalize())
    }
}

impl<'a> Default for MarkdownRenderer<'a> {
    fn default() -> Self {
        Self::new()
    }
}

/// Byte ranges of one fenced code block in comrak output.
struct CodeBlock {
    start: usize,
    language: std::ops::Range<usize>,
    content: std::ops::Range<usize>,
    end: usize,
}

/// Finds the next complete language tagged code block at or after `from`.
fn find_code_block(html: &str, from: usize) -> Option<CodeBlock> {
    let mut search = from;

    loop {
        let start = search + html[search..].find(CODE_OPEN)?;
        let lang_start = start + CODE_OPEN.len();

        let parsed = html[lang_start..].find('"').and_then(|lang_len| {
            let lang_end = lang_start + lang_len;
            let content_start = lang_end + html[lang_end..].find('>')? + 1;
            let content_end = content_start + html[content_start..].find(CODE_CLOSE)?;
            Some((lang_end, content_start, content_end))
        });

        match parsed {
            Some((lang_end, content_start, content_end)) => {
                return Some(CodeBlock {
                    start,
                    language: lang_start..lang_end,
                    content: content_start..content_end,
                    end: content_end + CODE_CLOSE.len(),
                });
            }
            None => search = start + 1,
        }
    }
}

/// Reverses the entity escaping comrak applies inside code blocks.
fn html_decode(html: &str) -> String {
    html.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

fn html_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
