//! Page layout wrapper component

use maud::{DOCTYPE, Markup, PreEscaped, html};

/// Wraps page content in a self-contained HTML document
///
/// Stylesheets and scripts are inlined so the output is a single file that
/// can be opened from disk or mailed around without companion assets.
///
/// # Arguments
///
/// * `title`: Page title text
/// * `styles`: CSS sources inlined into the head in order
/// * `scripts`: JavaScript sources inlined at the end of the body
/// * `body`: Page-specific body markup
///
/// # Returns
///
/// Complete HTML document with wrapped content
pub fn page_wrapper(title: &str, styles: &[&str], scripts: &[&str], body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                @for css in styles {
                    style { (PreEscaped(*css)) }
                }
            }
            body {
                a id="top" {}
                (body)
                @for js in scripts {
                    script { (PreEscaped(*js)) }
                }
            }
        }
    }
}
