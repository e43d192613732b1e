//! Label chip components

use maud::{Markup, html};

use crate::issue::Label;

/// Renders issue labels as colored chips
///
/// Each chip uses the label color as background with a contrasting text
/// color. Renders nothing for an empty label list.
pub fn label_chips(labels: &[Label]) -> Markup {
    html! {
        @if !labels.is_empty() {
            div class="labels" {
                @for label in labels {
                    span class="label"
                        style=(format!("background-color: #{}; color: {};", label.color(), label.text_color())) {
                        (label.name())
                    }
                }
            }
        }
    }
}
