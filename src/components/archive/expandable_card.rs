//! Expandable Text Card
//!
//! Article card showing title, author and summary; clicking anywhere on the
//! card reveals the full details.

use dioxus::prelude::*;
use esoteric_core::{ContentEntry, Expansion};

/// Click-to-expand article card
///
/// # Examples
///
/// ```rust,ignore
/// rsx! {
///     for entry in section.entries {
///         ExpandableCard { key: "{entry.title}", entry: *entry }
///     }
/// }
/// ```
#[component]
pub fn ExpandableCard(
    /// Article to display
    entry: ContentEntry,
) -> Element {
    let mut expansion = use_signal(Expansion::default);

    rsx! {
        ExpandableCardView {
            entry: entry,
            expansion: expansion(),
            on_toggle: move |_| {
                expansion.write().toggle();
                let expanded = expansion.peek().shows_details();
                tracing::debug!(title = entry.title, expanded, "Card toggled");
            },
        }
    }
}

/// Stateless rendering of a card in a given expansion state
#[component]
fn ExpandableCardView(
    entry: ContentEntry,
    expansion: Expansion,
    on_toggle: EventHandler<()>,
) -> Element {
    let hint = expansion.read_more_hint();

    rsx! {
        div {
            class: "archive-card archive-card--expandable",
            onclick: move |_| on_toggle.call(()),

            h3 { class: "card-title", "{entry.title}" }

            if let Some(author) = entry.author {
                p { class: "card-author", "- {author}" }
            }

            p { class: "card-summary",
                "{entry.summary}"
                span { class: "card-hint", " {hint}" }
            }

            if expansion.shows_details() {
                div {
                    class: "card-details",
                    // sanitized rendering; raw HTML in the source is escaped
                    dangerous_inner_html: entry.full_details.to_html(),
                }
            }
        }
    }
}
