//! Home page - entry point to the archive.

use dioxus::prelude::*;
use esoteric_core::content::{HOME_INTRO, HOME_SHORTCUTS};
use esoteric_core::PageId;
use esoteric_ui::NavButton;

/// Welcome panel with shortcuts into the main sections.
#[component]
pub fn Home(on_navigate: EventHandler<PageId>) -> Element {
    let heading = PageId::Home.heading();

    rsx! {
        section { class: "page-panel page-panel--home",
            h2 { class: "page-heading page-heading--plain", "{heading}" }
            p { class: "home-intro", "{HOME_INTRO}" }

            div { class: "home-shortcuts",
                for (label, target) in HOME_SHORTCUTS {
                    NavButton {
                        key: "{target}",
                        title: label.to_string(),
                        onclick: move |_| on_navigate.call(target),
                    }
                }
            }
        }
    }
}
