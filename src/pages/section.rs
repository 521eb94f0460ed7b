//! Text section page - heading plus a stack of expandable cards.

use dioxus::prelude::*;
use esoteric_core::Section;

use crate::components::ExpandableCard;

#[component]
pub fn SectionPage(section: Section) -> Element {
    rsx! {
        section { class: "page-panel",
            h2 { class: "page-heading", "{section.heading()}" }
            div { class: "card-stack",
                for entry in section.entries {
                    ExpandableCard { key: "{entry.title}", entry: *entry }
                }
            }
        }
    }
}
