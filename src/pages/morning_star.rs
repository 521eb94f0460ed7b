//! Morning Star page - grid of selectable entities.

use dioxus::prelude::*;
use esoteric_core::{content, Entity, PageId};

use crate::components::SigilCard;

/// Entity grid. Selection is forwarded to the shell, which opens the modal.
#[component]
pub fn MorningStar(on_select_entity: EventHandler<Entity>) -> Element {
    let heading = PageId::MorningStar.heading();

    rsx! {
        section { class: "page-panel",
            h2 { class: "page-heading", "{heading}" }
            div { class: "card-grid card-grid--two",
                for entity in content::entities() {
                    SigilCard {
                        key: "{entity.name}",
                        entity: *entity,
                        on_select: on_select_entity,
                    }
                }
            }
        }
    }
}
