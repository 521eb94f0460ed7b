//! Pixel art gallery page.

use dioxus::prelude::*;
use esoteric_core::{content, PageId};

use crate::components::PixelArtCard;

#[component]
pub fn PixelArtGallery() -> Element {
    let heading = PageId::PixelArtGallery.heading();

    rsx! {
        section { class: "page-panel",
            h2 { class: "page-heading", "{heading}" }
            div { class: "card-grid card-grid--three",
                for entry in content::pixel_art() {
                    PixelArtCard { key: "{entry.name}", entry: *entry }
                }
            }
        }
    }
}
