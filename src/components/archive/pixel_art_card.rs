use dioxus::prelude::*;
use esoteric_core::{PixelArtEntry, Placeholder};
use esoteric_ui::FallbackImage;

/// Gallery tile: name above a pixel art portrait
#[component]
pub fn PixelArtCard(entry: PixelArtEntry) -> Element {
    rsx! {
        div { class: "archive-card archive-card--pixel",
            h3 { class: "card-title card-title--small", "{entry.name}" }
            FallbackImage {
                src: entry.image_url.to_string(),
                alt: format!("{} pixel art", entry.name),
                placeholder: Placeholder::PixelArt,
                class: "pixel-art-img".to_string(),
            }
        }
    }
}
