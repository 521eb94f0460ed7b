//! Sigil Card
//!
//! Entity preview on the Morning Star grid. Clicking hands the full entity
//! record to the selection callback; the card itself keeps no state.

use dioxus::prelude::*;
use esoteric_core::{Entity, Sigil, SigilGlyph};

/// Clickable entity preview
#[component]
pub fn SigilCard(
    /// Entity to preview
    entity: Entity,
    /// Called with the full entity when the card is clicked
    on_select: EventHandler<Entity>,
) -> Element {
    rsx! {
        div {
            class: "archive-card archive-card--sigil",
            onclick: move |_| on_select.call(entity),

            h3 { class: "card-title card-title--split",
                "{entity.name}"
                if entity.has_idle_animation {
                    span {
                        class: "idle-indicator",
                        title: "Has idle animation",
                        "\u{2728}"
                    }
                }
            }
            p { class: "card-hint-muted", "Click for more details" }
        }
    }
}

/// Renders a sigil as text or as an inline vector glyph
#[component]
pub fn SigilIcon(sigil: Sigil) -> Element {
    match sigil {
        Sigil::Text(text) => rsx! {
            span { class: "sigil-text", "{text}" }
        },
        Sigil::Glyph(glyph) => rsx! {
            svg {
                class: "sigil-glyph",
                view_box: SigilGlyph::VIEW_BOX,
                fill: "currentColor",
                "aria-hidden": "true",
                for (i, d) in glyph.paths.iter().enumerate() {
                    path { key: "p{i}", d: *d }
                }
                for (i, c) in glyph.circles.iter().enumerate() {
                    circle { key: "c{i}", cx: "{c.cx}", cy: "{c.cy}", r: "{c.r}" }
                }
            }
        },
    }
}
