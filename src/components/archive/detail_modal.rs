//! Detail Modal Component
//!
//! Overlay showing a selected entity's full record. Renders nothing while no
//! entity is selected. Only the close button dismisses it.

use dioxus::prelude::*;
use esoteric_core::{Entity, ModalPhase, Placeholder, ZoomState};
use esoteric_ui::{CloseButton, FallbackImage};

use super::SigilIcon;

/// Entity detail overlay
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     DetailModal {
///         entity: selected(),
///         on_close: move |_| selected.set(None),
///     }
/// }
/// ```
#[component]
pub fn DetailModal(
    /// Entity to show, or `None` for a closed modal
    #[props(!optional)]
    entity: Option<Entity>,
    /// Callback when the close button is pressed
    on_close: EventHandler<()>,
) -> Element {
    let Some(entity) = entity else {
        return rsx! {};
    };

    // the overlay must be the root here; keys on nested nodes are ignored
    rsx! {
        ModalOverlay {
            key: "{entity.name}",
            entity: entity,
            on_close: on_close,
        }
    }
}

/// Overlay plus dialog for one entity. Remounted per entity, so the zoom
/// signal starts fresh whenever the selection changes.
#[component]
fn ModalOverlay(entity: Entity, on_close: EventHandler<()>) -> Element {
    let mut zoom = use_signal(ZoomState::default);

    let phase = ModalPhase::of(Some(&entity), &zoom.read());
    let zoom_class = if phase == ModalPhase::OpenZoomed {
        "modal-gif modal-gif--zoomed"
    } else {
        "modal-gif"
    };

    rsx! {
        div { class: "modal-overlay",
            div {
                class: "modal-content",
                role: "dialog",
                "aria-modal": "true",

                CloseButton { onclick: move |_| on_close.call(()) }

                h3 { class: "modal-title", "{entity.name}" }

                if let Some(gif) = entity.idle_animation() {
                    div { class: "modal-gif-frame",
                        FallbackImage {
                            src: gif.to_string(),
                            alt: format!("{} idle animation", entity.name),
                            placeholder: Placeholder::IdleAnimation,
                            class: zoom_class.to_string(),
                            onclick: move |_| {
                                let zoomed = zoom.write().toggle(entity.name);
                                tracing::debug!(
                                    entity = entity.name,
                                    zoomed,
                                    "Idle animation zoom"
                                );
                            },
                        }
                    }
                }

                div { class: "modal-body",
                    p { class: "modal-field",
                        span { class: "modal-label", "Influence:" }
                        " {entity.details}"
                    }
                    div { class: "modal-field",
                        span { class: "modal-label", "Sigil:" }
                        " "
                        SigilIcon { sigil: entity.sigil }
                    }
                }
            }
        }
    }
}
