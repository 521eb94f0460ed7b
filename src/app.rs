use chrono::Datelike;
use dioxus::prelude::*;
use esoteric_core::content::{footer_text, SITE_TITLE};
use esoteric_core::{Entity, PageId};
use esoteric_ui::{NavButton, NavVariant, PentagramField};

use crate::components::DetailModal;
use crate::pages::PageRouter;
use crate::theme::GLOBAL_STYLES;

/// Replace the current page, logging the transition.
fn go_to(mut page: Signal<PageId>, target: PageId) {
    let from = *page.peek();
    if from != target {
        tracing::info!(from = %from, to = %target, "Page change");
    }
    page.set(target);
}

/// Root application component.
///
/// Owns the only two pieces of mutable state in the archive: the current
/// page and the entity shown in the detail modal.
#[component]
pub fn App() -> Element {
    let page: Signal<PageId> = use_signal(PageId::default);
    let mut selected: Signal<Option<Entity>> = use_signal(|| None);

    let select_entity = move |entity: Entity| {
        tracing::info!(entity = entity.name, "Entity selected");
        selected.set(Some(entity));
    };

    let close_entity = move |_: ()| {
        if let Some(entity) = *selected.peek() {
            tracing::info!(entity = entity.name, "Entity closed");
        }
        selected.set(None);
    };

    let current = page();
    let year = chrono::Local::now().year();

    rsx! {
        style { {GLOBAL_STYLES} }

        div { class: "archive-shell",
            PentagramField {}

            h1 { class: "site-title", "{SITE_TITLE}" }

            nav { class: "archive-nav",
                for target in PageId::ALL {
                    NavButton {
                        key: "{target}",
                        title: target.nav_label().to_string(),
                        variant: NavVariant::for_current(current == target),
                        onclick: move |_| go_to(page, target),
                    }
                }
            }

            PageRouter {
                page: current,
                on_navigate: move |target: PageId| go_to(page, target),
                on_select_entity: select_entity,
            }

            footer { class: "archive-footer",
                p { "{footer_text(year)}" }
            }

            DetailModal {
                entity: selected(),
                on_close: close_entity,
            }
        }
    }
}
