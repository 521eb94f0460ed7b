//! Page views and the page router.

mod gallery;
mod home;
mod morning_star;
mod section;

pub use gallery::PixelArtGallery;
pub use home::Home;
pub use morning_star::MorningStar;
pub use section::SectionPage;

use dioxus::prelude::*;
use esoteric_core::{content, Entity, PageId};

/// Renders the view for `page`.
///
/// Every identifier has an explicit arm. Text pages are looked up in the
/// content registry; a text page without a registered section falls back
/// to the home view, the same policy applied to unknown identifiers by
/// [`PageId::resolve`].
#[component]
pub fn PageRouter(
    /// Page currently selected in the shell
    page: PageId,
    /// Page change requests from in-page links
    on_navigate: EventHandler<PageId>,
    /// Entity selection from the Morning Star grid
    on_select_entity: EventHandler<Entity>,
) -> Element {
    match page {
        PageId::Home => rsx! {
            Home { on_navigate: on_navigate }
        },
        PageId::UniversalLaws
        | PageId::Demonology
        | PageId::ChaosMagic
        | PageId::SatanicTemple
        | PageId::Rituals
        | PageId::LeftHandPath => match content::section(page) {
            Some(section) => rsx! {
                SectionPage { key: "{page}", section: *section }
            },
            None => {
                tracing::warn!(page = %page, "No section registered, showing home");
                rsx! { Home { on_navigate: on_navigate } }
            }
        },
        PageId::MorningStar => rsx! {
            MorningStar { on_select_entity: on_select_entity }
        },
        PageId::PixelArtGallery => rsx! {
            PixelArtGallery {}
        },
    }
}
