//! Archive Card Components
//!
//! Cards and the detail overlay that present registry records.

mod detail_modal;
mod expandable_card;
mod pixel_art_card;
mod sigil_card;

pub use detail_modal::DetailModal;
pub use expandable_card::ExpandableCard;
pub use pixel_art_card::PixelArtCard;
pub use sigil_card::{SigilCard, SigilIcon};
