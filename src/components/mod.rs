//! UI Components for the Esoteric Knowledge Hub.
//!
//! Archive-specific cards and overlays. Generic primitives live in the
//! `esoteric-ui` crate.

pub mod archive;

pub use archive::{DetailModal, ExpandableCard, PixelArtCard, SigilCard};
