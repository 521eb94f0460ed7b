//! Esoteric Knowledge Hub Core Library
//!
//! Renderer-independent half of the archive: the static content registry,
//! the record types it is made of, page identifiers and the small state
//! machines behind card expansion, modal zoom and image fallback.
//!
//! ## Overview
//!
//! The archive is a read-only browser over compiled-in content. The only
//! mutable state lives in the UI shell (current page, selected entity) and
//! in per-card toggles; everything here is either immutable data or a pure
//! value type the UI keeps in a signal.
//!
//! ```
//! use esoteric_core::{content, PageId};
//!
//! assert_eq!(PageId::resolve("morningStar"), PageId::MorningStar);
//! assert_eq!(PageId::resolve("no-such-page"), PageId::Home);
//! assert_eq!(content::entities().len(), 6);
//! ```

pub mod content;
pub mod error;
pub mod image;
pub mod page;
pub mod rich_text;
pub mod state;
pub mod types;

// Re-exports
pub use error::{ArchiveError, ArchiveResult};
pub use image::{ImageSource, Placeholder};
pub use page::PageId;
pub use rich_text::RichText;
pub use state::{Expansion, ModalPhase, ZoomState};
pub use types::*;
