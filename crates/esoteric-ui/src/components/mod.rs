//! Reusable UI components
//!
//! - Metal Mania for headings, IBM Plex Sans for body text
//! - Creepster for the site title only

mod button;
mod fallback_image;
mod pentagram;

pub use button::*;
pub use fallback_image::*;
pub use pentagram::*;
