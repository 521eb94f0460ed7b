//! Visual theme for the archive.

mod styles;

pub use styles::GLOBAL_STYLES;
