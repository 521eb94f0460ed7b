//! Esoteric Knowledge Hub UI Components
//!
//! Generic Dioxus primitives shared by the archive pages. Nothing in this
//! crate knows about specific articles or entities.
//!
//! ## Palette
//!
//! - **Blood (#7f1d1d)**: cards, navigation bar
//! - **Ember (#b91c1c)**: buttons, borders, image rings
//! - **Ash (#fee2e2)**: body text
//! - **Stone (#0c0a09)**: background darkness
//!
//! Class names referenced here are defined in the application's global
//! stylesheet.

pub mod components;

pub use components::*;
