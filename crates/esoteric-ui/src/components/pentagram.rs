//! Pentagram Background Component
//!
//! Outlined five-pointed star drawn as ambient decoration behind the page
//! content. Purely visual; it never receives pointer events.

use dioxus::prelude::*;

/// Star polygon on a 100x100 viewBox
pub const PENTAGRAM_POINTS: &str =
    "50,5 61.8,38.2 98.8,38.2 69.1,61.8 80.9,95.1 50,71.8 19.1,95.1 30.9,61.8 1.2,38.2 38.2,38.2";

/// Placement of one background pentagram
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PentagramCorner {
    TopLeft,
    BottomRight,
    /// Only shown on wide windows
    UpperRight,
    /// Only shown on wide windows
    LowerLeft,
}

impl PentagramCorner {
    pub const ALL: [PentagramCorner; 4] = [
        PentagramCorner::TopLeft,
        PentagramCorner::BottomRight,
        PentagramCorner::UpperRight,
        PentagramCorner::LowerLeft,
    ];

    /// Returns the CSS class positioning this pentagram
    pub fn class(&self) -> &'static str {
        match self {
            PentagramCorner::TopLeft => "pentagram pentagram--top-left",
            PentagramCorner::BottomRight => "pentagram pentagram--bottom-right",
            PentagramCorner::UpperRight => "pentagram pentagram--upper-right pentagram--wide-only",
            PentagramCorner::LowerLeft => "pentagram pentagram--lower-left pentagram--wide-only",
        }
    }
}

/// Single outlined pentagram as an inline SVG
#[component]
pub fn Pentagram(
    /// CSS classes for size, position and rotation
    class: String,
) -> Element {
    rsx! {
        svg {
            class: "{class}",
            view_box: "0 0 100 100",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "3",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            polygon { points: PENTAGRAM_POINTS }
        }
    }
}

/// The four decorative pentagrams placed around the page edges
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     div { class: "archive-shell",
///         PentagramField {}
///         // page content on top
///     }
/// }
/// ```
#[component]
pub fn PentagramField() -> Element {
    rsx! {
        for corner in PentagramCorner::ALL {
            Pentagram { key: "{corner:?}", class: corner.class().to_string() }
        }
    }
}
