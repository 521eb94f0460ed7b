//! Button Components
//!
//! - Nav: pill button used in the navigation bar and home shortcuts
//! - Close: dismiss button for dialogs

use dioxus::prelude::*;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum NavVariant {
    /// Regular navigation entry
    #[default]
    Link,
    /// Entry for the page currently on screen
    Active,
}

impl NavVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            NavVariant::Link => "nav-link",
            NavVariant::Active => "nav-link nav-link--active",
        }
    }

    pub fn for_current(is_current: bool) -> Self {
        if is_current {
            NavVariant::Active
        } else {
            NavVariant::Link
        }
    }
}

/// Properties for the NavButton component
#[derive(Clone, PartialEq, Props)]
pub struct NavButtonProps {
    /// Button label
    pub title: String,
    /// Click handler
    pub onclick: EventHandler<()>,
    #[props(default)]
    pub variant: NavVariant,
}

/// Navigation pill button
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     NavButton {
///         title: "Demonology".to_string(),
///         onclick: move |_| page.set(PageId::Demonology),
///     }
/// }
/// ```
#[component]
pub fn NavButton(props: NavButtonProps) -> Element {
    let class = props.variant.class();

    rsx! {
        button {
            class: "{class}",
            r#type: "button",
            onclick: move |_| props.onclick.call(()),
            "{props.title}"
        }
    }
}

/// Round "×" button pinned to the corner of a dialog. The click does not
/// reach the overlay underneath.
#[component]
pub fn CloseButton(onclick: EventHandler<()>) -> Element {
    rsx! {
        button {
            class: "close-btn",
            r#type: "button",
            "aria-label": "Close",
            onclick: move |evt| {
                evt.stop_propagation();
                onclick.call(());
            },
            "\u{00D7}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_variant_classes() {
        assert_eq!(NavVariant::Link.class(), "nav-link");
        assert_eq!(NavVariant::Active.class(), "nav-link nav-link--active");
    }

    #[test]
    fn nav_variant_for_current() {
        assert_eq!(NavVariant::for_current(true), NavVariant::Active);
        assert_eq!(NavVariant::for_current(false), NavVariant::Link);
        assert_eq!(NavVariant::default(), NavVariant::Link);
    }
}
