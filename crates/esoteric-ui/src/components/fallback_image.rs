//! Fallback Image
//!
//! Remote image that swaps to a placeholder when the host reports a load
//! error, so a broken-image icon is never left on screen.

use dioxus::prelude::*;
use esoteric_core::{ImageSource, Placeholder};

/// Remote image with a one-shot placeholder fallback
///
/// The image follows its `src` prop: a new URL starts over from the primary
/// source, even when the component instance is reused.
///
/// # Examples
///
/// ```rust,ignore
/// rsx! {
///     FallbackImage {
///         src: entry.image_url.to_string(),
///         alt: format!("{} pixel art", entry.name),
///         placeholder: Placeholder::PixelArt,
///     }
/// }
/// ```
#[component]
pub fn FallbackImage(
    /// Remote image URL
    src: String,
    /// Alt text for accessibility
    alt: String,
    /// Placeholder used after a load error
    placeholder: Placeholder,
    /// Optional CSS class
    #[props(default = None)]
    class: Option<String>,
    /// Optional click handler
    #[props(default)]
    onclick: Option<EventHandler<()>>,
) -> Element {
    let mut source = use_signal(|| ImageSource::new(src.clone(), placeholder));

    // a failure recorded for an earlier URL does not carry over
    let image = {
        let current = source.read();
        if current.primary() == src {
            current.clone()
        } else {
            ImageSource::new(src.clone(), placeholder)
        }
    };

    let base_class = class.unwrap_or_else(|| "archive-img".to_string());
    let css_class = if image.is_fallback() {
        format!("{base_class} img-fallback")
    } else {
        base_class
    };
    let size = placeholder.size();
    let shown = image.current().to_string();

    rsx! {
        img {
            class: "{css_class}",
            src: "{shown}",
            alt: "{alt}",
            width: "{size}",
            height: "{size}",
            onerror: move |_| {
                let mut current = source.write();
                if current.primary() != src {
                    *current = ImageSource::new(src.clone(), placeholder);
                }
                if current.mark_failed() {
                    tracing::warn!(
                        "Image failed to load, showing placeholder: {}",
                        current.primary()
                    );
                }
            },
            onclick: move |_| {
                if let Some(handler) = &onclick {
                    handler.call(());
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use dioxus::dioxus_core::{NoOpMutations, ScopeId};

    use super::*;

    const FIRST: &str = "https://i.ibb.co/first/Enn.png";
    const SECOND: &str = "https://i.ibb.co/second/Lucifer.png";

    thread_local! {
        static URL: RefCell<&'static str> = const { RefCell::new(FIRST) };
    }

    #[allow(non_snake_case)]
    fn Slot() -> Element {
        let src = URL.with(|url| *url.borrow());
        rsx! {
            FallbackImage {
                src: src.to_string(),
                alt: "portrait".to_string(),
                placeholder: Placeholder::PixelArt,
            }
        }
    }

    #[test]
    fn renders_primary_url_at_placeholder_size() {
        URL.with(|url| *url.borrow_mut() = FIRST);
        let mut dom = VirtualDom::new(Slot);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);
        assert!(html.contains(FIRST));
        assert!(html.contains("160"));
        assert!(!html.contains("img-fallback"));
    }

    #[test]
    fn reused_instance_follows_new_src() {
        URL.with(|url| *url.borrow_mut() = FIRST);
        let mut dom = VirtualDom::new(Slot);
        dom.rebuild_in_place();

        URL.with(|url| *url.borrow_mut() = SECOND);
        dom.mark_dirty(ScopeId::APP);
        dom.render_immediate(&mut NoOpMutations);
        let html = dioxus_ssr::render(&dom);
        assert!(html.contains(SECOND));
        assert!(!html.contains(FIRST));
    }
}
