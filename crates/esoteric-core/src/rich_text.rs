//! Rich text fragments shown in expanded cards.
//!
//! Card details are authored as Markdown and converted to HTML with
//! pulldown-cmark. Conversion always crosses an explicit boundary:
//!
//! - [`RichText::to_html`] sanitizes. Raw HTML embedded in the source is
//!   escaped into visible text and script-capable link targets are replaced.
//! - [`RichText::to_trusted_html`] passes raw HTML through untouched and is
//!   only meant for fragments whose provenance is known.

use pulldown_cmark::{html, CowStr, Event, Options, Parser, Tag};
use serde::Serialize;

/// URL schemes that may execute code when followed
const UNSAFE_SCHEMES: [&str; 3] = ["javascript:", "vbscript:", "data:"];

/// Markdown fragment with an explicit sanitize-or-trust rendering boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RichText(&'static str);

impl RichText {
    pub const fn new(source: &'static str) -> Self {
        Self(source)
    }

    /// Render to HTML, escaping any embedded raw HTML.
    pub fn to_html(&self) -> String {
        render(self.0, false)
    }

    /// Render to HTML, passing embedded raw HTML through as-is.
    pub fn to_trusted_html(&self) -> String {
        render(self.0, true)
    }
}

fn render(source: &str, trusted: bool) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(source, options).map(|event| {
        if trusted {
            event
        } else {
            sanitize(event)
        }
    });

    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    html_output
}

fn sanitize(event: Event<'_>) -> Event<'_> {
    match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        Event::Start(Tag::Link {
            link_type,
            dest_url,
            title,
            id,
        }) => Event::Start(Tag::Link {
            link_type,
            dest_url: neutralize(dest_url),
            title,
            id,
        }),
        Event::Start(Tag::Image {
            link_type,
            dest_url,
            title,
            id,
        }) => Event::Start(Tag::Image {
            link_type,
            dest_url: neutralize(dest_url),
            title,
            id,
        }),
        other => other,
    }
}

fn neutralize(url: CowStr<'_>) -> CowStr<'_> {
    let lowered = url.trim_start().to_ascii_lowercase();
    if UNSAFE_SCHEMES.iter().any(|scheme| lowered.starts_with(scheme)) {
        tracing::warn!("Dropped unsafe link target in rich text");
        CowStr::Borrowed("#")
    } else {
        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_paragraph() {
        let text = RichText::new("The seven principles.");
        assert_eq!(text.to_html(), "<p>The seven principles.</p>\n");
    }

    #[test]
    fn markdown_list_renders_strong_labels() {
        let text = RichText::new("- **Gnosis:** altered state\n- **Banishing:** closing\n");
        let html = text.to_html();
        assert!(html.starts_with("<ul>"));
        assert!(html.contains("<li><strong>Gnosis:</strong> altered state</li>"));
    }

    #[test]
    fn sanitized_escapes_script() {
        let text = RichText::new("Hello <script>alert(1)</script> world");
        let html = text.to_html();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn sanitized_escapes_html_block() {
        let text = RichText::new("<div onclick=\"steal()\">boo</div>\n");
        let html = text.to_html();
        assert!(!html.contains("<div"));
    }

    #[test]
    fn trusted_keeps_html() {
        let text = RichText::new("Hello <em>there</em>");
        assert!(text.to_trusted_html().contains("<em>there</em>"));
        assert!(text.to_html().contains("&lt;em&gt;"));
    }

    #[test]
    fn javascript_links_are_neutralized() {
        let text = RichText::new("[click](javascript:alert(1)) and [ok](https://example.com)");
        let html = text.to_html();
        assert!(!html.contains("javascript:"));
        assert!(html.contains("href=\"#\""));
        assert!(html.contains("href=\"https://example.com\""));
    }
}
