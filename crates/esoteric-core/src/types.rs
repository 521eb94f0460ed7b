//! Core record types for the archive

use serde::Serialize;

use crate::error::{ArchiveError, ArchiveResult};
use crate::page::PageId;
use crate::rich_text::RichText;

/// Static article shown in an expandable card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentEntry {
    pub title: &'static str,
    pub author: Option<&'static str>,
    /// Short teaser shown while collapsed
    pub summary: &'static str,
    /// Body shown once the card is expanded
    pub full_details: RichText,
}

/// A circle inside a sigil glyph, in 24x24 viewBox units
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GlyphCircle {
    pub cx: f32,
    pub cy: f32,
    pub r: f32,
}

/// Vector icon drawn on a 24x24 viewBox with `currentColor` fill
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SigilGlyph {
    pub paths: &'static [&'static str],
    pub circles: &'static [GlyphCircle],
}

impl SigilGlyph {
    pub const VIEW_BOX: &'static str = "0 0 24 24";
}

/// Symbolic glyph associated with an entity
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Sigil {
    /// Textual description of where the sigil can be found
    Text(&'static str),
    /// Inline vector icon
    Glyph(SigilGlyph),
}

/// Mythic or demonic figure shown on the Morning Star page
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Entity {
    pub name: &'static str,
    pub details: &'static str,
    pub sigil: Sigil,
    pub has_idle_animation: bool,
    pub idle_gif: Option<&'static str>,
}

impl Entity {
    /// Idle animation GIF, only when the flag is set and a URL is present.
    pub fn idle_animation(&self) -> Option<&'static str> {
        if !self.has_idle_animation {
            return None;
        }
        self.idle_gif.filter(|url| !url.is_empty())
    }

    /// Check that an entity flagged as animated carries a usable GIF URL.
    ///
    /// Rendering never depends on this; it is the construction-time check
    /// applied to the static registry.
    pub fn validate(&self) -> ArchiveResult<()> {
        if !self.has_idle_animation {
            return Ok(());
        }
        match self.idle_gif {
            None | Some("") => Err(ArchiveError::MissingIdleAnimation(self.name.to_string())),
            Some(url) => validate_image_url(self.name, url),
        }
    }
}

/// Pixel-art portrait shown in the gallery
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PixelArtEntry {
    pub name: &'static str,
    pub image_url: &'static str,
}

impl PixelArtEntry {
    pub fn validate(&self) -> ArchiveResult<()> {
        validate_image_url(self.name, self.image_url)
    }
}

/// A text page: a heading plus a list of expandable entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Section {
    pub page: PageId,
    pub entries: &'static [ContentEntry],
}

impl Section {
    pub fn heading(&self) -> &'static str {
        self.page.heading()
    }
}

fn validate_image_url(name: &str, url: &str) -> ArchiveResult<()> {
    if url.starts_with("https://") || url.starts_with("http://") {
        Ok(())
    } else {
        Err(ArchiveError::InvalidImageUrl {
            name: name.to_string(),
            url: url.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entity(has_idle_animation: bool, idle_gif: Option<&'static str>) -> Entity {
        Entity {
            name: "Test",
            details: "details",
            sigil: Sigil::Text("none"),
            has_idle_animation,
            idle_gif,
        }
    }

    #[test]
    fn idle_animation_requires_flag() {
        let e = entity(false, Some("https://example.com/a.gif"));
        assert_eq!(e.idle_animation(), None);
        assert!(e.validate().is_ok());
    }

    #[test]
    fn idle_animation_requires_url() {
        let e = entity(true, Some(""));
        assert_eq!(e.idle_animation(), None);
        assert_eq!(
            e.validate(),
            Err(ArchiveError::MissingIdleAnimation("Test".to_string()))
        );
        assert!(entity(true, None).validate().is_err());
    }

    #[test]
    fn idle_animation_present() {
        let e = entity(true, Some("https://example.com/a.gif"));
        assert_eq!(e.idle_animation(), Some("https://example.com/a.gif"));
        assert!(e.validate().is_ok());
    }

    #[test]
    fn idle_animation_rejects_non_http() {
        let e = entity(true, Some("ftp://example.com/a.gif"));
        assert!(matches!(
            e.validate(),
            Err(ArchiveError::InvalidImageUrl { .. })
        ));
    }

    #[test]
    fn entity_serializes_camel_case() {
        let json = serde_json::to_value(entity(true, Some("https://x/y.gif"))).unwrap();
        assert_eq!(json["hasIdleAnimation"], true);
        assert_eq!(json["idleGif"], "https://x/y.gif");
        assert_eq!(json["sigil"]["text"], "none");
    }
}
