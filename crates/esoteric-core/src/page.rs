//! Page identifiers for the archive's navigable sections.

use serde::Serialize;

use crate::error::{ArchiveError, ArchiveResult};

/// One of the nine navigable sections of the archive.
///
/// The set is closed: anything that is not a known identifier resolves to
/// [`PageId::Home`] through [`PageId::resolve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PageId {
    #[default]
    Home,
    UniversalLaws,
    Demonology,
    ChaosMagic,
    MorningStar,
    SatanicTemple,
    Rituals,
    LeftHandPath,
    PixelArtGallery,
}

impl PageId {
    /// All pages in navigation bar order.
    pub const ALL: [PageId; 9] = [
        PageId::Home,
        PageId::UniversalLaws,
        PageId::Demonology,
        PageId::ChaosMagic,
        PageId::MorningStar,
        PageId::SatanicTemple,
        PageId::Rituals,
        PageId::LeftHandPath,
        PageId::PixelArtGallery,
    ];

    /// Stable string identifier for this page
    pub fn as_str(&self) -> &'static str {
        match self {
            PageId::Home => "home",
            PageId::UniversalLaws => "universalLaws",
            PageId::Demonology => "demonology",
            PageId::ChaosMagic => "chaosMagic",
            PageId::MorningStar => "morningStar",
            PageId::SatanicTemple => "satanicTemple",
            PageId::Rituals => "rituals",
            PageId::LeftHandPath => "leftHandPath",
            PageId::PixelArtGallery => "pixelArtGallery",
        }
    }

    /// Label shown on the navigation bar button
    pub fn nav_label(&self) -> &'static str {
        match self {
            PageId::Home => "Home",
            PageId::UniversalLaws => "Universal Laws",
            PageId::Demonology => "Demonology",
            PageId::ChaosMagic => "Chaos Magic",
            PageId::MorningStar => "Morning Star",
            PageId::SatanicTemple => "The Satanic Temple",
            PageId::Rituals => "Rituals",
            PageId::LeftHandPath => "Left Hand Path",
            PageId::PixelArtGallery => "Pixel Art Gallery",
        }
    }

    /// Heading rendered at the top of the page view
    pub fn heading(&self) -> &'static str {
        match self {
            PageId::Home => "Welcome to the Esoteric Archive",
            PageId::UniversalLaws => "Universal Laws",
            PageId::Demonology => "Demonology",
            PageId::ChaosMagic => "Chaos Magic",
            PageId::MorningStar => "Morning Star, Temptations, Sigils",
            PageId::SatanicTemple => "The Satanic Temple",
            PageId::Rituals => "Rituals and Practices",
            PageId::LeftHandPath => "The Left-Hand Path",
            PageId::PixelArtGallery => "Demonic Pixel Art Gallery",
        }
    }

    /// Strict lookup of a page by its identifier.
    pub fn parse(id: &str) -> ArchiveResult<Self> {
        Self::ALL
            .into_iter()
            .find(|page| page.as_str() == id)
            .ok_or_else(|| ArchiveError::UnknownPage(id.to_string()))
    }

    /// Total lookup: unknown identifiers fall back to the home page.
    pub fn resolve(id: &str) -> Self {
        Self::parse(id).unwrap_or_else(|err| {
            tracing::debug!("{}, falling back to home", err);
            PageId::Home
        })
    }
}

impl std::fmt::Display for PageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PageId {
    type Err = ArchiveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
