//! Remote image sources with placeholder fallback.
//!
//! Remote hosts are not guaranteed to be reachable. When the rendering host
//! reports a load error the image switches to a placeholder exactly once,
//! so a broken image is never left on screen and a failing placeholder
//! cannot trigger an error loop.

/// Placeholder assets for the two kinds of remote images
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    /// 128x128 stand-in for an entity's idle animation GIF
    IdleAnimation,
    /// 160x160 stand-in for a pixel art portrait
    PixelArt,
}

impl Placeholder {
    pub fn url(&self) -> &'static str {
        match self {
            Placeholder::IdleAnimation => "https://placehold.co/128x128/400000/ffffff?text=GIF+Error",
            Placeholder::PixelArt => "https://placehold.co/160x160/400000/ffffff?text=Image+Error",
        }
    }

    /// Edge length in pixels
    pub fn size(&self) -> u32 {
        match self {
            Placeholder::IdleAnimation => 128,
            Placeholder::PixelArt => 160,
        }
    }
}

/// Source URL for an image element, tracking whether it fell back
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSource {
    primary: String,
    placeholder: Placeholder,
    failed: bool,
}

impl ImageSource {
    pub fn new(primary: impl Into<String>, placeholder: Placeholder) -> Self {
        Self {
            primary: primary.into(),
            placeholder,
            failed: false,
        }
    }

    /// URL the image element should currently display
    pub fn current(&self) -> &str {
        if self.failed {
            self.placeholder.url()
        } else {
            &self.primary
        }
    }

    pub fn primary(&self) -> &str {
        &self.primary
    }

    pub fn is_fallback(&self) -> bool {
        self.failed
    }

    /// Record a load failure. Returns `true` only for the first failure,
    /// which is when the source switches to the placeholder.
    pub fn mark_failed(&mut self) -> bool {
        if self.failed {
            return false;
        }
        self.failed = true;
        true
    }
}
