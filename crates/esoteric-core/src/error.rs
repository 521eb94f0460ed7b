//! Error types for the Esoteric Knowledge Hub

use thiserror::Error;

/// Main error type for archive operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArchiveError {
    /// Page identifier is not one of the nine known sections
    #[error("Unknown page: {0}")]
    UnknownPage(String),

    /// Entity claims an idle animation but carries no GIF URL
    #[error("Entity '{0}' has an idle animation flag but no GIF")]
    MissingIdleAnimation(String),

    /// Image URL is empty or not an http(s) address
    #[error("Invalid image URL for '{name}': {url:?}")]
    InvalidImageUrl { name: String, url: String },
}

/// Result type alias using ArchiveError
pub type ArchiveResult<T> = Result<T, ArchiveError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ArchiveError::UnknownPage("necronomicon".to_string());
        assert_eq!(format!("{}", err), "Unknown page: necronomicon");
    }

    #[test]
    fn test_invalid_url_display() {
        let err = ArchiveError::InvalidImageUrl {
            name: "Mammon".to_string(),
            url: String::new(),
        };
        assert_eq!(format!("{}", err), "Invalid image URL for 'Mammon': \"\"");
    }
}
