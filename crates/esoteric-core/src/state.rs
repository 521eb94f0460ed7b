//! Transient UI state for cards and the entity modal.
//!
//! These are plain values held per component instance. Nothing here is
//! shared between instances, so a toggle on one card or entity can never
//! leak into another.

use crate::types::Entity;

/// Expanded/collapsed state of a content card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Expansion {
    #[default]
    Collapsed,
    Expanded,
}

impl Expansion {
    pub fn toggle(&mut self) {
        *self = match self {
            Expansion::Collapsed => Expansion::Expanded,
            Expansion::Expanded => Expansion::Collapsed,
        };
    }

    /// Whether the full details body is rendered
    pub fn shows_details(&self) -> bool {
        matches!(self, Expansion::Expanded)
    }

    /// Suffix appended to the summary line
    pub fn read_more_hint(&self) -> &'static str {
        match self {
            Expansion::Collapsed => "... (click to read more)",
            Expansion::Expanded => "",
        }
    }
}

/// Zoom toggle scoped to a single subject (an entity name).
///
/// Asking about any other subject reports unzoomed, and toggling a new
/// subject starts from unzoomed, so a zoom applied to one entity's image
/// is never visible on the next entity shown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ZoomState {
    subject: Option<String>,
    zoomed: bool,
}

impl ZoomState {
    pub fn is_zoomed(&self, subject: &str) -> bool {
        self.zoomed && self.subject.as_deref() == Some(subject)
    }

    /// Flip zoom for `subject` and return the new value.
    pub fn toggle(&mut self, subject: &str) -> bool {
        let next = !self.is_zoomed(subject);
        self.subject = Some(subject.to_string());
        self.zoomed = next;
        next
    }
}

/// Observable phase of the detail modal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalPhase {
    Closed,
    OpenUnzoomed,
    OpenZoomed,
}

impl ModalPhase {
    pub fn of(selected: Option<&Entity>, zoom: &ZoomState) -> Self {
        match selected {
            None => ModalPhase::Closed,
            Some(entity) if zoom.is_zoomed(entity.name) => ModalPhase::OpenZoomed,
            Some(_) => ModalPhase::OpenUnzoomed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expansion_starts_collapsed() {
        let state = Expansion::default();
        assert!(!state.shows_details());
        assert_eq!(state.read_more_hint(), "... (click to read more)");
    }

    #[test]
    fn expansion_double_toggle_is_identity() {
        let mut state = Expansion::default();
        state.toggle();
        assert!(state.shows_details());
        assert_eq!(state.read_more_hint(), "");
        state.toggle();
        assert_eq!(state, Expansion::Collapsed);
    }

    #[test]
    fn zoom_toggles_for_same_subject() {
        let mut zoom = ZoomState::default();
        assert!(zoom.toggle("Asmodeus"));
        assert!(zoom.is_zoomed("Asmodeus"));
        assert!(!zoom.toggle("Asmodeus"));
        assert!(!zoom.is_zoomed("Asmodeus"));
    }

    #[test]
    fn zoom_does_not_leak_across_subjects() {
        let mut zoom = ZoomState::default();
        zoom.toggle("Asmodeus");
        assert!(!zoom.is_zoomed("Lilith"));
        // first click on a new subject zooms it rather than unzooming
        assert!(zoom.toggle("Lilith"));
        assert!(!zoom.is_zoomed("Asmodeus"));
    }
}
