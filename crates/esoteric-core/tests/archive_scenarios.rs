//! End-to-end browsing scenarios
//!
//! Drives the same state transitions the desktop shell performs (page
//! changes, entity selection, zoom, close) against the real registry.

use esoteric_core::content::{self, HOME_SHORTCUTS};
use esoteric_core::{Entity, Expansion, ImageSource, ModalPhase, PageId, Placeholder, ZoomState};

// ============================================================================
// Test Utilities
// ============================================================================

/// The two pieces of shell state plus the modal's local zoom toggle
#[derive(Default)]
struct Shell {
    page: PageId,
    selected: Option<Entity>,
    zoom: ZoomState,
}

impl Shell {
    fn click_shortcut(&mut self, label: &str) {
        let (_, target) = HOME_SHORTCUTS
            .iter()
            .find(|(l, _)| *l == label)
            .expect("shortcut exists");
        self.page = *target;
    }

    fn click_entity(&mut self, name: &str) {
        let entity = content::entities()
            .iter()
            .find(|e| e.name.starts_with(name))
            .expect("entity exists");
        self.selected = Some(*entity);
    }

    fn click_image(&mut self) {
        if let Some(entity) = self.selected {
            if entity.idle_animation().is_some() {
                self.zoom.toggle(entity.name);
            }
        }
    }

    fn close(&mut self) {
        self.selected = None;
    }

    fn phase(&self) -> ModalPhase {
        ModalPhase::of(self.selected.as_ref(), &self.zoom)
    }
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn test_initial_state_is_home_with_modal_closed() {
    let shell = Shell::default();
    assert_eq!(shell.page, PageId::Home);
    assert_eq!(shell.phase(), ModalPhase::Closed);
}

#[test]
fn test_discover_entities_then_asmodeus() {
    let mut shell = Shell::default();

    shell.click_shortcut("Discover Entities");
    assert_eq!(shell.page, PageId::MorningStar);

    let names: Vec<&str> = content::entities().iter().map(|e| e.name).collect();
    assert_eq!(
        names,
        vec!["Lucifer (Venus)", "Astaroth", "Leviathan", "Asmodeus", "Mammon", "Lilith"]
    );

    shell.click_entity("Asmodeus");
    assert_eq!(shell.phase(), ModalPhase::OpenUnzoomed);
    let shown = shell.selected.expect("modal open");
    assert_eq!(shown.name, "Asmodeus");
    assert!(shown.idle_animation().is_some());
    assert!(shown.details.starts_with("Asmodeus is often known as"));

    shell.close();
    assert_eq!(shell.phase(), ModalPhase::Closed);
    assert!(shell.selected.is_none());
    assert_eq!(shell.page, PageId::MorningStar);
}

#[test]
fn test_lucifer_has_no_image() {
    let mut shell = Shell::default();
    shell.click_shortcut("Discover Entities");
    shell.click_entity("Lucifer");

    let shown = shell.selected.expect("modal open");
    assert!(!shown.has_idle_animation);
    assert_eq!(shown.idle_animation(), None);

    // clicking where an image would be does nothing
    shell.click_image();
    assert_eq!(shell.phase(), ModalPhase::OpenUnzoomed);
}

#[test]
fn test_zoom_cycle() {
    let mut shell = Shell::default();
    shell.click_entity("Lilith");
    shell.click_image();
    assert_eq!(shell.phase(), ModalPhase::OpenZoomed);
    shell.click_image();
    assert_eq!(shell.phase(), ModalPhase::OpenUnzoomed);
}

#[test]
fn test_reselect_while_open_resets_zoom() {
    let mut shell = Shell::default();
    shell.click_entity("Asmodeus");
    shell.click_image();
    assert_eq!(shell.phase(), ModalPhase::OpenZoomed);

    shell.click_entity("Lilith");
    assert_eq!(shell.selected.map(|e| e.name), Some("Lilith"));
    assert_eq!(shell.phase(), ModalPhase::OpenUnzoomed);
}

#[test]
fn test_shortcuts_target_known_pages() {
    let targets: Vec<PageId> = HOME_SHORTCUTS.iter().map(|(_, page)| *page).collect();
    assert_eq!(
        targets,
        vec![PageId::UniversalLaws, PageId::MorningStar, PageId::Rituals]
    );
}

#[test]
fn test_every_card_collapses_after_double_toggle() {
    for section in content::sections() {
        for entry in section.entries {
            let mut state = Expansion::default();
            state.toggle();
            assert!(!entry.full_details.to_html().is_empty());
            state.toggle();
            assert!(!state.shows_details(), "{} stayed open", entry.title);
        }
    }
}

#[test]
fn test_broken_gallery_image_falls_back() {
    for entry in content::pixel_art() {
        let mut src = ImageSource::new(entry.image_url, Placeholder::PixelArt);
        src.mark_failed();
        assert_eq!(src.current(), Placeholder::PixelArt.url());
    }
}

#[test]
fn test_registry_serializes() {
    let json = serde_json::to_value(content::entities()).unwrap();
    let animated: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .filter(|e| e["hasIdleAnimation"] == true)
        .map(|e| e["name"].as_str().unwrap())
        .collect();
    assert_eq!(animated, vec!["Asmodeus", "Lilith"]);
}
