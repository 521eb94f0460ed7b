//! Property-based tests for page resolution and UI toggles

use esoteric_core::{Expansion, ImageSource, PageId, Placeholder, ZoomState};
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

/// Arbitrary identifiers that are not one of the nine known pages
fn unknown_identifier_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex(".{0,40}")
        .expect("valid regex")
        .prop_filter("not a known page", |s| {
            PageId::ALL.iter().all(|page| page.as_str() != s.as_str())
        })
}

fn subject_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Za-z ()]{1,20}").expect("valid regex")
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn unknown_identifiers_resolve_home(id in unknown_identifier_strategy()) {
        prop_assert_eq!(PageId::resolve(&id), PageId::Home);
        prop_assert!(PageId::parse(&id).is_err());
    }

    #[test]
    fn resolve_is_idempotent(id in ".{0,40}") {
        let once = PageId::resolve(&id);
        prop_assert_eq!(PageId::resolve(once.as_str()), once);
    }

    #[test]
    fn even_toggles_leave_card_collapsed(n in 0usize..50) {
        let mut state = Expansion::default();
        for _ in 0..(n * 2) {
            state.toggle();
        }
        prop_assert_eq!(state, Expansion::Collapsed);
    }

    #[test]
    fn new_subject_is_never_zoomed(a in subject_strategy(), b in subject_strategy(), clicks in 0usize..6) {
        prop_assume!(a != b);
        let mut zoom = ZoomState::default();
        for _ in 0..clicks {
            zoom.toggle(&a);
        }
        prop_assert!(!zoom.is_zoomed(&b));
    }

    #[test]
    fn failed_image_never_shows_primary(url in "https://[a-z]{1,10}\\.invalid/[a-z]{1,8}\\.png", failures in 1usize..5) {
        let mut src = ImageSource::new(url.clone(), Placeholder::PixelArt);
        for _ in 0..failures {
            src.mark_failed();
        }
        prop_assert_ne!(src.current(), url.as_str());
        prop_assert_eq!(src.current(), Placeholder::PixelArt.url());
    }
}
