use super::VisibilityDetector;
use crate::fake_host::{standard_index, FakeHost};
use crate::geometry::{Bounds, Viewport};
use proptest::prelude::*;

#[test]
fn test_viewport_containing_section_selects_it() {
    let index = standard_index();
    let mut host = FakeHost::standard();
    host.land(2);

    let current = VisibilityDetector::default().current(&index, &host);
    assert_eq!(current.id.as_deref(), Some("item2"));
}

#[test]
fn test_last_section_wins_when_visible() {
    let index = standard_index();
    let mut host = FakeHost::standard();
    // item3 still qualifies, but the footer is visible too.
    host.at(1800.0);

    let detector = VisibilityDetector::default();
    assert!(detector.is_visible(Bounds::new(1600.0, 2200.0), host.viewport));
    assert_eq!(detector.current(&index, &host).order, 4);
}

#[test]
fn test_next_section_needs_more_than_its_top_in_view() {
    let index = standard_index();
    let detector = VisibilityDetector::default();
    let mut host = FakeHost::standard();

    // item2's top has entered the viewport but item1 keeps more than 18.75% below the top edge.
    host.at(500.0);
    assert_eq!(detector.current(&index, &host).order, 1);

    // 1000 - 0.1875 * 600 = 887.5: past that item1 stops counting.
    host.at(887.0);
    assert_eq!(detector.current(&index, &host).order, 1);
    host.at(888.0);
    assert_eq!(detector.current(&index, &host).order, 2);
}

#[test]
fn test_nothing_visible_falls_back_to_header() {
    let index = standard_index();
    let mut host = FakeHost::standard();
    host.at(10_000.0);
    assert_eq!(VisibilityDetector::default().current(&index, &host).order, 0);

    host.at(0.0);
    host.bounds = vec![None; 5];
    assert_eq!(VisibilityDetector::default().current(&index, &host).order, 0);
}

#[test]
fn test_unlaid_sections_are_skipped() {
    let index = standard_index();
    let mut host = FakeHost::standard();
    host.land(2);
    host.bounds[2] = None;
    assert_eq!(VisibilityDetector::default().current(&index, &host).order, 3);
}

#[test]
fn test_alignment_tolerance() {
    let detector = VisibilityDetector::default();
    let bounds = Bounds::new(1000.0, 1600.0);
    assert!(detector.is_aligned(bounds, Viewport::new(1000.0, 600.0)));
    assert!(detector.is_aligned(bounds, Viewport::new(995.0, 600.0)));
    assert!(detector.is_aligned(bounds, Viewport::new(1005.0, 600.0)));
    assert!(!detector.is_aligned(bounds, Viewport::new(1005.5, 600.0)));
    assert!(!detector.is_aligned(bounds, Viewport::new(990.0, 600.0)));
}

#[test]
fn test_select_on_empty_input() {
    let detector = VisibilityDetector::default();
    assert_eq!(detector.select(Viewport::new(0.0, 100.0), Vec::new()), None);
}

proptest! {
    #[test]
    fn prop_exactly_one_member_is_current(top in -2000.0f64..6000.0, height in 1.0f64..3000.0) {
        let index = standard_index();
        let mut host = FakeHost::standard();
        host.viewport = Viewport::new(top, height);

        let current = VisibilityDetector::default().current(&index, &host);
        prop_assert_eq!(index.get(current.order), Some(current));
    }

    #[test]
    fn prop_visible_last_section_always_wins(top in 1700.0f64..2350.0, height in 100.0f64..1000.0) {
        let index = standard_index();
        let mut host = FakeHost::standard();
        host.viewport = Viewport::new(top, height);

        let detector = VisibilityDetector::default();
        let footer = host.bounds[4].unwrap();
        prop_assume!(detector.is_visible(footer, host.viewport));
        prop_assert_eq!(detector.current(&index, &host).order, 4);
    }
}
