use super::FullscreenCoordinator;
use crate::error::HostError;
use crate::fake_host::{standard_index, FakeHost};
use crate::host::ScrollBehavior;
use crate::navigation::{JumpTarget, NavigationController};
use crate::visibility::VisibilityDetector;

#[test]
fn test_restores_captured_section_instantly() {
    let index = standard_index();
    let detector = VisibilityDetector::default();
    let nav = NavigationController::default();
    let mut host = FakeHost::standard();
    let mut fullscreen = FullscreenCoordinator::default();

    host.land(2);
    fullscreen.toggle(&index, &detector, &nav, &mut host);
    assert_eq!(fullscreen.capture(), Some(2));
    assert_eq!(host.mode_requests, vec![true]);
    assert!(host.scrolls.is_empty());

    // The new layout moved the viewport somewhere else.
    host.fullscreen = true;
    host.at(0.0);
    fullscreen.on_mode_changed(&index, &mut host);
    assert_eq!(host.last_scroll(), Some((2, ScrollBehavior::Instant)));
    assert_eq!(fullscreen.capture(), None);
}

#[test]
fn test_leaving_uses_exit_request() {
    let index = standard_index();
    let detector = VisibilityDetector::default();
    let nav = NavigationController::default();
    let mut host = FakeHost::standard();
    let mut fullscreen = FullscreenCoordinator::default();

    host.fullscreen = true;
    host.land(1);
    fullscreen.toggle(&index, &detector, &nav, &mut host);
    assert_eq!(host.mode_requests, vec![false]);
    assert_eq!(fullscreen.capture(), Some(1));
}

#[test]
fn test_prefers_pending_target_over_live_location() {
    let index = standard_index();
    let detector = VisibilityDetector::default();
    let mut nav = NavigationController::default();
    let mut host = FakeHost::standard();
    let mut fullscreen = FullscreenCoordinator::default();

    host.land(1);
    nav.step(1, &index, &detector, &mut host);
    fullscreen.toggle(&index, &detector, &nav, &mut host);
    assert_eq!(fullscreen.capture(), Some(2));
}

#[test]
fn test_captures_jump_destination_not_superseded_step() {
    let index = standard_index();
    let detector = VisibilityDetector::default();
    let mut nav = NavigationController::default();
    let mut host = FakeHost::standard();
    let mut fullscreen = FullscreenCoordinator::default();

    host.land(1);
    nav.step(1, &index, &detector, &mut host);
    nav.jump(JumpTarget::Header, &index, &mut host);
    fullscreen.toggle(&index, &detector, &nav, &mut host);
    assert_eq!(fullscreen.capture(), Some(0));
}

#[test]
fn test_refusal_notifies_and_next_toggle_recaptures() {
    let index = standard_index();
    let detector = VisibilityDetector::default();
    let nav = NavigationController::default();
    let mut host = FakeHost::standard();
    let mut fullscreen = FullscreenCoordinator::default();

    host.refuse = true;
    host.land(1);
    fullscreen.toggle(&index, &detector, &nav, &mut host);
    assert_eq!(host.notices.len(), 1);
    assert!(host.notices[0].contains("refused"));
    assert_eq!(fullscreen.capture(), Some(1));

    host.refuse = false;
    host.land(2);
    fullscreen.toggle(&index, &detector, &nav, &mut host);
    assert_eq!(fullscreen.capture(), Some(2));
    fullscreen.on_mode_changed(&index, &mut host);
    assert_eq!(host.last_scroll(), Some((2, ScrollBehavior::Instant)));
}

#[test]
fn test_silent_refusal_policy() {
    let mut host = FakeHost::standard();
    let fullscreen = FullscreenCoordinator::new(false);

    fullscreen.on_refused(&HostError::FullscreenRefused("denied".into()), &mut host);
    assert!(host.notices.is_empty());
}

#[test]
fn test_mode_change_without_capture_is_ignored() {
    let index = standard_index();
    let mut host = FakeHost::standard();
    let mut fullscreen = FullscreenCoordinator::default();

    fullscreen.on_mode_changed(&index, &mut host);
    assert!(host.scrolls.is_empty());
}
