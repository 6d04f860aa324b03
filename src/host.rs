//! The seam between navigation logic and whatever environment renders the document.
//!
//! A host answers live layout queries and carries out side effects. It is also the source of
//! every [`crate::navigator::Event`]: scroll notifications, key presses, mode changes and the
//! timers it was asked to arm all arrive back through the navigator's dispatch table.

use crate::error::HostError;
use crate::geometry::{Bounds, Viewport};
use crate::section::Section;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// How a programmatic scroll should reach its target.
pub enum ScrollBehavior {
    /// Animated; completion is reported later by a scroll-settled event.
    Smooth,
    /// Jump immediately with no visible transition.
    Instant,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// Generation stamp attached to a deferred callback so stale firings can be recognised.
pub struct TimerToken(pub u64);

/// The hosting environment as seen by the navigation layer.
pub trait Host {
    /// Current scroll offset and visible height.
    fn viewport(&self) -> Viewport;

    /// Live bounds of a section's container, or `None` if it is not laid out.
    fn bounds(&self, section: &Section) -> Option<Bounds>;

    /// The persisted location fragment, without the leading `#`.
    fn fragment(&self) -> String;

    /// Replaces the persisted fragment in place, never adding a history entry.
    fn replace_fragment(&mut self, fragment: &str);

    /// Brings a section's top edge to the top of the viewport.
    fn scroll_to(&mut self, section: &Section, behavior: ScrollBehavior);

    /// Scrolls by a relative distance; positive moves further down the document.
    fn scroll_by(&mut self, delta: f64);

    /// Whether full-viewport mode is currently active.
    fn is_fullscreen(&self) -> bool;

    /// Asks to enter full-viewport mode.
    ///
    /// `Ok` means the request is underway and a mode-changed event will follow.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::FullscreenRefused`] when the environment declines immediately.
    fn request_fullscreen(&mut self) -> Result<(), HostError>;

    /// Asks to leave full-viewport mode, with the same contract as
    /// [`Host::request_fullscreen`].
    ///
    /// # Errors
    ///
    /// Returns [`HostError::FullscreenRefused`] when the environment declines immediately.
    fn exit_fullscreen(&mut self) -> Result<(), HostError>;

    /// Arms a one-shot timer that fires `Event::Timer(token)` after `delay`.
    fn set_timer(&mut self, delay: Duration, token: TimerToken);

    /// Shows a transient notice to the viewer.
    fn notify(&mut self, message: &str);
}
