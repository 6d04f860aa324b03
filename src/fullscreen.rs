//! Full-viewport mode without losing the viewer's place.
//!
//! The section to return to is captured before the mode change is requested, and applied only
//! once the environment confirms the change. A refused request never confirms, leaving the
//! capture stale until the next toggle overwrites it.

use crate::error::HostError;
use crate::host::{Host, ScrollBehavior};
use crate::navigation::NavigationController;
use crate::section::SectionIndex;
use crate::visibility::VisibilityDetector;
use tracing::{debug, warn};

#[derive(Debug)]
/// Owner of the captured position across a mode transition.
pub struct FullscreenCoordinator {
    capture: Option<usize>,
    notify_on_refusal: bool,
}

impl Default for FullscreenCoordinator {
    fn default() -> Self {
        Self::new(true)
    }
}

impl FullscreenCoordinator {
    #[must_use]
    /// Creates a coordinator; `notify_on_refusal` controls whether a refusal reaches the viewer.
    pub fn new(notify_on_refusal: bool) -> Self {
        Self {
            capture: None,
            notify_on_refusal,
        }
    }

    #[must_use]
    /// Order of the section captured for the next mode change.
    pub fn capture(&self) -> Option<usize> {
        self.capture
    }

    /// Captures the current position, then asks the host to flip modes.
    pub fn toggle<H: Host + ?Sized>(
        &mut self,
        index: &SectionIndex,
        detector: &VisibilityDetector,
        navigation: &NavigationController,
        host: &mut H,
    ) {
        let section = navigation
            .pending_section(index)
            .unwrap_or_else(|| detector.current(index, &*host));
        self.capture = Some(section.order);

        let entering = !host.is_fullscreen();
        debug!(order = section.order, entering, "full-viewport toggle requested");
        let result = if entering {
            host.request_fullscreen()
        } else {
            host.exit_fullscreen()
        };
        if let Err(error) = result {
            self.on_refused(&error, host);
        }
    }

    /// Handles the environment's confirmation that the mode changed.
    pub fn on_mode_changed<H: Host + ?Sized>(&mut self, index: &SectionIndex, host: &mut H) {
        let Some(section) = self.capture.take().and_then(|order| index.get(order)) else {
            return;
        };
        debug!(order = section.order, "restoring position after mode change");
        host.scroll_to(section, ScrollBehavior::Instant);
    }

    /// Handles a refused mode change. The capture is left for the next toggle to replace.
    pub fn on_refused<H: Host + ?Sized>(&self, error: &HostError, host: &mut H) {
        warn!(%error, "full-viewport request refused");
        if self.notify_on_refusal {
            host.notify(&error.to_string());
        }
    }
}

#[cfg(test)]
#[path = "tests/fullscreen.rs"]
mod tests;
