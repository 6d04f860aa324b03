//! Keeps the persisted location fragment in step with the current section.
//!
//! Writes are throttled with a leading and a trailing edge. The first scroll after a quiet
//! period writes straight away and arms a cool-down window. Scrolls inside the window are
//! absorbed, and when the window's timer fires one trailing write catches up. A
//! scroll-settled event always writes and disarms, so the final value is right even if the
//! window boundary missed the last movement.
//!
//! Each armed window carries a fresh [`TimerToken`]; a firing whose token does not match the
//! armed one belongs to a superseded window and is ignored.

use crate::host::{Host, TimerToken};
use crate::section::SectionIndex;
use crate::visibility::VisibilityDetector;
use std::time::Duration;
use tracing::{debug, trace};

/// Default length of the cool-down window.
pub const DEFAULT_WINDOW: Duration = Duration::from_millis(200);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Whether a cool-down window is running.
pub enum ThrottleState {
    /// No window armed; the next scroll writes immediately.
    Idle,
    /// A window is running until the timer carrying `token` fires.
    Armed {
        /// Identity of the timer that will close this window.
        token: TimerToken,
    },
}

#[derive(Debug)]
/// Owner of the throttle state and the only writer of the persisted fragment.
pub struct HashSynchronizer {
    window: Duration,
    state: ThrottleState,
    generation: u64,
}

impl Default for HashSynchronizer {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW)
    }
}

impl HashSynchronizer {
    #[must_use]
    /// Creates an idle synchroniser with the given cool-down window.
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            state: ThrottleState::Idle,
            generation: 0,
        }
    }

    #[must_use]
    /// Current throttle state.
    pub fn state(&self) -> ThrottleState {
        self.state
    }

    /// Handles one signal from the continuous scroll stream.
    pub fn on_scroll<H: Host + ?Sized>(
        &mut self,
        index: &SectionIndex,
        detector: &VisibilityDetector,
        host: &mut H,
    ) {
        if let ThrottleState::Armed { token } = self.state {
            trace!(?token, "scroll inside throttle window");
            return;
        }

        Self::write(index, detector, host);
        self.generation += 1;
        let token = TimerToken(self.generation);
        self.state = ThrottleState::Armed { token };
        host.set_timer(self.window, token);
        trace!(?token, "throttle window armed");
    }

    /// Handles the end of a cool-down window. Stale tokens are no-ops.
    pub fn on_timer<H: Host + ?Sized>(
        &mut self,
        token: TimerToken,
        index: &SectionIndex,
        detector: &VisibilityDetector,
        host: &mut H,
    ) {
        match self.state {
            ThrottleState::Armed { token: armed } if armed == token => {
                Self::write(index, detector, host);
                self.state = ThrottleState::Idle;
                trace!(?token, "throttle window closed");
            }
            _ => trace!(?token, "stale throttle timer ignored"),
        }
    }

    /// Handles the scroll-settled signal: write now and drop any running window.
    pub fn on_settled<H: Host + ?Sized>(
        &mut self,
        index: &SectionIndex,
        detector: &VisibilityDetector,
        host: &mut H,
    ) {
        Self::write(index, detector, host);
        if self.state != ThrottleState::Idle {
            trace!("throttle window disarmed by settle");
        }
        self.state = ThrottleState::Idle;
    }

    fn write<H: Host + ?Sized>(index: &SectionIndex, detector: &VisibilityDetector, host: &mut H) {
        let current = detector.current(index, host);
        let fragment = current.fragment();
        if host.fragment() != fragment {
            debug!(fragment, "replacing location fragment");
            host.replace_fragment(fragment);
        }
    }
}

#[cfg(test)]
#[path = "tests/hash_sync.rs"]
mod tests;
