//! Moves the viewer between adjacent sections in response to directional commands.
//!
//! ```text
//!            step (neighbour exists)
//!   Idle ─────────────────────────────▶ Pending(target)
//!    ▲                                   │  step: target ← target + d
//!    │          scroll settled           │
//!    └───────────────────────────────────┘
//! ```
//!
//! While idle, a step resolves from the live current location, and a forward step from a
//! section that is not aligned with the viewport top only re-centres on that section. While a
//! move is pending, steps resolve from the pending target so rapid presses compose. A direct jump
//! supersedes the pending target with its own destination. Stepping past either end nudges the
//! viewport instead of failing.

use crate::host::{Host, ScrollBehavior};
use crate::section::{Section, SectionIndex};
use crate::visibility::VisibilityDetector;
use tracing::{debug, trace};

/// Default magnitude of the boundary nudge.
pub const DEFAULT_NUDGE: f64 = 48.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// An animated scroll that has not yet been confirmed complete.
pub struct PendingMove {
    /// Order of the section being scrolled to.
    pub target: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Non-relative destinations, reached without stepping through neighbours.
pub enum JumpTarget {
    /// The header at the top of the document.
    Header,
    /// The footer at the end of the document.
    Footer,
    /// The first listing.
    Listing,
}

#[derive(Clone, Copy, Debug, PartialEq)]
/// What a directional step ended up doing.
pub enum StepOutcome {
    /// An animated scroll toward the section at this order began.
    Scrolling(usize),
    /// No neighbour existed, so the viewport was nudged by this distance.
    Nudged(f64),
}

#[derive(Debug)]
/// Owner of the pending move.
pub struct NavigationController {
    pending: Option<PendingMove>,
    nudge: f64,
}

impl Default for NavigationController {
    fn default() -> Self {
        Self::new(DEFAULT_NUDGE)
    }
}

impl NavigationController {
    #[must_use]
    /// Creates an idle controller with the given boundary nudge distance.
    pub fn new(nudge: f64) -> Self {
        Self {
            pending: None,
            nudge,
        }
    }

    #[must_use]
    /// The in-flight move, if any.
    pub fn pending(&self) -> Option<PendingMove> {
        self.pending
    }

    #[must_use]
    /// The section the in-flight move is heading for.
    pub fn pending_section<'a>(&self, index: &'a SectionIndex) -> Option<&'a Section> {
        self.pending.and_then(|p| index.get(p.target))
    }

    /// Moves `delta` sections from the effective current section.
    pub fn step<H: Host + ?Sized>(
        &mut self,
        delta: isize,
        index: &SectionIndex,
        detector: &VisibilityDetector,
        host: &mut H,
    ) -> StepOutcome {
        let (from, delta) = match self.pending_section(index) {
            Some(target) => (target, delta),
            None => {
                let current = detector.current(index, host);
                if delta == 1 && !detector.section_aligned(current, host) {
                    trace!(order = current.order, "re-centring on unaligned section");
                    (current, 0)
                } else {
                    (current, delta)
                }
            }
        };

        if let Some(next) = index.offset(from.order, delta) {
            debug!(from = from.order, to = next.order, "moving to section");
            host.scroll_to(next, ScrollBehavior::Smooth);
            self.pending = Some(PendingMove { target: next.order });
            StepOutcome::Scrolling(next.order)
        } else {
            let distance = self.nudge * sign(delta);
            debug!(from = from.order, distance, "no neighbour, nudging");
            host.scroll_by(distance);
            StepOutcome::Nudged(distance)
        }
    }

    /// Scrolls straight to a fixed destination, which replaces any pending move as the target.
    /// Returns the order of the destination, or `None` when the document has no such section.
    pub fn jump<H: Host + ?Sized>(
        &mut self,
        target: JumpTarget,
        index: &SectionIndex,
        host: &mut H,
    ) -> Option<usize> {
        let section = match target {
            JumpTarget::Header => Some(index.header()),
            JumpTarget::Footer => index.footer(),
            JumpTarget::Listing => index.first_listing(),
        }?;
        debug!(?target, order = section.order, "jumping");
        host.scroll_to(section, ScrollBehavior::Smooth);
        self.pending = Some(PendingMove {
            target: section.order,
        });
        Some(section.order)
    }

    /// Handles the scroll-settled signal. The pending move is cleared whether or not the
    /// viewport actually arrived, since an external scroll may have interrupted the animation.
    pub fn on_settled<H: Host + ?Sized>(
        &mut self,
        index: &SectionIndex,
        detector: &VisibilityDetector,
        host: &H,
    ) {
        if let Some(pending) = self.pending.take() {
            let current = detector.current(index, host);
            if current.order == pending.target {
                debug!(order = pending.target, "move settled on target");
            } else {
                debug!(
                    target = pending.target,
                    settled = current.order,
                    "move interrupted, clearing"
                );
            }
        }
    }
}

fn sign(delta: isize) -> f64 {
    match delta.signum() {
        -1 => -1.0,
        _ => 1.0,
    }
}

#[cfg(test)]
#[path = "tests/navigation.rs"]
mod tests;
