//! The dispatch table joining environment events to the components that own each reaction.
//!
//! Every event kind is routed to exactly one handler per interested component, in a fixed order,
//! so ownership stays auditable: the hash synchroniser alone writes the fragment, the navigation
//! controller alone owns the pending move, and the fullscreen coordinator alone owns its capture.
//! Events are handled to completion one at a time, in the order the host delivers them.

use crate::config::Config;
use crate::error::HostError;
use crate::fullscreen::FullscreenCoordinator;
use crate::hash_sync::HashSynchronizer;
use crate::host::{Host, ScrollBehavior, TimerToken};
use crate::keys::{Command, KeyInput};
use crate::navigation::{NavigationController, PendingMove};
use crate::section::{Section, SectionIndex};
use crate::visibility::VisibilityDetector;
use tracing::{debug, trace};

#[derive(Clone, Debug, PartialEq)]
/// Everything the environment can tell the navigation layer.
pub enum Event {
    /// One signal from the continuous scroll stream.
    Scroll,
    /// Motion has fully stopped.
    ScrollSettled,
    /// A key was pressed.
    Key(KeyInput),
    /// Full-viewport mode was entered or left.
    FullscreenChanged,
    /// A full-viewport request was refused after the fact.
    FullscreenRefused(HostError),
    /// A timer armed through [`Host::set_timer`] fired.
    Timer(TimerToken),
}

/// Navigation state for one loaded document.
pub struct Navigator {
    index: SectionIndex,
    detector: VisibilityDetector,
    hash: HashSynchronizer,
    navigation: NavigationController,
    fullscreen: FullscreenCoordinator,
}

impl Navigator {
    #[must_use]
    /// Wires up all components over `index` with tuning from `config`.
    pub fn new(index: SectionIndex, config: &Config) -> Self {
        Self {
            index,
            detector: VisibilityDetector::new(config.visibility_margin, config.alignment_tolerance),
            hash: HashSynchronizer::new(config.throttle()),
            navigation: NavigationController::new(config.nudge_distance),
            fullscreen: FullscreenCoordinator::new(config.notify_on_refusal),
        }
    }

    #[must_use]
    /// Wires up all components over `index` with default tuning.
    pub fn with_defaults(index: SectionIndex) -> Self {
        Self {
            index,
            detector: VisibilityDetector::default(),
            hash: HashSynchronizer::default(),
            navigation: NavigationController::default(),
            fullscreen: FullscreenCoordinator::default(),
        }
    }

    #[must_use]
    /// The sections being navigated.
    pub fn index(&self) -> &SectionIndex {
        &self.index
    }

    #[must_use]
    /// The section the viewer is currently looking at.
    pub fn current<H: Host + ?Sized>(&self, host: &H) -> &Section {
        self.detector.current(&self.index, host)
    }

    #[must_use]
    /// The in-flight move, if any.
    pub fn pending(&self) -> Option<PendingMove> {
        self.navigation.pending()
    }

    #[must_use]
    /// The section an in-flight move is heading for.
    pub fn pending_section(&self) -> Option<&Section> {
        self.navigation.pending_section(&self.index)
    }

    /// Brings the section named by the persisted fragment into view, as on a fresh load.
    /// Returns the restored section; an unknown or empty fragment leaves the viewer where it is.
    pub fn restore<H: Host + ?Sized>(&self, host: &mut H) -> Option<&Section> {
        let fragment = host.fragment();
        if fragment.is_empty() {
            return None;
        }
        match self.index.by_fragment(&fragment) {
            Some(section) => {
                debug!(fragment, order = section.order, "restoring location");
                host.scroll_to(section, ScrollBehavior::Instant);
                Some(section)
            }
            None => {
                debug!(fragment, "fragment names no section");
                None
            }
        }
    }

    /// Routes one environment event to its handlers.
    pub fn dispatch<H: Host + ?Sized>(&mut self, event: Event, host: &mut H) {
        trace!(?event, "dispatch");
        match event {
            Event::Scroll => self.hash.on_scroll(&self.index, &self.detector, host),
            Event::ScrollSettled => {
                self.hash.on_settled(&self.index, &self.detector, host);
                self.navigation.on_settled(&self.index, &self.detector, host);
            }
            Event::Key(input) => {
                if let Some(command) = Command::from_key(&input) {
                    self.command(command, host);
                }
            }
            Event::FullscreenChanged => self.fullscreen.on_mode_changed(&self.index, host),
            Event::FullscreenRefused(error) => self.fullscreen.on_refused(&error, host),
            Event::Timer(token) => self.hash.on_timer(token, &self.index, &self.detector, host),
        }
    }

    /// Carries out a command directly, as a key press mapping to it would.
    pub fn command<H: Host + ?Sized>(&mut self, command: Command, host: &mut H) {
        match command {
            Command::Next => {
                self.navigation.step(1, &self.index, &self.detector, host);
            }
            Command::Previous => {
                self.navigation.step(-1, &self.index, &self.detector, host);
            }
            Command::Jump(target) => {
                self.navigation.jump(target, &self.index, host);
            }
            Command::ToggleFullscreen => {
                self.fullscreen
                    .toggle(&self.index, &self.detector, &self.navigation, host);
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/navigator.rs"]
mod tests;
