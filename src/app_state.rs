//! The terminal session: a laid-out document acting as the navigation host.
//!
//! A TUI needs a single source of truth that can be interrogated and mutated as the viewer
//! scrolls. `AppState` owns the scroll offset and the screen size, and plays the part of the
//! environment: it animates programmatic scrolls a few rows per tick, reports scroll and
//! scroll-settled events, runs the timers it is asked to arm, and applies full-viewport mode
//! changes asynchronously on the next tick.

use crate::config::Config;
use crate::document::{rows_to_units, Document};
use crate::error::HostError;
use crate::geometry::{Bounds, Viewport};
use crate::host::{Host, ScrollBehavior, TimerToken};
use crate::navigator::Event;
use crate::section::Section;
use std::collections::VecDeque;
use std::time::{Duration, Instant};
use tracing::{debug, trace};

/// Rows taken by the title, status and help bars outside full-viewport mode.
pub const CHROME_ROWS: usize = 3;

/// Quiet time after manual scrolling before motion counts as settled.
pub const SETTLE_DELAY: Duration = Duration::from_millis(150);

/// How long a notice stays in the help bar.
pub const NOTICE_DURATION: Duration = Duration::from_secs(3);

/// Bridges a parsed document and the terminal, maintaining session state.
pub struct AppState {
    /// The document being viewed.
    pub document: Document,
    /// Layout units per row.
    pub row_height: f64,
    /// Top row of the viewport.
    pub offset: usize,
    /// Terminal height in rows.
    pub screen_rows: usize,
    /// Whether the chrome is hidden.
    pub fullscreen: bool,
    /// Whether full-viewport requests are honoured.
    pub allow_fullscreen: bool,
    /// Persisted location fragment, without `#`.
    pub fragment: String,
    /// Number of times the fragment was replaced.
    pub fragment_writes: usize,
    /// Transient notice shown in the help bar.
    pub message: Option<String>,
    message_until: Option<Instant>,
    animation: Option<usize>,
    settle_at: Option<Instant>,
    mode_request: Option<bool>,
    timers: Vec<(Instant, TimerToken)>,
    events: VecDeque<Event>,
    clock: Instant,
}

impl AppState {
    #[must_use]
    /// Initialises a session over `document` on a screen `screen_rows` tall.
    pub fn new(document: Document, config: &Config, screen_rows: usize, now: Instant) -> Self {
        Self {
            document,
            row_height: config.row_height,
            offset: 0,
            screen_rows,
            fullscreen: false,
            allow_fullscreen: true,
            fragment: String::new(),
            fragment_writes: 0,
            message: None,
            message_until: None,
            animation: None,
            settle_at: None,
            mode_request: None,
            timers: Vec::new(),
            events: VecDeque::new(),
            clock: now,
        }
    }

    #[must_use]
    /// Rows available to the document body.
    pub fn viewport_rows(&self) -> usize {
        let chrome = if self.fullscreen { 0 } else { CHROME_ROWS };
        self.screen_rows.saturating_sub(chrome).max(1)
    }

    #[must_use]
    /// Largest usable scroll offset.
    pub fn max_offset(&self) -> usize {
        self.document
            .total_rows()
            .saturating_sub(self.viewport_rows())
    }

    #[must_use]
    /// Whether a programmatic scroll animation is running.
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Takes the next event the session has produced.
    pub fn next_event(&mut self) -> Option<Event> {
        self.events.pop_front()
    }

    /// Scrolls by whole rows at the viewer's request, interrupting any animation.
    pub fn scroll_rows(&mut self, delta: isize) {
        if self.animation.take().is_some() {
            trace!("animation interrupted by manual scroll");
        }
        let target = self
            .offset
            .saturating_add_signed(delta)
            .min(self.max_offset());
        if target != self.offset {
            self.offset = target;
            self.events.push_back(Event::Scroll);
        }
        self.settle_at = Some(self.clock + SETTLE_DELAY);
    }

    /// Adapts to a new terminal height.
    pub fn resize(&mut self, screen_rows: usize) {
        self.screen_rows = screen_rows;
        self.clamp_offset();
    }

    /// Moves time forward to `now`: applies mode changes, steps animation, settles manual
    /// scrolling, and fires due timers.
    pub fn advance(&mut self, now: Instant) {
        self.clock = now;

        if let Some(fullscreen) = self.mode_request.take() {
            if fullscreen != self.fullscreen {
                debug!(fullscreen, "full-viewport mode changed");
                self.fullscreen = fullscreen;
                self.events.push_back(Event::FullscreenChanged);
                self.clamp_offset();
            }
        }

        if let Some(target) = self.animation {
            let distance = target.abs_diff(self.offset);
            let step = (distance / 4).max(1).min(distance);
            if target > self.offset {
                self.offset += step;
            } else {
                self.offset -= step;
            }
            if step > 0 {
                self.events.push_back(Event::Scroll);
            }
            if self.offset == target {
                self.animation = None;
                self.events.push_back(Event::ScrollSettled);
            }
        }

        if self.settle_at.is_some_and(|at| at <= now) {
            self.settle_at = None;
            self.events.push_back(Event::ScrollSettled);
        }

        self.timers.sort_by_key(|(at, _)| *at);
        let due = self.timers.partition_point(|(at, _)| *at <= now);
        for (_, token) in self.timers.drain(..due) {
            self.events.push_back(Event::Timer(token));
        }

        if self.message_until.is_some_and(|until| until <= now) {
            self.message = None;
            self.message_until = None;
        }
    }

    fn clamp_offset(&mut self) {
        let max = self.max_offset();
        if self.offset > max {
            self.offset = max;
            self.events.push_back(Event::Scroll);
        }
        if let Some(target) = self.animation.as_mut() {
            *target = (*target).min(max);
        }
    }

    fn units_to_rows(&self, units: f64) -> isize {
        let rows = (units / self.row_height).round();
        #[allow(clippy::cast_possible_truncation)]
        let rows = rows as isize;
        if rows == 0 {
            if units.is_sign_negative() {
                -1
            } else {
                1
            }
        } else {
            rows
        }
    }
}

impl Host for AppState {
    fn viewport(&self) -> Viewport {
        Viewport::new(
            rows_to_units(self.offset, self.row_height),
            rows_to_units(self.viewport_rows(), self.row_height),
        )
    }

    fn bounds(&self, section: &Section) -> Option<Bounds> {
        self.document.bounds(section.order, self.row_height)
    }

    fn fragment(&self) -> String {
        self.fragment.clone()
    }

    fn replace_fragment(&mut self, fragment: &str) {
        fragment.clone_into(&mut self.fragment);
        self.fragment_writes += 1;
    }

    fn scroll_to(&mut self, section: &Section, behavior: ScrollBehavior) {
        let Some(start) = self.document.start_row(section.order) else {
            return;
        };
        let target = start.min(self.max_offset());
        self.settle_at = None;
        match behavior {
            ScrollBehavior::Smooth => {
                trace!(target, "animating to row");
                self.animation = Some(target);
            }
            ScrollBehavior::Instant => {
                self.animation = None;
                if self.offset != target {
                    self.offset = target;
                    self.events.push_back(Event::Scroll);
                }
                self.events.push_back(Event::ScrollSettled);
            }
        }
    }

    fn scroll_by(&mut self, delta: f64) {
        let rows = self.units_to_rows(delta);
        if self.animation.is_none() {
            self.scroll_rows(rows);
            return;
        }
        // A running animation keeps its target and will settle on its own.
        let target = self
            .offset
            .saturating_add_signed(rows)
            .min(self.max_offset());
        if target != self.offset {
            self.offset = target;
            self.events.push_back(Event::Scroll);
        }
    }

    fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    fn request_fullscreen(&mut self) -> Result<(), HostError> {
        if !self.allow_fullscreen {
            return Err(HostError::FullscreenRefused(
                "disabled for this session".to_string(),
            ));
        }
        self.mode_request = Some(true);
        Ok(())
    }

    fn exit_fullscreen(&mut self) -> Result<(), HostError> {
        self.mode_request = Some(false);
        Ok(())
    }

    fn set_timer(&mut self, delay: Duration, token: TimerToken) {
        self.timers.push((self.clock + delay, token));
    }

    fn notify(&mut self, message: &str) {
        self.message = Some(message.to_string());
        self.message_until = Some(self.clock + NOTICE_DURATION);
    }
}

#[cfg(test)]
#[path = "tests/app_state.rs"]
mod tests;
