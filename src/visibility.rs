//! Decides which section the viewer is looking at.
//!
//! The detector is a pure function of live geometry. It is queried synchronously by the hash
//! synchroniser and the navigation controller and never mutates anything.

use crate::geometry::{Bounds, Viewport};
use crate::host::Host;
use crate::section::{Section, SectionIndex};

/// Share of a section's height that must still lie below the viewport top for it to count.
pub const DEFAULT_MARGIN: f64 = 0.1875;

/// Distance within which a section's top counts as aligned with the viewport top.
pub const DEFAULT_TOLERANCE: f64 = 5.0;

#[derive(Clone, Copy, Debug)]
/// Visibility and alignment rules for selecting the current section.
pub struct VisibilityDetector {
    margin: f64,
    tolerance: f64,
}

impl Default for VisibilityDetector {
    fn default() -> Self {
        Self::new(DEFAULT_MARGIN, DEFAULT_TOLERANCE)
    }
}

impl VisibilityDetector {
    #[must_use]
    /// Creates a detector with the given trailing margin fraction and alignment tolerance.
    pub fn new(margin: f64, tolerance: f64) -> Self {
        Self { margin, tolerance }
    }

    #[must_use]
    /// A section is visible when its top has reached the viewport bottom and the viewport top
    /// is still above the section's bottom less the trailing margin.
    pub fn is_visible(&self, bounds: Bounds, viewport: Viewport) -> bool {
        bounds.top <= viewport.bottom()
            && viewport.top < bounds.bottom - self.margin * bounds.height()
    }

    #[must_use]
    /// Whether a section's top edge sits on the viewport's top edge, within tolerance.
    pub fn is_aligned(&self, bounds: Bounds, viewport: Viewport) -> bool {
        (bounds.top - viewport.top).abs() <= self.tolerance
    }

    #[must_use]
    /// Picks the current position from bounds listed in document order.
    ///
    /// The last entry wins whenever it is visible; otherwise the first visible entry is taken.
    /// `None` means nothing qualifies and the caller should fall back to the default section.
    pub fn select<I>(&self, viewport: Viewport, bounds: I) -> Option<usize>
    where
        I: IntoIterator<Item = Option<Bounds>>,
    {
        let visible: Vec<bool> = bounds
            .into_iter()
            .map(|b| b.is_some_and(|b| self.is_visible(b, viewport)))
            .collect();

        match visible.last() {
            Some(true) => Some(visible.len() - 1),
            _ => visible.iter().position(|&v| v),
        }
    }

    #[must_use]
    /// The current location: always exactly one section of `index`, the header by default.
    pub fn current<'a, H: Host + ?Sized>(&self, index: &'a SectionIndex, host: &H) -> &'a Section {
        let viewport = host.viewport();
        self.select(viewport, index.iter().map(|s| host.bounds(s)))
            .and_then(|order| index.get(order))
            .unwrap_or_else(|| index.header())
    }

    #[must_use]
    /// Whether `section` is currently aligned with the viewport top. Sections that are not laid
    /// out are never aligned.
    pub fn section_aligned<H: Host + ?Sized>(&self, section: &Section, host: &H) -> bool {
        host.bounds(section)
            .is_some_and(|b| self.is_aligned(b, host.viewport()))
    }
}

#[cfg(test)]
#[path = "tests/visibility.rs"]
mod tests;
