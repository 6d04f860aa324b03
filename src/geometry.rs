//! Live layout values.
//!
//! Nothing here is cached: hosts hand out fresh values on every query because layout shifts with
//! window size and full-viewport mode.

/// The visible window onto the document.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    /// Scroll offset of the viewport's top edge.
    pub top: f64,
    /// Visible height.
    pub height: f64,
}

impl Viewport {
    #[must_use]
    /// Builds a viewport from its top edge and height.
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    #[must_use]
    /// Offset of the viewport's bottom edge.
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Vertical extent of one section's rendered container, in document coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    /// Offset of the container's top edge.
    pub top: f64,
    /// Offset of the container's bottom edge.
    pub bottom: f64,
}

impl Bounds {
    #[must_use]
    /// Builds bounds from top and bottom edges.
    pub fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }

    #[must_use]
    /// Rendered height; zero for inverted bounds.
    pub fn height(&self) -> f64 {
        (self.bottom - self.top).max(0.0)
    }
}
