//! Layout geometry
//!
//! Rectangles use absolute document coordinates (y grows downward from the
//! top of the page). The viewport is a window over that coordinate space.

use serde::{Deserialize, Serialize};

/// Axis-aligned layout box in document coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(top: f64, left: f64, width: f64, height: f64) -> Self {
        Self {
            top,
            left,
            width,
            height,
        }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

impl Default for Rect {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }
}

/// Currently visible window over the document
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Document y coordinate at the top edge of the window
    pub scroll_y: f64,
    /// Window height in pixels
    pub height: f64,
}

impl Viewport {
    pub fn new(scroll_y: f64, height: f64) -> Self {
        Self { scroll_y, height }
    }

    pub fn top(&self) -> f64 {
        self.scroll_y
    }

    pub fn bottom(&self) -> f64 {
        self.scroll_y + self.height
    }

    /// Fraction of `rect` inside the viewport, in `[0, 1]`.
    ///
    /// `bottom_margin` shrinks the effective viewport at its bottom edge, the
    /// equivalent of a negative `rootMargin`: a positive value means elements
    /// must scroll further up before they count as visible.
    pub fn visible_ratio(&self, rect: &Rect, bottom_margin: f64) -> f64 {
        let region_top = self.top();
        let region_bottom = self.bottom() - bottom_margin;
        if region_bottom <= region_top {
            return 0.0;
        }

        if rect.height <= 0.0 {
            // Degenerate box: visible iff its edge falls inside the region
            return if rect.top >= region_top && rect.top <= region_bottom {
                1.0
            } else {
                0.0
            };
        }

        let overlap = rect.bottom().min(region_bottom) - rect.top.max(region_top);
        (overlap / rect.height).clamp(0.0, 1.0)
    }
}
