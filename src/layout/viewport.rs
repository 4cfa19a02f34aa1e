//! Viewport bounds for the rendered grid.

use serde::{Deserialize, Serialize};

use crate::error::{PanelfitError, Result};
use crate::types::{is_positive_finite, Dimension};

/// Widest the grid is ever drawn, in render units.
pub const MAX_VIEWPORT_WIDTH: f64 = 800.0;

/// Fixed height of the grid area, in render units.
pub const VIEWPORT_HEIGHT: f64 = 400.0;

/// Horizontal space kept free around the grid when fitting to a window.
pub const WINDOW_MARGIN: f64 = 40.0;

/// Viewport - the area available for drawing the panel grid
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Available width in render units
    pub width: f64,
    /// Available height in render units
    pub height: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(MAX_VIEWPORT_WIDTH, VIEWPORT_HEIGHT)
    }
}

impl Viewport {
    /// Create a viewport with explicit bounds
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Viewport for a window of the given width.
    ///
    /// The width is capped at [`MAX_VIEWPORT_WIDTH`] and keeps
    /// [`WINDOW_MARGIN`] free; the height is always [`VIEWPORT_HEIGHT`].
    /// The window width is passed in by the caller, never queried.
    pub fn fit_window(window_width: f64) -> Self {
        Self::new(
            MAX_VIEWPORT_WIDTH.min(window_width - WINDOW_MARGIN),
            VIEWPORT_HEIGHT,
        )
    }

    /// Bounds as a [`Dimension`]
    pub fn size(&self) -> Dimension {
        Dimension::new(self.width, self.height)
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if !is_positive_finite(self.width) {
            return Err(PanelfitError::InvalidDimension {
                field: "viewport.width",
                value: self.width,
            });
        }
        if !is_positive_finite(self.height) {
            return Err(PanelfitError::InvalidDimension {
                field: "viewport.height",
                value: self.height,
            });
        }
        Ok(())
    }
}
