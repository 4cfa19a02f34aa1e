//! Uniform, aspect-preserving scale from physical grid size to the viewport.

use serde::{Deserialize, Serialize};

use super::Viewport;
use crate::error::{PanelfitError, Result};
use crate::types::{is_positive_finite, Dimension, Scale};

/// Largest uniform scale at which `physical` still fits inside `viewport`.
///
/// The smaller of the two axis ratios wins, so the grid is never distorted
/// and never overflows either axis.
///
/// # Errors
/// Returns [`PanelfitError::DegenerateGeometry`] if `physical` has a
/// non-positive or non-finite side (for example a zero-panel layout), and
/// [`PanelfitError::InvalidDimension`] if the viewport does.
pub fn derive_scale(physical: Dimension, viewport: &Viewport) -> Result<Scale> {
    if !physical.is_positive() {
        return Err(PanelfitError::DegenerateGeometry {
            width: physical.width,
            height: physical.height,
        });
    }
    viewport.validate()?;

    let scale_x = viewport.width / physical.width;
    let scale_y = viewport.height / physical.height;
    let scale = scale_x.min(scale_y);

    // Positive over positive can still underflow to zero or overflow to inf.
    if !is_positive_finite(scale) {
        return Err(PanelfitError::DegenerateGeometry {
            width: physical.width,
            height: physical.height,
        });
    }

    log::debug!(
        "scale {scale} for {}x{} into {}x{}",
        physical.width,
        physical.height,
        viewport.width,
        viewport.height
    );
    Ok(Scale::new_unchecked(scale))
}

/// Render units per caller unit, for sizing artifacts drawn next to the grid.
///
/// The render space shares the grid's linear unit, so the ratio is the grid
/// scale itself regardless of how large the artifact is natively.
/// `units_per_panel_axis` is the artifact's own extent in caller units.
///
/// # Errors
/// Returns [`PanelfitError::InvalidDimension`] if `units_per_panel_axis`
/// is non-positive or non-finite.
pub fn pixels_per_unit(scale: Scale, units_per_panel_axis: f64) -> Result<f64> {
    if !is_positive_finite(units_per_panel_axis) {
        return Err(PanelfitError::InvalidDimension {
            field: "units_per_panel_axis",
            value: units_per_panel_axis,
        });
    }
    Ok(scale.get())
}

/// A human-scale figure drawn beside the grid for size reference.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceFigure {
    /// Real-world height of the figure, in the same unit as the panels.
    pub native_height: f64,
}

impl ReferenceFigure {
    /// Average adult height in centimetres.
    pub const HUMAN_CM: ReferenceFigure = ReferenceFigure {
        native_height: 170.0,
    };

    pub const fn new(native_height: f64) -> Self {
        Self { native_height }
    }

    /// Rendered height at the given render-units-per-unit ratio.
    pub fn rendered_height(&self, pixels_per_unit: f64) -> f64 {
        self.native_height * pixels_per_unit
    }

    /// Rendered height sized consistently with a grid drawn at `scale`.
    ///
    /// # Errors
    /// Returns [`PanelfitError::InvalidDimension`] if `native_height` is
    /// non-positive or non-finite.
    pub fn rendered_height_at(&self, scale: Scale) -> Result<f64> {
        let ppu = pixels_per_unit(scale, self.native_height)?;
        Ok(self.rendered_height(ppu))
    }
}
