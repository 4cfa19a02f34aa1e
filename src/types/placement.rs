use serde::{Deserialize, Serialize};

use super::{Dimension, LayoutResult, Scale};

/// Position and size of one panel in render coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelPlacement {
    /// Row-major ordinal, `row * columns + column`.
    pub index: u64,
    pub row: u32,
    pub column: u32,
    /// Left edge
    pub x: f64,
    /// Top edge
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl PanelPlacement {
    /// Right edge (exclusive)
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge (exclusive)
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

/// Everything a renderer needs for one set of inputs.
///
/// Recomputed as a whole whenever any input changes; never patched in place.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderPlan {
    pub layout: LayoutResult,
    pub scale: Scale,
    /// One panel after scaling.
    pub scaled_panel: Dimension,
    /// Outer size of the rendered grid.
    pub extent: Dimension,
    /// Row-major placements, `layout.total_panels` long.
    pub placements: Vec<PanelPlacement>,
}
