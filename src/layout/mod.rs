//! Layout engine for panel grids.
//!
//! This module handles:
//! - Counting panels per axis under the minimum/maximum strategies
//! - Deriving a uniform scale that fits the grid into a viewport
//! - Producing row-major placement rectangles for the renderer
//!
//! Every function here is pure. Callers recompute a full [`RenderPlan`]
//! whenever an input changes.

mod calculator;
mod grid;
mod scaling;
mod viewport;

pub use calculator::{compute, compute_both};
pub use grid::{build, grid_extent, placements, Placements, MAX_PANELS};
pub use scaling::{derive_scale, pixels_per_unit, ReferenceFigure};
pub use viewport::{Viewport, MAX_VIEWPORT_WIDTH, VIEWPORT_HEIGHT, WINDOW_MARGIN};

use crate::error::Result;
use crate::types::{PanelSpec, RenderPlan, Strategy, TargetSpec};

/// Run the full pipeline: layout, then scale, then placements.
///
/// # Errors
/// Propagates the first failing stage. A layout with no panels cannot be
/// scaled and yields [`crate::error::PanelfitError::DegenerateGeometry`];
/// one with more than [`MAX_PANELS`] panels yields
/// [`crate::error::PanelfitError::GridTooLarge`].
pub fn plan(
    target: TargetSpec,
    panel: PanelSpec,
    strategy: Strategy,
    viewport: &Viewport,
) -> Result<RenderPlan> {
    let layout = compute(target, panel, strategy)?;
    let scale = derive_scale(layout.final_size, viewport)?;
    let scaled_panel = scale.apply(panel);
    let extent = grid_extent(layout.rows, layout.columns, scaled_panel);
    let placements = build(layout.rows, layout.columns, scaled_panel)?;

    Ok(RenderPlan {
        layout,
        scale,
        scaled_panel,
        extent,
        placements,
    })
}
