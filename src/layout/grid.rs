//! Placement rectangles for every panel of a uniform grid.
//!
//! Cells are produced in row-major order. Renderers that stagger panel
//! appearance by index depend on that order, so it must never change for
//! identical inputs.

use std::iter::FusedIterator;

use crate::error::{PanelfitError, Result};
use crate::types::{Dimension, PanelPlacement};

/// Most panels a single grid may hold.
pub const MAX_PANELS: usize = 1_000_000;

/// Build the placement of every panel, row by row.
///
/// Returns an empty list when `rows` or `columns` is zero.
///
/// # Errors
/// Returns [`PanelfitError::GridTooLarge`] if `rows * columns` exceeds
/// [`MAX_PANELS`]; nothing is allocated in that case.
pub fn build(rows: u32, columns: u32, scaled_panel: Dimension) -> Result<Vec<PanelPlacement>> {
    Ok(placements(rows, columns, scaled_panel)?.collect())
}

/// Lazily enumerate the same placements as [`build`].
///
/// The iterator is cheap to clone; a clone taken before iteration replays
/// the full sequence.
///
/// # Errors
/// Returns [`PanelfitError::GridTooLarge`] if `rows * columns` exceeds
/// [`MAX_PANELS`].
pub fn placements(rows: u32, columns: u32, scaled_panel: Dimension) -> Result<Placements> {
    let end = usize::try_from(u64::from(rows) * u64::from(columns))
        .ok()
        .filter(|&total| total <= MAX_PANELS)
        .ok_or(PanelfitError::GridTooLarge {
            axis: "panels",
            count: f64::from(rows) * f64::from(columns),
        })?;

    Ok(Placements {
        columns,
        panel: scaled_panel,
        next: 0,
        end,
    })
}

/// Outer size of a grid of `rows` x `columns` panels.
pub fn grid_extent(rows: u32, columns: u32, scaled_panel: Dimension) -> Dimension {
    Dimension {
        width: f64::from(columns) * scaled_panel.width,
        height: f64::from(rows) * scaled_panel.height,
    }
}

/// Row-major iterator over panel placements
#[derive(Debug, Clone)]
pub struct Placements {
    columns: u32,
    panel: Dimension,
    next: usize,
    /// Never above [`MAX_PANELS`].
    end: usize,
}

impl Placements {
    fn placement_at(&self, index: usize) -> Option<PanelPlacement> {
        let columns = usize::try_from(self.columns).ok()?;
        let row = u32::try_from(index.checked_div(columns)?).ok()?;
        let column = u32::try_from(index.checked_rem(columns)?).ok()?;
        Some(PanelPlacement {
            index: u64::try_from(index).ok()?,
            row,
            column,
            x: f64::from(column) * self.panel.width,
            y: f64::from(row) * self.panel.height,
            width: self.panel.width,
            height: self.panel.height,
        })
    }
}

impl Iterator for Placements {
    type Item = PanelPlacement;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.end {
            return None;
        }
        let placement = self.placement_at(self.next)?;
        self.next += 1;
        Some(placement)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Placements {}

impl FusedIterator for Placements {}
