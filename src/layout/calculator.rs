//! Panel count calculation for both coverage strategies.
//!
//! Counts come from a single floor/ceil of `target / panel` per axis. When
//! rounding in the quotient pushes the product past the target on the wrong
//! side (`0.3 / 0.1` is not `3.0`), the count steps back by one so the
//! deviation is never negative.

use crate::error::{PanelfitError, Result};
use crate::types::{
    is_positive_finite, Dimension, LayoutComparison, LayoutResult, PanelSpec, Strategy, TargetSpec,
};

/// Compute the panel grid for `target` using panels of size `panel`.
///
/// # Errors
/// Returns [`PanelfitError::InvalidDimension`] if any side of `target` or
/// `panel` is non-positive or non-finite, and
/// [`PanelfitError::GridTooLarge`] if an axis would need more than
/// `u32::MAX` panels.
pub fn compute(target: TargetSpec, panel: PanelSpec, strategy: Strategy) -> Result<LayoutResult> {
    validate(target, panel)?;

    let columns = axis_count("columns", target.width, panel.width, strategy)?;
    let rows = axis_count("rows", target.height, panel.height, strategy)?;

    let final_size = Dimension {
        width: f64::from(columns) * panel.width,
        height: f64::from(rows) * panel.height,
    };
    let deviation = match strategy {
        Strategy::Minimum => Dimension {
            width: target.width - final_size.width,
            height: target.height - final_size.height,
        },
        Strategy::Maximum => Dimension {
            width: final_size.width - target.width,
            height: final_size.height - target.height,
        },
    };

    let result = LayoutResult {
        rows,
        columns,
        total_panels: u64::from(rows) * u64::from(columns),
        final_size,
        deviation,
        strategy,
    };
    log::debug!(
        "{strategy} layout: {}x{} panels ({} total), deviation {}x{}",
        result.columns,
        result.rows,
        result.total_panels,
        result.deviation.width,
        result.deviation.height
    );
    Ok(result)
}

/// Compute the minimum and maximum layouts for the same input.
///
/// # Errors
/// Same conditions as [`compute`].
pub fn compute_both(target: TargetSpec, panel: PanelSpec) -> Result<LayoutComparison> {
    Ok(LayoutComparison {
        minimum: compute(target, panel, Strategy::Minimum)?,
        maximum: compute(target, panel, Strategy::Maximum)?,
    })
}

fn validate(target: TargetSpec, panel: PanelSpec) -> Result<()> {
    let checks = [
        ("target.width", target.width),
        ("target.height", target.height),
        ("panel.width", panel.width),
        ("panel.height", panel.height),
    ];
    for (field, value) in checks {
        if !is_positive_finite(value) {
            return Err(PanelfitError::InvalidDimension { field, value });
        }
    }
    Ok(())
}

/// Number of panels along one axis.
///
/// Minimum guarantees `count * panel <= target`, maximum guarantees
/// `target <= count * panel`. Otherwise the count is the plain floor/ceil.
fn axis_count(axis: &'static str, target: f64, panel: f64, strategy: Strategy) -> Result<u32> {
    let quotient = target / panel;
    let count = match strategy {
        Strategy::Minimum => {
            let count = quotient.floor();
            if count * panel > target {
                count - 1.0
            } else {
                count
            }
        }
        Strategy::Maximum => {
            let count = quotient.ceil();
            if count * panel < target {
                count + 1.0
            } else {
                count
            }
        }
    };

    to_u32(axis, count)
}

fn to_u32(axis: &'static str, count: f64) -> Result<u32> {
    if !count.is_finite() || count > f64::from(u32::MAX) {
        return Err(PanelfitError::GridTooLarge { axis, count });
    }
    // Non-negative integral value within range, checked above.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let count = count.max(0.0) as u32;
    Ok(count)
}
