//! Human-readable text for result cards and grid axis labels.
//!
//! The unit string is supplied by the caller and appended verbatim.

use crate::types::{LayoutResult, Strategy};

/// `"6 panels"`
pub fn panel_count_label(result: &LayoutResult) -> String {
    match result.total_panels {
        1 => "1 panel".to_string(),
        n => format!("{n} panels"),
    }
}

/// Deviation with one decimal, e.g. `"5.0 × 30.0 cm uncovered"` or `"45.0 × 20.0 cm excess"`.
pub fn deviation_label(result: &LayoutResult, unit: &str) -> String {
    let kind = match result.strategy {
        Strategy::Minimum => "uncovered",
        Strategy::Maximum => "excess",
    };
    format!(
        "{:.1} × {:.1} {unit} {kind}",
        result.deviation.width, result.deviation.height
    )
}

/// Realised grid size, e.g. `"150 × 100 cm"`.
pub fn final_size_label(result: &LayoutResult, unit: &str) -> String {
    format!(
        "{} × {} {unit}",
        result.final_size.width, result.final_size.height
    )
}

/// One axis of the grid against its target, e.g. `"150cm (105cm +45cm)"`.
///
/// The difference is `final - target`, so a grid that falls short shows a
/// negative value.
pub fn axis_label(final_length: f64, target_length: f64, unit: &str) -> String {
    let diff = final_length - target_length;
    let sign = if diff >= 0.0 { "+" } else { "" };
    format!("{final_length}{unit} ({target_length}{unit} {sign}{diff}{unit})")
}
