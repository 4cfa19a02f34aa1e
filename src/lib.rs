//! panelfit - panel tiling calculator for the web
//!
//! Works out how many fixed-size panels cover a target area and how to draw
//! the resulting grid:
//! - Minimum coverage (round down, may leave a gap) or maximum coverage
//!   (round up, may overshoot)
//! - Uniform, aspect-preserving scale into a bounded viewport
//! - Row-major placement rectangles for the renderer
//! - Pure functions only; units are whatever the caller labels them
//!
//! # Usage (Rust)
//!
//! ```
//! use panelfit::{layout, Dimension, Strategy};
//!
//! let plan = layout::plan(
//!     Dimension::new(105.0, 80.0),
//!     Dimension::new(50.0, 50.0),
//!     Strategy::Maximum,
//!     &layout::Viewport::new(800.0, 400.0),
//! )?;
//! assert_eq!(plan.layout.total_panels, 6);
//! assert_eq!(plan.placements.len(), 6);
//! # Ok::<(), panelfit::error::PanelfitError>(())
//! ```
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { render_plan } from 'panelfit';
//! await init();
//! const plan = render_plan(105, 80, 50, 50, 'maximum', 800, 400);
//! ```

pub mod error;
pub mod layout;
pub mod summary;
pub mod types;

use wasm_bindgen::prelude::*;

pub use error::{PanelfitError, Result};
pub use types::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}

fn parse_inputs(
    target_width: f64,
    target_height: f64,
    panel_width: f64,
    panel_height: f64,
) -> (TargetSpec, PanelSpec) {
    (
        Dimension::new(target_width, target_height),
        Dimension::new(panel_width, panel_height),
    )
}

fn parse_strategy(strategy: &str) -> std::result::Result<Strategy, JsValue> {
    strategy.parse::<Strategy>().map_err(JsValue::from)
}

/// Compute a layout and return it as a JSON string
///
/// # Arguments
/// * `strategy` - `"minimum"` or `"maximum"` (case-insensitive)
///
/// # Errors
/// Returns an error if a dimension is invalid or the strategy is unknown.
#[wasm_bindgen]
pub fn layout_json(
    target_width: f64,
    target_height: f64,
    panel_width: f64,
    panel_height: f64,
    strategy: &str,
) -> std::result::Result<String, JsValue> {
    let (target, panel) = parse_inputs(target_width, target_height, panel_width, panel_height);
    let result =
        layout::compute(target, panel, parse_strategy(strategy)?).map_err(JsValue::from)?;

    serde_json::to_string(&result)
        .map_err(|e| JsValue::from_str(&format!("JSON serialization error: {e}")))
}

/// Compute a layout and return it as a `JsValue`
///
/// # Errors
/// Returns an error if a dimension is invalid or the strategy is unknown.
#[wasm_bindgen]
pub fn compute_layout(
    target_width: f64,
    target_height: f64,
    panel_width: f64,
    panel_height: f64,
    strategy: &str,
) -> std::result::Result<JsValue, JsValue> {
    let (target, panel) = parse_inputs(target_width, target_height, panel_width, panel_height);
    let result =
        layout::compute(target, panel, parse_strategy(strategy)?).map_err(JsValue::from)?;

    serde_wasm_bindgen::to_value(&result)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
}

/// Compute both strategies for the same input, for side-by-side result cards
///
/// # Errors
/// Returns an error if a dimension is invalid.
#[wasm_bindgen]
pub fn compare_layouts(
    target_width: f64,
    target_height: f64,
    panel_width: f64,
    panel_height: f64,
) -> std::result::Result<JsValue, JsValue> {
    let (target, panel) = parse_inputs(target_width, target_height, panel_width, panel_height);
    let comparison = layout::compute_both(target, panel).map_err(JsValue::from)?;

    serde_wasm_bindgen::to_value(&comparison)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
}

/// Compute the layout, scale and placements the grid renderer needs
///
/// The viewport size is passed in explicitly; see
/// [`layout::Viewport::fit_window`] for the usual window-based sizing.
///
/// # Errors
/// Returns an error if a dimension is invalid, the strategy is unknown, or
/// the layout has no panels to draw.
#[wasm_bindgen]
pub fn render_plan(
    target_width: f64,
    target_height: f64,
    panel_width: f64,
    panel_height: f64,
    strategy: &str,
    viewport_width: f64,
    viewport_height: f64,
) -> std::result::Result<JsValue, JsValue> {
    let (target, panel) = parse_inputs(target_width, target_height, panel_width, panel_height);
    let viewport = layout::Viewport::new(viewport_width, viewport_height);
    let plan = layout::plan(target, panel, parse_strategy(strategy)?, &viewport)
        .map_err(JsValue::from)?;

    serde_wasm_bindgen::to_value(&plan)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
}

/// Get the library version
#[must_use]
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
