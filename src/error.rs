//! Structured error types for panelfit.
//!
//! Every stage validates its own inputs and fails fast; nothing is clamped
//! or defaulted.

/// All errors that can occur while computing a panel layout or its render geometry.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PanelfitError {
    /// A target, panel, viewport or artifact size was non-positive or non-finite.
    #[error("Invalid dimension: {field} must be a positive finite number (got {value})")]
    InvalidDimension {
        /// Which input was rejected, e.g. `"panel.width"`.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// The physical grid has no area, so no scale can be derived.
    #[error("Degenerate geometry: cannot scale a {width} x {height} grid")]
    DegenerateGeometry { width: f64, height: f64 },

    /// A per-axis panel count does not fit in a `u32`.
    #[error("Grid too large: {count} panels along {axis}")]
    GridTooLarge { axis: &'static str, count: f64 },

    /// Strategy name not recognised when parsing from a string.
    #[error("Unknown strategy: {0}")]
    UnknownStrategy(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PanelfitError>;

impl From<PanelfitError> for wasm_bindgen::JsValue {
    fn from(e: PanelfitError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}
