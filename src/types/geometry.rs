use serde::{Deserialize, Serialize};

/// A width/height pair in caller-defined linear units.
///
/// The unit is opaque: centimetres, millimetres and pixels all work, as long
/// as the caller labels them consistently. Construction does not validate;
/// each stage checks the values it depends on.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Dimension {
    pub width: f64,
    pub height: f64,
}

/// Size of a single panel.
pub type PanelSpec = Dimension;

/// Size of the area the panels should cover.
pub type TargetSpec = Dimension;

impl Dimension {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// True when both sides are finite and strictly positive.
    pub fn is_positive(&self) -> bool {
        is_positive_finite(self.width) && is_positive_finite(self.height)
    }

    /// Width divided by height.
    pub fn aspect_ratio(&self) -> f64 {
        self.width / self.height
    }
}

pub(crate) fn is_positive_finite(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Uniform scale factor mapping physical units to render units.
///
/// Always finite and strictly positive; only the scaling stage creates one.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Scale(f64);

impl Scale {
    pub(crate) const fn new_unchecked(value: f64) -> Self {
        Self(value)
    }

    /// The raw multiplier.
    pub const fn get(self) -> f64 {
        self.0
    }

    /// Scale both sides of a physical size, preserving its aspect ratio.
    pub fn apply(self, size: Dimension) -> Dimension {
        Dimension {
            width: size.width * self.0,
            height: size.height * self.0,
        }
    }

    /// Convert a single physical length to render units.
    pub fn to_render(self, units: f64) -> f64 {
        units * self.0
    }
}
