use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::Dimension;
use crate::error::PanelfitError;

/// How partial panels are handled along each axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Round panel counts down. Never exceeds the target, may leave a gap.
    #[default]
    Minimum,
    /// Round panel counts up. Always covers the target, may overshoot.
    Maximum,
}

impl Strategy {
    /// Both strategies, in display order.
    pub const ALL: [Strategy; 2] = [Strategy::Minimum, Strategy::Maximum];

    pub fn as_str(self) -> &'static str {
        match self {
            Strategy::Minimum => "minimum",
            Strategy::Maximum => "maximum",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = PanelfitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("minimum") || trimmed.eq_ignore_ascii_case("min") {
            Ok(Strategy::Minimum)
        } else if trimmed.eq_ignore_ascii_case("maximum") || trimmed.eq_ignore_ascii_case("max") {
            Ok(Strategy::Maximum)
        } else {
            Err(PanelfitError::UnknownStrategy(s.to_string()))
        }
    }
}

/// Panel grid computed for one target/panel pair under one strategy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutResult {
    pub rows: u32,
    pub columns: u32,
    /// Always `rows * columns`.
    pub total_panels: u64,
    /// Size of the realised grid: `columns * panel.width` by `rows * panel.height`.
    pub final_size: Dimension,
    /// Uncovered remainder (minimum) or overshoot (maximum). Never negative.
    pub deviation: Dimension,
    pub strategy: Strategy,
}

impl LayoutResult {
    /// True when the grid matches the target exactly on both axes.
    pub fn is_exact_fit(&self) -> bool {
        self.deviation.width == 0.0 && self.deviation.height == 0.0
    }

    /// True when the layout contains no panels at all.
    pub fn is_empty(&self) -> bool {
        self.total_panels == 0
    }
}

/// Both strategies evaluated for the same input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutComparison {
    pub minimum: LayoutResult,
    pub maximum: LayoutResult,
}

impl LayoutComparison {
    /// The result for the given strategy.
    pub fn get(&self, strategy: Strategy) -> &LayoutResult {
        match strategy {
            Strategy::Minimum => &self.minimum,
            Strategy::Maximum => &self.maximum,
        }
    }
}
