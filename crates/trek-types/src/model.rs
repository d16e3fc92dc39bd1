//! Movement models: how a direction letter moves the walker.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Interpretation applied to every token of a journey.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MovementModel {
    /// The walker always faces its direction of travel: `L`/`R`/`B`
    /// rotate first, then the walker advances along its new heading.
    #[default]
    TurnThenMove,
    /// The walker keeps facing North: `F`/`B` move along y, `R`/`L` along x.
    FixedAxes,
}

impl MovementModel {
    /// Selects the model from a "fixed axes" flag.
    pub fn from_fixed_axes(fixed_axes: bool) -> Self {
        if fixed_axes {
            MovementModel::FixedAxes
        } else {
            MovementModel::TurnThenMove
        }
    }

    /// The name shown to users.
    pub fn name(self) -> &'static str {
        match self {
            MovementModel::TurnThenMove => "turn-then-move",
            MovementModel::FixedAxes => "fixed-axes",
        }
    }
}

impl fmt::Display for MovementModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
