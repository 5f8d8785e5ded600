use serde::{Deserialize, Serialize};

use crate::types::errors::InvalidInput;

// Serializable
// Comparable
// Explicit defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Currency amount represented by one DP capacity unit. Budget and
    /// prices are floored to whole multiples of it. Smaller units trade
    /// memory for precision.
    pub unit_size: f64,
    /// Upper bound on `(items + 1) * (capacity units + 1)` for the exact
    /// solver.
    pub max_table_cells: usize,
}

impl SolverConfig {
    pub fn v0() -> Self {
        Self {
            unit_size: 1.0,
            max_table_cells: 50_000_000,
        }
    }

    pub fn validate(&self) -> Result<(), InvalidInput> {
        if !self.unit_size.is_finite() || self.unit_size <= 0.0 {
            return Err(InvalidInput::InvalidUnitSize(self.unit_size));
        }
        Ok(())
    }

    /// Missing fields take their `v0` values.
    pub fn from_json_str(json: &str) -> Result<Self, InvalidInput> {
        let config: SolverConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self::v0()
    }
}
