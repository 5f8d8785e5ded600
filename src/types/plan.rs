use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::errors::InvalidInput;
use crate::types::identifiers::CatalogVersion;

/// Which knapsack variant to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    /// 0/1 knapsack: items are taken whole or not at all.
    Exact,
    /// Fractional knapsack: items may be divided.
    Fractional,
}

impl Algorithm {
    pub fn label(&self) -> &'static str {
        match self {
            Algorithm::Exact => "0/1 Knapsack",
            Algorithm::Fractional => "Fractional Knapsack",
        }
    }
}

impl FromStr for Algorithm {
    type Err = InvalidInput;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "0/1" | "exact" => Ok(Algorithm::Exact),
            "fractional" => Ok(Algorithm::Fractional),
            other => Err(InvalidInput::UnknownAlgorithm(other.to_string())),
        }
    }
}

/// One partially or fully taken item in a fractional plan.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FractionalEntry {
    pub index: usize,
    /// In `(0, 1]`.
    pub fraction: f64,
}

/// Which catalog entries a solver picked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SelectionPlan {
    /// Catalog indices taken whole, in the order the solver discovered them.
    Whole { indices: Vec<usize> },
    /// `(index, fraction)` pairs in descending ratio order.
    Fractional { entries: Vec<FractionalEntry> },
}

impl SelectionPlan {
    /// Uniform `(index, fraction)` view over either variant.
    pub fn entries(&self) -> Vec<(usize, f64)> {
        match self {
            SelectionPlan::Whole { indices } => indices.iter().map(|&i| (i, 1.0)).collect(),
            SelectionPlan::Fractional { entries } => {
                entries.iter().map(|e| (e.index, e.fraction)).collect()
            }
        }
    }

    pub fn len(&self) -> usize {
        match self {
            SelectionPlan::Whole { indices } => indices.len(),
            SelectionPlan::Fractional { entries } => entries.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, index: usize) -> bool {
        self.entries().iter().any(|&(i, _)| i == index)
    }
}

/// Output of either solver. Owns all of its data; nothing here borrows
/// from the catalog it was computed from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationResult {
    pub selection: SelectionPlan,
    pub total_cost: f64,
    pub total_value: f64,
}

impl OptimizationResult {
    /// No item fit. A valid outcome, not an error.
    pub fn is_empty(&self) -> bool {
        self.selection.is_empty()
    }

    pub fn remaining(&self, budget: f64) -> f64 {
        budget - self.total_cost
    }
}

/// A selected catalog entry, resolved against the catalog for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannedItem {
    pub index: usize,
    pub name: String,
    pub price: f64,
    pub value: f64,
    pub fraction: f64,
    /// `price * fraction`, the real (untruncated) amount spent on this entry.
    pub cost: f64,
    /// `value * fraction`.
    pub value_share: f64,
}

/// Self-contained outcome of a planning call, ready for presentation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanReport {
    pub algorithm: Algorithm,
    pub catalog_version: CatalogVersion,
    pub generated_at: DateTime<Utc>, // informational only
    pub budget: f64,

    pub entries: Vec<PlannedItem>,

    pub total_cost: f64,
    pub total_value: f64,
    pub remaining_budget: f64,

    pub items_considered: usize,
    pub items_selected: usize,
}

impl fmt::Display for PlanReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} Results:", self.algorithm.label())?;
        writeln!(f, "Selected Items:")?;
        for entry in &self.entries {
            if entry.fraction >= 1.0 {
                writeln!(
                    f,
                    "• {}: Price=${:.2}, Value={:.2}",
                    entry.name, entry.price, entry.value
                )?;
            } else {
                writeln!(
                    f,
                    "• {}: {:.1}% - Price=${:.2}, Value={:.2}",
                    entry.name,
                    entry.fraction * 100.0,
                    entry.cost,
                    entry.value_share
                )?;
            }
        }
        writeln!(f)?;
        writeln!(f, "Total Cost: ${:.2}", self.total_cost)?;
        writeln!(f, "Total Value: {:.2}", self.total_value)?;
        write!(f, "Remaining Budget: ${:.2}", self.remaining_budget)
    }
}
