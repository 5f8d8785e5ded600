use tracing::{debug, warn};

use super::config::SolverConfig;
use super::Solver;
use crate::item::Item;
use crate::types::errors::InvalidInput;
use crate::types::identifiers::Budget;
use crate::types::plan::{Algorithm, OptimizationResult, SelectionPlan};

/// Float division may miss a whole quotient by a few ulps (`0.3 / 0.1`
/// is `2.9999999999999996`). Corrections stay within this many epsilons of
/// the amount being discretized.
const UNIT_SLACK_EPSILONS: f64 = 4.0;

/// 0/1 knapsack by dynamic programming over integer capacity units.
///
/// Budget and prices are floored to whole units before indexing the table.
/// That is a deliberate approximation: an item priced 10.75 occupies 10
/// units, so a selection can admit items whose true summed price is
/// slightly above the budget. `total_cost` reports the floored prices.
#[derive(Debug, Clone)]
pub struct ExactSolver {
    unit_size: f64,
    max_table_cells: usize,
}

impl ExactSolver {
    pub fn new(config: &SolverConfig) -> Result<Self, InvalidInput> {
        config.validate()?;
        Ok(Self {
            unit_size: config.unit_size,
            max_table_cells: config.max_table_cells,
        })
    }

    pub fn unit_size(&self) -> f64 {
        self.unit_size
    }

    /// `floor(amount / unit_size)`. With a non-integral unit the quotient is
    /// checked against the product so that binary rounding of the division
    /// cannot cost or gain a unit; a quotient is never rounded up past
    /// what `k * unit_size <= amount` allows.
    fn to_units(&self, amount: f64) -> f64 {
        let units = (amount / self.unit_size).floor();
        if self.unit_size == 1.0 {
            return units;
        }

        let slack = amount.abs() * UNIT_SLACK_EPSILONS * f64::EPSILON;
        if (units + 1.0) * self.unit_size - amount <= slack {
            units + 1.0
        } else if units * self.unit_size - amount > slack {
            units - 1.0
        } else {
            units
        }
    }
}

impl Default for ExactSolver {
    fn default() -> Self {
        let config = SolverConfig::v0();
        Self {
            unit_size: config.unit_size,
            max_table_cells: config.max_table_cells,
        }
    }
}

impl Solver for ExactSolver {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Exact
    }

    fn solve(&self, budget: f64, items: &[Item]) -> Result<OptimizationResult, InvalidInput> {
        let budget = Budget::new(budget)?;
        if items.is_empty() {
            return Err(InvalidInput::EmptyCatalog);
        }

        // 1. Discretize and bound the table before allocating anything
        let capacity_units = self.to_units(budget.as_f64());
        let rows = items.len() as u128 + 1;
        let cells = rows.saturating_mul((capacity_units as u128).saturating_add(1));
        if cells > self.max_table_cells as u128 {
            warn!(%cells, limit = self.max_table_cells, "exact solve rejected: table too large");
            return Err(InvalidInput::TableTooLarge {
                cells,
                limit: self.max_table_cells,
            });
        }

        let capacity = capacity_units as usize;
        let width = capacity + 1;
        let n = items.len();

        // None: the item is wider than the whole budget and can never fit
        let weights: Vec<Option<usize>> = items
            .iter()
            .map(|item| {
                let units = self.to_units(item.price());
                if units > capacity as f64 {
                    None
                } else {
                    Some(units as usize)
                }
            })
            .collect();

        debug!(items = n, capacity, unit_size = self.unit_size, "exact solve");

        // 2. Fill. Value rows are streamed; only take decisions are kept per row.
        let mut prev = vec![0.0f64; width];
        let mut curr = vec![0.0f64; width];
        let mut taken = vec![false; n * width];

        for (i, item) in items.iter().enumerate() {
            let row = &mut taken[i * width..(i + 1) * width];
            for w in 0..width {
                curr[w] = prev[w];
                if let Some(wi) = weights[i] {
                    if wi <= w {
                        let with_item = item.value() + prev[w - wi];
                        // Strict: ties keep the item out
                        if with_item > prev[w] {
                            curr[w] = with_item;
                            row[w] = true;
                        }
                    }
                }
            }
            std::mem::swap(&mut prev, &mut curr);
        }

        let total_value = prev[capacity];

        // 3. Reconstruct from the last item back to the first
        let mut indices = Vec::new();
        let mut w = capacity;
        let mut used_units = 0usize;
        for i in (0..n).rev() {
            if taken[i * width + w] {
                if let Some(wi) = weights[i] {
                    indices.push(i);
                    w -= wi;
                    used_units += wi;
                }
            }
        }

        let total_cost = used_units as f64 * self.unit_size;
        debug_assert!(used_units <= capacity);

        debug!(
            selected = indices.len(),
            total_cost,
            total_value,
            "exact solve finished"
        );

        Ok(OptimizationResult {
            selection: SelectionPlan::Whole { indices },
            total_cost,
            total_value,
        })
    }
}
