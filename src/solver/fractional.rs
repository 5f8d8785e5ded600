use std::cmp::Ordering;

use tracing::debug;

use super::Solver;
use crate::item::Item;
use crate::types::errors::InvalidInput;
use crate::types::identifiers::Budget;
use crate::types::plan::{Algorithm, FractionalEntry, OptimizationResult, SelectionPlan};

/// Fractional knapsack: fill by value/price ratio, splitting the last item.
///
/// Optimal for divisible items under a single capacity constraint. Prices
/// are used as real numbers, so `total_cost` never exceeds the budget.
#[derive(Debug, Clone, Copy, Default)]
pub struct FractionalSolver;

impl Solver for FractionalSolver {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Fractional
    }

    fn solve(&self, budget: f64, items: &[Item]) -> Result<OptimizationResult, InvalidInput> {
        let budget = Budget::new(budget)?;
        if items.is_empty() {
            return Err(InvalidInput::EmptyCatalog);
        }

        // Sort by (ratio desc, catalog index asc). sort_by is stable.
        let mut order: Vec<usize> = (0..items.len()).collect();
        order.sort_by(|&a, &b| {
            items[b]
                .ratio()
                .partial_cmp(&items[a].ratio())
                .unwrap_or(Ordering::Equal)
        });

        debug_assert!(order
            .windows(2)
            .all(|w| items[w[0]].ratio() >= items[w[1]].ratio()));

        let mut entries = Vec::new();
        let mut total_cost = 0.0;
        let mut total_value = 0.0;
        let budget = budget.as_f64();
        // Repeated subtraction drifts; a whole item within this much of the
        // remaining budget still counts as fitting.
        let slack = budget * 4.0 * f64::EPSILON;

        for index in order {
            let remaining = budget - total_cost;
            if remaining <= slack {
                break;
            }
            let item = &items[index];

            if item.price() <= remaining + slack {
                entries.push(FractionalEntry {
                    index,
                    fraction: 1.0,
                });
                total_cost += item.price();
                total_value += item.value();
            } else {
                let fraction = remaining / item.price();
                entries.push(FractionalEntry { index, fraction });
                total_cost += remaining;
                total_value += item.value() * fraction;
                // Budget exhausted
                break;
            }
        }

        debug!(
            items = items.len(),
            selected = entries.len(),
            total_cost,
            total_value,
            "fractional solve finished"
        );

        Ok(OptimizationResult {
            selection: SelectionPlan::Fractional { entries },
            total_cost,
            total_value,
        })
    }
}
