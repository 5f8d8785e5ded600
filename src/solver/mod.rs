pub mod config;
pub mod exact;
pub mod fractional;

use chrono::Utc;
use tracing::debug;

use crate::catalog::Catalog;
use crate::item::Item;
use crate::types::errors::InvalidInput;
use crate::types::plan::{Algorithm, OptimizationResult, PlanReport, PlannedItem};
pub use config::SolverConfig;
pub use exact::ExactSolver;
pub use fractional::FractionalSolver;

/// A budget allocation strategy.
///
/// Implementations are pure: no I/O, no state carried between calls, and
/// the returned result never aliases `items`.
pub trait Solver {
	fn algorithm(&self) -> Algorithm;

	fn solve(&self, budget: f64, items: &[Item]) -> Result<OptimizationResult, InvalidInput>;
}

/// 0/1 knapsack with the default capacity unit (1.0) and table limit.
pub fn solve_exact(budget: f64, items: &[Item]) -> Result<OptimizationResult, InvalidInput> {
	ExactSolver::default().solve(budget, items)
}

/// Fractional knapsack by value/price ratio.
pub fn solve_fractional(budget: f64, items: &[Item]) -> Result<OptimizationResult, InvalidInput> {
	FractionalSolver.solve(budget, items)
}

/// Runs a solver over a catalog and resolves the selection into a report.
#[derive(Debug, Clone, Default)]
pub struct Planner {
	exact: ExactSolver,
	fractional: FractionalSolver,
}

impl Planner {
	pub fn new(config: &SolverConfig) -> Result<Self, InvalidInput> {
		Ok(Self {
			exact: ExactSolver::new(config)?,
			fractional: FractionalSolver,
		})
	}

	pub fn solver(&self, algorithm: Algorithm) -> &dyn Solver {
		match algorithm {
			Algorithm::Exact => &self.exact,
			Algorithm::Fractional => &self.fractional,
		}
	}

	pub fn optimize(
		&self,
		catalog: &Catalog,
		budget: f64,
		algorithm: Algorithm,
	) -> Result<PlanReport, InvalidInput> {
		// 1. Solve against the catalog's current contents
		let result = self.solver(algorithm).solve(budget, catalog.items())?;

		// 2. Resolve indices back to catalog entries
		let entries = result
			.selection
			.entries()
			.into_iter()
			.map(|(index, fraction)| -> Result<PlannedItem, InvalidInput> {
				let item = catalog.get(index).ok_or(InvalidInput::IndexOutOfRange {
					index,
					len: catalog.len(),
				})?;
				Ok(PlannedItem {
					index,
					name: item.name().to_string(),
					price: item.price(),
					value: item.value(),
					fraction,
					cost: item.price() * fraction,
					value_share: item.value() * fraction,
				})
			})
			.collect::<Result<Vec<_>, _>>()?;

		debug!(
			algorithm = algorithm.label(),
			selected = entries.len(),
			"plan complete"
		);

		// 3. Assemble. Totals come from the solver, not from the entries:
		// for the exact solver they are in floored capacity units.
		Ok(PlanReport {
			algorithm,
			catalog_version: catalog.version(),
			generated_at: Utc::now(),
			budget,
			items_selected: entries.len(),
			entries,
			total_cost: result.total_cost,
			total_value: result.total_value,
			remaining_budget: result.remaining(budget),
			items_considered: catalog.len(),
		})
	}
}
