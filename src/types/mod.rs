pub mod errors;
pub mod identifiers;
pub mod plan;

pub use errors::InvalidInput;
pub use identifiers::{Budget, CatalogVersion};
pub use plan::{
    Algorithm, FractionalEntry, OptimizationResult, PlanReport, PlannedItem, SelectionPlan,
};
