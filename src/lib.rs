//! Deterministic budget allocation engine.
//!
//! `budget-core` takes an ordered catalog of items (name, price, value) and a
//! budget, and picks the subset that maximizes total value without exceeding
//! the budget. Two solvers are provided: an exact 0/1 knapsack over integer
//! capacity units, and a fractional knapsack that fills greedily by
//! value/price ratio. Both are pure: identical inputs always produce
//! identical results.

pub mod catalog;
pub mod item;
pub mod solver;
pub mod types;

pub use solver::{solve_exact, solve_fractional};
