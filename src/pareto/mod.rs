//! Pareto front aggregation.
//!
//! Collects candidate solutions, scores them with a pluggable
//! [`CostCalculator`], and keeps only those whose cost no other member
//! dominates. All objectives are minimized.
//!
//! # Components
//!
//! - [`ParetoFront`]: incremental (`offer`) or batch (`from_candidates`)
//!   front with duplicate suppression
//! - [`non_dominated_sort`]: fast non-dominated sorting into ranked fronts
//! - [`EdgeWeightSum`]: costs a solution graph by summing edge weights
//!
//! # References
//!
//! - Deb et al. (2002), "A Fast and Elitist Multiobjective Genetic Algorithm: NSGA-II"

mod front;
mod sort;

pub use front::{CostCalculator, EdgeWeightSum, ParetoFront};
pub use sort::{non_dominated_sort, NondominatedSortResult};
