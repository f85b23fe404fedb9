//! Vector-valued costs and the Pareto dominance order.
//!
//! # Key Types
//!
//! - [`Weight`]: fixed-dimension real vector with componentwise arithmetic
//! - [`Dominance`]: outcome of comparing two weights under Pareto dominance
//! - [`LabelSet`]: an unordered collection of weights attributed to one node
//!
//! All objectives are **minimized**: a weight dominates another when it is
//! no worse in every component and strictly better in at least one.
//!
//! # References
//!
//! - Ehrgott (2005), *Multicriteria Optimization*, ch. 2

mod label_set;
mod vector;

pub use label_set::LabelSet;
pub(crate) use vector::WeightKey;
pub use vector::{Dominance, Weight};
