//! Multi-objective label-setting shortest paths (NAMOA*).
//!
//! Finds every Pareto-optimal cost from a source to a destination over
//! edges with vector weights, then reconstructs the paths realizing each
//! cost.
//!
//! # Algorithm
//!
//! Each node keeps an open label set (path costs awaiting expansion) and
//! a closed label set (expanded costs). The open list is FIFO: entries
//! are appended at the back and removed from the front.
//!
//! 1. Seed the source with the zero cost
//! 2. Pop the front entry and move its cost from open to closed
//! 3. At the destination, drop projected costs the new destination cost
//!    dominates; entries left with no projected cost leave the open list
//! 4. Elsewhere, extend along every outgoing edge. An extension equal to
//!    or dominated by a label of the neighbor is dropped; otherwise the
//!    neighbor labels it dominates are removed. The extension enters the
//!    open list if some heuristic projection survives the destination's
//!    closed costs
//! 5. When the open list is empty, the destination's closed set is the
//!    cost frontier
//! 6. Walk backwards from each frontier cost through closed labels to
//!    reconstruct the paths
//!
//! Without a supplied heuristic, each node is estimated by its outgoing
//! edge weights ([`local_heuristic`]).
//!
//! # References
//!
//! - Mandow & Pérez de la Cruz (2005), "A new approach to multiobjective
//!   A* search", IJCAI
//! - Mandow & Pérez de la Cruz (2010), "Multiobjective A* search with
//!   consistent heuristics", Journal of the ACM 57(5)

mod backtrack;
mod config;
mod runner;
mod types;

pub use config::{NamoaConfig, END_NODE_PARAM, START_NODE_PARAM};
pub use runner::{local_heuristic, NamoaRunner, EXPERIMENT_NAME};
pub use types::{LabelPath, NamoaResult};
