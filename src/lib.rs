//! Multi-objective graph algorithms.
//!
//! Optimal and Pareto-optimal paths and spanning trees over graphs whose
//! edges carry vector-valued costs:
//!
//! - **Weights**: fixed-dimension cost vectors with a four-way Pareto
//!   dominance classifier, and label sets of such vectors.
//! - **Graphs**: directed and undirected graphs with stable identifiers,
//!   subgraph extraction, and named annotators (edge weights, heuristic
//!   frontiers, start/end markers).
//! - **Union-Find**: arena-backed disjoint sets with union by rank,
//!   optional path compression, and representative reassignment.
//! - **Single-objective algorithms**: Dijkstra, Prim, and Kruskal with
//!   forced and banned edges, over scalarized weights.
//! - **NAMOA\***: multi-objective label-setting search with dominance
//!   pruning and reconstruction of every co-optimal path.
//! - **Pareto fronts**: aggregation of candidate solutions under a
//!   pluggable cost calculator.
//!
//! # Architecture
//!
//! This crate sits at Layer 2 (Algorithms) in the U-Engine ecosystem,
//! depending only on `u-numflow` (Layer 1: Foundation) for seeded
//! randomness. It performs no I/O: instance parsing and result storage
//! belong to consumers at higher layers, which observe runs through the
//! [`measure::MeasurementSink`] boundary.

pub mod algorithm;
pub mod error;
pub mod generate;
pub mod graph;
pub mod measure;
pub mod namoa;
pub mod pareto;
pub mod shortest;
pub mod spanning;
pub mod union_find;
pub mod weight;

mod scalar;

pub use error::{GraphError, Result, UnionFindError};
