//! Shortest-path result type.

use crate::graph::{EdgeId, NodeId};
use crate::weight::Weight;

/// A shortest path from source to destination.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShortestPath {
    /// Edges from source to destination.
    pub edges: Vec<EdgeId>,
    /// Nodes from source to destination, both included.
    pub nodes: Vec<NodeId>,
    /// Scalarized path length.
    pub distance: f64,
    /// Vector sum of the path's edge weights.
    pub cost: Weight,
}

impl ShortestPath {
    /// Number of edges.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Whether the path has no edges (source equals destination).
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}
