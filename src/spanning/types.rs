//! Spanning-tree result type.

use crate::graph::EdgeId;
use crate::weight::Weight;

/// A spanning tree found by [`PrimRunner`](super::PrimRunner) or
/// [`KruskalRunner`](super::KruskalRunner).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpanningTree {
    /// Tree edges in admission order.
    pub edges: Vec<EdgeId>,
    /// Sum of the scalarized edge weights.
    pub total_weight: f64,
    /// Vector sum of the edge weights.
    pub cost: Weight,
}

impl SpanningTree {
    /// Number of edges.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Whether the tree has no edges (zero or one node).
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}
