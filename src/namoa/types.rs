//! NAMOA* search state and results.

use crate::graph::{EdgeId, EdgeKind, Graph, NodeId};
use crate::pareto::ParetoFront;
use crate::weight::{LabelSet, Weight};

/// A pending path extension.
///
/// `f` is the heuristic frontier of `node` shifted by `g`, minus members
/// already dominated by a destination cost. Entries are never mutated in
/// place except for that pruning.
#[derive(Debug, Clone)]
pub(crate) struct OpenListEntry {
    pub(crate) node: NodeId,
    pub(crate) g: Weight,
    pub(crate) f: LabelSet,
}

/// One reconstructed source-to-destination path.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LabelPath {
    /// Vector cost of the path; a member of the destination frontier.
    pub cost: Weight,
    /// Edges from source to destination.
    pub edges: Vec<EdgeId>,
    /// Nodes from source to destination; one more than `edges`.
    pub nodes: Vec<NodeId>,
}

impl LabelPath {
    /// Number of edges.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Whether the path has no edges (source equals destination).
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Node sequence joined by dashes, e.g. `n0-n2-n4-n5`.
    pub fn label(&self) -> String {
        self.nodes
            .iter()
            .map(NodeId::to_string)
            .collect::<Vec<_>>()
            .join("-")
    }
}

/// Result of a NAMOA* run.
#[derive(Debug, Clone)]
pub struct NamoaResult<Ty: EdgeKind> {
    /// Pareto-optimal costs from source to destination, in closing order.
    pub frontier: LabelSet,

    /// Every reconstructed path, grouped by frontier cost in frontier order.
    pub paths: Vec<LabelPath>,

    /// Solution subgraphs keyed by their summed edge weights.
    pub front: ParetoFront<Graph<Ty>>,

    /// Number of open-list entries expanded or closed.
    pub iterations: usize,

    /// Number of edge traversals attempted.
    pub extensions: usize,

    /// Number of extensions admitted to the open list.
    pub admitted: usize,
}

impl<Ty: EdgeKind> NamoaResult<Ty> {
    /// Whether the destination is unreachable.
    pub fn is_empty(&self) -> bool {
        self.frontier.is_empty()
    }

    /// Paths realizing `cost`.
    pub fn paths_for<'a>(&'a self, cost: &'a Weight) -> impl Iterator<Item = &'a LabelPath> {
        self.paths.iter().filter(move |p| &p.cost == cost)
    }
}
