//! Queries that only make sense on directed graphs.

use super::base::DiGraph;
use super::ids::{EdgeId, NodeId};
use crate::error::Result;

impl DiGraph {
    /// Source (tail) of a directed edge.
    pub fn source(&self, edge: EdgeId) -> Result<NodeId> {
        Ok(self.incident_nodes(edge)?.0)
    }

    /// Target (head) of a directed edge.
    pub fn target(&self, edge: EdgeId) -> Result<NodeId> {
        Ok(self.incident_nodes(edge)?.1)
    }

    /// Edges whose target is `node`.
    pub fn incoming_edges(&self, node: NodeId) -> Result<Vec<EdgeId>> {
        Ok(self.in_neighbors(node)?.into_iter().map(|(e, _)| e).collect())
    }

    /// Edges whose source is `node`.
    pub fn outgoing_edges(&self, node: NodeId) -> Result<Vec<EdgeId>> {
        Ok(self.out_neighbors(node)?.into_iter().map(|(e, _)| e).collect())
    }

    /// Sources of the incoming edges of `node`, one entry per edge.
    pub fn preceding_nodes(&self, node: NodeId) -> Result<Vec<NodeId>> {
        Ok(self.in_neighbors(node)?.into_iter().map(|(_, n)| n).collect())
    }

    /// Targets of the outgoing edges of `node`, one entry per edge.
    pub fn succeeding_nodes(&self, node: NodeId) -> Result<Vec<NodeId>> {
        Ok(self.out_neighbors(node)?.into_iter().map(|(_, n)| n).collect())
    }
}
