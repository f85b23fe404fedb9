//! Error types shared by every module.
//!
//! Structural contract violations (unknown nodes, missing annotations,
//! dimension mismatches) surface as [`GraphError`]. Data conditions such
//! as a disconnected graph are not errors; runners report them as `None`.

use thiserror::Error;

use crate::graph::{EdgeId, NodeId};

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Errors raised by graph queries, annotators, and algorithm runners.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GraphError {
    /// The node does not exist in the graph.
    #[error("unknown node {0}")]
    UnknownNode(NodeId),

    /// The edge does not exist in the graph.
    #[error("unknown edge {0}")]
    UnknownEdge(EdgeId),

    /// The node is not an endpoint of the edge.
    #[error("node {node} is not incident to edge {edge}")]
    NotIncident { edge: EdgeId, node: NodeId },

    /// A subgraph request listed an edge whose endpoints are not in the node set.
    #[error("edge {0} has an endpoint outside the requested node set")]
    EdgeOutsideSubgraph(EdgeId),

    /// No annotator is registered under the name.
    #[error("unknown annotator: {0}")]
    UnknownAnnotator(String),

    /// An annotator exists under the name but holds another kind of annotation.
    #[error("annotator '{name}' does not hold {expected}")]
    AnnotatorKind { name: String, expected: &'static str },

    /// The element carries no annotation.
    #[error("missing annotation for {0}")]
    MissingAnnotation(String),

    /// Two vectors (or a vector and a coefficient list) disagree in length.
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch { expected: usize, found: usize },

    /// A search met a negative edge weight (scalarized, or a single component).
    #[error("edge {edge} has negative weight {weight}")]
    NegativeWeight { edge: EdgeId, weight: f64 },

    /// A search met a NaN or infinite edge weight.
    #[error("edge {edge} has non-finite weight {weight}")]
    NonFiniteWeight { edge: EdgeId, weight: f64 },

    /// A configuration value is out of its valid range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A union-find contract violation.
    #[error(transparent)]
    UnionFind(#[from] UnionFindError),
}

/// Contract violations reported by [`UnionFind`](crate::union_find::UnionFind).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnionFindError {
    /// The element was added twice while safe mode is on.
    #[error("element {0} is already a member")]
    DuplicateElement(String),

    /// The element was never added.
    #[error("element {0} is not a member")]
    UnknownElement(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = GraphError::DimensionMismatch {
            expected: 2,
            found: 3,
        };
        assert_eq!(err.to_string(), "dimension mismatch: expected 2, found 3");

        let err = GraphError::UnknownAnnotator("heuristic".into());
        assert_eq!(err.to_string(), "unknown annotator: heuristic");
    }

    #[test]
    fn test_union_find_error_converts() {
        let err: GraphError = UnionFindError::UnknownElement("n4".into()).into();
        assert_eq!(err.to_string(), "element n4 is not a member");
    }
}
