//! Graphs bundled with named annotators.

use std::collections::HashMap;

use super::annotator::{Annotator, ReverseAnnotator};
use super::base::{EdgeKind, Graph, Undirected};
use super::ids::{EdgeId, NodeId};
use crate::error::{GraphError, Result};
use crate::weight::{LabelSet, Weight};

/// Conventional name of the edge-weight annotator.
pub const EDGE_WEIGHTS: &str = "edge weights";

/// Conventional name of the per-node heuristic frontier annotator.
pub const HEURISTIC: &str = "heuristic";

/// Conventional name of the start/end marker annotator.
pub const TERMINALS: &str = "terminals";

/// Marks a node as the start or end of a path query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Terminal {
    /// Path source.
    Start,
    /// Path destination.
    End,
}

/// One named annotator attached to an [`AnnotatedGraph`].
#[derive(Debug, Clone)]
pub enum Annotation {
    /// Vector cost per edge.
    EdgeWeights(Annotator<EdgeId, Weight>),
    /// Cost frontier per node (e.g. a heuristic estimate).
    NodeFrontiers(Annotator<NodeId, LabelSet>),
    /// Start/end designation with reverse lookup.
    Terminals(ReverseAnnotator<NodeId, Terminal>),
}

impl Annotation {
    fn kind(&self) -> &'static str {
        match self {
            Annotation::EdgeWeights(_) => "edge weights",
            Annotation::NodeFrontiers(_) => "node frontiers",
            Annotation::Terminals(_) => "terminal markers",
        }
    }
}

/// A graph bundled with zero or more named annotators.
///
/// # Examples
///
/// ```
/// use u_mograph::graph::{AnnotatedGraph, Annotation, Annotator, DiGraph, EDGE_WEIGHTS};
/// use u_mograph::weight::Weight;
///
/// let mut g = DiGraph::new();
/// let n = g.add_nodes(2);
/// let e = g.add_edge(n[0], n[1]).unwrap();
///
/// let mut weights = Annotator::new();
/// weights.annotate(e, Weight::from([1.0, 2.0]));
///
/// let mut input = AnnotatedGraph::new(g);
/// input.insert(EDGE_WEIGHTS, Annotation::EdgeWeights(weights));
/// assert_eq!(input.validate_weights(EDGE_WEIGHTS).unwrap(), 2);
/// assert!(input.node_frontiers("heuristic").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct AnnotatedGraph<Ty: EdgeKind = Undirected> {
    graph: Graph<Ty>,
    annotations: HashMap<String, Annotation>,
}

impl<Ty: EdgeKind> AnnotatedGraph<Ty> {
    /// Wraps a graph with no annotators.
    pub fn new(graph: Graph<Ty>) -> Self {
        Self {
            graph,
            annotations: HashMap::new(),
        }
    }

    /// Wraps a graph together with its edge weights under [`EDGE_WEIGHTS`].
    pub fn with_weights(graph: Graph<Ty>, weights: Annotator<EdgeId, Weight>) -> Self {
        let mut annotated = Self::new(graph);
        annotated.insert(EDGE_WEIGHTS, Annotation::EdgeWeights(weights));
        annotated
    }

    /// The underlying graph.
    pub fn graph(&self) -> &Graph<Ty> {
        &self.graph
    }

    /// Mutable access to the underlying graph.
    ///
    /// Annotators are not updated when elements are deleted.
    pub fn graph_mut(&mut self) -> &mut Graph<Ty> {
        &mut self.graph
    }

    /// Registers an annotator, returning any previous one under the same name.
    pub fn insert(&mut self, name: impl Into<String>, annotation: Annotation) -> Option<Annotation> {
        self.annotations.insert(name.into(), annotation)
    }

    /// Removes an annotator.
    pub fn remove(&mut self, name: &str) -> Option<Annotation> {
        self.annotations.remove(name)
    }

    /// Whether an annotator is registered under `name`.
    pub fn has(&self, name: &str) -> bool {
        self.annotations.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.annotations.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// The annotator registered under `name`.
    pub fn annotation(&self, name: &str) -> Result<&Annotation> {
        self.annotations
            .get(name)
            .ok_or_else(|| GraphError::UnknownAnnotator(name.to_string()))
    }

    /// Edge weights registered under `name`.
    pub fn edge_weights(&self, name: &str) -> Result<&Annotator<EdgeId, Weight>> {
        match self.annotation(name)? {
            Annotation::EdgeWeights(weights) => Ok(weights),
            other => Err(kind_error(name, other, "edge weights")),
        }
    }

    /// Node frontiers registered under `name`.
    pub fn node_frontiers(&self, name: &str) -> Result<&Annotator<NodeId, LabelSet>> {
        match self.annotation(name)? {
            Annotation::NodeFrontiers(frontiers) => Ok(frontiers),
            other => Err(kind_error(name, other, "node frontiers")),
        }
    }

    /// Terminal markers registered under `name`.
    pub fn terminals(&self, name: &str) -> Result<&ReverseAnnotator<NodeId, Terminal>> {
        match self.annotation(name)? {
            Annotation::Terminals(marks) => Ok(marks),
            other => Err(kind_error(name, other, "terminal markers")),
        }
    }

    /// Edge weights under the conventional [`EDGE_WEIGHTS`] name.
    pub fn weights(&self) -> Result<&Annotator<EdgeId, Weight>> {
        self.edge_weights(EDGE_WEIGHTS)
    }

    /// Checks that every live edge carries a weight and that all weights
    /// share one dimension. Returns that dimension.
    ///
    /// The first live edge fixes the dimension. Weights kept for deleted
    /// edges are ignored. A graph without edges reports dimension 1.
    pub fn validate_weights(&self, name: &str) -> Result<usize> {
        let weights = self.edge_weights(name)?;
        let dim = weights.live_dimension(&self.graph)?.unwrap_or(1);
        for edge in self.graph.edges() {
            let w = weights.get(&edge)?;
            if w.dim() != dim {
                return Err(GraphError::DimensionMismatch {
                    expected: dim,
                    found: w.dim(),
                });
            }
        }
        Ok(dim)
    }
}

fn kind_error(name: &str, found: &Annotation, expected: &'static str) -> GraphError {
    tracing::debug!(name, found = found.kind(), expected, "annotator kind mismatch");
    GraphError::AnnotatorKind {
        name: name.to_string(),
        expected,
    }
}
