//! Annotated graph abstraction.
//!
//! A [`Graph`] owns its nodes and edges. Node and edge identifiers are
//! stable slot indices: deleting an element never renumbers the others,
//! and a subgraph keeps the identifiers of its parent. As a result,
//! annotators keyed by [`NodeId`]/[`EdgeId`] stay valid on subgraphs.
//!
//! # Key Types
//!
//! - [`Graph`]: node/edge container, generic over [`Directed`] or [`Undirected`]
//! - [`Annotator`]: element → value mapping (edge weights, heuristics, ...)
//! - [`ReverseAnnotator`]: annotator with value → elements lookup
//! - [`AnnotatedGraph`]: a graph bundled with named annotators
//!
//! Annotators are owned by whoever builds them, not by the graph. One
//! graph can be annotated by several independent annotators at once.

mod annotated;
mod annotator;
mod base;
mod directed;
mod ids;

pub use annotated::{
    AnnotatedGraph, Annotation, Terminal, EDGE_WEIGHTS, HEURISTIC, TERMINALS,
};
pub use annotator::{Annotator, ReverseAnnotator};
pub use base::{DiGraph, Directed, EdgeKind, Graph, UnGraph, Undirected};
pub use ids::{EdgeId, NodeId};
