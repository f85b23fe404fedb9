//! NAMOA* configuration.

use std::collections::HashMap;

use tracing::warn;

use crate::error::{GraphError, Result};
use crate::graph::{AnnotatedGraph, EdgeKind, Graph, NodeId, Terminal, TERMINALS};

/// Parameter key selecting the source by live-node index.
pub const START_NODE_PARAM: &str = "startNodeId";

/// Parameter key selecting the destination by live-node index.
pub const END_NODE_PARAM: &str = "endNodeId";

/// Configuration for [`NamoaRunner`](super::NamoaRunner).
///
/// # Examples
///
/// ```
/// use u_mograph::graph::NodeId;
/// use u_mograph::namoa::NamoaConfig;
///
/// let config = NamoaConfig::new(NodeId::new(0), NodeId::new(5)).with_path_limit(8);
/// assert_eq!(config.path_limit, Some(8));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamoaConfig {
    /// Node the search starts from.
    pub source: NodeId,

    /// Node whose cost frontier is computed.
    pub destination: NodeId,

    /// Maximum number of edge sequences reconstructed per frontier cost.
    ///
    /// `None` reconstructs all of them.
    pub path_limit: Option<usize>,
}

impl NamoaConfig {
    /// Creates a configuration that reconstructs every path.
    pub fn new(source: NodeId, destination: NodeId) -> Self {
        Self {
            source,
            destination,
            path_limit: None,
        }
    }

    /// Caps the number of reconstructed paths per frontier cost.
    pub fn with_path_limit(mut self, limit: usize) -> Self {
        self.path_limit = Some(limit);
        self
    }

    /// Reads `startNodeId` / `endNodeId` from a parameter map.
    ///
    /// Each value is an index into the graph's live nodes. A missing,
    /// unparsable, or out-of-range value falls back to the first node
    /// (source) or the last node (destination).
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidConfig`] if the graph has no nodes.
    pub fn from_params<Ty: EdgeKind>(
        graph: &Graph<Ty>,
        params: &HashMap<String, String>,
    ) -> Result<Self> {
        let nodes = live_nodes(graph)?;
        let source = node_param(&nodes, params, START_NODE_PARAM, 0);
        let destination = node_param(&nodes, params, END_NODE_PARAM, nodes.len() - 1);
        Ok(Self::new(source, destination))
    }

    /// Reads the source and destination from the [`TERMINALS`] annotator.
    ///
    /// Without the annotator, or without a `Start` / `End` marker, the
    /// first / last live node is used.
    pub fn from_terminals<Ty: EdgeKind>(input: &AnnotatedGraph<Ty>) -> Result<Self> {
        let nodes = live_nodes(input.graph())?;
        let (mut source, mut destination) = (nodes[0], nodes[nodes.len() - 1]);
        if input.has(TERMINALS) {
            let marks = input.terminals(TERMINALS)?;
            if let Some(&start) = marks.elements_with(&Terminal::Start).first() {
                source = start;
            }
            if let Some(&end) = marks.elements_with(&Terminal::End).first() {
                destination = end;
            }
        }
        Ok(Self::new(source, destination))
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.path_limit == Some(0) {
            return Err(GraphError::InvalidConfig(
                "path_limit must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

fn live_nodes<Ty: EdgeKind>(graph: &Graph<Ty>) -> Result<Vec<NodeId>> {
    let nodes: Vec<NodeId> = graph.nodes().collect();
    if nodes.is_empty() {
        return Err(GraphError::InvalidConfig("graph has no nodes".into()));
    }
    Ok(nodes)
}

fn node_param(
    nodes: &[NodeId],
    params: &HashMap<String, String>,
    key: &str,
    fallback: usize,
) -> NodeId {
    let Some(raw) = params.get(key) else {
        return nodes[fallback];
    };
    match raw.trim().parse::<usize>() {
        Ok(index) if index < nodes.len() => nodes[index],
        _ => {
            warn!(
                key,
                value = %raw,
                nodes = nodes.len(),
                fallback,
                "node parameter out of range, using fallback"
            );
            nodes[fallback]
        }
    }
}
