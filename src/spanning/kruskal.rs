//! Kruskal's algorithm with forced and banned edges.

use tracing::{debug, trace};

use super::config::KruskalConfig;
use super::types::SpanningTree;
use crate::error::{GraphError, Result};
use crate::graph::{Annotator, EdgeId, EdgeKind, Graph, NodeId};
use crate::scalar::ScalarWeights;
use crate::union_find::UnionFind;
use crate::weight::Weight;

/// Kruskal minimum-spanning-tree runner.
pub struct KruskalRunner;

impl KruskalRunner {
    /// Computes a spanning tree of minimum weight among those containing
    /// the admissible forced edges and none of the banned ones.
    ///
    /// Edges are offered in this order: forced edges as listed, then every
    /// remaining edge by ascending scalar weight (ties by edge id). An edge
    /// is admitted when its endpoints lie in different partitions. A forced
    /// edge that would close a cycle with earlier forced edges is skipped.
    ///
    /// Returns `Ok(None)` when the surviving edges cannot span the graph.
    ///
    /// # Errors
    ///
    /// A forced or banned edge that is not in `graph` is reported as
    /// [`GraphError::UnknownEdge`](crate::GraphError::UnknownEdge).
    pub fn run<Ty: EdgeKind>(
        graph: &Graph<Ty>,
        weights: &Annotator<EdgeId, Weight>,
        config: &KruskalConfig,
    ) -> Result<Option<SpanningTree>> {
        config.validate()?;

        let mut working = graph.clone();
        for &edge in &config.banned {
            working.delete_edge(edge)?;
        }
        if let Some(&edge) = config.forced.iter().find(|e| !graph.contains_edge(**e)) {
            return Err(GraphError::UnknownEdge(edge));
        }

        let scalar = ScalarWeights::compute(&working, weights, config.coefficients.as_deref())?;
        let dim = weights.live_dimension(&working)?.unwrap_or(1);
        let n = working.node_count();
        let target = n.saturating_sub(1);

        let mut partitions: UnionFind<NodeId> =
            UnionFind::with_capacity(n).with_safe_mode(config.safe_union_find);
        for node in working.nodes() {
            partitions.add(node)?;
        }

        let mut ranked: Vec<EdgeId> = working.edges().collect();
        ranked.sort_by(|a, b| scalar.get(*a).total_cmp(&scalar.get(*b)));

        let sequence = config
            .forced
            .iter()
            .copied()
            .filter(|e| !config.banned.contains(e))
            .chain(ranked);

        let mut edges = Vec::with_capacity(target);
        let mut total_weight = 0.0;
        for edge in sequence {
            if edges.len() == target {
                break;
            }
            let (u, v) = working.incident_nodes(edge)?;
            if partitions.find(&u)? == partitions.find(&v)? {
                trace!(edge = %edge, "kruskal: edge closes a cycle");
                continue;
            }
            partitions.union(&u, &v)?;
            edges.push(edge);
            total_weight += scalar.get(edge);
        }

        if edges.len() < target {
            debug!(
                edges = edges.len(),
                needed = target,
                banned = config.banned.len(),
                "kruskal: graph cannot be spanned"
            );
            return Ok(None);
        }

        debug!(
            edges = edges.len(),
            forced = config.forced.len(),
            banned = config.banned.len(),
            total_weight,
            "kruskal finished"
        );
        let cost = weights.path_cost_with_dim(&edges, dim)?;
        Ok(Some(SpanningTree {
            edges,
            total_weight,
            cost,
        }))
    }
}
