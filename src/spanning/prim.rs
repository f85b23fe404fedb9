//! Prim's algorithm.
//!
//! # Algorithm
//!
//! 1. Mark the root visited and queue its incident edges by scalar weight
//! 2. Pop the cheapest edge. Discard it if both endpoints are visited;
//!    otherwise admit it and visit the new endpoint, queueing its edges
//! 3. Stop when every node is visited. An exhausted queue before that
//!    means the graph is disconnected

use std::collections::BinaryHeap;

use rand::Rng;
use tracing::debug;
use u_numflow::random::create_rng;

use super::config::PrimConfig;
use super::types::SpanningTree;
use crate::error::Result;
use crate::graph::{Annotator, EdgeId, EdgeKind, Graph, NodeId};
use crate::scalar::{MinScored, ScalarWeights};
use crate::weight::Weight;

/// Prim minimum-spanning-tree runner.
pub struct PrimRunner;

impl PrimRunner {
    /// Computes a minimum spanning tree, or `Ok(None)` if `graph` is disconnected.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_mograph::graph::{Annotator, UnGraph};
    /// use u_mograph::spanning::{PrimConfig, PrimRunner};
    /// use u_mograph::weight::Weight;
    ///
    /// let mut g = UnGraph::new();
    /// let n = g.add_nodes(3);
    /// let mut w = Annotator::new();
    /// w.annotate(g.add_edge(n[0], n[1]).unwrap(), Weight::from([1.0]));
    /// w.annotate(g.add_edge(n[1], n[2]).unwrap(), Weight::from([2.0]));
    /// w.annotate(g.add_edge(n[0], n[2]).unwrap(), Weight::from([4.0]));
    ///
    /// let tree = PrimRunner::run(&g, &w, &PrimConfig::default()).unwrap().unwrap();
    /// assert_eq!(tree.len(), 2);
    /// assert_eq!(tree.total_weight, 3.0);
    /// ```
    pub fn run<Ty: EdgeKind>(
        graph: &Graph<Ty>,
        weights: &Annotator<EdgeId, Weight>,
        config: &PrimConfig,
    ) -> Result<Option<SpanningTree>> {
        config.validate()?;
        let scalar = ScalarWeights::compute(graph, weights, config.coefficients.as_deref())?;
        let dim = weights.live_dimension(graph)?.unwrap_or(1);

        let nodes: Vec<NodeId> = graph.nodes().collect();
        if nodes.is_empty() {
            return Ok(Some(SpanningTree {
                edges: Vec::new(),
                total_weight: 0.0,
                cost: Weight::zeros(dim),
            }));
        }

        let root = match (config.root, config.seed) {
            (Some(root), _) => {
                graph.require_node(root)?;
                root
            }
            (None, Some(seed)) => {
                let mut rng = create_rng(seed);
                nodes[rng.random_range(0..nodes.len())]
            }
            (None, None) => nodes[0],
        };

        let mut visited = vec![false; graph.node_bound()];
        let mut visited_count = 1usize;
        visited[root.index()] = true;

        let mut heap = BinaryHeap::new();
        let mut seq = 0u64;
        push_frontier(graph, &scalar, root, &visited, &mut heap, &mut seq)?;

        let mut edges = Vec::with_capacity(nodes.len() - 1);
        let mut total_weight = 0.0;
        let mut discarded = 0usize;

        while visited_count < nodes.len() {
            let Some(MinScored { item: edge, score, .. }) = heap.pop() else {
                debug!(
                    visited = visited_count,
                    nodes = nodes.len(),
                    "prim: graph is disconnected"
                );
                return Ok(None);
            };
            let (u, v) = graph.incident_nodes(edge)?;
            let new_node = match (visited[u.index()], visited[v.index()]) {
                (true, false) => v,
                (false, true) => u,
                _ => {
                    discarded += 1;
                    continue;
                }
            };

            visited[new_node.index()] = true;
            visited_count += 1;
            edges.push(edge);
            total_weight += score;
            push_frontier(graph, &scalar, new_node, &visited, &mut heap, &mut seq)?;
        }

        debug!(
            root = %root,
            edges = edges.len(),
            discarded,
            total_weight,
            "prim finished"
        );
        let cost = weights.path_cost_with_dim(&edges, dim)?;
        Ok(Some(SpanningTree {
            edges,
            total_weight,
            cost,
        }))
    }
}

fn push_frontier<Ty: EdgeKind>(
    graph: &Graph<Ty>,
    scalar: &ScalarWeights,
    node: NodeId,
    visited: &[bool],
    heap: &mut BinaryHeap<MinScored<EdgeId>>,
    seq: &mut u64,
) -> Result<()> {
    for &edge in graph.incident_edges(node)? {
        if !visited[graph.opposite(edge, node)?.index()] {
            heap.push(MinScored {
                score: scalar.get(edge),
                seq: *seq,
                item: edge,
            });
            *seq += 1;
        }
    }
    Ok(())
}
