//! Dijkstra's algorithm over scalarized vector weights.
//!
//! # Algorithm
//!
//! 1. Scalarize every edge weight; reject negative values
//! 2. Queue every node, keyed by tentative distance (+∞ except the source)
//! 3. Pop the closest node. If its distance is still +∞, the rest of the
//!    graph is disconnected from the source and the search stops with no path
//! 4. Relax the edges leaving the node; stop once the destination is settled
//! 5. Walk predecessor edges back from the destination

use std::collections::BinaryHeap;

use tracing::debug;

use super::config::DijkstraConfig;
use super::types::ShortestPath;
use crate::error::{GraphError, Result};
use crate::graph::{Annotator, EdgeId, EdgeKind, Graph, NodeId};
use crate::scalar::{MinScored, ScalarWeights};
use crate::weight::Weight;

/// Dijkstra shortest-path runner.
pub struct DijkstraRunner;

impl DijkstraRunner {
    /// Computes a shortest path from `config.source` to `config.destination`.
    ///
    /// Returns `Ok(None)` when the destination is unreachable.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_mograph::graph::{Annotator, UnGraph};
    /// use u_mograph::shortest::{DijkstraConfig, DijkstraRunner};
    /// use u_mograph::weight::Weight;
    ///
    /// let mut g = UnGraph::new();
    /// let n = g.add_nodes(3);
    /// let mut w = Annotator::new();
    /// w.annotate(g.add_edge(n[0], n[1]).unwrap(), Weight::from([1.0]));
    /// w.annotate(g.add_edge(n[1], n[2]).unwrap(), Weight::from([1.0]));
    /// w.annotate(g.add_edge(n[0], n[2]).unwrap(), Weight::from([5.0]));
    ///
    /// let path = DijkstraRunner::run(&g, &w, &DijkstraConfig::new(n[0], n[2]))
    ///     .unwrap()
    ///     .expect("connected");
    /// assert_eq!(path.nodes, vec![n[0], n[1], n[2]]);
    /// assert_eq!(path.distance, 2.0);
    /// ```
    pub fn run<Ty: EdgeKind>(
        graph: &Graph<Ty>,
        weights: &Annotator<EdgeId, Weight>,
        config: &DijkstraConfig,
    ) -> Result<Option<ShortestPath>> {
        config.validate()?;
        graph.require_node(config.source)?;
        graph.require_node(config.destination)?;

        let scalar = ScalarWeights::compute(graph, weights, config.coefficients.as_deref())?;
        for edge in graph.edges() {
            let w = scalar.get(edge);
            if !w.is_finite() {
                return Err(GraphError::NonFiniteWeight { edge, weight: w });
            }
            if w < 0.0 {
                return Err(GraphError::NegativeWeight { edge, weight: w });
            }
        }

        let bound = graph.node_bound();
        let mut dist = vec![f64::INFINITY; bound];
        let mut pred: Vec<Option<EdgeId>> = vec![None; bound];
        let mut settled = vec![false; bound];
        dist[config.source.index()] = 0.0;

        let mut heap = BinaryHeap::with_capacity(graph.node_count());
        let mut seq = 0u64;
        for node in graph.nodes() {
            heap.push(MinScored {
                score: dist[node.index()],
                seq,
                item: node,
            });
            seq += 1;
        }

        let mut settled_count = 0usize;
        while let Some(MinScored { score, item: u, .. }) = heap.pop() {
            let ui = u.index();
            if settled[ui] || score > dist[ui] {
                continue;
            }
            if dist[ui].is_infinite() {
                debug!(
                    settled = settled_count,
                    "remaining nodes unreachable from source"
                );
                return Ok(None);
            }
            settled[ui] = true;
            settled_count += 1;
            if u == config.destination {
                break;
            }

            for (edge, v) in graph.out_neighbors(u)? {
                let vi = v.index();
                if settled[vi] {
                    continue;
                }
                let candidate = dist[ui] + scalar.get(edge);
                if candidate < dist[vi] {
                    dist[vi] = candidate;
                    pred[vi] = Some(edge);
                    heap.push(MinScored {
                        score: candidate,
                        seq,
                        item: v,
                    });
                    seq += 1;
                }
            }
        }

        if !settled[config.destination.index()] {
            return Ok(None);
        }

        let mut edges = Vec::new();
        let mut nodes = vec![config.destination];
        let mut current = config.destination;
        while let Some(edge) = pred[current.index()] {
            edges.push(edge);
            current = graph.opposite(edge, current)?;
            nodes.push(current);
        }
        edges.reverse();
        nodes.reverse();

        let dim = weights.live_dimension(graph)?.unwrap_or(1);
        let cost = weights.path_cost_with_dim(&edges, dim)?;
        debug!(
            settled = settled_count,
            edges = edges.len(),
            distance = dist[config.destination.index()],
            "dijkstra finished"
        );
        Ok(Some(ShortestPath {
            distance: dist[config.destination.index()],
            edges,
            nodes,
            cost,
        }))
    }

    /// Node sequence of the shortest path, summing weight components.
    pub fn node_path<Ty: EdgeKind>(
        graph: &Graph<Ty>,
        weights: &Annotator<EdgeId, Weight>,
        source: NodeId,
        destination: NodeId,
    ) -> Result<Option<Vec<NodeId>>> {
        let config = DijkstraConfig::new(source, destination);
        Ok(Self::run(graph, weights, &config)?.map(|p| p.nodes))
    }
}
