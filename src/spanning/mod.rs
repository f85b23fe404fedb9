//! Minimum spanning trees.
//!
//! - [`PrimRunner`]: grows a tree from a root, always admitting the
//!   cheapest edge with exactly one visited endpoint
//! - [`KruskalRunner`]: drops banned edges, inserts forced edges first,
//!   then admits the remaining edges in ascending weight order whenever
//!   they join two different union-find partitions
//!
//! Both runners scalarize vector weights (component sum by default) and
//! treat directed edges as undirected. A graph that cannot be spanned
//! yields `Ok(None)`.
//!
//! # References
//!
//! - Prim (1957), "Shortest connection networks and some generalizations"
//! - Kruskal (1956), "On the shortest spanning subtree of a graph"

mod config;
mod kruskal;
mod prim;
mod types;

pub use config::{KruskalConfig, PrimConfig};
pub use kruskal::KruskalRunner;
pub use prim::PrimRunner;
pub use types::SpanningTree;

use crate::error::Result;
use crate::graph::{EdgeId, EdgeKind, Graph};
use crate::union_find::UnionFind;

/// Whether `edges` form a spanning tree of `graph`.
///
/// Holds when there are exactly `node_count - 1` edges, all of them in
/// `graph`, and they connect every node. An empty graph is spanned by
/// the empty edge set.
pub fn is_spanning_tree<Ty: EdgeKind>(graph: &Graph<Ty>, edges: &[EdgeId]) -> Result<bool> {
    let n = graph.node_count();
    if n == 0 {
        return Ok(edges.is_empty());
    }
    if edges.len() != n - 1 {
        return Ok(false);
    }

    let mut partitions = UnionFind::with_capacity(n);
    for node in graph.nodes() {
        partitions.add(node)?;
    }
    for &edge in edges {
        let (u, v) = graph.incident_nodes(edge)?;
        if partitions.same_set(&u, &v)? {
            return Ok(false);
        }
        partitions.union(&u, &v)?;
    }
    Ok(partitions.set_count() == 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::UnGraph;

    #[test]
    fn test_is_spanning_tree() {
        let mut g = UnGraph::new();
        let n = g.add_nodes(4);
        let e01 = g.add_edge(n[0], n[1]).unwrap();
        let e12 = g.add_edge(n[1], n[2]).unwrap();
        let e20 = g.add_edge(n[2], n[0]).unwrap();
        let e23 = g.add_edge(n[2], n[3]).unwrap();

        assert!(is_spanning_tree(&g, &[e01, e12, e23]).unwrap());
        // Right count but contains a cycle and misses node 3.
        assert!(!is_spanning_tree(&g, &[e01, e12, e20]).unwrap());
        assert!(!is_spanning_tree(&g, &[e01, e12]).unwrap());
        assert!(is_spanning_tree(&g, &[e01, e12, EdgeId::new(99)]).is_err());
    }

    #[test]
    fn test_empty_and_single_node() {
        let mut g = UnGraph::new();
        assert!(is_spanning_tree(&g, &[]).unwrap());
        g.add_node();
        assert!(is_spanning_tree(&g, &[]).unwrap());
    }
}
