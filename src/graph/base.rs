//! Slot-based graph storage shared by the directed and undirected variants.

use std::collections::HashSet;
use std::fmt::Debug;
use std::marker::PhantomData;

use super::ids::{EdgeId, NodeId};
use crate::error::{GraphError, Result};

/// Marker trait selecting directed or undirected edge semantics.
pub trait EdgeKind: Debug + Clone + Copy + Default + PartialEq + Send + Sync + 'static {
    /// Whether edges are ordered pairs.
    const DIRECTED: bool;
}

/// Edges are ordered `(source, target)` pairs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Directed;

/// Edges are unordered pairs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Undirected;

impl EdgeKind for Directed {
    const DIRECTED: bool = true;
}

impl EdgeKind for Undirected {
    const DIRECTED: bool = false;
}

/// A graph with undirected edges.
pub type UnGraph = Graph<Undirected>;

/// A graph with directed edges.
pub type DiGraph = Graph<Directed>;

/// A graph owning its node and edge sets.
///
/// Every edge's endpoints exist in the graph. Deleting a node deletes its
/// incident edges. Identifiers are never reused.
///
/// Two graphs compare equal when they hold the same slots with the same
/// incidence order. Subgraphs of one parent built from the same edge set
/// always compare equal.
///
/// # Examples
///
/// ```
/// use u_mograph::graph::UnGraph;
///
/// let mut g = UnGraph::new();
/// let a = g.add_node();
/// let b = g.add_node();
/// let c = g.add_node();
/// let ab = g.add_edge(a, b).unwrap();
/// g.add_edge(b, c).unwrap();
///
/// assert_eq!(g.adjacent_nodes(b).unwrap(), vec![a, c]);
///
/// let sub = g.subgraph_with_implied_nodes(&[ab]).unwrap();
/// assert_eq!(sub.node_count(), 2);
/// assert!(!sub.contains_node(c));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Graph<Ty: EdgeKind = Undirected> {
    /// Incidence list per node slot; `None` marks a deleted or excluded slot.
    nodes: Vec<Option<Vec<EdgeId>>>,
    /// Endpoints per edge slot, as passed to `add_edge`.
    edges: Vec<Option<(NodeId, NodeId)>>,
    node_count: usize,
    edge_count: usize,
    kind: PhantomData<Ty>,
}

impl<Ty: EdgeKind> Default for Graph<Ty> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Ty: EdgeKind> Graph<Ty> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::with_capacity(0, 0)
    }

    /// Creates an empty graph with preallocated slots.
    pub fn with_capacity(nodes: usize, edges: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(nodes),
            edges: Vec::with_capacity(edges),
            node_count: 0,
            edge_count: 0,
            kind: PhantomData,
        }
    }

    /// Whether edges are ordered pairs.
    pub fn is_directed(&self) -> bool {
        Ty::DIRECTED
    }

    /// Number of live nodes.
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Number of live edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Whether the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.node_count == 0
    }

    /// Upper bound (exclusive) on node slot indices.
    pub fn node_bound(&self) -> usize {
        self.nodes.len()
    }

    /// Upper bound (exclusive) on edge slot indices.
    pub fn edge_bound(&self) -> usize {
        self.edges.len()
    }

    /// Whether the node exists.
    pub fn contains_node(&self, node: NodeId) -> bool {
        matches!(self.nodes.get(node.index()), Some(Some(_)))
    }

    /// Whether the edge exists.
    pub fn contains_edge(&self, edge: EdgeId) -> bool {
        matches!(self.edges.get(edge.index()), Some(Some(_)))
    }

    /// Live nodes in creation order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.is_some())
            .map(|(i, _)| NodeId::new(i))
    }

    /// Live edges in creation order.
    pub fn edges(&self) -> impl Iterator<Item = EdgeId> + '_ {
        self.edges
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.is_some())
            .map(|(i, _)| EdgeId::new(i))
    }

    /// Adds a node.
    pub fn add_node(&mut self) -> NodeId {
        let id = NodeId::new(self.nodes.len());
        self.nodes.push(Some(Vec::new()));
        self.node_count += 1;
        id
    }

    /// Adds `n` nodes, returning their identifiers in order.
    pub fn add_nodes(&mut self, n: usize) -> Vec<NodeId> {
        (0..n).map(|_| self.add_node()).collect()
    }

    /// Adds an edge between two existing nodes.
    ///
    /// For directed graphs `u` is the source and `v` the target.
    /// Parallel edges and self-loops are allowed.
    pub fn add_edge(&mut self, u: NodeId, v: NodeId) -> Result<EdgeId> {
        self.require_node(u)?;
        self.require_node(v)?;

        let id = EdgeId::new(self.edges.len());
        self.edges.push(Some((u, v)));
        self.incidence_mut(u)?.push(id);
        if u != v {
            self.incidence_mut(v)?.push(id);
        }
        self.edge_count += 1;
        Ok(id)
    }

    /// Deletes an edge.
    pub fn delete_edge(&mut self, edge: EdgeId) -> Result<()> {
        let (u, v) = self.incident_nodes(edge)?;
        self.incidence_mut(u)?.retain(|&e| e != edge);
        if u != v {
            self.incidence_mut(v)?.retain(|&e| e != edge);
        }
        self.edges[edge.index()] = None;
        self.edge_count -= 1;
        Ok(())
    }

    /// Deletes a node together with its incident edges.
    pub fn delete_node(&mut self, node: NodeId) -> Result<()> {
        let incident = self.incident_edges(node)?.to_vec();
        for edge in incident {
            self.delete_edge(edge)?;
        }
        self.nodes[node.index()] = None;
        self.node_count -= 1;
        Ok(())
    }

    /// Edges incident to `node`, in insertion order.
    pub fn incident_edges(&self, node: NodeId) -> Result<&[EdgeId]> {
        match self.nodes.get(node.index()) {
            Some(Some(incidence)) => Ok(incidence),
            _ => Err(GraphError::UnknownNode(node)),
        }
    }

    /// Endpoints of `edge`, in the order given to [`add_edge`](Self::add_edge).
    pub fn incident_nodes(&self, edge: EdgeId) -> Result<(NodeId, NodeId)> {
        match self.edges.get(edge.index()) {
            Some(Some(ends)) => Ok(*ends),
            _ => Err(GraphError::UnknownEdge(edge)),
        }
    }

    /// The endpoint of `edge` that is not `node`.
    ///
    /// For a self-loop this is `node` itself.
    pub fn opposite(&self, edge: EdgeId, node: NodeId) -> Result<NodeId> {
        let (u, v) = self.incident_nodes(edge)?;
        if node == u {
            Ok(v)
        } else if node == v {
            Ok(u)
        } else {
            Err(GraphError::NotIncident { edge, node })
        }
    }

    /// Distinct neighbors of `node`, ignoring direction, in incidence order.
    pub fn adjacent_nodes(&self, node: NodeId) -> Result<Vec<NodeId>> {
        let mut seen = HashSet::new();
        let mut adjacent = Vec::new();
        for &edge in self.incident_edges(node)? {
            let other = self.opposite(edge, node)?;
            if seen.insert(other) {
                adjacent.push(other);
            }
        }
        Ok(adjacent)
    }

    /// Edges that can be traversed away from `node`, paired with the node reached.
    ///
    /// Directed graphs yield edges whose source is `node`. In undirected
    /// graphs every incident edge can be traversed.
    pub fn out_neighbors(&self, node: NodeId) -> Result<Vec<(EdgeId, NodeId)>> {
        let mut out = Vec::new();
        for &edge in self.incident_edges(node)? {
            let (u, v) = self.incident_nodes(edge)?;
            if !Ty::DIRECTED {
                out.push((edge, if u == node { v } else { u }));
            } else if u == node {
                out.push((edge, v));
            }
        }
        Ok(out)
    }

    /// Edges that can be traversed into `node`, paired with the node they leave.
    ///
    /// Directed graphs yield edges whose target is `node`. In undirected
    /// graphs every incident edge can be traversed.
    pub fn in_neighbors(&self, node: NodeId) -> Result<Vec<(EdgeId, NodeId)>> {
        let mut incoming = Vec::new();
        for &edge in self.incident_edges(node)? {
            let (u, v) = self.incident_nodes(edge)?;
            if !Ty::DIRECTED {
                incoming.push((edge, if v == node { u } else { v }));
            } else if v == node {
                incoming.push((edge, u));
            }
        }
        Ok(incoming)
    }

    /// Extracts the subgraph induced by the given nodes and edges.
    ///
    /// Fails if a node or edge is unknown, or if an edge has an endpoint
    /// outside `nodes`. Identifiers are preserved.
    pub fn subgraph(&self, nodes: &[NodeId], edges: &[EdgeId]) -> Result<Self> {
        let mut keep_nodes = vec![false; self.nodes.len()];
        for &node in nodes {
            self.require_node(node)?;
            keep_nodes[node.index()] = true;
        }
        let mut keep_edges = vec![false; self.edges.len()];
        for &edge in edges {
            let (u, v) = self.incident_nodes(edge)?;
            if !keep_nodes[u.index()] || !keep_nodes[v.index()] {
                return Err(GraphError::EdgeOutsideSubgraph(edge));
            }
            keep_edges[edge.index()] = true;
        }
        Ok(self.filtered(&keep_nodes, &keep_edges))
    }

    /// Extracts the subgraph made of `edges` and exactly the nodes they touch.
    pub fn subgraph_with_implied_nodes(&self, edges: &[EdgeId]) -> Result<Self> {
        let mut keep_nodes = vec![false; self.nodes.len()];
        let mut keep_edges = vec![false; self.edges.len()];
        for &edge in edges {
            let (u, v) = self.incident_nodes(edge)?;
            keep_nodes[u.index()] = true;
            keep_nodes[v.index()] = true;
            keep_edges[edge.index()] = true;
        }
        Ok(self.filtered(&keep_nodes, &keep_edges))
    }

    fn filtered(&self, keep_nodes: &[bool], keep_edges: &[bool]) -> Self {
        let nodes: Vec<Option<Vec<EdgeId>>> = self
            .nodes
            .iter()
            .zip(keep_nodes)
            .map(|(slot, &keep)| match slot {
                Some(incidence) if keep => Some(
                    incidence
                        .iter()
                        .copied()
                        .filter(|e| keep_edges[e.index()])
                        .collect(),
                ),
                _ => None,
            })
            .collect();
        let edges: Vec<Option<(NodeId, NodeId)>> = self
            .edges
            .iter()
            .zip(keep_edges)
            .map(|(slot, &keep)| if keep { *slot } else { None })
            .collect();

        Self {
            node_count: nodes.iter().filter(|n| n.is_some()).count(),
            edge_count: edges.iter().filter(|e| e.is_some()).count(),
            nodes,
            edges,
            kind: PhantomData,
        }
    }

    pub(crate) fn require_node(&self, node: NodeId) -> Result<()> {
        if self.contains_node(node) {
            Ok(())
        } else {
            Err(GraphError::UnknownNode(node))
        }
    }

    fn incidence_mut(&mut self, node: NodeId) -> Result<&mut Vec<EdgeId>> {
        self.nodes
            .get_mut(node.index())
            .and_then(Option::as_mut)
            .ok_or(GraphError::UnknownNode(node))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path_graph() -> (UnGraph, Vec<NodeId>, Vec<EdgeId>) {
        let mut g = UnGraph::new();
        let n = g.add_nodes(4);
        let e = vec![
            g.add_edge(n[0], n[1]).unwrap(),
            g.add_edge(n[1], n[2]).unwrap(),
            g.add_edge(n[2], n[3]).unwrap(),
        ];
        (g, n, e)
    }

    #[test]
    fn test_add_edge_requires_endpoints() {
        let mut g = UnGraph::new();
        let a = g.add_node();
        let ghost = NodeId::new(7);
        assert_eq!(g.add_edge(a, ghost), Err(GraphError::UnknownNode(ghost)));
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn test_incidence_queries() {
        let (g, n, e) = path_graph();
        assert_eq!(g.incident_edges(n[1]).unwrap(), &[e[0], e[1]]);
        assert_eq!(g.incident_nodes(e[2]).unwrap(), (n[2], n[3]));
        assert_eq!(g.opposite(e[1], n[2]).unwrap(), n[1]);
        assert_eq!(
            g.opposite(e[1], n[0]),
            Err(GraphError::NotIncident {
                edge: e[1],
                node: n[0]
            })
        );
        assert_eq!(g.adjacent_nodes(n[2]).unwrap(), vec![n[1], n[3]]);
    }

    #[test]
    fn test_delete_node_removes_incident_edges() {
        let (mut g, n, e) = path_graph();
        g.delete_node(n[1]).unwrap();
        assert_eq!(g.node_count(), 3);
        assert_eq!(g.edge_count(), 1);
        assert!(!g.contains_edge(e[0]));
        assert!(!g.contains_edge(e[1]));
        assert!(g.incident_edges(n[0]).unwrap().is_empty());
        assert_eq!(g.incident_edges(n[1]), Err(GraphError::UnknownNode(n[1])));
        // Identifiers are not reused.
        let fresh = g.add_node();
        assert_eq!(fresh.index(), 4);
    }

    #[test]
    fn test_delete_edge_twice_fails() {
        let (mut g, _n, e) = path_graph();
        g.delete_edge(e[0]).unwrap();
        assert_eq!(g.delete_edge(e[0]), Err(GraphError::UnknownEdge(e[0])));
    }

    #[test]
    fn test_self_loop_listed_once() {
        let mut g = UnGraph::new();
        let a = g.add_node();
        let l = g.add_edge(a, a).unwrap();
        assert_eq!(g.incident_edges(a).unwrap(), &[l]);
        assert_eq!(g.adjacent_nodes(a).unwrap(), vec![a]);
        g.delete_edge(l).unwrap();
        assert!(g.incident_edges(a).unwrap().is_empty());
    }

    #[test]
    fn test_subgraph_rejects_outside_edges() {
        let (g, n, e) = path_graph();
        assert_eq!(
            g.subgraph(&[n[0], n[1]], &[e[0], e[1]]),
            Err(GraphError::EdgeOutsideSubgraph(e[1]))
        );

        let sub = g.subgraph(&[n[0], n[1], n[3]], &[e[0]]).unwrap();
        assert_eq!(sub.node_count(), 3);
        assert_eq!(sub.edge_count(), 1);
        assert!(sub.contains_node(n[3]));
        assert!(sub.incident_edges(n[3]).unwrap().is_empty());
    }

    #[test]
    fn test_subgraph_with_implied_nodes() {
        let (g, n, e) = path_graph();
        let sub = g.subgraph_with_implied_nodes(&[e[2], e[1]]).unwrap();
        assert_eq!(sub.nodes().collect::<Vec<_>>(), vec![n[1], n[2], n[3]]);
        assert_eq!(sub.edges().collect::<Vec<_>>(), vec![e[1], e[2]]);
        // Edge order in the request does not change the result.
        assert_eq!(sub, g.subgraph_with_implied_nodes(&[e[1], e[2]]).unwrap());
    }

    #[test]
    fn test_traversal_views_undirected() {
        let (g, n, e) = path_graph();
        assert_eq!(g.out_neighbors(n[1]).unwrap(), vec![(e[0], n[0]), (e[1], n[2])]);
        assert_eq!(g.in_neighbors(n[1]).unwrap(), vec![(e[0], n[0]), (e[1], n[2])]);
    }

    #[test]
    fn test_traversal_views_directed() {
        let mut g = DiGraph::new();
        let n = g.add_nodes(3);
        let ab = g.add_edge(n[0], n[1]).unwrap();
        let cb = g.add_edge(n[2], n[1]).unwrap();
        assert!(g.is_directed());
        assert_eq!(g.out_neighbors(n[0]).unwrap(), vec![(ab, n[1])]);
        assert!(g.out_neighbors(n[1]).unwrap().is_empty());
        assert_eq!(g.in_neighbors(n[1]).unwrap(), vec![(ab, n[0]), (cb, n[2])]);
    }
}
