//! Seeded random instances for benchmarks and property tests.

use std::collections::HashSet;

use rand::Rng;
use tracing::debug;
use u_numflow::random::{create_rng, shuffle};

use crate::error::{GraphError, Result};
use crate::graph::{AnnotatedGraph, Annotator, EdgeId, EdgeKind, Graph, NodeId};
use crate::weight::Weight;

/// Shape of a random instance.
///
/// # Examples
///
/// ```
/// use u_mograph::generate::{random_graph, InstanceConfig};
/// use u_mograph::graph::Directed;
///
/// let config = InstanceConfig::new(20).with_density(0.2).with_dimension(3).with_seed(7);
/// let (g, w) = random_graph::<Directed>(&config).unwrap();
/// assert_eq!(g.node_count(), 20);
/// assert!(g.edge_count() >= 19, "connected instances contain a spanning tree");
/// assert_eq!(w.dimension(), Some(3));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct InstanceConfig {
    /// Number of nodes.
    pub nodes: usize,

    /// Probability of each extra node pair receiving an edge.
    pub density: f64,

    /// Weight dimension.
    pub dimension: usize,

    /// Largest weight component; components are integers in `1..=max_weight`.
    pub max_weight: u32,

    /// Whether to embed a random spanning tree first.
    ///
    /// For directed graphs the tree is rooted at a random node and all
    /// its edges point away from it.
    pub connected: bool,

    /// Random seed; `None` uses a fixed default.
    pub seed: Option<u64>,
}

impl InstanceConfig {
    /// Creates a connected, bi-objective configuration.
    pub fn new(nodes: usize) -> Self {
        Self {
            nodes,
            density: 0.1,
            dimension: 2,
            max_weight: 20,
            connected: true,
            seed: None,
        }
    }

    /// Sets the extra-edge probability.
    pub fn with_density(mut self, density: f64) -> Self {
        self.density = density;
        self
    }

    /// Sets the weight dimension.
    pub fn with_dimension(mut self, dimension: usize) -> Self {
        self.dimension = dimension;
        self
    }

    /// Sets the largest weight component.
    pub fn with_max_weight(mut self, max_weight: u32) -> Self {
        self.max_weight = max_weight;
        self
    }

    /// Enables or disables the embedded spanning tree.
    pub fn with_connected(mut self, connected: bool) -> Self {
        self.connected = connected;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.density) {
            return Err(GraphError::InvalidConfig(format!(
                "density must be in [0, 1], got {}",
                self.density
            )));
        }
        if self.dimension == 0 {
            return Err(GraphError::InvalidConfig("dimension must be at least 1".into()));
        }
        if self.max_weight == 0 {
            return Err(GraphError::InvalidConfig("max_weight must be at least 1".into()));
        }
        Ok(())
    }
}

/// Generates a random graph and its edge weights.
pub fn random_graph<Ty: EdgeKind>(
    config: &InstanceConfig,
) -> Result<(Graph<Ty>, Annotator<EdgeId, Weight>)> {
    config.validate()?;
    let mut rng = match config.seed {
        Some(s) => create_rng(s),
        None => create_rng(42),
    };

    let mut graph = Graph::<Ty>::with_capacity(config.nodes, config.nodes * 2);
    let nodes = graph.add_nodes(config.nodes);
    let mut pairs: HashSet<(NodeId, NodeId)> = HashSet::new();
    let key = |u: NodeId, v: NodeId| {
        if Ty::DIRECTED || u < v {
            (u, v)
        } else {
            (v, u)
        }
    };

    if config.connected && nodes.len() > 1 {
        let mut order = nodes.clone();
        shuffle(&mut order, &mut rng);
        for i in 1..order.len() {
            let parent = order[rng.random_range(0..i)];
            graph.add_edge(parent, order[i])?;
            pairs.insert(key(parent, order[i]));
        }
    }

    for &u in &nodes {
        for &v in &nodes {
            if u == v || (!Ty::DIRECTED && v < u) || pairs.contains(&key(u, v)) {
                continue;
            }
            if rng.random_range(0.0..1.0) < config.density {
                graph.add_edge(u, v)?;
                pairs.insert(key(u, v));
            }
        }
    }

    let mut weights = Annotator::new();
    for edge in graph.edges() {
        let values: Vec<f64> = (0..config.dimension)
            .map(|_| f64::from(rng.random_range(1..=config.max_weight)))
            .collect();
        weights.annotate(edge, Weight::new(values));
    }

    debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        dimension = config.dimension,
        "generated instance"
    );
    Ok((graph, weights))
}

/// Generates a random graph bundled with its weights under
/// [`EDGE_WEIGHTS`](crate::graph::EDGE_WEIGHTS).
pub fn random_annotated<Ty: EdgeKind>(config: &InstanceConfig) -> Result<AnnotatedGraph<Ty>> {
    let (graph, weights) = random_graph(config)?;
    Ok(AnnotatedGraph::with_weights(graph, weights))
}
