//! Common entry point over every algorithm in the crate.
//!
//! [`Algorithm`] selects an algorithm and its configuration;
//! [`Algorithm::compute`] runs it on an [`AnnotatedGraph`] and wraps the
//! outcome in an [`Optimum`].

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::error::{GraphError, Result};
use crate::graph::{AnnotatedGraph, EdgeId, EdgeKind, EDGE_WEIGHTS, HEURISTIC};
use crate::measure::{MeasurementSink, Reporter, ALGORITHM, SOLUTIONS};
use crate::namoa::{NamoaConfig, NamoaResult, NamoaRunner};
use crate::shortest::{DijkstraConfig, DijkstraRunner, ShortestPath};
use crate::spanning::{KruskalConfig, KruskalRunner, PrimConfig, PrimRunner, SpanningTree};

/// An algorithm together with the settings it does not read from the
/// annotated graph.
///
/// Path algorithms take their source and destination from the
/// [`TERMINALS`](crate::graph::TERMINALS) annotator (first / last node by
/// default). NAMOA* uses the [`HEURISTIC`] annotator when present.
///
/// # Examples
///
/// ```
/// use u_mograph::algorithm::{Algorithm, Optimum};
/// use u_mograph::graph::{AnnotatedGraph, Annotator, UnGraph};
/// use u_mograph::measure::NoopSink;
/// use u_mograph::weight::Weight;
///
/// let mut g = UnGraph::new();
/// let n = g.add_nodes(3);
/// let mut w = Annotator::new();
/// w.annotate(g.add_edge(n[0], n[1]).unwrap(), Weight::from([1.0, 2.0]));
/// w.annotate(g.add_edge(n[1], n[2]).unwrap(), Weight::from([2.0, 1.0]));
/// let input = AnnotatedGraph::with_weights(g, w);
///
/// let algorithm: Algorithm = "prim".parse().unwrap();
/// match algorithm.compute(&input, &mut NoopSink).unwrap() {
///     Optimum::Tree(tree) => assert_eq!(tree.total_weight, 6.0),
///     other => panic!("unexpected {other:?}"),
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Algorithm {
    /// Scalarized single-source shortest path.
    Dijkstra {
        /// Scalarization coefficients; `None` sums the components.
        coefficients: Option<Vec<f64>>,
    },
    /// Prim minimum spanning tree.
    Prim(PrimConfig),
    /// Kruskal minimum spanning tree with forced and banned edges.
    Kruskal(KruskalConfig),
    /// Multi-objective shortest paths.
    Namoa {
        /// Cap on reconstructed paths per frontier cost.
        path_limit: Option<usize>,
    },
}

/// Outcome of [`Algorithm::compute`].
#[derive(Debug, Clone)]
pub enum Optimum<Ty: EdgeKind> {
    /// A shortest path.
    Path(ShortestPath),
    /// A spanning tree.
    Tree(SpanningTree),
    /// A non-empty cost frontier with its paths.
    Pareto(NamoaResult<Ty>),
    /// The destination is unreachable or the graph cannot be spanned.
    Disconnected,
}

impl<Ty: EdgeKind> Optimum<Ty> {
    /// Whether no optimum exists.
    pub fn is_disconnected(&self) -> bool {
        matches!(self, Optimum::Disconnected)
    }

    /// Edges of the optimum. For a frontier, the edges of every
    /// reconstructed path, deduplicated, in first-seen order.
    pub fn edges(&self) -> Vec<EdgeId> {
        match self {
            Optimum::Path(path) => path.edges.clone(),
            Optimum::Tree(tree) => tree.edges.clone(),
            Optimum::Pareto(result) => {
                let mut seen = std::collections::HashSet::new();
                result
                    .paths
                    .iter()
                    .flat_map(|p| p.edges.iter().copied())
                    .filter(|e| seen.insert(*e))
                    .collect()
            }
            Optimum::Disconnected => Vec::new(),
        }
    }
}

impl Algorithm {
    /// Short lowercase name, accepted back by [`FromStr`].
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Dijkstra { .. } => "dijkstra",
            Algorithm::Prim(_) => "prim",
            Algorithm::Kruskal(_) => "kruskal",
            Algorithm::Namoa { .. } => "namoa",
        }
    }

    /// Runs the algorithm on `input`'s [`EDGE_WEIGHTS`] annotator.
    pub fn compute<Ty: EdgeKind>(
        &self,
        input: &AnnotatedGraph<Ty>,
        sink: &mut dyn MeasurementSink,
    ) -> Result<Optimum<Ty>> {
        input.validate_weights(EDGE_WEIGHTS)?;
        let graph = input.graph();
        let weights = input.weights()?;

        if let Algorithm::Namoa { path_limit } = self {
            let mut config = NamoaConfig::from_terminals(input)?;
            config.path_limit = *path_limit;
            let heuristic = if input.has(HEURISTIC) {
                Some(input.node_frontiers(HEURISTIC)?)
            } else {
                None
            };
            let result = NamoaRunner::run(graph, weights, heuristic, &config, sink)?;
            return Ok(if result.is_empty() {
                Optimum::Disconnected
            } else {
                Optimum::Pareto(result)
            });
        }

        let mut reporter = Reporter::new(sink);
        reporter.experiment(self.name());
        let started = reporter.start(ALGORITHM);
        let optimum = match self {
            Algorithm::Dijkstra { coefficients } => {
                let terminals = NamoaConfig::from_terminals(input)?;
                let mut config = DijkstraConfig::new(terminals.source, terminals.destination);
                config.coefficients = coefficients.clone();
                DijkstraRunner::run(graph, weights, &config)?.map(Optimum::Path)
            }
            Algorithm::Prim(config) => PrimRunner::run(graph, weights, config)?.map(Optimum::Tree),
            Algorithm::Kruskal(config) => {
                KruskalRunner::run(graph, weights, config)?.map(Optimum::Tree)
            }
            Algorithm::Namoa { .. } => None,
        }
        .unwrap_or(Optimum::Disconnected);
        reporter.stop(ALGORITHM, started);
        reporter.metric(SOLUTIONS, usize::from(!optimum.is_disconnected()));

        debug!(
            algorithm = self.name(),
            disconnected = optimum.is_disconnected(),
            "compute finished"
        );
        Ok(optimum)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = GraphError;

    /// Parses a name with default settings.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dijkstra" => Ok(Algorithm::Dijkstra { coefficients: None }),
            "prim" => Ok(Algorithm::Prim(PrimConfig::default())),
            "kruskal" => Ok(Algorithm::Kruskal(KruskalConfig::default())),
            "namoa" | "namoa*" => Ok(Algorithm::Namoa { path_limit: None }),
            other => Err(GraphError::InvalidConfig(format!(
                "unknown algorithm '{other}'"
            ))),
        }
    }
}
