//! NAMOA* execution loop.

use std::collections::VecDeque;

use tracing::{debug, trace};

use super::backtrack::backtrack;
use super::config::NamoaConfig;
use super::types::{LabelPath, NamoaResult, OpenListEntry};
use crate::error::{GraphError, Result};
use crate::graph::{Annotator, EdgeId, EdgeKind, Graph, NodeId};
use crate::measure::{
    MeasurementSink, NoopSink, Reporter, ALGORITHM, BACKTRACKING, FRONTIER_SIZE,
    PATH_EXTENSIONS, SOLUTIONS,
};
use crate::pareto::{EdgeWeightSum, ParetoFront};
use crate::weight::{Dominance, LabelSet, Weight};

/// Name reported to the measurement sink at experiment start.
pub const EXPERIMENT_NAME: &str = "NAMOA*";

/// Executes the NAMOA* multi-objective search.
pub struct NamoaRunner;

impl NamoaRunner {
    /// Computes the Pareto-optimal cost frontier from `config.source` to
    /// `config.destination` and reconstructs the paths realizing it.
    ///
    /// Without a `heuristic`, [`local_heuristic`] is used. A node the
    /// heuristic does not annotate is estimated by the zero vector.
    ///
    /// # Errors
    ///
    /// - unknown source or destination
    /// - an edge without a weight, or weights of differing dimensions
    /// - a heuristic label whose dimension differs from the weights
    /// - a negative, NaN, or infinite weight component
    ///
    /// An unreachable destination is not an error: the frontier is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_mograph::graph::{Annotator, DiGraph};
    /// use u_mograph::measure::NoopSink;
    /// use u_mograph::namoa::{NamoaConfig, NamoaRunner};
    /// use u_mograph::weight::Weight;
    ///
    /// let mut g = DiGraph::new();
    /// let n = g.add_nodes(3);
    /// let mut w = Annotator::new();
    /// w.annotate(g.add_edge(n[0], n[1]).unwrap(), Weight::from([1.0, 4.0]));
    /// w.annotate(g.add_edge(n[1], n[2]).unwrap(), Weight::from([1.0, 4.0]));
    /// w.annotate(g.add_edge(n[0], n[2]).unwrap(), Weight::from([5.0, 1.0]));
    ///
    /// let config = NamoaConfig::new(n[0], n[2]);
    /// let result = NamoaRunner::run(&g, &w, None, &config, &mut NoopSink).unwrap();
    /// assert_eq!(result.frontier.len(), 2);
    /// assert_eq!(result.paths.len(), 2);
    /// ```
    pub fn run<Ty: EdgeKind>(
        graph: &Graph<Ty>,
        weights: &Annotator<EdgeId, Weight>,
        heuristic: Option<&Annotator<NodeId, LabelSet>>,
        config: &NamoaConfig,
        sink: &mut dyn MeasurementSink,
    ) -> Result<NamoaResult<Ty>> {
        config.validate()?;
        graph.require_node(config.source)?;
        graph.require_node(config.destination)?;
        let dim = check_weights(graph, weights, heuristic)?;

        let local;
        let heuristic = match heuristic {
            Some(h) => h,
            None => {
                local = build_local_heuristic(graph, weights, config.destination, dim)?;
                &local
            }
        };

        let mut reporter = Reporter::new(sink);
        reporter.experiment(EXPERIMENT_NAME);

        let started = reporter.start(ALGORITHM);
        let mut search = Search::new(graph, weights, heuristic, config, dim);
        search.run()?;
        reporter.stop(ALGORITHM, started);

        let Search {
            closed,
            iterations,
            extensions,
            admitted,
            ..
        } = search;
        let frontier = closed[config.destination.index()].clone();
        reporter.metric(FRONTIER_SIZE, frontier.len());
        reporter.metric(PATH_EXTENSIONS, extensions);

        let started = reporter.start(BACKTRACKING);
        let calculator = EdgeWeightSum::new(weights).with_dimension(dim);
        let mut paths = Vec::new();
        let mut front = ParetoFront::new();
        for cost in frontier.iter() {
            let sequences = backtrack(
                graph,
                weights,
                &closed,
                config.source,
                config.destination,
                cost,
                config.path_limit,
            )?;
            for edges in sequences {
                let path = label_path(graph, config.source, cost.clone(), edges)?;
                let solution = graph.subgraph_with_implied_nodes(&path.edges)?;
                if front.offer(solution, &calculator)? {
                    reporter.pareto_point(&path.cost, path.label());
                }
                paths.push(path);
            }
        }
        reporter.stop(BACKTRACKING, started);
        reporter.metric(SOLUTIONS, paths.len());

        debug!(
            source = %config.source,
            destination = %config.destination,
            iterations,
            extensions,
            admitted,
            frontier = frontier.len(),
            paths = paths.len(),
            "namoa finished"
        );

        Ok(NamoaResult {
            frontier,
            paths,
            front,
            iterations,
            extensions,
            admitted,
        })
    }

    /// Runs several independent queries over one graph.
    ///
    /// Measurements are discarded. With the `parallel` feature the
    /// queries run on the rayon pool; each query is still sequential.
    pub fn run_batch<Ty: EdgeKind>(
        graph: &Graph<Ty>,
        weights: &Annotator<EdgeId, Weight>,
        heuristic: Option<&Annotator<NodeId, LabelSet>>,
        configs: &[NamoaConfig],
    ) -> Vec<Result<NamoaResult<Ty>>> {
        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            configs
                .par_iter()
                .map(|config| Self::run(graph, weights, heuristic, config, &mut NoopSink))
                .collect()
        }
        #[cfg(not(feature = "parallel"))]
        {
            configs
                .iter()
                .map(|config| Self::run(graph, weights, heuristic, config, &mut NoopSink))
                .collect()
        }
    }
}

/// Substitute heuristic used when none is supplied.
///
/// Each node is estimated by the weights of the edges leaving it; the
/// destination additionally gets the zero vector. A node with no leaving
/// edge gets an empty frontier and is never admitted to the open list.
/// This is a local estimate, not a lower bound on the remaining cost.
///
/// The weights are checked as in [`NamoaRunner::run`]. The zero vector
/// takes its dimension from the live edges; a graph without edges has
/// no weight dimension, and its destination gets the one-component zero.
pub fn local_heuristic<Ty: EdgeKind>(
    graph: &Graph<Ty>,
    weights: &Annotator<EdgeId, Weight>,
    destination: NodeId,
) -> Result<Annotator<NodeId, LabelSet>> {
    graph.require_node(destination)?;
    let dim = check_weights(graph, weights, None)?;
    build_local_heuristic(graph, weights, destination, dim)
}

fn build_local_heuristic<Ty: EdgeKind>(
    graph: &Graph<Ty>,
    weights: &Annotator<EdgeId, Weight>,
    destination: NodeId,
    dim: usize,
) -> Result<Annotator<NodeId, LabelSet>> {
    let mut heuristic = Annotator::new();
    for node in graph.nodes() {
        let mut estimate: LabelSet = graph
            .out_neighbors(node)?
            .into_iter()
            .map(|(edge, _)| weights.get(&edge).cloned())
            .collect::<Result<_>>()?;
        if node == destination {
            estimate.insert(Weight::zeros(dim));
        }
        heuristic.annotate(node, estimate);
    }
    Ok(heuristic)
}

/// Checks that every edge has a finite, non-negative weight of one shared
/// dimension and that the heuristic matches it. Returns the dimension.
fn check_weights<Ty: EdgeKind>(
    graph: &Graph<Ty>,
    weights: &Annotator<EdgeId, Weight>,
    heuristic: Option<&Annotator<NodeId, LabelSet>>,
) -> Result<usize> {
    let mut dim = None;
    for edge in graph.edges() {
        let w = weights.get(&edge)?;
        let expected = *dim.get_or_insert(w.dim());
        if w.dim() != expected {
            return Err(GraphError::DimensionMismatch {
                expected,
                found: w.dim(),
            });
        }
        if let Some(&weight) = w.as_slice().iter().find(|v| !v.is_finite()) {
            return Err(GraphError::NonFiniteWeight { edge, weight });
        }
        if let Some(&weight) = w.as_slice().iter().find(|v| **v < 0.0) {
            return Err(GraphError::NegativeWeight { edge, weight });
        }
    }

    let heuristic_dim = heuristic
        .and_then(|h| h.iter().find_map(|(_, set)| set.iter().next().map(Weight::dim)));
    let dim = dim.or(heuristic_dim).unwrap_or(1);
    if let Some(h) = heuristic {
        for (_, set) in h.iter() {
            if let Some(bad) = set.iter().find(|l| l.dim() != dim) {
                return Err(GraphError::DimensionMismatch {
                    expected: dim,
                    found: bad.dim(),
                });
            }
        }
    }
    Ok(dim)
}

fn label_path<Ty: EdgeKind>(
    graph: &Graph<Ty>,
    source: NodeId,
    cost: Weight,
    edges: Vec<EdgeId>,
) -> Result<LabelPath> {
    let mut nodes = Vec::with_capacity(edges.len() + 1);
    nodes.push(source);
    let mut at = source;
    for &edge in &edges {
        at = graph.opposite(edge, at)?;
        nodes.push(at);
    }
    Ok(LabelPath { cost, edges, nodes })
}

/// Mutable state of one search.
struct Search<'a, Ty: EdgeKind> {
    graph: &'a Graph<Ty>,
    weights: &'a Annotator<EdgeId, Weight>,
    heuristic: &'a Annotator<NodeId, LabelSet>,
    destination: NodeId,
    zero_estimate: LabelSet,
    open_list: VecDeque<OpenListEntry>,
    open: Vec<LabelSet>,
    closed: Vec<LabelSet>,
    iterations: usize,
    extensions: usize,
    admitted: usize,
}

impl<'a, Ty: EdgeKind> Search<'a, Ty> {
    fn new(
        graph: &'a Graph<Ty>,
        weights: &'a Annotator<EdgeId, Weight>,
        heuristic: &'a Annotator<NodeId, LabelSet>,
        config: &NamoaConfig,
        dim: usize,
    ) -> Self {
        let bound = graph.node_bound();
        let zero = Weight::zeros(dim);
        let mut search = Self {
            graph,
            weights,
            heuristic,
            destination: config.destination,
            zero_estimate: LabelSet::singleton(zero.clone()),
            open_list: VecDeque::new(),
            open: vec![LabelSet::new(); bound],
            closed: vec![LabelSet::new(); bound],
            iterations: 0,
            extensions: 0,
            admitted: 0,
        };

        let f = search.estimate(config.source).broadcast_add(&zero);
        search.open[config.source.index()].insert(zero.clone());
        search.open_list.push_back(OpenListEntry {
            node: config.source,
            g: zero,
            f,
        });
        search
    }

    fn estimate(&self, node: NodeId) -> &LabelSet {
        self.heuristic.try_get(&node).unwrap_or(&self.zero_estimate)
    }

    fn run(&mut self) -> Result<()> {
        while let Some(OpenListEntry { node, g, .. }) = self.open_list.pop_front() {
            self.iterations += 1;
            self.open[node.index()].remove(&g);
            self.closed[node.index()].insert(g.clone());

            if node == self.destination {
                self.prune_by_destination(&g);
            } else {
                self.expand(node, &g)?;
            }
        }
        Ok(())
    }

    /// Removes projected costs the new destination cost dominates.
    fn prune_by_destination(&mut self, cost: &Weight) {
        let before = self.open_list.len();
        for entry in self.open_list.iter_mut() {
            entry
                .f
                .retain(|x| cost.dominates(x) != Dominance::ParetoSmaller);
        }
        self.open_list.retain(|entry| !entry.f.is_empty());
        trace!(
            cost = %cost,
            dropped = before - self.open_list.len(),
            "destination closed"
        );
    }

    fn expand(&mut self, node: NodeId, g: &Weight) -> Result<()> {
        for (edge, next) in self.graph.out_neighbors(node)? {
            self.extensions += 1;
            let extended = g.add(self.weights.get(&edge)?);
            let slot = next.index();

            if !self.open[slot].is_empty() || !self.closed[slot].is_empty() {
                let covered = self.closed[slot]
                    .iter()
                    .chain(self.open[slot].iter())
                    .any(|label| {
                        matches!(
                            label.dominates(&extended),
                            Dominance::ParetoSmaller | Dominance::Equal
                        )
                    });
                if covered {
                    continue;
                }
                self.remove_dominated(next, &extended);
            }

            let mut f = self.estimate(next).broadcast_add(&extended);
            let goal = &self.closed[self.destination.index()];
            f.retain(|x| !goal.iter().any(|c| c.dominates(x) == Dominance::ParetoSmaller));
            if f.is_empty() {
                continue;
            }

            trace!(from = %node, to = %next, g = %extended, "admit");
            self.admitted += 1;
            self.open[slot].insert(extended.clone());
            self.open_list.push_back(OpenListEntry {
                node: next,
                g: extended,
                f,
            });
        }
        Ok(())
    }

    /// Drops every label of `node` that `extended` dominates, along with
    /// the open-list entries carrying the dropped open labels.
    fn remove_dominated(&mut self, node: NodeId, extended: &Weight) {
        let slot = node.index();
        let dominated = |label: &Weight| extended.dominates(label) == Dominance::ParetoSmaller;

        self.closed[slot].retain(|l| !dominated(l));
        let removed: Vec<Weight> = self.open[slot]
            .iter()
            .filter(|&l| dominated(l))
            .cloned()
            .collect();
        if removed.is_empty() {
            return;
        }
        self.open[slot].retain(|l| !dominated(l));
        self.open_list
            .retain(|entry| !(entry.node == node && removed.contains(&entry.g)));
        trace!(node = %node, removed = removed.len(), "pruned dominated labels");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{DiGraph, UnGraph};
    use crate::measure::{Measurement, RecordingSink, SinkError};

    /// Six nodes a..f = n0..n5 and ten directed edges.
    fn worked_example() -> (DiGraph, Vec<NodeId>, Annotator<EdgeId, Weight>) {
        let mut g = DiGraph::new();
        let n = g.add_nodes(6);
        let mut w = Annotator::new();
        for (u, v, c) in [
            (0, 1, [3.0, 12.0]), // ab
            (0, 2, [4.0, 6.0]),  // ac
            (1, 3, [8.0, 1.0]),  // bd
            (1, 4, [1.0, 5.0]),  // be
            (2, 1, [5.0, 6.0]),  // cb
            (2, 4, [6.0, 4.0]),  // ce
            (3, 4, [7.0, 5.0]),  // de
            (3, 5, [9.0, 2.0]),  // df
            (4, 1, [1.0, 1.0]),  // eb
            (4, 5, [9.0, 11.0]), // ef
        ] {
            let e = g.add_edge(n[u], n[v]).unwrap();
            w.annotate(e, Weight::from(c));
        }
        (g, n, w)
    }

    fn sorted_costs(set: &LabelSet) -> Vec<Weight> {
        let mut costs = set.clone().into_vec();
        costs.sort_by(|a, b| a.lex_cmp(b));
        costs
    }

    #[test]
    fn test_worked_example_frontier_and_paths() {
        let (g, n, w) = worked_example();
        let config = NamoaConfig::new(n[0], n[5]);
        let result = NamoaRunner::run(&g, &w, None, &config, &mut NoopSink).unwrap();

        assert_eq!(
            sorted_costs(&result.frontier),
            vec![
                Weight::from([13.0, 28.0]),
                Weight::from([19.0, 21.0]),
                Weight::from([20.0, 15.0]),
                Weight::from([28.0, 14.0]),
            ]
        );

        let mut labels: Vec<(String, String)> = result
            .paths
            .iter()
            .map(|p| (p.cost.to_string(), p.label()))
            .collect();
        labels.sort();
        assert_eq!(
            labels,
            vec![
                ("(13, 28)".to_string(), "n0-n1-n4-n5".to_string()),
                ("(19, 21)".to_string(), "n0-n2-n4-n5".to_string()),
                ("(20, 15)".to_string(), "n0-n1-n3-n5".to_string()),
                ("(28, 14)".to_string(), "n0-n2-n4-n1-n3-n5".to_string()),
            ]
        );

        for path in &result.paths {
            assert_eq!(w.path_cost(&path.edges).unwrap(), path.cost);
        }
        assert_eq!(result.front.len(), 4);
        assert_eq!(result.extensions, 16);
        assert_eq!(result.admitted, 11);
        assert_eq!(result.iterations, 12);
    }

    #[test]
    fn test_idempotent() {
        let (g, n, w) = worked_example();
        let config = NamoaConfig::new(n[0], n[5]);
        let first = NamoaRunner::run(&g, &w, None, &config, &mut NoopSink).unwrap();
        let second = NamoaRunner::run(&g, &w, None, &config, &mut NoopSink).unwrap();
        assert_eq!(sorted_costs(&first.frontier), sorted_costs(&second.frontier));
        assert_eq!(first.paths.len(), second.paths.len());
    }

    #[test]
    fn test_measurements() {
        let (g, n, w) = worked_example();
        let mut sink = RecordingSink::new();
        let config = NamoaConfig::new(n[0], n[5]);
        NamoaRunner::run(&g, &w, None, &config, &mut sink).unwrap();

        assert_eq!(
            sink.records().first(),
            Some(&Measurement::ExperimentStarted {
                name: EXPERIMENT_NAME.into()
            })
        );
        assert_eq!(sink.stopped_timers(), vec![ALGORITHM, BACKTRACKING]);
        assert_eq!(sink.metric(FRONTIER_SIZE), Some(4));
        assert_eq!(sink.metric(PATH_EXTENSIONS), Some(16));
        assert_eq!(sink.metric(SOLUTIONS), Some(4));
        assert_eq!(sink.pareto_points().len(), 4);
    }

    #[test]
    fn test_failing_sink_does_not_abort() {
        struct Broken;
        impl MeasurementSink for Broken {
            fn record(&mut self, _m: Measurement) -> std::result::Result<(), SinkError> {
                Err(SinkError("offline".into()))
            }
        }

        let (g, n, w) = worked_example();
        let config = NamoaConfig::new(n[0], n[5]);
        let result = NamoaRunner::run(&g, &w, None, &config, &mut Broken).unwrap();
        assert_eq!(result.frontier.len(), 4);
    }

    #[test]
    fn test_zero_heuristic_gives_same_frontier() {
        let (g, n, w) = worked_example();
        let zero: Annotator<NodeId, LabelSet> = Annotator::new();
        let config = NamoaConfig::new(n[0], n[5]);
        let result = NamoaRunner::run(&g, &w, Some(&zero), &config, &mut NoopSink).unwrap();
        assert_eq!(
            sorted_costs(&result.frontier),
            vec![
                Weight::from([13.0, 28.0]),
                Weight::from([19.0, 21.0]),
                Weight::from([20.0, 15.0]),
                Weight::from([28.0, 14.0]),
            ],
            "a zero heuristic is admissible and must find the same frontier"
        );
    }

    #[test]
    fn test_local_heuristic() {
        let (g, n, w) = worked_example();
        let h = local_heuristic(&g, &w, n[5]).unwrap();
        assert_eq!(h.get(&n[0]).unwrap().len(), 2);
        assert_eq!(
            h.get(&n[5]).unwrap(),
            &LabelSet::singleton(Weight::zeros(2))
        );
        assert_eq!(
            h.get(&n[3]).unwrap(),
            &LabelSet::from(vec![Weight::from([7.0, 5.0]), Weight::from([9.0, 2.0])])
        );
    }

    #[test]
    fn test_fifo_expansion_order() {
        // The cheap detour through n1 is admitted after the direct edge,
        // so FIFO closes the direct cost first; the detour then removes it.
        let mut g = DiGraph::new();
        let n = g.add_nodes(3);
        let mut w = Annotator::new();
        w.annotate(g.add_edge(n[0], n[2]).unwrap(), Weight::from([10.0, 10.0]));
        w.annotate(g.add_edge(n[0], n[1]).unwrap(), Weight::from([1.0, 1.0]));
        w.annotate(g.add_edge(n[1], n[2]).unwrap(), Weight::from([1.0, 1.0]));
        let zero: Annotator<NodeId, LabelSet> = Annotator::new();

        let result = NamoaRunner::run(
            &g,
            &w,
            Some(&zero),
            &NamoaConfig::new(n[0], n[2]),
            &mut NoopSink,
        )
        .unwrap();
        assert_eq!(result.iterations, 4, "label correcting closes the direct cost too");
        assert_eq!(sorted_costs(&result.frontier), vec![Weight::from([2.0, 2.0])]);
        assert_eq!(result.paths.len(), 1);
        assert_eq!(result.paths[0].label(), "n0-n1-n2");
    }

    #[test]
    fn test_unreachable_destination() {
        let mut g = DiGraph::new();
        let n = g.add_nodes(3);
        let mut w = Annotator::new();
        w.annotate(g.add_edge(n[0], n[1]).unwrap(), Weight::from([1.0]));
        let result =
            NamoaRunner::run(&g, &w, None, &NamoaConfig::new(n[0], n[2]), &mut NoopSink).unwrap();
        assert!(result.is_empty());
        assert!(result.paths.is_empty());
        assert!(result.front.is_empty());
    }

    #[test]
    fn test_source_equals_destination() {
        let (g, n, w) = worked_example();
        let result =
            NamoaRunner::run(&g, &w, None, &NamoaConfig::new(n[2], n[2]), &mut NoopSink).unwrap();
        assert_eq!(result.frontier, LabelSet::singleton(Weight::zeros(2)));
        assert_eq!(result.paths.len(), 1);
        assert!(result.paths[0].is_empty());
        assert_eq!(result.paths[0].label(), "n2");
    }

    #[test]
    fn test_tied_paths_reported_separately() {
        let mut g = UnGraph::new();
        let n = g.add_nodes(4);
        let mut w = Annotator::new();
        for (u, v) in [(0, 1), (1, 3), (0, 2), (2, 3)] {
            w.annotate(g.add_edge(n[u], n[v]).unwrap(), Weight::from([1.0, 1.0]));
        }
        let zero: Annotator<NodeId, LabelSet> = Annotator::new();
        let result = NamoaRunner::run(
            &g,
            &w,
            Some(&zero),
            &NamoaConfig::new(n[0], n[3]),
            &mut NoopSink,
        )
        .unwrap();
        assert_eq!(result.frontier.len(), 1);
        assert_eq!(result.paths.len(), 2, "both tied routes are reconstructed");
        assert_eq!(result.front.len(), 2);

        let limited = NamoaRunner::run(
            &g,
            &w,
            Some(&zero),
            &NamoaConfig::new(n[0], n[3]).with_path_limit(1),
            &mut NoopSink,
        )
        .unwrap();
        assert_eq!(limited.paths.len(), 1);
    }

    #[test]
    fn test_input_errors() {
        let (g, n, mut w) = worked_example();
        let config = NamoaConfig::new(n[0], n[5]);

        let bad_node = NamoaConfig::new(n[0], NodeId::new(17));
        assert_eq!(
            NamoaRunner::run(&g, &w, None, &bad_node, &mut NoopSink).unwrap_err(),
            GraphError::UnknownNode(NodeId::new(17))
        );

        let mut short = Annotator::new();
        short.annotate(n[1], LabelSet::singleton(Weight::from([1.0])));
        assert!(matches!(
            NamoaRunner::run(&g, &w, Some(&short), &config, &mut NoopSink),
            Err(GraphError::DimensionMismatch { expected: 2, found: 1 })
        ));

        let first = g.edges().next().unwrap();
        w.annotate(first, Weight::from([-1.0, 0.0]));
        assert!(matches!(
            NamoaRunner::run(&g, &w, None, &config, &mut NoopSink),
            Err(GraphError::NegativeWeight { .. })
        ));

        w.annotate(first, Weight::from([1.0]));
        assert!(matches!(
            NamoaRunner::run(&g, &w, None, &config, &mut NoopSink),
            Err(GraphError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_weights_of_deleted_edges_are_ignored() {
        let mut g = DiGraph::new();
        let n = g.add_nodes(3);
        let mut w = Annotator::new();
        w.annotate(g.add_edge(n[0], n[1]).unwrap(), Weight::from([1.0, 2.0]));
        w.annotate(g.add_edge(n[1], n[2]).unwrap(), Weight::from([3.0, 1.0]));
        for _ in 0..64 {
            let stale = g.add_edge(n[2], n[0]).unwrap();
            w.annotate(stale, Weight::from([1.0, 1.0, 1.0]));
            g.delete_edge(stale).unwrap();
        }

        let h = local_heuristic(&g, &w, n[2]).unwrap();
        assert_eq!(h.get(&n[2]).unwrap(), &LabelSet::singleton(Weight::zeros(2)));

        let result =
            NamoaRunner::run(&g, &w, None, &NamoaConfig::new(n[0], n[2]), &mut NoopSink).unwrap();
        assert_eq!(result.frontier, LabelSet::singleton(Weight::from([4.0, 3.0])));
        assert_eq!(result.paths.len(), 1);
        assert_eq!(result.front.len(), 1);

        let same = NamoaRunner::run(&g, &w, None, &NamoaConfig::new(n[1], n[1]), &mut NoopSink)
            .unwrap();
        assert_eq!(
            same.front.costs().next(),
            Some(&Weight::zeros(2)),
            "an edgeless solution is costed at the live dimension"
        );
    }

    #[test]
    fn test_non_finite_weight_rejected() {
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let mut g = DiGraph::new();
            let n = g.add_nodes(2);
            let mut w = Annotator::new();
            let e = g.add_edge(n[0], n[1]).unwrap();
            w.annotate(e, Weight::from([bad, 1.0]));
            let err = NamoaRunner::run(&g, &w, None, &NamoaConfig::new(n[0], n[1]), &mut NoopSink)
                .unwrap_err();
            assert!(
                matches!(err, GraphError::NonFiniteWeight { edge, .. } if edge == e),
                "component {bad} must be rejected, got {err:?}"
            );
        }
    }

    #[test]
    fn test_local_heuristic_without_edges() {
        let mut g = DiGraph::new();
        let n = g.add_nodes(2);
        let empty: Annotator<EdgeId, Weight> = Annotator::new();
        let h = local_heuristic(&g, &empty, n[1]).unwrap();
        assert_eq!(h.get(&n[1]).unwrap(), &LabelSet::singleton(Weight::zeros(1)));
        assert!(h.get(&n[0]).unwrap().is_empty());

        g.add_edge(n[0], n[1]).unwrap();
        assert!(matches!(
            local_heuristic(&g, &empty, n[1]),
            Err(GraphError::MissingAnnotation(_))
        ));
    }

    #[test]
    fn test_run_batch() {
        let (g, n, w) = worked_example();
        let configs = vec![NamoaConfig::new(n[0], n[5]), NamoaConfig::new(n[2], n[3])];
        let results = NamoaRunner::run_batch(&g, &w, None, &configs);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].as_ref().unwrap().frontier.len(), 4);
        let second = results[1].as_ref().unwrap();
        assert!(!second.is_empty(), "n3 is reachable from n2");
    }
}
