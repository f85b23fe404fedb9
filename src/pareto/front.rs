//! Incrementally maintained Pareto front of solutions.

use crate::error::{GraphError, Result};
use crate::graph::{Annotator, EdgeId, EdgeKind, Graph};
use crate::weight::{Dominance, Weight};

use super::sort::non_dominated_sort;

/// Computes the vector cost of a candidate solution.
pub trait CostCalculator<S> {
    /// Cost of `solution`; smaller is better in every component.
    fn cost(&self, solution: &S) -> Result<Weight>;
}

/// Costs a solution graph as the vector sum of its edges' weights.
#[derive(Debug, Clone, Copy)]
pub struct EdgeWeightSum<'a> {
    weights: &'a Annotator<EdgeId, Weight>,
    dim: Option<usize>,
}

impl<'a> EdgeWeightSum<'a> {
    /// Creates a calculator reading from `weights`.
    pub fn new(weights: &'a Annotator<EdgeId, Weight>) -> Self {
        Self { weights, dim: None }
    }

    /// Requires every cost to have `dim` components. An edgeless solution
    /// then costs `Weight::zeros(dim)`.
    pub fn with_dimension(mut self, dim: usize) -> Self {
        self.dim = Some(dim);
        self
    }
}

impl<Ty: EdgeKind> CostCalculator<Graph<Ty>> for EdgeWeightSum<'_> {
    fn cost(&self, solution: &Graph<Ty>) -> Result<Weight> {
        let edges: Vec<EdgeId> = solution.edges().collect();
        match self.dim {
            Some(dim) => self.weights.path_cost_with_dim(&edges, dim),
            None => self.weights.path_cost(&edges),
        }
    }
}

/// A set of solutions none of which dominates another.
///
/// Members with equal costs may coexist when their solutions differ. An
/// offered solution equal to a member with an equal cost is rejected as
/// a duplicate.
///
/// # Examples
///
/// ```
/// use u_mograph::pareto::ParetoFront;
/// use u_mograph::weight::Weight;
///
/// let mut front = ParetoFront::new();
/// assert!(front.offer_scored("a", Weight::from([1.0, 5.0])).unwrap());
/// assert!(front.offer_scored("b", Weight::from([5.0, 1.0])).unwrap());
/// // Dominated by "a".
/// assert!(!front.offer_scored("c", Weight::from([2.0, 6.0])).unwrap());
/// // Dominates both.
/// assert!(front.offer_scored("d", Weight::from([1.0, 1.0])).unwrap());
/// assert_eq!(front.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ParetoFront<S> {
    members: Vec<(S, Weight)>,
}

impl<S> Default for ParetoFront<S> {
    fn default() -> Self {
        Self {
            members: Vec::new(),
        }
    }
}

impl<S: PartialEq> ParetoFront<S> {
    /// Creates an empty front.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a front from pre-scored candidates in one batch.
    ///
    /// Keeps the rank-0 candidates of a non-dominated sort, in input
    /// order, with duplicates removed.
    pub fn from_candidates(candidates: Vec<(S, Weight)>) -> Result<Self> {
        let mut front = Self::new();
        let Some(dim) = candidates.first().map(|(_, c)| c.dim()) else {
            return Ok(front);
        };
        if let Some((_, c)) = candidates.iter().find(|(_, c)| c.dim() != dim) {
            return Err(GraphError::DimensionMismatch {
                expected: dim,
                found: c.dim(),
            });
        }

        let costs: Vec<Weight> = candidates.iter().map(|(_, c)| c.clone()).collect();
        let ranks = non_dominated_sort(&costs).ranks;
        for ((solution, cost), rank) in candidates.into_iter().zip(ranks) {
            if rank == 0 && !front.has_duplicate(&solution, &cost) {
                front.members.push((solution, cost));
            }
        }
        Ok(front)
    }

    /// Scores `solution` with `calculator` and offers it.
    pub fn offer<C: CostCalculator<S> + ?Sized>(
        &mut self,
        solution: S,
        calculator: &C,
    ) -> Result<bool> {
        let cost = calculator.cost(&solution)?;
        self.offer_scored(solution, cost)
    }

    /// Offers a solution with a known cost.
    ///
    /// Returns `true` if it was admitted. Admission removes every member
    /// the new cost dominates.
    pub fn offer_scored(&mut self, solution: S, cost: Weight) -> Result<bool> {
        if let Some((_, existing)) = self.members.first() {
            if existing.dim() != cost.dim() {
                return Err(GraphError::DimensionMismatch {
                    expected: existing.dim(),
                    found: cost.dim(),
                });
            }
        }

        for (member, member_cost) in &self.members {
            match member_cost.dominates(&cost) {
                Dominance::ParetoSmaller => return Ok(false),
                Dominance::Equal if *member == solution => return Ok(false),
                _ => {}
            }
        }

        self.members
            .retain(|(_, c)| cost.dominates(c) != Dominance::ParetoSmaller);
        self.members.push((solution, cost));
        Ok(true)
    }

    fn has_duplicate(&self, solution: &S, cost: &Weight) -> bool {
        self.members
            .iter()
            .any(|(s, c)| c == cost && s == solution)
    }
}

impl<S> ParetoFront<S> {
    /// Number of members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the front is empty.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Members in admission order.
    pub fn iter(&self) -> impl Iterator<Item = (&S, &Weight)> {
        self.members.iter().map(|(s, c)| (s, c))
    }

    /// Member costs in admission order.
    pub fn costs(&self) -> impl Iterator<Item = &Weight> {
        self.members.iter().map(|(_, c)| c)
    }

    /// Members sorted lexicographically by cost.
    ///
    /// Equal costs keep their admission order.
    pub fn ranked(&self) -> Vec<(&S, &Weight)> {
        let mut ranked: Vec<(&S, &Weight)> = self.iter().collect();
        ranked.sort_by(|a, b| a.1.lex_cmp(b.1));
        ranked
    }

    /// Consumes the front, returning its members.
    pub fn into_members(self) -> Vec<(S, Weight)> {
        self.members
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{DiGraph, NodeId};
    use proptest::prelude::*;

    #[test]
    fn test_offer_removes_dominated() {
        let mut front = ParetoFront::new();
        assert!(front.offer_scored(1, Weight::from([3.0, 3.0])).unwrap());
        assert!(front.offer_scored(2, Weight::from([1.0, 4.0])).unwrap());
        assert!(front.offer_scored(3, Weight::from([2.0, 2.0])).unwrap());
        let members: Vec<i32> = front.iter().map(|(s, _)| *s).collect();
        assert_eq!(members, vec![2, 3], "(3, 3) is dominated by (2, 2)");
    }

    #[test]
    fn test_equal_cost_distinct_solutions_coexist() {
        let mut front = ParetoFront::new();
        assert!(front.offer_scored("x", Weight::from([2.0, 2.0])).unwrap());
        assert!(front.offer_scored("y", Weight::from([2.0, 2.0])).unwrap());
        assert!(
            !front.offer_scored("x", Weight::from([2.0, 2.0])).unwrap(),
            "duplicate solution must be rejected"
        );
        assert_eq!(front.len(), 2);
    }

    #[test]
    fn test_dimension_mismatch() {
        let mut front = ParetoFront::new();
        front.offer_scored(0, Weight::from([1.0, 1.0])).unwrap();
        assert_eq!(
            front.offer_scored(1, Weight::from([1.0])).unwrap_err(),
            GraphError::DimensionMismatch {
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn test_from_candidates() {
        let front = ParetoFront::from_candidates(vec![
            ('a', Weight::from([4.0, 4.0])),
            ('b', Weight::from([1.0, 5.0])),
            ('c', Weight::from([3.0, 3.0])),
            ('b', Weight::from([1.0, 5.0])),
            ('d', Weight::from([5.0, 1.0])),
        ])
        .unwrap();
        let members: Vec<char> = front.iter().map(|(s, _)| *s).collect();
        assert_eq!(members, vec!['b', 'c', 'd']);

        let ranked: Vec<char> = front.ranked().into_iter().map(|(s, _)| *s).collect();
        assert_eq!(ranked, vec!['b', 'c', 'd']);

        let empty: ParetoFront<char> = ParetoFront::from_candidates(Vec::new()).unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_edge_weight_sum_on_subgraphs() {
        let mut g = DiGraph::new();
        let n: Vec<NodeId> = g.add_nodes(3);
        let e0 = g.add_edge(n[0], n[1]).unwrap();
        let e1 = g.add_edge(n[1], n[2]).unwrap();
        let e2 = g.add_edge(n[0], n[2]).unwrap();
        let weights: Annotator<EdgeId, Weight> = vec![
            (e0, Weight::from([1.0, 4.0])),
            (e1, Weight::from([1.0, 4.0])),
            (e2, Weight::from([5.0, 1.0])),
        ]
        .into_iter()
        .collect();
        let calc = EdgeWeightSum::new(&weights);

        let mut front = ParetoFront::new();
        let two_hops = g.subgraph_with_implied_nodes(&[e0, e1]).unwrap();
        let direct = g.subgraph_with_implied_nodes(&[e2]).unwrap();
        assert!(front.offer(two_hops.clone(), &calc).unwrap());
        assert!(front.offer(direct, &calc).unwrap());
        assert!(!front.offer(two_hops, &calc).unwrap());

        let costs: Vec<&Weight> = front.costs().collect();
        assert_eq!(costs, vec![&Weight::from([2.0, 8.0]), &Weight::from([5.0, 1.0])]);
    }

    #[test]
    fn test_edge_weight_sum_with_dimension() {
        let mut g = DiGraph::new();
        let n: Vec<NodeId> = g.add_nodes(2);
        let e = g.add_edge(n[0], n[1]).unwrap();
        let weights: Annotator<EdgeId, Weight> =
            vec![(e, Weight::from([1.0, 4.0]))].into_iter().collect();
        let calc = EdgeWeightSum::new(&weights).with_dimension(2);

        let empty = g.subgraph_with_implied_nodes(&[]).unwrap();
        assert_eq!(calc.cost(&empty).unwrap(), Weight::zeros(2));

        let strict = EdgeWeightSum::new(&weights).with_dimension(3);
        let single = g.subgraph_with_implied_nodes(&[e]).unwrap();
        assert!(matches!(
            strict.cost(&single),
            Err(GraphError::DimensionMismatch { expected: 3, found: 2 })
        ));
    }

    proptest! {
        #[test]
        fn prop_members_mutually_non_dominated(
            raw in proptest::collection::vec((0u8..10, 0u8..10), 1..30)
        ) {
            let mut front = ParetoFront::new();
            for (i, (a, b)) in raw.iter().enumerate() {
                front
                    .offer_scored(i, Weight::from([f64::from(*a), f64::from(*b)]))
                    .unwrap();
            }
            let costs: Vec<&Weight> = front.costs().collect();
            for x in &costs {
                for y in &costs {
                    prop_assert_ne!(x.dominates(y), Dominance::ParetoSmaller);
                }
            }

            let batch = ParetoFront::from_candidates(
                raw.iter()
                    .enumerate()
                    .map(|(i, (a, b))| (i, Weight::from([f64::from(*a), f64::from(*b)])))
                    .collect(),
            )
            .unwrap();
            let mut incremental: Vec<usize> = front.iter().map(|(s, _)| *s).collect();
            let mut batched: Vec<usize> = batch.iter().map(|(s, _)| *s).collect();
            incremental.sort_unstable();
            batched.sort_unstable();
            prop_assert_eq!(incremental, batched);
        }
    }
}
