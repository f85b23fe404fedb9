//! Fast non-dominated sorting over [`Weight`] costs.

use crate::weight::{Dominance, Weight};

/// Result of non-dominated sorting.
///
/// Each element of `ranks` corresponds to the Pareto rank of the cost at
/// the same index. Rank 0 is the Pareto front (non-dominated costs).
#[derive(Debug, Clone)]
pub struct NondominatedSortResult {
    /// Pareto rank for each cost (0 = front).
    pub ranks: Vec<usize>,

    /// Indices grouped by front: `fronts[0]` contains rank-0 indices, etc.
    pub fronts: Vec<Vec<usize>>,
}

/// Fast non-dominated sorting (Deb et al., 2002).
///
/// All objectives are minimized. Equal costs do not dominate each other
/// and therefore share a rank.
///
/// # Algorithm
///
/// 1. For each pair of costs, classify with [`Weight::dominates`]
/// 2. Costs dominated by no other belong to front 0
/// 3. Remove front 0, repeat to find subsequent fronts
///
/// # Complexity
///
/// O(m * n²) where m = dimension, n = number of costs
///
/// # Panics
///
/// Panics if `costs` is empty or if the costs have different dimensions.
///
/// # Example
///
/// ```
/// use u_mograph::pareto::non_dominated_sort;
/// use u_mograph::weight::Weight;
///
/// let costs = vec![
///     Weight::from([1.0, 5.0]),
///     Weight::from([3.0, 3.0]),
///     Weight::from([5.0, 1.0]),
///     Weight::from([4.0, 4.0]), // dominated by (3, 3)
/// ];
///
/// let result = non_dominated_sort(&costs);
/// assert_eq!(result.ranks, vec![0, 0, 0, 1]);
/// ```
pub fn non_dominated_sort(costs: &[Weight]) -> NondominatedSortResult {
    let n = costs.len();
    assert!(n > 0, "costs must not be empty");

    if n == 1 {
        return NondominatedSortResult {
            ranks: vec![0],
            fronts: vec![vec![0]],
        };
    }

    let mut domination_count = vec![0usize; n];
    let mut dominated_by: Vec<Vec<usize>> = vec![Vec::new(); n];
    let mut ranks = vec![0usize; n];

    for i in 0..n {
        for j in (i + 1)..n {
            match costs[i].dominates(&costs[j]) {
                Dominance::ParetoSmaller => {
                    dominated_by[i].push(j);
                    domination_count[j] += 1;
                }
                Dominance::ParetoGreater => {
                    dominated_by[j].push(i);
                    domination_count[i] += 1;
                }
                Dominance::Equal | Dominance::Uncomparable => {}
            }
        }
    }

    let mut current: Vec<usize> = (0..n).filter(|&i| domination_count[i] == 0).collect();
    let mut fronts = Vec::new();
    while !current.is_empty() {
        let mut next_front = Vec::new();
        for &i in &current {
            for &j in &dominated_by[i] {
                domination_count[j] -= 1;
                if domination_count[j] == 0 {
                    ranks[j] = fronts.len() + 1;
                    next_front.push(j);
                }
            }
        }
        fronts.push(std::mem::replace(&mut current, next_front));
    }

    NondominatedSortResult { ranks, fronts }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn costs(raw: &[[f64; 2]]) -> Vec<Weight> {
        raw.iter().map(|c| Weight::from(*c)).collect()
    }

    #[test]
    fn test_single_cost() {
        let result = non_dominated_sort(&costs(&[[1.0, 2.0]]));
        assert_eq!(result.ranks, vec![0]);
        assert_eq!(result.fronts, vec![vec![0]]);
    }

    #[test]
    fn test_chain_of_dominance() {
        let result = non_dominated_sort(&costs(&[[3.0, 3.0], [1.0, 1.0], [2.0, 2.0]]));
        assert_eq!(result.ranks, vec![2, 0, 1]);
        assert_eq!(result.fronts, vec![vec![1], vec![2], vec![0]]);
    }

    #[test]
    fn test_mixed_fronts() {
        let result = non_dominated_sort(&costs(&[
            [1.0, 5.0],
            [3.0, 3.0],
            [5.0, 1.0],
            [4.0, 4.0],
            [6.0, 6.0],
        ]));
        assert_eq!(result.ranks, vec![0, 0, 0, 1, 2]);
        assert_eq!(result.fronts.len(), 3);
    }

    #[test]
    fn test_equal_costs_share_rank() {
        let result = non_dominated_sort(&costs(&[[2.0, 2.0], [2.0, 2.0], [2.0, 2.0]]));
        assert!(
            result.ranks.iter().all(|&r| r == 0),
            "identical costs must not dominate each other"
        );
    }

    #[test]
    #[should_panic(expected = "costs must not be empty")]
    fn test_empty_panics() {
        non_dominated_sort(&[]);
    }
}
