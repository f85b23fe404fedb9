//! Helpers shared by the single-objective algorithms: scalarized edge
//! weights, coefficient validation, and a min-ordered heap entry.

use std::cmp::Ordering;

use crate::error::{GraphError, Result};
use crate::graph::{Annotator, EdgeId, EdgeKind, Graph};
use crate::weight::Weight;

/// Scalar weight per edge slot, computed once per run.
#[derive(Debug, Clone)]
pub(crate) struct ScalarWeights {
    values: Vec<f64>,
}

impl ScalarWeights {
    /// Scalarizes every live edge of `graph`.
    ///
    /// `coeffs = None` sums the components.
    pub(crate) fn compute<Ty: EdgeKind>(
        graph: &Graph<Ty>,
        weights: &Annotator<EdgeId, Weight>,
        coeffs: Option<&[f64]>,
    ) -> Result<Self> {
        let mut values = vec![f64::INFINITY; graph.edge_bound()];
        for edge in graph.edges() {
            let w = weights.get(&edge)?;
            values[edge.index()] = match coeffs {
                Some(c) if c.len() != w.dim() => {
                    return Err(GraphError::DimensionMismatch {
                        expected: w.dim(),
                        found: c.len(),
                    })
                }
                Some(c) => w.scalarize(c),
                None => w.sum(),
            };
        }
        Ok(Self { values })
    }

    pub(crate) fn get(&self, edge: EdgeId) -> f64 {
        self.values[edge.index()]
    }
}

/// Rejects empty or non-finite coefficient lists.
pub(crate) fn validate_coefficients(coefficients: Option<&[f64]>) -> Result<()> {
    match coefficients {
        Some([]) => Err(GraphError::InvalidConfig(
            "coefficients must not be empty".into(),
        )),
        Some(c) if c.iter().any(|v| !v.is_finite()) => Err(GraphError::InvalidConfig(
            "coefficients must be finite".into(),
        )),
        _ => Ok(()),
    }
}

/// Heap entry ordered so that `BinaryHeap` pops the smallest score first.
///
/// Equal scores pop in insertion order (`seq`), which keeps runs
/// deterministic.
#[derive(Debug, Clone)]
pub(crate) struct MinScored<T> {
    pub score: f64,
    pub seq: u64,
    pub item: T,
}

impl<T> PartialEq for MinScored<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T> Eq for MinScored<T> {}

impl<T> PartialOrd for MinScored<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for MinScored<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .score
            .total_cmp(&self.score)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}
