//! Element → value annotations.

use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;

use super::base::{EdgeKind, Graph};
use super::ids::EdgeId;
use crate::error::{GraphError, Result};
use crate::weight::Weight;

/// Maps graph elements to annotation values, one value per element.
///
/// # Examples
///
/// ```
/// use u_mograph::graph::{Annotator, UnGraph};
/// use u_mograph::weight::Weight;
///
/// let mut g = UnGraph::new();
/// let n = g.add_nodes(2);
/// let e = g.add_edge(n[0], n[1]).unwrap();
///
/// let mut weights = Annotator::new();
/// weights.annotate(e, Weight::from([3.0, 12.0]));
/// assert_eq!(weights.get(&e).unwrap(), &Weight::from([3.0, 12.0]));
/// assert_eq!(weights.dimension(), Some(2));
/// ```
#[derive(Debug, Clone)]
pub struct Annotator<K, V> {
    values: HashMap<K, V>,
}

impl<K, V> Default for Annotator<K, V> {
    fn default() -> Self {
        Self {
            values: HashMap::new(),
        }
    }
}

impl<K: Copy + Eq + Hash + Debug, V> Annotator<K, V> {
    /// Creates an empty annotator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the annotation of `key`, returning the previous one.
    pub fn annotate(&mut self, key: K, value: V) -> Option<V> {
        self.values.insert(key, value)
    }

    /// The annotation of `key`.
    ///
    /// An unannotated element is a contract violation.
    pub fn get(&self, key: &K) -> Result<&V> {
        self.values
            .get(key)
            .ok_or_else(|| GraphError::MissingAnnotation(format!("{key:?}")))
    }

    /// The annotation of `key`, if any.
    pub fn try_get(&self, key: &K) -> Option<&V> {
        self.values.get(key)
    }

    /// Removes the annotation of `key`.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.values.remove(key)
    }

    /// Whether `key` is annotated.
    pub fn contains(&self, key: &K) -> bool {
        self.values.contains_key(key)
    }

    /// Number of annotated elements.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no element is annotated.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over `(element, annotation)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.values.iter()
    }
}

impl Annotator<EdgeId, Weight> {
    /// Dimension of the stored weights, taken from an arbitrary entry.
    ///
    /// Entries for deleted edges count too. Use
    /// [`live_dimension`](Self::live_dimension) when a graph is at hand.
    pub fn dimension(&self) -> Option<usize> {
        self.values.values().next().map(Weight::dim)
    }

    /// Dimension of the weight on the first live edge of `graph`, or
    /// `None` if `graph` has no edges.
    pub fn live_dimension<Ty: EdgeKind>(&self, graph: &Graph<Ty>) -> Result<Option<usize>> {
        graph
            .edges()
            .next()
            .map(|edge| self.get(&edge).map(Weight::dim))
            .transpose()
    }

    /// Vector sum of the weights of `edges`.
    ///
    /// The first edge fixes the dimension. An empty edge list costs the
    /// zero vector of [`dimension`](Self::dimension) (dimension 1 for an
    /// empty annotator).
    pub fn path_cost(&self, edges: &[EdgeId]) -> Result<Weight> {
        let dim = match edges.first() {
            Some(edge) => self.get(edge)?.dim(),
            None => self.dimension().unwrap_or(1),
        };
        self.path_cost_with_dim(edges, dim)
    }

    /// Vector sum of the weights of `edges`, each of which must have
    /// dimension `dim`. An empty edge list costs `Weight::zeros(dim)`.
    pub fn path_cost_with_dim(&self, edges: &[EdgeId], dim: usize) -> Result<Weight> {
        let mut total = Weight::zeros(dim);
        for edge in edges {
            let w = self.get(edge)?;
            if w.dim() != dim {
                return Err(GraphError::DimensionMismatch {
                    expected: dim,
                    found: w.dim(),
                });
            }
            total.add_assign(w);
        }
        Ok(total)
    }
}

impl<K: Copy + Eq + Hash + Debug, V> FromIterator<(K, V)> for Annotator<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

/// An [`Annotator`] that also answers "which elements carry this value?".
///
/// # Examples
///
/// ```
/// use u_mograph::graph::{ReverseAnnotator, Terminal, UnGraph};
///
/// let mut g = UnGraph::new();
/// let n = g.add_nodes(3);
///
/// let mut marks = ReverseAnnotator::new();
/// marks.annotate(n[0], Terminal::Start);
/// marks.annotate(n[2], Terminal::End);
/// assert_eq!(marks.elements_with(&Terminal::End), vec![n[2]]);
/// ```
#[derive(Debug, Clone)]
pub struct ReverseAnnotator<K, V> {
    forward: HashMap<K, V>,
    reverse: HashMap<V, HashSet<K>>,
}

impl<K, V> Default for ReverseAnnotator<K, V> {
    fn default() -> Self {
        Self {
            forward: HashMap::new(),
            reverse: HashMap::new(),
        }
    }
}

impl<K, V> ReverseAnnotator<K, V>
where
    K: Copy + Eq + Hash + Ord + Debug,
    V: Clone + Eq + Hash,
{
    /// Creates an empty annotator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the annotation of `key`, returning the previous one.
    pub fn annotate(&mut self, key: K, value: V) -> Option<V> {
        let previous = self.forward.insert(key, value.clone());
        if let Some(old) = &previous {
            self.unlink(key, old);
        }
        self.reverse.entry(value).or_default().insert(key);
        previous
    }

    /// The annotation of `key`.
    pub fn get(&self, key: &K) -> Result<&V> {
        self.forward
            .get(key)
            .ok_or_else(|| GraphError::MissingAnnotation(format!("{key:?}")))
    }

    /// Removes the annotation of `key`.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let old = self.forward.remove(key)?;
        self.unlink(*key, &old);
        Some(old)
    }

    /// Elements annotated with `value`, sorted by identifier.
    pub fn elements_with(&self, value: &V) -> Vec<K> {
        let mut keys: Vec<K> = self
            .reverse
            .get(value)
            .map(|set| set.iter().copied().collect())
            .unwrap_or_default();
        keys.sort();
        keys
    }

    /// Number of annotated elements.
    pub fn len(&self) -> usize {
        self.forward.len()
    }

    /// Whether no element is annotated.
    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }

    fn unlink(&mut self, key: K, value: &V) {
        if let Some(set) = self.reverse.get_mut(value) {
            set.remove(&key);
            if set.is_empty() {
                self.reverse.remove(value);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{DiGraph, NodeId, Terminal};

    #[test]
    fn test_missing_annotation_is_error() {
        let weights: Annotator<EdgeId, Weight> = Annotator::new();
        let err = weights.get(&EdgeId::new(3)).unwrap_err();
        assert!(matches!(err, GraphError::MissingAnnotation(_)));
    }

    #[test]
    fn test_annotate_replaces() {
        let mut a: Annotator<NodeId, i32> = Annotator::new();
        assert_eq!(a.annotate(NodeId::new(0), 1), None);
        assert_eq!(a.annotate(NodeId::new(0), 2), Some(1));
        assert_eq!(a.len(), 1);
        assert_eq!(*a.get(&NodeId::new(0)).unwrap(), 2);
    }

    #[test]
    fn test_path_cost() {
        let weights: Annotator<EdgeId, Weight> = vec![
            (EdgeId::new(0), Weight::from([3.0, 12.0])),
            (EdgeId::new(1), Weight::from([1.0, 5.0])),
        ]
        .into_iter()
        .collect();
        assert_eq!(
            weights.path_cost(&[EdgeId::new(0), EdgeId::new(1)]).unwrap(),
            Weight::from([4.0, 17.0])
        );
        assert_eq!(weights.path_cost(&[]).unwrap(), Weight::zeros(2));
        assert!(weights.path_cost(&[EdgeId::new(9)]).is_err());
    }

    #[test]
    fn test_stale_entries_do_not_set_dimension() {
        let mut g = DiGraph::new();
        let n = g.add_nodes(2);
        let mut weights = Annotator::new();
        let live = g.add_edge(n[0], n[1]).unwrap();
        weights.annotate(live, Weight::from([1.0, 2.0]));
        for _ in 0..32 {
            let stale = g.add_edge(n[1], n[0]).unwrap();
            weights.annotate(stale, Weight::from([1.0, 1.0, 1.0]));
            g.delete_edge(stale).unwrap();
        }

        assert_eq!(weights.live_dimension(&g).unwrap(), Some(2));
        assert_eq!(weights.path_cost(&[live]).unwrap(), Weight::from([1.0, 2.0]));
        assert_eq!(
            weights.path_cost_with_dim(&[], 2).unwrap(),
            Weight::zeros(2),
            "empty edge list must cost the requested zero vector"
        );
        assert_eq!(
            weights.path_cost_with_dim(&[live], 3).unwrap_err(),
            GraphError::DimensionMismatch {
                expected: 3,
                found: 2
            }
        );
        assert_eq!(weights.live_dimension(&DiGraph::new()).unwrap(), None);
    }

    #[test]
    fn test_reverse_lookup_tracks_reassignment() {
        let mut marks = ReverseAnnotator::new();
        let (a, b) = (NodeId::new(0), NodeId::new(1));
        marks.annotate(a, Terminal::Start);
        marks.annotate(b, Terminal::Start);
        assert_eq!(marks.elements_with(&Terminal::Start), vec![a, b]);

        marks.annotate(b, Terminal::End);
        assert_eq!(marks.elements_with(&Terminal::Start), vec![a]);
        assert_eq!(marks.elements_with(&Terminal::End), vec![b]);

        assert_eq!(marks.remove(&a), Some(Terminal::Start));
        assert!(marks.elements_with(&Terminal::Start).is_empty());
        assert_eq!(marks.len(), 1);
    }
}
