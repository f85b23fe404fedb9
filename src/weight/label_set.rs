//! Unordered collections of cost labels.

use super::vector::Weight;

/// An unordered collection of [`Weight`]s attributed to one node.
///
/// A `LabelSet` does **not** enforce mutual non-domination on insertion.
/// Callers that need a Pareto frontier remove dominated members
/// explicitly, at the points their algorithm prescribes.
///
/// # Examples
///
/// ```
/// use u_mograph::weight::{LabelSet, Weight};
///
/// let h: LabelSet = vec![Weight::from([9.0, 2.0]), Weight::from([7.0, 5.0])]
///     .into_iter()
///     .collect();
/// let f = h.broadcast_add(&Weight::from([11.0, 13.0]));
///
/// assert!(f.contains(&Weight::from([20.0, 15.0])));
/// assert!(f.contains(&Weight::from([18.0, 18.0])));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LabelSet {
    labels: Vec<Weight>,
}

impl LabelSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a set holding one label.
    pub fn singleton(label: Weight) -> Self {
        Self {
            labels: vec![label],
        }
    }

    /// Number of labels, counting duplicates.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Adds a label. Dominated or duplicate labels are accepted as-is.
    pub fn insert(&mut self, label: Weight) {
        self.labels.push(label);
    }

    /// Removes every label equal to `label`. Returns whether any was removed.
    pub fn remove(&mut self, label: &Weight) -> bool {
        let before = self.labels.len();
        self.labels.retain(|l| l != label);
        self.labels.len() != before
    }

    /// Whether a label equal to `label` is present.
    pub fn contains(&self, label: &Weight) -> bool {
        self.labels.iter().any(|l| l == label)
    }

    /// Keeps only the labels for which `keep` returns `true`.
    pub fn retain<F: FnMut(&Weight) -> bool>(&mut self, keep: F) {
        self.labels.retain(keep);
    }

    /// Returns a new set with `offset` added to every member.
    ///
    /// # Panics
    /// Panics if any member's dimension differs from `offset`'s.
    pub fn broadcast_add(&self, offset: &Weight) -> LabelSet {
        LabelSet {
            labels: self.labels.iter().map(|l| l.add(offset)).collect(),
        }
    }

    /// Iterates over the labels in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Weight> {
        self.labels.iter()
    }

    /// Labels as a slice.
    pub fn as_slice(&self) -> &[Weight] {
        &self.labels
    }

    /// Consumes the set, returning its labels.
    pub fn into_vec(self) -> Vec<Weight> {
        self.labels
    }
}

impl From<Vec<Weight>> for LabelSet {
    fn from(labels: Vec<Weight>) -> Self {
        Self { labels }
    }
}

impl FromIterator<Weight> for LabelSet {
    fn from_iter<I: IntoIterator<Item = Weight>>(iter: I) -> Self {
        Self {
            labels: iter.into_iter().collect(),
        }
    }
}

impl Extend<Weight> for LabelSet {
    fn extend<I: IntoIterator<Item = Weight>>(&mut self, iter: I) {
        self.labels.extend(iter);
    }
}

impl<'a> IntoIterator for &'a LabelSet {
    type Item = &'a Weight;
    type IntoIter = std::slice::Iter<'a, Weight>;

    fn into_iter(self) -> Self::IntoIter {
        self.labels.iter()
    }
}
