//! Arena-backed union-find forest.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use crate::error::UnionFindError;

#[derive(Debug, Clone)]
struct TreeNode<T> {
    parent: Option<usize>,
    rank: u32,
    element: T,
}

/// Union-find over arbitrary hashable elements.
///
/// # Examples
///
/// ```
/// use u_mograph::union_find::UnionFind;
///
/// let mut uf = UnionFind::new();
/// for x in 0..4 {
///     uf.add(x).unwrap();
/// }
/// uf.union(&0, &1).unwrap();
/// uf.union(&2, &3).unwrap();
/// assert!(uf.same_set(&0, &1).unwrap());
/// assert!(!uf.same_set(&1, &2).unwrap());
///
/// uf.make_representative(&1).unwrap();
/// assert_eq!(uf.find(&0).unwrap(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct UnionFind<T> {
    arena: Vec<TreeNode<T>>,
    index: HashMap<T, usize>,
    safe: bool,
    path_compression: bool,
}

impl<T: Clone + Eq + Hash + Debug> Default for UnionFind<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + Eq + Hash + Debug> UnionFind<T> {
    /// Creates an empty structure: unsafe mode, path compression on.
    pub fn new() -> Self {
        Self {
            arena: Vec::new(),
            index: HashMap::new(),
            safe: false,
            path_compression: true,
        }
    }

    /// Creates an empty structure with room for `n` elements.
    pub fn with_capacity(n: usize) -> Self {
        Self {
            arena: Vec::with_capacity(n),
            index: HashMap::with_capacity(n),
            ..Self::new()
        }
    }

    /// Enables or disables safe mode.
    pub fn with_safe_mode(mut self, safe: bool) -> Self {
        self.safe = safe;
        self
    }

    /// Enables or disables path compression in [`find`](Self::find).
    pub fn with_path_compression(mut self, enabled: bool) -> Self {
        self.path_compression = enabled;
        self
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Whether no element has been added.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Whether `element` has been added.
    pub fn contains(&self, element: &T) -> bool {
        self.index.contains_key(element)
    }

    /// Number of disjoint sets among the current elements.
    pub fn set_count(&self) -> usize {
        self.index
            .values()
            .filter(|&&i| self.arena[i].parent.is_none())
            .count()
    }

    /// Adds `element` as a new singleton set.
    ///
    /// In unsafe mode an element that is already present leaves its old
    /// set, which keeps its other members. If the element was that set's
    /// representative, the member stored in the lowest arena slot takes
    /// over.
    pub fn add(&mut self, element: T) -> Result<(), UnionFindError> {
        if let Some(&old) = self.index.get(&element) {
            if self.safe {
                return Err(UnionFindError::DuplicateElement(format!("{element:?}")));
            }
            self.hand_over(old, &element);
        }
        let slot = self.arena.len();
        self.arena.push(TreeNode {
            parent: None,
            rank: 0,
            element: element.clone(),
        });
        self.index.insert(element, slot);
        Ok(())
    }

    /// Returns the representative of the set containing `element`.
    ///
    /// With path compression enabled, every node visited on the way up is
    /// re-parented directly under the root.
    pub fn find(&mut self, element: &T) -> Result<T, UnionFindError> {
        let start = self.slot(element)?;
        let root = self.find_root(start);
        Ok(self.arena[root].element.clone())
    }

    /// Merges the sets of `u` and `v`, returning the resulting representative.
    ///
    /// The lower-rank root is attached under the higher-rank root. On equal
    /// ranks, `u`'s root goes under `v`'s root, whose rank grows by one.
    pub fn union(&mut self, u: &T, v: &T) -> Result<T, UnionFindError> {
        let u_slot = self.slot(u)?;
        let v_slot = self.slot(v)?;
        let ru = self.find_root(u_slot);
        let rv = self.find_root(v_slot);
        if ru == rv {
            return Ok(self.arena[ru].element.clone());
        }

        let root = if self.arena[ru].rank > self.arena[rv].rank {
            self.arena[rv].parent = Some(ru);
            ru
        } else if self.arena[ru].rank < self.arena[rv].rank {
            self.arena[ru].parent = Some(rv);
            rv
        } else {
            self.arena[ru].parent = Some(rv);
            self.arena[rv].rank += 1;
            rv
        };
        Ok(self.arena[root].element.clone())
    }

    /// Whether `u` and `v` are in the same set.
    pub fn same_set(&mut self, u: &T, v: &T) -> Result<bool, UnionFindError> {
        let u_slot = self.slot(u)?;
        let v_slot = self.slot(v)?;
        Ok(self.find_root(u_slot) == self.find_root(v_slot))
    }

    /// Makes `element` the representative of its set.
    ///
    /// The tree keeps its shape. Only the element labels of the root and
    /// of `element`'s own node are swapped. If `element` is already the
    /// representative, nothing changes.
    pub fn make_representative(&mut self, element: &T) -> Result<(), UnionFindError> {
        let slot = self.slot(element)?;
        let root = self.find_root(slot);
        if root == slot {
            return Ok(());
        }

        let root_element = self.arena[root].element.clone();
        self.arena[root].element = element.clone();
        self.arena[slot].element = root_element.clone();
        self.index.insert(element.clone(), root);
        self.index.insert(root_element, slot);
        Ok(())
    }

    /// Relabels the root `old`, which represented `leaving`, with another
    /// member of its set. Non-root nodes stay as unlabeled links.
    fn hand_over(&mut self, old: usize, leaving: &T) {
        if self.arena[old].parent.is_some() {
            return;
        }
        let others: Vec<(usize, T)> = self
            .index
            .iter()
            .filter(|(element, _)| *element != leaving)
            .map(|(element, &slot)| (slot, element.clone()))
            .collect();
        let heir = others
            .into_iter()
            .filter(|(slot, _)| self.find_root(*slot) == old)
            .min_by_key(|(slot, _)| *slot);
        if let Some((_, member)) = heir {
            self.arena[old].element = member.clone();
            self.index.insert(member, old);
        }
    }

    fn slot(&self, element: &T) -> Result<usize, UnionFindError> {
        self.index
            .get(element)
            .copied()
            .ok_or_else(|| UnionFindError::UnknownElement(format!("{element:?}")))
    }

    fn find_root(&mut self, start: usize) -> usize {
        let mut root = start;
        while let Some(parent) = self.arena[root].parent {
            root = parent;
        }

        if self.path_compression {
            let mut current = start;
            while let Some(parent) = self.arena[current].parent {
                if parent != root {
                    self.arena[current].parent = Some(root);
                }
                current = parent;
            }
        }
        root
    }
}
