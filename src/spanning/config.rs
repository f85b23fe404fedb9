//! Spanning-tree configuration.

use std::collections::HashSet;

use crate::error::Result;
use crate::graph::{EdgeId, NodeId};
use crate::scalar::validate_coefficients;

/// Configuration for [`PrimRunner`](super::PrimRunner).
///
/// The root is chosen as follows:
/// 1. `root`, if set
/// 2. a seeded random node, if `seed` is set
/// 3. otherwise the first live node
///
/// # Examples
///
/// ```
/// use u_mograph::spanning::PrimConfig;
///
/// let config = PrimConfig::default().with_seed(42);
/// assert!(config.root.is_none());
/// assert_eq!(config.seed, Some(42));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PrimConfig {
    /// Node the tree grows from.
    pub root: Option<NodeId>,

    /// Seed for picking a random root when `root` is `None`.
    pub seed: Option<u64>,

    /// Scalarization coefficients; `None` sums the components.
    pub coefficients: Option<Vec<f64>>,
}

impl PrimConfig {
    /// Sets the root node.
    pub fn with_root(mut self, root: NodeId) -> Self {
        self.root = Some(root);
        self
    }

    /// Sets the seed used to pick a random root.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the scalarization coefficients.
    pub fn with_coefficients(mut self, coefficients: Vec<f64>) -> Self {
        self.coefficients = Some(coefficients);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        validate_coefficients(self.coefficients.as_deref())
    }
}

/// Configuration for [`KruskalRunner`](super::KruskalRunner).
///
/// Banned edges are never considered. Forced edges are offered first, in
/// the given order. An edge that is both forced and banned counts as banned.
///
/// # Examples
///
/// ```
/// use u_mograph::graph::EdgeId;
/// use u_mograph::spanning::KruskalConfig;
///
/// let config = KruskalConfig::default()
///     .with_forced(vec![EdgeId::new(3)])
///     .with_banned([EdgeId::new(1)]);
/// assert!(config.banned.contains(&EdgeId::new(1)));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KruskalConfig {
    /// Edges inserted before any other, in order.
    pub forced: Vec<EdgeId>,

    /// Edges removed from consideration.
    pub banned: HashSet<EdgeId>,

    /// Scalarization coefficients; `None` sums the components.
    pub coefficients: Option<Vec<f64>>,

    /// Whether the internal union-find runs in safe mode.
    pub safe_union_find: bool,
}

impl KruskalConfig {
    /// Sets the forced edges.
    pub fn with_forced(mut self, forced: Vec<EdgeId>) -> Self {
        self.forced = forced;
        self
    }

    /// Sets the banned edges.
    pub fn with_banned<I: IntoIterator<Item = EdgeId>>(mut self, banned: I) -> Self {
        self.banned = banned.into_iter().collect();
        self
    }

    /// Sets the scalarization coefficients.
    pub fn with_coefficients(mut self, coefficients: Vec<f64>) -> Self {
        self.coefficients = Some(coefficients);
        self
    }

    /// Enables or disables union-find safe mode.
    pub fn with_safe_union_find(mut self, safe: bool) -> Self {
        self.safe_union_find = safe;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        validate_coefficients(self.coefficients.as_deref())
    }
}
