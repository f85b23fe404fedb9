//! Disjoint-set forest (union-find).
//!
//! Each element maps to exactly one tree node in an arena. A tree node
//! stores its parent index, its rank, and the element it currently
//! represents. Sets are merged by rank. Path compression is optional.
//! [`UnionFind::make_representative`] relabels a set's root without
//! changing the tree's shape.
//!
//! # Safety modes
//!
//! In safe mode, re-adding an existing element is reported as
//! [`UnionFindError::DuplicateElement`](crate::error::UnionFindError).
//! In unsafe mode (the default) it silently replaces the element's
//! mapping with a fresh singleton; the rest of its old set stays
//! together under a new representative when needed. Queries on absent
//! elements fail in both modes.
//!
//! # References
//!
//! - Tarjan (1975), "Efficiency of a Good But Not Linear Set Union Algorithm"

mod forest;

pub use forest::UnionFind;
