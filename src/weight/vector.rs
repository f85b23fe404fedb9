//! Fixed-dimension cost vectors.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub};

/// Outcome of a Pareto dominance comparison `a.dominates(&b)`.
///
/// Exactly one of the four outcomes holds for any pair of equal-length
/// vectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Dominance {
    /// All components are equal.
    Equal,
    /// `a <= b` componentwise with at least one strict inequality.
    ParetoSmaller,
    /// `a >= b` componentwise with at least one strict inequality.
    ParetoGreater,
    /// Each vector is strictly better in some component.
    Uncomparable,
}

impl Dominance {
    /// The outcome with the roles of `a` and `b` swapped.
    pub fn reverse(self) -> Self {
        match self {
            Dominance::ParetoSmaller => Dominance::ParetoGreater,
            Dominance::ParetoGreater => Dominance::ParetoSmaller,
            other => other,
        }
    }
}

/// A real-valued cost vector of fixed dimension.
///
/// The dimension is set at construction and never changes. Binary
/// operations require both operands to share it.
///
/// # Examples
///
/// ```
/// use u_mograph::weight::{Dominance, Weight};
///
/// let a = Weight::from([3.0, 12.0]);
/// let b = Weight::from([4.0, 6.0]);
///
/// assert_eq!(a.add(&b), Weight::from([7.0, 18.0]));
/// assert_eq!(a.dominates(&b), Dominance::Uncomparable);
/// assert_eq!(a.dominates(&a.add(&b)), Dominance::ParetoSmaller);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Weight {
    values: Vec<f64>,
}

impl Weight {
    /// Creates a weight from its components.
    ///
    /// # Panics
    /// Panics if `values` is empty.
    pub fn new(values: Vec<f64>) -> Self {
        assert!(!values.is_empty(), "weight dimension must be at least 1");
        Self { values }
    }

    /// The zero vector of the given dimension.
    ///
    /// # Panics
    /// Panics if `dim` is 0.
    pub fn zeros(dim: usize) -> Self {
        Self::new(vec![0.0; dim])
    }

    /// Number of components.
    pub fn dim(&self) -> usize {
        self.values.len()
    }

    /// Components as a slice.
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// Iterates over the components.
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().copied()
    }

    /// Whether every component is exactly zero.
    pub fn is_zero(&self) -> bool {
        self.values.iter().all(|&v| v == 0.0)
    }

    /// Sum of the components.
    pub fn sum(&self) -> f64 {
        self.values.iter().sum()
    }

    /// Componentwise sum.
    ///
    /// # Panics
    /// Panics if the dimensions differ.
    pub fn add(&self, other: &Weight) -> Weight {
        self.check_dim(other, "add");
        Weight {
            values: self
                .values
                .iter()
                .zip(&other.values)
                .map(|(a, b)| a + b)
                .collect(),
        }
    }

    /// Componentwise difference `self - other`.
    ///
    /// # Panics
    /// Panics if the dimensions differ.
    pub fn sub(&self, other: &Weight) -> Weight {
        self.check_dim(other, "sub");
        Weight {
            values: self
                .values
                .iter()
                .zip(&other.values)
                .map(|(a, b)| a - b)
                .collect(),
        }
    }

    /// Adds `other` into `self` without allocating.
    ///
    /// # Panics
    /// Panics if the dimensions differ.
    pub fn add_assign(&mut self, other: &Weight) {
        self.check_dim(other, "add_assign");
        for (a, b) in self.values.iter_mut().zip(&other.values) {
            *a += b;
        }
    }

    /// Multiplies every component by `s`.
    pub fn scale(&self, s: f64) -> Weight {
        Weight {
            values: self.values.iter().map(|v| v * s).collect(),
        }
    }

    /// Multiplies every component by `s` in place.
    pub fn scale_in_place(&mut self, s: f64) {
        for v in &mut self.values {
            *v *= s;
        }
    }

    /// Dot product with a coefficient vector.
    ///
    /// # Panics
    /// Panics if `coeffs.len()` differs from the dimension.
    pub fn scalarize(&self, coeffs: &[f64]) -> f64 {
        assert_eq!(
            coeffs.len(),
            self.values.len(),
            "dimension mismatch in scalarize"
        );
        self.values.iter().zip(coeffs).map(|(v, c)| v * c).sum()
    }

    /// Classifies `self` against `other` under Pareto dominance.
    ///
    /// Components are compared exactly; there is no tolerance.
    ///
    /// # Panics
    /// Panics if the dimensions differ.
    pub fn dominates(&self, other: &Weight) -> Dominance {
        self.check_dim(other, "dominates");
        let mut self_better_in_some = false;
        let mut other_better_in_some = false;

        for (&a, &b) in self.values.iter().zip(&other.values) {
            if a < b {
                self_better_in_some = true;
            } else if b < a {
                other_better_in_some = true;
            }
        }

        match (self_better_in_some, other_better_in_some) {
            (false, false) => Dominance::Equal,
            (true, false) => Dominance::ParetoSmaller,
            (false, true) => Dominance::ParetoGreater,
            (true, true) => Dominance::Uncomparable,
        }
    }

    /// Lexicographic order on components, first component most significant.
    ///
    /// Ties are decided by exact equality; no per-dimension tolerance is
    /// applied.
    ///
    /// # Panics
    /// Panics if the dimensions differ.
    pub fn lex_cmp(&self, other: &Weight) -> Ordering {
        self.check_dim(other, "lex_cmp");
        self.values
            .iter()
            .zip(&other.values)
            .map(|(a, b)| a.total_cmp(b))
            .find(|o| o.is_ne())
            .unwrap_or(Ordering::Equal)
    }

    pub(crate) fn key(&self) -> WeightKey {
        // +0.0 folds negative zero into positive zero.
        WeightKey(self.values.iter().map(|v| (v + 0.0).to_bits()).collect())
    }

    fn check_dim(&self, other: &Weight, op: &str) {
        assert_eq!(
            self.values.len(),
            other.values.len(),
            "dimension mismatch in {op}"
        );
    }
}

/// Hashable bit-exact image of a [`Weight`], used for memo tables.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct WeightKey(Vec<u64>);

impl From<Vec<f64>> for Weight {
    fn from(values: Vec<f64>) -> Self {
        Weight::new(values)
    }
}

impl<const N: usize> From<[f64; N]> for Weight {
    fn from(values: [f64; N]) -> Self {
        Weight::new(values.to_vec())
    }
}

impl Add<&Weight> for &Weight {
    type Output = Weight;

    fn add(self, rhs: &Weight) -> Weight {
        Weight::add(self, rhs)
    }
}

impl Sub<&Weight> for &Weight {
    type Output = Weight;

    fn sub(self, rhs: &Weight) -> Weight {
        Weight::sub(self, rhs)
    }
}

impl AddAssign<&Weight> for Weight {
    fn add_assign(&mut self, rhs: &Weight) {
        Weight::add_assign(self, rhs);
    }
}

impl Mul<f64> for &Weight {
    type Output = Weight;

    fn mul(self, rhs: f64) -> Weight {
        self.scale(rhs)
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, v) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{v}")?;
        }
        write!(f, ")")
    }
}
