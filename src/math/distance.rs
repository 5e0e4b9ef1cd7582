//! Distance metrics between samples.
//!
//! ## Purpose
//!
//! This module measures distances between data samples (columns of the data
//! matrix) when a kNN similarity graph is built from data.
//!
//! ## Invariants
//!
//! * Distance is always non-negative.
//! * Distance is zero for identical samples.
//!
//! ## Non-goals
//!
//! * This module does not turn distances into weights (see `kernel`).

// External dependencies
use nalgebra::{DMatrix, Scalar};
use num_traits::Float;

// ============================================================================
// Distance Metric Enum
// ============================================================================

/// Distance metric used for neighbour search.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DistanceMetric<T> {
    /// Euclidean distance: √(Σ(xᵢ - yᵢ)²)
    #[default]
    Euclidean,

    /// Manhattan distance (L1 norm): Σ|xᵢ - yᵢ|
    Manhattan,

    /// Chebyshev distance (L∞ norm): max|xᵢ - yᵢ|
    Chebyshev,

    /// Minkowski distance (Lp norm): (Σ|xᵢ - yᵢ|^p)^(1/p), p >= 1.
    Minkowski(T),
}

impl<T: Float + Scalar> DistanceMetric<T> {
    /// Distance between columns `a` and `b` of `x`.
    pub fn between_columns(&self, x: &DMatrix<T>, a: usize, b: usize) -> T {
        let diffs = (0..x.nrows()).map(|r| (x[(r, a)] - x[(r, b)]).abs());
        match *self {
            Self::Euclidean => diffs.fold(T::zero(), |acc, d| acc + d * d).sqrt(),
            Self::Manhattan => diffs.fold(T::zero(), |acc, d| acc + d),
            Self::Chebyshev => diffs.fold(T::zero(), |acc, d| acc.max(d)),
            Self::Minkowski(p) => diffs
                .fold(T::zero(), |acc, d| acc + d.powf(p))
                .powf(T::one() / p),
        }
    }

    /// Full symmetric `n x n` distance matrix between the columns of `x`.
    pub fn pairwise(&self, x: &DMatrix<T>) -> DMatrix<T> {
        let n = x.ncols();
        let mut out = DMatrix::from_element(n, n, T::zero());
        for i in 0..n {
            for j in (i + 1)..n {
                let d = self.between_columns(x, i, j);
                out[(i, j)] = d;
                out[(j, i)] = d;
            }
        }
        out
    }
}
