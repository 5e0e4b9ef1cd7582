//! Feature centering for data matrices.
//!
//! ## Purpose
//!
//! gLPCA works on the centered data matrix `X̃ = X - μ 1ᵀ`, where `X` holds
//! one sample per column and `μ` is the vector of per-feature (row) means.
//!
//! ## Invariants
//!
//! * Every row of the centered matrix sums to zero (up to rounding).
//! * The returned mean has one entry per feature (row).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use nalgebra::{DMatrix, Scalar};
use num_traits::Float;

/// Subtract the per-feature mean from every sample.
///
/// Returns the centered matrix and the row means.
pub fn center_rows<T: Float + Scalar>(x: &DMatrix<T>) -> (DMatrix<T>, Vec<T>) {
    let (p, n) = x.shape();
    if n == 0 {
        return (x.clone(), vec![T::zero(); p]);
    }

    let n_t = T::from(n).unwrap();
    let means: Vec<T> = (0..p)
        .map(|i| (0..n).fold(T::zero(), |acc, j| acc + x[(i, j)]) / n_t)
        .collect();

    let centered = DMatrix::from_fn(p, n, |i, j| x[(i, j)] - means[i]);
    (centered, means)
}

/// Add `means` back to every column of `x`.
pub fn uncenter_rows<T: Float + Scalar>(x: &DMatrix<T>, means: &[T]) -> DMatrix<T> {
    debug_assert_eq!(x.nrows(), means.len());
    DMatrix::from_fn(x.nrows(), x.ncols(), |i, j| x[(i, j)] + means[i])
}
