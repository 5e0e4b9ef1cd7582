//! Linear algebra backend abstraction for gLPCA.
//!
//! ## Purpose
//!
//! This module bridges generic `Float` code to the nalgebra backend. Generic
//! code only builds, indexes and reshapes `DMatrix<T>`; everything that
//! needs arithmetic on whole matrices (products, norms, eigensolvers) goes
//! through [`FloatLinalg`], which is implemented for `f32` and `f64`.
//!
//! ## Design notes
//!
//! * Eigenpairs are always returned sorted by ascending eigenvalue.
//! * Eigenvectors are sign-fixed: the largest-magnitude entry of each column
//!   is made positive so results are reproducible across runs.
//! * Only the symmetric eigensolver is used; every matrix decomposed here
//!   (Gram matrices, Laplacians, the gLPCA operator) is symmetric.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::Debug;
use nalgebra::{DMatrix, Scalar};
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::GlpcaError;

// ============================================================================
// FloatLinalg Trait
// ============================================================================

/// Helper trait to bridge generic Float types to the nalgebra backend.
pub trait FloatLinalg: Float + Scalar + Debug + Send + Sync + 'static {
    /// Eigendecomposition of a symmetric matrix, ascending, or `None` if the
    /// solver did not converge.
    fn symmetric_eigen(m: &DMatrix<Self>) -> Option<(Vec<Self>, DMatrix<Self>)>;
    /// Dense product `a * b`.
    fn matmul(a: &DMatrix<Self>, b: &DMatrix<Self>) -> DMatrix<Self>;
    /// Dense product `aᵀ * b`.
    fn tr_matmul(a: &DMatrix<Self>, b: &DMatrix<Self>) -> DMatrix<Self>;
    /// Frobenius norm.
    fn frobenius_norm(m: &DMatrix<Self>) -> Self;
}

impl FloatLinalg for f64 {
    #[inline]
    fn symmetric_eigen(m: &DMatrix<Self>) -> Option<(Vec<Self>, DMatrix<Self>)> {
        nalgebra_backend::symmetric_eigen_f64(m)
    }
    #[inline]
    fn matmul(a: &DMatrix<Self>, b: &DMatrix<Self>) -> DMatrix<Self> {
        a * b
    }
    #[inline]
    fn tr_matmul(a: &DMatrix<Self>, b: &DMatrix<Self>) -> DMatrix<Self> {
        a.tr_mul(b)
    }
    #[inline]
    fn frobenius_norm(m: &DMatrix<Self>) -> Self {
        m.norm()
    }
}

impl FloatLinalg for f32 {
    #[inline]
    fn symmetric_eigen(m: &DMatrix<Self>) -> Option<(Vec<Self>, DMatrix<Self>)> {
        nalgebra_backend::symmetric_eigen_f32(m)
    }
    #[inline]
    fn matmul(a: &DMatrix<Self>, b: &DMatrix<Self>) -> DMatrix<Self> {
        a * b
    }
    #[inline]
    fn tr_matmul(a: &DMatrix<Self>, b: &DMatrix<Self>) -> DMatrix<Self> {
        a.tr_mul(b)
    }
    #[inline]
    fn frobenius_norm(m: &DMatrix<Self>) -> Self {
        m.norm()
    }
}

// ============================================================================
// Nalgebra Backend Implementation
// ============================================================================

/// Nalgebra-based linear algebra operations.
pub mod nalgebra_backend {
    use super::*;

    /// Sorted symmetric eigendecomposition using f64 precision.
    pub fn symmetric_eigen_f64(m: &DMatrix<f64>) -> Option<(Vec<f64>, DMatrix<f64>)> {
        let eigen = m.clone().try_symmetric_eigen(f64::EPSILON, 0)?;
        Some(sort_eigenpairs(
            eigen.eigenvalues.as_slice(),
            &eigen.eigenvectors,
        ))
    }

    /// Sorted symmetric eigendecomposition using f32 precision.
    pub fn symmetric_eigen_f32(m: &DMatrix<f32>) -> Option<(Vec<f32>, DMatrix<f32>)> {
        let eigen = m.clone().try_symmetric_eigen(f32::EPSILON, 0)?;
        Some(sort_eigenpairs(
            eigen.eigenvalues.as_slice(),
            &eigen.eigenvectors,
        ))
    }
}

/// Reorder eigenpairs by ascending eigenvalue and fix eigenvector signs.
fn sort_eigenpairs<T: Float + Scalar>(
    values: &[T],
    vectors: &DMatrix<T>,
) -> (Vec<T>, DMatrix<T>) {
    let mut order: Vec<usize> = (0..values.len()).collect();
    order.sort_by(|&a, &b| {
        values[a]
            .partial_cmp(&values[b])
            .unwrap_or(core::cmp::Ordering::Equal)
    });

    let sorted_values = order.iter().map(|&i| values[i]).collect();
    let mut sorted_vectors = DMatrix::from_fn(vectors.nrows(), order.len(), |r, c| {
        vectors[(r, order[c])]
    });
    fix_signs(&mut sorted_vectors);

    (sorted_values, sorted_vectors)
}

/// Flip each column so that its largest-magnitude entry is positive.
pub fn fix_signs<T: Float + Scalar>(vectors: &mut DMatrix<T>) {
    for c in 0..vectors.ncols() {
        let mut pivot = T::zero();
        for r in 0..vectors.nrows() {
            let v = vectors[(r, c)];
            if v.abs() > pivot.abs() {
                pivot = v;
            }
        }
        if pivot < T::zero() {
            for r in 0..vectors.nrows() {
                vectors[(r, c)] = -vectors[(r, c)];
            }
        }
    }
}

// ============================================================================
// Generic Helpers
// ============================================================================

/// Sorted symmetric eigendecomposition, mapping non-convergence to an error.
pub fn symmetric_spectrum<T: FloatLinalg>(
    m: &DMatrix<T>,
    what: &'static str,
) -> Result<(Vec<T>, DMatrix<T>), GlpcaError> {
    T::symmetric_eigen(m).ok_or(GlpcaError::EigenDecompositionFailed(what))
}

/// Largest eigenvalue of a symmetric matrix.
pub fn largest_eigenvalue<T: FloatLinalg>(
    m: &DMatrix<T>,
    what: &'static str,
) -> Result<T, GlpcaError> {
    let (values, _) = symmetric_spectrum(m, what)?;
    Ok(values.last().copied().unwrap_or_else(T::zero))
}

/// Element-wise `a - b` for matrices of equal shape.
pub fn sub<T: Float + Scalar>(a: &DMatrix<T>, b: &DMatrix<T>) -> DMatrix<T> {
    debug_assert_eq!(a.shape(), b.shape());
    DMatrix::from_fn(a.nrows(), a.ncols(), |i, j| a[(i, j)] - b[(i, j)])
}

/// `Tr(Qᵀ M Q)` for a square `M`.
pub fn quadratic_trace<T: FloatLinalg>(q: &DMatrix<T>, m: &DMatrix<T>) -> T {
    let mq = T::matmul(m, q);
    let mut trace = T::zero();
    for c in 0..q.ncols() {
        for r in 0..q.nrows() {
            trace = trace + q[(r, c)] * mq[(r, c)];
        }
    }
    trace
}

/// Largest absolute deviation from symmetry.
pub fn max_asymmetry<T: Float + Scalar>(m: &DMatrix<T>) -> T {
    let n = m.nrows().min(m.ncols());
    let mut worst = T::zero();
    for i in 0..n {
        for j in (i + 1)..n {
            worst = worst.max((m[(i, j)] - m[(j, i)]).abs());
        }
    }
    worst
}
