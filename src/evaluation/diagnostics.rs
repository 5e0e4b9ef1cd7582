//! Fit diagnostics for gLPCA.
//!
//! ## Purpose
//!
//! This module scores a gLPCA embedding `Q` against the centered data `X̃`
//! and the graph Laplacian `L`:
//!
//! * **Reconstruction error** `‖X̃ - X̃ Q Qᵀ‖_F / ‖X̃‖_F`, in [0, 1] for
//!   orthonormal `Q`.
//! * **Objective** `‖X̃ - U Qᵀ‖²_F + α Tr(Qᵀ L Q)` with `U = X̃ Q`.
//! * **Graph smoothness** `Tr(Qᵀ L Q)`: small when the embedding varies
//!   slowly along graph edges.
//! * **Explained variance** `‖X̃ Q‖²_F / ‖X̃‖²_F`.
//! * **Orthogonality residual** `‖Qᵀ Q - I‖_F`.
//!
//! ## Invariants
//!
//! * For orthonormal `Q`: `explained_variance + reconstruction_error² = 1`.

// External dependencies
use core::fmt::{Display, Formatter, Result};
use nalgebra::DMatrix;

// Internal dependencies
use crate::math::linalg::{quadratic_trace, sub, FloatLinalg};

/// Relative reconstruction error `‖X̃ - X̃ Q Qᵀ‖_F / ‖X̃‖_F`.
pub fn reconstruction_error<T: FloatLinalg>(centered: &DMatrix<T>, q: &DMatrix<T>) -> T {
    let norm = T::frobenius_norm(centered);
    if norm <= T::zero() {
        return T::zero();
    }
    let projected = T::matmul(&T::matmul(centered, q), &q.transpose());
    T::frobenius_norm(&sub(centered, &projected)) / norm
}

/// gLPCA objective `‖X̃ - U Qᵀ‖²_F + α Tr(Qᵀ L Q)`.
pub fn objective<T: FloatLinalg>(
    centered: &DMatrix<T>,
    projection: &DMatrix<T>,
    q: &DMatrix<T>,
    laplacian: &DMatrix<T>,
    alpha: T,
) -> T {
    let residual = T::frobenius_norm(&sub(centered, &T::matmul(projection, &q.transpose())));
    residual * residual + alpha * quadratic_trace(q, laplacian)
}

/// Diagnostic statistics of one gLPCA fit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Diagnostics<T> {
    /// `Tr(Qᵀ L Q)`.
    pub graph_smoothness: T,
    /// `‖X̃ Q‖²_F / ‖X̃‖²_F`.
    pub explained_variance: T,
    /// `‖Qᵀ Q - I‖_F`.
    pub orthogonality_residual: T,
}

impl<T: FloatLinalg> Diagnostics<T> {
    /// Compute diagnostics for embedding `q`.
    pub fn compute(centered: &DMatrix<T>, q: &DMatrix<T>, laplacian: &DMatrix<T>) -> Self {
        let total = T::frobenius_norm(centered);
        let captured = T::frobenius_norm(&T::matmul(centered, q));
        let explained_variance = if total > T::zero() {
            (captured * captured) / (total * total)
        } else {
            T::zero()
        };

        let k = q.ncols();
        let gram = T::tr_matmul(q, q);
        let identity = DMatrix::from_fn(k, k, |i, j| if i == j { T::one() } else { T::zero() });

        Self {
            graph_smoothness: quadratic_trace(q, laplacian),
            explained_variance,
            orthogonality_residual: T::frobenius_norm(&sub(&gram, &identity)),
        }
    }
}

impl<T: FloatLinalg> Display for Diagnostics<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "gLPCA Diagnostics:")?;
        writeln!(
            f,
            "  Graph smoothness:   {:.6}",
            self.graph_smoothness.to_f64().unwrap_or(f64::NAN)
        )?;
        writeln!(
            f,
            "  Explained variance: {:.6}",
            self.explained_variance.to_f64().unwrap_or(f64::NAN)
        )?;
        write!(
            f,
            "  Orthogonality:      {:.2e}",
            self.orthogonality_residual.to_f64().unwrap_or(f64::NAN)
        )
    }
}
