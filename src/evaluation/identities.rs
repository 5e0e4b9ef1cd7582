//! Definitional identities of the graph Laplacian.
//!
//! ## Purpose
//!
//! For a simple graph the three descriptions of the Laplacian agree:
//!
//! ```text
//! L = D - A = B Bᵀ
//! ```
//!
//! and `L` is symmetric, positive semidefinite, with zero row sums. This
//! module measures how far a set of computed matrices is from each of these
//! facts so that derivations can be checked numerically.

// External dependencies
use nalgebra::DMatrix;

// Internal dependencies
use crate::algorithms::matrices::GraphMatrices;
use crate::algorithms::spectral::LaplacianSpectrum;
use crate::math::linalg::{max_asymmetry, sub, FloatLinalg};
use crate::primitives::errors::GlpcaError;

/// Residuals of the Laplacian identities for one graph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IdentityReport<T> {
    /// `‖L - B Bᵀ‖_F`.
    pub incidence_residual: T,
    /// `‖L - (D - A)‖_F`.
    pub degree_residual: T,
    /// `max |L_ij - L_ji|`.
    pub asymmetry: T,
    /// `max_i |Σ_j L_ij|`.
    pub max_row_sum: T,
    /// Smallest eigenvalue of `L` (non-negative up to rounding).
    pub min_eigenvalue: T,
}

impl<T: FloatLinalg> IdentityReport<T> {
    /// Measure the identities on `matrices`.
    pub fn check(matrices: &GraphMatrices<T>) -> Result<Self, GlpcaError> {
        let l = &matrices.laplacian;
        let n = l.nrows();

        let d_minus_a = DMatrix::from_fn(n, n, |i, j| {
            matrices.degree[(i, j)] - matrices.adjacency[(i, j)]
        });
        let incidence_residual = T::frobenius_norm(&sub(l, &matrices.incidence_gram()));
        let degree_residual = T::frobenius_norm(&sub(l, &d_minus_a));

        let max_row_sum = (0..n).fold(T::zero(), |acc, i| {
            let s = (0..n).fold(T::zero(), |s, j| s + l[(i, j)]);
            acc.max(s.abs())
        });

        let min_eigenvalue = if n == 0 {
            T::zero()
        } else {
            LaplacianSpectrum::compute(l)?
                .eigenvalues
                .first()
                .copied()
                .unwrap_or_else(T::zero)
        };

        let report = Self {
            incidence_residual,
            degree_residual,
            asymmetry: max_asymmetry(l),
            max_row_sum,
            min_eigenvalue,
        };
        log::debug!("Laplacian identities: {:?}", report);
        Ok(report)
    }

    /// True if every identity holds within `tolerance`.
    pub fn holds(&self, tolerance: T) -> bool {
        self.incidence_residual <= tolerance
            && self.degree_residual <= tolerance
            && self.asymmetry <= tolerance
            && self.max_row_sum <= tolerance
            && self.min_eigenvalue >= -tolerance
    }
}

impl<T: FloatLinalg> GraphMatrices<T> {
    /// Check `L = B Bᵀ = D - A`, symmetry, zero row sums and positive semidefiniteness.
    pub fn verify(&self) -> Result<IdentityReport<T>, GlpcaError> {
        IdentityReport::check(self)
    }
}
