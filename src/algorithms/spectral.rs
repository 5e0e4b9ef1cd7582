//! Laplacian spectra, Fiedler vectors and spectral clustering.
//!
//! ## Purpose
//!
//! This module decomposes a graph Laplacian and reads off the quantities
//! spectral graph theory cares about: the algebraic connectivity (Fiedler
//! value), the Fiedler vector and the sign-based bipartition it induces, the
//! number of connected components, and low-dimensional spectral embeddings.
//!
//! ## Key concepts
//!
//! * Eigenvalues are sorted ascending; the first is always ~0.
//! * The multiplicity of the zero eigenvalue equals the number of connected
//!   components.
//! * The Fiedler vector is the eigenvector of the second-smallest eigenvalue.
//!
//! ## Non-goals
//!
//! * Iterative (Lanczos) solvers for large sparse graphs.
//! * k-way clustering beyond the sign split of the Fiedler vector.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use nalgebra::{DMatrix, Scalar};

// Internal dependencies
use crate::math::linalg::{symmetric_spectrum, FloatLinalg};
use crate::primitives::errors::GlpcaError;

/// Ascending eigendecomposition of a graph Laplacian.
#[derive(Debug, Clone, PartialEq)]
pub struct LaplacianSpectrum<T: Scalar> {
    /// Eigenvalues, ascending.
    pub eigenvalues: Vec<T>,
    /// Eigenvectors as columns, in the order of `eigenvalues`.
    pub eigenvectors: DMatrix<T>,
}

impl<T: FloatLinalg> LaplacianSpectrum<T> {
    /// Decompose a symmetric Laplacian.
    pub fn compute(laplacian: &DMatrix<T>) -> Result<Self, GlpcaError> {
        let (rows, cols) = laplacian.shape();
        if rows != cols {
            return Err(GlpcaError::NotSquare { rows, cols });
        }
        if rows == 0 {
            return Err(GlpcaError::EmptyInput);
        }

        let (eigenvalues, eigenvectors) = symmetric_spectrum(laplacian, "graph Laplacian")?;
        log::debug!(
            "Laplacian spectrum: n={}, min={:?}, max={:?}",
            rows,
            eigenvalues.first(),
            eigenvalues.last()
        );

        Ok(Self {
            eigenvalues,
            eigenvectors,
        })
    }

    /// Number of eigenpairs.
    #[inline]
    pub fn len(&self) -> usize {
        self.eigenvalues.len()
    }

    /// True if the spectrum is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.eigenvalues.is_empty()
    }

    /// Largest eigenvalue.
    pub fn max_eigenvalue(&self) -> T {
        self.eigenvalues.last().copied().unwrap_or_else(T::zero)
    }

    /// Second-smallest eigenvalue (algebraic connectivity).
    pub fn algebraic_connectivity(&self) -> Option<T> {
        self.eigenvalues.get(1).copied()
    }

    /// Eigenvector of the second-smallest eigenvalue.
    pub fn fiedler_vector(&self) -> Option<Vec<T>> {
        if self.len() < 2 {
            return None;
        }
        Some(self.eigenvectors.column(1).iter().copied().collect())
    }

    /// Number of eigenvalues not exceeding `tolerance`, i.e. the number of
    /// connected components of the graph.
    pub fn connected_components(&self, tolerance: T) -> usize {
        self.eigenvalues
            .iter()
            .filter(|&&lambda| lambda.abs() <= tolerance)
            .count()
    }

    /// Split the nodes by the sign of the Fiedler vector.
    ///
    /// Returns `true` for nodes on the non-negative side.
    pub fn bipartition(&self) -> Option<Vec<bool>> {
        self.fiedler_vector()
            .map(|v| v.into_iter().map(|x| x >= T::zero()).collect())
    }

    /// Spectral embedding: eigenvectors `1..=k`, skipping the constant one.
    pub fn embedding(&self, k: usize) -> Result<DMatrix<T>, GlpcaError> {
        let max = self.len().saturating_sub(1);
        if k == 0 || k > max {
            return Err(GlpcaError::InvalidComponents { got: k, max });
        }
        Ok(self.eigenvectors.columns(1, k).into_owned())
    }

    /// Rayleigh quotient `xᵀ L x / xᵀ x` of a signal on the nodes.
    pub fn rayleigh_quotient(laplacian: &DMatrix<T>, x: &[T]) -> Option<T> {
        let n = laplacian.nrows();
        if x.len() != n {
            return None;
        }
        let norm_sq = x.iter().fold(T::zero(), |acc, &v| acc + v * v);
        if norm_sq <= T::zero() {
            return None;
        }
        let mut energy = T::zero();
        for i in 0..n {
            for j in 0..n {
                energy = energy + x[i] * laplacian[(i, j)] * x[j];
            }
        }
        Some(energy / norm_sq)
    }
}
