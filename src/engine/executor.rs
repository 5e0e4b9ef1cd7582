//! Execution engine for Graph-Laplacian PCA.
//!
//! ## Purpose
//!
//! This module solves gLPCA in closed form. Given a data matrix `X`
//! (p features x n samples) and a similarity matrix `W` over the samples,
//! gLPCA minimizes
//!
//! ```text
//! ‖X̃ - U Qᵀ‖²_F + α Tr(Qᵀ L Q)    subject to  Qᵀ Q = I
//! ```
//!
//! Eliminating `U = X̃ Q` leaves `min Tr(Qᵀ (-X̃ᵀX̃ + α L) Q)`, whose solution
//! is the `k` smallest eigenvectors of that matrix. With the normalized
//! mixing parameter `β ∈ [0, 1]` the operator becomes
//!
//! ```text
//! G_β = (1 - β) (I - X̃ᵀX̃ / λ_n) + β L / ξ_n
//! α   = β / (1 - β) · λ_n / ξ_n
//! ```
//!
//! where `λ_n` and `ξ_n` are the largest eigenvalues of `X̃ᵀX̃` and `L`.
//! `β = 0` is standard PCA, `β = 1` is Laplacian embedding.
//!
//! ## Design notes
//!
//! * Work that does not depend on `β` (centering, Gram matrix, Laplacian,
//!   `λ_n`, `ξ_n`) is done once in [`GlpcaProblem::prepare`]; each
//!   [`GlpcaProblem::solve`] is then one eigendecomposition.
//! * Eigenvectors are sign-fixed so results are reproducible.
//!
//! ## Invariants
//!
//! * `Q` has orthonormal columns.
//! * `G_β` is symmetric with spectrum in `[-(1 - β), 1]` up to rounding.
//!
//! ## Non-goals
//!
//! * This module does not validate input data (handled by `validator`).
//! * Robust (L21) variants and out-of-sample projection.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use nalgebra::DMatrix;

// Internal dependencies
use crate::algorithms::matrices::{laplacian_from_similarity, LaplacianKind};
use crate::evaluation::diagnostics::{objective, reconstruction_error, Diagnostics};
use crate::math::centering::center_rows;
use crate::math::linalg::{largest_eigenvalue, symmetric_spectrum, FloatLinalg};
use crate::primitives::errors::GlpcaError;

// ============================================================================
// Configuration
// ============================================================================

/// Problem-level configuration, independent of `β` and `k`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlpcaConfig {
    /// Subtract per-feature means before fitting.
    pub center: bool,
    /// Laplacian built from the similarity matrix.
    pub laplacian_kind: LaplacianKind,
}

impl Default for GlpcaConfig {
    fn default() -> Self {
        Self {
            center: true,
            laplacian_kind: LaplacianKind::default(),
        }
    }
}

// ============================================================================
// Prepared Problem
// ============================================================================

/// A gLPCA problem with every `β`-independent quantity precomputed.
#[derive(Debug, Clone)]
pub struct GlpcaProblem<T: FloatLinalg> {
    /// Centered data `X̃` (p x n).
    pub centered: DMatrix<T>,
    /// Per-feature means (zeros when centering is disabled).
    pub mean: Vec<T>,
    /// Gram matrix `X̃ᵀ X̃` (n x n).
    pub gram: DMatrix<T>,
    /// Graph Laplacian of `W` (n x n).
    pub laplacian: DMatrix<T>,
    /// Largest eigenvalue of the Gram matrix.
    pub lambda_max: T,
    /// Largest eigenvalue of the Laplacian.
    pub xi_max: T,
    has_graph: bool,
}

/// Solution of a prepared problem for one `β`.
#[derive(Debug, Clone)]
pub struct GlpcaSolution<T: FloatLinalg> {
    /// Mixing parameter used.
    pub beta: T,
    /// Equivalent weight of the trace term, undefined at `β = 1`.
    pub alpha: Option<T>,
    /// Embedding `Q` (n x k), orthonormal columns.
    pub embedding: DMatrix<T>,
    /// Projection `U = X̃ Q` (p x k).
    pub projection: DMatrix<T>,
    /// The `k` smallest eigenvalues of `G_β`, ascending.
    pub eigenvalues: Vec<T>,
    /// `‖X̃ - X̃ Q Qᵀ‖_F / ‖X̃‖_F`.
    pub reconstruction_error: T,
    /// Objective value, when `α` is defined.
    pub objective: Option<T>,
    /// Optional fit diagnostics.
    pub diagnostics: Option<Diagnostics<T>>,
}

impl<T: FloatLinalg> GlpcaProblem<T> {
    /// Precompute everything that does not depend on `β`.
    pub fn prepare(
        x: &DMatrix<T>,
        w: &DMatrix<T>,
        config: &GlpcaConfig,
    ) -> Result<Self, GlpcaError> {
        let (p, n) = x.shape();
        log::trace!("preparing gLPCA problem: {} features, {} samples", p, n);

        let (centered, mean) = if config.center {
            center_rows(x)
        } else {
            (x.clone(), vec![T::zero(); p])
        };

        // Centering a constant row leaves rounding noise of order n·ε·|x|.
        let noise_floor = T::epsilon() * T::from(n).unwrap() * T::frobenius_norm(x);
        if T::frobenius_norm(&centered) <= noise_floor {
            return Err(GlpcaError::DegenerateData);
        }

        let gram = T::tr_matmul(&centered, &centered);
        let lambda_max = largest_eigenvalue(&gram, "Gram matrix")?;
        if lambda_max <= T::zero() {
            return Err(GlpcaError::DegenerateData);
        }

        let laplacian = laplacian_from_similarity(w, config.laplacian_kind);
        let (xi, _) = symmetric_spectrum(&laplacian, "graph Laplacian")?;
        let xi_max = xi.last().copied().unwrap_or_else(T::zero).max(T::zero());
        let has_graph = has_positive_weight(w) && xi_max > T::zero();

        // Relative to ξ_n: rescaling W must not change the component count.
        let zero_tol = T::epsilon().sqrt() * xi_max;
        let components = xi.iter().filter(|&&v| v.abs() <= zero_tol).count();
        if has_graph && components > 1 {
            log::warn!(
                "similarity graph has {} connected components; the graph term cannot separate them",
                components
            );
        }

        log::debug!(
            "gLPCA problem: lambda_max={:?}, xi_max={:?}",
            lambda_max,
            xi_max
        );

        Ok(Self {
            centered,
            mean,
            gram,
            laplacian,
            lambda_max,
            xi_max,
            has_graph,
        })
    }

    /// Number of samples.
    #[inline]
    pub fn n_samples(&self) -> usize {
        self.gram.nrows()
    }

    /// True if the similarity graph has at least one edge.
    #[inline]
    pub fn has_graph(&self) -> bool {
        self.has_graph
    }

    /// The gLPCA operator `G_β`.
    pub fn operator(&self, beta: T) -> Result<DMatrix<T>, GlpcaError> {
        if beta > T::zero() && !self.has_graph() {
            return Err(GlpcaError::EmptyGraph);
        }

        let n = self.n_samples();
        let data_weight = (T::one() - beta) / self.lambda_max;
        let graph_weight = if beta > T::zero() {
            beta / self.xi_max
        } else {
            T::zero()
        };

        Ok(DMatrix::from_fn(n, n, |i, j| {
            let identity = if i == j { T::one() - beta } else { T::zero() };
            identity - data_weight * self.gram[(i, j)] + graph_weight * self.laplacian[(i, j)]
        }))
    }

    /// `α = β / (1 - β) · λ_n / ξ_n`, or `None` at `β = 1`.
    pub fn alpha(&self, beta: T) -> Option<T> {
        if beta >= T::one() {
            return None;
        }
        if beta <= T::zero() {
            return Some(T::zero());
        }
        if !self.has_graph() {
            return None;
        }
        Some(beta / (T::one() - beta) * self.lambda_max / self.xi_max)
    }

    /// Solve for `k` components at mixing parameter `beta`.
    pub fn solve(
        &self,
        beta: T,
        k: usize,
        with_diagnostics: bool,
    ) -> Result<GlpcaSolution<T>, GlpcaError> {
        let g = self.operator(beta)?;
        let (values, vectors) = symmetric_spectrum(&g, "gLPCA operator")?;

        let embedding = vectors.columns(0, k).into_owned();
        let eigenvalues: Vec<T> = values.into_iter().take(k).collect();
        let projection = T::matmul(&self.centered, &embedding);

        let alpha = self.alpha(beta);
        let reconstruction_error = reconstruction_error(&self.centered, &embedding);
        let objective = alpha.map(|a| {
            objective(
                &self.centered,
                &projection,
                &embedding,
                &self.laplacian,
                a,
            )
        });
        let diagnostics = if with_diagnostics {
            Some(Diagnostics::compute(
                &self.centered,
                &embedding,
                &self.laplacian,
            ))
        } else {
            None
        };

        log::debug!(
            "gLPCA solve: beta={:?}, k={}, eigenvalues={:?}, error={:?}",
            beta,
            k,
            eigenvalues,
            reconstruction_error
        );

        Ok(GlpcaSolution {
            beta,
            alpha,
            embedding,
            projection,
            eigenvalues,
            reconstruction_error,
            objective,
            diagnostics,
        })
    }
}

/// Any positive weight off the diagonal of `W`.
fn has_positive_weight<T: FloatLinalg>(w: &DMatrix<T>) -> bool {
    let n = w.nrows();
    (0..n).any(|i| (0..n).any(|j| i != j && w[(i, j)] > T::zero()))
}
