//! Output types for gLPCA fits.
//!
//! ## Purpose
//!
//! This module defines the result structures returned by the adapters and
//! their human-readable `Display` formatting.
//!
//! ## Key concepts
//!
//! * **`GlpcaResult`**: one fit at one `β`: embedding `Q`, projection `U`,
//!   mean, selected eigenvalues, error metrics and optional diagnostics.
//! * **`SweepResult`**: one row of scores per `β` of a sweep.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Display, Formatter, Result};
use nalgebra::DMatrix;

// Internal dependencies
use crate::algorithms::matrices::LaplacianKind;
use crate::engine::executor::{GlpcaProblem, GlpcaSolution};
use crate::evaluation::diagnostics::Diagnostics;
use crate::math::centering::uncenter_rows;
use crate::math::linalg::FloatLinalg;

// ============================================================================
// Single Fit
// ============================================================================

/// Result of a gLPCA fit.
#[derive(Debug, Clone, PartialEq)]
pub struct GlpcaResult<T: FloatLinalg> {
    /// Embedding `Q` (n samples x k), orthonormal columns.
    pub embedding: DMatrix<T>,
    /// Projection `U = X̃ Q` (p features x k).
    pub projection: DMatrix<T>,
    /// Per-feature means subtracted before fitting.
    pub mean: Vec<T>,
    /// The `k` smallest eigenvalues of `G_β`, ascending.
    pub eigenvalues: Vec<T>,
    /// Mixing parameter.
    pub beta: T,
    /// Equivalent trace-term weight; `None` at `β = 1`.
    pub alpha: Option<T>,
    /// Largest eigenvalue of `X̃ᵀ X̃`.
    pub lambda_max: T,
    /// Largest eigenvalue of the graph Laplacian.
    pub xi_max: T,
    /// Laplacian built from the similarity matrix.
    pub laplacian_kind: LaplacianKind,
    /// `‖X̃ - X̃ Q Qᵀ‖_F / ‖X̃‖_F`.
    pub reconstruction_error: T,
    /// `‖X̃ - U Qᵀ‖²_F + α Tr(Qᵀ L Q)`; `None` when `α` is undefined.
    pub objective: Option<T>,
    /// Optional diagnostics.
    pub diagnostics: Option<Diagnostics<T>>,
}

impl<T: FloatLinalg> GlpcaResult<T> {
    /// Assemble a result from a prepared problem and one of its solutions.
    pub(crate) fn from_solution(
        problem: &GlpcaProblem<T>,
        solution: GlpcaSolution<T>,
        laplacian_kind: LaplacianKind,
    ) -> Self {
        Self {
            embedding: solution.embedding,
            projection: solution.projection,
            mean: problem.mean.clone(),
            eigenvalues: solution.eigenvalues,
            beta: solution.beta,
            alpha: solution.alpha,
            lambda_max: problem.lambda_max,
            xi_max: problem.xi_max,
            laplacian_kind,
            reconstruction_error: solution.reconstruction_error,
            objective: solution.objective,
            diagnostics: solution.diagnostics,
        }
    }

    /// Number of samples.
    #[inline]
    pub fn n_samples(&self) -> usize {
        self.embedding.nrows()
    }

    /// Number of features.
    #[inline]
    pub fn n_features(&self) -> usize {
        self.projection.nrows()
    }

    /// Number of components.
    #[inline]
    pub fn components(&self) -> usize {
        self.embedding.ncols()
    }

    /// Low-rank reconstruction of the data, `U Qᵀ + mean` (p x n).
    pub fn reconstruct(&self) -> DMatrix<T> {
        let low_rank = T::matmul(&self.projection, &self.embedding.transpose());
        uncenter_rows(&low_rank, &self.mean)
    }
}

impl<T: FloatLinalg> Display for GlpcaResult<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let as_f64 = |v: T| v.to_f64().unwrap_or(f64::NAN);

        writeln!(f, "Summary:")?;
        writeln!(f, "  Samples:    {}", self.n_samples())?;
        writeln!(f, "  Features:   {}", self.n_features())?;
        writeln!(f, "  Components: {}", self.components())?;
        writeln!(f, "  Beta:       {}", as_f64(self.beta))?;
        match self.alpha {
            Some(a) => writeln!(f, "  Alpha:      {:.6}", as_f64(a))?,
            None => writeln!(f, "  Alpha:      inf")?,
        }
        writeln!(f, "  Laplacian:  {:?}", self.laplacian_kind)?;
        writeln!(
            f,
            "  Reconstruction error: {:.6}",
            as_f64(self.reconstruction_error)
        )?;
        if let Some(obj) = self.objective {
            writeln!(f, "  Objective:            {:.6}", as_f64(obj))?;
        }
        writeln!(f)?;

        if let Some(diag) = &self.diagnostics {
            writeln!(f, "{}", diag)?;
            writeln!(f)?;
        }

        writeln!(f, "Embedding (Q):")?;
        write!(f, "  {:>6}", "Sample")?;
        for c in 0..self.components() {
            write!(f, " {:>12}", format!("Q{}", c + 1))?;
        }
        writeln!(f)?;
        writeln!(f, "  {}", "-".repeat(7 + 13 * self.components()))?;
        for r in 0..self.n_samples() {
            write!(f, "  {:>6}", r)?;
            for c in 0..self.components() {
                write!(f, " {:>12.6}", as_f64(self.embedding[(r, c)]))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

// ============================================================================
// Beta Sweep
// ============================================================================

/// Scores of one `β` in a sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepPoint<T> {
    /// Mixing parameter.
    pub beta: T,
    /// Equivalent trace-term weight; `None` at `β = 1`.
    pub alpha: Option<T>,
    /// `‖X̃ - X̃ Q Qᵀ‖_F / ‖X̃‖_F`.
    pub reconstruction_error: T,
    /// `Tr(Qᵀ L Q)`.
    pub graph_smoothness: T,
    /// Objective value when `α` is defined.
    pub objective: Option<T>,
}

/// Result of a `β` sweep.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepResult<T: FloatLinalg> {
    /// Number of components used at every `β`.
    pub components: usize,
    /// One entry per `β`, in the order given.
    pub points: Vec<SweepPoint<T>>,
    /// Full fits, when requested.
    pub fits: Option<Vec<GlpcaResult<T>>>,
}

impl<T: FloatLinalg> SweepResult<T> {
    /// The point with the smallest reconstruction error.
    pub fn best_reconstruction(&self) -> Option<&SweepPoint<T>> {
        self.points.iter().min_by(|a, b| {
            a.reconstruction_error
                .partial_cmp(&b.reconstruction_error)
                .unwrap_or(core::cmp::Ordering::Equal)
        })
    }

    /// The point with the smallest graph smoothness term.
    pub fn smoothest(&self) -> Option<&SweepPoint<T>> {
        self.points.iter().min_by(|a, b| {
            a.graph_smoothness
                .partial_cmp(&b.graph_smoothness)
                .unwrap_or(core::cmp::Ordering::Equal)
        })
    }
}

impl<T: FloatLinalg> Display for SweepResult<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let as_f64 = |v: T| v.to_f64().unwrap_or(f64::NAN);

        writeln!(f, "Beta Sweep ({} components):", self.components)?;
        writeln!(
            f,
            "  {:>8} {:>14} {:>14} {:>14} {:>14}",
            "Beta", "Alpha", "Recon_Error", "Smoothness", "Objective"
        )?;
        writeln!(f, "  {}", "-".repeat(68))?;
        for p in &self.points {
            write!(f, "  {:>8.3}", as_f64(p.beta))?;
            match p.alpha {
                Some(a) => write!(f, " {:>14.6}", as_f64(a))?,
                None => write!(f, " {:>14}", "inf")?,
            }
            write!(
                f,
                " {:>14.6} {:>14.6}",
                as_f64(p.reconstruction_error),
                as_f64(p.graph_smoothness)
            )?;
            match p.objective {
                Some(o) => writeln!(f, " {:>14.6}", as_f64(o))?,
                None => writeln!(f, " {:>14}", "-")?,
            }
        }
        Ok(())
    }
}
