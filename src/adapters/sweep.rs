//! Sweep adapter: gLPCA over a grid of mixing parameters.
//!
//! ## Purpose
//!
//! The interesting behaviour of gLPCA lies between its two limits, PCA
//! (`β = 0`) and Laplacian embedding (`β = 1`). This adapter fits the same
//! data and graph for a whole grid of `β` values and reports, for each, the
//! reconstruction error and the graph smoothness of the embedding.
//!
//! ## Design notes
//!
//! * The problem is prepared once; each `β` costs one eigendecomposition.
//! * Points are returned in the order of the grid, duplicates included.
//!
//! ## Invariants
//!
//! * Every `β` of the grid lies in [0, 1]; the grid is non-empty.
//!
//! ## Non-goals
//!
//! * Choosing a `β` automatically: the two scores pull in opposite directions.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use nalgebra::DMatrix;

// Internal dependencies
use crate::algorithms::matrices::LaplacianKind;
use crate::engine::executor::{GlpcaConfig, GlpcaProblem};
use crate::engine::output::{GlpcaResult, SweepPoint, SweepResult};
use crate::engine::validator::Validator;
use crate::math::linalg::{quadratic_trace, FloatLinalg};
use crate::primitives::errors::GlpcaError;

// ============================================================================
// Sweep gLPCA Builder
// ============================================================================

/// Builder for the sweep gLPCA processor.
#[derive(Debug, Clone)]
pub struct SweepGlpcaBuilder<T: FloatLinalg> {
    /// Grid of mixing parameters.
    pub betas: Vec<T>,

    /// Number of components k.
    pub components: usize,

    /// Subtract per-feature means before fitting.
    pub center: bool,

    /// Laplacian built from the similarity matrix.
    pub laplacian_kind: LaplacianKind,

    /// Symmetry tolerance for the similarity matrix.
    pub symmetry_tolerance: T,

    /// Whether to compute diagnostics for every fit.
    pub return_diagnostics: bool,

    /// Whether to keep the full fit for every beta.
    pub return_fits: bool,

    /// Tracks if any parameter was set multiple times (for validation)
    #[doc(hidden)]
    pub(crate) duplicate_param: Option<&'static str>,
}

impl<T: FloatLinalg> Default for SweepGlpcaBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: FloatLinalg> SweepGlpcaBuilder<T> {
    /// Create a new sweep builder: eleven betas 0.0, 0.1, ..., 1.0.
    fn new() -> Self {
        Self {
            betas: (0..=10).map(|i| T::from(i as f64 / 10.0).unwrap()).collect(),
            components: 2,
            center: true,
            laplacian_kind: LaplacianKind::default(),
            symmetry_tolerance: T::epsilon().sqrt(),
            return_diagnostics: false,
            return_fits: false,
            duplicate_param: None,
        }
    }

    // ========================================================================
    // Setters
    // ========================================================================

    /// Set the grid of mixing parameters.
    pub fn betas(mut self, betas: Vec<T>) -> Self {
        self.betas = betas;
        self
    }

    /// Set the number of components.
    pub fn components(mut self, k: usize) -> Self {
        self.components = k;
        self
    }

    /// Enable or disable centering.
    pub fn center(mut self, enabled: bool) -> Self {
        self.center = enabled;
        self
    }

    /// Set the Laplacian kind.
    pub fn laplacian(mut self, kind: LaplacianKind) -> Self {
        self.laplacian_kind = kind;
        self
    }

    /// Set the symmetry tolerance for `W`.
    pub fn symmetry_tolerance(mut self, tol: T) -> Self {
        self.symmetry_tolerance = tol;
        self
    }

    /// Enable diagnostics on the kept fits.
    pub fn return_diagnostics(mut self, enabled: bool) -> Self {
        self.return_diagnostics = enabled;
        self
    }

    /// Keep the full fit for every beta.
    pub fn return_fits(mut self, enabled: bool) -> Self {
        self.return_fits = enabled;
        self
    }

    // ========================================================================
    // Build Method
    // ========================================================================

    /// Build the sweep processor.
    pub fn build(self) -> Result<SweepGlpca<T>, GlpcaError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;
        Validator::validate_beta_grid(&self.betas)?;
        if self.components == 0 {
            return Err(GlpcaError::InvalidComponents { got: 0, max: 0 });
        }
        Validator::validate_tolerance(self.symmetry_tolerance)?;

        Ok(SweepGlpca { config: self })
    }
}

// ============================================================================
// Sweep gLPCA Processor
// ============================================================================

/// Sweep gLPCA processor.
#[derive(Debug, Clone)]
pub struct SweepGlpca<T: FloatLinalg> {
    config: SweepGlpcaBuilder<T>,
}

impl<T: FloatLinalg> SweepGlpca<T> {
    /// Fit gLPCA at every beta of the grid.
    pub fn fit(&self, x: &DMatrix<T>, w: &DMatrix<T>) -> Result<SweepResult<T>, GlpcaError> {
        Validator::validate_data(x)?;
        let n = x.ncols();
        let k = self.config.components;
        Validator::validate_components(k, n)?;
        Validator::validate_similarity(w, n, self.config.symmetry_tolerance)?;

        let problem_config = GlpcaConfig {
            center: self.config.center,
            laplacian_kind: self.config.laplacian_kind,
        };
        let problem = GlpcaProblem::prepare(x, w, &problem_config)?;

        let mut points = Vec::with_capacity(self.config.betas.len());
        let mut fits = Vec::new();

        for &beta in &self.config.betas {
            let solution = problem.solve(beta, k, self.config.return_diagnostics)?;
            points.push(SweepPoint {
                beta,
                alpha: solution.alpha,
                reconstruction_error: solution.reconstruction_error,
                graph_smoothness: quadratic_trace(&solution.embedding, &problem.laplacian),
                objective: solution.objective,
            });
            if self.config.return_fits {
                fits.push(GlpcaResult::from_solution(
                    &problem,
                    solution,
                    self.config.laplacian_kind,
                ));
            }
        }

        log::info!(
            "gLPCA sweep: {} betas, {} samples, k={}",
            points.len(),
            n,
            k
        );

        Ok(SweepResult {
            components: k,
            points,
            fits: if self.config.return_fits {
                Some(fits)
            } else {
                None
            },
        })
    }
}
