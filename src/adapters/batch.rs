//! Batch adapter for single-beta gLPCA fits.
//!
//! ## Purpose
//!
//! This module provides the batch execution adapter: one data matrix, one
//! similarity matrix, one `β`, one closed-form solve.
//!
//! ## Design notes
//!
//! * **Processing**: Validates, prepares and solves in a single pass.
//! * **Delegation**: Delegates computation to the execution engine.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Invariants
//!
//! * `X` is p x n with n >= 2; `W` is n x n, symmetric and non-negative.
//! * 1 <= components <= n.
//! * Sample order of the embedding matches the column order of `X`.
//!
//! ## Non-goals
//!
//! * This adapter does not scan several `β` values (use the sweep adapter).

// External dependencies
use nalgebra::DMatrix;

// Internal dependencies
use crate::algorithms::matrices::LaplacianKind;
use crate::algorithms::similarity::KnnGraph;
use crate::engine::executor::{GlpcaConfig, GlpcaProblem};
use crate::engine::output::GlpcaResult;
use crate::engine::validator::Validator;
use crate::math::linalg::FloatLinalg;
use crate::primitives::errors::GlpcaError;

// ============================================================================
// Batch gLPCA Builder
// ============================================================================

/// Builder for the batch gLPCA processor.
#[derive(Debug, Clone)]
pub struct BatchGlpcaBuilder<T: FloatLinalg> {
    /// Mixing parameter in [0, 1].
    pub beta: T,

    /// Number of components k.
    pub components: usize,

    /// Subtract per-feature means before fitting.
    pub center: bool,

    /// Laplacian built from the similarity matrix.
    pub laplacian_kind: LaplacianKind,

    /// Symmetry tolerance for the similarity matrix.
    pub symmetry_tolerance: T,

    /// Whether to compute diagnostic statistics.
    pub return_diagnostics: bool,

    /// Tracks if any parameter was set multiple times (for validation)
    #[doc(hidden)]
    pub(crate) duplicate_param: Option<&'static str>,
}

impl<T: FloatLinalg> Default for BatchGlpcaBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: FloatLinalg> BatchGlpcaBuilder<T> {
    /// Create a new batch builder with default parameters.
    fn new() -> Self {
        Self {
            beta: T::from(0.5).unwrap(),
            components: 2,
            center: true,
            laplacian_kind: LaplacianKind::default(),
            symmetry_tolerance: T::epsilon().sqrt(),
            return_diagnostics: false,
            duplicate_param: None,
        }
    }

    // ========================================================================
    // Setters
    // ========================================================================

    /// Set the mixing parameter.
    pub fn beta(mut self, beta: T) -> Self {
        self.beta = beta;
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

    /// Enable returning diagnostics in the result.
    pub fn return_diagnostics(mut self, enabled: bool) -> Self {
        self.return_diagnostics = enabled;
        self
    }

    // ========================================================================
    // Build Method
    // ========================================================================

    /// Build the batch processor.
    pub fn build(self) -> Result<BatchGlpca<T>, GlpcaError> {
        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        // Validate beta
        Validator::validate_beta(self.beta)?;

        // Components must be positive; the upper bound needs the data
        if self.components == 0 {
            return Err(GlpcaError::InvalidComponents { got: 0, max: 0 });
        }

        // Validate symmetry tolerance
        Validator::validate_tolerance(self.symmetry_tolerance)?;

        Ok(BatchGlpca { config: self })
    }
}

// ============================================================================
// Batch gLPCA Processor
// ============================================================================

/// Batch gLPCA processor.
#[derive(Debug, Clone)]
pub struct BatchGlpca<T: FloatLinalg> {
    config: BatchGlpcaBuilder<T>,
}

impl<T: FloatLinalg> BatchGlpca<T> {
    /// Fit gLPCA to data `x` (features x samples) with similarity `w`.
    pub fn fit(&self, x: &DMatrix<T>, w: &DMatrix<T>) -> Result<GlpcaResult<T>, GlpcaError> {
        Validator::validate_data(x)?;
        let n = x.ncols();
        Validator::validate_components(self.config.components, n)?;
        Validator::validate_similarity(w, n, self.config.symmetry_tolerance)?;

        let problem_config = GlpcaConfig {
            center: self.config.center,
            laplacian_kind: self.config.laplacian_kind,
        };
        let problem = GlpcaProblem::prepare(x, w, &problem_config)?;
        let solution = problem.solve(
            self.config.beta,
            self.config.components,
            self.config.return_diagnostics,
        )?;

        log::info!(
            "gLPCA fit: {} samples, {} features, k={}, beta={:?}, error={:?}",
            n,
            x.nrows(),
            self.config.components,
            self.config.beta,
            solution.reconstruction_error
        );

        Ok(GlpcaResult::from_solution(
            &problem,
            solution,
            self.config.laplacian_kind,
        ))
    }

    /// Build a kNN similarity graph from `x` and fit gLPCA on it.
    pub fn fit_knn(&self, x: &DMatrix<T>, knn: &KnnGraph<T>) -> Result<GlpcaResult<T>, GlpcaError> {
        let w = knn.build(x)?;
        self.fit(x, &w)
    }

    /// Configured mixing parameter.
    pub fn beta(&self) -> T {
        self.config.beta
    }

    /// Configured number of components.
    pub fn components(&self) -> usize {
        self.config.components
    }
}
