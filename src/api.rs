//! High-level API for Graph-Laplacian PCA.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point for gLPCA. It
//! implements a fluent builder pattern for configuring the fit and choosing
//! an execution adapter (Batch or Sweep).
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Polymorphic**: Uses marker types to transition to specialized adapter builders.
//! * **Validated**: Parameters are validated when `.build()` is called on the adapter.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`GlpcaBuilder`] via `Glpca::new()`.
//! 2. Chain configuration methods (`.beta()`, `.components()`, etc.).
//! 3. Select an adapter via `.adapter(Adapter::Batch)` to get an execution builder.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::math::linalg::FloatLinalg;

// Publicly re-exported types
pub use crate::adapters::batch::{BatchGlpca, BatchGlpcaBuilder};
pub use crate::adapters::sweep::{SweepGlpca, SweepGlpcaBuilder};
pub use crate::algorithms::continuum::{
    cycle_eigenvalue, path_eigenvalue, ContinuumComparison, ModeComparison, OperatorComparison,
};
pub use crate::algorithms::matrices::{laplacian_from_similarity, GraphMatrices, LaplacianKind};
pub use crate::algorithms::similarity::{KnnGraph, Symmetrization};
pub use crate::algorithms::spectral::LaplacianSpectrum;
pub use crate::engine::output::{GlpcaResult, SweepPoint, SweepResult};
pub use crate::evaluation::diagnostics::Diagnostics;
pub use crate::evaluation::identities::IdentityReport;
pub use crate::math::distance::DistanceMetric;
pub use crate::math::kernel::SimilarityKernel;
pub use crate::primitives::errors::GlpcaError;
pub use crate::primitives::graph::Graph;

/// Marker types for selecting execution adapters.
#[allow(non_snake_case)]
pub mod Adapter {
    pub use super::{Batch, Sweep};
}

/// Fluent builder for configuring gLPCA parameters and execution modes.
#[derive(Debug, Clone)]
pub struct GlpcaBuilder<T: FloatLinalg> {
    /// Mixing parameter in [0, 1] (Batch only).
    pub beta: Option<T>,

    /// Number of components k.
    pub components: Option<usize>,

    /// Subtract per-feature means before fitting.
    pub center: Option<bool>,

    /// Laplacian built from the similarity matrix.
    pub laplacian_kind: Option<LaplacianKind>,

    /// Symmetry tolerance for the similarity matrix.
    pub symmetry_tolerance: Option<T>,

    /// Compute fit diagnostics.
    pub return_diagnostics: Option<bool>,

    /// Grid of mixing parameters (Sweep only).
    pub betas: Option<Vec<T>>,

    /// Keep every fit of a sweep (Sweep only).
    pub return_fits: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: FloatLinalg> Default for GlpcaBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: FloatLinalg> GlpcaBuilder<T> {
    /// Select an execution adapter to transition to an execution builder.
    pub fn adapter<A>(self, _adapter: A) -> A::Output
    where
        A: GlpcaAdapter<T>,
    {
        A::convert(self)
    }

    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            beta: None,
            components: None,
            center: None,
            laplacian_kind: None,
            symmetry_tolerance: None,
            return_diagnostics: None,
            betas: None,
            return_fits: None,
            duplicate_param: None,
        }
    }

    /// Set the mixing parameter `β` (0 = PCA, 1 = Laplacian embedding).
    pub fn beta(mut self, beta: T) -> Self {
        if self.beta.is_some() {
            self.duplicate_param = Some("beta");
        }
        self.beta = Some(beta);
        self
    }

    /// Set the number of components.
    pub fn components(mut self, k: usize) -> Self {
        if self.components.is_some() {
            self.duplicate_param = Some("components");
        }
        self.components = Some(k);
        self
    }

    /// Enable or disable centering of the features.
    pub fn center(mut self, enabled: bool) -> Self {
        if self.center.is_some() {
            self.duplicate_param = Some("center");
        }
        self.center = Some(enabled);
        self
    }

    /// Set the Laplacian built from the similarity matrix.
    pub fn laplacian(mut self, kind: LaplacianKind) -> Self {
        if self.laplacian_kind.is_some() {
            self.duplicate_param = Some("laplacian");
        }
        self.laplacian_kind = Some(kind);
        self
    }

    /// Set the tolerance used when checking `W` for symmetry.
    pub fn symmetry_tolerance(mut self, tol: T) -> Self {
        if self.symmetry_tolerance.is_some() {
            self.duplicate_param = Some("symmetry_tolerance");
        }
        self.symmetry_tolerance = Some(tol);
        self
    }

    /// Enable fit diagnostics.
    pub fn return_diagnostics(mut self) -> Self {
        if self.return_diagnostics.is_some() {
            self.duplicate_param = Some("return_diagnostics");
        }
        self.return_diagnostics = Some(true);
        self
    }

    /// Set the grid of mixing parameters for a sweep.
    pub fn betas(mut self, betas: &[T]) -> Self {
        if self.betas.is_some() {
            self.duplicate_param = Some("betas");
        }
        self.betas = Some(betas.to_vec());
        self
    }

    /// Keep the full fit for every beta of a sweep.
    pub fn return_fits(mut self) -> Self {
        if self.return_fits.is_some() {
            self.duplicate_param = Some("return_fits");
        }
        self.return_fits = Some(true);
        self
    }
}

/// Trait for transitioning from a generic builder to an execution builder.
pub trait GlpcaAdapter<T: FloatLinalg> {
    /// The output execution builder.
    type Output;

    /// Convert a generic [`GlpcaBuilder`] into a specialized execution builder.
    fn convert(builder: GlpcaBuilder<T>) -> Self::Output;
}

/// Marker for a single fit at one beta.
#[derive(Debug, Clone, Copy)]
pub struct Batch;

impl<T: FloatLinalg> GlpcaAdapter<T> for Batch {
    type Output = BatchGlpcaBuilder<T>;

    fn convert(builder: GlpcaBuilder<T>) -> Self::Output {
        let mut result = BatchGlpcaBuilder::default();

        if let Some(beta) = builder.beta {
            result.beta = beta;
        }
        if let Some(k) = builder.components {
            result.components = k;
        }
        if let Some(center) = builder.center {
            result.center = center;
        }
        if let Some(kind) = builder.laplacian_kind {
            result.laplacian_kind = kind;
        }
        if let Some(tol) = builder.symmetry_tolerance {
            result.symmetry_tolerance = tol;
        }
        if let Some(rd) = builder.return_diagnostics {
            result.return_diagnostics = rd;
        }

        result.duplicate_param = builder.duplicate_param;

        result
    }
}

/// Marker for fits over a grid of betas.
#[derive(Debug, Clone, Copy)]
pub struct Sweep;

impl<T: FloatLinalg> GlpcaAdapter<T> for Sweep {
    type Output = SweepGlpcaBuilder<T>;

    fn convert(builder: GlpcaBuilder<T>) -> Self::Output {
        let mut result = SweepGlpcaBuilder::default();

        // A single beta becomes a one-point grid unless a grid was given.
        if let Some(betas) = builder.betas {
            result.betas = betas;
        } else if let Some(beta) = builder.beta {
            result.betas = vec![beta];
        }
        if let Some(k) = builder.components {
            result.components = k;
        }
        if let Some(center) = builder.center {
            result.center = center;
        }
        if let Some(kind) = builder.laplacian_kind {
            result.laplacian_kind = kind;
        }
        if let Some(tol) = builder.symmetry_tolerance {
            result.symmetry_tolerance = tol;
        }
        if let Some(rd) = builder.return_diagnostics {
            result.return_diagnostics = rd;
        }
        if let Some(rf) = builder.return_fits {
            result.return_fits = rf;
        }

        result.duplicate_param = builder.duplicate_param;

        result
    }
}
