//! # gLPCA: Graph Matrices and Graph-Laplacian PCA for Rust
//!
//! Dense graph matrices (adjacency, degree, incidence, Laplacian), their link
//! to the continuous Laplacian operator, and a closed-form solver for
//! Graph-Laplacian PCA.
//!
//! ## What is gLPCA?
//!
//! Principal component analysis finds a low-dimensional embedding `Q` of the
//! samples that best reconstructs the data. When the samples also carry a
//! similarity graph `W` (a kNN graph, a mesh, a social network), one would
//! like nearby samples to receive nearby embeddings. gLPCA adds the graph
//! smoothness term `Tr(Qᵀ L Q)` to the PCA objective:
//!
//! ```text
//! min  ‖X̃ - U Qᵀ‖²_F + α Tr(Qᵀ L Q)    subject to  Qᵀ Q = I
//! ```
//!
//! The minimizer is the set of `k` smallest eigenvectors of
//!
//! ```text
//! G_β = (1 - β) (I - X̃ᵀX̃ / λ_n) + β L / ξ_n
//! ```
//!
//! where `λ_n` and `ξ_n` are the largest eigenvalues of `X̃ᵀX̃` and `L`. The
//! mixing parameter `β ∈ [0, 1]` moves the solution from standard PCA
//! (`β = 0`) to Laplacian embedding (`β = 1`).
//!
//! **Building blocks:**
//! - [`Graph`](prelude::Graph) and [`GraphMatrices`](prelude::GraphMatrices): `A`, `D`, `B`, `L = D - A = B Bᵀ`
//! - [`LaplacianSpectrum`](prelude::LaplacianSpectrum): Fiedler value and vector, components, spectral bipartition
//! - [`KnnGraph`](prelude::KnnGraph): similarity graphs from data
//! - [`ContinuumComparison`](prelude::ContinuumComparison): scaled graph Laplacian against `-d²/dx²`
//!
//! ## Quick Start
//!
//! Data matrices hold one sample per **column** (features x samples).
//!
//! ```rust
//! use glpca_rs::prelude::*;
//!
//! // 2 features x 6 samples
//! let x = DMatrix::from_row_slice(2, 6, &[
//!     1.0, 2.0, 3.0, 4.0, 5.0, 6.0,
//!     2.1, 3.9, 6.2, 7.8, 10.1, 12.0,
//! ]);
//!
//! // Similarity: consecutive samples are neighbours
//! let w = GraphMatrices::<f64>::from_graph(&Graph::path(6)).adjacency;
//!
//! let model = Glpca::new()
//!     .beta(0.5)          // Halfway between PCA and Laplacian embedding
//!     .components(2)      // Embedding dimension
//!     .adapter(Batch)
//!     .build()?;
//!
//! let result = model.fit(&x, &w)?;
//!
//! assert!(result.reconstruction_error <= 1.0);
//! println!("{}", result);
//! # Result::<(), GlpcaError>::Ok(())
//! ```
//!
//! ### Graph Matrices
//!
//! ```rust
//! use glpca_rs::prelude::*;
//!
//! let g = Graph::new(4, vec![(0, 1), (1, 2), (2, 3), (3, 0)])?;
//! let m = GraphMatrices::<f64>::from_graph(&g);
//!
//! // L = B Bᵀ = D - A
//! assert!(m.verify()?.holds(1e-10));
//!
//! // The cycle is connected: one zero eigenvalue, positive Fiedler value
//! let spectrum = m.spectrum()?;
//! assert_eq!(spectrum.connected_components(1e-9), 1);
//! assert!(spectrum.algebraic_connectivity().unwrap() > 0.0);
//! # Result::<(), GlpcaError>::Ok(())
//! ```
//!
//! ### Full Features
//!
//! ```rust
//! use glpca_rs::prelude::*;
//!
//! let x = DMatrix::from_fn(3, 12, |i, j| ((i + 1) * j) as f64 + (j % 3) as f64);
//!
//! // kNN similarity graph with a heat kernel
//! let knn = KnnGraph::new(3)
//!     .metric(Euclidean)
//!     .kernel(Heat(10.0))
//!     .symmetrization(Union);
//! let w = knn.build(&x)?;
//!
//! let model = Glpca::new()
//!     .beta(0.3)
//!     .components(2)
//!     .center(true)
//!     .laplacian(SymmetricNormalized)
//!     .symmetry_tolerance(1e-9)
//!     .return_diagnostics()
//!     .adapter(Batch)
//!     .build()?;
//!
//! let result = model.fit(&x, &w)?;
//! println!("{}", result);
//! # Result::<(), GlpcaError>::Ok(())
//! ```
//!
//! ### Beta Sweep
//!
//! ```rust
//! use glpca_rs::prelude::*;
//!
//! let x = DMatrix::from_fn(2, 8, |i, j| (j as f64).powi(i as i32 + 1));
//! let w = GraphMatrices::<f64>::from_graph(&Graph::path(8)).adjacency;
//!
//! let sweep = Glpca::new()
//!     .betas(&[0.0, 0.25, 0.5, 0.75, 1.0])
//!     .components(1)
//!     .adapter(Sweep)
//!     .build()?
//!     .fit(&x, &w)?;
//!
//! // PCA reconstructs best; Laplacian embedding is smoothest
//! assert_eq!(sweep.points.len(), 5);
//! println!("{}", sweep);
//! # Result::<(), GlpcaError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! `fit` returns a `Result<GlpcaResult<T>, GlpcaError>`. Invalid parameters
//! are reported by `build()`, invalid data by `fit()`:
//!
//! ```rust
//! use glpca_rs::prelude::*;
//!
//! let err = Glpca::<f64>::new().beta(1.5).adapter(Batch).build().unwrap_err();
//! assert_eq!(err, GlpcaError::InvalidBeta(1.5));
//! ```
//!
//! ## Minimal Usage (no_std)
//!
//! Disable default features to remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! glpca-rs = { version = "0.1", default-features = false }
//! ```
//!
//! ## References
//!
//! - Jiang, B., Ding, C., Luo, B. & Tang, J. (2013). "Graph-Laplacian PCA: Closed-form Solution and Robustness"
//! - Belkin, M. & Niyogi, P. (2003). "Laplacian Eigenmaps for Dimensionality Reduction and Data Representation"
//! - Fiedler, M. (1973). "Algebraic Connectivity of Graphs"

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - data structures and basic utilities.
//
// Contains the error type and the simple undirected `Graph`.
mod primitives;

// Layer 2: Math - pure mathematical functions.
//
// Contains the nalgebra linear algebra backend, centering,
// distance metrics and similarity kernels.
mod math;

// Layer 3: Algorithms - graph matrices and spectra.
//
// Contains the adjacency/degree/incidence/Laplacian matrices, Laplacian
// spectra, kNN similarity graphs and the continuum comparison.
mod algorithms;

// Layer 4: Evaluation - identities and diagnostics.
//
// Contains the Laplacian identity checks and gLPCA fit diagnostics.
mod evaluation;

// Layer 5: Engine - orchestration and execution control.
//
// Contains validation, the closed-form gLPCA solver and result assembly.
mod engine;

// Layer 6: Adapters - execution mode adapters.
//
// Contains execution adapters: batch (one beta) and sweep (grid of betas).
mod adapters;

// High-level fluent API for gLPCA.
//
// Provides the `Glpca` builder for configuring and running fits.
mod api;

// ============================================================================
// Prelude
// ============================================================================

/// Standard gLPCA prelude.
///
/// This module is intended to be wildcard-imported for convenient access
/// to the most commonly used types:
///
/// ```
/// use glpca_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        cycle_eigenvalue, laplacian_from_similarity, path_eigenvalue,
        Adapter::{Batch, Sweep},
        BatchGlpca, BatchGlpcaBuilder, ContinuumComparison, Diagnostics,
        DistanceMetric::{self, Chebyshev, Euclidean, Manhattan, Minkowski},
        GlpcaBuilder as Glpca, GlpcaError, GlpcaResult, Graph, GraphMatrices, IdentityReport,
        KnnGraph,
        LaplacianKind::{self, Combinatorial, SymmetricNormalized},
        LaplacianSpectrum, ModeComparison, OperatorComparison,
        SimilarityKernel::{self, Binary, Heat},
        SweepGlpca, SweepGlpcaBuilder, SweepPoint, SweepResult,
        Symmetrization::{self, Mutual, Union},
    };
    pub use nalgebra::DMatrix;
}

// ============================================================================
// Testing re-exports
// ============================================================================

/// Internal modules for development and testing.
///
/// This module re-exports internal modules for development and testing purposes.
/// It is only available with the `dev` feature enabled.
///
/// **Warning**: These are internal implementation details and may change without notice.
/// Do not use in production code.
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types and utilities.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal math functions.
    pub mod math {
        pub use crate::math::*;
    }
    /// Internal core algorithms.
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    /// Internal execution engine.
    pub mod engine {
        pub use crate::engine::*;
    }
    /// Internal evaluation and diagnostics.
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    /// Internal adapters.
    pub mod adapters {
        pub use crate::adapters::*;
    }
    /// Internal API.
    pub mod api {
        pub use crate::api::*;
    }
}
