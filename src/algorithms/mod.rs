//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! Core graph algorithms built on the math layer:
//! - Graph matrices (adjacency, degree, incidence, Laplacian)
//! - Laplacian spectra (Fiedler vector, components, spectral embedding)
//! - kNN similarity graphs from data
//! - Discrete versus continuous Laplacian comparison

/// Adjacency, degree, incidence and Laplacian matrices.
pub mod matrices;

/// Laplacian spectra and spectral clustering.
pub mod spectral;

/// kNN similarity graphs.
pub mod similarity;

/// Discrete versus continuous Laplacian.
pub mod continuum;
