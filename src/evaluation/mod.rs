//! Layer 4: Evaluation
//!
//! # Purpose
//!
//! Post-hoc checks and scores:
//! - Laplacian identities (`L = D - A = B Bᵀ`, symmetry, PSD)
//! - gLPCA fit diagnostics (reconstruction error, objective, smoothness)

/// Laplacian identity checks.
pub mod identities;

/// gLPCA diagnostics.
pub mod diagnostics;
