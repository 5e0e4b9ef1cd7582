//! Layer 6: Adapters
//!
//! # Purpose
//!
//! Execution modes for gLPCA:
//! - `batch`: one fit at one beta
//! - `sweep`: fits over a grid of betas sharing one prepared problem

/// Single-beta adapter.
pub mod batch;

/// Beta-grid adapter.
pub mod sweep;
