//! Layer 1: Primitives
//!
//! # Purpose
//!
//! Fundamental data structures shared by every other layer:
//! - `GlpcaError`, the crate-wide error type
//! - `Graph`, a simple undirected graph with oriented edges

/// Error types.
pub mod errors;

/// Simple undirected graphs.
pub mod graph;
