//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure mathematical functions used throughout the crate:
//! - Dense linear algebra over nalgebra (eigenpairs, products, norms)
//! - Feature centering
//! - Sample distances and similarity kernels
//!
//! These are reusable mathematical building blocks with no algorithm-specific logic.
//!
//! # Architecture
//!
//! ```text
//! Layer 7: API
//!   ↓
//! Layer 6: Adapters
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Linear algebra backend (nalgebra).
pub mod linalg;

/// Row centering of data matrices.
pub mod centering;

/// Distance metrics between samples.
pub mod distance;

/// Similarity kernels.
pub mod kernel;
