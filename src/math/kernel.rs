//! Similarity kernels turning distances into edge weights.
//!
//! ## Purpose
//!
//! A kNN graph decides *which* samples are joined; the kernel decides *how
//! strongly*. The two kernels here are the ones used for gLPCA similarity
//! graphs: 0/1 connectivity and the heat kernel `exp(-d² / t)`.
//!
//! ## Invariants
//!
//! * Weights lie in (0, 1]: heat weights that would underflow are clamped to
//!   the smallest positive value, so a chosen edge is never dropped.
//! * Weights are non-increasing in distance.

// External dependencies
use num_traits::Float;

/// Weighting applied to each kNN edge.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum SimilarityKernel<T> {
    /// Every edge has weight 1.
    #[default]
    Binary,

    /// Heat kernel `exp(-d² / t)` with bandwidth `t > 0`.
    Heat(T),
}

impl<T: Float> SimilarityKernel<T> {
    /// Weight for an edge of length `distance`.
    #[inline]
    pub fn weight(&self, distance: T) -> T {
        match *self {
            Self::Binary => T::one(),
            Self::Heat(t) => (-(distance * distance) / t)
                .exp()
                .max(T::min_positive_value()),
        }
    }
}
