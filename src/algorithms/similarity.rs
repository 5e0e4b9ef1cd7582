//! kNN similarity graphs built from data.
//!
//! ## Purpose
//!
//! gLPCA needs a similarity matrix `W` over the samples. When no external
//! graph is available, `W` is built from the data itself: every sample is
//! joined to its `k` nearest neighbours and each edge is weighted by a
//! [`SimilarityKernel`].
//!
//! ## Design notes
//!
//! * Samples are the columns of the data matrix, matching the gLPCA layout.
//! * The raw kNN relation is not symmetric; [`Symmetrization`] decides how to
//!   make it so (keep an edge if either endpoint chose it, or only if both did).
//! * Ties in distance are broken by sample index.
//!
//! ## Invariants
//!
//! * The output is symmetric, non-negative, with a zero diagonal.
//! * With `Union`, every sample has at least `k` neighbours.
//!
//! ## Non-goals
//!
//! * Approximate or tree-based neighbour search; distances are brute force.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{format, vec::Vec};
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::cmp::Ordering::Equal;
use nalgebra::DMatrix;

// Internal dependencies
use crate::math::distance::DistanceMetric;
use crate::math::kernel::SimilarityKernel;
use crate::math::linalg::FloatLinalg;
use crate::primitives::errors::GlpcaError;

/// How to symmetrize the directed kNN relation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Symmetrization {
    /// Keep `i ~ j` if either chose the other (`max(W, Wᵀ)`).
    #[default]
    Union,

    /// Keep `i ~ j` only if both chose each other (`min(W, Wᵀ)`).
    Mutual,
}

/// Builder for a kNN similarity graph.
#[derive(Debug, Clone, PartialEq)]
pub struct KnnGraph<T> {
    /// Neighbours per sample.
    pub neighbors: usize,
    /// Edge weighting.
    pub kernel: SimilarityKernel<T>,
    /// Distance between samples.
    pub metric: DistanceMetric<T>,
    /// Symmetrization rule.
    pub symmetrization: Symmetrization,
}

impl<T: FloatLinalg> Default for KnnGraph<T> {
    fn default() -> Self {
        Self::new(5)
    }
}

impl<T: FloatLinalg> KnnGraph<T> {
    /// kNN graph with `neighbors` neighbours, binary weights, Euclidean distance.
    pub fn new(neighbors: usize) -> Self {
        Self {
            neighbors,
            kernel: SimilarityKernel::default(),
            metric: DistanceMetric::default(),
            symmetrization: Symmetrization::default(),
        }
    }

    /// Set the edge weighting kernel.
    pub fn kernel(mut self, kernel: SimilarityKernel<T>) -> Self {
        self.kernel = kernel;
        self
    }

    /// Set the distance metric.
    pub fn metric(mut self, metric: DistanceMetric<T>) -> Self {
        self.metric = metric;
        self
    }

    /// Set the symmetrization rule.
    pub fn symmetrization(mut self, rule: Symmetrization) -> Self {
        self.symmetrization = rule;
        self
    }

    /// Build the `n x n` similarity matrix for the columns of `x`.
    pub fn build(&self, x: &DMatrix<T>) -> Result<DMatrix<T>, GlpcaError> {
        self.check(x)?;
        let n = x.ncols();

        let distances = self.metric.pairwise(x);
        let mut directed = DMatrix::from_element(n, n, T::zero());
        let mut order: Vec<usize> = Vec::with_capacity(n);

        for i in 0..n {
            order.clear();
            order.extend((0..n).filter(|&j| j != i));
            order.sort_by(|&a, &b| {
                distances[(i, a)]
                    .partial_cmp(&distances[(i, b)])
                    .unwrap_or(Equal)
                    .then(a.cmp(&b))
            });
            for &j in order.iter().take(self.neighbors) {
                directed[(i, j)] = self.kernel.weight(distances[(i, j)]);
            }
        }

        let w = DMatrix::from_fn(n, n, |i, j| {
            let (a, b) = (directed[(i, j)], directed[(j, i)]);
            match self.symmetrization {
                Symmetrization::Union => a.max(b),
                Symmetrization::Mutual => a.min(b),
            }
        });

        let edges = (0..n)
            .flat_map(|i| ((i + 1)..n).map(move |j| (i, j)))
            .filter(|&(i, j)| w[(i, j)] > T::zero())
            .count();
        log::debug!(
            "kNN similarity graph: n={}, k={}, {} undirected edges",
            n,
            self.neighbors,
            edges
        );

        Ok(w)
    }
    /// Check the data and the graph parameters, failing on the first violation.
    fn check(&self, x: &DMatrix<T>) -> Result<(), GlpcaError> {
        if x.is_empty() {
            return Err(GlpcaError::EmptyInput);
        }
        let n = x.ncols();
        if n < 2 {
            return Err(GlpcaError::TooFewSamples { got: n, min: 2 });
        }
        if let Some(idx) = x.iter().position(|v| !v.is_finite()) {
            let (i, j) = (idx % x.nrows(), idx / x.nrows());
            return Err(GlpcaError::InvalidNumericValue(format!(
                "X[{}, {}]={}",
                i,
                j,
                x[(i, j)].to_f64().unwrap_or(f64::NAN)
            )));
        }

        let max = n - 1;
        if self.neighbors == 0 || self.neighbors > max {
            return Err(GlpcaError::InvalidNeighbors {
                got: self.neighbors,
                max,
            });
        }
        if let SimilarityKernel::Heat(t) = self.kernel {
            if !t.is_finite() || t <= T::zero() {
                return Err(GlpcaError::InvalidBandwidth(t.to_f64().unwrap_or(f64::NAN)));
            }
        }
        if let DistanceMetric::Minkowski(p) = self.metric {
            if !p.is_finite() || p < T::one() {
                return Err(GlpcaError::InvalidInput(format!(
                    "Minkowski order must be >= 1, got {}",
                    p.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }
        Ok(())
    }
}
