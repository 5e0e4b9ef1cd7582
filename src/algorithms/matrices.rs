//! Graph matrices: adjacency, degree, incidence and Laplacian.
//!
//! ## Purpose
//!
//! This module turns a [`Graph`] into its four classical matrices and turns
//! a weighted similarity matrix into a Laplacian for gLPCA.
//!
//! ## Key concepts
//!
//! * **Adjacency** `A`: `A_ij = 1` iff `{i, j}` is an edge.
//! * **Degree** `D`: diagonal, `D_ii = Σ_j A_ij`.
//! * **Incidence** `B` (n x m): edge `e = u -> v` has `B_ue = +1`, `B_ve = -1`.
//! * **Laplacian** `L = D - A = B Bᵀ`; orientation of edges does not matter.
//! * **Normalized Laplacian** `I - D^{-1/2} A D^{-1/2}`.
//!
//! ## Invariants
//!
//! * `L` is symmetric positive semidefinite and its rows sum to zero.
//! * For isolated nodes the normalized Laplacian row and column are zero.
//!
//! ## Non-goals
//!
//! * Sparse storage; all matrices are dense.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use nalgebra::{DMatrix, Scalar};
use num_traits::Float;

// Internal dependencies
use crate::algorithms::spectral::LaplacianSpectrum;
use crate::math::linalg::FloatLinalg;
use crate::primitives::errors::GlpcaError;
use crate::primitives::graph::Graph;

// ============================================================================
// Laplacian Kind
// ============================================================================

/// Which Laplacian to build from a similarity matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LaplacianKind {
    /// Combinatorial Laplacian `D - W`.
    #[default]
    Combinatorial,

    /// Symmetric normalized Laplacian `I - D^{-1/2} W D^{-1/2}`.
    SymmetricNormalized,
}

// ============================================================================
// Graph Matrices
// ============================================================================

/// The adjacency, degree, incidence and Laplacian matrices of a graph.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphMatrices<T: Scalar> {
    /// Adjacency matrix `A` (n x n).
    pub adjacency: DMatrix<T>,
    /// Degree matrix `D` (n x n, diagonal).
    pub degree: DMatrix<T>,
    /// Oriented incidence matrix `B` (n x m).
    pub incidence: DMatrix<T>,
    /// Laplacian `L = D - A` (n x n).
    pub laplacian: DMatrix<T>,
}

impl<T: FloatLinalg> GraphMatrices<T> {
    /// Compute all four matrices of `graph`.
    pub fn from_graph(graph: &Graph) -> Self {
        let n = graph.n_nodes();
        let m = graph.n_edges();
        log::trace!("building graph matrices: {} nodes, {} edges", n, m);

        let mut adjacency = DMatrix::from_element(n, n, T::zero());
        let mut incidence = DMatrix::from_element(n, m, T::zero());
        for (e, &(u, v)) in graph.edges().iter().enumerate() {
            adjacency[(u, v)] = T::one();
            adjacency[(v, u)] = T::one();
            incidence[(u, e)] = T::one();
            incidence[(v, e)] = -T::one();
        }

        let degrees = row_sums(&adjacency);
        let degree = diagonal(&degrees);
        let laplacian =
            DMatrix::from_fn(n, n, |i, j| degree[(i, j)] - adjacency[(i, j)]);

        Self {
            adjacency,
            degree,
            incidence,
            laplacian,
        }
    }

    /// Number of nodes.
    #[inline]
    pub fn n_nodes(&self) -> usize {
        self.adjacency.nrows()
    }

    /// Number of edges.
    #[inline]
    pub fn n_edges(&self) -> usize {
        self.incidence.ncols()
    }

    /// Diagonal of the degree matrix.
    pub fn degrees(&self) -> Vec<T> {
        (0..self.n_nodes()).map(|i| self.degree[(i, i)]).collect()
    }

    /// `B Bᵀ`, which equals the Laplacian for any orientation of the edges.
    pub fn incidence_gram(&self) -> DMatrix<T> {
        T::matmul(&self.incidence, &self.incidence.transpose())
    }

    /// Symmetric normalized Laplacian `I - D^{-1/2} A D^{-1/2}`.
    pub fn normalized_laplacian(&self) -> DMatrix<T> {
        normalized_from_weights(&self.adjacency)
    }

    /// Ascending spectrum of the Laplacian.
    pub fn spectrum(&self) -> Result<LaplacianSpectrum<T>, GlpcaError> {
        LaplacianSpectrum::compute(&self.laplacian)
    }
}

// ============================================================================
// Laplacians of Weighted Similarity Matrices
// ============================================================================

/// Laplacian of a symmetric, non-negative similarity matrix `W`.
///
/// The diagonal of `W` is ignored: self-similarity adds nothing to `D - W`.
pub fn laplacian_from_similarity<T: FloatLinalg>(
    w: &DMatrix<T>,
    kind: LaplacianKind,
) -> DMatrix<T> {
    let n = w.nrows();
    let weights = DMatrix::from_fn(n, n, |i, j| if i == j { T::zero() } else { w[(i, j)] });

    match kind {
        LaplacianKind::Combinatorial => {
            let degrees = row_sums(&weights);
            DMatrix::from_fn(n, n, |i, j| {
                if i == j {
                    degrees[i]
                } else {
                    -weights[(i, j)]
                }
            })
        }
        LaplacianKind::SymmetricNormalized => normalized_from_weights(&weights),
    }
}

fn normalized_from_weights<T: Float + Scalar>(weights: &DMatrix<T>) -> DMatrix<T> {
    let n = weights.nrows();
    let inv_sqrt: Vec<T> = row_sums(weights)
        .into_iter()
        .map(|d| {
            if d > T::zero() {
                T::one() / d.sqrt()
            } else {
                T::zero()
            }
        })
        .collect();

    DMatrix::from_fn(n, n, |i, j| {
        let scaled = inv_sqrt[i] * weights[(i, j)] * inv_sqrt[j];
        if i == j && inv_sqrt[i] > T::zero() {
            T::one() - scaled
        } else {
            -scaled
        }
    })
}

fn row_sums<T: Float + Scalar>(m: &DMatrix<T>) -> Vec<T> {
    (0..m.nrows())
        .map(|i| (0..m.ncols()).fold(T::zero(), |acc, j| acc + m[(i, j)]))
        .collect()
}

fn diagonal<T: Float + Scalar>(values: &[T]) -> DMatrix<T> {
    let n = values.len();
    DMatrix::from_fn(n, n, |i, j| if i == j { values[i] } else { T::zero() })
}
