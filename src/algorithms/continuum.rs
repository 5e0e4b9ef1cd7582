//! Discrete graph Laplacian versus the continuous Laplacian operator.
//!
//! ## Purpose
//!
//! Sampling a function on `n` equally spaced points `x_i = (i + ½) h` of an
//! interval of length `ℓ` (`h = ℓ / n`) and joining neighbours gives a path
//! graph. Its Laplacian, scaled by `1 / h²`, is the standard second-difference
//! approximation of `-d²/dx²`:
//!
//! ```text
//! -(L f)_i / h² = (f_{i-1} - 2 f_i + f_{i+1}) / h²  ≈  f''(x_i)
//! ```
//!
//! The end rows of the path Laplacian only have one neighbour, which is the
//! discrete counterpart of a zero-flux (Neumann) boundary. Hence the scaled
//! spectrum converges to the Neumann eigenvalues `(πk / ℓ)²`, and the cycle
//! graph's to the periodic eigenvalues `(2πk / ℓ)²`.
//!
//! ## Invariants
//!
//! * Path eigenvalues are exactly `2 - 2 cos(πk / n)`, `k = 0..n`.
//! * Cycle eigenvalues are exactly `2 - 2 cos(2πk / n)`, each non-zero one
//!   twice (once for even `n` at `k = n / 2`).
//!
//! ## Non-goals
//!
//! * Higher-dimensional domains and Dirichlet boundaries.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{format, vec::Vec};
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::f64::consts::PI;
use nalgebra::{DMatrix, Scalar};

// Internal dependencies
use crate::algorithms::matrices::GraphMatrices;
use crate::math::linalg::FloatLinalg;
use crate::primitives::errors::GlpcaError;
use crate::primitives::graph::Graph;

/// Analytic `k`-th eigenvalue of the path Laplacian on `n` nodes.
pub fn path_eigenvalue<T: FloatLinalg>(n: usize, k: usize) -> T {
    let theta = T::from(PI * k as f64 / n as f64).unwrap();
    T::from(2.0).unwrap() * (T::one() - theta.cos())
}

/// Analytic `k`-th eigenvalue (unsorted) of the cycle Laplacian on `n` nodes.
pub fn cycle_eigenvalue<T: FloatLinalg>(n: usize, k: usize) -> T {
    let theta = T::from(2.0 * PI * k as f64 / n as f64).unwrap();
    T::from(2.0).unwrap() * (T::one() - theta.cos())
}

// ============================================================================
// Spectral Comparison
// ============================================================================

/// One eigenvalue of the scaled graph Laplacian against the continuum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModeComparison<T> {
    /// Mode index (position in the ascending spectrum).
    pub mode: usize,
    /// Graph Laplacian eigenvalue divided by `h²`.
    pub discrete: T,
    /// Eigenvalue of `-d²/dx²` on the interval.
    pub continuous: T,
    /// `|discrete - continuous| / continuous` (absolute error when `continuous = 0`).
    pub relative_error: T,
}

/// Scaled graph Laplacian spectrum against the continuous operator.
#[derive(Debug, Clone, PartialEq)]
pub struct ContinuumComparison<T> {
    /// Number of sample points.
    pub n_nodes: usize,
    /// Interval length `ℓ`.
    pub length: T,
    /// Grid spacing `h = ℓ / n`.
    pub spacing: T,
    /// Compared modes, lowest first.
    pub modes: Vec<ModeComparison<T>>,
}

impl<T: FloatLinalg> ContinuumComparison<T> {
    /// Path graph (Neumann interval) against `(πk / ℓ)²`.
    pub fn path(n_nodes: usize, length: T, n_modes: usize) -> Result<Self, GlpcaError> {
        let pi_over_len = T::from(PI).unwrap() / length;
        Self::compare(&Graph::path(n_nodes), length, n_modes, |i| {
            let wave = T::from(i).unwrap() * pi_over_len;
            wave * wave
        })
    }

    /// Cycle graph (periodic interval) against `(2π⌈i/2⌉ / ℓ)²`.
    pub fn cycle(n_nodes: usize, length: T, n_modes: usize) -> Result<Self, GlpcaError> {
        let two_pi_over_len = T::from(2.0 * PI).unwrap() / length;
        Self::compare(&Graph::cycle(n_nodes), length, n_modes, |i| {
            let wave = T::from((i + 1) / 2).unwrap() * two_pi_over_len;
            wave * wave
        })
    }

    fn compare(
        graph: &Graph,
        length: T,
        n_modes: usize,
        continuous: impl Fn(usize) -> T,
    ) -> Result<Self, GlpcaError> {
        let n = graph.n_nodes();
        validate_grid(n, length, 2)?;
        if n_modes == 0 || n_modes > n {
            return Err(GlpcaError::InvalidComponents {
                got: n_modes,
                max: n,
            });
        }

        let spacing = length / T::from(n).unwrap();
        let h_sq = spacing * spacing;
        let spectrum = GraphMatrices::<T>::from_graph(graph).spectrum()?;

        let modes = (0..n_modes)
            .map(|i| {
                let discrete = spectrum.eigenvalues[i].max(T::zero()) / h_sq;
                let exact = continuous(i);
                let diff = (discrete - exact).abs();
                let relative_error = if exact > T::zero() { diff / exact } else { diff };
                ModeComparison {
                    mode: i,
                    discrete,
                    continuous: exact,
                    relative_error,
                }
            })
            .collect();

        Ok(Self {
            n_nodes: n,
            length,
            spacing,
            modes,
        })
    }

    /// Largest relative error over the compared modes.
    pub fn max_relative_error(&self) -> T {
        self.modes
            .iter()
            .fold(T::zero(), |acc, m| acc.max(m.relative_error))
    }
}

// ============================================================================
// Operator Comparison
// ============================================================================

/// `-L f / h²` against the exact second derivative of `f`.
#[derive(Debug, Clone, PartialEq)]
pub struct OperatorComparison<T> {
    /// Sample locations `x_i = (i + ½) h`.
    pub points: Vec<T>,
    /// Discrete second derivative `-(L f)_i / h²`.
    pub discrete: Vec<T>,
    /// Exact `f''(x_i)`.
    pub exact: Vec<T>,
}

impl<T: FloatLinalg> OperatorComparison<T> {
    /// Apply the scaled path Laplacian to samples of `f` on `[0, length]`.
    pub fn path(
        f: impl Fn(T) -> T,
        second_derivative: impl Fn(T) -> T,
        n_nodes: usize,
        length: T,
    ) -> Result<Self, GlpcaError> {
        validate_grid(n_nodes, length, 3)?;

        let spacing = length / T::from(n_nodes).unwrap();
        let half = T::from(0.5).unwrap();
        let points: Vec<T> = (0..n_nodes)
            .map(|i| (T::from(i).unwrap() + half) * spacing)
            .collect();

        let samples = DMatrix::from_iterator(n_nodes, 1, points.iter().map(|&x| f(x)));
        let laplacian = GraphMatrices::<T>::from_graph(&Graph::path(n_nodes)).laplacian;
        let discrete = apply_scaled_laplacian(&laplacian, &samples, spacing);
        let exact = points.iter().map(|&x| second_derivative(x)).collect();

        Ok(Self {
            points,
            discrete,
            exact,
        })
    }

    /// Largest absolute error over interior nodes (boundary rows excluded).
    pub fn max_interior_error(&self) -> T {
        let n = self.points.len();
        (1..n.saturating_sub(1)).fold(T::zero(), |acc, i| {
            acc.max((self.discrete[i] - self.exact[i]).abs())
        })
    }
}

/// `-(L f) / h²` for a column of samples.
pub fn apply_scaled_laplacian<T: FloatLinalg>(
    laplacian: &DMatrix<T>,
    samples: &DMatrix<T>,
    spacing: T,
) -> Vec<T> {
    let h_sq = spacing * spacing;
    T::matmul(laplacian, samples)
        .iter()
        .map(|&v| -v / h_sq)
        .collect()
}

fn validate_grid<T: FloatLinalg + Scalar>(
    n_nodes: usize,
    length: T,
    min: usize,
) -> Result<(), GlpcaError> {
    if n_nodes < min {
        return Err(GlpcaError::TooFewSamples { got: n_nodes, min });
    }
    if !length.is_finite() || length <= T::zero() {
        return Err(GlpcaError::InvalidNumericValue(format!(
            "length={}",
            length.to_f64().unwrap_or(f64::NAN)
        )));
    }
    Ok(())
}
