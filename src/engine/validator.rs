//! Input validation for gLPCA configuration and data.
//!
//! ## Purpose
//!
//! This module provides validation functions for gLPCA configuration
//! parameters, data matrices and similarity matrices. It checks shapes,
//! finiteness, symmetry, non-negativity and parameter bounds.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Invariants
//!
//! * All validated inputs satisfy their respective mathematical constraints.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not symmetrize, clip or otherwise repair inputs.
//! * This module does not perform the decomposition itself.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use nalgebra::{DMatrix, Scalar};
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::GlpcaError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for gLPCA configuration and input data.
///
/// Provides static methods that return `Result<(), GlpcaError>` and fail
/// fast upon identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Matrix Validation
    // ========================================================================

    /// Validate a data matrix (features x samples).
    pub fn validate_data<T: Float + Scalar>(x: &DMatrix<T>) -> Result<(), GlpcaError> {
        // Check 1: Non-empty
        if x.is_empty() {
            return Err(GlpcaError::EmptyInput);
        }

        // Check 2: At least two samples
        if x.ncols() < 2 {
            return Err(GlpcaError::TooFewSamples {
                got: x.ncols(),
                min: 2,
            });
        }

        // Check 3: All values finite
        Self::validate_finite(x, "X")
    }

    /// Validate a similarity matrix against `n` samples.
    ///
    /// `W` must be `n x n`, finite, non-negative and symmetric within
    /// `tolerance * max(1, |w_ij|)`.
    pub fn validate_similarity<T: Float + Scalar>(
        w: &DMatrix<T>,
        n: usize,
        tolerance: T,
    ) -> Result<(), GlpcaError> {
        let (rows, cols) = w.shape();
        if rows != cols {
            return Err(GlpcaError::NotSquare { rows, cols });
        }
        if rows != n {
            return Err(GlpcaError::DimensionMismatch {
                what: "W",
                expected: (n, n),
                got: (rows, cols),
            });
        }

        Self::validate_finite(w, "W")?;

        for i in 0..n {
            for j in 0..n {
                let wij = w[(i, j)];
                if wij < T::zero() {
                    return Err(GlpcaError::NegativeWeight { row: i, col: j });
                }
                if j > i {
                    let scale = T::one().max(wij.abs());
                    if (wij - w[(j, i)]).abs() > tolerance * scale {
                        return Err(GlpcaError::NotSymmetric { row: i, col: j });
                    }
                }
            }
        }

        Ok(())
    }

    /// Validate that every entry of `m` is finite.
    pub fn validate_finite<T: Float + Scalar>(
        m: &DMatrix<T>,
        name: &str,
    ) -> Result<(), GlpcaError> {
        for j in 0..m.ncols() {
            for i in 0..m.nrows() {
                let val = m[(i, j)];
                if !val.is_finite() {
                    return Err(GlpcaError::InvalidNumericValue(format!(
                        "{}[{}, {}]={}",
                        name,
                        i,
                        j,
                        val.to_f64().unwrap_or(f64::NAN)
                    )));
                }
            }
        }
        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate the mixing parameter beta in [0, 1].
    pub fn validate_beta<T: Float>(beta: T) -> Result<(), GlpcaError> {
        if !beta.is_finite() || beta < T::zero() || beta > T::one() {
            return Err(GlpcaError::InvalidBeta(beta.to_f64().unwrap_or(f64::NAN)));
        }
        Ok(())
    }

    /// Validate a grid of betas for a sweep.
    pub fn validate_beta_grid<T: Float>(betas: &[T]) -> Result<(), GlpcaError> {
        if betas.is_empty() {
            return Err(GlpcaError::EmptyBetaGrid);
        }
        for &beta in betas {
            Self::validate_beta(beta)?;
        }
        Ok(())
    }

    /// Validate the number of components against the number of samples.
    pub fn validate_components(k: usize, n_samples: usize) -> Result<(), GlpcaError> {
        if k == 0 || k > n_samples {
            return Err(GlpcaError::InvalidComponents {
                got: k,
                max: n_samples,
            });
        }
        Ok(())
    }

    /// Validate a positive, finite tolerance.
    pub fn validate_tolerance<T: Float>(tol: T) -> Result<(), GlpcaError> {
        if !tol.is_finite() || tol <= T::zero() {
            return Err(GlpcaError::InvalidTolerance(
                tol.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(duplicate_param: Option<&'static str>) -> Result<(), GlpcaError> {
        if let Some(param) = duplicate_param {
            return Err(GlpcaError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
