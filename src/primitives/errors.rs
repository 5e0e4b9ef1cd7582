//! Error types for graph matrices and gLPCA.
//!
//! ## Purpose
//!
//! This module defines the single error enum returned by every fallible
//! operation in the crate: graph construction, similarity graph building,
//! spectral decompositions and the gLPCA solver.
//!
//! ## Design notes
//!
//! * **Flat**: One enum, no nested sources, so it stays `Clone + PartialEq`.
//! * **no_std**: `Display` comes from `core::fmt`; `std::error::Error` is
//!   implemented only when the `std` feature is enabled.
//!
//! ## Non-goals
//!
//! * This module does not recover from errors or retry computations.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::string::String;

use core::fmt;

/// Errors produced while building graph matrices or fitting gLPCA.
#[derive(Debug, Clone, PartialEq)]
pub enum GlpcaError {
    /// A data or similarity matrix has no entries.
    EmptyInput,

    /// Too few samples for the requested computation.
    TooFewSamples {
        /// Number of samples provided.
        got: usize,
        /// Minimum number of samples required.
        min: usize,
    },

    /// A matrix does not have the expected shape.
    DimensionMismatch {
        /// Which matrix was rejected.
        what: &'static str,
        /// Expected (rows, cols).
        expected: (usize, usize),
        /// Actual (rows, cols).
        got: (usize, usize),
    },

    /// A matrix that must be square is not.
    NotSquare {
        /// Number of rows.
        rows: usize,
        /// Number of columns.
        cols: usize,
    },

    /// A matrix that must be symmetric is not.
    NotSymmetric {
        /// Row of the first offending entry.
        row: usize,
        /// Column of the first offending entry.
        col: usize,
    },

    /// A similarity weight is negative.
    NegativeWeight {
        /// Row of the offending entry.
        row: usize,
        /// Column of the offending entry.
        col: usize,
    },

    /// A NaN or infinite value was found.
    InvalidNumericValue(String),

    /// Mixing parameter outside [0, 1].
    InvalidBeta(f64),

    /// Number of components outside [1, max].
    InvalidComponents {
        /// Requested number of components.
        got: usize,
        /// Largest admissible value.
        max: usize,
    },

    /// Number of neighbours outside [1, max].
    InvalidNeighbors {
        /// Requested number of neighbours.
        got: usize,
        /// Largest admissible value.
        max: usize,
    },

    /// Heat kernel bandwidth is not positive and finite.
    InvalidBandwidth(f64),

    /// Tolerance is not positive and finite.
    InvalidTolerance(f64),

    /// Edge endpoint outside the node range.
    InvalidNode {
        /// Offending node index.
        node: usize,
        /// Number of nodes in the graph.
        n_nodes: usize,
    },

    /// An edge joins a node to itself.
    SelfLoop(usize),

    /// The same unordered edge appears twice.
    DuplicateEdge {
        /// First endpoint.
        u: usize,
        /// Second endpoint.
        v: usize,
    },

    /// The centered data matrix is identically zero.
    DegenerateData,

    /// The similarity graph has no edges but the graph term is requested.
    EmptyGraph,

    /// The symmetric eigensolver did not converge.
    EigenDecompositionFailed(&'static str),

    /// The beta grid of a sweep is empty.
    EmptyBetaGrid,

    /// Generic invalid input.
    InvalidInput(String),

    /// A builder parameter was configured more than once.
    DuplicateParameter {
        /// Name of the parameter.
        parameter: &'static str,
    },
}

impl fmt::Display for GlpcaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "Input matrix is empty"),
            Self::TooFewSamples { got, min } => {
                write!(f, "Too few samples: got {}, need at least {}", got, min)
            }
            Self::DimensionMismatch {
                what,
                expected,
                got,
            } => write!(
                f,
                "Dimension mismatch for {}: expected {}x{}, got {}x{}",
                what, expected.0, expected.1, got.0, got.1
            ),
            Self::NotSquare { rows, cols } => {
                write!(f, "Matrix is not square: {}x{}", rows, cols)
            }
            Self::NotSymmetric { row, col } => {
                write!(f, "Matrix is not symmetric at ({}, {})", row, col)
            }
            Self::NegativeWeight { row, col } => {
                write!(f, "Negative similarity weight at ({}, {})", row, col)
            }
            Self::InvalidNumericValue(msg) => write!(f, "Invalid numeric value: {}", msg),
            Self::InvalidBeta(beta) => {
                write!(f, "Invalid beta: {} (must be in [0, 1])", beta)
            }
            Self::InvalidComponents { got, max } => write!(
                f,
                "Invalid components: {} (must be between 1 and {})",
                got, max
            ),
            Self::InvalidNeighbors { got, max } => write!(
                f,
                "Invalid neighbors: {} (must be between 1 and {})",
                got, max
            ),
            Self::InvalidBandwidth(t) => write!(
                f,
                "Invalid heat kernel bandwidth: {} (must be > 0 and finite)",
                t
            ),
            Self::InvalidTolerance(tol) => {
                write!(f, "Invalid tolerance: {} (must be > 0 and finite)", tol)
            }
            Self::InvalidNode { node, n_nodes } => write!(
                f,
                "Invalid node index: {} (graph has {} nodes)",
                node, n_nodes
            ),
            Self::SelfLoop(node) => write!(
                f,
                "Self-loop at node {} is not allowed in a simple graph",
                node
            ),
            Self::DuplicateEdge { u, v } => write!(f, "Duplicate edge ({}, {})", u, v),
            Self::DegenerateData => {
                write!(f, "Data matrix has zero variance after centering")
            }
            Self::EmptyGraph => write!(
                f,
                "Similarity graph has no edges; the Laplacian term is undefined for beta > 0"
            ),
            Self::EigenDecompositionFailed(what) => {
                write!(f, "Eigendecomposition failed to converge for {}", what)
            }
            Self::EmptyBetaGrid => write!(f, "Beta grid is empty"),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Self::DuplicateParameter { parameter } => write!(
                f,
                "Parameter '{}' was set multiple times. Each parameter can only be configured once.",
                parameter
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GlpcaError {}
