//! Layer 5: Engine
//!
//! # Purpose
//!
//! Orchestration of a gLPCA fit:
//! - Input and parameter validation
//! - The closed-form solver (prepare once, solve per beta)
//! - Result types and their formatting

/// Input validation.
pub mod validator;

/// Closed-form gLPCA solver.
pub mod executor;

/// Result types.
pub mod output;
