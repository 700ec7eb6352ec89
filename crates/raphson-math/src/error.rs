//! Error types for iteration setup.
//!
//! The Newton-Raphson loop itself never fails: degenerate arithmetic shows up
//! as non-finite iterates. These errors only come from validating parameters
//! before a run.

use thiserror::Error;

/// A specialized Result type for mathematical operations.
pub type MathResult<T> = Result<T, MathError>;

/// Errors that can occur while preparing an iteration.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    /// Finite-difference step size cannot produce a slope estimate.
    #[error("Invalid finite-difference step: {step:e}")]
    InvalidStep {
        /// The rejected step size.
        step: f64,
    },
}

impl MathError {
    /// Creates an invalid step error.
    #[must_use]
    pub fn invalid_step(step: f64) -> Self {
        Self::InvalidStep { step }
    }
}
