//! Newton-Raphson iteration.
//!
//! The driver applies `x_{i+1} = x_i - f(x_i) / f'(x_i)` a fixed number of
//! times. There is no tolerance check and no guard against a vanishing
//! derivative: the sequence always has `n + 1` entries, and a zero slope
//! shows up as `inf`/`NaN` iterates.
//!
//! - [`newton_iterates`]: lazy iterate sequence for any function/derivative
//! - [`newton_raphson`]: runs a [`FunctionPair`](crate::function::FunctionPair)
//!   to completion and returns the final iterate
//! - [`approximate_root`]: the built-in quadratic, printed line by line
//!
//! # Example
//!
//! ```rust
//! use raphson_math::derivative::DerivativeEstimator;
//! use raphson_math::solvers::newton_iterates;
//!
//! let f = |x: f64| x * x - 2.0;
//! let df = |x: f64| 2.0 * x;
//!
//! let iterates: Vec<_> = newton_iterates(f, DerivativeEstimator::Analytic(df), 1.5, 4).collect();
//! assert_eq!(iterates.len(), 5);
//! assert!((iterates[4].value - std::f64::consts::SQRT_2).abs() < 1e-12);
//! ```

mod newton;

pub use newton::{
    approximate_root, approximate_root_to, newton_iterates, newton_raphson, NewtonIterates,
};

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::derivative::{DerivativeEstimator, DEFAULT_STEP};
use crate::error::{MathError, MathResult};

/// Default number of Newton steps.
pub const DEFAULT_ITERATIONS: u32 = 10;

/// Parameters of a fixed-count Newton-Raphson run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IterationConfig {
    /// Number of Newton steps to take.
    pub iterations: u32,
    /// Use a forward difference instead of the analytic derivative.
    pub use_secant: bool,
    /// Forward-difference step size. Ignored for the analytic derivative.
    pub step: f64,
}

impl Default for IterationConfig {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            use_secant: false,
            step: DEFAULT_STEP,
        }
    }
}

impl IterationConfig {
    /// Creates a configuration with the analytic derivative.
    #[must_use]
    pub fn new(iterations: u32) -> Self {
        Self {
            iterations,
            ..Self::default()
        }
    }

    /// Selects the forward-difference derivative.
    #[must_use]
    pub fn with_secant(mut self, use_secant: bool) -> Self {
        self.use_secant = use_secant;
        self
    }

    /// Sets the forward-difference step size.
    #[must_use]
    pub fn with_step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    /// Builds the derivative strategy for this configuration.
    pub fn estimator<D>(&self, derivative: D) -> DerivativeEstimator<D>
    where
        D: Fn(f64) -> f64,
    {
        DerivativeEstimator::select(self.use_secant, derivative, self.step)
    }

    /// Rejects a step size that cannot produce a slope estimate.
    ///
    /// The iteration itself never calls this; a zero step simply yields
    /// `NaN` iterates. Front ends use it to report bad input up front.
    pub fn validate(&self) -> MathResult<()> {
        if self.use_secant && (self.step == 0.0 || !self.step.is_finite()) {
            return Err(MathError::invalid_step(self.step));
        }
        Ok(())
    }
}

/// A single entry of the iterate sequence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Iterate {
    /// Position in the sequence; `0` is the initial guess.
    pub index: u32,
    /// The approximation at this position.
    pub value: f64,
}

impl fmt::Display for Iterate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x_{} = {}", self.index, self.value)
    }
}

/// Outcome of a completed run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IterationResult {
    /// The final iterate.
    pub root: f64,
    /// Number of Newton steps taken.
    pub iterations: u32,
    /// Function value at the final iterate.
    pub residual: f64,
}
