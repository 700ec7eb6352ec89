//! Derivative estimation.
//!
//! A run uses one of two strategies, chosen once before iterating:
//!
//! - [`DerivativeEstimator::Analytic`]: a closed-form derivative
//! - [`DerivativeEstimator::ForwardDifference`]: the quotient
//!   `(f(x + h) - f(x)) / h`
//!
//! The forward difference is first-order accurate: its truncation error grows
//! with `h`, while cancellation error grows as `h` approaches machine epsilon.
//! A step of exactly zero yields `inf` or `NaN`.

use log::trace;

/// Default step size for the forward difference.
pub const DEFAULT_STEP: f64 = 1e-3;

/// Forward finite-difference approximation of `f'(x)` with step `h`.
///
/// # Example
///
/// ```rust
/// use raphson_math::derivative::forward_difference;
///
/// let f = |x: f64| x * x;
/// let slope = forward_difference(f, 3.0, 1e-3);
/// assert!((slope - 6.0).abs() < 2e-3);
/// ```
#[inline]
pub fn forward_difference<F>(f: F, x: f64, h: f64) -> f64
where
    F: Fn(f64) -> f64,
{
    let slope = (f(x + h) - f(x)) / h;
    trace!("forward difference at x={x}, h={h}: {slope}");
    slope
}

/// Strategy used to obtain `f'(x)` during iteration.
#[derive(Clone, Copy)]
pub enum DerivativeEstimator<D> {
    /// Evaluate the supplied analytic derivative.
    Analytic(D),
    /// Approximate with a forward difference of the iterated function.
    ForwardDifference {
        /// Step size `h`.
        step: f64,
    },
}

impl<D> DerivativeEstimator<D>
where
    D: Fn(f64) -> f64,
{
    /// Selects the forward difference when `use_secant` is set, otherwise the
    /// analytic derivative. `step` is ignored in the analytic case.
    pub fn select(use_secant: bool, derivative: D, step: f64) -> Self {
        if use_secant {
            Self::ForwardDifference { step }
        } else {
            Self::Analytic(derivative)
        }
    }

    /// Estimates the slope of `f` at `x`.
    #[inline]
    pub fn estimate<F>(&self, f: &F, x: f64) -> f64
    where
        F: Fn(f64) -> f64,
    {
        match self {
            Self::Analytic(df) => df(x),
            Self::ForwardDifference { step } => forward_difference(f, x, *step),
        }
    }

    /// Returns the finite-difference step, if any.
    pub fn step(&self) -> Option<f64> {
        match self {
            Self::Analytic(_) => None,
            Self::ForwardDifference { step } => Some(*step),
        }
    }

    /// Returns the name of the strategy.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Analytic(_) => "analytic",
            Self::ForwardDifference { .. } => "forward-difference",
        }
    }
}

impl<D> std::fmt::Debug for DerivativeEstimator<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Analytic(_) => f.write_str("Analytic(..)"),
            Self::ForwardDifference { step } => f
                .debug_struct("ForwardDifference")
                .field("step", step)
                .finish(),
        }
    }
}
