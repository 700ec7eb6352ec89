//! The function under study and its analytic derivative.

/// The built-in target function `f(x) = x² - 4x - 7`.
///
/// Its roots are `2 ± √11`.
#[inline]
pub fn target_function(x: f64) -> f64 {
    x * x - 4.0 * x - 7.0
}

/// Analytic derivative of [`target_function`]: `f'(x) = 2x - 4`.
#[inline]
pub fn target_derivative(x: f64) -> f64 {
    2.0 * x - 4.0
}

/// A scalar function supplied together with its derivative.
///
/// The derivative is only consulted when iterating with
/// [`DerivativeEstimator::Analytic`](crate::derivative::DerivativeEstimator::Analytic).
#[derive(Clone, Copy)]
pub struct FunctionPair<F, D> {
    /// The function whose root is sought.
    pub function: F,
    /// Its analytic derivative.
    pub derivative: D,
}

impl<F, D> FunctionPair<F, D>
where
    F: Fn(f64) -> f64,
    D: Fn(f64) -> f64,
{
    /// Pairs a function with its derivative.
    pub fn new(function: F, derivative: D) -> Self {
        Self {
            function,
            derivative,
        }
    }

    /// Evaluates the function at `x`.
    #[inline]
    pub fn value(&self, x: f64) -> f64 {
        (self.function)(x)
    }

    /// Evaluates the analytic derivative at `x`.
    #[inline]
    pub fn slope(&self, x: f64) -> f64 {
        (self.derivative)(x)
    }
}

impl FunctionPair<fn(f64) -> f64, fn(f64) -> f64> {
    /// The built-in quadratic `x² - 4x - 7` with derivative `2x - 4`.
    pub fn quadratic() -> Self {
        Self::new(target_function, target_derivative)
    }
}

impl<F, D> std::fmt::Debug for FunctionPair<F, D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FunctionPair").finish_non_exhaustive()
    }
}
