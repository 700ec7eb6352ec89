//! Newton-Raphson iteration driver.

use std::io::{self, Write};
use std::iter::FusedIterator;

use log::debug;

use crate::derivative::DerivativeEstimator;
use crate::function::{target_derivative, target_function, FunctionPair};
use crate::report::write_iterates;
use crate::solvers::{Iterate, IterationConfig, IterationResult};

type Quadratic = NewtonIterates<fn(f64) -> f64, fn(f64) -> f64>;

/// Lazy sequence of Newton-Raphson iterates.
///
/// Yields exactly `iterations + 1` items: the initial guess followed by one
/// item per Newton step. The derivative strategy is fixed at construction.
pub struct NewtonIterates<F, D> {
    function: F,
    derivative: DerivativeEstimator<D>,
    current: f64,
    next_index: u64,
    iterations: u32,
    saw_non_finite: bool,
}

/// Creates the iterate sequence for `function` starting at `initial_guess`.
///
/// Uses the iteration:
/// `x_{n+1} = x_n - f(x_n) / f'(x_n)`
///
/// The derivative is never checked before dividing. A zero slope produces an
/// infinite iterate and, typically, `NaN` for every step after it.
///
/// # Arguments
///
/// * `function` - The function for which to find a root
/// * `derivative` - How the slope is obtained at each step
/// * `initial_guess` - Starting point, emitted as `x_0`
/// * `iterations` - Number of Newton steps
pub fn newton_iterates<F, D>(
    function: F,
    derivative: DerivativeEstimator<D>,
    initial_guess: f64,
    iterations: u32,
) -> NewtonIterates<F, D>
where
    F: Fn(f64) -> f64,
    D: Fn(f64) -> f64,
{
    debug!(
        "newton-raphson from x_0={initial_guess} for {iterations} steps using {:?}",
        derivative
    );
    NewtonIterates {
        function,
        derivative,
        current: initial_guess,
        next_index: 0,
        iterations,
        saw_non_finite: false,
    }
}

impl<F, D> NewtonIterates<F, D>
where
    F: Fn(f64) -> f64,
    D: Fn(f64) -> f64,
{
    fn step(&mut self, index: u64) {
        let x = self.current;
        let slope = self.derivative.estimate(&self.function, x);
        let next = x - (self.function)(x) / slope;
        debug!("x_{index} = {next} (f'(x_{}) = {slope})", index - 1);

        if !next.is_finite() && !self.saw_non_finite {
            debug!("non-finite iterate x_{index} = {next} (slope {slope} at x = {x})");
            self.saw_non_finite = true;
        }
        self.current = next;
    }

    fn remaining(&self) -> u64 {
        (u64::from(self.iterations) + 1).saturating_sub(self.next_index)
    }
}

impl<F, D> Iterator for NewtonIterates<F, D>
where
    F: Fn(f64) -> f64,
    D: Fn(f64) -> f64,
{
    type Item = Iterate;

    fn next(&mut self) -> Option<Iterate> {
        if self.remaining() == 0 {
            return None;
        }

        let index = self.next_index;
        if index > 0 {
            self.step(index);
        }
        self.next_index += 1;

        Some(Iterate {
            // Bounded by `iterations`, which is a u32.
            index: u32::try_from(index).unwrap_or(u32::MAX),
            value: self.current,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining()) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl<F, D> ExactSizeIterator for NewtonIterates<F, D>
where
    F: Fn(f64) -> f64,
    D: Fn(f64) -> f64,
{
}

impl<F, D> FusedIterator for NewtonIterates<F, D>
where
    F: Fn(f64) -> f64,
    D: Fn(f64) -> f64,
{
}

impl<F, D> std::fmt::Debug for NewtonIterates<F, D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewtonIterates")
            .field("derivative", &self.derivative)
            .field("current", &self.current)
            .field("next_index", &self.next_index)
            .field("iterations", &self.iterations)
            .finish_non_exhaustive()
    }
}

/// Runs a fixed-count Newton-Raphson iteration to completion.
///
/// # Arguments
///
/// * `pair` - The function and its analytic derivative
/// * `initial_guess` - Starting point for the iteration
/// * `config` - Step count and derivative strategy
///
/// # Returns
///
/// The final iterate with its residual. Never fails: degenerate steps leave a
/// non-finite `root`.
///
/// # Example
///
/// ```rust
/// use raphson_math::function::FunctionPair;
/// use raphson_math::solvers::{newton_raphson, IterationConfig};
///
/// // Find root of x^2 - 2 (i.e., sqrt(2))
/// let pair = FunctionPair::new(|x: f64| x * x - 2.0, |x: f64| 2.0 * x);
///
/// let result = newton_raphson(pair, 1.5, &IterationConfig::new(6));
/// assert!((result.root - std::f64::consts::SQRT_2).abs() < 1e-12);
/// assert_eq!(result.iterations, 6);
/// ```
pub fn newton_raphson<F, D>(
    pair: FunctionPair<F, D>,
    initial_guess: f64,
    config: &IterationConfig,
) -> IterationResult
where
    F: Fn(f64) -> f64,
    D: Fn(f64) -> f64,
{
    let FunctionPair {
        function,
        derivative,
    } = pair;
    let estimator = config.estimator(derivative);

    let root = newton_iterates(&function, estimator, initial_guess, config.iterations)
        .last()
        .map_or(initial_guess, |iterate| iterate.value);

    IterationResult {
        root,
        iterations: config.iterations,
        residual: function(root),
    }
}

fn quadratic_iterates(guess: f64, n: u32, use_secant: bool, h: f64) -> Quadratic {
    let derivative: fn(f64) -> f64 = target_derivative;
    let function: fn(f64) -> f64 = target_function;
    newton_iterates(
        function,
        DerivativeEstimator::select(use_secant, derivative, h),
        guess,
        n,
    )
}

/// Approximates a root of `x² - 4x - 7`, printing every iterate to stdout.
///
/// Prints `x_0 = <guess>` and then one `x_<i> = <value>` line per step.
/// `h` is only used when `use_secant` is set; pass
/// [`DEFAULT_STEP`](crate::derivative::DEFAULT_STEP) for the usual step.
///
/// Returns the final iterate.
///
/// # Panics
///
/// Panics if writing to stdout fails, as `println!` does.
///
/// # Example
///
/// ```rust
/// use raphson_math::derivative::DEFAULT_STEP;
/// use raphson_math::solvers::approximate_root;
///
/// let root = approximate_root(5.0, 10, false, DEFAULT_STEP);
/// assert!((root - (2.0 + 11.0_f64.sqrt())).abs() < 1e-6);
/// ```
pub fn approximate_root(guess: f64, n: u32, use_secant: bool, h: f64) -> f64 {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    approximate_root_to(&mut out, guess, n, use_secant, h)
        .unwrap_or_else(|err| panic!("failed printing to stdout: {err}"))
}

/// Same as [`approximate_root`], writing to `out` instead of stdout.
pub fn approximate_root_to<W: Write>(
    out: &mut W,
    guess: f64,
    n: u32,
    use_secant: bool,
    h: f64,
) -> io::Result<f64> {
    let last = write_iterates(out, quadratic_iterates(guess, n, use_secant, h))?;
    Ok(last.map_or(guess, |iterate| iterate.value))
}
