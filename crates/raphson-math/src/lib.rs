//! # Raphson Math
//!
//! Fixed-count Newton-Raphson iteration for scalar functions.
//!
//! This crate provides:
//!
//! - **Function**: The function under study paired with its analytic derivative
//! - **Derivative**: Analytic or forward finite-difference slope estimation
//! - **Solvers**: The Newton-Raphson iteration driver and its iterate sequence
//! - **Report**: Line-oriented rendering of iterates (`x_<i> = <value>`)
//!
//! ## Design Philosophy
//!
//! - **Fixed iteration count**: Exactly `n` steps are taken, no tolerance check
//! - **Unguarded arithmetic**: A zero derivative yields `inf`/`NaN` iterates,
//!   which propagate through the remaining steps
//! - **Generic**: Any `Fn(f64) -> f64` pair can be iterated
//!
//! ## Example
//!
//! ```rust
//! use raphson_math::prelude::*;
//!
//! let pair = FunctionPair::quadratic();
//! let config = IterationConfig::new(10);
//!
//! let result = newton_raphson(pair, 5.0, &config);
//! assert!((result.root - (2.0 + 11.0_f64.sqrt())).abs() < 1e-6);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::float_cmp)]

pub mod derivative;
pub mod error;
pub mod function;
pub mod report;
pub mod solvers;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::derivative::{forward_difference, DerivativeEstimator, DEFAULT_STEP};
    pub use crate::error::{MathError, MathResult};
    pub use crate::function::{target_derivative, target_function, FunctionPair};
    pub use crate::report::write_iterates;
    pub use crate::solvers::{
        approximate_root, approximate_root_to, newton_iterates, newton_raphson, Iterate,
        IterationConfig, IterationResult, NewtonIterates,
    };
}

pub use error::{MathError, MathResult};
