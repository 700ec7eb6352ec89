//! Raphson CLI - fixed-count Newton-Raphson iteration from the command line.
//!
//! # Usage
//!
//! ```bash
//! # Ten analytic Newton steps from x_0 = -4
//! raphson
//!
//! # Forward-difference derivative with the default step h = 1e-3
//! raphson --guess -4 -n 10 --secant
//!
//! # Parameters from a TOML file, one overridden on the command line
//! raphson --config run.toml -n 20 --format json
//! ```

use std::io::{self, IsTerminal};

use anyhow::Result;
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use raphson_math::function::FunctionPair;
use raphson_math::solvers::newton_iterates;

mod cli;
mod config;
mod error;
mod output;

use cli::Cli;
use config::RunConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let run = RunConfig::resolve(&cli)?;
    debug!(?run, "resolved run parameters");

    let iteration = run.iteration_config()?;

    let pair = FunctionPair::quadratic();
    let estimator = iteration.estimator(pair.derivative);
    info!(
        guess = run.guess,
        iterations = run.iterations,
        derivative = estimator.name(),
        "approximating root of x^2 - 4x - 7"
    );

    let iterates = newton_iterates(pair.function, estimator, run.guess, run.iterations);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    output::print_iterates(&mut out, iterates, cli.format)?;

    Ok(())
}

/// Logs to stderr so stdout carries only the iterates.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("raphson=debug,raphson_math=debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_ansi(io::stderr().is_terminal()),
        )
        .init();
}
