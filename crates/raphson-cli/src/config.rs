//! Run configuration.
//!
//! Values come from, in increasing priority: built-in defaults, an optional
//! TOML file, then command-line flags or their environment variables.

use std::path::Path;

use raphson_math::derivative::DEFAULT_STEP;
use raphson_math::solvers::{IterationConfig, DEFAULT_ITERATIONS};
use serde::Deserialize;

use crate::cli::Cli;
use crate::error::{CliError, CliResult};

/// Parameters of a single run.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RunConfig {
    /// Initial guess x_0
    #[serde(default = "default_guess")]
    pub guess: f64,

    /// Number of Newton steps
    #[serde(default = "default_iterations")]
    pub iterations: u32,

    /// Use the forward-difference derivative
    #[serde(default)]
    pub secant: bool,

    /// Forward-difference step size
    #[serde(default = "default_step")]
    pub step: f64,
}

fn default_guess() -> f64 {
    -4.0
}

fn default_iterations() -> u32 {
    DEFAULT_ITERATIONS
}

fn default_step() -> f64 {
    DEFAULT_STEP
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            guess: default_guess(),
            iterations: default_iterations(),
            secant: false,
            step: default_step(),
        }
    }
}

impl RunConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> CliResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| CliError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| CliError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Resolves the run parameters for parsed arguments.
    ///
    /// `--secant` can only switch the forward difference on; a config file
    /// that enables it cannot be overridden back to analytic from the flags.
    pub fn resolve(cli: &Cli) -> CliResult<Self> {
        let base = match &cli.config {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        Ok(base.with_overrides(cli))
    }

    fn with_overrides(self, cli: &Cli) -> Self {
        Self {
            guess: cli.guess.unwrap_or(self.guess),
            iterations: cli.iterations.unwrap_or(self.iterations),
            secant: cli.secant || self.secant,
            step: cli.step.unwrap_or(self.step),
        }
    }

    /// Converts to a validated solver configuration.
    pub fn iteration_config(&self) -> CliResult<IterationConfig> {
        let config = IterationConfig::new(self.iterations)
            .with_secant(self.secant)
            .with_step(self.step);
        config.validate()?;
        Ok(config)
    }
}
