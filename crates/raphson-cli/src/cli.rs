//! CLI argument definitions.

use std::path::PathBuf;

use clap::builder::FalseyValueParser;
use clap::{Parser, ValueEnum};

/// Raphson - approximate a root of x² - 4x - 7 with Newton-Raphson iteration
#[derive(Parser, Debug)]
#[command(name = "raphson")]
#[command(author, version, about, long_about = None)]
#[command(allow_negative_numbers = true)]
pub struct Cli {
    /// Initial guess x_0 [default: -4]
    #[arg(short, long, env = "RAPHSON_GUESS")]
    pub guess: Option<f64>,

    /// Number of Newton steps [default: 10]
    #[arg(short = 'n', long, env = "RAPHSON_ITERATIONS")]
    pub iterations: Option<u32>,

    /// Approximate the derivative with a forward difference
    #[arg(short, long, env = "RAPHSON_SECANT", value_parser = FalseyValueParser::new())]
    pub secant: bool,

    /// Forward-difference step size h [default: 0.001]
    #[arg(long, env = "RAPHSON_STEP")]
    pub step: Option<f64>,

    /// TOML file supplying guess, iterations, secant and step
    #[arg(short, long, env = "RAPHSON_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "plain")]
    pub format: OutputFormat,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// One `x_<i> = <value>` line per iterate
    #[default]
    Plain,
    /// JSON array of iterates
    Json,
    /// CSV with an `index,value` header
    Csv,
}
