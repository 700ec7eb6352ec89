//! Output formatting utilities.

use std::io::Write;

use raphson_math::report::write_iterates;
use raphson_math::solvers::Iterate;

use crate::cli::OutputFormat;
use crate::error::CliResult;

/// Writes the iterate sequence in the requested format.
pub fn print_iterates<W, I>(out: &mut W, iterates: I, format: OutputFormat) -> CliResult<()>
where
    W: Write,
    I: IntoIterator<Item = Iterate>,
{
    match format {
        OutputFormat::Plain => {
            write_iterates(out, iterates)?;
        }
        OutputFormat::Json => print_json(out, iterates)?,
        OutputFormat::Csv => print_csv(out, iterates)?,
    }
    Ok(())
}

/// Prints iterates as a JSON array. Non-finite values become `null`.
fn print_json<W: Write>(out: &mut W, iterates: impl IntoIterator<Item = Iterate>) -> CliResult<()> {
    let data: Vec<Iterate> = iterates.into_iter().collect();
    serde_json::to_writer_pretty(&mut *out, &data)?;
    writeln!(out)?;
    Ok(())
}

/// Prints iterates as CSV.
fn print_csv<W: Write>(out: &mut W, iterates: impl IntoIterator<Item = Iterate>) -> CliResult<()> {
    let mut wtr = csv::Writer::from_writer(out);
    for iterate in iterates {
        wtr.serialize(iterate)?;
    }
    wtr.flush()?;
    Ok(())
}
