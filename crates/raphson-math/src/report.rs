//! Line-oriented rendering of iterate sequences.

use std::io::{self, Write};

use crate::solvers::Iterate;

/// Writes one `x_<i> = <value>` line per iterate and returns the last one.
///
/// Values use the `Display` form of `f64`, so non-finite iterates appear as
/// `inf`, `-inf` or `NaN`.
pub fn write_iterates<W, I>(out: &mut W, iterates: I) -> io::Result<Option<Iterate>>
where
    W: Write,
    I: IntoIterator<Item = Iterate>,
{
    let mut last = None;
    for iterate in iterates {
        writeln!(out, "{iterate}")?;
        last = Some(iterate);
    }
    out.flush()?;
    Ok(last)
}
