//! Load minimization problems from text files and save results.
//!
//! A problem file contains two lines: the ON-set then the OFF-set, each as a list of
//! integers accepted by [parse_minterms]. Blank lines are ignored.

use crate::error::{EkspressoError, ParseError};
use crate::parse::parse_minterms;
use std::fmt::Display;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Parse the content of a problem file
pub fn parse_problem(content: &str) -> Result<(Vec<i64>, Vec<i64>), ParseError> {
    let lines: Vec<&str> = content.lines().filter(|l| !l.trim().is_empty()).collect();
    match lines[..] {
        [on, off] => Ok((parse_minterms(on)?, parse_minterms(off)?)),
        _ => Err(ParseError::LineCount(lines.len())),
    }
}

/// Read the ON-set and the OFF-set from a problem file
pub fn read_problem(path: impl AsRef<Path>) -> Result<(Vec<i64>, Vec<i64>), EkspressoError> {
    let content = fs::read_to_string(path)?;
    Ok(parse_problem(&content)?)
}

/// Write each item on its own line, replacing any existing file
pub fn save_lines<T: Display>(
    path: impl AsRef<Path>,
    lines: impl IntoIterator<Item = T>,
) -> Result<(), EkspressoError> {
    let mut out = BufWriter::new(File::create(path)?);
    for line in lines {
        writeln!(out, "{}", line)?;
    }
    out.flush()?;
    Ok(())
}
