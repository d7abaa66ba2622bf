use std::io::{BufRead, Write};

use crate::error::{Error, Result};

pub const PROMPT: &str = "Provide number of points to make:";

/// Parses a point count, rejecting anything but a non-negative integer.
pub fn parse_count(s: &str) -> Result<usize> {
    let s = s.trim();
    if s.is_empty() {
        return Err(Error::InvalidArgument("point count is empty".into()));
    }
    s.parse()
        .map_err(|_| Error::InvalidArgument(format!("{s:?} is not a non-negative integer")))
}

/// Reads a single line from `reader` and parses it as a point count.
pub fn read_count<R: BufRead>(mut reader: R) -> Result<usize> {
    let mut line = String::new();
    reader.read_line(&mut line)?;
    parse_count(&line)
}

/// Asks for the point count on `out`, then reads it from `reader`.
pub fn prompt_count<R: BufRead, W: Write>(reader: R, out: &mut W) -> Result<usize> {
    writeln!(out, "{PROMPT}")?;
    out.flush()?;
    read_count(reader)
}
