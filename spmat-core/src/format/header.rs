//! Dimension header of the coordinate text format

use core::fmt;

use super::constants::{COLS_KEY, HEADER_SEPARATOR, ROWS_KEY};
use crate::error::FormatError;
use crate::validation::{parse_integer, split_header};

/// The two header lines of a coordinate file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Header {
    /// Number of rows
    pub nrows: usize,
    /// Number of columns
    pub ncols: usize,
}

impl Header {
    /// Create a header for an `nrows x ncols` matrix
    pub const fn new(nrows: usize, ncols: usize) -> Self {
        Self { nrows, ncols }
    }

    /// Read `rows=` then `cols=` from numbered lines
    ///
    /// Consumes exactly two items from `lines` when successful. Items are
    /// `(line_number, content)` with 1-based line numbers.
    pub fn parse<'a, I>(lines: &mut I) -> Result<Self, FormatError>
    where
        I: Iterator<Item = (usize, &'a str)>,
    {
        let nrows = parse_header_line(lines.next(), ROWS_KEY, 1)?;
        let ncols = parse_header_line(lines.next(), COLS_KEY, 2)?;
        Ok(Self { nrows, ncols })
    }

    /// Write both header lines, separated by `\n`, without a trailing newline
    pub fn write<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        write!(
            out,
            "{ROWS_KEY}{HEADER_SEPARATOR}{}\n{COLS_KEY}{HEADER_SEPARATOR}{}",
            self.nrows, self.ncols
        )
    }
}

fn parse_header_line(
    line: Option<(usize, &str)>,
    key: &'static str,
    expected_line: usize,
) -> Result<usize, FormatError> {
    let (line, content) = line.ok_or(FormatError::MissingLine {
        line: expected_line,
        key,
    })?;
    let value = split_header(content, key, line)?;
    parse_integer(value, line)
}
