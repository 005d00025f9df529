//! Entry lines of the coordinate text format: `(row, col, value)`

use alloc::string::ToString;
use alloc::vec::Vec;
use core::fmt;

use super::constants::ENTRY_SEPARATOR;
use crate::error::FormatError;
use crate::matrix::Value;
use crate::validation::parse_integer;

/// Parse one non-blank entry line into `(row, col, value)`
///
/// Surrounding whitespace and parentheses are stripped before splitting on
/// commas, so `(1, 2, 3)` and `1,2,3` are both accepted.
pub fn parse_entry(content: &str, line: usize) -> Result<(usize, usize, Value), FormatError> {
    let inner = content
        .trim()
        .trim_start_matches('(')
        .trim_end_matches(')');

    let fields: Vec<&str> = inner.split(ENTRY_SEPARATOR).collect();
    let &[row, col, value] = fields.as_slice() else {
        return Err(FormatError::EntryArity {
            line,
            found: fields.len(),
            content: content.to_string(),
        });
    };

    Ok((
        parse_integer(row, line)?,
        parse_integer(col, line)?,
        parse_integer(value, line)?,
    ))
}

/// Write one canonical entry line, without a newline
pub fn write_entry<W: fmt::Write>(out: &mut W, row: usize, col: usize, value: Value) -> fmt::Result {
    write!(out, "({row}, {col}, {value})")
}
