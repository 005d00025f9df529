//! Coordinate text to [`SparseMatrix`]

use core::str::FromStr;

use super::entry::parse_entry;
use super::header::Header;
use crate::error::FormatError;
use crate::matrix::SparseMatrix;

/// Parse coordinate text into a matrix
///
/// Entries are stored through [`SparseMatrix::set_element`]: a literal zero
/// clears its cell and an entry outside the header's dimensions is rejected.
/// When a coordinate repeats, the last line wins.
pub fn parse_matrix(text: &str) -> Result<SparseMatrix, FormatError> {
    let mut lines = text.lines().enumerate().map(|(i, line)| (i + 1, line));
    let header = Header::parse(&mut lines)?;

    let mut matrix = SparseMatrix::new(header.nrows, header.ncols);
    for (line, content) in lines {
        if content.trim().is_empty() {
            continue;
        }

        let (row, col, value) = parse_entry(content, line)?;
        matrix
            .set_element(row, col, value)
            .map_err(|bounds| FormatError::OutOfBounds {
                line,
                row: bounds.row,
                col: bounds.col,
                nrows: bounds.nrows,
                ncols: bounds.ncols,
            })?;
    }

    Ok(matrix)
}

impl FromStr for SparseMatrix {
    type Err = FormatError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        parse_matrix(text)
    }
}
