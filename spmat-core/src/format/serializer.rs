//! Canonical text rendering of a [`SparseMatrix`]

use alloc::string::{String, ToString};
use core::fmt;

use super::entry::write_entry;
use super::header::Header;
use crate::matrix::SparseMatrix;

/// Write the canonical form of `matrix`
///
/// Header first, then one entry per line sorted by `(row, col)`. No trailing
/// newline is written.
pub fn write_canonical<W: fmt::Write>(matrix: &SparseMatrix, out: &mut W) -> fmt::Result {
    Header::new(matrix.nrows(), matrix.ncols()).write(out)?;
    for (row, col, value) in matrix.sorted_entries() {
        out.write_char('\n')?;
        write_entry(out, row, col, value)?;
    }
    Ok(())
}

/// Render the canonical form of `matrix` into a new string
pub fn to_canonical_string(matrix: &SparseMatrix) -> String {
    matrix.to_string()
}

impl fmt::Display for SparseMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_canonical(self, f)
    }
}
