//! Sparse integer matrix entity
//!
//! A [`SparseMatrix`] stores its dimensions and a map from `(row, col)` to
//! non-zero values. Absent coordinates read as zero.

use alloc::vec::Vec;
use hashbrown::HashMap;

use crate::error::IndexOutOfBounds;
use crate::validation::validate_coordinate;

/// Element type stored in a [`SparseMatrix`]
pub type Value = i64;

/// `(row, col)` position of an entry
pub type Coordinate = (usize, usize);

/// Sparse matrix storing only its non-zero entries
///
/// Dimensions are fixed at construction. Every stored entry is non-zero and
/// lies inside `[0, nrows) x [0, ncols)`; [`SparseMatrix::set_element`] is
/// the only public mutator and upholds both properties.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SparseMatrix {
    nrows: usize,
    ncols: usize,
    elements: HashMap<Coordinate, Value>,
}

impl SparseMatrix {
    /// Create an empty `nrows x ncols` matrix
    pub fn new(nrows: usize, ncols: usize) -> Self {
        Self {
            nrows,
            ncols,
            elements: HashMap::new(),
        }
    }

    /// Build a matrix from `(row, col, value)` triples
    ///
    /// Entries go through [`SparseMatrix::set_element`], so zeros are dropped
    /// and later duplicates overwrite earlier ones.
    pub fn from_entries<I>(nrows: usize, ncols: usize, entries: I) -> Result<Self, IndexOutOfBounds>
    where
        I: IntoIterator<Item = (usize, usize, Value)>,
    {
        let mut matrix = Self::new(nrows, ncols);
        for (row, col, value) in entries {
            matrix.set_element(row, col, value)?;
        }
        Ok(matrix)
    }

    /// Number of rows
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Number of columns
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// Matrix dimensions as (rows, cols)
    pub fn dimensions(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    /// Number of stored (non-zero) entries
    pub fn nnz(&self) -> usize {
        self.elements.len()
    }

    /// True when no entry is stored
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Value at `(row, col)`, or 0 when nothing is stored there
    ///
    /// Coordinates outside the dimensions are not an error; they read as 0.
    pub fn get_element(&self, row: usize, col: usize) -> Value {
        self.elements.get(&(row, col)).copied().unwrap_or(0)
    }

    /// True when an entry is stored at `(row, col)`
    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.elements.contains_key(&(row, col))
    }

    /// Store `value` at `(row, col)`, removing the entry when `value` is 0
    pub fn set_element(&mut self, row: usize, col: usize, value: Value) -> Result<(), IndexOutOfBounds> {
        validate_coordinate(row, col, self.nrows, self.ncols)?;
        self.store((row, col), value);
        Ok(())
    }

    /// Iterate over stored entries in unspecified order
    pub fn entries(&self) -> impl Iterator<Item = (usize, usize, Value)> + '_ {
        self.elements
            .iter()
            .map(|(&(row, col), &value)| (row, col, value))
    }

    /// Stored entries sorted ascending by `(row, col)`
    pub fn sorted_entries(&self) -> Vec<(usize, usize, Value)> {
        let mut entries: Vec<_> = self.entries().collect();
        entries.sort_unstable_by_key(|&(row, col, _)| (row, col));
        entries
    }

    /// Non-zero entries of one row as `(col, value)`, in column order
    pub fn row(&self, row_index: usize) -> Vec<(usize, Value)> {
        let mut row: Vec<_> = self
            .entries()
            .filter(|&(row, _, _)| row == row_index)
            .map(|(_, col, value)| (col, value))
            .collect();
        row.sort_unstable_by_key(|&(col, _)| col);
        row
    }

    /// Non-zero entries of one column as `(row, value)`, in row order
    pub fn col(&self, col_index: usize) -> Vec<(usize, Value)> {
        let mut col: Vec<_> = self
            .entries()
            .filter(|&(_, col, _)| col == col_index)
            .map(|(row, _, value)| (row, value))
            .collect();
        col.sort_unstable_by_key(|&(row, _)| row);
        col
    }

    /// Zero-pruning write without a bounds check
    ///
    /// Callers guarantee `coordinate` is inside the dimensions.
    pub(crate) fn store(&mut self, coordinate: Coordinate, value: Value) {
        debug_assert!(coordinate.0 < self.nrows && coordinate.1 < self.ncols);
        if value != 0 {
            self.elements.insert(coordinate, value);
        } else {
            self.elements.remove(&coordinate);
        }
    }
}
