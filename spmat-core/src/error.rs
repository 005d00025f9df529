//! Error types for sparse matrix parsing, mutation and arithmetic

use alloc::string::String;
use core::num::ParseIntError;

use crate::ops::Operation;

/// Errors raised while reading the coordinate text format
///
/// Every variant carries the 1-based line number it was detected on.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    /// A required header line is absent
    #[error("line {line}: missing `{key}=` header line")]
    MissingLine { line: usize, key: &'static str },
    /// A header line is not of the form `key=value`
    #[error("line {line}: expected `{key}=<integer>`, found {content:?}")]
    MalformedHeader {
        line: usize,
        key: &'static str,
        content: String,
    },
    /// A token could not be parsed as an integer
    #[error("line {line}: invalid integer {token:?}: {source}")]
    InvalidInteger {
        line: usize,
        token: String,
        #[source]
        source: ParseIntError,
    },
    /// An entry line does not hold exactly three values
    #[error("line {line}: expected `(row, col, value)`, found {found} value(s) in {content:?}")]
    EntryArity {
        line: usize,
        found: usize,
        content: String,
    },
    /// An entry lies outside the declared dimensions
    #[error("line {line}: entry ({row}, {col}) is outside a {nrows}x{ncols} matrix")]
    OutOfBounds {
        line: usize,
        row: usize,
        col: usize,
        nrows: usize,
        ncols: usize,
    },
}

impl FormatError {
    /// Line number (1-based) the error was detected on
    pub fn line(&self) -> usize {
        match self {
            FormatError::MissingLine { line, .. }
            | FormatError::MalformedHeader { line, .. }
            | FormatError::InvalidInteger { line, .. }
            | FormatError::EntryArity { line, .. }
            | FormatError::OutOfBounds { line, .. } => *line,
        }
    }
}

/// Errors raised by [`Operation::apply`] and the arithmetic functions
///
/// Both variants are raised before a result is returned; there are no
/// partial results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ArithmeticError {
    /// Operand shapes violate the operation's compatibility predicate
    #[error("{operation}: incompatible dimensions {left:?} and {right:?}")]
    DimensionMismatch {
        operation: Operation,
        left: (usize, usize),
        right: (usize, usize),
    },
    /// A result value does not fit in the element type
    #[error("{operation}: value at ({row}, {col}) overflows i64")]
    Overflow {
        operation: Operation,
        row: usize,
        col: usize,
    },
}

/// Coordinate outside a matrix's declared dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("index ({row}, {col}) is outside a {nrows}x{ncols} matrix")]
pub struct IndexOutOfBounds {
    pub row: usize,
    pub col: usize,
    pub nrows: usize,
    pub ncols: usize,
}

/// Operation name that is not one of the supported operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown operation {0:?}, expected one of: addition, subtraction, multiplication")]
pub struct UnknownOperation(pub String);
