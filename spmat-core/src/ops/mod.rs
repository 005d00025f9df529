//! Arithmetic over sparse matrices
//!
//! Every operation reads both operands and returns a new matrix. Operand
//! dimensions are checked before any computation starts.

mod elementwise;
mod multiply;

use alloc::string::ToString;
use core::fmt;
use core::str::FromStr;

pub use elementwise::{add, subtract};
pub use multiply::multiply;

use crate::error::{ArithmeticError, UnknownOperation};
use crate::matrix::SparseMatrix;

/// The supported binary matrix operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Operation {
    /// Elementwise sum, operands of equal shape
    Addition,
    /// Elementwise difference, operands of equal shape
    Subtraction,
    /// Matrix product, `left.ncols == right.nrows`
    Multiplication,
}

impl Operation {
    /// All operations, in menu order
    pub const ALL: [Operation; 3] = [
        Operation::Addition,
        Operation::Subtraction,
        Operation::Multiplication,
    ];

    /// Lowercase name, also used in result file names
    pub const fn name(self) -> &'static str {
        match self {
            Operation::Addition => "addition",
            Operation::Subtraction => "subtraction",
            Operation::Multiplication => "multiplication",
        }
    }

    /// Whether the operand shapes satisfy this operation's predicate
    pub fn dimensions_compatible(self, left: &SparseMatrix, right: &SparseMatrix) -> bool {
        self.result_dimensions(left, right).is_some()
    }

    /// Shape of the result, or `None` when the operands are incompatible
    pub fn result_dimensions(
        self,
        left: &SparseMatrix,
        right: &SparseMatrix,
    ) -> Option<(usize, usize)> {
        match self {
            Operation::Addition | Operation::Subtraction => {
                (left.dimensions() == right.dimensions()).then(|| left.dimensions())
            }
            Operation::Multiplication => {
                (left.ncols() == right.nrows()).then(|| (left.nrows(), right.ncols()))
            }
        }
    }

    /// Result shape, or [`ArithmeticError::DimensionMismatch`]
    pub fn check(
        self,
        left: &SparseMatrix,
        right: &SparseMatrix,
    ) -> Result<(usize, usize), ArithmeticError> {
        self.result_dimensions(left, right)
            .ok_or(ArithmeticError::DimensionMismatch {
                operation: self,
                left: left.dimensions(),
                right: right.dimensions(),
            })
    }

    /// Apply this operation to `left` and `right`
    pub fn apply(
        self,
        left: &SparseMatrix,
        right: &SparseMatrix,
    ) -> Result<SparseMatrix, ArithmeticError> {
        match self {
            Operation::Addition => add(left, right),
            Operation::Subtraction => subtract(left, right),
            Operation::Multiplication => multiply(left, right),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = UnknownOperation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "addition" | "add" => Ok(Operation::Addition),
            "subtraction" | "sub" => Ok(Operation::Subtraction),
            "multiplication" | "mul" => Ok(Operation::Multiplication),
            _ => Err(UnknownOperation(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn zeros(nrows: usize, ncols: usize) -> SparseMatrix {
        SparseMatrix::new(nrows, ncols)
    }

    #[test]
    fn test_operation_names_round_trip() {
        for operation in Operation::ALL {
            assert_eq!(operation.name().parse::<Operation>(), Ok(operation));
        }
        assert_eq!("MUL".parse::<Operation>(), Ok(Operation::Multiplication));
        assert_eq!(" sub ".parse::<Operation>(), Ok(Operation::Subtraction));
        assert_eq!(
            "division".parse::<Operation>(),
            Err(UnknownOperation("division".to_string()))
        );
    }

    #[test]
    fn test_dimensions_compatible() {
        let a = zeros(2, 3);
        let b = zeros(3, 2);

        assert!(!Operation::Addition.dimensions_compatible(&a, &b));
        assert!(!Operation::Subtraction.dimensions_compatible(&a, &b));
        assert!(Operation::Multiplication.dimensions_compatible(&a, &b));

        assert!(Operation::Addition.dimensions_compatible(&a, &a));
        assert!(!Operation::Multiplication.dimensions_compatible(&a, &a));
    }

    #[test]
    fn test_result_dimensions() {
        let a = zeros(2, 3);
        let b = zeros(3, 5);
        assert_eq!(
            Operation::Multiplication.result_dimensions(&a, &b),
            Some((2, 5))
        );
        assert_eq!(Operation::Addition.result_dimensions(&b, &b), Some((3, 5)));
        assert_eq!(Operation::Addition.result_dimensions(&a, &b), None);
    }

    #[test]
    fn test_apply_reports_dimension_mismatch() {
        let a = SparseMatrix::from_entries(2, 3, vec![(0, 0, 1)]).unwrap();
        let b = SparseMatrix::from_entries(3, 2, vec![(0, 0, 1)]).unwrap();

        assert_eq!(
            Operation::Addition.apply(&a, &b),
            Err(ArithmeticError::DimensionMismatch {
                operation: Operation::Addition,
                left: (2, 3),
                right: (3, 2),
            })
        );

        let product = Operation::Multiplication.apply(&a, &b).unwrap();
        assert_eq!(product.dimensions(), (2, 2));
        assert_eq!(product.sorted_entries(), vec![(0, 0, 1)]);
    }
}
