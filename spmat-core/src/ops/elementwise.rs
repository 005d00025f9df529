//! Elementwise addition and subtraction

use super::Operation;
use crate::error::ArithmeticError;
use crate::matrix::{SparseMatrix, Value};

/// Elementwise sum of two equally shaped matrices
pub fn add(left: &SparseMatrix, right: &SparseMatrix) -> Result<SparseMatrix, ArithmeticError> {
    combine(Operation::Addition, left, right, Value::checked_add)
}

/// Elementwise difference `left - right` of two equally shaped matrices
pub fn subtract(left: &SparseMatrix, right: &SparseMatrix) -> Result<SparseMatrix, ArithmeticError> {
    combine(Operation::Subtraction, left, right, Value::checked_sub)
}

/// Start from a copy of `left` and fold every entry of `right` into it
///
/// Cells whose result is zero are removed. Cost is O(nnz(left) + nnz(right)).
fn combine(
    operation: Operation,
    left: &SparseMatrix,
    right: &SparseMatrix,
    op: fn(Value, Value) -> Option<Value>,
) -> Result<SparseMatrix, ArithmeticError> {
    operation.check(left, right)?;

    let mut result = left.clone();
    for (row, col, value) in right.entries() {
        let combined = op(result.get_element(row, col), value)
            .ok_or(ArithmeticError::Overflow { operation, row, col })?;
        result.store((row, col), combined);
    }
    Ok(result)
}
