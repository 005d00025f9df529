//! Sparse matrix product
//!
//! The product walks the non-zero entries of the left operand row by row.
//! Each `left[i, k]` is multiplied with every entry of row `k` of the right
//! operand and accumulated into a running sum for row `i` of the result.
//! Work is proportional to `nnz(left) * average row fan-out(right)`, never to
//! the full `rows(left) x cols(right)` cross product.

use alloc::vec::Vec;
use hashbrown::HashMap;

use super::Operation;
use crate::error::ArithmeticError;
use crate::matrix::{SparseMatrix, Value};

/// Entries of a matrix grouped by row, each row sorted by column
///
/// Only rows holding at least one non-zero entry are present.
pub(crate) struct RowIndex {
    rows: HashMap<usize, Vec<(usize, Value)>>,
}

impl RowIndex {
    pub(crate) fn new(matrix: &SparseMatrix) -> Self {
        let mut rows: HashMap<usize, Vec<(usize, Value)>> = HashMap::new();
        for (row, col, value) in matrix.entries() {
            rows.entry(row).or_default().push((col, value));
        }
        for entries in rows.values_mut() {
            entries.sort_unstable_by_key(|&(col, _)| col);
        }
        Self { rows }
    }

    /// Non-zero `(col, value)` pairs of `row`; empty when the row is all zero
    pub(crate) fn row(&self, row: usize) -> &[(usize, Value)] {
        self.rows.get(&row).map(Vec::as_slice).unwrap_or(&[])
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (usize, &[(usize, Value)])> {
        self.rows.iter().map(|(&row, entries)| (row, entries.as_slice()))
    }
}

/// Exact running sum of `i64` products
///
/// The sum wraps in `i128` and each wrap is counted, so a partial sum may leave
/// the `i128` range while later products bring it back.
#[derive(Debug, Clone, Copy, Default)]
struct Accumulator {
    sum: i128,
    wraps: i64,
}

impl Accumulator {
    fn add(&mut self, product: i128) {
        let (sum, wrapped) = self.sum.overflowing_add(product);
        if wrapped {
            self.wraps += if product > 0 { 1 } else { -1 };
        }
        self.sum = sum;
    }

    /// The total, or `None` when it does not fit in [`Value`]
    fn total(self) -> Option<Value> {
        // Any outstanding wrap puts the total at least 2^127 away from zero
        if self.wraps != 0 {
            return None;
        }
        Value::try_from(self.sum).ok()
    }
}

/// Matrix product `left * right`
///
/// Requires `left.ncols() == right.nrows()`; the result is
/// `left.nrows() x right.ncols()`. Sums are exact: only the final value of a
/// cell must fit into [`Value`], not its partial sums.
pub fn multiply(left: &SparseMatrix, right: &SparseMatrix) -> Result<SparseMatrix, ArithmeticError> {
    const OPERATION: Operation = Operation::Multiplication;
    let (nrows, ncols) = OPERATION.check(left, right)?;

    let left_rows = RowIndex::new(left);
    let right_rows = RowIndex::new(right);

    let mut result = SparseMatrix::new(nrows, ncols);
    let mut sums: HashMap<usize, Accumulator> = HashMap::new();

    for (i, left_row) in left_rows.iter() {
        sums.clear();

        for &(k, a) in left_row {
            for &(j, b) in right_rows.row(k) {
                sums.entry(j).or_default().add(i128::from(a) * i128::from(b));
            }
        }

        for (&j, sum) in &sums {
            let value = sum.total().ok_or(ArithmeticError::Overflow {
                operation: OPERATION,
                row: i,
                col: j,
            })?;
            result.store((i, j), value);
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    fn matrix(nrows: usize, ncols: usize, entries: Vec<(usize, usize, Value)>) -> SparseMatrix {
        SparseMatrix::from_entries(nrows, ncols, entries).unwrap()
    }

    /// Row-by-column dot products over every cell
    fn naive_product(left: &SparseMatrix, right: &SparseMatrix) -> SparseMatrix {
        let mut result = SparseMatrix::new(left.nrows(), right.ncols());
        for i in 0..left.nrows() {
            for j in 0..right.ncols() {
                let sum: Value = (0..left.ncols())
                    .map(|k| left.get_element(i, k) * right.get_element(k, j))
                    .sum();
                result.set_element(i, j, sum).unwrap();
            }
        }
        result
    }

    #[test]
    fn test_multiply() {
        let a = matrix(2, 2, vec![(0, 0, 1), (1, 1, 2)]);
        let c = matrix(2, 1, vec![(0, 0, 5), (1, 0, 6)]);

        let product = multiply(&a, &c).unwrap();
        assert_eq!(product.dimensions(), (2, 1));
        assert_eq!(product.sorted_entries(), vec![(0, 0, 5), (1, 0, 12)]);
    }

    #[test]
    fn test_multiply_rectangular() {
        // [1 0 2]   [0 1]   [6 1]
        // [0 3 0] x [4 0] = [12 0]
        //           [3 0]
        let a = matrix(2, 3, vec![(0, 0, 1), (0, 2, 2), (1, 1, 3)]);
        let b = matrix(3, 2, vec![(0, 1, 1), (1, 0, 4), (2, 0, 3)]);

        let product = multiply(&a, &b).unwrap();
        assert_eq!(product.dimensions(), (2, 2));
        assert_eq!(product.sorted_entries(), vec![(0, 0, 6), (0, 1, 1), (1, 0, 12)]);
    }

    #[test]
    fn test_multiply_cancellation_is_pruned() {
        // Row [1, 1] times column [2, -2] sums to zero
        let a = matrix(1, 2, vec![(0, 0, 1), (0, 1, 1)]);
        let b = matrix(2, 1, vec![(0, 0, 2), (1, 0, -2)]);

        let product = multiply(&a, &b).unwrap();
        assert!(product.is_empty());
        assert_eq!(product.dimensions(), (1, 1));
    }

    #[test]
    fn test_multiply_dimension_mismatch() {
        let a = matrix(2, 3, vec![]);
        assert_eq!(
            multiply(&a, &a),
            Err(ArithmeticError::DimensionMismatch {
                operation: Operation::Multiplication,
                left: (2, 3),
                right: (2, 3),
            })
        );
    }

    #[test]
    fn test_multiply_overflow() {
        let a = matrix(1, 1, vec![(0, 0, Value::MAX)]);
        let b = matrix(1, 1, vec![(0, 0, 2)]);
        assert_eq!(
            multiply(&a, &b),
            Err(ArithmeticError::Overflow {
                operation: Operation::Multiplication,
                row: 0,
                col: 0,
            })
        );
    }

    #[test]
    fn test_multiply_intermediate_sum_may_exceed_value_range() {
        // MAX * 1 + MAX * 1 - MAX * 1 fits even though the partial sum does not
        let a = matrix(1, 3, vec![(0, 0, Value::MAX), (0, 1, Value::MAX), (0, 2, Value::MAX)]);
        let b = matrix(3, 1, vec![(0, 0, 1), (1, 0, 1), (2, 0, -1)]);

        let product = multiply(&a, &b).unwrap();
        assert_eq!(product.get_element(0, 0), Value::MAX);
    }

    #[test]
    fn test_multiply_partial_sums_beyond_i128_cancel() {
        // Three MAX^2 products exceed i128 before the next three cancel them
        let a = matrix(1, 6, (0..6).map(|k| (0, k, Value::MAX)).collect());
        let b = matrix(
            6,
            1,
            (0..6)
                .map(|k| (k, 0, if k < 3 { Value::MAX } else { -Value::MAX }))
                .collect(),
        );

        let product = multiply(&a, &b).unwrap();
        assert!(product.is_empty());
        assert_eq!(product.dimensions(), (1, 1));
    }

    #[test]
    fn test_multiply_overflow_beyond_i128() {
        let a = matrix(1, 3, (0..3).map(|k| (0, k, Value::MAX)).collect());
        let b = matrix(3, 1, (0..3).map(|k| (k, 0, Value::MAX)).collect());
        assert_eq!(
            multiply(&a, &b),
            Err(ArithmeticError::Overflow {
                operation: Operation::Multiplication,
                row: 0,
                col: 0,
            })
        );
    }

    #[test]
    fn test_accumulator_counts_wraps() {
        let big = i128::from(Value::MAX) * i128::from(Value::MAX);
        let mut sum = Accumulator::default();
        for _ in 0..3 {
            sum.add(big);
        }
        assert_eq!(sum.wraps, 1);
        assert_eq!(sum.total(), None);

        for _ in 0..3 {
            sum.add(-big);
        }
        assert_eq!(sum.wraps, 0);
        assert_eq!(sum.total(), Some(0));
    }

    #[test]
    fn test_row_index() {
        let a = matrix(3, 3, vec![(2, 2, 1), (0, 1, 2), (2, 0, 3)]);
        let index = RowIndex::new(&a);

        assert_eq!(index.row(2), &[(0, 3), (2, 1)]);
        assert_eq!(index.row(0), &[(1, 2)]);
        assert!(index.row(1).is_empty());
        assert_eq!(index.iter().count(), 2);
    }

    #[test]
    fn test_multiply_matches_naive_product() {
        let mut rng = StdRng::seed_from_u64(1234);
        for _ in 0..60 {
            let (n, m, p) = (
                rng.gen_range(1..10),
                rng.gen_range(1..10),
                rng.gen_range(1..10),
            );
            let left = matrix(
                n,
                m,
                (0..rng.gen_range(0..25))
                    .map(|_| (rng.gen_range(0..n), rng.gen_range(0..m), rng.gen_range(-9..=9)))
                    .collect(),
            );
            let right = matrix(
                m,
                p,
                (0..rng.gen_range(0..25))
                    .map(|_| (rng.gen_range(0..m), rng.gen_range(0..p), rng.gen_range(-9..=9)))
                    .collect(),
            );

            let product = multiply(&left, &right).unwrap();
            assert_eq!(product, naive_product(&left, &right));
            assert!(product.entries().all(|(_, _, value)| value != 0));
        }
    }
}
