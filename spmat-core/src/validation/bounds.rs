//! Coordinate bounds validation

use crate::error::IndexOutOfBounds;

/// Check whether `(row, col)` lies inside an `nrows x ncols` matrix
pub const fn coordinate_in_bounds(row: usize, col: usize, nrows: usize, ncols: usize) -> bool {
    row < nrows && col < ncols
}

/// Validate that `(row, col)` lies inside an `nrows x ncols` matrix
pub const fn validate_coordinate(
    row: usize,
    col: usize,
    nrows: usize,
    ncols: usize,
) -> Result<(), IndexOutOfBounds> {
    if !coordinate_in_bounds(row, col, nrows, ncols) {
        return Err(IndexOutOfBounds {
            row,
            col,
            nrows,
            ncols,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_in_bounds() {
        assert!(coordinate_in_bounds(0, 0, 1, 1));
        assert!(coordinate_in_bounds(2, 4, 3, 5));

        assert!(!coordinate_in_bounds(3, 0, 3, 5));
        assert!(!coordinate_in_bounds(0, 5, 3, 5));

        // Nothing fits in an empty matrix
        assert!(!coordinate_in_bounds(0, 0, 0, 0));
        assert!(!coordinate_in_bounds(0, 0, 4, 0));
    }

    #[test]
    fn test_validate_coordinate() {
        assert_eq!(validate_coordinate(1, 1, 2, 2), Ok(()));
        assert_eq!(
            validate_coordinate(2, 1, 2, 2),
            Err(IndexOutOfBounds {
                row: 2,
                col: 1,
                nrows: 2,
                ncols: 2,
            })
        );
    }
}
