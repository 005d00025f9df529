#![no_std]

//! spmat-core - Sparse Integer Matrix Definitions
//!
//! This crate provides the sparse matrix value type, the coordinate text
//! format and the three supported operations (addition, subtraction,
//! multiplication). It performs no I/O.
//!
//! ```
//! use spmat_core::{Operation, SparseMatrix};
//!
//! let a: SparseMatrix = "rows=2\ncols=2\n(0, 0, 1)\n(1, 1, 2)".parse().unwrap();
//! let c: SparseMatrix = "rows=2\ncols=1\n(0, 0, 5)\n(1, 0, 6)".parse().unwrap();
//!
//! let product = Operation::Multiplication.apply(&a, &c).unwrap();
//! assert_eq!(product.to_string(), "rows=2\ncols=1\n(0, 0, 5)\n(1, 0, 12)");
//! ```

extern crate alloc;

pub mod error;
pub mod format;
pub mod matrix;
pub mod ops;
pub mod validation;

pub use error::*;
pub use format::{parse_matrix, to_canonical_string, write_canonical, Header};
pub use matrix::{Coordinate, SparseMatrix, Value};
pub use ops::{add, multiply, subtract, Operation};
