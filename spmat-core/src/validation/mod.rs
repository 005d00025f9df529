//! Validation utilities for sparse matrix coordinates and text tokens
//!
//! This module contains pure validation functions with no I/O dependencies.

pub mod bounds;
pub mod parsing;

pub use bounds::{coordinate_in_bounds, validate_coordinate};
pub use parsing::{parse_integer, split_header};
