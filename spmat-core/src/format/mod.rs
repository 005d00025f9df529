//! Coordinate text format for sparse matrices
//!
//! ```text
//! rows=<non-negative integer>
//! cols=<non-negative integer>
//! (<row>, <col>, <value>)
//! ...
//! ```
//!
//! Blank lines between entries are ignored on input. Output is canonical:
//! entries sorted by `(row, col)`, joined by `\n`, no trailing newline.

pub mod constants;
pub mod entry;
pub mod header;
pub mod parser;
pub mod serializer;

pub use entry::{parse_entry, write_entry};
pub use header::Header;
pub use parser::parse_matrix;
pub use serializer::{to_canonical_string, write_canonical};
