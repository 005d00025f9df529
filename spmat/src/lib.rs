//! spmat - Coordinate-Format Sparse Matrix Files
//!
//! This library finds sparse integer matrices stored as coordinate text,
//! combines them with addition, subtraction or multiplication, and writes the
//! canonical result back to disk.
//!
//! ## Architecture
//!
//! - **spmat-core**: matrix type, text format and arithmetic (no I/O)
//! - **spmat**: discovery, loading, persistence, configuration and the CLI
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use spmat::{Operation, Session, WorkspaceConfig};
//!
//! fn example() -> spmat::Result<()> {
//!     let session = Session::new(WorkspaceConfig::new("sample_inputs", "results"));
//!
//!     for recommendation in session.recommendations(Operation::Multiplication)? {
//!         println!("{} {}", recommendation.source.name, recommendation.recommended);
//!     }
//!
//!     let report = session.run(Operation::Multiplication, "matrix1.txt", "matrix2.txt")?;
//!     println!("{}", report.result);
//!     Ok(())
//! }
//! ```

// Re-export core abstractions and format definitions
pub use spmat_core::{
    // Core types
    SparseMatrix, Value, Operation,
    // Error handling
    ArithmeticError, FormatError, IndexOutOfBounds, UnknownOperation,
    // Format
    parse_matrix, to_canonical_string,
};

pub mod config;
pub mod error;
pub mod session;
pub mod source;

pub use config::{result_file_name, WorkspaceConfig};
pub use error::{Error, Result};
pub use session::{
    apply, compatible_pairs, recommend, CompatiblePair, OperationReport, Recommendation, Session,
};
pub use source::{list_candidate_sources, list_sources, load, persist, MatrixSource};
