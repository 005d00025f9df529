//! Error type for filesystem-facing matrix operations

use std::path::PathBuf;

use spmat_core::{ArithmeticError, FormatError, UnknownOperation};

/// Errors raised while discovering, loading, operating on or persisting matrices
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Reading or writing a file or directory failed
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// A matrix file is not valid coordinate text
    #[error("{}: input file has wrong format: {source}", .path.display())]
    Format {
        path: PathBuf,
        #[source]
        source: FormatError,
    },
    /// Operands are incompatible or a result overflowed
    #[error(transparent)]
    Arithmetic(#[from] ArithmeticError),
    /// An operation name could not be resolved
    #[error(transparent)]
    UnknownOperation(#[from] UnknownOperation),
    /// A configuration file could not be decoded
    #[error("{}: invalid configuration: {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// No matrix source matches the requested name or index
    #[error("no matrix source {name:?} in {}", .dir.display())]
    SourceNotFound { name: String, dir: PathBuf },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type for spmat operations
pub type Result<T> = std::result::Result<T, Error>;
