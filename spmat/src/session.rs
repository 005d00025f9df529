//! Load, operate and persist: the entry point used by front ends
//!
//! A [`Session`] resolves operands inside the configured input directory,
//! applies an [`Operation`] and writes the canonical result to the output
//! directory.

use std::path::PathBuf;

use serde::Serialize;
use spmat_core::{ArithmeticError, Operation, SparseMatrix};
use tracing::{debug, info, warn};

use crate::config::WorkspaceConfig;
use crate::error::{Error, Result};
use crate::source::{list_sources, persist, MatrixSource};

/// Apply `operation` to two loaded matrices
pub fn apply(
    operation: Operation,
    left: &SparseMatrix,
    right: &SparseMatrix,
) -> std::result::Result<SparseMatrix, ArithmeticError> {
    let result = operation.apply(left, right)?;
    debug!(
        %operation,
        left = ?left.dimensions(),
        right = ?right.dimensions(),
        nnz = result.nnz(),
        "applied operation"
    );
    Ok(result)
}

/// Ordered pair of source indices whose shapes suit an operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CompatiblePair {
    pub left: usize,
    pub right: usize,
}

/// Find ordered pairs `(i, j)`, `i != j`, usable as operands of `operation`
///
/// Each source is loaded once. Sources that fail to load are skipped with a
/// warning.
pub fn compatible_pairs(sources: &[MatrixSource], operation: Operation) -> Vec<CompatiblePair> {
    let loaded: Vec<Option<SparseMatrix>> = sources
        .iter()
        .map(|source| match source.load() {
            Ok(matrix) => Some(matrix),
            Err(err) => {
                warn!(source = %source.name, %err, "skipping unreadable matrix source");
                None
            }
        })
        .collect();

    let mut pairs = Vec::new();
    for (left, a) in loaded.iter().enumerate() {
        for (right, b) in loaded.iter().enumerate() {
            if left == right {
                continue;
            }
            if let (Some(a), Some(b)) = (a, b) {
                if operation.dimensions_compatible(a, b) {
                    pairs.push(CompatiblePair { left, right });
                }
            }
        }
    }
    pairs
}

/// A source annotated with whether it takes part in a compatible pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recommendation {
    pub source: MatrixSource,
    pub recommended: bool,
}

/// Mark every source that appears in at least one of `pairs`
pub fn recommend(sources: Vec<MatrixSource>, pairs: &[CompatiblePair]) -> Vec<Recommendation> {
    sources
        .into_iter()
        .enumerate()
        .map(|(index, source)| Recommendation {
            source,
            recommended: pairs
                .iter()
                .any(|pair| pair.left == index || pair.right == index),
        })
        .collect()
}

/// Outcome of one load/operate/persist run
#[derive(Debug, Clone, Serialize)]
pub struct OperationReport {
    pub operation: Operation,
    pub left: String,
    pub right: String,
    pub nrows: usize,
    pub ncols: usize,
    pub nnz: usize,
    /// Where the result was written, if it was persisted
    pub destination: Option<PathBuf>,
    #[serde(skip)]
    pub result: SparseMatrix,
}

/// Operations over the matrix sources of one workspace
#[derive(Debug, Clone, Default)]
pub struct Session {
    config: WorkspaceConfig,
}

impl Session {
    /// Create a session over `config`
    pub fn new(config: WorkspaceConfig) -> Self {
        Self { config }
    }

    /// Get the workspace configuration
    pub fn config(&self) -> &WorkspaceConfig {
        &self.config
    }

    /// Matrix sources of the input directory, sorted by name
    pub fn sources(&self) -> Result<Vec<MatrixSource>> {
        list_sources(&self.config.input_dir, &self.config)
    }

    /// Sources annotated with whether they suit `operation`
    pub fn recommendations(&self, operation: Operation) -> Result<Vec<Recommendation>> {
        let sources = self.sources()?;
        let pairs = compatible_pairs(&sources, operation);
        Ok(recommend(sources, &pairs))
    }

    /// Resolve an operand by file name or by 1-based position in [`Session::sources`]
    ///
    /// A file inside the input directory is accepted by name even when it
    /// does not follow the naming convention.
    pub fn resolve(&self, name: &str) -> Result<MatrixSource> {
        let sources = self.sources()?;

        if let Ok(position) = name.parse::<usize>() {
            if let Some(source) = position.checked_sub(1).and_then(|i| sources.get(i)) {
                return Ok(source.clone());
            }
        }
        if let Some(source) = sources.iter().find(|source| source.name == name) {
            return Ok(source.clone());
        }

        let path = self.config.input_dir.join(name);
        if path.is_file() {
            return Ok(MatrixSource::from_path(path));
        }

        Err(Error::SourceNotFound {
            name: name.to_string(),
            dir: self.config.input_dir.clone(),
        })
    }

    /// Load both operands and apply `operation` without persisting
    pub fn evaluate(&self, operation: Operation, left: &str, right: &str) -> Result<OperationReport> {
        let left = self.resolve(left)?;
        let right = self.resolve(right)?;
        let result = apply(operation, &left.load()?, &right.load()?)?;

        Ok(OperationReport {
            operation,
            left: left.name,
            right: right.name,
            nrows: result.nrows(),
            ncols: result.ncols(),
            nnz: result.nnz(),
            destination: None,
            result,
        })
    }

    /// Load, apply and write the result to `result_<operation>.txt`
    pub fn run(&self, operation: Operation, left: &str, right: &str) -> Result<OperationReport> {
        let mut report = self.evaluate(operation, left, right)?;

        let destination = self.config.result_path(operation);
        persist(&report.result, &destination)?;
        info!(
            %operation,
            left = %report.left,
            right = %report.right,
            destination = %destination.display(),
            "operation complete"
        );

        report.destination = Some(destination);
        Ok(report)
    }
}
