//! File I/O for coordinate-format matrix files
//!
//! This module discovers matrix sources in a directory, loads them into
//! [`SparseMatrix`] values and persists results in canonical form.

use std::fs;
use std::path::{Path, PathBuf};

use spmat_core::{parse_matrix, to_canonical_string, SparseMatrix};
use tracing::{debug, info};

use crate::config::WorkspaceConfig;
use crate::error::{Error, Result};

/// A matrix file found in an input directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatrixSource {
    /// File name, used to identify the source
    pub name: String,
    /// Full path to the file
    pub path: PathBuf,
}

impl MatrixSource {
    /// Create a source for an existing file path
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self { name, path }
    }

    /// Load and parse this source
    pub fn load(&self) -> Result<SparseMatrix> {
        load(&self.path)
    }
}

/// List `matrix*.txt` files in `directory`, sorted by file name
pub fn list_candidate_sources<P: AsRef<Path>>(directory: P) -> Result<Vec<MatrixSource>> {
    list_sources(directory, &WorkspaceConfig::default())
}

/// List files in `directory` matching the naming convention of `config`
///
/// Only regular files are returned. The input directory setting of `config`
/// is ignored in favour of `directory`.
pub fn list_sources<P: AsRef<Path>>(
    directory: P,
    config: &WorkspaceConfig,
) -> Result<Vec<MatrixSource>> {
    let directory = directory.as_ref();
    let read_dir = fs::read_dir(directory).map_err(|source| Error::io(directory, source))?;

    let mut sources = Vec::new();
    for dir_entry in read_dir {
        let dir_entry = dir_entry.map_err(|source| Error::io(directory, source))?;
        let path = dir_entry.path();

        // Non UTF-8 names cannot follow the naming convention
        let Some(name) = dir_entry.file_name().to_str().map(str::to_owned) else {
            continue;
        };
        if !config.matches_source_name(&name) || !path.is_file() {
            continue;
        }
        sources.push(MatrixSource { name, path });
    }

    sources.sort_by(|a, b| a.name.cmp(&b.name));
    debug!(
        directory = %directory.display(),
        count = sources.len(),
        "listed matrix sources"
    );
    Ok(sources)
}

/// Read and parse a coordinate-format matrix file
pub fn load<P: AsRef<Path>>(path: P) -> Result<SparseMatrix> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| Error::io(path, source))?;
    let matrix = parse_matrix(&text).map_err(|source| Error::Format {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(
        path = %path.display(),
        nrows = matrix.nrows(),
        ncols = matrix.ncols(),
        nnz = matrix.nnz(),
        "loaded matrix"
    );
    Ok(matrix)
}

/// Write the canonical form of `matrix` to `destination`
///
/// Missing parent directories are created. An existing file is replaced.
pub fn persist<P: AsRef<Path>>(matrix: &SparseMatrix, destination: P) -> Result<()> {
    let destination = destination.as_ref();
    if let Some(parent) = destination.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| Error::io(parent, source))?;
    }

    fs::write(destination, to_canonical_string(matrix))
        .map_err(|source| Error::io(destination, source))?;

    info!(
        path = %destination.display(),
        nnz = matrix.nnz(),
        "persisted matrix"
    );
    Ok(())
}
