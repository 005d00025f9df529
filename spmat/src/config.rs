//! Workspace configuration: where matrices are read from and results written to

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use spmat_core::format::constants::naming::{RESULT_PREFIX, SOURCE_EXTENSION, SOURCE_PREFIX};
use spmat_core::Operation;

use crate::error::{Error, Result};

/// Directories and file naming used by a [`Session`](crate::Session)
///
/// Missing fields in a JSON configuration file fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkspaceConfig {
    /// Directory scanned for matrix sources
    pub input_dir: PathBuf,
    /// Directory result files are written to
    pub output_dir: PathBuf,
    /// Required file name prefix of a matrix source
    pub source_prefix: String,
    /// Required file extension of a matrix source, without the dot
    pub source_extension: String,
}

impl WorkspaceConfig {
    /// Create config with explicit input and output directories
    pub fn new(input_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_dir: output_dir.into(),
            ..Self::default()
        }
    }

    /// Load config from a JSON file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| Error::io(path, source))?;
        serde_json::from_str(&text).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Set the input directory
    pub fn with_input_dir(mut self, input_dir: impl Into<PathBuf>) -> Self {
        self.input_dir = input_dir.into();
        self
    }

    /// Set the output directory
    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    /// Set the source file name prefix
    pub fn with_source_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.source_prefix = prefix.into();
        self
    }

    /// Set the source file extension (without the dot)
    pub fn with_source_extension(mut self, extension: impl Into<String>) -> Self {
        self.source_extension = extension.into();
        self
    }

    /// Whether a file name follows the `<prefix>*.<extension>` convention
    pub fn matches_source_name(&self, file_name: &str) -> bool {
        let suffix = format!(".{}", self.source_extension);
        file_name.starts_with(&self.source_prefix)
            && file_name.ends_with(&suffix)
            && file_name.len() >= self.source_prefix.len() + suffix.len()
    }

    /// Destination of the persisted result of `operation`
    pub fn result_path(&self, operation: Operation) -> PathBuf {
        self.output_dir.join(result_file_name(operation))
    }
}

impl Default for WorkspaceConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("sample_inputs"),
            output_dir: PathBuf::from("results"),
            source_prefix: SOURCE_PREFIX.to_string(),
            source_extension: SOURCE_EXTENSION.to_string(),
        }
    }
}

/// File name of the persisted result of `operation`: `result_<name>.txt`
pub fn result_file_name(operation: Operation) -> String {
    format!("{RESULT_PREFIX}{}.{SOURCE_EXTENSION}", operation.name())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = WorkspaceConfig::default();
        assert_eq!(config.input_dir, PathBuf::from("sample_inputs"));
        assert_eq!(config.output_dir, PathBuf::from("results"));
        assert_eq!(config.source_prefix, "matrix");
        assert_eq!(config.source_extension, "txt");
    }

    #[test]
    fn test_builder_methods() {
        let config = WorkspaceConfig::new("in", "out")
            .with_source_prefix("m_")
            .with_source_extension("coo");
        assert_eq!(config.input_dir, PathBuf::from("in"));
        assert_eq!(config.output_dir, PathBuf::from("out"));
        assert!(config.matches_source_name("m_1.coo"));
        assert!(!config.matches_source_name("matrix1.txt"));

        let moved = config.with_input_dir("elsewhere").with_output_dir("done");
        assert_eq!(moved.input_dir, PathBuf::from("elsewhere"));
        assert_eq!(moved.output_dir, PathBuf::from("done"));
    }

    #[test]
    fn test_matches_source_name() {
        let config = WorkspaceConfig::default();
        assert!(config.matches_source_name("matrix1.txt"));
        assert!(config.matches_source_name("matrix_big.txt"));
        assert!(config.matches_source_name("matrix.txt"));

        assert!(!config.matches_source_name("result_addition.txt"));
        assert!(!config.matches_source_name("matrix1.csv"));
        assert!(!config.matches_source_name("Matrix1.txt"));
        assert!(!config.matches_source_name("notes_matrix.txt"));
    }

    #[test]
    fn test_result_paths() {
        assert_eq!(result_file_name(Operation::Addition), "result_addition.txt");
        assert_eq!(
            result_file_name(Operation::Multiplication),
            "result_multiplication.txt"
        );

        let config = WorkspaceConfig::new("in", "out");
        assert_eq!(
            config.result_path(Operation::Subtraction),
            PathBuf::from("out").join("result_subtraction.txt")
        );
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: WorkspaceConfig = serde_json::from_str(r#"{"output_dir": "/tmp/out"}"#).unwrap();
        assert_eq!(config.output_dir, PathBuf::from("/tmp/out"));
        assert_eq!(config.input_dir, PathBuf::from("sample_inputs"));
        assert_eq!(config.source_prefix, "matrix");
    }
}
