//! Coordinate text format constants

/// Key of the first header line (`rows=<n>`)
pub const ROWS_KEY: &str = "rows";

/// Key of the second header line (`cols=<n>`)
pub const COLS_KEY: &str = "cols";

/// Separator between a header key and its value
pub const HEADER_SEPARATOR: char = '=';

/// Separator between the fields of an entry line
pub const ENTRY_SEPARATOR: char = ',';

/// File naming conventions for matrix sources and results
pub mod naming {
    /// Prefix of matrix source file names
    pub const SOURCE_PREFIX: &str = "matrix";

    /// Extension (without the dot) of matrix source and result files
    pub const SOURCE_EXTENSION: &str = "txt";

    /// Prefix of persisted result file names
    pub const RESULT_PREFIX: &str = "result_";
}
