//! Error handling module for SeatMatrix
//!
//! Provides centralized error handling with proper error types using thiserror.
//! An empty query result is NOT an error; see `logic::filter::QueryOutcome`.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for SeatMatrix
#[derive(Error, Debug)]
pub enum SeatMatrixError {
    /// IO errors (file operations, terminal, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The seat matrix workbook does not exist
    #[error("The file '{}' was not found. Please check the file path.", .0.display())]
    DataFileNotFound(PathBuf),

    /// Workbook could not be opened or a sheet could not be read
    #[error("Spreadsheet error: {0}")]
    Spreadsheet(#[from] calamine::Error),

    /// Configuration errors (fallback table, config file values)
    #[error("Configuration error: {0}")]
    Config(String),

    /// A fallback chain names a column the dataset does not have
    #[error("Configuration error: column '{column}' is not present in the seat matrix")]
    MissingColumn { column: String },

    /// The dataset lacks one of the fixed columns or has no header row
    #[error("Schema error: {0}")]
    Schema(String),

    /// Terminal/UI errors
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for SeatMatrix operations
pub type Result<T> = std::result::Result<T, SeatMatrixError>;

impl SeatMatrixError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a missing-column configuration error
    pub fn missing_column(column: impl Into<String>) -> Self {
        Self::MissingColumn {
            column: column.into(),
        }
    }

    /// Create a schema error
    pub fn schema(msg: impl Into<String>) -> Self {
        Self::Schema(msg.into())
    }

    /// Create a terminal error
    pub fn terminal(msg: impl Into<String>) -> Self {
        Self::Terminal(msg.into())
    }

    /// True for errors caused by a fallback table or dataset that disagree
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Config(_) | Self::MissingColumn { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SeatMatrixError::config("chain for 1R does not end in GM");
        assert_eq!(
            err.to_string(),
            "Configuration error: chain for 1R does not end in GM"
        );

        let err = SeatMatrixError::missing_column("1G");
        assert_eq!(
            err.to_string(),
            "Configuration error: column '1G' is not present in the seat matrix"
        );
    }

    #[test]
    fn test_not_found_message_names_path() {
        let err = SeatMatrixError::DataFileNotFound(PathBuf::from("cet_matrix.xlsx"));
        assert_eq!(
            err.to_string(),
            "The file 'cet_matrix.xlsx' was not found. Please check the file path."
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: SeatMatrixError = io_err.into();
        assert!(matches!(err, SeatMatrixError::Io(_)));
    }

    #[test]
    fn test_is_configuration() {
        assert!(SeatMatrixError::missing_column("SCG").is_configuration());
        assert!(SeatMatrixError::config("bad").is_configuration());
        assert!(!SeatMatrixError::schema("no header").is_configuration());
        assert!(!SeatMatrixError::terminal("no tty").is_configuration());
    }
}
