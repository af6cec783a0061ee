//! Error types for Day One core operations.
//!
//! Errors are descriptive at the core level; the CLI layer maps these
//! to user-friendly messages and exit codes.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for Day One operations.
pub type Result<T> = std::result::Result<T, DayOneError>;

/// Core error type for Day One operations.
#[derive(Debug, Error)]
pub enum DayOneError {
    /// The database file does not exist
    #[error("Day One database not found at {0}")]
    DatabaseNotFound(PathBuf),

    /// The database does not look like a Day One store
    #[error("Schema error: {0}")]
    Schema(String),

    /// SQLite-specific storage error
    #[error("SQLite error: {source}")]
    Sqlite {
        #[from]
        source: rusqlite::Error,
    },

    /// A calendar date that cannot be mapped onto a timestamp
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// Date input that matches none of the accepted shapes
    #[error("Invalid date format: {0}. Use MM-DD or YYYY-MM-DD")]
    InvalidDateFormat(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// I/O error
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// Generic error (fallback)
    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_date_format_message_names_accepted_shapes() {
        let err = DayOneError::InvalidDateFormat("13-40".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid date format: 13-40. Use MM-DD or YYYY-MM-DD"
        );
    }

    #[test]
    fn test_sqlite_error_converts() {
        let err: DayOneError = rusqlite::Error::QueryReturnedNoRows.into();
        assert!(matches!(err, DayOneError::Sqlite { .. }));
    }
}
