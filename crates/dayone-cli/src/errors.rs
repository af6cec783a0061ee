//! CLI error types for structured error handling.
//!
//! This module provides typed errors that map to specific exit codes,
//! enabling consistent error handling across the CLI.

use std::fmt;

use dayone_core::DayOneError;

use crate::constants::exit_codes;

/// CLI-specific errors with associated exit codes.
#[derive(Debug)]
pub enum CliError {
    /// Resource not found (database, entry, attachment)
    NotFound { message: String, hint: Option<String> },

    /// Invalid user input
    InvalidInput(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::NotFound { message, hint } => {
                if let Some(h) = hint {
                    write!(f, "{}\n{}", message, h)
                } else {
                    write!(f, "{}", message)
                }
            }
            CliError::InvalidInput(message) => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for CliError {}

impl CliError {
    /// Create a NotFound error without a hint.
    pub fn not_found(message: impl Into<String>) -> Self {
        CliError::NotFound {
            message: message.into(),
            hint: None,
        }
    }

    /// Create a NotFound error with message and hint.
    pub fn not_found_with_hint(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::NotFound {
            message: message.into(),
            hint: Some(hint.into()),
        }
    }

    /// Create an InvalidInput error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        CliError::InvalidInput(message.into())
    }

    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::NotFound { .. } => exit_codes::NOT_FOUND,
            CliError::InvalidInput(_) => exit_codes::INVALID_INPUT,
        }
    }
}

/// Exit code for any error surfaced by a command handler.
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    if let Some(cli) = err.downcast_ref::<CliError>() {
        return cli.exit_code();
    }
    match err.downcast_ref::<DayOneError>() {
        Some(DayOneError::DatabaseNotFound(_)) | Some(DayOneError::NotFound(_)) => {
            exit_codes::NOT_FOUND
        }
        Some(DayOneError::InvalidDate(_)) | Some(DayOneError::InvalidDateFormat(_)) => {
            exit_codes::INVALID_INPUT
        }
        _ => exit_codes::FAILURE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_cli_error_codes() {
        assert_eq!(CliError::not_found("missing").exit_code(), 3);
        assert_eq!(CliError::invalid_input("bad").exit_code(), 4);
    }

    #[test]
    fn test_not_found_display_includes_hint() {
        let err = CliError::not_found_with_hint("Entry not found", "Hint: run `dayone recent`");
        assert_eq!(err.to_string(), "Entry not found\nHint: run `dayone recent`");
    }

    #[test]
    fn test_core_errors_map_to_exit_codes() {
        let missing = anyhow::Error::new(DayOneError::DatabaseNotFound(PathBuf::from("/x")));
        assert_eq!(exit_code_for(&missing), exit_codes::NOT_FOUND);

        let bad_date = anyhow::Error::new(DayOneError::InvalidDateFormat("13-40".into()));
        assert_eq!(exit_code_for(&bad_date), exit_codes::INVALID_INPUT);

        let other = anyhow::anyhow!("boom");
        assert_eq!(exit_code_for(&other), exit_codes::FAILURE);
    }
}
