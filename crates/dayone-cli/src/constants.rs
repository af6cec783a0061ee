//! Constants used throughout the CLI.

/// Exit codes for the CLI.
///
/// These follow common Unix conventions:
/// - 0: Success
/// - 1: General error (used by anyhow for unhandled errors)
/// - 2: Misuse of shell command (reserved by shells)
/// - 3+: Application-specific errors
pub mod exit_codes {
    /// General failure (database errors, I/O).
    pub const FAILURE: i32 = 1;

    /// Resource not found (database, entry, attachment).
    pub const NOT_FOUND: i32 = 3;

    /// Invalid user input or arguments.
    pub const INVALID_INPUT: i32 = 4;
}

/// Characters of entry text shown in previews.
pub const PREVIEW_CHARS: usize = 200;

/// Characters of entry text shown in a table row.
pub const TABLE_SUMMARY_MAX: usize = 60;

/// Largest look-back window accepted by the `get_entries_by_date` tool.
pub const TOOL_MAX_YEARS_BACK: u32 = 20;

/// Time format for entry headers.
pub const ENTRY_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Date format for journal summaries.
pub const DAY_FORMAT: &str = "%Y-%m-%d";
