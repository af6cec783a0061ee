//! Output formatting helpers for the CLI.
//!
//! This module provides formatting utilities for displaying entries
//! in various formats (JSON, table, plain text).

mod json;
mod text;

// Re-export public API
pub use json::{attachment_json, count_json, print_json};
pub use text::{
    format_entry, format_entry_detail, last_entry_day, on_this_day_text, print_entry_list,
    print_journals, print_on_this_day,
};
