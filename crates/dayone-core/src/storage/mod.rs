//! Storage abstraction for Day One.
//!
//! This module defines the `JournalStore` trait, the projected entity
//! types, and the SQLite backend that reads Day One's database.
//!
//! ## Architecture
//!
//! - `schema`: vendor table/column names and join-table discovery
//! - `sqlite`: predicate building, batched relation loading, and the
//!   `JournalStore` implementation
//! - `types`: entries, journals, attachments and the search filter
//!
//! The store is strictly read-only: connections are opened with read-only
//! flags and `query_only` set, one per call.

pub mod schema;
pub mod sqlite;
pub mod traits;
pub mod types;

// Re-export public types
pub use sqlite::{DayOneSqlite, DEFAULT_DATABASE_RELATIVE_PATH};
pub use traits::JournalStore;
pub use types::{
    clamp_limit, Attachment, AttachmentLocation, Entry, Journal, OnThisDayEntry, SearchFilter,
    DEFAULT_JOURNAL_NAME, DEFAULT_RECENT_LIMIT, DEFAULT_SEARCH_LIMIT, DEFAULT_YEARS_BACK,
    MAX_LIMIT, MAX_YEARS_BACK, MIN_LIMIT,
};
