//! # Day One Core
//!
//! Read-only query and projection layer over the Day One journaling app's
//! local SQLite database.
//!
//! Day One stores entries in Core Data tables with `Z`-prefixed columns,
//! timestamps relative to 2001-01-01, rich text as one of several JSON
//! shapes, and tags through a numbered join table. This crate turns that
//! into a small, stable model of entries, journals and attachments.
//!
//! ## Architecture
//!
//! - **time**: Core Data timestamp conversion
//! - **rich_text**: plain-text extraction from rich text JSON or markdown
//! - **media**: attachment kinds and on-disk file resolution
//! - **storage**: the `JournalStore` trait and its SQLite implementation
//!
//! ## Example
//!
//! ```no_run
//! use dayone_core::storage::{DayOneSqlite, JournalStore, SearchFilter};
//!
//! # fn main() -> dayone_core::Result<()> {
//! let store = DayOneSqlite::open(std::path::Path::new("DayOne.sqlite"))?;
//! let filter = SearchFilter::new().text("vacation").tag("family").include_tags(true);
//! for entry in store.search(&filter)? {
//!     println!("{} {}", entry.creation_date, entry.text);
//! }
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod media;
pub mod rich_text;
pub mod storage;
pub mod time;

pub use error::{DayOneError, Result};
pub use media::{AttachmentResolver, MediaKind};
pub use rich_text::extract_text;
pub use storage::{DayOneSqlite, JournalStore};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
