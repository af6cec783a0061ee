//! Journal store trait definition.
//!
//! The `JournalStore` trait is the read contract every Day One backend
//! offers. Callers only ever see the projected entity types; the vendor's
//! table and column names stay behind the implementation.

use super::types::{AttachmentLocation, Entry, Journal, OnThisDayEntry, SearchFilter};
use crate::error::Result;

/// Read-only access to a Day One journal store.
///
/// All implementations must ensure:
/// - No writes are ever issued against the backing store
/// - Each call re-reads the store; nothing is cached between calls
/// - Result caps are clamped to `[MIN_LIMIT, MAX_LIMIT]`
pub trait JournalStore: Send + Sync {
    /// Most recent entries, newest first.
    ///
    /// Tags are always loaded; attachments never are.
    fn recent_entries(&self, limit: usize, journal: Option<&str>) -> Result<Vec<Entry>>;

    /// Entries matching every dimension of `filter`, newest first.
    ///
    /// Tags and attachments are loaded only when the filter asks for them.
    fn search(&self, filter: &SearchFilter) -> Result<Vec<Entry>>;

    /// Get an entry by its identifier.
    ///
    /// # Returns
    ///
    /// Returns `Ok(Some(entry))` if found, `Ok(None)` if not found.
    fn get_entry(&self, uuid: &str, include_attachments: bool) -> Result<Option<Entry>>;

    /// All journals with entry counts, including empty ones.
    fn list_journals(&self) -> Result<Vec<Journal>>;

    /// Number of entries, optionally restricted to one journal.
    fn entry_count(&self, journal: Option<&str>) -> Result<u64>;

    /// Entries written on the same month and day in the current and previous years.
    ///
    /// # Arguments
    ///
    /// * `target_date` - `MM-DD` or `YYYY-MM-DD` (the year is ignored)
    /// * `years_back` - how many years before the current one to include
    ///
    /// # Errors
    ///
    /// Returns `DayOneError::InvalidDateFormat` if `target_date` is not a
    /// valid month and day.
    fn on_this_day(&self, target_date: &str, years_back: u32) -> Result<Vec<OnThisDayEntry>>;

    /// Resolved file of the `index`-th attachment of an entry.
    ///
    /// # Errors
    ///
    /// Returns `DayOneError::NotFound` if the entry does not exist, the index
    /// is out of range, or the file is not on disk.
    fn attachment_location(&self, uuid: &str, index: usize) -> Result<AttachmentLocation>;
}
