//! Core data types for the storage layer.
//!
//! These are read projections of Day One's Core Data tables. They are built
//! fresh for every call and never written back.

use std::path::PathBuf;

use chrono::{DateTime, Local};
use serde::Serialize;

use crate::media::MediaKind;

/// Label used for entries and journals whose journal has no name.
pub const DEFAULT_JOURNAL_NAME: &str = "Default";

/// Smallest result cap accepted by list operations.
pub const MIN_LIMIT: usize = 1;

/// Largest result cap accepted by list operations.
pub const MAX_LIMIT: usize = 50;

/// Default result cap for `recent_entries`.
pub const DEFAULT_RECENT_LIMIT: usize = 10;

/// Default result cap for `search`.
pub const DEFAULT_SEARCH_LIMIT: usize = 20;

/// Default look-back window for "on this day".
pub const DEFAULT_YEARS_BACK: u32 = 5;

/// Longest look-back window for "on this day".
pub const MAX_YEARS_BACK: u32 = 100;

/// Clamp a caller-supplied result cap into `[MIN_LIMIT, MAX_LIMIT]`.
pub fn clamp_limit(limit: usize) -> usize {
    limit.clamp(MIN_LIMIT, MAX_LIMIT)
}

/// A journal entry.
#[derive(Debug, Clone, Serialize)]
pub struct Entry {
    /// Day One's identifier for this entry
    pub uuid: String,

    /// Plain text, derived from rich text or markdown
    pub text: String,

    /// When this entry was created
    pub creation_date: DateTime<Local>,

    /// Last modification, if recorded
    pub modified_date: Option<DateTime<Local>>,

    pub starred: bool,

    /// IANA timezone name the entry was written in
    pub timezone: Option<String>,

    /// Owning journal name (`DEFAULT_JOURNAL_NAME` when unnamed)
    pub journal_name: String,

    pub has_location: bool,

    pub has_weather: bool,

    /// Tag names, alphabetical. `None` when tags were not requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    /// Attachments in display order. `None` when attachments were not requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachments: Option<Vec<Attachment>>,
}

impl Entry {
    /// Tags if loaded, otherwise an empty slice.
    pub fn tag_names(&self) -> &[String] {
        self.tags.as_deref().unwrap_or_default()
    }
}

/// An entry returned by "on this day", annotated with its year.
#[derive(Debug, Clone, Serialize)]
pub struct OnThisDayEntry {
    #[serde(flatten)]
    pub entry: Entry,

    /// Calendar year the entry was created in
    pub year: i32,

    /// Years between `year` and the current year
    pub years_ago: i32,
}

/// A named collection of entries.
#[derive(Debug, Clone, Serialize)]
pub struct Journal {
    pub name: String,

    /// Auxiliary sync UUID, if present
    pub uuid: Option<String>,

    pub entry_count: u64,

    /// Creation time of the newest entry, absent for empty journals
    pub last_entry_date: Option<DateTime<Local>>,
}

/// A media object attached to an entry.
#[derive(Debug, Clone, Serialize)]
pub struct Attachment {
    pub identifier: Option<String>,

    #[serde(rename = "type")]
    pub kind: MediaKind,

    pub is_recording: bool,

    /// MD5 of the file contents, used as its file name
    pub md5: Option<String>,

    pub width: Option<f64>,
    pub height: Option<f64>,
    pub duration: Option<f64>,
    pub caption: Option<String>,

    /// Absolute path, present only if the file exists
    pub file_path: Option<PathBuf>,
}

/// Where an attachment's bytes live and what they are.
#[derive(Debug, Clone, Serialize)]
pub struct AttachmentLocation {
    pub path: PathBuf,
    pub kind: MediaKind,
}

/// Filter for searching entries.
///
/// Every dimension is optional; present dimensions are combined with AND.
#[derive(Debug, Clone)]
pub struct SearchFilter {
    /// Substring to look for in the entry text
    pub text: Option<String>,

    /// Entry must carry every one of these tags
    pub tags: Vec<String>,

    pub starred: Option<bool>,
    pub has_photos: Option<bool>,
    pub has_videos: Option<bool>,
    pub has_audio: Option<bool>,
    pub has_location: Option<bool>,

    /// Device type, e.g. "iPhone"
    pub creation_device: Option<String>,

    /// Start date, `YYYY-MM-DD` (inclusive)
    pub date_from: Option<String>,

    /// End date, `YYYY-MM-DD` (inclusive of the whole day)
    pub date_to: Option<String>,

    /// Journal name
    pub journal: Option<String>,

    /// Maximum number of results, clamped to `[MIN_LIMIT, MAX_LIMIT]`
    pub limit: usize,

    pub include_tags: bool,
    pub include_attachments: bool,
}

impl Default for SearchFilter {
    fn default() -> Self {
        Self {
            text: None,
            tags: Vec::new(),
            starred: None,
            has_photos: None,
            has_videos: None,
            has_audio: None,
            has_location: None,
            creation_device: None,
            date_from: None,
            date_to: None,
            journal: None,
            limit: DEFAULT_SEARCH_LIMIT,
            include_tags: false,
            include_attachments: false,
        }
    }
}

impl SearchFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }

    pub fn starred(mut self, starred: bool) -> Self {
        self.starred = Some(starred);
        self
    }

    pub fn has_photos(mut self, value: bool) -> Self {
        self.has_photos = Some(value);
        self
    }

    pub fn has_videos(mut self, value: bool) -> Self {
        self.has_videos = Some(value);
        self
    }

    pub fn has_audio(mut self, value: bool) -> Self {
        self.has_audio = Some(value);
        self
    }

    pub fn has_location(mut self, value: bool) -> Self {
        self.has_location = Some(value);
        self
    }

    pub fn creation_device(mut self, device: impl Into<String>) -> Self {
        self.creation_device = Some(device.into());
        self
    }

    pub fn date_from(mut self, date: impl Into<String>) -> Self {
        self.date_from = Some(date.into());
        self
    }

    pub fn date_to(mut self, date: impl Into<String>) -> Self {
        self.date_to = Some(date.into());
        self
    }

    pub fn journal(mut self, journal: impl Into<String>) -> Self {
        self.journal = Some(journal.into());
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn include_tags(mut self, include: bool) -> Self {
        self.include_tags = include;
        self
    }

    pub fn include_attachments(mut self, include: bool) -> Self {
        self.include_attachments = include;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_limit() {
        assert_eq!(clamp_limit(0), 1);
        assert_eq!(clamp_limit(20), 20);
        assert_eq!(clamp_limit(500), 50);
    }

    #[test]
    fn test_search_filter_builder() {
        let filter = SearchFilter::new()
            .text("vacation")
            .tags(["beach", "family"])
            .tag("summer")
            .starred(true)
            .date_from("2025-10-01")
            .limit(5)
            .include_tags(true);

        assert_eq!(filter.text.as_deref(), Some("vacation"));
        assert_eq!(filter.tags, vec!["beach", "family", "summer"]);
        assert_eq!(filter.starred, Some(true));
        assert_eq!(filter.date_from.as_deref(), Some("2025-10-01"));
        assert_eq!(filter.limit, 5);
        assert!(filter.include_tags);
        assert!(!filter.include_attachments);
    }

    #[test]
    fn test_default_search_limit() {
        assert_eq!(SearchFilter::default().limit, DEFAULT_SEARCH_LIMIT);
    }
}
