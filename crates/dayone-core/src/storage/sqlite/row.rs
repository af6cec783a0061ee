//! Entry row type for database queries.

use rusqlite::types::ValueRef;
use rusqlite::Row;

use crate::rich_text::extract_text;
use crate::storage::types::{Entry, DEFAULT_JOURNAL_NAME};
use crate::time::to_local_time;

/// Raw row data from the entry table, before projection into domain types.
///
/// Column order matches `schema::ENTRY_COLUMNS`.
#[derive(Debug)]
pub struct EntryRow {
    pub uuid: String,
    pub rich_text_json: Option<String>,
    pub markdown_text: Option<String>,
    pub creation_date: Option<f64>,
    pub modified_date: Option<f64>,
    pub starred: bool,
    pub timezone: Option<String>,
    pub journal_name: Option<String>,
    pub has_location: bool,
    pub has_weather: bool,
}

impl EntryRow {
    pub fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            uuid: row.get(0)?,
            rich_text_json: lossy_text(row.get_ref(1)?),
            markdown_text: lossy_text(row.get_ref(2)?),
            creation_date: row.get(3)?,
            modified_date: row.get(4)?,
            starred: truthy(row.get_ref(5)?),
            timezone: lossy_text(row.get_ref(6)?),
            journal_name: row.get(7)?,
            has_location: truthy(row.get_ref(8)?),
            has_weather: truthy(row.get_ref(9)?),
        })
    }
}

impl From<EntryRow> for Entry {
    fn from(row: EntryRow) -> Self {
        let text = extract_text(row.rich_text_json.as_deref(), row.markdown_text.as_deref());
        Entry {
            uuid: row.uuid,
            text,
            // A missing creation date reads as the Core Data reference date.
            creation_date: to_local_time(row.creation_date.unwrap_or_default()),
            modified_date: row.modified_date.map(to_local_time),
            starred: row.starred,
            timezone: row.timezone,
            journal_name: journal_display_name(row.journal_name),
            has_location: row.has_location,
            has_weather: row.has_weather,
            tags: None,
            attachments: None,
        }
    }
}

/// Journal name for display, substituting the default label for unnamed journals.
pub fn journal_display_name(name: Option<String>) -> String {
    name.filter(|n| !n.is_empty())
        .unwrap_or_else(|| DEFAULT_JOURNAL_NAME.to_string())
}

/// Text columns that may hold a string or an archived blob; only strings are kept.
fn lossy_text(value: ValueRef<'_>) -> Option<String> {
    match value {
        ValueRef::Text(bytes) => Some(String::from_utf8_lossy(bytes).into_owned()),
        _ => None,
    }
}

/// Core Data flags and foreign keys: NULL and zero are false.
fn truthy(value: ValueRef<'_>) -> bool {
    match value {
        ValueRef::Null => false,
        ValueRef::Integer(i) => i != 0,
        ValueRef::Real(f) => f != 0.0,
        ValueRef::Text(t) => !t.is_empty(),
        ValueRef::Blob(b) => !b.is_empty(),
    }
}
