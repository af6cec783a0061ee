//! Day One's Core Data schema.
//!
//! Everything that knows a vendor table or column name lives here or in the
//! `sqlite` backend that consumes it. Core Data prefixes every column with
//! `Z` and numbers its many-to-many join tables by entity index, so the
//! entry/tag join table is discovered when the store is opened.

use rusqlite::Connection;

use crate::error::{DayOneError, Result};

pub const ENTRY_TABLE: &str = "ZENTRY";
pub const JOURNAL_TABLE: &str = "ZJOURNAL";
pub const TAG_TABLE: &str = "ZTAG";
pub const ATTACHMENT_TABLE: &str = "ZATTACHMENT";

/// Columns projected for every entry row, in `EntryRow` order.
pub const ENTRY_COLUMNS: &str = "e.ZUUID, e.ZRICHTEXTJSON, e.ZMARKDOWNTEXT, e.ZCREATIONDATE, \
     e.ZMODIFIEDDATE, e.ZSTARRED, e.ZTIMEZONE, j.ZNAME, e.ZLOCATION, e.ZWEATHER";

/// Entry table joined to its (optional) journal.
pub const ENTRY_SOURCE: &str = "ZENTRY e LEFT JOIN ZJOURNAL j ON e.ZJOURNAL = j.Z_PK";

/// The entry/tag many-to-many table and its two foreign key columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagJoin {
    pub table: String,
    pub entry_column: String,
    pub tag_column: String,
}

impl Default for TagJoin {
    /// Names used by current Day One releases.
    fn default() -> Self {
        Self {
            table: "Z_16TAGS".to_string(),
            entry_column: "Z_16ENTRIES".to_string(),
            tag_column: "Z_60TAGS1".to_string(),
        }
    }
}

/// Check that the database holds a Day One entry table.
pub fn ensure_entry_table(conn: &Connection) -> Result<()> {
    let exists: bool = conn.query_row(
        "SELECT EXISTS (SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?)",
        [ENTRY_TABLE],
        |row| row.get(0),
    )?;
    if exists {
        Ok(())
    } else {
        Err(DayOneError::Schema(format!(
            "{} table missing; not a Day One database",
            ENTRY_TABLE
        )))
    }
}

/// Find the entry/tag join table, falling back to the historical names.
///
/// Discovered names only ever match `Z_<digits>...`, so they are safe to
/// splice into SQL.
pub fn discover_tag_join(conn: &Connection) -> Result<TagJoin> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type = 'table' AND name LIKE 'Z\\_%TAGS' ESCAPE '\\'")?;
    let tables: Vec<String> = stmt
        .query_map([], |row| row.get(0))?
        .collect::<rusqlite::Result<_>>()?;

    for table in tables.iter().filter(|name| is_join_table_name(name)) {
        let columns = table_columns(conn, table)?;
        let entry_column = columns.iter().find(|c| is_numbered(c, "ENTRIES", false));
        let tag_column = columns.iter().find(|c| is_numbered(c, "TAGS", true));
        if let (Some(entry_column), Some(tag_column)) = (entry_column, tag_column) {
            let join = TagJoin {
                table: table.clone(),
                entry_column: entry_column.clone(),
                tag_column: tag_column.clone(),
            };
            tracing::debug!(?join, "discovered tag join table");
            return Ok(join);
        }
    }

    let fallback = TagJoin::default();
    tracing::warn!(table = %fallback.table, "tag join table not found; using default names");
    Ok(fallback)
}

fn table_columns(conn: &Connection, table: &str) -> Result<Vec<String>> {
    let mut stmt = conn.prepare("SELECT name FROM pragma_table_info(?)")?;
    let columns = stmt
        .query_map([table], |row| row.get(0))?
        .collect::<rusqlite::Result<_>>()?;
    Ok(columns)
}

/// `Z_<digits>TAGS`
fn is_join_table_name(name: &str) -> bool {
    is_numbered(name, "TAGS", false)
}

/// `Z_<digits><suffix>`, optionally followed by more digits.
fn is_numbered(name: &str, suffix: &str, trailing_digits: bool) -> bool {
    let Some(rest) = name.strip_prefix("Z_") else {
        return false;
    };
    let digits = rest.chars().take_while(char::is_ascii_digit).count();
    if digits == 0 {
        return false;
    }
    let Some(tail) = rest[digits..].strip_prefix(suffix) else {
        return false;
    };
    if trailing_digits {
        tail.chars().all(|c| c.is_ascii_digit())
    } else {
        tail.is_empty()
    }
}
