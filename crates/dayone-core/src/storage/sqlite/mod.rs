//! Read-only SQLite backend over Day One's database file.
//!
//! Every operation opens its own connection with read-only flags,
//! `query_only` enforced and a busy timeout, runs to completion and drops
//! the connection. Nothing is cached between calls apart from the
//! schema names discovered at open time.

mod predicate;
mod relations;
mod row;

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::{Datelike, Local, NaiveDate};
use rusqlite::{params_from_iter, Connection, OpenFlags};

use crate::error::{DayOneError, Result};
use crate::media::AttachmentResolver;
use crate::storage::schema::{self, TagJoin};
use crate::storage::traits::JournalStore;
use crate::storage::types::{
    AttachmentLocation, Entry, Journal, OnThisDayEntry, SearchFilter, MAX_YEARS_BACK,
};
use crate::time::{date_to_raw, to_local_time};

pub use predicate::{MediaClass, Predicate, QueryPlan};
pub use relations::{load_attachments, load_tags};

use row::{journal_display_name, EntryRow};

/// Database location relative to the user's home directory.
pub const DEFAULT_DATABASE_RELATIVE_PATH: &str =
    "Library/Group Containers/5U8NS4GX82.dayoneapp2/Data/Documents/DayOne.sqlite";

/// How long a call waits for Day One to release a write lock.
const BUSY_TIMEOUT: Duration = Duration::from_millis(5000);

/// Day One SQLite store.
#[derive(Debug, Clone)]
pub struct DayOneSqlite {
    path: PathBuf,
    resolver: AttachmentResolver,
    tag_join: TagJoin,
}

impl DayOneSqlite {
    /// Open the store, looking for attachments next to the database file.
    ///
    /// # Errors
    ///
    /// Returns `DayOneError::DatabaseNotFound` if the file does not exist and
    /// `DayOneError::Schema` if it holds no entry table.
    pub fn open(path: &Path) -> Result<Self> {
        let media_dir = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        Self::open_with_media_dir(path, &media_dir)
    }

    /// Open the store with an explicit attachment directory.
    pub fn open_with_media_dir(path: &Path, media_dir: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(DayOneError::DatabaseNotFound(path.to_path_buf()));
        }

        let conn = Self::connect_path(path)?;
        schema::ensure_entry_table(&conn)?;
        let tag_join = schema::discover_tag_join(&conn)?;
        drop(conn);

        tracing::debug!(path = %path.display(), media_dir = %media_dir.display(), "opened Day One store");
        Ok(Self {
            path: path.to_path_buf(),
            resolver: AttachmentResolver::new(media_dir),
            tag_join,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn media_dir(&self) -> &Path {
        self.resolver.base_dir()
    }

    fn connect_path(path: &Path) -> Result<Connection> {
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        conn.busy_timeout(BUSY_TIMEOUT)?;
        conn.pragma_update(None, "query_only", "ON")?;
        Ok(conn)
    }

    /// Run `f` against a fresh read-only connection, closing it afterwards.
    fn with_connection<F, R>(&self, f: F) -> Result<R>
    where
        F: FnOnce(&Connection) -> Result<R>,
    {
        let conn = Self::connect_path(&self.path)?;
        f(&conn)
    }

    fn query_entries(&self, conn: &Connection, plan: &QueryPlan) -> Result<Vec<Entry>> {
        let (query, params) = plan.to_select_sql(&self.tag_join);
        tracing::debug!(predicates = plan.predicates.len(), limit = ?plan.limit, "querying entries");

        let mut stmt = conn.prepare(&query)?;
        let rows = stmt.query_map(params_from_iter(params.iter()), EntryRow::from_row)?;

        let mut entries = Vec::new();
        for row in rows {
            entries.push(Entry::from(row?));
        }
        Ok(entries)
    }

    fn attach_tags(&self, conn: &Connection, entries: &mut [Entry]) -> Result<()> {
        let mut tags = {
            let ids: BTreeSet<&str> = entries.iter().map(|e| e.uuid.as_str()).collect();
            load_tags(conn, &self.tag_join, &ids)?
        };
        for entry in entries.iter_mut() {
            entry.tags = Some(tags.remove(&entry.uuid).unwrap_or_default());
        }
        Ok(())
    }

    fn attach_attachments(&self, conn: &Connection, entries: &mut [Entry]) -> Result<()> {
        let mut attachments = {
            let ids: BTreeSet<&str> = entries.iter().map(|e| e.uuid.as_str()).collect();
            load_attachments(conn, &self.resolver, &ids)?
        };
        for entry in entries.iter_mut() {
            entry.attachments = Some(attachments.remove(&entry.uuid).unwrap_or_default());
        }
        Ok(())
    }

    /// "On this day" relative to an explicit current year.
    pub fn on_this_day_in(
        &self,
        target_date: &str,
        years_back: u32,
        current_year: i32,
    ) -> Result<Vec<OnThisDayEntry>> {
        let (month, day) = parse_month_day(target_date)?;

        let years_back = years_back.min(MAX_YEARS_BACK) as i32;
        let first_year = current_year - years_back;
        let mut windows = Vec::new();
        for year in first_year..=current_year {
            // Feb 29 only exists in leap years.
            let Some(date) = NaiveDate::from_ymd_opt(year, month, day) else {
                continue;
            };
            let window = date
                .succ_opt()
                .ok_or_else(|| DayOneError::InvalidDate(date.to_string()))
                .and_then(|next| Ok((date_to_raw(date)?, date_to_raw(next)?)));
            match window {
                Ok(window) => windows.push(window),
                Err(err) => tracing::debug!(%date, error = %err, "skipping on-this-day window"),
            }
        }

        if windows.is_empty() {
            return Ok(Vec::new());
        }

        let plan = QueryPlan::new().with(Predicate::CreatedWithin(windows));
        self.with_connection(|conn| {
            let mut entries = self.query_entries(conn, &plan)?;
            self.attach_tags(conn, &mut entries)?;
            Ok(entries
                .into_iter()
                .map(|entry| {
                    let year = entry.creation_date.year();
                    OnThisDayEntry {
                        entry,
                        year,
                        years_ago: current_year - year,
                    }
                })
                .collect())
        })
    }
}

impl JournalStore for DayOneSqlite {
    fn recent_entries(&self, limit: usize, journal: Option<&str>) -> Result<Vec<Entry>> {
        let mut plan = QueryPlan::new().limit(limit);
        if let Some(name) = journal.filter(|j| !j.is_empty()) {
            plan = plan.with(Predicate::Journal(name.to_string()));
        }

        self.with_connection(|conn| {
            let mut entries = self.query_entries(conn, &plan)?;
            self.attach_tags(conn, &mut entries)?;
            Ok(entries)
        })
    }

    fn search(&self, filter: &SearchFilter) -> Result<Vec<Entry>> {
        let plan = QueryPlan::from_filter(filter);

        self.with_connection(|conn| {
            let mut entries = self.query_entries(conn, &plan)?;
            if filter.include_tags {
                self.attach_tags(conn, &mut entries)?;
            }
            if filter.include_attachments {
                self.attach_attachments(conn, &mut entries)?;
            }
            Ok(entries)
        })
    }

    fn get_entry(&self, uuid: &str, include_attachments: bool) -> Result<Option<Entry>> {
        let plan = QueryPlan::new()
            .with(Predicate::Identifier(uuid.to_string()))
            .limit(1);

        self.with_connection(|conn| {
            let mut entries = self.query_entries(conn, &plan)?;
            if entries.is_empty() {
                return Ok(None);
            }
            self.attach_tags(conn, &mut entries)?;
            if include_attachments {
                self.attach_attachments(conn, &mut entries)?;
            }
            Ok(entries.pop())
        })
    }

    fn list_journals(&self) -> Result<Vec<Journal>> {
        self.with_connection(|conn| {
            let mut stmt = conn.prepare(
                r#"
                SELECT j.ZNAME, j.ZUUIDFORAUXILIARYSYNC, COUNT(e.Z_PK), MAX(e.ZCREATIONDATE)
                FROM ZJOURNAL j
                LEFT JOIN ZENTRY e ON e.ZJOURNAL = j.Z_PK
                GROUP BY j.Z_PK, j.ZNAME, j.ZUUIDFORAUXILIARYSYNC
                ORDER BY j.ZNAME
                "#,
            )?;

            let rows = stmt.query_map([], |row| {
                Ok(Journal {
                    name: journal_display_name(row.get(0)?),
                    uuid: row.get(1)?,
                    entry_count: row.get::<_, i64>(2)?.max(0) as u64,
                    last_entry_date: row.get::<_, Option<f64>>(3)?.map(to_local_time),
                })
            })?;

            let mut journals = Vec::new();
            for row in rows {
                journals.push(row?);
            }
            Ok(journals)
        })
    }

    fn entry_count(&self, journal: Option<&str>) -> Result<u64> {
        self.with_connection(|conn| {
            let count: i64 = match journal.filter(|j| !j.is_empty()) {
                Some(name) => conn.query_row(
                    r#"
                    SELECT COUNT(*)
                    FROM ZENTRY e
                    JOIN ZJOURNAL j ON e.ZJOURNAL = j.Z_PK
                    WHERE j.ZNAME = ?
                    "#,
                    [name],
                    |row| row.get(0),
                )?,
                None => conn.query_row("SELECT COUNT(*) FROM ZENTRY", [], |row| row.get(0))?,
            };
            Ok(count.max(0) as u64)
        })
    }

    fn on_this_day(&self, target_date: &str, years_back: u32) -> Result<Vec<OnThisDayEntry>> {
        self.on_this_day_in(target_date, years_back, Local::now().year())
    }

    fn attachment_location(&self, uuid: &str, index: usize) -> Result<AttachmentLocation> {
        let entry = self
            .get_entry(uuid, true)?
            .ok_or_else(|| DayOneError::NotFound(format!("entry {}", uuid)))?;

        let attachment = entry
            .attachments
            .unwrap_or_default()
            .into_iter()
            .nth(index)
            .ok_or_else(|| {
                DayOneError::NotFound(format!("attachment {} of entry {}", index, uuid))
            })?;

        let path = attachment.file_path.ok_or_else(|| {
            DayOneError::NotFound(format!(
                "file for attachment {} of entry {} is not on disk",
                index, uuid
            ))
        })?;

        Ok(AttachmentLocation {
            path,
            kind: attachment.kind,
        })
    }
}

/// Parse `MM-DD` or `YYYY-MM-DD` into a month and day; the year is ignored.
fn parse_month_day(target: &str) -> Result<(u32, u32)> {
    let invalid = || DayOneError::InvalidDateFormat(target.to_string());
    let all_digits = |part: &str| !part.is_empty() && part.chars().all(|c| c.is_ascii_digit());

    let parts: Vec<&str> = target.trim().split('-').collect();
    let (month, day) = match parts.as_slice() {
        [month, day] if month.len() == 2 && day.len() == 2 => (*month, *day),
        [year, month, day]
            if year.len() == 4 && all_digits(year) && month.len() == 2 && day.len() == 2 =>
        {
            (*month, *day)
        }
        _ => return Err(invalid()),
    };
    if !all_digits(month) || !all_digits(day) {
        return Err(invalid());
    }

    let month: u32 = month.parse().map_err(|_| invalid())?;
    let day: u32 = day.parse().map_err(|_| invalid())?;

    // 2000 is a leap year, so every real month/day pair exists in it.
    if NaiveDate::from_ymd_opt(2000, month, day).is_none() {
        return Err(invalid());
    }
    Ok((month, day))
}
