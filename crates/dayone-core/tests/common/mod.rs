#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use rusqlite::{params, Connection, ToSql};
use tempfile::TempDir;

use dayone_core::storage::DayOneSqlite;
use dayone_core::time::to_raw;

pub const SCHEMA: &str = include_str!("../fixtures/schema.sql");

/// A throwaway Day One database plus media directory.
pub struct Fixture {
    dir: TempDir,
    pub db_path: PathBuf,
    conn: Connection,
}

impl Fixture {
    pub fn new() -> Self {
        Self::with_schema(SCHEMA)
    }

    pub fn with_schema(schema: &str) -> Self {
        let dir = TempDir::new().expect("create temp dir");
        let db_path = dir.path().join("DayOne.sqlite");
        let conn = Connection::open(&db_path).expect("create fixture database");
        conn.execute_batch(schema).expect("apply fixture schema");
        Self { dir, db_path, conn }
    }

    pub fn dir(&self) -> &Path {
        self.dir.path()
    }

    pub fn store(&self) -> DayOneSqlite {
        DayOneSqlite::open(&self.db_path).expect("open fixture store")
    }

    pub fn journal(&self, name: Option<&str>) -> i64 {
        self.conn
            .execute(
                "INSERT INTO ZJOURNAL (ZNAME, ZUUIDFORAUXILIARYSYNC) VALUES (?1, ?2)",
                params![name, name.map(|n| format!("sync-{}", n))],
            )
            .expect("insert journal");
        self.conn.last_insert_rowid()
    }

    /// Insert an entry with markdown text in `journal`; returns its primary key.
    pub fn entry(&self, uuid: &str, created: f64, markdown: &str, journal: Option<i64>) -> i64 {
        self.conn
            .execute(
                "INSERT INTO ZENTRY (ZUUID, ZCREATIONDATE, ZMARKDOWNTEXT, ZJOURNAL, ZSTARRED) \
                 VALUES (?1, ?2, ?3, ?4, 0)",
                params![uuid, created, markdown, journal],
            )
            .expect("insert entry");
        self.conn.last_insert_rowid()
    }

    /// Set one column of an entry.
    pub fn set(&self, entry: i64, column: &str, value: &dyn ToSql) {
        self.conn
            .execute(
                &format!("UPDATE ZENTRY SET {} = ?1 WHERE Z_PK = ?2", column),
                params![value, entry],
            )
            .expect("update entry");
    }

    pub fn tag(&self, entry: i64, name: &str) {
        self.tag_via(entry, name, "Z_16TAGS", "Z_16ENTRIES", "Z_60TAGS1");
    }

    pub fn tag_via(&self, entry: i64, name: &str, table: &str, entry_col: &str, tag_col: &str) {
        let existing: Option<i64> = self
            .conn
            .query_row("SELECT Z_PK FROM ZTAG WHERE ZNAME = ?1", [name], |row| row.get(0))
            .ok();
        let tag = match existing {
            Some(pk) => pk,
            None => {
                self.conn
                    .execute("INSERT INTO ZTAG (ZNAME) VALUES (?1)", [name])
                    .expect("insert tag");
                self.conn.last_insert_rowid()
            }
        };
        self.conn
            .execute(
                &format!(
                    "INSERT INTO {} ({}, {}) VALUES (?1, ?2)",
                    table, entry_col, tag_col
                ),
                params![entry, tag],
            )
            .expect("link tag");
    }

    pub fn attachment(&self, entry: i64, kind: &str, md5: &str, order: i64, is_recording: bool) {
        self.conn
            .execute(
                "INSERT INTO ZATTACHMENT \
                 (ZENTRY, ZTYPE, ZMD5, ZORDERINENTRY, ZISRECORDING, ZIDENTIFIER, ZWIDTH, ZHEIGHT) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, 640, 480)",
                params![entry, kind, md5, order, is_recording, format!("att-{}", md5)],
            )
            .expect("insert attachment");
    }

    /// Write a media file under the fixture's documents directory.
    pub fn media_file(&self, subdir: &str, file_name: &str, contents: &[u8]) -> PathBuf {
        let dir = self.dir.path().join(subdir);
        fs::create_dir_all(&dir).expect("create media dir");
        let path = dir.join(file_name);
        fs::write(&path, contents).expect("write media file");
        path
    }
}

/// Raw timestamp of a local wall-clock time.
pub fn raw_at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> f64 {
    let naive = NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(hour, minute, 0))
        .expect("valid fixture date");
    to_raw(naive).expect("fixture time exists locally")
}
