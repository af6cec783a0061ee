mod common;

use chrono::{Datelike, Timelike};
use rusqlite::Connection;

use common::{raw_at, Fixture, SCHEMA};
use dayone_core::media::{AUDIOS_DIR, PHOTOS_DIR};
use dayone_core::storage::{DayOneSqlite, JournalStore, SearchFilter, DEFAULT_JOURNAL_NAME};
use dayone_core::{DayOneError, MediaKind};

fn uuids(entries: &[dayone_core::storage::Entry]) -> Vec<&str> {
    entries.iter().map(|e| e.uuid.as_str()).collect()
}

#[test]
fn test_open_missing_database_fails() {
    let fixture = Fixture::new();
    let result = DayOneSqlite::open(&fixture.dir().join("missing.sqlite"));
    assert!(matches!(result, Err(DayOneError::DatabaseNotFound(_))));
}

#[test]
fn test_open_rejects_foreign_database() {
    let fixture = Fixture::with_schema("CREATE TABLE notes (id INTEGER PRIMARY KEY);");
    let result = DayOneSqlite::open(&fixture.db_path);
    assert!(matches!(result, Err(DayOneError::Schema(_))));
}

#[test]
fn test_store_does_not_write() {
    let fixture = Fixture::new();
    let journal = fixture.journal(Some("Personal"));
    fixture.entry("A", raw_at(2024, 5, 1, 12, 0), "hello", Some(journal));

    let store = fixture.store();
    store.recent_entries(10, None).expect("recent entries");
    store.list_journals().expect("list journals");

    let conn = Connection::open(&fixture.db_path).expect("reopen");
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM ZENTRY", [], |row| row.get(0))
        .expect("count");
    assert_eq!(count, 1);
}

#[test]
fn test_recent_entries_newest_first_with_tags() {
    let fixture = Fixture::new();
    let journal = fixture.journal(Some("Personal"));
    let old = fixture.entry("OLD", raw_at(2023, 1, 1, 12, 0), "old", Some(journal));
    let new = fixture.entry("NEW", raw_at(2024, 1, 1, 12, 0), "new", Some(journal));
    fixture.entry("MID", raw_at(2023, 6, 1, 12, 0), "mid", None);
    fixture.tag(new, "zeta");
    fixture.tag(new, "alpha");
    fixture.tag(old, "alpha");

    let entries = fixture.store().recent_entries(10, None).expect("recent entries");
    assert_eq!(uuids(&entries), vec!["NEW", "MID", "OLD"]);

    assert_eq!(entries[0].tag_names(), ["alpha", "zeta"]);
    assert_eq!(entries[1].tags.as_deref(), Some(&[][..]));
    assert_eq!(entries[1].journal_name, DEFAULT_JOURNAL_NAME);
    assert_eq!(entries[0].journal_name, "Personal");
    assert!(entries[0].attachments.is_none());
}

#[test]
fn test_recent_entries_by_journal() {
    let fixture = Fixture::new();
    let work = fixture.journal(Some("Work"));
    let home = fixture.journal(Some("Home"));
    fixture.entry("W1", raw_at(2024, 1, 1, 12, 0), "work", Some(work));
    fixture.entry("H1", raw_at(2024, 1, 2, 12, 0), "home", Some(home));

    let store = fixture.store();
    assert_eq!(uuids(&store.recent_entries(10, Some("Work")).unwrap()), vec!["W1"]);
    assert!(store.recent_entries(10, Some("Nope")).unwrap().is_empty());
    // An empty journal name is no filter at all.
    assert_eq!(store.recent_entries(10, Some("")).unwrap().len(), 2);
}

#[test]
fn test_limits_are_clamped() {
    let fixture = Fixture::new();
    for i in 0..60 {
        fixture.entry(
            &format!("E{:02}", i),
            raw_at(2024, 1, 1, 12, 0) + f64::from(i),
            "bulk",
            None,
        );
    }

    let store = fixture.store();
    assert_eq!(store.recent_entries(500, None).unwrap().len(), 50);
    assert_eq!(store.recent_entries(0, None).unwrap().len(), 1);
    assert_eq!(store.search(&SearchFilter::new().limit(500)).unwrap().len(), 50);

    let newest = store.search(&SearchFilter::new().limit(0)).unwrap();
    assert_eq!(uuids(&newest), vec!["E59"]);
}

#[test]
fn test_search_tags_are_conjunctive() {
    let fixture = Fixture::new();
    let both = fixture.entry("BOTH", raw_at(2024, 3, 1, 12, 0), "a", None);
    let one = fixture.entry("ONE", raw_at(2024, 3, 2, 12, 0), "b", None);
    fixture.tag(both, "family");
    fixture.tag(both, "beach");
    fixture.tag(one, "family");

    let store = fixture.store();
    let filter = SearchFilter::new().tags(["family", "beach"]);
    assert_eq!(uuids(&store.search(&filter).unwrap()), vec!["BOTH"]);

    let filter = SearchFilter::new().tag("family");
    assert_eq!(uuids(&store.search(&filter).unwrap()), vec!["ONE", "BOTH"]);
}

#[test]
fn test_search_text_matches_rich_text_and_markdown() {
    let fixture = Fixture::new();
    let rich = fixture.entry("RICH", raw_at(2024, 2, 1, 12, 0), "", None);
    fixture.set(rich, "ZRICHTEXTJSON", &r#"{"ops":[{"insert":"Beach day"}]}"#);
    fixture.entry("MD", raw_at(2024, 2, 2, 12, 0), "Went to the beach", None);
    fixture.entry("OTHER", raw_at(2024, 2, 3, 12, 0), "Stayed home", None);
    fixture.entry("PCT", raw_at(2024, 2, 4, 12, 0), "100% done", None);

    let store = fixture.store();
    let found = store.search(&SearchFilter::new().text("each")).unwrap();
    assert_eq!(uuids(&found), vec!["MD", "RICH"]);
    assert_eq!(found[1].text, "Beach day");

    // Wildcards in the needle match literally.
    let found = store.search(&SearchFilter::new().text("0%")).unwrap();
    assert_eq!(uuids(&found), vec!["PCT"]);
    assert!(store.search(&SearchFilter::new().text("_one")).unwrap().is_empty());
}

#[test]
fn test_search_date_range_includes_whole_end_day() {
    let fixture = Fixture::new();
    fixture.entry("BEFORE", raw_at(2025, 9, 30, 23, 59), "x", None);
    fixture.entry("START", raw_at(2025, 10, 1, 0, 0), "x", None);
    fixture.entry("LATE", raw_at(2025, 10, 31, 23, 59), "x", None);
    fixture.entry("AFTER", raw_at(2025, 11, 1, 0, 0), "x", None);

    let filter = SearchFilter::new().date_from("2025-10-01").date_to("2025-10-31");
    let found = fixture.store().search(&filter).unwrap();
    assert_eq!(uuids(&found), vec!["LATE", "START"]);
    assert_eq!(found[0].creation_date.hour(), 23);
}

#[test]
fn test_search_bad_date_bound_is_ignored() {
    let fixture = Fixture::new();
    fixture.entry("A", raw_at(2025, 1, 1, 12, 0), "x", None);

    let filter = SearchFilter::new().date_from("not-a-date");
    assert_eq!(fixture.store().search(&filter).unwrap().len(), 1);
}

#[test]
fn test_search_device_location_and_starred() {
    let fixture = Fixture::new();
    let phone = fixture.entry("PHONE", raw_at(2024, 4, 1, 12, 0), "x", None);
    let mac = fixture.entry("MAC", raw_at(2024, 4, 2, 12, 0), "x", None);
    fixture.set(phone, "ZCREATIONDEVICETYPE", &"iPhone");
    fixture.set(phone, "ZLOCATION", &3);
    fixture.set(mac, "ZCREATIONDEVICETYPE", &"Mac");
    fixture.set(mac, "ZSTARRED", &1);

    let store = fixture.store();
    let by_device = store.search(&SearchFilter::new().creation_device("iPhone")).unwrap();
    assert_eq!(uuids(&by_device), vec!["PHONE"]);
    assert!(by_device[0].has_location);

    let located = store.search(&SearchFilter::new().has_location(true)).unwrap();
    assert_eq!(uuids(&located), vec!["PHONE"]);
    let unlocated = store.search(&SearchFilter::new().has_location(false)).unwrap();
    assert_eq!(uuids(&unlocated), vec!["MAC"]);

    let starred = store.search(&SearchFilter::new().starred(true)).unwrap();
    assert_eq!(uuids(&starred), vec!["MAC"]);
    let unstarred = store.search(&SearchFilter::new().starred(false)).unwrap();
    assert_eq!(uuids(&unstarred), vec!["PHONE"]);
}

#[test]
fn test_search_media_flags() {
    let fixture = Fixture::new();
    let photo = fixture.entry("PHOTO", raw_at(2024, 5, 1, 12, 0), "x", None);
    let video = fixture.entry("VIDEO", raw_at(2024, 5, 2, 12, 0), "x", None);
    let audio = fixture.entry("AUDIO", raw_at(2024, 5, 3, 12, 0), "x", None);
    fixture.entry("PLAIN", raw_at(2024, 5, 4, 12, 0), "x", None);
    fixture.attachment(photo, "heic", "p1", 0, false);
    fixture.attachment(photo, "jpeg", "p2", 1, false);
    fixture.attachment(video, "mov", "v1", 0, false);
    fixture.attachment(audio, "m4a", "a1", 0, true);

    let store = fixture.store();
    let photos = store.search(&SearchFilter::new().has_photos(true)).unwrap();
    assert_eq!(uuids(&photos), vec!["PHOTO"]);
    let videos = store.search(&SearchFilter::new().has_videos(true)).unwrap();
    assert_eq!(uuids(&videos), vec!["VIDEO"]);
    let audios = store.search(&SearchFilter::new().has_audio(true)).unwrap();
    assert_eq!(uuids(&audios), vec!["AUDIO"]);

    // A false flag imposes nothing.
    let all = store.search(&SearchFilter::new().has_photos(false)).unwrap();
    assert_eq!(all.len(), 4);
}

#[test]
fn test_search_include_flags() {
    let fixture = Fixture::new();
    let entry = fixture.entry("A", raw_at(2024, 6, 1, 12, 0), "x", None);
    fixture.tag(entry, "travel");
    fixture.attachment(entry, "jpeg", "abc", 0, false);

    let store = fixture.store();
    let bare = store.search(&SearchFilter::new()).unwrap();
    assert!(bare[0].tags.is_none());
    assert!(bare[0].attachments.is_none());

    let full = store
        .search(&SearchFilter::new().include_tags(true).include_attachments(true))
        .unwrap();
    assert_eq!(full[0].tag_names(), ["travel"]);
    let attachments = full[0].attachments.as_ref().expect("attachments loaded");
    assert_eq!(attachments.len(), 1);
    assert_eq!(attachments[0].kind, MediaKind::Jpeg);
    assert_eq!(attachments[0].width, Some(640.0));
}

#[test]
fn test_get_entry_missing_is_none() {
    let fixture = Fixture::new();
    fixture.entry("A", raw_at(2024, 6, 1, 12, 0), "x", None);
    assert!(fixture.store().get_entry("NOPE", true).unwrap().is_none());
}

#[test]
fn test_get_entry_resolves_attachment_paths() {
    let fixture = Fixture::new();
    let entry = fixture.entry("A", raw_at(2024, 6, 1, 12, 0), "x", None);
    fixture.tag(entry, "travel");
    fixture.attachment(entry, "m4a", "audio1", 1, true);
    fixture.attachment(entry, "jpeg", "present", 0, false);
    fixture.attachment(entry, "png", "missing", 2, false);
    let on_disk = fixture.media_file(PHOTOS_DIR, "present.jpeg", b"jpeg");
    let recording = fixture.media_file(AUDIOS_DIR, "audio1.m4a", b"m4a");

    let store = fixture.store();
    let found = store.get_entry("A", true).unwrap().expect("entry exists");
    assert_eq!(found.tag_names(), ["travel"]);

    let attachments = found.attachments.expect("attachments loaded");
    let hashes: Vec<_> = attachments.iter().map(|a| a.md5.as_deref()).collect();
    assert_eq!(hashes, vec![Some("present"), Some("audio1"), Some("missing")]);
    assert_eq!(attachments[0].file_path.as_deref(), Some(on_disk.as_path()));
    assert_eq!(attachments[1].file_path.as_deref(), Some(recording.as_path()));
    assert!(attachments[1].is_recording);
    assert!(attachments[2].file_path.is_none());

    let without = store.get_entry("A", false).unwrap().expect("entry exists");
    assert!(without.attachments.is_none());
    assert_eq!(without.tag_names(), ["travel"]);
}

#[test]
fn test_attachment_location() {
    let fixture = Fixture::new();
    let entry = fixture.entry("A", raw_at(2024, 6, 1, 12, 0), "x", None);
    fixture.attachment(entry, "jpeg", "present", 0, false);
    fixture.attachment(entry, "png", "missing", 1, false);
    let on_disk = fixture.media_file(PHOTOS_DIR, "present.jpeg", b"jpeg");

    let store = fixture.store();
    let location = store.attachment_location("A", 0).expect("attachment on disk");
    assert_eq!(location.path, on_disk);
    assert_eq!(location.kind, MediaKind::Jpeg);

    for (uuid, index) in [("A", 1), ("A", 2), ("NOPE", 0)] {
        assert!(
            matches!(store.attachment_location(uuid, index), Err(DayOneError::NotFound(_))),
            "{} #{} should be not found",
            uuid,
            index
        );
    }
}

#[test]
fn test_list_journals_includes_empty_journal() {
    let fixture = Fixture::new();
    let work = fixture.journal(Some("Work"));
    fixture.journal(Some("Archive"));
    let unnamed = fixture.journal(None);
    fixture.entry("W1", raw_at(2024, 1, 1, 12, 0), "x", Some(work));
    fixture.entry("W2", raw_at(2024, 2, 1, 12, 0), "x", Some(work));
    fixture.entry("U1", raw_at(2024, 3, 1, 12, 0), "x", Some(unnamed));

    let journals = fixture.store().list_journals().unwrap();
    let work = journals.iter().find(|j| j.name == "Work").expect("work journal");
    assert_eq!(work.entry_count, 2);
    assert_eq!(work.uuid.as_deref(), Some("sync-Work"));
    let last = work.last_entry_date.expect("has entries");
    assert_eq!((last.year(), last.month(), last.day()), (2024, 2, 1));

    let archive = journals.iter().find(|j| j.name == "Archive").expect("archive");
    assert_eq!(archive.entry_count, 0);
    assert!(archive.last_entry_date.is_none());

    let default = journals
        .iter()
        .find(|j| j.name == DEFAULT_JOURNAL_NAME)
        .expect("unnamed journal");
    assert_eq!(default.entry_count, 1);
}

#[test]
fn test_entry_count() {
    let fixture = Fixture::new();
    let work = fixture.journal(Some("Work"));
    fixture.entry("W1", raw_at(2024, 1, 1, 12, 0), "x", Some(work));
    fixture.entry("W2", raw_at(2024, 1, 2, 12, 0), "x", Some(work));
    fixture.entry("N1", raw_at(2024, 1, 3, 12, 0), "x", None);

    let store = fixture.store();
    assert_eq!(store.entry_count(None).unwrap(), 3);
    assert_eq!(store.entry_count(Some("Work")).unwrap(), 2);
    assert_eq!(store.entry_count(Some("Nope")).unwrap(), 0);
}

#[test]
fn test_on_this_day_rejects_bad_date() {
    let fixture = Fixture::new();
    let result = fixture.store().on_this_day("13-40", 5);
    assert!(matches!(result, Err(DayOneError::InvalidDateFormat(_))));
}

#[test]
fn test_on_this_day_window() {
    let fixture = Fixture::new();
    let recent = fixture.entry("Y2025", raw_at(2025, 6, 14, 8, 0), "x", None);
    fixture.entry("Y2020", raw_at(2020, 6, 14, 23, 59), "x", None);
    fixture.entry("Y2018", raw_at(2018, 6, 14, 12, 0), "x", None);
    fixture.entry("NEXTDAY", raw_at(2024, 6, 15, 0, 0), "x", None);
    fixture.tag(recent, "summer");

    let found = fixture.store().on_this_day_in("06-14", 5, 2025).unwrap();
    let ids: Vec<_> = found.iter().map(|e| e.entry.uuid.as_str()).collect();
    assert_eq!(ids, vec!["Y2025", "Y2020"]);
    assert_eq!((found[0].year, found[0].years_ago), (2025, 0));
    assert_eq!((found[1].year, found[1].years_ago), (2020, 5));
    assert_eq!(found[0].entry.tag_names(), ["summer"]);

    // The year part of a full date is ignored.
    let same = fixture.store().on_this_day_in("1999-06-14", 5, 2025).unwrap();
    assert_eq!(same.len(), 2);
}

#[test]
fn test_on_this_day_leap_day_skips_common_years() {
    let fixture = Fixture::new();
    fixture.entry("LEAP", raw_at(2024, 2, 29, 12, 0), "x", None);
    fixture.entry("MARCH", raw_at(2023, 3, 1, 12, 0), "x", None);

    let found = fixture.store().on_this_day_in("02-29", 5, 2025).unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].entry.uuid, "LEAP");
    assert_eq!((found[0].year, found[0].years_ago), (2024, 1));
}

#[test]
fn test_discovers_renumbered_tag_table() {
    let schema = SCHEMA
        .replace("Z_16TAGS", "Z_21TAGS")
        .replace("Z_16ENTRIES", "Z_21ENTRIES")
        .replace("Z_60TAGS1", "Z_64TAGS2");
    let fixture = Fixture::with_schema(&schema);
    let entry = fixture.entry("A", raw_at(2024, 1, 1, 12, 0), "x", None);
    fixture.tag_via(entry, "moved", "Z_21TAGS", "Z_21ENTRIES", "Z_64TAGS2");

    let store = fixture.store();
    let found = store.search(&SearchFilter::new().tag("moved").include_tags(true)).unwrap();
    assert_eq!(uuids(&found), vec!["A"]);
    assert_eq!(found[0].tag_names(), ["moved"]);
}

#[test]
fn test_entry_serializes_without_unloaded_relations() {
    let fixture = Fixture::new();
    let entry = fixture.entry("A", raw_at(2024, 1, 1, 12, 0), "hello", None);
    fixture.set(entry, "ZTIMEZONE", &"Europe/Paris");

    let found = fixture.store().search(&SearchFilter::new()).unwrap();
    let json = serde_json::to_value(&found[0]).unwrap();
    assert_eq!(json["uuid"], "A");
    assert_eq!(json["text"], "hello");
    assert_eq!(json["timezone"], "Europe/Paris");
    assert!(json.get("tags").is_none());
    assert!(json.get("attachments").is_none());
}
