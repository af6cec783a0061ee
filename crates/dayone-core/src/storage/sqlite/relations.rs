//! Batched loading of tags and attachments for a page of entries.
//!
//! Each loader issues a single `IN (...)` query for the whole page and
//! groups the rows back onto their entry. Entries without children are
//! simply absent from the returned map.

use std::collections::{BTreeSet, HashMap};

use rusqlite::{params_from_iter, Connection};

use crate::error::Result;
use crate::media::{AttachmentResolver, MediaKind};
use crate::storage::schema::{TagJoin, ATTACHMENT_TABLE, ENTRY_TABLE, TAG_TABLE};
use crate::storage::types::Attachment;

/// Tag names per entry identifier, alphabetical and without duplicates.
pub fn load_tags(
    conn: &Connection,
    tag_join: &TagJoin,
    ids: &BTreeSet<&str>,
) -> Result<HashMap<String, Vec<String>>> {
    if ids.is_empty() {
        return Ok(HashMap::new());
    }

    let query = format!(
        "SELECT e.ZUUID, t.ZNAME \
         FROM {tags} t \
         JOIN {join} zt ON t.Z_PK = zt.{tag_col} \
         JOIN {entries} e ON zt.{entry_col} = e.Z_PK \
         WHERE t.ZNAME IS NOT NULL AND e.ZUUID IN ({placeholders}) \
         ORDER BY e.ZUUID, t.ZNAME",
        tags = TAG_TABLE,
        join = tag_join.table,
        tag_col = tag_join.tag_column,
        entries = ENTRY_TABLE,
        entry_col = tag_join.entry_column,
        placeholders = placeholders(ids.len()),
    );

    let mut stmt = conn.prepare(&query)?;
    let rows = stmt.query_map(params_from_iter(ids.iter()), |row| {
        Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
    })?;

    let mut tags_by_entry: HashMap<String, Vec<String>> = HashMap::new();
    for row in rows {
        let (uuid, tag) = row?;
        let tags = tags_by_entry.entry(uuid).or_default();
        if tags.last() != Some(&tag) {
            tags.push(tag);
        }
    }

    tracing::debug!(entries = ids.len(), tagged = tags_by_entry.len(), "loaded tags");
    Ok(tags_by_entry)
}

/// Attachments per entry identifier, in display order, with file paths resolved.
pub fn load_attachments(
    conn: &Connection,
    resolver: &AttachmentResolver,
    ids: &BTreeSet<&str>,
) -> Result<HashMap<String, Vec<Attachment>>> {
    if ids.is_empty() {
        return Ok(HashMap::new());
    }

    let query = format!(
        "SELECT e.ZUUID, a.ZIDENTIFIER, a.ZTYPE, a.ZMD5, a.ZWIDTH, a.ZHEIGHT, \
                a.ZDURATION, a.ZCAPTION, a.ZISRECORDING \
         FROM {attachments} a \
         JOIN {entries} e ON a.ZENTRY = e.Z_PK \
         WHERE e.ZUUID IN ({placeholders}) \
         ORDER BY e.ZUUID, a.ZORDERINENTRY",
        attachments = ATTACHMENT_TABLE,
        entries = ENTRY_TABLE,
        placeholders = placeholders(ids.len()),
    );

    let mut stmt = conn.prepare(&query)?;
    let rows = stmt.query_map(params_from_iter(ids.iter()), |row| {
        let kind = MediaKind::from_stored(&row.get::<_, Option<String>>(2)?.unwrap_or_default());
        let is_recording = row.get::<_, Option<i64>>(8)?.unwrap_or(0) != 0;
        let md5: Option<String> = row.get(3)?;
        let file_path = resolver.resolve(md5.as_deref(), &kind, is_recording);
        Ok((
            row.get::<_, String>(0)?,
            Attachment {
                identifier: row.get(1)?,
                kind,
                is_recording,
                md5,
                width: row.get(4)?,
                height: row.get(5)?,
                duration: row.get(6)?,
                caption: row.get(7)?,
                file_path,
            },
        ))
    })?;

    let mut attachments_by_entry: HashMap<String, Vec<Attachment>> = HashMap::new();
    for row in rows {
        let (uuid, attachment) = row?;
        attachments_by_entry.entry(uuid).or_default().push(attachment);
    }

    tracing::debug!(
        entries = ids.len(),
        with_media = attachments_by_entry.len(),
        "loaded attachments"
    );
    Ok(attachments_by_entry)
}

fn placeholders(count: usize) -> String {
    vec!["?"; count].join(", ")
}
