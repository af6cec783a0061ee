//! JSON output formatting.

use serde::Serialize;

use dayone_core::storage::AttachmentLocation;

/// Print any serializable value as pretty JSON on stdout.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Entry count, optionally scoped to a journal.
pub fn count_json(journal: Option<&str>, count: u64) -> serde_json::Value {
    serde_json::json!({
        "journal": journal,
        "count": count,
    })
}

/// An attachment's bytes with enough metadata to decode them.
pub fn attachment_json(
    uuid: &str,
    index: usize,
    location: &AttachmentLocation,
    mime_type: &str,
    data: &str,
) -> serde_json::Value {
    serde_json::json!({
        "uuid": uuid,
        "index": index,
        "type": location.kind,
        "mime_type": mime_type,
        "path": location.path,
        "data": data,
    })
}
