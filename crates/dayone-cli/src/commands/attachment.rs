use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use dayone_core::storage::JournalStore;
use dayone_core::MediaKind;

use crate::app::AppContext;
use crate::cli::AttachmentArgs;
use crate::output::{attachment_json, print_json};

pub fn handle_attachment(ctx: &AppContext, args: &AttachmentArgs) -> anyhow::Result<()> {
    let store = ctx.open_store()?;
    let encoded = encode_attachment(&store, &args.uuid, args.index)?;

    if args.json {
        print_json(&encoded)
    } else {
        println!("{}", encoded["data"].as_str().unwrap_or_default());
        Ok(())
    }
}

/// Read an attachment from disk and describe it as base64 JSON.
pub fn encode_attachment(
    store: &dyn JournalStore,
    uuid: &str,
    index: usize,
) -> anyhow::Result<serde_json::Value> {
    let location = store.attachment_location(uuid, index)?;
    let bytes = std::fs::read(&location.path).map_err(|e| {
        anyhow::anyhow!("Failed to read attachment {}: {}", location.path.display(), e)
    })?;
    tracing::debug!(path = %location.path.display(), bytes = bytes.len(), "read attachment");

    let data = STANDARD.encode(&bytes);
    Ok(attachment_json(uuid, index, &location, mime_type(&location.kind), &data))
}

/// MIME type for a stored attachment type.
pub fn mime_type(kind: &MediaKind) -> &'static str {
    match kind {
        MediaKind::Jpeg => "image/jpeg",
        MediaKind::Png => "image/png",
        MediaKind::Heic => "image/heic",
        MediaKind::Gif => "image/gif",
        MediaKind::Mp4 => "video/mp4",
        MediaKind::Mov => "video/quicktime",
        MediaKind::Avi => "video/x-msvideo",
        MediaKind::Pdf => "application/pdf",
        MediaKind::Other(other) => match other.as_str() {
            "m4a" => "audio/mp4",
            "aac" => "audio/aac",
            "mp3" => "audio/mpeg",
            "wav" => "audio/wav",
            "caf" => "audio/x-caf",
            _ => "application/octet-stream",
        },
    }
}
