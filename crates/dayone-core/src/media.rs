//! Attachment media kinds and their on-disk locations.
//!
//! Day One keeps attachment files beside its database, one directory per
//! media family, each file named `<md5>.<type>`.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Serialize, Serializer};

/// Directory holding raster images (also the fallback for unknown kinds).
pub const PHOTOS_DIR: &str = "DayOnePhotos";
/// Directory holding video files.
pub const VIDEOS_DIR: &str = "DayOneVideos";
/// Directory holding audio recordings.
pub const AUDIOS_DIR: &str = "DayOneAudios";
/// Directory holding PDF documents.
pub const PDFS_DIR: &str = "DayOnePDFAttachments";

/// The stored type of an attachment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MediaKind {
    Jpeg,
    Png,
    Heic,
    Gif,
    Mp4,
    Mov,
    Avi,
    Pdf,
    /// Any other stored type string (audio containers, sketches, ...).
    Other(String),
}

impl MediaKind {
    /// Raster image kinds.
    pub const PHOTOS: [MediaKind; 4] = [MediaKind::Jpeg, MediaKind::Png, MediaKind::Heic, MediaKind::Gif];

    /// Video container kinds.
    pub const VIDEOS: [MediaKind; 3] = [MediaKind::Mp4, MediaKind::Mov, MediaKind::Avi];

    /// Parse the type string stored in the attachment table.
    pub fn from_stored(value: &str) -> Self {
        match value {
            "jpeg" => MediaKind::Jpeg,
            "png" => MediaKind::Png,
            "heic" => MediaKind::Heic,
            "gif" => MediaKind::Gif,
            "mp4" => MediaKind::Mp4,
            "mov" => MediaKind::Mov,
            "avi" => MediaKind::Avi,
            "pdf" => MediaKind::Pdf,
            other => MediaKind::Other(other.to_string()),
        }
    }

    /// The stored type string, which is also the file extension.
    pub fn as_str(&self) -> &str {
        match self {
            MediaKind::Jpeg => "jpeg",
            MediaKind::Png => "png",
            MediaKind::Heic => "heic",
            MediaKind::Gif => "gif",
            MediaKind::Mp4 => "mp4",
            MediaKind::Mov => "mov",
            MediaKind::Avi => "avi",
            MediaKind::Pdf => "pdf",
            MediaKind::Other(value) => value,
        }
    }

    pub fn is_photo(&self) -> bool {
        matches!(
            self,
            MediaKind::Jpeg | MediaKind::Png | MediaKind::Heic | MediaKind::Gif
        )
    }

    pub fn is_video(&self) -> bool {
        matches!(self, MediaKind::Mp4 | MediaKind::Mov | MediaKind::Avi)
    }

    /// Directory that holds files of this kind.
    pub fn directory(&self, is_recording: bool) -> &'static str {
        if self.is_photo() {
            PHOTOS_DIR
        } else if self.is_video() {
            VIDEOS_DIR
        } else if is_recording {
            AUDIOS_DIR
        } else if *self == MediaKind::Pdf {
            PDFS_DIR
        } else {
            PHOTOS_DIR
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for MediaKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Maps attachment content hashes onto files under the Day One documents directory.
#[derive(Debug, Clone)]
pub struct AttachmentResolver {
    base_dir: PathBuf,
}

impl AttachmentResolver {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Path the attachment would occupy, whether or not it exists.
    pub fn expected_path(&self, content_hash: &str, kind: &MediaKind, is_recording: bool) -> PathBuf {
        self.base_dir
            .join(kind.directory(is_recording))
            .join(format!("{}.{}", content_hash, kind.as_str()))
    }

    /// Resolve an attachment to an existing file.
    ///
    /// Returns `None` when the hash is missing or the file is not on disk.
    pub fn resolve(
        &self,
        content_hash: Option<&str>,
        kind: &MediaKind,
        is_recording: bool,
    ) -> Option<PathBuf> {
        let hash = content_hash.map(str::trim).filter(|h| !h.is_empty())?;
        let path = self.expected_path(hash, kind, is_recording);
        if path.is_file() {
            Some(path)
        } else {
            tracing::debug!(path = %path.display(), "attachment file missing");
            None
        }
    }
}
