//! Image field uploads and their size/type constraints.

use std::path::Path;

use tempfile::NamedTempFile;

/// Default MIME allow-list, declared as a fixed comma-separated string.
pub const ACCEPTED_IMAGE_TYPES: &str =
    "image/jpeg,image/png,image/jpg,image/webp,image/bmp,image/gif,image/tiff";

/// A user-selected image held by a draft. The spooled temp file doubles
/// as the local preview resource: it lives exactly as long as this value,
/// so replacing the selection or dropping the draft releases it.
#[derive(Debug)]
pub struct UploadedImage {
    pub file_name: String,
    pub mime: String,
    pub size: u64,
    source: ImageSource,
}

#[derive(Debug)]
enum ImageSource {
    Spooled(NamedTempFile),
    Inline(Vec<u8>),
}

impl PartialEq for UploadedImage {
    fn eq(&self, other: &Self) -> bool {
        self.file_name == other.file_name && self.mime == other.mime && self.size == other.size
    }
}

impl UploadedImage {
    /// Wrap a multipart upload spooled to disk.
    pub fn from_temp_file(file_name: String, mime: String, size: u64, file: NamedTempFile) -> Self {
        Self { file_name, mime, size, source: ImageSource::Spooled(file) }
    }

    /// In-memory image, used by tests and small payloads.
    pub fn from_bytes(file_name: &str, mime: &str, data: Vec<u8>) -> Self {
        Self {
            file_name: file_name.to_string(),
            mime: mime.to_string(),
            size: data.len() as u64,
            source: ImageSource::Inline(data),
        }
    }

    /// Path of the preview resource, when the image is spooled on disk.
    pub fn preview_path(&self) -> Option<&Path> {
        match &self.source {
            ImageSource::Spooled(f) => Some(f.path()),
            ImageSource::Inline(_) => None,
        }
    }

    /// Read the image bytes for forwarding to the backend.
    pub fn read(&self) -> std::io::Result<Vec<u8>> {
        match &self.source {
            ImageSource::Spooled(f) => std::fs::read(f.path()),
            ImageSource::Inline(b) => Ok(b.clone()),
        }
    }
}

/// Per-field image constraints. Both click-to-select and drag-and-drop
/// uploads arrive through the same multipart field, so every selection
/// passes through `validate` before it reaches a draft.
pub struct ImageConstraints {
    pub max_size_mb: u64,
    /// Comma-separated MIME allow-list.
    pub accepted: &'static str,
}

impl Default for ImageConstraints {
    fn default() -> Self {
        Self { max_size_mb: 2, accepted: ACCEPTED_IMAGE_TYPES }
    }
}

impl ImageConstraints {
    /// `None` means the file is acceptable; otherwise a user-facing
    /// message saying which constraint was violated.
    pub fn validate(&self, image: &UploadedImage) -> Option<String> {
        if image.size > self.max_size_mb * 1024 * 1024 {
            return Some(format!("파일 크기가 {}MB를 초과합니다.", self.max_size_mb));
        }
        let accepted = self.accepted.split(',').map(str::trim);
        if !accepted.into_iter().any(|t| t == image.mime) {
            return Some("지원하지 않는 파일 형식입니다.".to_string());
        }
        None
    }
}
