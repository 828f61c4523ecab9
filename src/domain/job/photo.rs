//! Photo record with a self-contained data URL payload

use base64::{engine::general_purpose::STANDARD, Engine};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A job-site photo, stored inline as a data URL so the record has no
/// external file references.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    pub id: Uuid,
    /// `data:<mime>;base64,<payload>`
    pub url: String,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
}

impl Photo {
    /// Embed raw image bytes as a data URL
    pub fn from_bytes(mime_type: &str, bytes: &[u8]) -> Self {
        Self {
            id: Uuid::new_v4(),
            url: format!("data:{};base64,{}", mime_type, STANDARD.encode(bytes)),
            timestamp: Utc::now(),
        }
    }

    /// Approximate payload size in bytes, decoded
    pub fn payload_size(&self) -> usize {
        self.url
            .split_once(";base64,")
            .map(|(_, data)| data.len() * 3 / 4)
            .unwrap_or(0)
    }
}

/// Guess a MIME type from a file extension, defaulting to JPEG
pub fn mime_for_extension(ext: &str) -> &'static str {
    match ext.to_ascii_lowercase().as_str() {
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "heic" => "image/heic",
        _ => "image/jpeg",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_bytes_builds_data_url() {
        let photo = Photo::from_bytes("image/png", &[0x89, 0x50, 0x4e, 0x47]);
        assert!(photo.url.starts_with("data:image/png;base64,"));
        assert!(photo.payload_size() >= 3);
    }

    #[test]
    fn mime_guess_defaults_to_jpeg() {
        assert_eq!(mime_for_extension("png"), "image/png");
        assert_eq!(mime_for_extension("JPG"), "image/jpeg");
        assert_eq!(mime_for_extension("bin"), "image/jpeg");
    }
}
