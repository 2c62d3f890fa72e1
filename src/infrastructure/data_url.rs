// SPDX-License-Identifier: MPL-2.0
//! Data URL encoding and MIME type detection.
//!
//! The media type follows what a browser would report for the file: the
//! type declared by the producer, else the one implied by the extension,
//! else whatever the leading bytes look like.

use crate::domain::selection::{DataUrl, FileHandle};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use image_rs::ImageFormat;

/// Media type used when nothing better is known.
pub const FALLBACK_MIME_TYPE: &str = "application/octet-stream";

/// Determines the media type of `file`, whose contents are `bytes`.
#[must_use]
pub fn detect_mime_type(file: &FileHandle, bytes: &[u8]) -> String {
    if let Some(declared) = file.mime_type().filter(|mime| !mime.is_empty()) {
        return declared.to_string();
    }
    if let Ok(format) = ImageFormat::from_path(file.name()) {
        return format.to_mime_type().to_string();
    }
    if let Ok(format) = image_rs::guess_format(bytes) {
        return format.to_mime_type().to_string();
    }
    FALLBACK_MIME_TYPE.to_string()
}

/// Encodes the contents of `file` as a base64 data URL.
#[must_use]
pub fn encode(file: &FileHandle, bytes: &[u8]) -> DataUrl {
    DataUrl::new(detect_mime_type(file, bytes), STANDARD.encode(bytes))
}

/// Decodes the payload of a data URL back into bytes.
pub fn decode(url: &DataUrl) -> Result<Vec<u8>, base64::DecodeError> {
    STANDARD.decode(url.payload())
}
