// SPDX-License-Identifier: MPL-2.0
//! Base64 data URL value object.
//!
//! Encoding and decoding of the payload live in
//! `infrastructure::data_url`; this type only guarantees the
//! `data:<mime>;base64,<payload>` shape.

use std::fmt;
use std::str::FromStr;

const SCHEME: &str = "data:";
const BASE64_MARKER: &str = ";base64,";

/// Errors produced when parsing a data URL string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataUrlError {
    /// The string does not start with `data:`.
    MissingScheme,
    /// The `;base64,` marker is missing (plain-text data URLs are not supported).
    NotBase64,
    /// The media type before the marker is empty.
    EmptyMimeType,
}

impl fmt::Display for DataUrlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataUrlError::MissingScheme => write!(f, "missing data: scheme"),
            DataUrlError::NotBase64 => write!(f, "data URL is not base64 encoded"),
            DataUrlError::EmptyMimeType => write!(f, "data URL has no media type"),
        }
    }
}

impl std::error::Error for DataUrlError {}

/// Inline, base64-encoded representation of a file usable as an image source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUrl {
    mime_type: String,
    payload: String,
}

impl DataUrl {
    /// Builds a data URL from a media type and an already base64-encoded payload.
    pub fn new(mime_type: impl Into<String>, payload: impl Into<String>) -> Self {
        Self {
            mime_type: mime_type.into(),
            payload: payload.into(),
        }
    }

    #[must_use]
    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    /// The base64 payload, without the header.
    #[must_use]
    pub fn payload(&self) -> &str {
        &self.payload
    }
}

impl fmt::Display for DataUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{SCHEME}{}{BASE64_MARKER}{}", self.mime_type, self.payload)
    }
}

impl FromStr for DataUrl {
    type Err = DataUrlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rest = s.strip_prefix(SCHEME).ok_or(DataUrlError::MissingScheme)?;
        let (mime_type, payload) = rest
            .split_once(BASE64_MARKER)
            .ok_or(DataUrlError::NotBase64)?;
        if mime_type.is_empty() {
            return Err(DataUrlError::EmptyMimeType);
        }
        Ok(Self::new(mime_type, payload))
    }
}
