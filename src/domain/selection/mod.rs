// SPDX-License-Identifier: MPL-2.0
//! Selection types.
//!
//! A selection is a file the user picked for one input, identified by the
//! input's key (the value of the configured key attribute).

mod cache;
mod data_url;
mod state;

pub use cache::SelectionCache;
pub use data_url::{DataUrl, DataUrlError};
pub use state::SelectionState;

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

// =============================================================================
// SelectionKey
// =============================================================================

/// Identifies an input for cache lookups.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SelectionKey(String);

impl SelectionKey {
    /// Creates a key from an attribute value.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the raw key.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SelectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SelectionKey {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

// =============================================================================
// FileHandle
// =============================================================================

/// Where the bytes of a selected file come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileSource {
    /// A file on the local filesystem.
    Path(PathBuf),
    /// Bytes already in memory (drops, clipboard, tests).
    Memory(Arc<[u8]>),
}

/// Opaque reference to a user-selected local file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileHandle {
    name: String,
    mime_type: Option<String>,
    source: FileSource,
}

impl FileHandle {
    /// Creates a handle for a file on disk. The name is the last path component.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned());
        Self {
            name,
            mime_type: None,
            source: FileSource::Path(path),
        }
    }

    /// Creates a handle for in-memory bytes.
    pub fn from_bytes(name: impl Into<String>, bytes: impl Into<Arc<[u8]>>) -> Self {
        Self {
            name: name.into(),
            mime_type: None,
            source: FileSource::Memory(bytes.into()),
        }
    }

    /// Sets the MIME type reported by whoever produced the handle.
    #[must_use]
    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }

    /// Display name of the file.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// MIME type declared by the producer, if any.
    #[must_use]
    pub fn mime_type(&self) -> Option<&str> {
        self.mime_type.as_deref()
    }

    /// Byte source of the file.
    #[must_use]
    pub fn source(&self) -> &FileSource {
        &self.source
    }

    /// Filesystem path, for path-backed handles.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match &self.source {
            FileSource::Path(path) => Some(path),
            FileSource::Memory(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_path_uses_file_name() {
        let handle = FileHandle::from_path("/tmp/uploads/photo.png");
        assert_eq!(handle.name(), "photo.png");
        assert_eq!(handle.path(), Some(Path::new("/tmp/uploads/photo.png")));
        assert!(handle.mime_type().is_none());
    }

    #[test]
    fn from_bytes_has_no_path() {
        let handle = FileHandle::from_bytes("a.gif", vec![1u8, 2, 3]).with_mime_type("image/gif");
        assert!(handle.path().is_none());
        assert_eq!(handle.mime_type(), Some("image/gif"));
        assert!(matches!(handle.source(), FileSource::Memory(bytes) if bytes.len() == 3));
    }

    #[test]
    fn keys_compare_by_value() {
        assert_eq!(SelectionKey::from("avatar"), SelectionKey::new("avatar".to_string()));
        assert_eq!(SelectionKey::from("avatar").to_string(), "avatar");
    }
}
