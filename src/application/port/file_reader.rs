// SPDX-License-Identifier: MPL-2.0
//! File reading port definition.
//!
//! This module defines the [`FileReader`] trait used to pull the bytes of a
//! selected file before it is turned into a preview. The filesystem adapter
//! lives in `infrastructure::reader`.

use crate::domain::selection::FileHandle;
use std::fmt;
use std::time::Duration;

// =============================================================================
// ReadError
// =============================================================================

/// Errors that can occur while reading a selected file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadError {
    /// The file no longer exists.
    NotFound,

    /// The file could not be read (permission denied, device error, ...).
    Io(String),

    /// The file exceeds the configured size limit.
    TooLarge {
        /// Size of the file in bytes.
        size: u64,
        /// Configured limit in bytes.
        limit: u64,
    },

    /// The read did not finish within the configured timeout.
    TimedOut(Duration),
}

impl ReadError {
    /// Returns the i18n message key describing this error.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            ReadError::NotFound => "error-read-not-found",
            ReadError::Io(_) => "error-read-io",
            ReadError::TooLarge { .. } => "error-read-too-large",
            ReadError::TimedOut(_) => "error-read-timed-out",
        }
    }

    /// Returns the arguments referenced by the message of [`Self::i18n_key`].
    ///
    /// Sizes are reported in kibibytes, rounded up.
    #[must_use]
    pub fn i18n_args(&self) -> Vec<(&'static str, String)> {
        match self {
            ReadError::NotFound | ReadError::TimedOut(_) => Vec::new(),
            ReadError::Io(detail) => vec![("detail", detail.clone())],
            ReadError::TooLarge { size, limit } => vec![
                ("size", size.div_ceil(1024).to_string()),
                ("limit", (limit / 1024).to_string()),
            ],
        }
    }
}

impl fmt::Display for ReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReadError::NotFound => write!(f, "File not found"),
            ReadError::Io(msg) => write!(f, "I/O error: {msg}"),
            ReadError::TooLarge { size, limit } => {
                write!(f, "File is too large: {size} bytes (limit {limit})")
            }
            ReadError::TimedOut(timeout) => {
                write!(f, "Read timed out after {:.1}s", timeout.as_secs_f64())
            }
        }
    }
}

impl std::error::Error for ReadError {}

impl From<std::io::Error> for ReadError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => ReadError::NotFound,
            _ => ReadError::Io(err.to_string()),
        }
    }
}

// =============================================================================
// ReadLimits
// =============================================================================

/// Bounds applied to every preview read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReadLimits {
    /// Reject files larger than this many bytes.
    pub max_bytes: Option<u64>,
    /// Give up on reads that take longer than this.
    pub timeout: Option<Duration>,
}

impl ReadLimits {
    /// Checks `size` against `max_bytes`.
    pub fn check_size(&self, size: u64) -> Result<(), ReadError> {
        match self.max_bytes {
            Some(limit) if size > limit => Err(ReadError::TooLarge { size, limit }),
            _ => Ok(()),
        }
    }
}

// =============================================================================
// FileReader Trait
// =============================================================================

/// Port for reading the raw bytes of a selected file.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`: reads run on a worker thread while
/// the UI thread keeps processing events.
pub trait FileReader: Send + Sync {
    /// Size of the file in bytes, if it can be known without reading it.
    ///
    /// Used to reject oversized files before any bytes are loaded.
    fn size_hint(&self, _file: &FileHandle) -> Option<u64> {
        None
    }

    /// Reads the whole file.
    fn read(&self, file: &FileHandle) -> Result<Vec<u8>, ReadError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_not_found_maps_to_not_found() {
        let err: ReadError = std::io::Error::from(std::io::ErrorKind::NotFound).into();
        assert_eq!(err, ReadError::NotFound);
    }

    #[test]
    fn other_io_errors_keep_message() {
        let err: ReadError = std::io::Error::other("disk on fire").into();
        assert!(matches!(err, ReadError::Io(msg) if msg.contains("disk on fire")));
    }

    #[test]
    fn size_limit_is_inclusive() {
        let limits = ReadLimits {
            max_bytes: Some(2048),
            timeout: None,
        };
        assert!(limits.check_size(2048).is_ok());
        assert_eq!(
            limits.check_size(2049),
            Err(ReadError::TooLarge {
                size: 2049,
                limit: 2048
            })
        );
        assert!(ReadLimits::default().check_size(u64::MAX).is_ok());
    }

    #[test]
    fn i18n_keys_are_distinct() {
        let keys = [
            ReadError::NotFound.i18n_key(),
            ReadError::Io(String::new()).i18n_key(),
            ReadError::TooLarge { size: 1, limit: 0 }.i18n_key(),
            ReadError::TimedOut(Duration::from_secs(1)).i18n_key(),
        ];
        for (i, key) in keys.iter().enumerate() {
            assert!(!keys[i + 1..].contains(key));
        }
    }

    #[test]
    fn too_large_args_are_in_kibibytes() {
        let err = ReadError::TooLarge {
            size: 2049,
            limit: 2048,
        };
        assert_eq!(
            err.i18n_args(),
            vec![("size", "3".to_string()), ("limit", "2".to_string())]
        );
        assert!(ReadError::NotFound.i18n_args().is_empty());
    }

    #[test]
    fn display_mentions_timeout() {
        let err = ReadError::TimedOut(Duration::from_millis(1500));
        assert_eq!(err.to_string(), "Read timed out after 1.5s");
    }
}
