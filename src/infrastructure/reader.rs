// SPDX-License-Identifier: MPL-2.0
//! Filesystem reader and read-to-data-URL helpers.
//!
//! [`read_data_url`] is what hosts hand to their async runtime: it runs the
//! blocking read on tokio's blocking pool and bounds it with the configured
//! timeout, so a hung read surfaces as [`ReadError::TimedOut`] instead of a
//! preview that never appears.

use super::data_url;
use crate::application::port::{FileReader, ReadError, ReadLimits};
use crate::domain::selection::{DataUrl, FileHandle, FileSource};
use std::fs;
use std::sync::Arc;

/// Reads path-backed handles from disk and memory-backed handles from memory.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsFileReader;

impl FileReader for FsFileReader {
    fn size_hint(&self, file: &FileHandle) -> Option<u64> {
        match file.source() {
            FileSource::Path(path) => fs::metadata(path).ok().map(|meta| meta.len()),
            FileSource::Memory(bytes) => Some(bytes.len() as u64),
        }
    }

    fn read(&self, file: &FileHandle) -> Result<Vec<u8>, ReadError> {
        match file.source() {
            FileSource::Path(path) => Ok(fs::read(path)?),
            FileSource::Memory(bytes) => Ok(bytes.to_vec()),
        }
    }
}

/// Reads `file` through `reader` and encodes it as a data URL, on the calling thread.
///
/// The size limit is checked before reading when the reader can tell the
/// size up front, and again on the bytes actually read.
pub fn read_data_url_blocking(
    reader: &dyn FileReader,
    file: &FileHandle,
    limits: ReadLimits,
) -> Result<DataUrl, ReadError> {
    if let Some(size) = reader.size_hint(file) {
        limits.check_size(size)?;
    }
    let bytes = reader.read(file)?;
    limits.check_size(bytes.len() as u64)?;
    Ok(data_url::encode(file, &bytes))
}

/// Reads `file` on the blocking pool, honoring `limits.timeout`.
///
/// Must be awaited inside a tokio runtime.
pub async fn read_data_url(
    reader: Arc<dyn FileReader>,
    file: FileHandle,
    limits: ReadLimits,
) -> Result<DataUrl, ReadError> {
    let name = file.name().to_string();
    let task =
        tokio::task::spawn_blocking(move || read_data_url_blocking(reader.as_ref(), &file, limits));

    let joined = match limits.timeout {
        Some(timeout) => match tokio::time::timeout(timeout, task).await {
            Ok(joined) => joined,
            Err(_) => {
                log::warn!("Reading {name} timed out after {timeout:?}");
                return Err(ReadError::TimedOut(timeout));
            }
        },
        None => task.await,
    };

    joined.map_err(|err| ReadError::Io(err.to_string()))?
}
