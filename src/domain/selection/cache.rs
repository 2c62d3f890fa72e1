// SPDX-License-Identifier: MPL-2.0
//! Keyed cache of the file currently associated with each input.

use super::{FileHandle, SelectionKey};
use std::collections::HashMap;

/// Maps each input key to the last file observed for it.
///
/// Holds at most one file per key. Entries never expire; they are replaced
/// by a newer file for the same key or removed explicitly.
#[derive(Debug, Clone, Default)]
pub struct SelectionCache {
    entries: HashMap<SelectionKey, FileHandle>,
}

impl SelectionCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `file` under `key`, returning the file it replaced.
    pub fn insert(&mut self, key: SelectionKey, file: FileHandle) -> Option<FileHandle> {
        self.entries.insert(key, file)
    }

    #[must_use]
    pub fn get(&self, key: &SelectionKey) -> Option<&FileHandle> {
        self.entries.get(key)
    }

    /// Removes the entry for `key`. Absent keys are a no-op.
    pub fn remove(&mut self, key: &SelectionKey) -> Option<FileHandle> {
        self.entries.remove(key)
    }

    #[must_use]
    pub fn contains(&self, key: &SelectionKey) -> bool {
        self.entries.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
