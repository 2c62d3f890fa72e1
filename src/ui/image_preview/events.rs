// SPDX-License-Identifier: MPL-2.0
//! Values exchanged between the widget and its host.
//!
//! The widget never performs I/O itself. A file selection yields a
//! [`ReadRequest`] that the host executes (usually on its async runtime);
//! the result comes back through `on_read_complete` together with the
//! request's [`ReadTicket`] and turns into a [`PreviewEvent`].

use crate::application::port::{ReadError, ReadLimits};
use crate::domain::selection::{FileHandle, SelectionKey};

/// Tags a read with the key it was started for.
///
/// Ticket ids grow monotonically per widget, so a completion whose ticket
/// is no longer the pending one for its key is known to be stale.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReadTicket {
    key: SelectionKey,
    id: u64,
}

impl ReadTicket {
    pub(super) fn new(key: SelectionKey, id: u64) -> Self {
        Self { key, id }
    }

    #[must_use]
    pub fn key(&self) -> &SelectionKey {
        &self.key
    }

    #[must_use]
    pub fn id(&self) -> u64 {
        self.id
    }
}

/// A read the host must run and report back.
#[derive(Debug, Clone)]
pub struct ReadRequest {
    pub ticket: ReadTicket,
    pub file: FileHandle,
    pub limits: ReadLimits,
}

/// Outcome of a finished read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewEvent {
    /// The preview now shows the file.
    Rendered { key: SelectionKey, file_name: String },
    /// The file could not be read; previews were cleared.
    Failed {
        key: SelectionKey,
        file_name: String,
        error: ReadError,
    },
    /// The completion belonged to a superseded or reset selection and was ignored.
    Discarded { key: SelectionKey },
}

impl PreviewEvent {
    #[must_use]
    pub fn key(&self) -> &SelectionKey {
        match self {
            PreviewEvent::Rendered { key, .. }
            | PreviewEvent::Failed { key, .. }
            | PreviewEvent::Discarded { key } => key,
        }
    }
}
