// SPDX-License-Identifier: MPL-2.0
//! Image preview widget for file inputs.
//!
//! A widget binds file inputs, reset controls, and preview containers of a
//! [`Document`]. Picking a file starts a read whose completion replaces the
//! preview contents with an image of the file; the reset control clears the
//! input, the cached selection, and the preview.
//!
//! Each widget owns its [`SelectionCache`], keyed by the configured key
//! attribute of the input (`name` by default). The cache is consulted when
//! the input no longer reports a file itself.
//!
//! ```ignore
//! let mut widget = ImagePreviewWidget::init(&doc, PreviewConfig::from_options(&options)?);
//! if doc.set_files(input, vec![FileHandle::from_path(path)]) {
//!     if let Some(request) = widget.on_input_changed(&doc, input) {
//!         let result = read_data_url_blocking(&FsFileReader, &request.file, request.limits);
//!         widget.on_read_complete(&mut doc, &request.ticket, result);
//!     }
//! }
//! ```

mod config;
mod events;

pub use config::{PreviewConfig, PreviewOptions, DEFAULT_KEY_ATTRIBUTE, DEFAULT_READ_TIMEOUT_SECS};
pub use events::{PreviewEvent, ReadRequest, ReadTicket};

use crate::application::port::ReadError;
use crate::domain::document::{Document, ElementId, ImageElement, Selector};
use crate::domain::selection::{DataUrl, FileHandle, SelectionCache, SelectionKey, SelectionState};
use std::collections::HashMap;

#[derive(Debug, Clone)]
struct PendingRead {
    ticket: ReadTicket,
    file: FileHandle,
}

/// Resolves the cache key of `input`.
///
/// Inputs without the key attribute get a per-element key so that unrelated
/// unnamed inputs never share a cache entry.
fn resolve_key(doc: &Document, input: ElementId, key_attribute: &str) -> SelectionKey {
    match doc.attribute(input, key_attribute) {
        Some(value) => SelectionKey::new(value),
        None => SelectionKey::new(input.to_string()),
    }
}

/// One bound (inputs, resets, previews) triple with its selection state.
#[derive(Debug, Clone)]
pub struct ImagePreviewWidget {
    config: PreviewConfig,
    inputs: Vec<ElementId>,
    resets: Vec<ElementId>,
    previews: Vec<ElementId>,
    cache: SelectionCache,
    states: HashMap<SelectionKey, SelectionState>,
    pending: HashMap<SelectionKey, PendingRead>,
    next_ticket: u64,
}

impl ImagePreviewWidget {
    /// Binds the widget to the elements its selectors match in `doc`.
    ///
    /// Without an input selector no change handling is bound; without a
    /// reset selector no reset handling is bound. Neither is an error.
    #[must_use]
    pub fn init(doc: &Document, config: PreviewConfig) -> Self {
        let bind = |selector: &Option<Selector>| {
            selector
                .as_ref()
                .map(|selector| doc.select(selector))
                .unwrap_or_default()
        };
        let inputs = bind(&config.input);
        let resets = bind(&config.reset);
        let previews = bind(&config.preview);

        log::debug!(
            "Preview widget bound: {} input(s), {} reset(s), {} preview(s), key attribute '{}'",
            inputs.len(),
            resets.len(),
            previews.len(),
            config.key_attribute
        );

        Self {
            config,
            inputs,
            resets,
            previews,
            cache: SelectionCache::new(),
            states: HashMap::new(),
            pending: HashMap::new(),
            next_ticket: 0,
        }
    }

    #[must_use]
    pub fn config(&self) -> &PreviewConfig {
        &self.config
    }

    #[must_use]
    pub fn inputs(&self) -> &[ElementId] {
        &self.inputs
    }

    #[must_use]
    pub fn resets(&self) -> &[ElementId] {
        &self.resets
    }

    #[must_use]
    pub fn previews(&self) -> &[ElementId] {
        &self.previews
    }

    #[must_use]
    pub fn cache(&self) -> &SelectionCache {
        &self.cache
    }

    /// Returns `true` if `input` is one of the bound file inputs.
    #[must_use]
    pub fn binds_input(&self, input: ElementId) -> bool {
        self.inputs.contains(&input)
    }

    /// Returns `true` if `reset` is one of the bound reset controls.
    #[must_use]
    pub fn binds_reset(&self, reset: ElementId) -> bool {
        self.resets.contains(&reset)
    }

    /// Cache key of `input` under this widget's key attribute.
    #[must_use]
    pub fn key_of(&self, doc: &Document, input: ElementId) -> SelectionKey {
        resolve_key(doc, input, &self.config.key_attribute)
    }

    /// Lifecycle state of the selection stored under `key`.
    #[must_use]
    pub fn state(&self, key: &SelectionKey) -> SelectionState {
        self.states.get(key).copied().unwrap_or_default()
    }

    /// The file currently associated with `input`.
    ///
    /// A file reported by the input itself wins and is written to the cache;
    /// otherwise the cached file is returned; otherwise `None`.
    pub fn selected_file(&mut self, doc: &Document, input: ElementId) -> Option<FileHandle> {
        let key = self.key_of(doc, input);
        if let Some(file) = doc.files(input).first() {
            self.cache.insert(key, file.clone());
            return Some(file.clone());
        }
        self.cache.get(&key).cloned()
    }

    /// Drops the cached file of `input`. No-op when nothing is cached.
    pub fn clear_selection(&mut self, doc: &Document, input: ElementId) {
        let key = self.key_of(doc, input);
        self.cache.remove(&key);
    }

    /// Handles the change signal of a file input.
    ///
    /// Returns the read the host must run, or `None` when `input` is not
    /// bound or no file is selected (e.g. the picker was cancelled), in which
    /// case nothing changes.
    pub fn on_input_changed(&mut self, doc: &Document, input: ElementId) -> Option<ReadRequest> {
        if !self.binds_input(input) {
            return None;
        }
        let file = self.selected_file(doc, input)?;
        let key = self.key_of(doc, input);

        // The fresh selection supersedes whatever was cached; the file is
        // cached again once its read completes.
        self.cache.remove(&key);

        self.next_ticket += 1;
        let ticket = ReadTicket::new(key.clone(), self.next_ticket);
        if let Some(previous) = self.pending.insert(
            key.clone(),
            PendingRead {
                ticket: ticket.clone(),
                file: file.clone(),
            },
        ) {
            log::debug!(
                "Read #{} for '{key}' superseded by #{}",
                previous.ticket.id(),
                ticket.id()
            );
        }
        let state = self.state(&key).select();
        self.states.insert(key, state);

        Some(ReadRequest {
            ticket,
            file,
            limits: self.config.limits,
        })
    }

    /// Applies the result of a read started by [`Self::on_input_changed`].
    ///
    /// Completions for a ticket that is no longer pending (a newer selection
    /// or a reset happened meanwhile) are discarded without touching
    /// anything.
    pub fn on_read_complete(
        &mut self,
        doc: &mut Document,
        ticket: &ReadTicket,
        result: Result<DataUrl, ReadError>,
    ) -> PreviewEvent {
        let key = ticket.key().clone();
        let pending = match self.pending.remove(&key) {
            Some(pending) if pending.ticket == *ticket => pending,
            Some(newer) => {
                self.pending.insert(key.clone(), newer);
                log::debug!("Discarding stale read #{} for '{key}'", ticket.id());
                return PreviewEvent::Discarded { key };
            }
            None => {
                log::debug!("Discarding read #{} for '{key}' after reset", ticket.id());
                return PreviewEvent::Discarded { key };
            }
        };
        let file_name = pending.file.name().to_string();

        match result {
            Ok(src) => {
                for &preview in &self.previews {
                    doc.replace_children(preview, ImageElement { src: src.clone() });
                }
                self.cache.insert(key.clone(), pending.file);
                let state = self.state(&key).read_complete();
                self.states.insert(key.clone(), state);
                PreviewEvent::Rendered { key, file_name }
            }
            Err(error) => {
                log::warn!("Could not read '{file_name}' for '{key}': {error}");
                for &preview in &self.previews {
                    doc.empty(preview);
                }
                let state = self.state(&key).read_failed();
                self.states.insert(key.clone(), state);
                PreviewEvent::Failed {
                    key,
                    file_name,
                    error,
                }
            }
        }
    }

    /// Handles activation of a reset control.
    ///
    /// Returns `false` when `reset` is not bound to this widget.
    pub fn on_reset_clicked(&mut self, doc: &mut Document, reset: ElementId) -> bool {
        if !self.binds_reset(reset) {
            return false;
        }
        self.reset(doc);
        true
    }

    /// Clears every bound input, its cached file and pending read, and every
    /// bound preview. Idempotent.
    pub fn reset(&mut self, doc: &mut Document) {
        for &input in &self.inputs {
            let key = resolve_key(doc, input, &self.config.key_attribute);
            // Clearing the value lets the same file trigger a change again.
            doc.clear_input(input);
            self.cache.remove(&key);
            self.pending.remove(&key);
            self.states.insert(key, SelectionState::Empty);
        }
        for &preview in &self.previews {
            doc.empty(preview);
        }
    }
}
