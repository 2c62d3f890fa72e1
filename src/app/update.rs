// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! The handlers translate form interactions into calls on the preview
//! widgets and turn the widgets' read requests into async tasks. Reads run
//! through [`read_data_url`] on the runtime's blocking pool and come back as
//! [`Message::ReadFinished`].

use super::Message;
use crate::application::port::{FileReader, ReadError};
use crate::domain::document::{Document, ElementId};
use crate::domain::selection::{DataUrl, FileHandle};
use crate::infrastructure::{data_url, read_data_url};
use crate::ui::image_preview::{ImagePreviewWidget, PreviewEvent, ReadRequest, ReadTicket};
use crate::ui::notifications::{self, Notification};
use crate::ui::upload_form::{self, FormField};
use iced::widget::image::Handle;
use iced::Task;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

/// Message key of read failure toasts.
pub const READ_FAILED_KEY: &str = "notification-read-failed";

/// Mutable application state the handlers operate on.
pub struct UpdateContext<'a> {
    pub document: &'a mut Document,
    pub fields: &'a [FormField],
    pub widgets: &'a mut [ImagePreviewWidget],
    pub reader: &'a Arc<dyn FileReader>,
    pub previews: &'a mut HashMap<ElementId, Handle>,
    pub notifications: &'a mut notifications::Manager,
}

impl UpdateContext<'_> {
    fn field_of_input(&self, input: ElementId) -> Option<&FormField> {
        self.fields.iter().find(|field| field.input == input)
    }

    fn field_of_reset(&self, reset: ElementId) -> Option<&FormField> {
        self.fields.iter().find(|field| field.reset == reset)
    }
}

pub fn handle_form_message(ctx: &mut UpdateContext<'_>, message: upload_form::Message) -> Task<Message> {
    match message {
        upload_form::Message::Choose(input) => open_file_dialog(input),
        upload_form::Message::Reset(reset) => {
            handle_reset(ctx, reset);
            Task::none()
        }
    }
}

/// Opens the native picker for `input`.
pub fn open_file_dialog(input: ElementId) -> Task<Message> {
    Task::perform(
        async move {
            rfd::AsyncFileDialog::new()
                .add_filter("Images", crate::ui::IMAGE_EXTENSIONS)
                .pick_file()
                .await
                .map(|handle| handle.path().to_path_buf())
        },
        move |path| Message::FileChosen { input, path },
    )
}

/// Applies a picker result to `input` and starts the reads it triggers.
///
/// A cancelled picker leaves everything as it was.
pub fn handle_file_chosen(
    ctx: &mut UpdateContext<'_>,
    input: ElementId,
    path: Option<PathBuf>,
) -> Task<Message> {
    let Some(path) = path else {
        log::debug!("File selection for {input} cancelled");
        return Task::none();
    };
    let requests = select_files(ctx, input, vec![FileHandle::from_path(path)]);

    Task::batch(requests.into_iter().map(|(widget, request)| {
        let ReadRequest {
            ticket,
            file,
            limits,
        } = request;
        let reader = Arc::clone(ctx.reader);
        Task::perform(read_data_url(reader, file, limits), move |result| {
            Message::ReadFinished {
                widget,
                ticket: ticket.clone(),
                result,
            }
        })
    }))
}

/// Sets the files of `input` and collects the reads of every widget bound
/// to it, tagged with the widget index.
///
/// Nothing is read when the input value did not change.
pub fn select_files(
    ctx: &mut UpdateContext<'_>,
    input: ElementId,
    files: Vec<FileHandle>,
) -> Vec<(usize, ReadRequest)> {
    if !ctx.document.set_files(input, files) {
        log::debug!("Selection for {input} unchanged, no change signal");
        return Vec::new();
    }
    let document = &*ctx.document;
    ctx.widgets
        .iter_mut()
        .enumerate()
        .filter_map(|(index, widget)| {
            widget
                .on_input_changed(document, input)
                .map(|request| (index, request))
        })
        .collect()
}

/// Applies a finished read and reflects the outcome in the preview images
/// and the notifications.
pub fn handle_read_finished(
    ctx: &mut UpdateContext<'_>,
    widget: usize,
    ticket: &ReadTicket,
    result: Result<DataUrl, ReadError>,
) -> Task<Message> {
    let Some(preview_widget) = ctx.widgets.get_mut(widget) else {
        log::warn!("Read finished for unknown widget #{widget}");
        return Task::none();
    };
    let event = preview_widget.on_read_complete(ctx.document, ticket, result);
    let previews = preview_widget.previews().to_vec();
    let inputs = preview_widget.inputs().to_vec();

    match event {
        PreviewEvent::Rendered { key, file_name } => {
            log::info!("Preview of '{file_name}' rendered for '{key}'");
            for input in inputs {
                if let Some(field) = ctx.field_of_input(input) {
                    let name = field.name.clone();
                    ctx.notifications
                        .clear_matching(READ_FAILED_KEY, ("field", name.as_str()));
                }
            }
        }
        PreviewEvent::Failed {
            key,
            file_name,
            error,
        } => {
            let field = inputs
                .iter()
                .find_map(|&input| ctx.field_of_input(input))
                .map_or_else(|| key.to_string(), |field| field.name.clone());
            ctx.notifications.push(
                Notification::error(READ_FAILED_KEY)
                    .with_arg("file", file_name)
                    .with_arg("field", field)
                    .with_reason(error.i18n_key(), error.i18n_args()),
            );
        }
        PreviewEvent::Discarded { .. } => return Task::none(),
    }

    sync_previews(ctx.document, ctx.previews, &previews);
    Task::none()
}

/// Handles a click on `reset`.
pub fn handle_reset(ctx: &mut UpdateContext<'_>, reset: ElementId) {
    let mut touched = Vec::new();
    for widget in ctx.widgets.iter_mut() {
        if widget.on_reset_clicked(ctx.document, reset) {
            touched.extend_from_slice(widget.previews());
        }
    }
    if touched.is_empty() {
        return;
    }
    if let Some(field) = ctx.field_of_reset(reset) {
        let name = field.name.clone();
        log::debug!("Field '{name}' reset");
        ctx.notifications
            .clear_matching(READ_FAILED_KEY, ("field", name.as_str()));
    }
    sync_previews(ctx.document, ctx.previews, &touched);
}

/// Rebuilds the decoded image of each preview container from the document.
pub fn sync_previews(document: &Document, handles: &mut HashMap<ElementId, Handle>, previews: &[ElementId]) {
    for &preview in previews {
        let decoded = document
            .children(preview)
            .first()
            .map(|image| data_url::decode(&image.src));
        match decoded {
            Some(Ok(bytes)) => {
                handles.insert(preview, Handle::from_bytes(bytes));
            }
            Some(Err(err)) => {
                log::warn!("Preview {preview} holds an undecodable data URL: {err}");
                handles.remove(&preview);
            }
            None => {
                handles.remove(&preview);
            }
        }
    }
}
