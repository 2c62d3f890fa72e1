// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::application::port::ReadError;
use crate::domain::document::ElementId;
use crate::domain::selection::DataUrl;
use crate::ui::image_preview::ReadTicket;
use crate::ui::notifications;
use crate::ui::upload_form;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Form(upload_form::Message),
    Notification(notifications::NotificationMessage),
    /// Result of the native file picker opened for `input`.
    FileChosen {
        input: ElementId,
        path: Option<PathBuf>,
    },
    /// A preview read started by widget `widget` finished.
    ReadFinished {
        widget: usize,
        ticket: ReadTicket,
        result: Result<DataUrl, ReadError>,
    },
    /// Periodic tick for toast auto-dismiss.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `IMAGE_PREVIEW_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
