// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` owns the page model of the upload form, one preview widget per
//! form field, and the decoded preview images. Messages from the form are
//! routed to the widgets in `update`, whose read requests run as async tasks.

pub mod config;
mod message;
pub mod paths;
mod subscription;
pub mod update;
mod view;

pub use message::{Flags, Message};

use crate::application::port::FileReader;
use crate::domain::document::{Document, ElementId};
use crate::i18n::fluent::I18n;
use crate::infrastructure::FsFileReader;
use crate::ui::image_preview::{ImagePreviewWidget, PreviewConfig};
use crate::ui::notifications;
use crate::ui::upload_form::{self, FormField};
use iced::widget::image::Handle;
use iced::{window, Element, Subscription, Task, Theme};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    title: Option<String>,
    document: Document,
    fields: Vec<FormField>,
    widgets: Vec<ImagePreviewWidget>,
    reader: Arc<dyn FileReader>,
    /// Decoded preview images, by preview container.
    previews: HashMap<ElementId, Handle>,
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("fields", &self.fields.len())
            .field("previews", &self.previews.len())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 600;
pub const WINDOW_DEFAULT_WIDTH: u32 = 720;
pub const MIN_WINDOW_HEIGHT: u32 = 360;
pub const MIN_WINDOW_WIDTH: u32 = 480;

pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    paths::init_cli_overrides(flags.config_dir.clone());

    // iced requires a `Fn` boot function; the flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang, &config);
        let mut app = Self::from_config(i18n, &config);

        if let Some(key) = config_warning {
            app.notifications
                .push(notifications::Notification::warning(key));
        }

        (app, Task::none())
    }

    /// Builds the form and binds one preview widget per valid field.
    pub fn from_config(i18n: I18n, config: &config::Config) -> Self {
        let field_configs = config.form.valid_fields();
        let (document, fields) = upload_form::build_document(&field_configs);

        let mut widgets = Vec::with_capacity(fields.len());
        for field in &fields {
            let options = config.preview.options_for(&field.name);
            match PreviewConfig::from_options(&options) {
                Ok(preview_config) => widgets.push(ImagePreviewWidget::init(&document, preview_config)),
                Err(err) => log::warn!("Field '{}' has no preview: {err}", field.name),
            }
        }
        log::info!("Upload form ready with {} field(s)", fields.len());

        Self {
            i18n,
            title: config.form.title.clone(),
            document,
            fields,
            widgets,
            reader: Arc::new(FsFileReader),
            previews: HashMap::new(),
            notifications: notifications::Manager::new(),
        }
    }

    fn title(&self) -> String {
        self.title
            .clone()
            .unwrap_or_else(|| self.i18n.tr("app-title"))
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(self.notifications.has_notifications())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            document: &mut self.document,
            fields: &self.fields,
            widgets: &mut self.widgets,
            reader: &self.reader,
            previews: &mut self.previews,
            notifications: &mut self.notifications,
        };

        match message {
            Message::Form(form_message) => update::handle_form_message(&mut ctx, form_message),
            Message::FileChosen { input, path } => update::handle_file_chosen(&mut ctx, input, path),
            Message::ReadFinished {
                widget,
                ticket,
                result,
            } => update::handle_read_finished(&mut ctx, widget, &ticket, result),
            Message::Notification(notification_message) => {
                ctx.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::Tick(_) => {
                ctx.notifications.tick();
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            title: self.form_title(),
            document: &self.document,
            fields: &self.fields,
            widgets: &self.widgets,
            previews: &self.previews,
            notifications: &self.notifications,
        })
    }

    fn form_title(&self) -> String {
        self.title
            .clone()
            .unwrap_or_else(|| self.i18n.tr("form-title"))
    }
}
