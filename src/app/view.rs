// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::Message;
use crate::domain::document::{Document, ElementId};
use crate::i18n::fluent::I18n;
use crate::ui::image_preview::ImagePreviewWidget;
use crate::ui::notifications::{Manager, Toast};
use crate::ui::upload_form::{self, FormField};
use iced::widget::image::Handle;
use iced::widget::{scrollable, Stack};
use iced::{Element, Length};
use std::collections::HashMap;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub title: String,
    pub document: &'a Document,
    pub fields: &'a [FormField],
    pub widgets: &'a [ImagePreviewWidget],
    pub previews: &'a HashMap<ElementId, Handle>,
    pub notifications: &'a Manager,
}

/// Renders the upload form with the toast overlay on top.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let form = upload_form::view(upload_form::ViewContext {
        i18n: ctx.i18n,
        title: ctx.title,
        document: ctx.document,
        fields: ctx.fields,
        widgets: ctx.widgets,
        previews: ctx.previews,
    })
    .map(Message::Form);

    let toasts = Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification);

    Stack::new()
        .push(scrollable(form).width(Length::Fill).height(Length::Fill))
        .push(toasts)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
