// SPDX-License-Identifier: MPL-2.0
//! Upload form: the page model behind the window and its Iced view.
//!
//! Every configured field becomes three elements of a [`Document`]:
//! a file input named after the field, a `#<field>-reset` button and a
//! `#<field>-preview` container. Preview widgets bind to those elements
//! through selectors exactly as they would on any other page.

use crate::app::config::{FieldConfig, DEFAULT_FORM_FIELDS};
use crate::domain::document::{Document, Element as PageElement, ElementId};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{border, palette, radius, sizing, spacing, typography};
use crate::ui::image_preview::ImagePreviewWidget;
use iced::widget::image::Handle;
use iced::widget::{button, container, image, text, Column, Container, Row, Text};
use iced::{alignment, ContentFit, Element, Length, Theme};
use std::collections::HashMap;
use std::path::Path;

#[derive(Debug, Clone)]
pub enum Message {
    /// The "choose file" button of a file input was pressed.
    Choose(ElementId),
    /// A reset button was pressed.
    Reset(ElementId),
}

/// The elements generated for one form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub name: String,
    pub label: Option<String>,
    pub input: ElementId,
    pub reset: ElementId,
    pub preview: ElementId,
}

/// Builds the page model for `fields`.
#[must_use]
pub fn build_document(fields: &[&FieldConfig]) -> (Document, Vec<FormField>) {
    let mut doc = Document::new();
    let form_fields = fields
        .iter()
        .map(|field| {
            let name = field.name.trim();
            let input = doc.insert(
                PageElement::file_input()
                    .with_attribute("name", name)
                    .with_attribute("id", format!("{name}-input"))
                    .with_attribute("accept", "image/*"),
            );
            let reset = doc.insert(
                PageElement::button("reset")
                    .with_attribute("id", format!("{name}-reset"))
                    .with_attribute("class", "reset"),
            );
            let preview = doc.insert(
                PageElement::container()
                    .with_attribute("id", format!("{name}-preview"))
                    .with_attribute("class", "preview"),
            );
            FormField {
                name: name.to_string(),
                label: field.label.clone(),
                input,
                reset,
                preview,
            }
        })
        .collect();
    (doc, form_fields)
}

/// Label shown for `field`: the configured one, else the translated default
/// for the built-in fields, else the field name.
#[must_use]
pub fn field_label(field: &FormField, i18n: &I18n) -> String {
    if let Some(label) = &field.label {
        return label.clone();
    }
    DEFAULT_FORM_FIELDS
        .iter()
        .find(|(name, _)| *name == field.name)
        .map_or_else(|| field.name.clone(), |(_, key)| i18n.tr(key))
}

/// Name of the selected file, without its directory.
fn display_value(value: &str) -> &str {
    Path::new(value)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(value)
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub title: String,
    pub document: &'a Document,
    pub fields: &'a [FormField],
    pub widgets: &'a [ImagePreviewWidget],
    /// Decoded preview images by preview container.
    pub previews: &'a HashMap<ElementId, Handle>,
}

impl ViewContext<'_> {
    fn is_loading(&self, input: ElementId) -> bool {
        self.widgets.iter().any(|widget| {
            widget.binds_input(input)
                && widget
                    .state(&widget.key_of(self.document, input))
                    .is_pending()
        })
    }
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let mut column = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::LG)
        .push(Text::new(ctx.title.clone()).size(typography::TITLE_MD));

    for field in ctx.fields {
        column = column.push(view_field(&ctx, field));
    }

    Container::new(column)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn view_field<'a>(ctx: &ViewContext<'a>, field: &FormField) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let value = ctx
        .document
        .value(field.input)
        .filter(|value| !value.is_empty())
        .map_or_else(|| i18n.tr("no-file-selected"), |v| display_value(v).to_string());

    let controls = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(
            Text::new(field_label(field, i18n))
                .size(typography::BODY)
                .width(Length::Fixed(sizing::LABEL_WIDTH)),
        )
        .push(button(text(i18n.tr("choose-file-button"))).on_press(Message::Choose(field.input)))
        .push(
            Text::new(value)
                .size(typography::CAPTION)
                .width(Length::Fill),
        )
        .push(button(text(i18n.tr("reset-button"))).on_press(Message::Reset(field.reset)));

    let preview: Element<'a, Message> = match ctx.previews.get(&field.preview) {
        Some(handle) => image(handle.clone())
            .content_fit(ContentFit::Contain)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        None => {
            let key = if ctx.is_loading(field.input) {
                "preview-loading"
            } else {
                "preview-empty"
            };
            Text::new(i18n.tr(key)).size(typography::CAPTION).into()
        }
    };

    let preview = Container::new(preview)
        .width(Length::Fixed(sizing::PREVIEW_SIZE))
        .height(Length::Fixed(sizing::PREVIEW_SIZE))
        .padding(spacing::XXS)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(preview_style);

    Column::new()
        .spacing(spacing::XS)
        .push(controls)
        .push(preview)
        .into()
}

fn preview_style(theme: &Theme) -> container::Style {
    container::Style {
        border: iced::Border {
            color: palette::GRAY_200,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        background: Some(iced::Background::Color(
            theme.extended_palette().background.weak.color,
        )),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::config::Config;

    fn field(name: &str, label: Option<&str>) -> FieldConfig {
        FieldConfig {
            name: name.to_string(),
            label: label.map(str::to_string),
        }
    }

    #[test]
    fn build_document_creates_three_elements_per_field() {
        let avatar = field("avatar", None);
        let cover = field("cover", Some("Cover"));
        let (doc, fields) = build_document(&[&avatar, &cover]);

        assert_eq!(doc.len(), 6);
        assert_eq!(fields.len(), 2);
        assert_eq!(doc.query(r#"[name="avatar"]"#).unwrap(), vec![fields[0].input]);
        assert_eq!(doc.query("#avatar-reset").unwrap(), vec![fields[0].reset]);
        assert_eq!(doc.query("#cover-preview").unwrap(), vec![fields[1].preview]);
        assert_eq!(doc.query(".preview").unwrap().len(), 2);
        assert_eq!(doc.value(fields[0].input), Some(""));
    }

    #[test]
    fn field_label_prefers_configured_label() {
        let i18n = I18n::new(Some("en-US".to_string()), &Config::default());
        let avatar = field("avatar", None);
        let cover = field("cover", Some("Cover photo"));
        let gallery = field("gallery", None);
        let (_, fields) = build_document(&[&avatar, &cover, &gallery]);

        assert_eq!(field_label(&fields[0], &i18n), i18n.tr("form-field-avatar"));
        assert_eq!(field_label(&fields[1], &i18n), "Cover photo");
        assert_eq!(field_label(&fields[2], &i18n), "gallery");
    }

    #[test]
    fn display_value_strips_directories() {
        assert_eq!(display_value("/home/user/photo.png"), "photo.png");
        assert_eq!(display_value("photo.png"), "photo.png");
    }
}
