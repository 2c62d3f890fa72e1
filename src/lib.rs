// SPDX-License-Identifier: MPL-2.0
//! `image_preview` shows instant previews of images picked through file inputs.
//!
//! A preview widget binds a page's file inputs, reset buttons and preview
//! containers through selectors, remembers the file chosen for each input,
//! reads it into a data URL off the UI thread and paints it into every bound
//! preview. The bundled Iced application drives the widget from an upload form
//! with Fluent translations and a TOML configuration file.

#![doc(html_root_url = "https://docs.rs/image_preview/0.1.0")]

pub mod app;
pub mod application;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod ui;
