// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core types with ZERO external dependencies.
//!
//! This module contains the pure value objects and rules behind the preview
//! widget. It has no dependencies on external crates (except `std`) so the
//! selection logic can be tested without a window or an async runtime.
//!
//! # Modules
//!
//! - [`selection`]: Selected files and their bookkeeping
//!   ([`SelectionKey`](selection::SelectionKey), [`FileHandle`](selection::FileHandle),
//!   [`SelectionCache`](selection::SelectionCache), [`SelectionState`](selection::SelectionState))
//! - [`document`]: Headless page model the widget binds to
//!   ([`Document`](document::Document), [`Selector`](document::Selector))

pub mod document;
pub mod selection;
