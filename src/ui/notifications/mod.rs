// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Read failures and configuration fallbacks are reported as toasts that
//! never block the form.
//!
//! - [`notification`] - `Notification` struct with severity levels
//! - [`manager`] - `Manager` for queuing and lifecycle management
//! - [`toast`] - Toast widget for rendering notifications
//!
//! ```ignore
//! let mut manager = Manager::new();
//! manager.push(Notification::warning("notification-config-load-error"));
//! let toast_overlay = Toast::view_overlay(&manager, &i18n).map(Message::Notification);
//! ```
//!
//! Errors stay until dismissed, warnings for 5s, info for 3s. At most 3
//! toasts are visible; others are queued.

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{MessageText, Notification, NotificationId, Severity};
pub use toast::{message_text, Toast};
