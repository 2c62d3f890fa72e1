// SPDX-License-Identifier: MPL-2.0
//! Subscriptions of the application.

use super::Message;
use iced::{time, Subscription};

/// Ticks while toasts are showing so they can auto-dismiss.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(std::time::Duration::from_millis(100)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
