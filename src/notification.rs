//! Notification module for dashkit
//!
//! Provides a reusable notification system that displays transient messages
//! as stacked overlays in the top-right corner. Any component in the
//! application can use this module to show notifications.

mod notification_render;
mod notification_state;

pub use notification_render::render_notifications;
pub use notification_state::{
    DISPLAY_DURATION, FADE_DURATION, Notification, NotificationHandle, NotificationPhase,
    NotificationState, NotificationStyle, NotificationType,
};
