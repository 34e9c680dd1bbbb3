//! Notification state management
//!
//! Tracks transient notifications from creation through fade-out to removal.
//! Each call to a `show*` method creates an independent entry; there is no
//! deduplication, queuing, or maximum-visible-count enforcement.

use ratatui::style::Color;
use std::time::{Duration, Instant};

/// How long a notification stays fully visible
pub const DISPLAY_DURATION: Duration = Duration::from_millis(3000);

/// How long the fade-out lasts before the notification is removed
pub const FADE_DURATION: Duration = Duration::from_millis(300);

/// Notification category - determines the visual style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationType {
    /// Info (gray) - neutral messages like "Refreshed"
    #[default]
    Info,
    /// Success (green) - confirmations like "Saved"
    Success,
    /// Warning (yellow) - recoverable problems like a rejected field
    Warning,
    /// Error (red) - failed operations
    Error,
}

impl NotificationType {
    /// Stable lowercase label for this category ("info", "success", ...)
    pub fn label(self) -> &'static str {
        match self {
            NotificationType::Info => "info",
            NotificationType::Success => "success",
            NotificationType::Warning => "warning",
            NotificationType::Error => "error",
        }
    }

    /// Get the style for this notification type
    fn style(self) -> NotificationStyle {
        match self {
            NotificationType::Info => NotificationStyle {
                fg: Color::White,
                bg: Color::DarkGray,
                border: Color::Gray,
            },
            NotificationType::Success => NotificationStyle {
                fg: Color::Black,
                bg: Color::Green,
                border: Color::LightGreen,
            },
            NotificationType::Warning => NotificationStyle {
                fg: Color::Black,
                bg: Color::Yellow,
                border: Color::Yellow,
            },
            NotificationType::Error => NotificationStyle {
                fg: Color::White,
                bg: Color::Red,
                border: Color::LightRed,
            },
        }
    }
}

/// Style configuration for a notification
#[derive(Debug, Clone)]
pub struct NotificationStyle {
    pub fg: Color,
    pub bg: Color,
    pub border: Color,
}

impl Default for NotificationStyle {
    fn default() -> Self {
        NotificationType::Info.style()
    }
}

/// Lifecycle phase of a notification, derived from its age
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationPhase {
    /// Within the display window, rendered at full intensity
    Visible,
    /// Display window elapsed, fade-out in progress
    Fading,
    /// Fade complete, ready to be swept
    Expired,
}

/// Handle identifying a live notification, returned by the `show*` methods
///
/// Lets callers dismiss or track a pending notification before it expires
/// on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationHandle(u64);

/// A single notification with message, timing, and style
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub notification_type: NotificationType,
    pub style: NotificationStyle,
    pub created_at: Instant,
    /// Fully-visible window; public so tests can shorten it
    pub display: Duration,
    /// Fade-out window appended to `display`
    pub fade: Duration,
}

impl Notification {
    /// Create a new info notification
    pub fn new(message: &str) -> Self {
        Self::with_type(message, NotificationType::Info)
    }

    /// Create a notification with specified type
    pub fn with_type(message: &str, notification_type: NotificationType) -> Self {
        Self {
            message: message.to_string(),
            style: notification_type.style(),
            notification_type,
            created_at: Instant::now(),
            display: DISPLAY_DURATION,
            fade: FADE_DURATION,
        }
    }

    /// Current lifecycle phase based on elapsed time
    pub fn phase(&self) -> NotificationPhase {
        let age = self.created_at.elapsed();
        if age <= self.display {
            NotificationPhase::Visible
        } else if age <= self.display + self.fade {
            NotificationPhase::Fading
        } else {
            NotificationPhase::Expired
        }
    }

    /// Check if the notification has passed both display and fade windows
    pub fn is_expired(&self) -> bool {
        self.phase() == NotificationPhase::Expired
    }
}

/// Notification list manager for the application
///
/// Holds live notifications in insertion order. Expiry is evaluated at
/// sweep/render time against the clock, so no background timers exist and
/// concurrent `show*` calls never block each other.
#[derive(Debug, Default)]
pub struct NotificationState {
    entries: Vec<(NotificationHandle, Notification)>,
    next_id: u64,
}

impl NotificationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show an info notification (gray)
    pub fn show(&mut self, message: &str) -> NotificationHandle {
        self.show_with_type(message, NotificationType::Info)
    }

    /// Show a notification with specified type
    pub fn show_with_type(
        &mut self,
        message: &str,
        notification_type: NotificationType,
    ) -> NotificationHandle {
        log::debug!("notification [{}]: {message}", notification_type.label());
        let handle = NotificationHandle(self.next_id);
        self.next_id += 1;
        self.entries
            .push((handle, Notification::with_type(message, notification_type)));
        handle
    }

    /// Show a success notification (green)
    pub fn show_success(&mut self, message: &str) -> NotificationHandle {
        self.show_with_type(message, NotificationType::Success)
    }

    /// Show a warning notification (yellow)
    pub fn show_warning(&mut self, message: &str) -> NotificationHandle {
        self.show_with_type(message, NotificationType::Warning)
    }

    /// Show an error notification (red)
    pub fn show_error(&mut self, message: &str) -> NotificationHandle {
        self.show_with_type(message, NotificationType::Error)
    }

    /// Dismiss a pending notification early, returns true if it was live
    pub fn dismiss(&mut self, handle: NotificationHandle) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(h, _)| *h != handle);
        self.entries.len() != before
    }

    /// Check whether a handle still refers to a live notification
    pub fn is_active(&self, handle: NotificationHandle) -> bool {
        self.entries.iter().any(|(h, _)| *h == handle)
    }

    /// Drop entries whose fade has completed, returns how many were removed
    pub fn sweep_expired(&mut self) -> usize {
        let before = self.entries.len();
        self.entries.retain(|(_, notif)| !notif.is_expired());
        before - self.entries.len()
    }

    /// Live notifications in insertion order
    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.entries.iter().map(|(_, notif)| notif)
    }

    /// Number of live notifications
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Mutable access to a live notification (test-only, used to shorten
    /// durations without waiting out the real windows)
    #[cfg(test)]
    pub fn get_mut(&mut self, handle: NotificationHandle) -> Option<&mut Notification> {
        self.entries
            .iter_mut()
            .find(|(h, _)| *h == handle)
            .map(|(_, notif)| notif)
    }
}

#[cfg(test)]
#[path = "notification_state_tests.rs"]
mod notification_state_tests;
