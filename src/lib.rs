//! dashkit library - client-side dashboard helpers
//!
//! Two independent building blocks with no shared state between them:
//! a thin JSON API client ([`api`]) and a transient notification overlay
//! for ratatui UIs ([`notification`]).

pub mod api;
pub mod notification;

// Re-export commonly used types for convenience
pub use api::{ApiClient, ApiError};
pub use notification::{NotificationState, NotificationType, render_notifications};
