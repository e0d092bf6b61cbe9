//! Notification sink Trait

use crate::types::Notification;

/// Receives user-facing notifications. Fire-and-forget.
pub trait NotificationSink: Send + Sync {
    fn notify(&self, notification: Notification);
}
