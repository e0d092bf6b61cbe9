//! `NotificationSink` that writes to the `log` facade.

use student_accounts_core::traits::NotificationSink;
use student_accounts_core::types::{Notification, Severity};

/// Routes notifications to the log, one level per severity
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotificationSink;

impl LogNotificationSink {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl NotificationSink for LogNotificationSink {
    fn notify(&self, notification: Notification) {
        let Notification {
            severity,
            title,
            description,
        } = notification;
        match severity {
            Severity::Success => log::info!("{title}: {description}"),
            Severity::Warning => log::warn!("{title}: {description}"),
            Severity::Error => log::error!("{title}: {description}"),
        }
    }
}
