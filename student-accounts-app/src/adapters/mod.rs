//! Collaborator adapters for frontends without a real backend (CLI, demos, tests).

mod in_memory_accounts;
mod log_notification_sink;

pub use in_memory_accounts::InMemoryAccountsService;
pub use log_notification_sink::LogNotificationSink;
