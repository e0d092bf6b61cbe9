//! Collaborator abstraction trait definitions

mod accounts_service;
mod current_user;
mod notification_sink;

pub use accounts_service::AccountsService;
pub use current_user::{CurrentUserProvider, StaticCurrentUser};
pub use notification_sink::NotificationSink;
