//! Student Accounts Core Library
//!
//! Provides the non-rendering logic of the student accounts admin screen:
//! - Form Controller (validation rules and the validate-on-submit form model)
//! - Account List Controller (create/update/delete with optimistic close and
//!   unconditional resync)
//!
//! This library is platform-independent. The remote accounts API, the
//! notification surface and the signed-in user are reached through traits.

pub mod config;
pub mod error;
pub mod form;
pub mod services;
pub mod traits;
pub mod types;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use config::{ControllerConfig, RefreshFailurePolicy};
pub use error::{CoreError, CoreResult, RemoteError};
pub use form::{AccountForm, ValidatedAccount};
pub use services::{AccountListController, ControllerContext, SubmitOutcome};
pub use traits::{AccountsService, CurrentUserProvider, NotificationSink};
