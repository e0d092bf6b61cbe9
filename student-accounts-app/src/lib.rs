//! Platform-agnostic application bootstrap for the student accounts screen.
//!
//! Provides `AppState` (controller container), `AppStateBuilder` (adapter
//! injection) and `AppConfig` (config file).

pub mod adapters;
pub mod config;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use student_accounts_core::error::{CoreError, CoreResult};
use student_accounts_core::services::{AccountListController, ControllerContext};
use student_accounts_core::traits::{
    AccountsService, CurrentUserProvider, NotificationSink, StaticCurrentUser,
};

use adapters::LogNotificationSink;
pub use config::AppConfig;

/// Platform-agnostic application state.
///
/// Every frontend constructs this once at startup via `AppStateBuilder`.
pub struct AppState {
    /// Controller context (holds all collaborators)
    pub ctx: Arc<ControllerContext>,
    /// Account list controller
    pub controller: Arc<AccountListController>,
    /// Loaded configuration
    pub config: AppConfig,
    /// Whether the initial list load has run
    pub mounted: AtomicBool,
}

impl AppState {
    /// Initial list load. Sets `mounted` whether or not the fetch succeeded.
    pub async fn mount(&self) -> bool {
        let loaded = self.controller.refresh().await;
        if loaded {
            log::info!(
                "Account list loaded: {} accounts",
                self.controller.state().accounts.len()
            );
        } else {
            log::warn!("Initial account list load failed");
        }
        self.mounted.store(true, Ordering::SeqCst);
        loaded
    }
}

/// Builder for constructing `AppState` with platform-specific adapters.
///
/// # Required adapters
/// - `accounts_service` — the remote accounts API
///
/// # Optional
/// - `notification_sink` — defaults to `LogNotificationSink`
/// - `current_user` — defaults to `StaticCurrentUser` with `config.user_id`
/// - `config` — defaults to `AppConfig::default()`
pub struct AppStateBuilder {
    accounts_service: Option<Arc<dyn AccountsService>>,
    notification_sink: Option<Arc<dyn NotificationSink>>,
    current_user: Option<Arc<dyn CurrentUserProvider>>,
    config: Option<AppConfig>,
}

impl AppStateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            accounts_service: None,
            notification_sink: None,
            current_user: None,
            config: None,
        }
    }

    #[must_use]
    pub fn accounts_service(mut self, service: Arc<dyn AccountsService>) -> Self {
        self.accounts_service = Some(service);
        self
    }

    #[must_use]
    pub fn notification_sink(mut self, sink: Arc<dyn NotificationSink>) -> Self {
        self.notification_sink = Some(sink);
        self
    }

    #[must_use]
    pub fn current_user(mut self, user: Arc<dyn CurrentUserProvider>) -> Self {
        self.current_user = Some(user);
        self
    }

    #[must_use]
    pub fn config(mut self, config: AppConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Build the `AppState`.
    ///
    /// # Errors
    /// Returns `CoreError::ValidationError` if required adapters are missing.
    pub fn build(self) -> CoreResult<AppState> {
        let accounts_service = self.accounts_service.ok_or_else(|| {
            CoreError::ValidationError("accounts_service is required".to_string())
        })?;
        let config = self.config.unwrap_or_default();
        let notification_sink = self
            .notification_sink
            .unwrap_or_else(|| Arc::new(LogNotificationSink::new()));
        let current_user = self
            .current_user
            .unwrap_or_else(|| Arc::new(StaticCurrentUser::new(config.user_id.clone())));

        let ctx = Arc::new(ControllerContext::new(
            accounts_service,
            notification_sink,
            current_user,
        ));
        let controller = Arc::new(AccountListController::new(
            Arc::clone(&ctx),
            config.controller.clone(),
        ));

        Ok(AppState {
            ctx,
            controller,
            config,
            mounted: AtomicBool::new(false),
        })
    }
}

impl Default for AppStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
