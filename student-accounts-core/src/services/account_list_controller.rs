//! Account list controller
//!
//! Owns the account list view state and mediates create/update/delete
//! against the remote accounts service. Every mutation attempt ends in a
//! full list refresh; the remote service is the source of truth.

use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::watch;

use crate::config::{ControllerConfig, RefreshFailurePolicy};
use crate::error::{CoreError, CoreResult, RemoteError};
use crate::form::{AccountForm, ValidatedAccount};
use crate::services::ControllerContext;
use crate::types::{
    Account, AccountFields, AccountListState, EditSession, FormMode, ModalState, Notification,
};

/// Result of a submit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Remote create succeeded
    Created(Account),
    /// Remote update succeeded
    Updated(Account),
    /// Edit matched the snapshot; nothing was sent
    NoChanges,
    /// Remote call failed (already notified)
    Failed(RemoteError),
}

/// Account list controller
pub struct AccountListController {
    ctx: Arc<ControllerContext>,
    config: ControllerConfig,
    state: watch::Sender<AccountListState>,
    next_session_id: AtomicU64,
}

impl AccountListController {
    /// Create a controller. The initial state is loading with an empty list;
    /// call [`refresh`](Self::refresh) on mount.
    #[must_use]
    pub fn new(ctx: Arc<ControllerContext>, config: ControllerConfig) -> Self {
        let (state, _) = watch::channel(AccountListState::default());
        Self {
            ctx,
            config,
            state,
            next_session_id: AtomicU64::new(1),
        }
    }

    // ===== View state =====

    /// Snapshot of the current state
    pub fn state(&self) -> AccountListState {
        self.state.borrow().clone()
    }

    /// Subscribe to state changes
    pub fn subscribe(&self) -> watch::Receiver<AccountListState> {
        self.state.subscribe()
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    pub fn is_password_revealed(&self, id: &str) -> bool {
        self.state.borrow().is_password_revealed(id)
    }

    /// Password text to display: plaintext when revealed, the mask otherwise
    pub fn display_password(&self, account: &Account) -> String {
        if self.is_password_revealed(&account.id) {
            account.password.expose().to_string()
        } else {
            self.config.password_mask.clone()
        }
    }

    // ===== List =====

    /// Fetch the full list and replace local state.
    ///
    /// Revealed ids that are no longer listed are forgotten. On failure the
    /// stale list and the loading flag are left untouched. Returns whether
    /// the fetch succeeded.
    pub async fn refresh(&self) -> bool {
        match self.ctx.accounts_service().list().await {
            Ok(accounts) => {
                let accounts = dedup_by_id(accounts);
                log::debug!("Refreshed account list: {} accounts", accounts.len());
                self.state.send_modify(|s| {
                    s.revealed
                        .retain(|id| accounts.iter().any(|account| &account.id == id));
                    s.accounts = accounts;
                    s.loading = false;
                });
                true
            }
            Err(e) => {
                log::warn!("Failed to refresh accounts, keeping stale list: {e}");
                if self.config.refresh_failure == RefreshFailurePolicy::Notify {
                    self.ctx
                        .notification_sink()
                        .notify(Notification::error("Failed To Load Accounts", e.message));
                }
                false
            }
        }
    }

    /// Toggle whether the password of `id` is shown. Returns the new visibility.
    pub fn toggle_password_visibility(&self, id: &str) -> bool {
        let mut revealed = false;
        self.state.send_modify(|s| {
            if !s.revealed.remove(id) {
                s.revealed.insert(id.to_string());
                revealed = true;
            }
        });
        revealed
    }

    // ===== Modal =====

    /// Open the modal in add mode with empty fields
    pub fn open_add(&self) {
        self.open(FormMode::Add, AccountFields::default());
    }

    /// Open the modal in edit mode, pre-filled from `account`
    pub fn open_edit(&self, account: &Account) {
        let snapshot = account.fields();
        self.open(
            FormMode::Edit {
                target_id: account.id.clone(),
                snapshot: snapshot.clone(),
            },
            snapshot,
        );
    }

    /// Cancel the modal; the edit session and its snapshot are dropped
    pub fn close_modal(&self) {
        self.state.send_if_modified(|s| {
            let was_open = s.modal.is_open();
            s.modal = ModalState::Closed;
            was_open
        });
    }

    fn open(&self, mode: FormMode, initial: AccountFields) {
        let session_id = self.next_session_id.fetch_add(1, Ordering::Relaxed);
        self.state.send_modify(|s| {
            s.modal = ModalState::Open(EditSession {
                session_id,
                mode,
                initial,
            });
        });
    }

    // ===== Mutations =====

    /// Validate the form and submit it.
    ///
    /// Invalid input returns [`CoreError::Validation`] and nothing else happens.
    pub async fn submit_form(&self, form: &mut AccountForm) -> CoreResult<SubmitOutcome> {
        let validated = form.submit().map_err(CoreError::Validation)?;
        self.submit(validated).await
    }

    /// Submit validated values for the open modal.
    ///
    /// The modal closes and `loading` turns on before any remote call. An
    /// edit equal to its snapshot short-circuits with a warning; every other
    /// path ends in a full refresh whatever the remote outcome.
    pub async fn submit(&self, values: ValidatedAccount) -> CoreResult<SubmitOutcome> {
        let session = self.take_session()?;
        let fields = values.into_fields();
        let user_id = self.ctx.current_user().user_id();
        let sink = self.ctx.notification_sink();

        let outcome = match session.mode {
            FormMode::Add => {
                let payload = fields.into_payload(user_id);
                match self.ctx.accounts_service().create(&payload).await {
                    Ok(account) => {
                        log::info!("Account created: {}", account.id);
                        sink.notify(Notification::success(
                            "Account Added",
                            format!("Account {} has been added", payload.name),
                        ));
                        SubmitOutcome::Created(account)
                    }
                    Err(e) => {
                        log::error!("Failed to create account: {e}");
                        sink.notify(Notification::error(
                            "Failed To Add Account",
                            e.message.clone(),
                        ));
                        SubmitOutcome::Failed(e)
                    }
                }
            }
            FormMode::Edit {
                target_id,
                snapshot,
            } => {
                if fields == snapshot {
                    log::debug!("Edit of account {target_id} has no changes");
                    sink.notify(Notification::warning(
                        "No Changes",
                        "No changes were made to the account",
                    ));
                    self.set_loading(false);
                    return Ok(SubmitOutcome::NoChanges);
                }

                let payload = fields.into_payload(user_id);
                match self
                    .ctx
                    .accounts_service()
                    .update(&target_id, &payload)
                    .await
                {
                    Ok(account) => {
                        log::info!("Account updated: {target_id}");
                        sink.notify(Notification::success(
                            "Account Updated",
                            format!("Account {} has been updated", payload.name),
                        ));
                        SubmitOutcome::Updated(account)
                    }
                    Err(e) => {
                        log::error!("Failed to update account {target_id}: {e}");
                        sink.notify(Notification::error(
                            "Failed To Edit Account",
                            e.message.clone(),
                        ));
                        SubmitOutcome::Failed(e)
                    }
                }
            }
        };

        self.refresh().await;
        self.set_loading(false);
        Ok(outcome)
    }

    /// Delete `account`, then resync regardless of the outcome.
    ///
    /// Returns whether the remote delete succeeded; failures are already
    /// notified.
    pub async fn delete(&self, account: &Account) -> bool {
        self.set_loading(true);
        let sink = self.ctx.notification_sink();

        let deleted = match self.ctx.accounts_service().delete(&account.id).await {
            Ok(()) => {
                log::info!("Account deleted: {}", account.id);
                sink.notify(Notification::success(
                    "Account Deleted",
                    format!("Account {} has been deleted", account.name),
                ));
                true
            }
            Err(e) => {
                log::error!("Failed to delete account {}: {e}", account.id);
                sink.notify(Notification::error("Failed To Delete Account", e.message));
                false
            }
        };

        self.refresh().await;
        self.set_loading(false);
        deleted
    }

    /// Take the open session, closing the modal and raising `loading` in one step
    fn take_session(&self) -> CoreResult<EditSession> {
        let mut session = None;
        self.state.send_if_modified(|s| match std::mem::take(&mut s.modal) {
            ModalState::Open(open) => {
                session = Some(open);
                s.loading = true;
                true
            }
            ModalState::Closed => false,
        });
        session.ok_or_else(|| {
            log::warn!("Submit requested with no open account modal");
            CoreError::NoOpenModal
        })
    }

    fn set_loading(&self, loading: bool) {
        self.state.send_if_modified(|s| {
            let changed = s.loading != loading;
            s.loading = loading;
            changed
        });
    }
}

/// Keep the first record for each id
fn dedup_by_id(accounts: Vec<Account>) -> Vec<Account> {
    let mut seen = HashSet::with_capacity(accounts.len());
    let total = accounts.len();
    let unique: Vec<Account> = accounts
        .into_iter()
        .filter(|a| seen.insert(a.id.clone()))
        .collect();
    if unique.len() != total {
        log::warn!(
            "Remote returned {} duplicate account ids, keeping first occurrence",
            total - unique.len()
        );
    }
    unique
}
