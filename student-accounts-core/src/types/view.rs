//! View state exposed to the presentation layer

use std::collections::HashSet;

use serde::Serialize;

use super::{Account, AccountFields};

/// Which kind of modal is open
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FormModeKind {
    Add,
    Edit,
}

/// Mode of an edit session.
///
/// The edit snapshot lives inside the session rather than in a side cell, so
/// it is destroyed together with the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    /// Creating a new account
    Add,
    /// Editing an existing account
    Edit {
        /// Identifier of the record being edited
        target_id: String,
        /// Editable fields as they were when the modal opened
        snapshot: AccountFields,
    },
}

impl FormMode {
    #[must_use]
    pub fn kind(&self) -> FormModeKind {
        match self {
            Self::Add => FormModeKind::Add,
            Self::Edit { .. } => FormModeKind::Edit,
        }
    }
}

/// One opening of the add/edit modal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    /// Increases on every open; the form resets only when this changes
    pub session_id: u64,
    pub mode: FormMode,
    /// Values the form is populated with
    pub initial: AccountFields,
}

/// Modal state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ModalState {
    #[default]
    Closed,
    Open(EditSession),
}

impl ModalState {
    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open(_))
    }

    #[must_use]
    pub fn session(&self) -> Option<&EditSession> {
        match self {
            Self::Open(session) => Some(session),
            Self::Closed => None,
        }
    }
}

/// Account list screen state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountListState {
    /// Accounts from the last successful refresh, unique by id
    pub accounts: Vec<Account>,
    /// Whether a fetch or mutation is in flight
    pub loading: bool,
    /// Ids whose password is currently shown in the clear
    pub revealed: HashSet<String>,
    /// Add/edit modal
    pub modal: ModalState,
}

impl Default for AccountListState {
    /// The screen starts loading: the first refresh runs on mount.
    fn default() -> Self {
        Self {
            accounts: Vec::new(),
            loading: true,
            revealed: HashSet::new(),
            modal: ModalState::Closed,
        }
    }
}

impl AccountListState {
    #[must_use]
    pub fn is_password_revealed(&self, id: &str) -> bool {
        self.revealed.contains(id)
    }

    /// Find an account by id
    #[must_use]
    pub fn account(&self, id: &str) -> Option<&Account> {
        self.accounts.iter().find(|a| a.id == id)
    }
}
