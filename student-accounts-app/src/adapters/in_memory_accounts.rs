//! In-memory `AccountsService`.
//!
//! Behaves like the remote API: ids are assigned on create, unknown ids fail.

use async_trait::async_trait;
use tokio::sync::RwLock;

use student_accounts_core::error::RemoteError;
use student_accounts_core::traits::AccountsService;
use student_accounts_core::types::{Account, AccountPayload};

/// Accounts held in process memory, in insertion order
#[derive(Debug, Default)]
pub struct InMemoryAccountsService {
    accounts: RwLock<Vec<Account>>,
}

impl InMemoryAccountsService {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with existing records
    #[must_use]
    pub fn with_accounts(accounts: Vec<Account>) -> Self {
        Self {
            accounts: RwLock::new(accounts),
        }
    }
}

#[async_trait]
impl AccountsService for InMemoryAccountsService {
    async fn list(&self) -> Result<Vec<Account>, RemoteError> {
        Ok(self.accounts.read().await.clone())
    }

    async fn create(&self, payload: &AccountPayload) -> Result<Account, RemoteError> {
        let account = Account {
            id: uuid::Uuid::new_v4().to_string(),
            name: payload.name.clone(),
            student_id: payload.student_id.clone(),
            password: payload.password.clone(),
            user_id: payload.user_id.clone(),
        };
        self.accounts.write().await.push(account.clone());
        Ok(account)
    }

    async fn update(&self, id: &str, payload: &AccountPayload) -> Result<Account, RemoteError> {
        let mut store = self.accounts.write().await;
        let account = store
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| RemoteError::new(format!("Account not found: {id}")))?;

        // Ownership is fixed at creation
        account.name = payload.name.clone();
        account.student_id = payload.student_id.clone();
        account.password = payload.password.clone();
        Ok(account.clone())
    }

    async fn delete(&self, id: &str) -> Result<(), RemoteError> {
        let mut store = self.accounts.write().await;
        let before = store.len();
        store.retain(|a| a.id != id);
        if store.len() == before {
            return Err(RemoteError::new(format!("Account not found: {id}")));
        }
        Ok(())
    }
}
