//! Remote accounts service abstract Trait

use async_trait::async_trait;

use crate::error::RemoteError;
use crate::types::{Account, AccountPayload};

/// Remote accounts API Trait
///
/// The remote service is the source of truth; the controller never patches
/// its local list, it always re-fetches through [`AccountsService::list`].
/// Every operation either succeeds or fails with a [`RemoteError`].
#[async_trait]
pub trait AccountsService: Send + Sync {
    /// Get all accounts
    async fn list(&self) -> Result<Vec<Account>, RemoteError>;

    /// Create account
    ///
    /// # Arguments
    /// * `payload` - Fields plus owning user
    async fn create(&self, payload: &AccountPayload) -> Result<Account, RemoteError>;

    /// Update account
    ///
    /// # Arguments
    /// * `id` - Account ID
    /// * `payload` - New fields plus owning user
    async fn update(&self, id: &str, payload: &AccountPayload) -> Result<Account, RemoteError>;

    /// Delete account
    ///
    /// # Arguments
    /// * `id` - Account ID
    async fn delete(&self, id: &str) -> Result<(), RemoteError>;
}
