//! Current user Trait

/// Exposes the signed-in user.
///
/// A signed-in context is assumed whenever a mutation is submitted.
pub trait CurrentUserProvider: Send + Sync {
    /// Identifier of the authenticated user
    fn user_id(&self) -> String;
}

/// Fixed user, for single-operator deployments and tests
#[derive(Debug, Clone)]
pub struct StaticCurrentUser {
    user_id: String,
}

impl StaticCurrentUser {
    #[must_use]
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
        }
    }
}

impl CurrentUserProvider for StaticCurrentUser {
    fn user_id(&self) -> String {
        self.user_id.clone()
    }
}
