//! Account related type definitions

use std::fmt;

use serde::{Deserialize, Serialize};

/// Plaintext account password.
///
/// The remote API stores and returns passwords in the clear and the admin
/// screen can reveal them. This is known insecure legacy behavior kept for
/// parity; the raw value is only reachable through [`Password::expose`] and
/// never shows up in `Debug` output or logs.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Password(String);

impl Password {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Raw plaintext value
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(<redacted>)")
    }
}

impl From<&str> for Password {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Password {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Account record as returned by the remote service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Server-assigned identifier, immutable once created
    pub id: String,
    /// Display name
    pub name: String,
    /// Seven digit student ID
    pub student_id: String,
    /// Plaintext password
    pub password: Password,
    /// Owning user, set at creation
    pub user_id: String,
}

impl Account {
    /// Editable part of the record
    #[must_use]
    pub fn fields(&self) -> AccountFields {
        AccountFields {
            name: self.name.clone(),
            student_id: self.student_id.clone(),
            password: self.password.clone(),
        }
    }
}

/// The user-editable fields of an account.
///
/// Also the unit of change detection: an edit whose fields compare equal to
/// the pre-edit snapshot is a no-op.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountFields {
    pub name: String,
    pub student_id: String,
    pub password: Password,
}

impl AccountFields {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        student_id: impl Into<String>,
        password: impl Into<Password>,
    ) -> Self {
        Self {
            name: name.into(),
            student_id: student_id.into(),
            password: password.into(),
        }
    }

    /// Attach the owning user to build a create/update payload
    #[must_use]
    pub fn into_payload(self, user_id: impl Into<String>) -> AccountPayload {
        AccountPayload {
            name: self.name,
            student_id: self.student_id,
            password: self.password,
            user_id: user_id.into(),
        }
    }
}

/// Body of a create or update call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountPayload {
    pub name: String,
    pub student_id: String,
    pub password: Password,
    pub user_id: String,
}
