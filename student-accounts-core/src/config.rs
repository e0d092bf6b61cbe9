//! Account list controller configuration

use serde::{Deserialize, Serialize};

/// Default placeholder shown for hidden passwords
pub const DEFAULT_PASSWORD_MASK: &str = "••••••••";

/// What to do when a list refresh fails.
///
/// In either case the stale list is kept; the policy only decides whether
/// the user hears about it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RefreshFailurePolicy {
    /// Log a warning, keep the stale list, tell nobody
    #[default]
    Silent,
    /// Also push an error notification
    Notify,
}

/// Controller configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ControllerConfig {
    /// Refresh failure handling
    pub refresh_failure: RefreshFailurePolicy,
    /// Text displayed in place of a hidden password
    pub password_mask: String,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            refresh_failure: RefreshFailurePolicy::default(),
            password_mask: DEFAULT_PASSWORD_MASK.to_string(),
        }
    }
}
