//! Application configuration file

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use student_accounts_core::config::ControllerConfig;
use student_accounts_core::error::{CoreError, CoreResult};

/// Directory name under the platform config dir
pub const CONFIG_DIR_NAME: &str = "student-accounts";

/// Config file name
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Default operator id when none is configured
pub const DEFAULT_USER_ID: &str = "admin";

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    /// Operator recorded as owner of created accounts
    pub user_id: String,
    /// Account list controller settings
    pub controller: ControllerConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            user_id: DEFAULT_USER_ID.to_string(),
            controller: ControllerConfig::default(),
        }
    }
}

impl AppConfig {
    /// `<config dir>/student-accounts/config.json`, if the platform has a config dir
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load from the default location, falling back to defaults
    pub fn load_default() -> CoreResult<Self> {
        match Self::default_path() {
            Some(path) => Self::load(&path),
            None => {
                log::warn!("No platform config directory, using default config");
                Ok(Self::default())
            }
        }
    }

    /// Load from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> CoreResult<Self> {
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("Config file {} not found, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(e) => {
                return Err(CoreError::ConfigError(format!(
                    "Failed to read {}: {e}",
                    path.display()
                )))
            }
        };
        Self::from_json(&raw)
    }

    /// Parse JSON config text
    pub fn from_json(raw: &str) -> CoreResult<Self> {
        let config: Self = serde_json::from_str(raw)
            .map_err(|e| CoreError::ConfigError(format!("Invalid config: {e}")))?;
        if config.user_id.trim().is_empty() {
            return Err(CoreError::ConfigError("userId must not be empty".to_string()));
        }
        Ok(config)
    }

    /// Write as pretty JSON, creating parent directories
    pub fn save(&self, path: &Path) -> CoreResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                CoreError::ConfigError(format!("Failed to create {}: {e}", parent.display()))
            })?;
        }
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| CoreError::ConfigError(e.to_string()))?;
        std::fs::write(path, json)
            .map_err(|e| CoreError::ConfigError(format!("Failed to write {}: {e}", path.display())))
    }
}
