//! API settings model and its TOML file format.
//!
//! # TOML Format
//!
//! ```toml
//! api_enabled = true
//! api_key = "R2d9xQ7..."
//! cors_enabled = true
//! allowed_origins = "https://menus.example.com, https://*.example.org"
//! ```
//!
//! Every field is optional; missing fields take the defaults listed on
//! [`ApiSettings`].

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use crate::errors::{SettingsError, SettingsResult};
use crate::key::ApiKey;

#[cfg(test)]
#[path = "settings_tests.rs"]
mod tests;

/// Allowed-origins value that admits every origin.
pub const DEFAULT_ALLOWED_ORIGINS: &str = "*";

/// Settings that govern the public API.
///
/// | Field | Default |
/// |---|---|
/// | `api_enabled` | `false` |
/// | `api_key` | empty (public access) |
/// | `cors_enabled` | `true` |
/// | `allowed_origins` | `"*"` |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiSettings {
    pub api_enabled: bool,
    pub api_key: ApiKey,
    pub cors_enabled: bool,

    /// `*` or a comma-separated list of origin patterns, each optionally
    /// containing `*` wildcards.
    pub allowed_origins: String,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            api_enabled: false,
            api_key: ApiKey::default(),
            cors_enabled: true,
            allowed_origins: DEFAULT_ALLOWED_ORIGINS.to_string(),
        }
    }
}

/// On-disk representation of [`ApiSettings`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsDocument {
    pub api_enabled: bool,
    pub api_key: String,
    pub cors_enabled: bool,
    pub allowed_origins: String,
}

impl Default for SettingsDocument {
    fn default() -> Self {
        Self::from(&ApiSettings::default())
    }
}

impl SettingsDocument {
    /// Parse TOML content. `origin` names the source in error messages.
    ///
    /// # Errors
    /// Returns `SettingsError::Parse` if the content is not valid settings TOML
    pub fn parse(contents: &str, origin: &str) -> SettingsResult<Self> {
        toml::from_str(contents).map_err(|e| SettingsError::Parse {
            path: origin.to_string(),
            reason: e.to_string(),
        })
    }

    /// Load a settings file. A missing file yields the defaults.
    ///
    /// # Errors
    /// - `SettingsError::FileAccess` if the file exists but cannot be read
    /// - `SettingsError::Parse` if the content is invalid
    pub fn load(path: &Path) -> SettingsResult<Self> {
        let origin = path.display().to_string();
        match std::fs::read_to_string(path) {
            Ok(contents) => Self::parse(&contents, &origin),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %origin, "Settings file not found, using defaults");
                Ok(Self::default())
            }
            Err(e) => Err(SettingsError::FileAccess {
                path: origin,
                reason: e.to_string(),
            }),
        }
    }

    /// Write the settings file, replacing any previous content.
    ///
    /// # Errors
    /// - `SettingsError::Serialize` if TOML encoding fails
    /// - `SettingsError::FileAccess` if the file cannot be written
    pub fn save(&self, path: &Path) -> SettingsResult<()> {
        let contents = toml::to_string_pretty(self).map_err(|e| SettingsError::Serialize {
            reason: e.to_string(),
        })?;

        std::fs::write(path, contents).map_err(|e| SettingsError::FileAccess {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }
}

impl From<SettingsDocument> for ApiSettings {
    fn from(document: SettingsDocument) -> Self {
        Self {
            api_enabled: document.api_enabled,
            api_key: ApiKey::new(document.api_key),
            cors_enabled: document.cors_enabled,
            allowed_origins: document.allowed_origins,
        }
    }
}

impl From<&ApiSettings> for SettingsDocument {
    fn from(settings: &ApiSettings) -> Self {
        Self {
            api_enabled: settings.api_enabled,
            api_key: settings.api_key.expose().to_string(),
            cors_enabled: settings.cors_enabled,
            allowed_origins: settings.allowed_origins.clone(),
        }
    }
}
