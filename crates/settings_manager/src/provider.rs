//! Settings provider seam
//!
//! The API asks its [`SettingsProvider`] for the current settings on every
//! request. Nothing is cached: an operator edit takes effect on the next
//! request.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::errors::{SettingsError, SettingsResult};
use crate::settings::{ApiSettings, SettingsDocument};

#[cfg(test)]
#[path = "provider_tests.rs"]
mod tests;

/// Source of the current API settings.
///
/// # Examples
///
/// ```no_run
/// use settings_manager::{ApiSettings, SettingsProvider, SettingsResult};
/// use async_trait::async_trait;
///
/// struct AlwaysOpen;
///
/// #[async_trait]
/// impl SettingsProvider for AlwaysOpen {
///     async fn api_settings(&self) -> SettingsResult<ApiSettings> {
///         Ok(ApiSettings { api_enabled: true, ..ApiSettings::default() })
///     }
/// }
/// ```
#[async_trait]
pub trait SettingsProvider: Send + Sync {
    /// Current settings.
    ///
    /// # Errors
    /// Returns `SettingsError` if the settings source cannot be read
    async fn api_settings(&self) -> SettingsResult<ApiSettings>;
}

/// Provider returning a fixed value.
#[derive(Debug, Clone, Default)]
pub struct StaticSettingsProvider {
    settings: ApiSettings,
}

impl StaticSettingsProvider {
    pub fn new(settings: ApiSettings) -> Self {
        Self { settings }
    }
}

#[async_trait]
impl SettingsProvider for StaticSettingsProvider {
    async fn api_settings(&self) -> SettingsResult<ApiSettings> {
        Ok(self.settings.clone())
    }
}

/// Provider reading a TOML settings file on every call.
///
/// A missing file yields [`ApiSettings::default`], which keeps the API
/// disabled until the operator turns it on.
#[derive(Debug, Clone)]
pub struct FileSettingsProvider {
    path: PathBuf,
}

impl FileSettingsProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl SettingsProvider for FileSettingsProvider {
    async fn api_settings(&self) -> SettingsResult<ApiSettings> {
        let origin = self.path.display().to_string();

        let document = match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => SettingsDocument::parse(&contents, &origin)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %origin, "Settings file not found, using defaults");
                SettingsDocument::default()
            }
            Err(e) => {
                warn!(path = %origin, error = %e, "Failed to read settings file");
                return Err(SettingsError::FileAccess {
                    path: origin,
                    reason: e.to_string(),
                });
            }
        };

        Ok(document.into())
    }
}
