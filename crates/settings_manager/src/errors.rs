//! Settings error types.

use thiserror::Error;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Errors raised while loading or saving API settings.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SettingsError {
    #[error("Failed to access settings file: {path} - {reason}")]
    FileAccess { path: String, reason: String },

    #[error("Failed to parse settings file: {path} - {reason}")]
    Parse { path: String, reason: String },

    #[error("Failed to serialize settings: {reason}")]
    Serialize { reason: String },
}

/// Result type alias for settings operations.
pub type SettingsResult<T> = Result<T, SettingsError>;
