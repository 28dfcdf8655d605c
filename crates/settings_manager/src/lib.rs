//! API settings for the flip menu service
//!
//! The public API is governed by four process-wide settings: whether the
//! API is enabled, the shared API key, whether CORS headers are emitted,
//! and which origins CORS allows. The operator edits them; the API only
//! reads them, fresh on every request.
//!
//! This crate provides:
//! - [`ApiSettings`] and the redacting [`ApiKey`] wrapper
//! - [`SettingsDocument`], the TOML file format
//! - The [`SettingsProvider`] seam with static and file-backed providers
//! - [`generate_api_key`] for issuing new keys

pub mod errors;
pub mod key;
pub mod provider;
pub mod settings;

pub use errors::{SettingsError, SettingsResult};
pub use key::{generate_api_key, ApiKey, GENERATED_KEY_LENGTH};
pub use provider::{FileSettingsProvider, SettingsProvider, StaticSettingsProvider};
pub use settings::{ApiSettings, SettingsDocument, DEFAULT_ALLOWED_ORIGINS};
