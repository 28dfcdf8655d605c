use clap::{Args, Subcommand, ValueEnum};
use settings_manager::{generate_api_key, ApiKey, ApiSettings, SettingsDocument};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

use super::DEFAULT_SETTINGS_FILE;
use crate::errors::Error;

#[cfg(test)]
#[path = "settings_cmd_tests.rs"]
mod tests;

/// Arguments for the settings command
#[derive(Args, Debug)]
pub struct SettingsArgs {
    /// Path to the settings file
    #[arg(long, global = true, env = "FLIP_MENU_SETTINGS", default_value = DEFAULT_SETTINGS_FILE)]
    pub settings: PathBuf,

    #[command(subcommand)]
    pub command: SettingsCommands,
}

/// Subcommands for the settings command
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum SettingsCommands {
    /// Show current API settings (the key is masked)
    Show,

    /// Turn the public API on
    Enable,

    /// Turn the public API off
    Disable,

    /// Replace the API key with a new random one
    GenerateKey,

    /// Set the API key; an empty value switches to public access
    SetKey { key: String },

    /// Remove the API key, switching to public access
    ClearKey,

    /// Turn CORS headers on or off
    Cors {
        #[arg(value_enum)]
        state: Toggle,
    },

    /// Set the allowed origins: `*` or a comma-separated list of patterns
    Origins { value: String },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    On,
    Off,
}

/// Execute the settings command and return the text to print
#[instrument(skip(args), fields(path = %args.settings.display()))]
pub fn execute(args: &SettingsArgs) -> Result<String, Error> {
    let path = args.settings.as_path();
    let mut settings = ApiSettings::from(SettingsDocument::load(path)?);

    let message = match &args.command {
        SettingsCommands::Show => return Ok(render_settings(&settings)),
        SettingsCommands::Enable => {
            settings.api_enabled = true;
            "API enabled".to_string()
        }
        SettingsCommands::Disable => {
            settings.api_enabled = false;
            "API disabled".to_string()
        }
        SettingsCommands::GenerateKey => {
            let key = generate_api_key();
            settings.api_key = ApiKey::new(key.as_str());
            format!("New API key: {key}\nThe previous key no longer works.")
        }
        SettingsCommands::SetKey { key } => {
            let key = key.trim();
            settings.api_key = ApiKey::new(key);
            if key.is_empty() {
                "API key cleared; the API is now public".to_string()
            } else {
                "API key updated".to_string()
            }
        }
        SettingsCommands::ClearKey => {
            settings.api_key = ApiKey::default();
            "API key cleared; the API is now public".to_string()
        }
        SettingsCommands::Cors { state } => {
            settings.cors_enabled = *state == Toggle::On;
            format!("CORS {}", if settings.cors_enabled { "enabled" } else { "disabled" })
        }
        SettingsCommands::Origins { value } => {
            settings.allowed_origins = normalize_origins(value)?;
            format!("Allowed origins: {}", settings.allowed_origins)
        }
    };

    save(path, &settings)?;
    info!(command = ?args.command, "Settings updated");
    Ok(message)
}

fn save(path: &Path, settings: &ApiSettings) -> Result<(), Error> {
    debug!(path = %path.display(), "Writing settings file");
    SettingsDocument::from(settings).save(path)?;
    Ok(())
}

/// Human-readable settings listing. The key is masked.
pub fn render_settings(settings: &ApiSettings) -> String {
    let key = if settings.api_key.is_public() {
        "(none, public access)".to_string()
    } else {
        mask_key(settings.api_key.expose())
    };

    format!(
        "api_enabled: {}\napi_key: {}\ncors_enabled: {}\nallowed_origins: {}",
        settings.api_enabled, key, settings.cors_enabled, settings.allowed_origins
    )
}

/// Keep the first four characters and star out the rest.
pub fn mask_key(key: &str) -> String {
    let visible: String = key.chars().take(4).collect();
    let hidden = key.chars().count().saturating_sub(4);
    if hidden == 0 {
        return "*".repeat(visible.chars().count());
    }
    format!("{visible}{}", "*".repeat(hidden))
}

/// Validate and tidy an allowed-origins value.
///
/// `*` is kept as is. Otherwise entries are trimmed, blanks are dropped and
/// the rest are joined with commas. Entries may not contain whitespace.
pub fn normalize_origins(value: &str) -> Result<String, Error> {
    let value = value.trim();
    if value == "*" {
        return Ok(value.to_string());
    }

    let entries: Vec<&str> = value
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .collect();

    if entries.is_empty() {
        return Err(Error::InvalidArguments(
            "allowed origins cannot be empty; use '*' to allow every origin".to_string(),
        ));
    }

    if let Some(entry) = entries.iter().find(|entry| entry.contains(char::is_whitespace)) {
        return Err(Error::InvalidArguments(format!(
            "origin '{entry}' contains whitespace"
        )));
    }

    Ok(entries.join(","))
}
