//! Tests for settings providers.

use super::*;
use tempfile::TempDir;

#[tokio::test]
async fn static_provider_returns_its_settings() {
    let settings = ApiSettings {
        api_enabled: true,
        ..ApiSettings::default()
    };
    let provider = StaticSettingsProvider::new(settings.clone());

    assert_eq!(provider.api_settings().await.unwrap(), settings);
}

#[tokio::test]
async fn file_provider_missing_file_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let provider = FileSettingsProvider::new(dir.path().join("flip-menu.toml"));

    assert_eq!(provider.api_settings().await.unwrap(), ApiSettings::default());
}

#[tokio::test]
async fn file_provider_reads_fresh_on_every_call() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("flip-menu.toml");
    let provider = FileSettingsProvider::new(&path);

    std::fs::write(&path, "api_enabled = false\n").unwrap();
    assert!(!provider.api_settings().await.unwrap().api_enabled);

    std::fs::write(&path, "api_enabled = true\napi_key = \"k1\"\n").unwrap();
    let settings = provider.api_settings().await.unwrap();
    assert!(settings.api_enabled);
    assert!(settings.api_key.matches("k1"));
}

#[tokio::test]
async fn file_provider_reports_parse_errors() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("flip-menu.toml");
    std::fs::write(&path, "cors_enabled = maybe\n").unwrap();

    let err = FileSettingsProvider::new(&path).api_settings().await.unwrap_err();

    assert!(matches!(err, SettingsError::Parse { .. }));
}

#[tokio::test]
async fn file_provider_reports_unreadable_path() {
    let dir = TempDir::new().unwrap();

    // A directory cannot be read as a file
    let err = FileSettingsProvider::new(dir.path()).api_settings().await.unwrap_err();

    assert!(matches!(err, SettingsError::FileAccess { .. }));
}
