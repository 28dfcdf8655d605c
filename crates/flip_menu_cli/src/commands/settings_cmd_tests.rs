//! Tests for settings commands.

use super::*;
use tempfile::TempDir;

fn args(dir: &TempDir, command: SettingsCommands) -> SettingsArgs {
    SettingsArgs {
        settings: dir.path().join("flip-menu.toml"),
        command,
    }
}

fn stored(dir: &TempDir) -> ApiSettings {
    ApiSettings::from(SettingsDocument::load(&dir.path().join("flip-menu.toml")).unwrap())
}

// ============================================================================
// Command Execution Tests
// ============================================================================

#[test]
fn test_show_on_missing_file_prints_defaults_without_writing() {
    let dir = TempDir::new().unwrap();

    let output = execute(&args(&dir, SettingsCommands::Show)).unwrap();

    assert_eq!(
        output,
        "api_enabled: false\napi_key: (none, public access)\ncors_enabled: true\nallowed_origins: *"
    );
    assert!(!dir.path().join("flip-menu.toml").exists());
}

#[test]
fn test_enable_and_disable() {
    let dir = TempDir::new().unwrap();

    execute(&args(&dir, SettingsCommands::Enable)).unwrap();
    assert!(stored(&dir).api_enabled);

    execute(&args(&dir, SettingsCommands::Disable)).unwrap();
    assert!(!stored(&dir).api_enabled);
}

#[test]
fn test_generate_key_stores_and_prints_key() {
    let dir = TempDir::new().unwrap();

    let output = execute(&args(&dir, SettingsCommands::GenerateKey)).unwrap();

    let key = stored(&dir).api_key;
    assert_eq!(key.expose().len(), settings_manager::GENERATED_KEY_LENGTH);
    assert!(output.contains(key.expose()));
}

#[test]
fn test_set_key_trims_value() {
    let dir = TempDir::new().unwrap();

    execute(&args(
        &dir,
        SettingsCommands::SetKey {
            key: "  s3cret  ".to_string(),
        },
    ))
    .unwrap();

    assert_eq!(stored(&dir).api_key.expose(), "s3cret");
}

#[test]
fn test_set_empty_key_means_public() {
    let dir = TempDir::new().unwrap();
    execute(&args(&dir, SettingsCommands::GenerateKey)).unwrap();

    let output = execute(&args(
        &dir,
        SettingsCommands::SetKey {
            key: "   ".to_string(),
        },
    ))
    .unwrap();

    assert!(stored(&dir).api_key.is_public());
    assert!(output.contains("public"));
}

#[test]
fn test_clear_key() {
    let dir = TempDir::new().unwrap();
    execute(&args(&dir, SettingsCommands::GenerateKey)).unwrap();

    execute(&args(&dir, SettingsCommands::ClearKey)).unwrap();

    assert!(stored(&dir).api_key.is_public());
}

#[test]
fn test_cors_toggle() {
    let dir = TempDir::new().unwrap();

    execute(&args(&dir, SettingsCommands::Cors { state: Toggle::Off })).unwrap();
    assert!(!stored(&dir).cors_enabled);

    execute(&args(&dir, SettingsCommands::Cors { state: Toggle::On })).unwrap();
    assert!(stored(&dir).cors_enabled);
}

#[test]
fn test_origins_are_normalized_before_saving() {
    let dir = TempDir::new().unwrap();

    execute(&args(
        &dir,
        SettingsCommands::Origins {
            value: " https://a.com , *.b.com ,".to_string(),
        },
    ))
    .unwrap();

    assert_eq!(stored(&dir).allowed_origins, "https://a.com,*.b.com");
}

#[test]
fn test_invalid_origins_leave_file_untouched() {
    let dir = TempDir::new().unwrap();
    execute(&args(&dir, SettingsCommands::Enable)).unwrap();

    let result = execute(&args(
        &dir,
        SettingsCommands::Origins {
            value: " , ".to_string(),
        },
    ));

    assert!(matches!(result, Err(Error::InvalidArguments(_))));
    assert_eq!(stored(&dir).allowed_origins, "*");
}

#[test]
fn test_commands_preserve_other_fields() {
    let dir = TempDir::new().unwrap();
    execute(&args(&dir, SettingsCommands::Enable)).unwrap();
    execute(&args(
        &dir,
        SettingsCommands::SetKey {
            key: "k1".to_string(),
        },
    ))
    .unwrap();

    execute(&args(&dir, SettingsCommands::Cors { state: Toggle::Off })).unwrap();

    let settings = stored(&dir);
    assert!(settings.api_enabled);
    assert_eq!(settings.api_key.expose(), "k1");
    assert!(!settings.cors_enabled);
}

// ============================================================================
// Helper Tests
// ============================================================================

#[test]
fn test_mask_key() {
    assert_eq!(mask_key("abcdefgh"), "abcd****");
    assert_eq!(mask_key("abcd"), "****");
    assert_eq!(mask_key("ab"), "**");
}

#[test]
fn test_show_masks_key() {
    let settings = ApiSettings {
        api_key: ApiKey::new("Secret123"),
        ..ApiSettings::default()
    };

    let output = render_settings(&settings);

    assert!(output.contains("api_key: Secr*****"));
    assert!(!output.contains("Secret123"));
}

#[test]
fn test_normalize_origins() {
    assert_eq!(normalize_origins(" * ").unwrap(), "*");
    assert_eq!(
        normalize_origins("https://a.com,https://*.b.com").unwrap(),
        "https://a.com,https://*.b.com"
    );
    assert!(normalize_origins("").is_err());
    assert!(normalize_origins("https://a.com, https://b .com").is_err());
}
