//! Tests for the embed-code command.

use super::*;
use flip_menu_core::Catalog;
use tempfile::TempDir;

fn snippet(api_key: &str, width: u32, height: u32) -> EmbedSnippet {
    EmbedSnippet::new(
        ShopId::new(3),
        "https://example.com/flip-menu/v1",
        ApiKey::new(api_key),
        "https://example.com/flip-menu-widget.js",
        width,
        height,
    )
}

// ============================================================================
// Rendering
// ============================================================================

#[test]
fn test_render_with_key() {
    let html = snippet("k1", DEFAULT_WIDTH, DEFAULT_HEIGHT).render();

    assert_eq!(
        html,
        "<!-- Flip Menu Widget -->\n\
         <div data-flip-menu-widget\n     \
         data-shop-id=\"3\"\n     \
         data-api-url=\"https://example.com/flip-menu/v1\"\n     \
         data-api-key=\"k1\"\n     \
         data-width=\"800\"\n     \
         data-height=\"600\">\n\
         </div>\n\
         <script src=\"https://example.com/flip-menu-widget.js\"></script>"
    );
}

#[test]
fn test_render_without_key_omits_attribute() {
    let html = snippet("", DEFAULT_WIDTH, DEFAULT_HEIGHT).render();

    assert!(!html.contains("data-api-key"));
    assert!(html.contains("data-shop-id=\"3\""));
}

#[test]
fn test_size_is_clamped() {
    let small = snippet("", 10, 10);
    assert_eq!((small.width, small.height), (400, 300));

    let large = snippet("", 5000, 5000);
    assert_eq!((large.width, large.height), (1600, 1200));

    let in_range = snippet("", 1024, 768);
    assert_eq!((in_range.width, in_range.height), (1024, 768));
}

#[test]
fn test_attribute_values_are_escaped() {
    let snippet = EmbedSnippet::new(
        ShopId::new(1),
        "https://example.com/?a=1&b=\"2\"",
        ApiKey::default(),
        "https://example.com/w.js",
        800,
        600,
    );

    let html = snippet.render();

    assert!(html.contains("data-api-url=\"https://example.com/?a=1&amp;b=&quot;2&quot;\""));
}

// ============================================================================
// Command Execution Tests
// ============================================================================

fn embed_args(dir: &TempDir, shop: u64) -> EmbedArgs {
    EmbedArgs {
        shop,
        api_url: "https://example.com/flip-menu/v1".to_string(),
        widget_url: "https://example.com/flip-menu-widget.js".to_string(),
        width: DEFAULT_WIDTH,
        height: DEFAULT_HEIGHT,
        settings: dir.path().join("flip-menu.toml"),
        catalog: dir.path().join("catalog.json"),
    }
}

async fn write_catalog_with_one_shop(dir: &TempDir) {
    let mut catalog = Catalog::default();
    catalog.create_shop("Harbour Cafe", None).unwrap();
    JsonCatalogStore::new(dir.path().join("catalog.json"))
        .save(&catalog)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_execute_uses_stored_key() {
    let dir = TempDir::new().unwrap();
    write_catalog_with_one_shop(&dir).await;
    SettingsDocument {
        api_enabled: true,
        api_key: "stored-key".to_string(),
        ..SettingsDocument::default()
    }
    .save(&dir.path().join("flip-menu.toml"))
    .unwrap();

    let html = execute(&embed_args(&dir, 1)).await.unwrap();

    assert!(html.contains("data-api-key=\"stored-key\""));
}

#[tokio::test]
async fn test_execute_without_settings_file_is_public() {
    let dir = TempDir::new().unwrap();
    write_catalog_with_one_shop(&dir).await;

    let html = execute(&embed_args(&dir, 1)).await.unwrap();

    assert!(!html.contains("data-api-key"));
}

#[tokio::test]
async fn test_execute_rejects_unknown_shop() {
    let dir = TempDir::new().unwrap();
    write_catalog_with_one_shop(&dir).await;

    let result = execute(&embed_args(&dir, 42)).await;

    assert!(matches!(
        result,
        Err(Error::Catalog(CatalogError::ShopNotFound { .. }))
    ));
}
