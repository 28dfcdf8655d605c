//! Test fixtures for integration tests.
//!
//! Catalogs are written as JSON text, the way an operator's file would look,
//! so the tests also cover the on-disk format.

use serde_json::json;

/// Two shops with a mixed menu.
///
/// - Shop 1 "Harbour Cafe" (created first): items 5 and 3 tie on page
///   order 2 and were stored in that order; item 4 is page 0, item 6 page 1.
/// - Shop 2 "Deli" (created later): no items.
pub fn two_shop_catalog() -> serde_json::Value {
    json!({
        "shops": [
            {
                "id": 1,
                "name": "Harbour Cafe",
                "description": "Seafood by the pier",
                "created_at": "2025-03-01T09:30:00Z",
                "updated_at": "2025-03-01T09:30:00Z"
            },
            {
                "id": 2,
                "name": "Deli",
                "description": null,
                "created_at": "2025-03-05T09:30:00Z",
                "updated_at": "2025-03-05T09:30:00Z"
            }
        ],
        "items": [
            menu_item(5, 1, 2, "image"),
            menu_item(3, 1, 2, "pdf"),
            menu_item(4, 1, 0, "image"),
            menu_item(6, 1, 1, "image")
        ]
    })
}

/// One menu item record in catalog JSON form.
pub fn menu_item(id: u64, shop_id: u64, page_order: u32, source_type: &str) -> serde_json::Value {
    json!({
        "id": id,
        "shop_id": shop_id,
        "title": format!("Page {id}"),
        "source_type": source_type,
        "source_url": format!("https://cdn.example.com/menus/{id}"),
        "page_order": page_order,
        "created_at": "2025-03-10T12:00:00Z",
        "updated_at": "2025-03-10T12:00:00Z"
    })
}

/// Settings TOML for an enabled API.
pub fn enabled_settings(api_key: &str, allowed_origins: &str) -> String {
    format!(
        "api_enabled = true\napi_key = \"{api_key}\"\ncors_enabled = true\nallowed_origins = \"{allowed_origins}\"\n"
    )
}
