//! Fixtures shared by the unit tests of this crate

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{HeaderMap, Request, StatusCode},
    Router,
};
use chrono::{TimeZone, Utc};
use flip_menu_core::{
    Catalog, InMemoryShopStore, MenuItem, MenuItemId, MenuItemTitle, Shop, ShopId, ShopName,
    SourceKind,
};
use serde_json::Value;
use settings_manager::{
    ApiKey, ApiSettings, SettingsError, SettingsProvider, SettingsResult, StaticSettingsProvider,
};
use std::sync::Arc;
use tower::ServiceExt;

use crate::AppState;

/// Enabled, public, CORS open to every origin
pub(crate) fn open_settings() -> ApiSettings {
    ApiSettings {
        api_enabled: true,
        ..ApiSettings::default()
    }
}

/// Enabled and protected by `key`
pub(crate) fn keyed_settings(key: &str) -> ApiSettings {
    ApiSettings {
        api_enabled: true,
        api_key: ApiKey::new(key),
        ..ApiSettings::default()
    }
}

pub(crate) fn app_state(settings: ApiSettings, catalog: Catalog) -> AppState {
    AppState::new(
        Arc::new(StaticSettingsProvider::new(settings)),
        Arc::new(InMemoryShopStore::new(catalog)),
    )
}

/// Settings provider whose file cannot be read
pub(crate) struct BrokenSettings;

#[async_trait]
impl SettingsProvider for BrokenSettings {
    async fn api_settings(&self) -> SettingsResult<ApiSettings> {
        Err(SettingsError::FileAccess {
            path: "/etc/flip-menu.toml".to_string(),
            reason: "permission denied".to_string(),
        })
    }
}

/// State whose settings always fail to load, over an empty catalog
pub(crate) fn broken_state() -> AppState {
    AppState::new(
        Arc::new(BrokenSettings),
        Arc::new(InMemoryShopStore::new(Catalog::default())),
    )
}

fn shop(id: u64, name: &str, day: u32) -> Shop {
    let at = Utc.with_ymd_and_hms(2025, 3, day, 9, 30, 0).unwrap();
    Shop {
        id: ShopId::new(id),
        name: ShopName::new(name).unwrap(),
        description: None,
        created_at: at,
        updated_at: at,
    }
}

fn item(id: u64, shop_id: u64, page_order: u32, source_type: SourceKind) -> MenuItem {
    let at = Utc.with_ymd_and_hms(2025, 3, 10, 12, 0, 0).unwrap();
    MenuItem {
        id: MenuItemId::new(id),
        shop_id: ShopId::new(shop_id),
        title: MenuItemTitle::new(format!("Page {id}")).unwrap(),
        source_type,
        source_url: format!("https://cdn.example.com/menus/{id}"),
        page_order,
        created_at: at,
        updated_at: at,
    }
}

/// Two shops. "Harbour Cafe" (id 1, older) has four pages stored out of
/// order, including a page-order tie between items 5 and 3 in that
/// insertion order; "Deli" (id 2, newer) has none.
pub(crate) fn sample_catalog() -> Catalog {
    Catalog::new(
        vec![shop(1, "Harbour Cafe", 1), shop(2, "Deli", 5)],
        vec![
            item(5, 1, 2, SourceKind::Image),
            item(3, 1, 2, SourceKind::Pdf),
            item(4, 1, 0, SourceKind::Image),
            item(6, 1, 1, SourceKind::Image),
        ],
    )
}

pub(crate) fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

/// Send a request and return the status, headers and JSON body
/// (`Value::Null` for an empty body, a JSON string for a non-JSON body).
pub(crate) async fn send(router: Router, request: Request<Body>) -> (StatusCode, HeaderMap, Value) {
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };

    (status, headers, body)
}
