//! File-backed API test environment.

use axum::{
    body::Body,
    http::{HeaderMap, Request, StatusCode},
    Router,
};
use flip_menu_api::{ApiConfig, ApiServer};
use std::path::PathBuf;
use tempfile::TempDir;
use tower::ServiceExt;

/// A temporary settings file and catalog file plus the API over them.
pub struct TestEnvironment {
    dir: TempDir,
}

/// Status, headers and JSON body of one response.
#[derive(Debug)]
pub struct Reply {
    pub status: StatusCode,
    pub headers: HeaderMap,

    /// `Null` when the body is empty
    pub body: serde_json::Value,
}

impl TestEnvironment {
    /// Create an environment with neither file present.
    pub fn new() -> anyhow::Result<Self> {
        Ok(Self {
            dir: TempDir::new()?,
        })
    }

    pub fn settings_path(&self) -> PathBuf {
        self.dir.path().join("flip-menu.toml")
    }

    pub fn catalog_path(&self) -> PathBuf {
        self.dir.path().join("flip-menu-catalog.json")
    }

    /// Server configuration pointing at this environment's files.
    pub fn config(&self) -> ApiConfig {
        ApiConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            settings_path: self.settings_path(),
            catalog_path: self.catalog_path(),
        }
    }

    pub fn write_settings(&self, toml: &str) -> anyhow::Result<()> {
        std::fs::write(self.settings_path(), toml)?;
        Ok(())
    }

    pub fn write_catalog(&self, catalog: &serde_json::Value) -> anyhow::Result<()> {
        std::fs::write(self.catalog_path(), serde_json::to_string_pretty(catalog)?)?;
        Ok(())
    }

    /// The router the server binary would build for this environment.
    pub fn router(&self) -> anyhow::Result<Router> {
        Ok(ApiServer::from_config(self.config())?.router())
    }

    /// Send a request through a freshly built router.
    pub async fn send(&self, request: Request<Body>) -> anyhow::Result<Reply> {
        let response = self.router()?.oneshot(request).await?;
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;

        let body = if bytes.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_slice(&bytes)?
        };

        Ok(Reply {
            status,
            headers,
            body,
        })
    }

    /// Plain GET.
    pub async fn get(&self, uri: &str) -> anyhow::Result<Reply> {
        self.send(Request::builder().uri(uri).body(Body::empty())?)
            .await
    }

    /// GET with an `X-API-Key` header.
    pub async fn get_with_key(&self, uri: &str, key: &str) -> anyhow::Result<Reply> {
        self.send(
            Request::builder()
                .uri(uri)
                .header("X-API-Key", key)
                .body(Body::empty())?,
        )
        .await
    }
}
