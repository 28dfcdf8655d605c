//! Data store seam
//!
//! [`ShopStore`] is the read interface the resolver depends on. Two
//! implementations ship with the crate:
//! - [`InMemoryShopStore`]: a catalog held in memory
//! - [`JsonCatalogStore`]: a JSON catalog file re-read on every query

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::sync::RwLock;
use tracing::{debug, error};

use crate::errors::{StoreError, StoreResult};
use crate::{Catalog, MenuItem, Shop, ShopId};

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;

/// Ordering for shop listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShopOrder {
    /// Most recently created first; ties by descending id.
    NewestFirst,

    /// Alphabetical by name; ties by ascending id.
    NameAscending,
}

/// Ordering for a shop's menu items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItemOrder {
    /// Ascending page order, stable with respect to insertion order.
    PageOrderAscending,

    /// Insertion order.
    Insertion,
}

/// Read access to shops and their menu items.
///
/// Implementations must be safe to call concurrently; the API serves every
/// request independently and never writes through this trait.
#[async_trait]
pub trait ShopStore: Send + Sync {
    /// All shops in the given order.
    async fn find_shops(&self, order: ShopOrder) -> StoreResult<Vec<Shop>>;

    /// One shop by identifier, `None` when absent.
    async fn find_shop_by_id(&self, id: ShopId) -> StoreResult<Option<Shop>>;

    /// Menu items of a shop in the given order. An unknown shop yields an
    /// empty list.
    async fn find_menu_items(
        &self,
        shop_id: ShopId,
        order: MenuItemOrder,
    ) -> StoreResult<Vec<MenuItem>>;
}

/// Store backed by an in-memory catalog.
#[derive(Debug, Default)]
pub struct InMemoryShopStore {
    catalog: RwLock<Catalog>,
}

impl InMemoryShopStore {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: RwLock::new(catalog),
        }
    }

    /// Copy of the current catalog.
    pub async fn snapshot(&self) -> Catalog {
        self.catalog.read().await.clone()
    }

    /// Apply an edit to the catalog under the write lock.
    pub async fn edit<T>(&self, change: impl FnOnce(&mut Catalog) -> T) -> T {
        let mut catalog = self.catalog.write().await;
        change(&mut catalog)
    }
}

#[async_trait]
impl ShopStore for InMemoryShopStore {
    async fn find_shops(&self, order: ShopOrder) -> StoreResult<Vec<Shop>> {
        Ok(self.catalog.read().await.shops(order))
    }

    async fn find_shop_by_id(&self, id: ShopId) -> StoreResult<Option<Shop>> {
        Ok(self.catalog.read().await.shop(id).cloned())
    }

    async fn find_menu_items(
        &self,
        shop_id: ShopId,
        order: MenuItemOrder,
    ) -> StoreResult<Vec<MenuItem>> {
        Ok(self.catalog.read().await.menu_items(shop_id, order))
    }
}

/// Store backed by a JSON catalog file.
///
/// The file is read on every query so edits made by the operator tooling
/// are visible to the next request. A missing file is an empty catalog.
#[derive(Debug, Clone)]
pub struct JsonCatalogStore {
    path: PathBuf,
}

impl JsonCatalogStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and validate the catalog file.
    ///
    /// # Errors
    /// - `StoreError::FileAccess` if the file exists but cannot be read
    /// - `StoreError::Parse` if the JSON is malformed
    /// - `StoreError::InvalidCatalog` if the records are inconsistent
    pub async fn load(&self) -> StoreResult<Catalog> {
        let display_path = self.path.display().to_string();

        let contents = match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %display_path, "Catalog file not found, using empty catalog");
                return Ok(Catalog::default());
            }
            Err(e) => {
                error!(path = %display_path, error = %e, "Failed to read catalog file");
                return Err(StoreError::FileAccess {
                    path: display_path,
                    reason: e.to_string(),
                });
            }
        };

        let catalog: Catalog =
            serde_json::from_str(&contents).map_err(|e| StoreError::Parse {
                path: display_path.clone(),
                reason: e.to_string(),
            })?;

        catalog
            .validate()
            .map_err(|source| StoreError::InvalidCatalog {
                path: display_path,
                source,
            })?;

        Ok(catalog)
    }

    /// Validate and write the catalog file, replacing any previous content.
    ///
    /// # Errors
    /// - `StoreError::InvalidCatalog` if the records are inconsistent
    /// - `StoreError::Serialize` / `StoreError::FileAccess` on write failure
    pub async fn save(&self, catalog: &Catalog) -> StoreResult<()> {
        let display_path = self.path.display().to_string();

        catalog
            .validate()
            .map_err(|source| StoreError::InvalidCatalog {
                path: display_path.clone(),
                source,
            })?;

        let contents = serde_json::to_string_pretty(catalog).map_err(|e| {
            StoreError::Serialize {
                reason: e.to_string(),
            }
        })?;

        tokio::fs::write(&self.path, contents)
            .await
            .map_err(|e| StoreError::FileAccess {
                path: display_path.clone(),
                reason: e.to_string(),
            })?;

        debug!(
            path = %display_path,
            shops = catalog.shops.len(),
            items = catalog.items.len(),
            "Catalog saved"
        );
        Ok(())
    }
}

#[async_trait]
impl ShopStore for JsonCatalogStore {
    async fn find_shops(&self, order: ShopOrder) -> StoreResult<Vec<Shop>> {
        Ok(self.load().await?.shops(order))
    }

    async fn find_shop_by_id(&self, id: ShopId) -> StoreResult<Option<Shop>> {
        Ok(self.load().await?.shop(id).cloned())
    }

    async fn find_menu_items(
        &self,
        shop_id: ShopId,
        order: MenuItemOrder,
    ) -> StoreResult<Vec<MenuItem>> {
        Ok(self.load().await?.menu_items(shop_id, order))
    }
}
