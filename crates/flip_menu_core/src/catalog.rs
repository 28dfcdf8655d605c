//! Catalog snapshot: every shop and menu item known to a data source.
//!
//! The catalog is the unit a store loads and persists. `items` are kept in
//! insertion order, which is the tie-breaker when two pages share the same
//! page order.
//!
//! The editing operations here belong to the operator surface (the CLI).
//! The public API never mutates a catalog.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

use crate::errors::{CatalogError, ValidationError};
use crate::store::{MenuItemOrder, ShopOrder};
use crate::{MenuItem, MenuItemId, MenuItemTitle, Shop, ShopId, ShopName, SourceKind};

#[cfg(test)]
#[path = "catalog_tests.rs"]
mod tests;

/// Input for [`Catalog::add_menu_item`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMenuItem {
    pub shop_id: ShopId,
    pub title: MenuItemTitle,
    pub source_type: SourceKind,
    pub source_url: String,

    /// Explicit page order; `None` appends after the shop's last page.
    pub page_order: Option<u32>,
}

/// All shops and menu items of one data source.
///
/// # JSON Format
///
/// ```json
/// {
///   "shops": [
///     { "id": 1, "name": "Harbour Cafe", "description": null,
///       "created_at": "2025-03-01T09:30:00Z", "updated_at": "2025-03-01T09:30:00Z" }
///   ],
///   "items": [
///     { "id": 1, "shop_id": 1, "title": "", "source_type": "image",
///       "source_url": "https://cdn.example.com/p1.jpg", "page_order": 0,
///       "created_at": "2025-03-01T09:31:00Z", "updated_at": "2025-03-01T09:31:00Z" }
///   ]
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub shops: Vec<Shop>,

    #[serde(default)]
    pub items: Vec<MenuItem>,
}

impl Catalog {
    pub fn new(shops: Vec<Shop>, items: Vec<MenuItem>) -> Self {
        Self { shops, items }
    }

    /// Check referential consistency.
    ///
    /// # Errors
    /// - `DuplicateShopId` / `DuplicateMenuItemId` when an id repeats
    /// - `OrphanedMenuItem` when an item references a missing shop
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut shop_ids = HashSet::new();
        for shop in &self.shops {
            if !shop_ids.insert(shop.id) {
                return Err(CatalogError::DuplicateShopId { id: shop.id });
            }
        }

        let mut item_ids = HashSet::new();
        for item in &self.items {
            if !item_ids.insert(item.id) {
                return Err(CatalogError::DuplicateMenuItemId { id: item.id });
            }
            if !shop_ids.contains(&item.shop_id) {
                return Err(CatalogError::OrphanedMenuItem {
                    item: item.id,
                    shop: item.shop_id,
                });
            }
        }

        Ok(())
    }

    /// All shops in the requested order.
    pub fn shops(&self, order: ShopOrder) -> Vec<Shop> {
        let mut shops = self.shops.clone();
        match order {
            ShopOrder::NewestFirst => shops.sort_by(|a, b| {
                b.created_at
                    .cmp(&a.created_at)
                    .then_with(|| b.id.cmp(&a.id))
            }),
            ShopOrder::NameAscending => shops.sort_by(|a, b| {
                a.name
                    .as_str()
                    .cmp(b.name.as_str())
                    .then_with(|| a.id.cmp(&b.id))
            }),
        }
        shops
    }

    pub fn shop(&self, id: ShopId) -> Option<&Shop> {
        self.shops.iter().find(|shop| shop.id == id)
    }

    /// Menu items of one shop in the requested order.
    ///
    /// Sorting by page order is stable, so equal page orders keep their
    /// insertion order.
    pub fn menu_items(&self, shop_id: ShopId, order: MenuItemOrder) -> Vec<MenuItem> {
        let mut items: Vec<MenuItem> = self
            .items
            .iter()
            .filter(|item| item.shop_id == shop_id)
            .cloned()
            .collect();

        if order == MenuItemOrder::PageOrderAscending {
            items.sort_by_key(|item| item.page_order);
        }

        items
    }

    /// Page order that places a new item after every existing page of the shop.
    pub fn next_page_order(&self, shop_id: ShopId) -> u32 {
        self.items
            .iter()
            .filter(|item| item.shop_id == shop_id)
            .map(|item| item.page_order.saturating_add(1))
            .max()
            .unwrap_or(0)
    }

    /// Register a new shop. Blank descriptions are stored as `None`.
    ///
    /// # Errors
    /// Returns `CatalogError::Validation` if the name is invalid
    pub fn create_shop(
        &mut self,
        name: &str,
        description: Option<&str>,
    ) -> Result<Shop, CatalogError> {
        let name = ShopName::new(name)?;
        let description = description
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .map(str::to_string);

        let id = next_id("shop", self.shops.iter().map(|s| s.id.value()))?;

        let now = Utc::now();
        let shop = Shop {
            id: ShopId::from(id),
            name,
            description,
            created_at: now,
            updated_at: now,
        };

        debug!(shop_id = %shop.id, name = %shop.name, "Shop created");
        self.shops.push(shop.clone());
        Ok(shop)
    }

    /// Append a menu page to an existing shop.
    ///
    /// # Errors
    /// - `ShopNotFound` if the shop does not exist
    /// - `Validation` if the source URL is blank
    pub fn add_menu_item(&mut self, new_item: NewMenuItem) -> Result<MenuItem, CatalogError> {
        if self.shop(new_item.shop_id).is_none() {
            return Err(CatalogError::ShopNotFound {
                id: new_item.shop_id,
            });
        }

        let source_url = new_item.source_url.trim();
        if source_url.is_empty() {
            return Err(ValidationError::empty_field("source_url").into());
        }

        let page_order = new_item
            .page_order
            .unwrap_or_else(|| self.next_page_order(new_item.shop_id));

        let id = next_id("menu item", self.items.iter().map(|i| i.id.value()))?;

        let now = Utc::now();
        let item = MenuItem {
            id: MenuItemId::from(id),
            shop_id: new_item.shop_id,
            title: new_item.title,
            source_type: new_item.source_type,
            source_url: source_url.to_string(),
            page_order,
            created_at: now,
            updated_at: now,
        };

        debug!(
            item_id = %item.id,
            shop_id = %item.shop_id,
            page_order = item.page_order,
            "Menu item added"
        );
        self.items.push(item.clone());
        Ok(item)
    }

    /// Change the page order of one item.
    ///
    /// # Errors
    /// Returns `MenuItemNotFound` if no item has the given id
    pub fn update_page_order(
        &mut self,
        item_id: MenuItemId,
        page_order: u32,
    ) -> Result<MenuItem, CatalogError> {
        let item = self
            .items
            .iter_mut()
            .find(|item| item.id == item_id)
            .ok_or(CatalogError::MenuItemNotFound { id: item_id })?;

        item.page_order = page_order;
        item.updated_at = Utc::now();

        Ok(item.clone())
    }

    /// Remove one item.
    ///
    /// # Errors
    /// Returns `MenuItemNotFound` if no item has the given id
    pub fn delete_menu_item(&mut self, item_id: MenuItemId) -> Result<MenuItem, CatalogError> {
        let position = self
            .items
            .iter()
            .position(|item| item.id == item_id)
            .ok_or(CatalogError::MenuItemNotFound { id: item_id })?;

        Ok(self.items.remove(position))
    }

    /// Remove every item of a shop and return how many were removed.
    ///
    /// A shop without items (or an unknown shop) removes nothing.
    pub fn delete_all_menu_items(&mut self, shop_id: ShopId) -> usize {
        let before = self.items.len();
        self.items.retain(|item| item.shop_id != shop_id);
        before - self.items.len()
    }
}

/// One past the highest id in use, or 1 for an empty collection.
fn next_id(kind: &'static str, ids: impl Iterator<Item = u64>) -> Result<u64, CatalogError> {
    match ids.max() {
        None => Ok(1),
        Some(max) => max
            .checked_add(1)
            .ok_or(CatalogError::IdsExhausted { kind, max }),
    }
}
