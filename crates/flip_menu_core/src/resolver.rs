//! Resource resolver
//!
//! Answers the read queries of the public API against a [`ShopStore`].
//! The resolver knows nothing about HTTP; the API layer shapes its results
//! into response envelopes.

use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, instrument};

use crate::errors::{ResolveError, ResolveResult};
use crate::store::{MenuItemOrder, ShopOrder, ShopStore};
use crate::{MenuItem, Shop, ShopId};

#[cfg(test)]
#[path = "resolver_tests.rs"]
mod tests;

/// A shop together with its ordered menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShopComplete {
    pub shop: Shop,
    pub items: Vec<MenuItem>,
    pub count: usize,
}

/// Read-only query service over a shop store.
#[derive(Clone)]
pub struct ShopResolver {
    store: Arc<dyn ShopStore>,
}

impl ShopResolver {
    pub fn new(store: Arc<dyn ShopStore>) -> Self {
        Self { store }
    }

    /// All shops, newest first.
    #[instrument(skip(self))]
    pub async fn list_shops(&self) -> ResolveResult<Vec<Shop>> {
        let shops = self.store.find_shops(ShopOrder::NewestFirst).await?;
        debug!(count = shops.len(), "Shops listed");
        Ok(shops)
    }

    /// One shop by identifier.
    ///
    /// # Errors
    /// Returns `ResolveError::ShopNotFound` when no shop has the identifier
    #[instrument(skip(self), fields(shop_id = %id))]
    pub async fn get_shop(&self, id: ShopId) -> ResolveResult<Shop> {
        self.store
            .find_shop_by_id(id)
            .await?
            .ok_or(ResolveError::ShopNotFound(id))
    }

    /// Menu items of a shop by ascending page order.
    ///
    /// The shop itself is not looked up: an unknown shop and a shop without
    /// pages both yield an empty list.
    #[instrument(skip(self), fields(shop_id = %id))]
    pub async fn get_shop_menu(&self, id: ShopId) -> ResolveResult<Vec<MenuItem>> {
        let items = self
            .store
            .find_menu_items(id, MenuItemOrder::PageOrderAscending)
            .await?;
        debug!(count = items.len(), "Menu items resolved");
        Ok(items)
    }

    /// A shop and its menu in one result.
    ///
    /// # Errors
    /// Returns `ResolveError::ShopNotFound` when no shop has the identifier
    #[instrument(skip(self), fields(shop_id = %id))]
    pub async fn get_shop_complete(&self, id: ShopId) -> ResolveResult<ShopComplete> {
        let shop = self.get_shop(id).await?;
        let items = self
            .store
            .find_menu_items(id, MenuItemOrder::PageOrderAscending)
            .await?;

        Ok(ShopComplete {
            shop,
            count: items.len(),
            items,
        })
    }
}

impl std::fmt::Debug for ShopResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShopResolver").finish_non_exhaustive()
    }
}
