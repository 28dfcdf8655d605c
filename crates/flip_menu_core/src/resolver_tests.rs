//! Tests for ShopResolver

use super::*;
use crate::{
    Catalog, InMemoryShopStore, MenuItemTitle, NewMenuItem, SourceKind, StoreError, StoreResult,
};
use async_trait::async_trait;

fn resolver_with(catalog: Catalog) -> ShopResolver {
    ShopResolver::new(Arc::new(InMemoryShopStore::new(catalog)))
}

fn page(shop_id: ShopId, order: u32, url: &str) -> NewMenuItem {
    NewMenuItem {
        shop_id,
        title: MenuItemTitle::default(),
        source_type: SourceKind::Image,
        source_url: url.to_string(),
        page_order: Some(order),
    }
}

/// Store that fails every query, for error propagation tests.
struct FailingStore;

#[async_trait]
impl ShopStore for FailingStore {
    async fn find_shops(&self, _order: ShopOrder) -> StoreResult<Vec<Shop>> {
        Err(StoreError::FileAccess {
            path: "catalog.json".to_string(),
            reason: "permission denied".to_string(),
        })
    }

    async fn find_shop_by_id(&self, _id: ShopId) -> StoreResult<Option<Shop>> {
        self.find_shops(ShopOrder::NewestFirst).await.map(|_| None)
    }

    async fn find_menu_items(
        &self,
        _shop_id: ShopId,
        _order: MenuItemOrder,
    ) -> StoreResult<Vec<MenuItem>> {
        self.find_shops(ShopOrder::NewestFirst).await.map(|_| vec![])
    }
}

#[tokio::test]
async fn test_list_shops_empty_store() {
    let resolver = resolver_with(Catalog::default());

    assert!(resolver.list_shops().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_get_shop_not_found() {
    let resolver = resolver_with(Catalog::default());

    assert_eq!(
        resolver.get_shop(ShopId::from(999)).await,
        Err(ResolveError::ShopNotFound(ShopId::from(999)))
    );
}

#[tokio::test]
async fn test_get_shop_found() {
    let mut catalog = Catalog::default();
    let shop = catalog.create_shop("Deli", None).unwrap();
    let resolver = resolver_with(catalog);

    assert_eq!(resolver.get_shop(shop.id).await.unwrap(), shop);
}

#[tokio::test]
async fn test_get_shop_is_idempotent() {
    let mut catalog = Catalog::default();
    let shop = catalog.create_shop("Deli", Some("Sandwiches")).unwrap();
    let resolver = resolver_with(catalog);

    let first = serde_json::to_vec(&resolver.get_shop(shop.id).await.unwrap()).unwrap();
    let second = serde_json::to_vec(&resolver.get_shop(shop.id).await.unwrap()).unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_get_shop_menu_for_unknown_shop_is_empty() {
    let resolver = resolver_with(Catalog::default());

    assert!(resolver
        .get_shop_menu(ShopId::from(999))
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn test_get_shop_menu_orders_pages() {
    let mut catalog = Catalog::default();
    let shop = catalog.create_shop("Deli", None).unwrap();
    catalog.add_menu_item(page(shop.id, 1, "/b.jpg")).unwrap();
    catalog.add_menu_item(page(shop.id, 0, "/a.jpg")).unwrap();
    let resolver = resolver_with(catalog);

    let items = resolver.get_shop_menu(shop.id).await.unwrap();
    let urls: Vec<&str> = items.iter().map(|i| i.source_url.as_str()).collect();

    assert_eq!(urls, vec!["/a.jpg", "/b.jpg"]);
}

#[tokio::test]
async fn test_get_shop_complete_without_items() {
    let mut catalog = Catalog::default();
    let shop = catalog.create_shop("Deli", None).unwrap();
    let resolver = resolver_with(catalog);

    let complete = resolver.get_shop_complete(shop.id).await.unwrap();

    assert_eq!(complete.shop, shop);
    assert!(complete.items.is_empty());
    assert_eq!(complete.count, 0);
}

#[tokio::test]
async fn test_get_shop_complete_counts_items() {
    let mut catalog = Catalog::default();
    let shop = catalog.create_shop("Deli", None).unwrap();
    catalog.add_menu_item(page(shop.id, 0, "/a.jpg")).unwrap();
    catalog.add_menu_item(page(shop.id, 1, "/b.jpg")).unwrap();
    let resolver = resolver_with(catalog);

    let complete = resolver.get_shop_complete(shop.id).await.unwrap();

    assert_eq!(complete.count, 2);
    assert_eq!(complete.items.len(), 2);
}

#[tokio::test]
async fn test_get_shop_complete_not_found() {
    let resolver = resolver_with(Catalog::default());

    assert_eq!(
        resolver.get_shop_complete(ShopId::from(4)).await,
        Err(ResolveError::ShopNotFound(ShopId::from(4)))
    );
}

#[tokio::test]
async fn test_store_failures_propagate() {
    let resolver = ShopResolver::new(Arc::new(FailingStore));

    assert!(matches!(
        resolver.list_shops().await,
        Err(ResolveError::Store(StoreError::FileAccess { .. }))
    ));
    assert!(matches!(
        resolver.get_shop_menu(ShopId::from(1)).await,
        Err(ResolveError::Store(_))
    ));
}
