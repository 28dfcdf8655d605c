//! # Flip Menu Core
//!
//! Domain model and read path for the flip menu service.
//!
//! ## Overview
//!
//! A *shop* owns an ordered sequence of *menu items* (image or PDF pages).
//! This crate provides:
//! - The domain types ([`Shop`], [`MenuItem`], their identifiers and
//!   validated fields)
//! - The [`ShopStore`] seam that every data source implements, with an
//!   in-memory store and a JSON catalog file store
//! - The [`Catalog`] snapshot format, including the administrative edits
//!   (create shop, add page, reorder, delete) used by the operator tooling
//! - The [`ShopResolver`], which answers the four read queries exposed by
//!   the public API
//!
//! The HTTP layer lives in `flip_menu_api` and depends on this crate, never
//! the reverse.
//!
//! ## Examples
//!
//! ```no_run
//! use std::sync::Arc;
//! use flip_menu_core::{Catalog, InMemoryShopStore, ShopId, ShopResolver};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut catalog = Catalog::default();
//! let shop = catalog.create_shop("Harbour Cafe", None)?;
//!
//! let resolver = ShopResolver::new(Arc::new(InMemoryShopStore::new(catalog)));
//! let complete = resolver.get_shop_complete(shop.id).await?;
//! assert_eq!(complete.count, 0);
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod errors;
pub mod menu_item;
pub mod resolver;
pub mod shop;
pub mod store;

pub use catalog::{Catalog, NewMenuItem};
pub use errors::{
    CatalogError, ResolveError, ResolveResult, StoreError, StoreResult, ValidationError,
};
pub use menu_item::{MenuItem, MenuItemId, MenuItemTitle, SourceKind};
pub use resolver::{ShopComplete, ShopResolver};
pub use shop::{Shop, ShopId, ShopName};
pub use store::{InMemoryShopStore, JsonCatalogStore, MenuItemOrder, ShopOrder, ShopStore};
