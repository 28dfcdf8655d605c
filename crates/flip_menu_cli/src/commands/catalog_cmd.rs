use clap::{Args, Subcommand};
use flip_menu_core::{
    Catalog, CatalogError, JsonCatalogStore, MenuItemId, MenuItemOrder, MenuItemTitle,
    NewMenuItem, ShopId, ShopOrder, SourceKind,
};
use std::path::PathBuf;
use tracing::{info, instrument};

use super::DEFAULT_CATALOG_FILE;
use crate::errors::Error;

#[cfg(test)]
#[path = "catalog_cmd_tests.rs"]
mod tests;

/// Arguments for the catalog command
#[derive(Args, Debug)]
pub struct CatalogArgs {
    /// Path to the catalog file
    #[arg(long, global = true, env = "FLIP_MENU_CATALOG", default_value = DEFAULT_CATALOG_FILE)]
    pub catalog: PathBuf,

    #[command(subcommand)]
    pub command: CatalogCommands,
}

/// Subcommands for the catalog command
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum CatalogCommands {
    /// List shops by name with their page counts
    Shops,

    /// Register a new shop
    AddShop {
        name: String,

        #[arg(long)]
        description: Option<String>,
    },

    /// Add a menu page to a shop
    AddItem {
        /// Owning shop id
        #[arg(long)]
        shop: u64,

        /// Source kind: image or pdf
        #[arg(long)]
        kind: SourceKind,

        /// Image or PDF location
        #[arg(long)]
        url: String,

        #[arg(long, default_value = "")]
        title: String,

        /// Defaults to one past the shop's last page
        #[arg(long)]
        page_order: Option<u32>,
    },

    /// Change the page order of a menu item
    SetOrder { item: u64, order: u32 },

    /// Delete one menu item
    RemoveItem { item: u64 },

    /// Delete every menu item of a shop
    ClearItems { shop: u64 },

    /// Check the catalog file for consistency
    Check,
}

/// Execute the catalog command and return the text to print
#[instrument(skip(args), fields(path = %args.catalog.display()))]
pub async fn execute(args: &CatalogArgs) -> Result<String, Error> {
    let store = JsonCatalogStore::new(&args.catalog);
    let mut catalog = store.load().await?;

    let message = match &args.command {
        CatalogCommands::Shops => return Ok(render_shops(&catalog)),
        CatalogCommands::Check => {
            return Ok(format!(
                "Catalog is valid: {} shops, {} menu items",
                catalog.shops.len(),
                catalog.items.len()
            ))
        }
        CatalogCommands::AddShop { name, description } => {
            let shop = catalog.create_shop(name, description.as_deref())?;
            format!("Created shop {} ({})", shop.id, shop.name)
        }
        CatalogCommands::AddItem {
            shop,
            kind,
            url,
            title,
            page_order,
        } => {
            let item = catalog.add_menu_item(NewMenuItem {
                shop_id: ShopId::new(*shop),
                title: MenuItemTitle::new(title.as_str()).map_err(CatalogError::from)?,
                source_type: *kind,
                source_url: url.clone(),
                page_order: *page_order,
            })?;
            format!(
                "Added menu item {} to shop {} at page order {}",
                item.id, item.shop_id, item.page_order
            )
        }
        CatalogCommands::SetOrder { item, order } => {
            let item = catalog.update_page_order(MenuItemId::new(*item), *order)?;
            format!("Menu item {} now has page order {}", item.id, item.page_order)
        }
        CatalogCommands::RemoveItem { item } => {
            let item = catalog.delete_menu_item(MenuItemId::new(*item))?;
            format!("Removed menu item {} from shop {}", item.id, item.shop_id)
        }
        CatalogCommands::ClearItems { shop } => {
            let shop_id = ShopId::new(*shop);
            if catalog.shop(shop_id).is_none() {
                return Err(CatalogError::ShopNotFound { id: shop_id }.into());
            }
            let removed = catalog.delete_all_menu_items(shop_id);
            format!("Removed {removed} menu items from shop {shop_id}")
        }
    };

    store.save(&catalog).await?;
    info!(command = ?args.command, "Catalog updated");
    Ok(message)
}

/// One line per shop, sorted by name: id, name and page count.
pub fn render_shops(catalog: &Catalog) -> String {
    let shops = catalog.shops(ShopOrder::NameAscending);
    if shops.is_empty() {
        return "No shops found".to_string();
    }

    shops
        .iter()
        .map(|shop| {
            let pages = catalog
                .menu_items(shop.id, MenuItemOrder::PageOrderAscending)
                .len();
            format!("{}\t{}\t{} pages", shop.id, shop.name, pages)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
