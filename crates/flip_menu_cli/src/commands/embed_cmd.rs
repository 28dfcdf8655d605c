//! Widget embed snippet
//!
//! Produces the HTML a site owner pastes into a third-party page to show a
//! shop's menu through the widget:
//!
//! ```html
//! <!-- Flip Menu Widget -->
//! <div data-flip-menu-widget
//!      data-shop-id="1"
//!      data-api-url="https://example.com/flip-menu/v1"
//!      data-api-key="..."
//!      data-width="800"
//!      data-height="600">
//! </div>
//! <script src="https://example.com/flip-menu-widget.js"></script>
//! ```
//!
//! `data-api-key` is only present when a key is configured.

use clap::Args;
use flip_menu_core::{CatalogError, JsonCatalogStore, ShopId};
use settings_manager::{ApiKey, ApiSettings, SettingsDocument};
use std::ops::RangeInclusive;
use std::path::PathBuf;
use tracing::{instrument, warn};

use super::{DEFAULT_CATALOG_FILE, DEFAULT_SETTINGS_FILE};
use crate::errors::Error;

#[cfg(test)]
#[path = "embed_cmd_tests.rs"]
mod tests;

pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_HEIGHT: u32 = 600;
pub const WIDTH_RANGE: RangeInclusive<u32> = 400..=1600;
pub const HEIGHT_RANGE: RangeInclusive<u32> = 300..=1200;

/// Arguments for the embed-code command
#[derive(Args, Debug, Clone)]
pub struct EmbedArgs {
    /// Shop whose menu the widget shows
    #[arg(long)]
    pub shop: u64,

    /// Base URL of the public API
    #[arg(long)]
    pub api_url: String,

    /// URL of the widget script
    #[arg(long)]
    pub widget_url: String,

    /// Widget width in pixels (400 to 1600)
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    pub width: u32,

    /// Widget height in pixels (300 to 1200)
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    pub height: u32,

    /// Path to the settings file, for the API key
    #[arg(long, env = "FLIP_MENU_SETTINGS", default_value = DEFAULT_SETTINGS_FILE)]
    pub settings: PathBuf,

    /// Path to the catalog file, to check the shop exists
    #[arg(long, env = "FLIP_MENU_CATALOG", default_value = DEFAULT_CATALOG_FILE)]
    pub catalog: PathBuf,
}

/// Everything that goes into one snippet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedSnippet {
    pub shop_id: ShopId,
    pub api_url: String,
    pub api_key: ApiKey,
    pub widget_url: String,
    pub width: u32,
    pub height: u32,
}

impl EmbedSnippet {
    /// Build a snippet, clamping the size into the supported range.
    pub fn new(
        shop_id: ShopId,
        api_url: impl Into<String>,
        api_key: ApiKey,
        widget_url: impl Into<String>,
        width: u32,
        height: u32,
    ) -> Self {
        Self {
            shop_id,
            api_url: api_url.into(),
            api_key,
            widget_url: widget_url.into(),
            width: width.clamp(*WIDTH_RANGE.start(), *WIDTH_RANGE.end()),
            height: height.clamp(*HEIGHT_RANGE.start(), *HEIGHT_RANGE.end()),
        }
    }

    pub fn render(&self) -> String {
        let mut lines = vec![
            "<!-- Flip Menu Widget -->".to_string(),
            "<div data-flip-menu-widget".to_string(),
            format!("     data-shop-id=\"{}\"", self.shop_id),
            format!("     data-api-url=\"{}\"", escape_attribute(&self.api_url)),
        ];

        if !self.api_key.is_public() {
            lines.push(format!(
                "     data-api-key=\"{}\"",
                escape_attribute(self.api_key.expose())
            ));
        }

        lines.push(format!("     data-width=\"{}\"", self.width));
        lines.push(format!("     data-height=\"{}\">", self.height));
        lines.push("</div>".to_string());
        lines.push(format!(
            "<script src=\"{}\"></script>",
            escape_attribute(&self.widget_url)
        ));

        lines.join("\n")
    }
}

/// Execute the embed-code command and return the snippet
#[instrument(skip(args), fields(shop = args.shop))]
pub async fn execute(args: &EmbedArgs) -> Result<String, Error> {
    let shop_id = ShopId::new(args.shop);

    let catalog = JsonCatalogStore::new(&args.catalog).load().await?;
    if catalog.shop(shop_id).is_none() {
        return Err(CatalogError::ShopNotFound { id: shop_id }.into());
    }

    let settings = ApiSettings::from(SettingsDocument::load(&args.settings)?);
    if !settings.api_enabled {
        warn!("API is disabled; the widget will be refused until it is enabled");
    }

    let snippet = EmbedSnippet::new(
        shop_id,
        args.api_url.as_str(),
        settings.api_key,
        args.widget_url.as_str(),
        args.width,
        args.height,
    );
    Ok(snippet.render())
}

/// Escape a value for a double-quoted HTML attribute.
fn escape_attribute(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
