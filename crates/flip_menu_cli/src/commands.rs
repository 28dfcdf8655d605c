//! Command modules for the Flip Menu CLI.
//!
//! This is the administrative surface: everything the public API only reads
//! is written here.
//!
//! - `settings_cmd`: API enable flag, API key and CORS settings
//! - `catalog_cmd`: shops and their menu pages
//! - `embed_cmd`: the widget embed snippet for a shop

pub mod catalog_cmd;
pub mod embed_cmd;
pub mod settings_cmd;

/// Settings file used when neither `--settings` nor `FLIP_MENU_SETTINGS` is given
pub const DEFAULT_SETTINGS_FILE: &str = "flip-menu.toml";

/// Catalog file used when neither `--catalog` nor `FLIP_MENU_CATALOG` is given
pub const DEFAULT_CATALOG_FILE: &str = "flip-menu-catalog.json";
