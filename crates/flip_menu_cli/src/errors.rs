use flip_menu_core::{CatalogError, StoreError};
use settings_manager::SettingsError;
use thiserror::Error;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Errors that can occur in the Flip Menu CLI application.
#[derive(Error, Debug)]
pub enum Error {
    /// The settings file could not be read, parsed or written.
    #[error("Settings error: {0}")]
    Settings(#[from] SettingsError),

    /// A catalog edit was rejected, such as an unknown shop or menu item.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// The catalog file could not be read, parsed or written.
    #[error("Catalog file error: {0}")]
    Store(#[from] StoreError),

    /// Invalid command-line arguments were provided.
    ///
    /// Returned for values clap accepts syntactically but the command cannot
    /// use, such as an allowed-origins list with no entries.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),
}
