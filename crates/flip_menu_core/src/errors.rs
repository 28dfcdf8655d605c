//! Error types for the flip menu domain.
//!
//! Errors are layered the same way the crate is:
//! - [`ValidationError`]: a single field failed its domain rule
//! - [`CatalogError`]: a catalog edit or consistency check failed
//! - [`StoreError`]: a data source could not be read or written
//! - [`ResolveError`]: a read query could not be answered

use thiserror::Error;

use crate::{MenuItemId, ShopId};

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// A field value violated its domain rule.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' is too long: {actual} characters (max: {max})")]
    TooLong {
        field: String,
        actual: usize,
        max: usize,
    },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    pub fn empty_field(field: impl Into<String>) -> Self {
        Self::EmptyField {
            field: field.into(),
        }
    }

    pub fn too_long(field: impl Into<String>, actual: usize, max: usize) -> Self {
        Self::TooLong {
            field: field.into(),
            actual,
            max,
        }
    }

    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// A catalog edit or consistency check failed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Shop {id} does not exist")]
    ShopNotFound { id: ShopId },

    #[error("Menu item {id} does not exist")]
    MenuItemNotFound { id: MenuItemId },

    #[error("Shop id {id} is used more than once")]
    DuplicateShopId { id: ShopId },

    #[error("Menu item id {id} is used more than once")]
    DuplicateMenuItemId { id: MenuItemId },

    #[error("Menu item {item} references missing shop {shop}")]
    OrphanedMenuItem { item: MenuItemId, shop: ShopId },

    #[error("No {kind} ids left: the highest id is already {max}")]
    IdsExhausted { kind: &'static str, max: u64 },
}

/// A data source failed to produce or persist records.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Failed to access catalog file: {path} - {reason}")]
    FileAccess { path: String, reason: String },

    #[error("Failed to parse catalog file: {path} - {reason}")]
    Parse { path: String, reason: String },

    #[error("Catalog file {path} is inconsistent: {source}")]
    InvalidCatalog {
        path: String,
        #[source]
        source: CatalogError,
    },

    #[error("Failed to serialize catalog: {reason}")]
    Serialize { reason: String },
}

/// Result type alias for data store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// A read query could not be answered.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("Shop not found: {0}")]
    ShopNotFound(ShopId),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Result type alias for resolver queries.
pub type ResolveResult<T> = Result<T, ResolveError>;
