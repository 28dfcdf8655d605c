//! Shop domain types
//!
//! A shop is the tenant that owns a menu. Shops are created by the
//! operator and are read-only to the public API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

#[cfg(test)]
#[path = "shop_tests.rs"]
mod tests;

/// Maximum shop name length, matching the storage column width.
pub const MAX_SHOP_NAME_LENGTH: usize = 255;

/// Stable, unique shop identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShopId(u64);

impl ShopId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl From<u64> for ShopId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ShopId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validated shop name
///
/// # Validation Rules
/// - Surrounding whitespace is trimmed
/// - Must not be empty after trimming
/// - At most 255 characters
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ShopName(String);

impl ShopName {
    /// Create a new shop name with validation
    ///
    /// # Errors
    /// Returns `ValidationError` if the trimmed name is empty or too long
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        let trimmed = name.trim();

        if trimmed.is_empty() {
            return Err(ValidationError::empty_field("shop_name"));
        }

        let length = trimmed.chars().count();
        if length > MAX_SHOP_NAME_LENGTH {
            return Err(ValidationError::too_long(
                "shop_name",
                length,
                MAX_SHOP_NAME_LENGTH,
            ));
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ShopName {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ShopName> for String {
    fn from(name: ShopName) -> Self {
        name.0
    }
}

impl std::fmt::Display for ShopName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for ShopName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A shop record as stored and as served by the API.
///
/// # Example
///
/// ```json
/// {
///   "id": 1,
///   "name": "Harbour Cafe",
///   "description": "Seafood by the pier",
///   "created_at": "2025-03-01T09:30:00Z",
///   "updated_at": "2025-03-01T09:30:00Z"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shop {
    pub id: ShopId,
    pub name: ShopName,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
