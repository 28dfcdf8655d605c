//! Menu item domain types
//!
//! A menu item is one page of a shop's menu, backed by an image or a PDF.
//! Items are displayed by ascending page order.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::errors::ValidationError;
use crate::ShopId;

#[cfg(test)]
#[path = "menu_item_tests.rs"]
mod tests;

/// Maximum menu item title length, matching the storage column width.
pub const MAX_TITLE_LENGTH: usize = 255;

/// Unique menu item identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MenuItemId(u64);

impl MenuItemId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl From<u64> for MenuItemId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for MenuItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Kind of resource backing a menu page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    Image,
    Pdf,
}

impl SourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceKind::Image => "image",
            SourceKind::Pdf => "pdf",
        }
    }
}

impl FromStr for SourceKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "image" => Ok(SourceKind::Image),
            "pdf" => Ok(SourceKind::Pdf),
            other => Err(ValidationError::invalid_format(
                "source_type",
                format!("expected 'image' or 'pdf', got '{}'", other),
            )),
        }
    }
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Menu item title. May be empty (image uploads carry no title).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MenuItemTitle(String);

impl MenuItemTitle {
    /// Create a new title, trimming surrounding whitespace.
    ///
    /// # Errors
    /// Returns `ValidationError::TooLong` past 255 characters
    pub fn new(title: impl Into<String>) -> Result<Self, ValidationError> {
        let title = title.into();
        let trimmed = title.trim();

        let length = trimmed.chars().count();
        if length > MAX_TITLE_LENGTH {
            return Err(ValidationError::too_long("title", length, MAX_TITLE_LENGTH));
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl TryFrom<String> for MenuItemTitle {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<MenuItemTitle> for String {
    fn from(title: MenuItemTitle) -> Self {
        title.0
    }
}

/// A menu page record as stored and as served by the API.
///
/// `page_order` is neither unique nor contiguous within a shop; ties are
/// broken by insertion order when the menu is presented.
///
/// # Example
///
/// ```json
/// {
///   "id": 5,
///   "shop_id": 1,
///   "title": "",
///   "source_type": "image",
///   "source_url": "https://cdn.example.com/menus/page-1.jpg",
///   "page_order": 2,
///   "created_at": "2025-03-01T09:30:00Z",
///   "updated_at": "2025-03-01T09:30:00Z"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: MenuItemId,
    pub shop_id: ShopId,
    #[serde(default)]
    pub title: MenuItemTitle,
    pub source_type: SourceKind,
    pub source_url: String,
    #[serde(default)]
    pub page_order: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
