//! Response envelope
//!
//! Every JSON body the API produces has the same outer shape so that a
//! single client-side parser handles all routes:
//!
//! ```json
//! { "success": true, "data": [ ... ], "count": 2 }
//! { "success": true, "data": [], "message": "No shops found" }
//! { "success": true, "message": "API key is valid" }
//! { "success": false, "message": "Shop not found", "code": "not_found" }
//! ```
//!
//! Absent fields are omitted rather than serialized as `null`.

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "envelope_tests.rs"]
mod tests;

/// Informational message for an empty shop list
pub const NO_SHOPS_MESSAGE: &str = "No shops found";

/// Informational message for an empty menu
pub const NO_MENU_ITEMS_MESSAGE: &str = "No menu items found";

/// Failure message for an unknown shop id
pub const SHOP_NOT_FOUND_MESSAGE: &str = "Shop not found";

/// Message returned by the key verification route
pub const API_KEY_VALID_MESSAGE: &str = "API key is valid";

/// Uniform success/failure wrapper.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,

    /// Collection length, present only for non-empty collections
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,

    /// Informational text on success, the reason on failure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Machine-readable failure reason
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl<T> ApiEnvelope<T> {
    /// Successful response carrying a single value.
    pub fn data(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            count: None,
            message: None,
            code: None,
        }
    }
}

impl<T> ApiEnvelope<Vec<T>> {
    /// Successful response carrying a collection.
    ///
    /// A non-empty collection carries its `count`. An empty one carries
    /// `empty_message` instead, so callers can tell "nothing there" apart
    /// from a failure while both stay HTTP 200.
    pub fn collection(items: Vec<T>, empty_message: &str) -> Self {
        if items.is_empty() {
            return Self {
                success: true,
                data: Some(items),
                count: None,
                message: Some(empty_message.to_string()),
                code: None,
            };
        }

        Self {
            success: true,
            count: Some(items.len()),
            data: Some(items),
            message: None,
            code: None,
        }
    }
}

impl ApiEnvelope<()> {
    /// Successful response carrying only a message.
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: None,
            count: None,
            message: Some(message.into()),
            code: None,
        }
    }

    /// Failure response.
    pub fn failure(message: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            count: None,
            message: Some(message.into()),
            code: Some(code.into()),
        }
    }
}
