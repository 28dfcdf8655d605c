//! HTTP response models
//!
//! These types exist only in the HTTP layer. Domain values from
//! `flip_menu_core` are wrapped, never re-declared.

pub mod envelope;

// Re-export commonly used types
pub use envelope::{
    ApiEnvelope, API_KEY_VALID_MESSAGE, NO_MENU_ITEMS_MESSAGE, NO_SHOPS_MESSAGE,
    SHOP_NOT_FOUND_MESSAGE,
};
