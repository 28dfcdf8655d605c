//! Tests for error types

use super::*;

// ============================================================================
// ValidationError Tests
// ============================================================================

#[test]
fn test_validation_error_empty_field() {
    let err = ValidationError::empty_field("shop_name");

    assert_eq!(err.to_string(), "Field 'shop_name' cannot be empty");

    match err {
        ValidationError::EmptyField { field } => assert_eq!(field, "shop_name"),
        _ => panic!("Expected EmptyField variant"),
    }
}

#[test]
fn test_validation_error_too_long() {
    let err = ValidationError::too_long("title", 300, 255);

    assert_eq!(
        err.to_string(),
        "Field 'title' is too long: 300 characters (max: 255)"
    );

    match err {
        ValidationError::TooLong { field, actual, max } => {
            assert_eq!(field, "title");
            assert_eq!(actual, 300);
            assert_eq!(max, 255);
        }
        _ => panic!("Expected TooLong variant"),
    }
}

#[test]
fn test_validation_error_invalid_format() {
    let err = ValidationError::invalid_format("source_type", "expected 'image' or 'pdf'");

    assert_eq!(
        err.to_string(),
        "Field 'source_type' has invalid format: expected 'image' or 'pdf'"
    );
}

// ============================================================================
// CatalogError Tests
// ============================================================================

#[test]
fn test_catalog_error_wraps_validation_error_transparently() {
    let err: CatalogError = ValidationError::empty_field("shop_name").into();

    assert_eq!(err.to_string(), "Field 'shop_name' cannot be empty");
}

#[test]
fn test_catalog_error_orphaned_item_message() {
    let err = CatalogError::OrphanedMenuItem {
        item: MenuItemId::from(7),
        shop: ShopId::from(3),
    };

    assert_eq!(err.to_string(), "Menu item 7 references missing shop 3");
}

#[test]
fn test_catalog_error_ids_exhausted_message() {
    let err = CatalogError::IdsExhausted {
        kind: "shop",
        max: u64::MAX,
    };

    assert_eq!(
        err.to_string(),
        "No shop ids left: the highest id is already 18446744073709551615"
    );
}

// ============================================================================
// StoreError / ResolveError Tests
// ============================================================================

#[test]
fn test_store_error_invalid_catalog_keeps_source() {
    use std::error::Error as _;

    let err = StoreError::InvalidCatalog {
        path: "catalog.json".to_string(),
        source: CatalogError::DuplicateShopId {
            id: ShopId::from(1),
        },
    };

    assert!(err.to_string().contains("catalog.json"));
    assert!(err.source().is_some());
}

#[test]
fn test_resolve_error_from_store_error() {
    let store_err = StoreError::Serialize {
        reason: "boom".to_string(),
    };
    let err: ResolveError = store_err.clone().into();

    assert_eq!(err, ResolveError::Store(store_err));
    assert_eq!(err.to_string(), "Failed to serialize catalog: boom");
}

#[test]
fn test_resolve_error_shop_not_found_message() {
    let err = ResolveError::ShopNotFound(ShopId::from(999));

    assert_eq!(err.to_string(), "Shop not found: 999");
}
