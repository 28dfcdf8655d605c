//! Tests for menu item types

use super::*;

#[test]
fn test_source_kind_parses_known_values() {
    assert_eq!("image".parse::<SourceKind>().unwrap(), SourceKind::Image);
    assert_eq!("pdf".parse::<SourceKind>().unwrap(), SourceKind::Pdf);
    assert_eq!(" PDF ".parse::<SourceKind>().unwrap(), SourceKind::Pdf);
}

#[test]
fn test_source_kind_rejects_unknown_values() {
    let err = "video".parse::<SourceKind>().unwrap_err();

    match err {
        ValidationError::InvalidFormat { field, reason } => {
            assert_eq!(field, "source_type");
            assert!(reason.contains("video"));
        }
        _ => panic!("Expected InvalidFormat variant"),
    }
}

#[test]
fn test_source_kind_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&SourceKind::Image).unwrap(), "\"image\"");
    assert_eq!(serde_json::to_string(&SourceKind::Pdf).unwrap(), "\"pdf\"");
    assert_eq!(SourceKind::Pdf.to_string(), "pdf");
}

#[test]
fn test_title_may_be_empty() {
    let title = MenuItemTitle::new("").unwrap();
    assert!(title.is_empty());
}

#[test]
fn test_title_too_long() {
    assert_eq!(
        MenuItemTitle::new("t".repeat(256)).unwrap_err(),
        ValidationError::too_long("title", 256, 255)
    );
}

#[test]
fn test_menu_item_deserializes_with_defaults() {
    let json = r#"{
        "id": 3,
        "shop_id": 1,
        "source_type": "pdf",
        "source_url": "/uploads/menu.pdf",
        "created_at": "2025-03-01T09:30:00Z",
        "updated_at": "2025-03-01T09:30:00Z"
    }"#;

    let item: MenuItem = serde_json::from_str(json).unwrap();

    assert_eq!(item.id, MenuItemId::from(3));
    assert_eq!(item.shop_id, ShopId::from(1));
    assert!(item.title.is_empty());
    assert_eq!(item.source_type, SourceKind::Pdf);
    assert_eq!(item.page_order, 0);
}

#[test]
fn test_menu_item_rejects_unknown_source_type() {
    let json = r#"{
        "id": 3,
        "shop_id": 1,
        "source_type": "gif",
        "source_url": "/uploads/menu.gif",
        "created_at": "2025-03-01T09:30:00Z",
        "updated_at": "2025-03-01T09:30:00Z"
    }"#;

    assert!(serde_json::from_str::<MenuItem>(json).is_err());
}
