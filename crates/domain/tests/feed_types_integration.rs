//! Integration tests for feed types
//!
//! Real-world payloads as the Content API and the OAuth callback produce
//! them.

use chrono::{TimeZone, Utc};
use serde_json::json;
use shopfeed_domain::{AccessToken, Channel, HandleState, Product, ProductsListResponse};

// ============================================================================
// Product payloads
// ============================================================================

/// A full `products.get` answer keeps every unmodelled field, and preparing
/// it for upload touches only channel and expiration date.
#[test]
fn test_remote_product_prepared_for_reupload() {
    let remote = json!({
        "kind": "content#product",
        "id": "local:de:DE:sku-77",
        "offerId": "sku-77",
        "title": "Rain jacket",
        "contentLanguage": "de",
        "targetCountry": "DE",
        "channel": "local",
        "availability": "in stock",
        "condition": "new",
        "price": {"value": "89.90", "currency": "EUR"},
        "shipping": [{"country": "DE", "service": "Standard", "price": {"value": "0", "currency": "EUR"}}],
        "sizes": ["S", "M", "L"],
        "expirationDate": "2024-01-01"
    });

    let mut product: Product = serde_json::from_value(remote.clone()).unwrap();
    product.prepare_for_upload(Utc.with_ymd_and_hms(2024, 12, 20, 18, 0, 0).unwrap());
    let upload = serde_json::to_value(&product).unwrap();

    assert_eq!(upload["channel"], "online");
    assert_eq!(upload["expirationDate"], "2025-01-19");

    let mut expected = remote;
    expected["channel"] = json!("online");
    expected["expirationDate"] = json!("2025-01-19");
    assert_eq!(upload, expected);
}

#[test]
fn test_list_page_with_mixed_channels() {
    let page: ProductsListResponse = serde_json::from_value(json!({
        "kind": "content#productsListResponse",
        "nextPageToken": "CAE",
        "resources": [
            {"id": "online:en:US:a", "channel": "online"},
            {"id": "local:en:US:b", "channel": "local"}
        ]
    }))
    .unwrap();

    let channels: Vec<_> = page.resources.iter().filter_map(|p| p.channel).collect();
    assert_eq!(channels, vec![Channel::Online, Channel::Local]);
    assert_eq!(page.next_page_token.as_deref(), Some("CAE"));
}

// ============================================================================
// Token payloads
// ============================================================================

#[test]
fn test_oauth_callback_token_expiry_window() {
    let token = AccessToken::from_json(
        r#"{"access_token":"ya29.a0","token_type":"Bearer","expires_in":3599,
            "scope":"https://www.googleapis.com/auth/content","created":1735689600}"#,
    )
    .unwrap();

    let issued = Utc.timestamp_opt(1_735_689_600, 0).unwrap();
    assert!(!token.is_expired_at(issued + chrono::Duration::seconds(3568)));
    assert!(token.is_expired_at(issued + chrono::Duration::seconds(3570)));
}

#[test]
fn test_handle_state_string_forms() {
    assert_eq!(HandleState::default(), HandleState::Uninitialized);
    assert_eq!("EXPIRED".parse::<HandleState>().unwrap(), HandleState::Expired);
    assert_eq!(serde_json::to_value(HandleState::Ready).unwrap(), "ready");
}
