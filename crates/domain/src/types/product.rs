//! Product feed records exchanged with the Content API
//!
//! Only the fields the workspace reads or writes are modelled. Everything
//! else the service sends survives a read-modify-write cycle through
//! [`Product::extra`].

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::constants::PRODUCT_EXPIRATION_DAYS;
use crate::impl_string_enum_conversions;

/// Sales channel of a feed item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Online,
    Local,
}

impl_string_enum_conversions!(Channel {
    Online => "online",
    Local => "local",
});

/// Monetary amount in the feed's string representation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    pub value: String,
    pub currency: String,
}

/// A product as known to the shopping-content service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// REST id, `channel:contentLanguage:targetCountry:offerId`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offer_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel: Option<Channel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gtin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mpn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Price>,
    /// `YYYY-MM-DD`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<String>,

    /// Fields not modelled above, passed through unchanged.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Product {
    /// Stamp the two fields every upload must carry: the `online` channel and
    /// an expiration date [`PRODUCT_EXPIRATION_DAYS`] after `now`.
    pub fn prepare_for_upload(&mut self, now: DateTime<Utc>) {
        self.channel = Some(Channel::Online);
        self.expiration_date = Some(expiration_date_from(now));
    }
}

/// Date-only expiration string for an upload made at `now`.
pub fn expiration_date_from(now: DateTime<Utc>) -> String {
    (now + Duration::days(PRODUCT_EXPIRATION_DAYS)).format("%Y-%m-%d").to_string()
}

/// One page of `products.list`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductsListResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<String>,
    #[serde(default)]
    pub resources: Vec<Product>,
}
