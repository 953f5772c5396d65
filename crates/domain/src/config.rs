//! Configuration structures
//!
//! Store settings follow a two-level scope: values set on a store override
//! the `default` store section, and anything unset there falls back to it.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::constants::CONTENT_API_BASE_URL;
use crate::types::StoreId;

/// Name of the store section every other store inherits from.
pub const DEFAULT_STORE_SCOPE: &str = "default";

/// Root configuration document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShopFeedConfig {
    #[serde(default)]
    pub content_api: ContentApiConfig,
    pub oauth: OAuthRedirectConfig,
    #[serde(default)]
    pub stores: BTreeMap<String, StoreConfig>,
}

impl ShopFeedConfig {
    /// Settings for `store`, or `None` when the store has no section.
    pub fn store(&self, store: &StoreId) -> Option<&StoreConfig> {
        self.stores.get(store.as_str())
    }

    /// The `default` store section, if present.
    pub fn default_store(&self) -> Option<&StoreConfig> {
        self.stores.get(DEFAULT_STORE_SCOPE)
    }
}

/// Transport settings for the shopping-content service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
    #[serde(default)]
    pub user_agent: Option<String>,
}

fn default_base_url() -> String {
    CONTENT_API_BASE_URL.to_string()
}

const fn default_timeout_seconds() -> u64 {
    30
}

impl Default for ContentApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout_seconds(),
            user_agent: None,
        }
    }
}

/// Where callers send users whose stored token is missing or expired.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OAuthRedirectConfig {
    /// Absolute URL of the host's OAuth authorization entry point
    pub reauthorize_url: String,
}

/// Per-store integration settings. Every field is optional so that unset
/// values fall back to the `default` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(default)]
    pub client_id: Option<String>,
    #[serde(default)]
    pub client_secret: Option<String>,
    /// Name of an environment variable holding the client secret
    #[serde(default)]
    pub client_secret_env: Option<String>,
    #[serde(default)]
    pub merchant_id: Option<String>,
    #[serde(default)]
    pub account_id: Option<String>,
    #[serde(default)]
    pub debug: Option<bool>,
}

impl StoreConfig {
    /// Look up a plain configuration value by its key.
    pub fn value(&self, key: &str) -> Option<&str> {
        match key {
            "client_id" => self.client_id.as_deref(),
            "merchant_id" => self.merchant_id.as_deref(),
            "account_id" => self.account_id.as_deref(),
            _ => None,
        }
    }
}
