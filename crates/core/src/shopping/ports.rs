//! Port interfaces for the shopping-content integration
//!
//! The adapter reaches every collaborator through these traits. Infra
//! provides the production implementations; tests use in-memory mocks.

use std::sync::Arc;

use async_trait::async_trait;
use shopfeed_domain::{AccessToken, Product, ProductsListResponse, Result, StoreId};

use super::client::ContentClient;
use super::service::ShoppingService;

/// Store-scoped configuration lookups.
pub trait StoreConfigProvider: Send + Sync {
    /// Plain configuration value for `key` in the scope of `store`
    fn config_value(&self, key: &str, store: &StoreId) -> Option<String>;

    /// OAuth client secret for `store`, decrypted if the host stores it
    /// encrypted
    fn client_secret(&self, store: &StoreId) -> Option<String>;

    /// Whether outbound requests for `store` should be captured for debugging
    fn is_debug(&self, store: &StoreId) -> bool;
}

/// Read side of the host's token storage, keyed by OAuth client id.
pub trait TokenStore: Send + Sync {
    /// Previously obtained token for `client_id`, if any.
    fn access_token(&self, client_id: &str) -> Result<Option<AccessToken>>;
}

/// Product resource of the remote shopping-content service.
///
/// Implementations are bound to one [`ContentClient`] and authenticate with
/// its token. Errors returned by the remote side are passed back untouched.
#[async_trait]
pub trait ProductsApi: Send + Sync {
    /// `products.list` for one merchant, optionally continuing from a page
    /// token
    async fn list(&self, merchant_id: &str, page_token: Option<&str>)
        -> Result<ProductsListResponse>;

    /// `products.get`
    async fn get(&self, merchant_id: &str, product_id: &str) -> Result<Product>;

    /// `products.insert`, which the service treats as an upsert
    async fn insert(&self, merchant_id: &str, product: &Product) -> Result<Product>;

    /// `products.delete`
    async fn delete(&self, merchant_id: &str, product_id: &str) -> Result<()>;
}

/// Builds the typed service handle for a constructed client.
pub trait ServiceFactory: Send + Sync {
    fn shopping_service(&self, client: Arc<ContentClient>) -> Result<ShoppingService>;
}

/// Diagnostic capture of outbound requests, attached to a client when the
/// store runs in debug mode.
pub trait RequestLogger: Send + Sync {
    fn log_request(&self, method: &str, url: &str, body: Option<&str>);

    fn log_response(&self, method: &str, url: &str, status: u16, body: &str);
}

/// Produces request loggers bound to a store.
pub trait RequestLoggerFactory: Send + Sync {
    fn for_store(&self, store: &StoreId) -> Arc<dyn RequestLogger>;
}
