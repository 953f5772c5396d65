//! Shopping client adapter - per-store client lifecycle and product operations

use std::sync::Arc;

use shopfeed_domain::constants::{
    CONFIG_KEY_ACCOUNT_ID, CONFIG_KEY_CLIENT_ID, CONFIG_KEY_MERCHANT_ID,
    MISSING_API_ACCESS_MESSAGE,
};
use shopfeed_domain::{
    Channel, Credentials, HandleState, Product, ProductsListResponse, Result, ShopFeedError,
    StoreId,
};
use tracing::{debug, info, warn};

use super::client::ContentClient;
use super::ports::{RequestLoggerFactory, ServiceFactory, StoreConfigProvider, TokenStore};
use super::reauthorize::ReauthorizationTarget;
use super::service::ShoppingService;
use crate::clock::{Clock, SystemClock};

/// Adapter between a store and the Content API products resource.
///
/// One instance serves one request. It caches a single client/service pair
/// for the store it was first used with; once that client's token expires
/// the instance stays [`HandleState::Expired`] and every call asks for
/// re-authorization.
pub struct ShoppingClientAdapter {
    config: Arc<dyn StoreConfigProvider>,
    tokens: Arc<dyn TokenStore>,
    services: Arc<dyn ServiceFactory>,
    loggers: Arc<dyn RequestLoggerFactory>,
    reauthorize: ReauthorizationTarget,
    clock: Arc<dyn Clock>,
    client: Option<Arc<ContentClient>>,
    service: Option<ShoppingService>,
    state: HandleState,
}

impl ShoppingClientAdapter {
    pub fn new(
        config: Arc<dyn StoreConfigProvider>,
        tokens: Arc<dyn TokenStore>,
        services: Arc<dyn ServiceFactory>,
        loggers: Arc<dyn RequestLoggerFactory>,
        reauthorize: ReauthorizationTarget,
    ) -> Self {
        Self {
            config,
            tokens,
            services,
            loggers,
            reauthorize,
            clock: Arc::new(SystemClock),
            client: None,
            service: None,
            state: HandleState::Uninitialized,
        }
    }

    /// Replace the system clock
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn state(&self) -> HandleState {
        self.state
    }

    /// Client for `store`, built on first use and cached afterwards.
    ///
    /// Fails with [`ShopFeedError::Config`] when the store has no OAuth
    /// application configured, and with
    /// [`ShopFeedError::AuthorizationRequired`] when the stored token is
    /// missing, empty or expired.
    pub fn get_client(&mut self, store: &StoreId) -> Result<Arc<ContentClient>> {
        if self.state == HandleState::Expired {
            return Err(self.reauthorize.authorization_required(store));
        }

        if let Some(client) = self.client.clone() {
            if client.store_id() != store {
                debug!(
                    cached_store = %client.store_id(),
                    store_id = %store,
                    state = %self.state,
                    "Discarding handles cached for another store"
                );
                self.reset();
            } else if client.is_access_token_expired(self.clock.now()) {
                return Err(self.expire(store));
            } else {
                return Ok(client);
            }
        }

        let client = Arc::new(self.build_client(store)?);
        self.client = Some(Arc::clone(&client));
        self.state = HandleState::Ready;
        info!(store_id = %store, state = %self.state, "Content API client ready");

        Ok(client)
    }

    /// Service handle for `store`, derived from [`get_client`](Self::get_client).
    pub fn get_shopping_service(&mut self, store: &StoreId) -> Result<ShoppingService> {
        // Validates the cached client and drops the service along with it
        let client = self.get_client(store)?;

        if let Some(service) = &self.service {
            if Arc::ptr_eq(service.client(), &client) {
                return Ok(service.clone());
            }
        }

        let service = self.services.shopping_service(client)?;
        self.service = Some(service.clone());
        Ok(service)
    }

    /// First page of the merchant's products.
    ///
    /// Reads the merchant id from `merchant_id`, unlike the single-product
    /// operations which read `account_id`.
    pub async fn list_products(&mut self, store: &StoreId) -> Result<ProductsListResponse> {
        self.list_products_page(store, None).await
    }

    /// Page of the merchant's products following `page_token`.
    pub async fn list_products_page(
        &mut self,
        store: &StoreId,
        page_token: Option<&str>,
    ) -> Result<ProductsListResponse> {
        let merchant_id = self.merchant_id(CONFIG_KEY_MERCHANT_ID, store)?;
        let service = self.get_shopping_service(store)?;

        debug!(store_id = %store, merchant_id = %merchant_id, "Listing products");
        service.products().list(&merchant_id, page_token).await
    }

    pub async fn get_product(&mut self, product_id: &str, store: &StoreId) -> Result<Product> {
        let merchant_id = self.merchant_id(CONFIG_KEY_ACCOUNT_ID, store)?;
        let service = self.get_shopping_service(store)?;

        debug!(store_id = %store, product_id, "Fetching product");
        service.products().get(&merchant_id, product_id).await
    }

    pub async fn delete_product(&mut self, product_id: &str, store: &StoreId) -> Result<()> {
        let merchant_id = self.merchant_id(CONFIG_KEY_ACCOUNT_ID, store)?;
        let service = self.get_shopping_service(store)?;

        info!(store_id = %store, product_id, "Deleting product");
        service.products().delete(&merchant_id, product_id).await
    }

    /// Upload `product`, forcing the `online` channel and an expiration date
    /// 30 days from now.
    pub async fn insert_product(&mut self, mut product: Product, store: &StoreId) -> Result<Product> {
        let merchant_id = self.merchant_id(CONFIG_KEY_ACCOUNT_ID, store)?;
        let service = self.get_shopping_service(store)?;

        product.prepare_for_upload(self.clock.now());

        info!(
            store_id = %store,
            offer_id = product.offer_id.as_deref().unwrap_or_default(),
            channel = product.channel.as_ref().map(Channel::as_str).unwrap_or_default(),
            expiration_date = product.expiration_date.as_deref().unwrap_or_default(),
            "Inserting product"
        );
        service.products().insert(&merchant_id, &product).await
    }

    /// Same call as [`insert_product`](Self::insert_product); the service
    /// treats inserts as upserts.
    pub async fn update_product(&mut self, product: Product, store: &StoreId) -> Result<Product> {
        self.insert_product(product, store).await
    }

    fn build_client(&self, store: &StoreId) -> Result<ContentClient> {
        let credentials = self.credentials(store)?;

        let token = match self.tokens.access_token(&credentials.client_id)? {
            Some(token) if !token.is_empty() => token,
            _ => {
                warn!(store_id = %store, "No access token stored for store");
                return Err(self.reauthorize.authorization_required(store));
            }
        };

        let client = ContentClient::new(store.clone(), credentials, token);
        if client.is_access_token_expired(self.clock.now()) {
            warn!(store_id = %store, "Stored access token has expired");
            return Err(self.reauthorize.authorization_required(store));
        }

        if self.config.is_debug(store) {
            debug!(store_id = %store, "Attaching request logger");
            return Ok(client.with_logger(self.loggers.for_store(store)));
        }

        Ok(client)
    }

    fn credentials(&self, store: &StoreId) -> Result<Credentials> {
        let client_id = non_empty(self.config.config_value(CONFIG_KEY_CLIENT_ID, store));
        let client_secret = non_empty(self.config.client_secret(store));

        match (client_id, client_secret) {
            (Some(client_id), Some(client_secret)) => Ok(Credentials::new(client_id, client_secret)),
            _ => {
                warn!(store_id = %store, "Store has no API access data configured");
                Err(ShopFeedError::Config(MISSING_API_ACCESS_MESSAGE.to_string()))
            }
        }
    }

    fn merchant_id(&self, key: &str, store: &StoreId) -> Result<String> {
        non_empty(self.config.config_value(key, store)).ok_or_else(|| {
            ShopFeedError::Config(format!("merchant id is not configured (key '{key}')"))
        })
    }

    fn expire(&mut self, store: &StoreId) -> ShopFeedError {
        self.reset();
        self.state = HandleState::Expired;
        warn!(store_id = %store, state = %self.state, "Cached access token has expired");
        self.reauthorize.authorization_required(store)
    }

    fn reset(&mut self) {
        self.client = None;
        self.service = None;
        self.state = HandleState::Uninitialized;
        debug!(state = %self.state, "Dropped cached client and service");
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
