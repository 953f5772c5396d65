use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use shopfeed_core::{ContentClient, ProductsApi, ServiceFactory, ShoppingService};
use shopfeed_domain::{Product, ProductsListResponse, Result as DomainResult, ShopFeedError};

/// Outbound call as seen by the products resource.
#[derive(Debug, Clone, PartialEq)]
pub enum ProductCall {
    List { merchant_id: String, page_token: Option<String> },
    Get { merchant_id: String, product_id: String },
    Insert { merchant_id: String, product: Product },
    Delete { merchant_id: String, product_id: String },
}

/// Products resource that records calls and answers from canned data.
#[derive(Default)]
pub struct RecordingProductsApi {
    calls: Arc<Mutex<Vec<ProductCall>>>,
    failure: Option<ShopFeedError>,
}

#[async_trait]
impl ProductsApi for RecordingProductsApi {
    async fn list(
        &self,
        merchant_id: &str,
        page_token: Option<&str>,
    ) -> DomainResult<ProductsListResponse> {
        self.record(ProductCall::List {
            merchant_id: merchant_id.to_string(),
            page_token: page_token.map(str::to_string),
        })?;
        Ok(ProductsListResponse {
            kind: Some("content#productsListResponse".to_string()),
            next_page_token: None,
            resources: vec![Product {
                id: Some("online:en:US:sku-1".to_string()),
                offer_id: Some("sku-1".to_string()),
                ..Product::default()
            }],
        })
    }

    async fn get(&self, merchant_id: &str, product_id: &str) -> DomainResult<Product> {
        self.record(ProductCall::Get {
            merchant_id: merchant_id.to_string(),
            product_id: product_id.to_string(),
        })?;
        Ok(Product { id: Some(product_id.to_string()), ..Product::default() })
    }

    async fn insert(&self, merchant_id: &str, product: &Product) -> DomainResult<Product> {
        self.record(ProductCall::Insert {
            merchant_id: merchant_id.to_string(),
            product: product.clone(),
        })?;
        Ok(product.clone())
    }

    async fn delete(&self, merchant_id: &str, product_id: &str) -> DomainResult<()> {
        self.record(ProductCall::Delete {
            merchant_id: merchant_id.to_string(),
            product_id: product_id.to_string(),
        })
    }
}

impl RecordingProductsApi {
    fn record(&self, call: ProductCall) -> DomainResult<()> {
        self.calls.lock().unwrap().push(call);
        match &self.failure {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }
}

/// Service factory handing out recording product resources that share one
/// call log.
#[derive(Default)]
pub struct MockServiceFactory {
    calls: Arc<Mutex<Vec<ProductCall>>>,
    failure: Option<ShopFeedError>,
    builds: AtomicUsize,
}

impl MockServiceFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every remote call answers with `error`.
    pub fn failing(mut self, error: ShopFeedError) -> Self {
        self.failure = Some(error);
        self
    }

    pub fn calls(&self) -> Vec<ProductCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn builds(&self) -> usize {
        self.builds.load(Ordering::SeqCst)
    }
}

impl ServiceFactory for MockServiceFactory {
    fn shopping_service(&self, client: Arc<ContentClient>) -> DomainResult<ShoppingService> {
        self.builds.fetch_add(1, Ordering::SeqCst);
        let products = RecordingProductsApi {
            calls: Arc::clone(&self.calls),
            failure: self.failure.clone(),
        };
        Ok(ShoppingService::new(client, Arc::new(products)))
    }
}
