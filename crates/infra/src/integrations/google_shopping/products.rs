//! Content API v2.1 `products` resource over REST

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use shopfeed_core::{ContentClient, ProductsApi};
use shopfeed_domain::{Product, ProductsListResponse, Result, ShopFeedError};
use tracing::{debug, warn};
use url::Url;

use crate::errors::InfraError;
use crate::http::HttpClient;

/// `products` resource bound to one authenticated client.
///
/// Every request carries the client's bearer token. When the client has a
/// request logger attached, each request and response is passed to it.
pub struct ContentApiProducts {
    http: HttpClient,
    base_url: Url,
    client: Arc<ContentClient>,
}

impl ContentApiProducts {
    pub fn new(http: HttpClient, base_url: Url, client: Arc<ContentClient>) -> Self {
        Self { http, base_url, client }
    }

    /// `{base}/{merchantId}/products[/{productId}]` with every segment
    /// percent-encoded.
    fn products_url(&self, merchant_id: &str, product_id: Option<&str>) -> Result<Url> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url.path_segments_mut().map_err(|_| {
                ShopFeedError::Config(format!("base URL cannot carry a path: {}", self.base_url))
            })?;
            segments.pop_if_empty().push(merchant_id).push("products");
            if let Some(product_id) = product_id {
                segments.push(product_id);
            }
        }
        Ok(url)
    }

    /// Send one request and return the raw body of a 2xx answer.
    async fn execute(&self, method: Method, url: Url, body: Option<String>) -> Result<String> {
        let logger = self.client.logger();
        if let Some(logger) = logger {
            logger.log_request(method.as_str(), url.as_str(), body.as_deref());
        }

        let mut request =
            self.http.request(method.clone(), url.clone()).bearer_auth(self.client.bearer_token());
        if let Some(body) = body {
            request = request.header(CONTENT_TYPE, "application/json").body(body);
        }

        let response = self.http.send(request).await?;
        let status = response.status();
        let text = response.text().await.map_err(InfraError::from)?;

        if let Some(logger) = logger {
            logger.log_response(method.as_str(), url.as_str(), status.as_u16(), &text);
        }

        if !status.is_success() {
            warn!(
                store_id = %self.client.store_id(),
                %method,
                status = status.as_u16(),
                "Content API returned an error"
            );
            return Err(remote_error(status, text));
        }

        debug!(
            store_id = %self.client.store_id(),
            %method,
            status = status.as_u16(),
            "Content API call succeeded"
        );
        Ok(text)
    }

    async fn execute_json<T: DeserializeOwned>(
        &self,
        method: Method,
        url: Url,
        body: Option<String>,
    ) -> Result<T> {
        let text = self.execute(method, url, body).await?;
        serde_json::from_str(&text).map_err(|e| {
            ShopFeedError::InvalidInput(format!("Failed to parse Content API response: {e}"))
        })
    }
}

#[async_trait]
impl ProductsApi for ContentApiProducts {
    async fn list(
        &self,
        merchant_id: &str,
        page_token: Option<&str>,
    ) -> Result<ProductsListResponse> {
        let mut url = self.products_url(merchant_id, None)?;
        if let Some(token) = page_token {
            url.query_pairs_mut().append_pair("pageToken", token);
        }
        self.execute_json(Method::GET, url, None).await
    }

    async fn get(&self, merchant_id: &str, product_id: &str) -> Result<Product> {
        let url = self.products_url(merchant_id, Some(product_id))?;
        self.execute_json(Method::GET, url, None).await
    }

    async fn insert(&self, merchant_id: &str, product: &Product) -> Result<Product> {
        let url = self.products_url(merchant_id, None)?;
        let body = serde_json::to_string(product).map_err(InfraError::from)?;
        self.execute_json(Method::POST, url, Some(body)).await
    }

    async fn delete(&self, merchant_id: &str, product_id: &str) -> Result<()> {
        let url = self.products_url(merchant_id, Some(product_id))?;
        self.execute(Method::DELETE, url, None).await.map(|_| ())
    }
}

/// Google's JSON error envelope: `{"error": {"code": 404, "message": "..."}}`
#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

fn remote_error(status: StatusCode, body: String) -> ShopFeedError {
    let message = serde_json::from_str::<ErrorEnvelope>(&body)
        .map(|envelope| envelope.error.message)
        .unwrap_or_else(|_| status.canonical_reason().unwrap_or("unknown status").to_string());

    ShopFeedError::Remote {
        status: status.as_u16(),
        message,
        body: if body.is_empty() { None } else { Some(body) },
    }
}
