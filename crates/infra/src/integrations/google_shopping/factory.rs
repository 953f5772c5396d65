//! Service factory wiring the REST products resource into service handles

use std::sync::Arc;
use std::time::Duration;

use shopfeed_core::{ContentClient, ServiceFactory, ShoppingService};
use shopfeed_domain::{ContentApiConfig, Result, ShopFeedError};
use url::Url;

use super::products::ContentApiProducts;
use crate::http::HttpClient;

/// Builds [`ShoppingService`] handles that talk to the Content API over
/// HTTP. One `HttpClient` is shared by every handle it produces.
#[derive(Debug, Clone)]
pub struct ContentApiServiceFactory {
    http: HttpClient,
    base_url: Url,
}

impl ContentApiServiceFactory {
    pub fn new(http: HttpClient, base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url).map_err(|e| {
            ShopFeedError::Config(format!("invalid Content API base URL '{base_url}': {e}"))
        })?;
        Ok(Self { http, base_url })
    }

    /// Factory with transport settings taken from configuration.
    pub fn from_config(config: &ContentApiConfig) -> Result<Self> {
        let mut builder =
            HttpClient::builder().timeout(Duration::from_secs(config.timeout_seconds));
        if let Some(agent) = &config.user_agent {
            builder = builder.user_agent(agent.clone());
        }
        Self::new(builder.build()?, &config.base_url)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}

impl ServiceFactory for ContentApiServiceFactory {
    fn shopping_service(&self, client: Arc<ContentClient>) -> Result<ShoppingService> {
        let products =
            ContentApiProducts::new(self.http.clone(), self.base_url.clone(), Arc::clone(&client));
        Ok(ShoppingService::new(client, Arc::new(products)))
    }
}
