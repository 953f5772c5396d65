//! Authenticated client handle for the Content API

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use shopfeed_domain::constants::{APPLICATION_NAME, CONTENT_API_SCOPE};
use shopfeed_domain::{AccessToken, Credentials, StoreId};

use super::ports::RequestLogger;

/// Client handle bound to one store's OAuth application and token.
///
/// Built by the adapter once per instance and shared with the service handle
/// and the products resource through an `Arc`.
pub struct ContentClient {
    application_name: String,
    credentials: Credentials,
    scopes: Vec<String>,
    token: AccessToken,
    store_id: StoreId,
    logger: Option<Arc<dyn RequestLogger>>,
}

impl ContentClient {
    /// Client for `store_id` with the Content API scope and the fixed
    /// application name.
    pub fn new(store_id: StoreId, credentials: Credentials, token: AccessToken) -> Self {
        Self {
            application_name: APPLICATION_NAME.to_string(),
            credentials,
            scopes: vec![CONTENT_API_SCOPE.to_string()],
            token,
            store_id,
            logger: None,
        }
    }

    /// Attach a request logger
    pub fn with_logger(mut self, logger: Arc<dyn RequestLogger>) -> Self {
        self.logger = Some(logger);
        self
    }

    pub fn application_name(&self) -> &str {
        &self.application_name
    }

    pub fn client_id(&self) -> &str {
        &self.credentials.client_id
    }

    pub fn client_secret(&self) -> &str {
        &self.credentials.client_secret
    }

    pub fn scopes(&self) -> &[String] {
        &self.scopes
    }

    pub fn store_id(&self) -> &StoreId {
        &self.store_id
    }

    pub fn token(&self) -> &AccessToken {
        &self.token
    }

    /// Bearer string sent in the `Authorization` header.
    pub fn bearer_token(&self) -> &str {
        &self.token.access_token
    }

    pub fn logger(&self) -> Option<&Arc<dyn RequestLogger>> {
        self.logger.as_ref()
    }

    pub fn is_access_token_expired(&self, now: DateTime<Utc>) -> bool {
        self.token.is_expired_at(now)
    }
}

impl fmt::Debug for ContentClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContentClient")
            .field("application_name", &self.application_name)
            .field("credentials", &self.credentials)
            .field("scopes", &self.scopes)
            .field("token", &self.token)
            .field("store_id", &self.store_id)
            .field("has_logger", &self.logger.is_some())
            .finish()
    }
}
