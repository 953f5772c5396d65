//! In-memory token store scoped to one host session

use std::collections::HashMap;
use std::sync::RwLock;

use shopfeed_core::TokenStore;
use shopfeed_domain::{AccessToken, Result, ShopFeedError};
use tracing::debug;

use crate::errors::InfraError;

/// Tokens keyed by OAuth client id, held for the lifetime of a session.
#[derive(Debug, Default)]
pub struct SessionTokenStore {
    tokens: RwLock<HashMap<String, AccessToken>>,
}

impl SessionTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `token` for `client_id`, replacing any previous one.
    pub fn insert(&self, client_id: impl Into<String>, token: AccessToken) -> Result<()> {
        let client_id = client_id.into();
        debug!(client_id = %client_id, "Storing session access token");
        self.write()?.insert(client_id, token);
        Ok(())
    }

    /// Store the raw token JSON the OAuth callback received.
    pub fn insert_json(&self, client_id: impl Into<String>, raw: &str) -> Result<()> {
        let token = AccessToken::from_json(raw).map_err(InfraError::from)?;
        self.insert(client_id, token)
    }

    /// Forget the token for `client_id`.
    pub fn remove(&self, client_id: &str) -> Result<Option<AccessToken>> {
        Ok(self.write()?.remove(client_id))
    }

    fn write(&self) -> Result<std::sync::RwLockWriteGuard<'_, HashMap<String, AccessToken>>> {
        self.tokens
            .write()
            .map_err(|_| ShopFeedError::Internal("session token lock poisoned".into()))
    }
}

impl TokenStore for SessionTokenStore {
    fn access_token(&self, client_id: &str) -> Result<Option<AccessToken>> {
        let tokens = self
            .tokens
            .read()
            .map_err(|_| ShopFeedError::Internal("session token lock poisoned".into()))?;
        Ok(tokens.get(client_id).cloned())
    }
}
