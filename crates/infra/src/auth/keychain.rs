//! OS keychain token store
//!
//! Tokens live in the platform keychain (macOS Keychain, Windows Credential
//! Manager, Linux Secret Service) as JSON, one entry per OAuth client id.

use keyring::{Entry, Error as KeyringError};
use shopfeed_core::TokenStore;
use shopfeed_domain::{AccessToken, Result, ShopFeedError};
use tracing::debug;

use crate::errors::InfraError;

/// Keychain service name used when none is given.
pub const DEFAULT_SERVICE: &str = "shopfeed.google-shopping";

/// Token store backed by the platform keychain.
#[derive(Debug, Clone)]
pub struct KeychainTokenStore {
    service: String,
}

impl KeychainTokenStore {
    pub fn new(service: impl Into<String>) -> Self {
        Self { service: service.into() }
    }

    pub fn service(&self) -> &str {
        &self.service
    }

    /// Persist `token` for `client_id`.
    pub fn store_token(&self, client_id: &str, token: &AccessToken) -> Result<()> {
        debug!(service = %self.service, client_id = %client_id, "Storing access token");
        let raw = serde_json::to_string(token).map_err(InfraError::from)?;
        self.entry(client_id)?.set_password(&raw).map_err(InfraError::from)?;
        Ok(())
    }

    /// Remove the token for `client_id`. Missing entries are not an error.
    pub fn delete_token(&self, client_id: &str) -> Result<()> {
        debug!(service = %self.service, client_id = %client_id, "Deleting access token");
        match self.entry(client_id)?.delete_credential() {
            Ok(()) | Err(KeyringError::NoEntry) => Ok(()),
            Err(err) => Err(InfraError::from(err).into()),
        }
    }

    fn entry(&self, client_id: &str) -> Result<Entry> {
        if client_id.trim().is_empty() {
            return Err(ShopFeedError::InvalidInput("client id must not be empty".into()));
        }
        Ok(Entry::new(&self.service, client_id).map_err(InfraError::from)?)
    }
}

impl Default for KeychainTokenStore {
    fn default() -> Self {
        Self::new(DEFAULT_SERVICE)
    }
}

impl TokenStore for KeychainTokenStore {
    fn access_token(&self, client_id: &str) -> Result<Option<AccessToken>> {
        let raw = match self.entry(client_id)?.get_password() {
            Ok(raw) => raw,
            Err(KeyringError::NoEntry) => return Ok(None),
            Err(err) => return Err(InfraError::from(err).into()),
        };

        let token = AccessToken::from_json(&raw).map_err(InfraError::from)?;
        Ok(Some(token))
    }
}
