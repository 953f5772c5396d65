//! Store-scoped configuration provider over a loaded [`ShopFeedConfig`]

use shopfeed_core::{ReauthorizationTarget, StoreConfigProvider};
use shopfeed_domain::{Result, ShopFeedConfig, StoreConfig, StoreId};
use tracing::warn;

/// Serves store settings from an in-memory configuration document.
///
/// Lookups try the store's own section first and then the `default` section.
#[derive(Debug, Clone)]
pub struct StaticConfigProvider {
    config: ShopFeedConfig,
}

impl StaticConfigProvider {
    pub fn new(config: ShopFeedConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ShopFeedConfig {
        &self.config
    }

    /// Redirect target built from `oauth.reauthorize_url`.
    pub fn reauthorization_target(&self) -> Result<ReauthorizationTarget> {
        ReauthorizationTarget::new(&self.config.oauth.reauthorize_url)
    }

    /// Store section first, `default` section second.
    fn scopes<'a>(&'a self, store: &StoreId) -> impl Iterator<Item = &'a StoreConfig> {
        self.config.store(store).into_iter().chain(self.config.default_store())
    }
}

impl StoreConfigProvider for StaticConfigProvider {
    fn config_value(&self, key: &str, store: &StoreId) -> Option<String> {
        self.scopes(store).find_map(|scope| scope.value(key)).map(str::to_string)
    }

    fn client_secret(&self, store: &StoreId) -> Option<String> {
        self.scopes(store).find_map(|scope| {
            if let Some(secret) = &scope.client_secret {
                return Some(secret.clone());
            }
            let name = scope.client_secret_env.as_deref()?;
            match std::env::var(name) {
                Ok(secret) => Some(secret),
                Err(_) => {
                    warn!(store_id = %store, env = name, "Client secret variable is not set");
                    None
                }
            }
        })
    }

    fn is_debug(&self, store: &StoreId) -> bool {
        self.scopes(store).find_map(|scope| scope.debug).unwrap_or(false)
    }
}
