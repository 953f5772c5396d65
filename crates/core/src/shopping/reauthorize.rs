//! Re-authorization redirect target

use shopfeed_domain::constants::STORE_ID_QUERY_PARAM;
use shopfeed_domain::{Result, ShopFeedError, StoreId};
use url::Url;

/// Host URL callers are sent to when a store's token is missing or expired.
///
/// The store id is appended as a query parameter; any query the base URL
/// already carries is kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReauthorizationTarget {
    base: Url,
}

impl ReauthorizationTarget {
    pub fn new(base: &str) -> Result<Self> {
        let base = Url::parse(base).map_err(|e| {
            ShopFeedError::Config(format!("invalid re-authorization URL '{base}': {e}"))
        })?;
        Ok(Self { base })
    }

    /// Redirect URL scoped to `store`.
    pub fn url_for(&self, store: &StoreId) -> String {
        let mut url = self.base.clone();
        url.query_pairs_mut().append_pair(STORE_ID_QUERY_PARAM, store.as_str());
        url.into()
    }

    /// Build the error that tells the caller to re-authorize `store`.
    pub fn authorization_required(&self, store: &StoreId) -> ShopFeedError {
        ShopFeedError::AuthorizationRequired {
            store_id: store.clone(),
            redirect_url: self.url_for(store),
        }
    }
}
