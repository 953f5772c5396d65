//! Error types used throughout the workspace

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::StoreId;

/// Main error type for shopfeed
///
/// `Config` and `AuthorizationRequired` are raised before any remote call is
/// attempted. `Remote` carries whatever the shopping-content service answered
/// and is never retried or reinterpreted.
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum ShopFeedError {
    #[error("Configuration error: {0}")]
    Config(String),

    /// The stored access token is missing or expired. Callers should send the
    /// user to `redirect_url` to re-authorize the store.
    #[error("Authorization required for store {store_id}")]
    AuthorizationRequired { store_id: StoreId, redirect_url: String },

    #[error("Remote service error (HTTP {status}): {message}")]
    Remote {
        status: u16,
        message: String,
        /// Raw response payload, kept as returned by the service
        body: Option<String>,
    },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Security error: {0}")]
    Security(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ShopFeedError {
    /// Redirect target when this error asks for re-authorization.
    pub fn redirect_url(&self) -> Option<&str> {
        match self {
            Self::AuthorizationRequired { redirect_url, .. } => Some(redirect_url),
            _ => None,
        }
    }

    pub fn is_authorization_required(&self) -> bool {
        matches!(self, Self::AuthorizationRequired { .. })
    }
}

/// Result type alias for shopfeed operations
pub type Result<T> = std::result::Result<T, ShopFeedError>;
