//! Conversions from external infrastructure errors into domain errors.

use keyring::Error as KeyringError;
use reqwest::Error as HttpError;
use serde_json::Error as JsonError;
use shopfeed_domain::ShopFeedError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub ShopFeedError);

impl From<InfraError> for ShopFeedError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<ShopFeedError> for InfraError {
    fn from(value: ShopFeedError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoShopFeedError {
    fn into_shopfeed(self) -> ShopFeedError;
}

/* -------------------------------------------------------------------------- */
/* keyring::Error → ShopFeedError */
/* -------------------------------------------------------------------------- */

impl IntoShopFeedError for KeyringError {
    fn into_shopfeed(self) -> ShopFeedError {
        use KeyringError::*;

        let description = self.to_string();

        match self {
            NoEntry => ShopFeedError::Security("keychain entry not found".into()),
            BadEncoding(_) => {
                ShopFeedError::Security("credential in keychain is not valid UTF-8".into())
            }
            TooLong(name, limit) => ShopFeedError::Security(format!(
                "keychain attribute '{name}' exceeds platform limit ({limit})"
            )),
            Invalid(attr, reason) => {
                ShopFeedError::Security(format!("keychain attribute '{attr}' is invalid: {reason}"))
            }
            PlatformFailure(err) => {
                ShopFeedError::Security(format!("keychain platform error: {err}"))
            }
            NoStorageAccess(err) => {
                ShopFeedError::Security(format!("unable to access secure storage: {err}"))
            }
            _ => ShopFeedError::Security(description),
        }
    }
}

impl From<KeyringError> for InfraError {
    fn from(value: KeyringError) -> Self {
        InfraError(value.into_shopfeed())
    }
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → ShopFeedError */
/* -------------------------------------------------------------------------- */

// Only transport failures arrive here. Non-2xx answers are read by the
// products resource and surface as `ShopFeedError::Remote`.
impl IntoShopFeedError for HttpError {
    fn into_shopfeed(self) -> ShopFeedError {
        if self.is_timeout() {
            return ShopFeedError::Network("HTTP request timed out".into());
        }

        if self.is_connect() {
            return ShopFeedError::Network("HTTP connection failure".into());
        }

        if self.is_builder() {
            return ShopFeedError::Internal(format!("invalid HTTP request: {self}"));
        }

        if self.is_decode() || self.is_body() {
            return ShopFeedError::Network(format!("failed to read HTTP response: {self}"));
        }

        ShopFeedError::Network(self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_shopfeed())
    }
}

/* -------------------------------------------------------------------------- */
/* serde_json::Error → ShopFeedError */
/* -------------------------------------------------------------------------- */

impl IntoShopFeedError for JsonError {
    fn into_shopfeed(self) -> ShopFeedError {
        if self.is_io() {
            return ShopFeedError::Internal(format!("JSON I/O failure: {self}"));
        }
        ShopFeedError::InvalidInput(format!("invalid JSON: {self}"))
    }
}

impl From<JsonError> for InfraError {
    fn from(value: JsonError) -> Self {
        InfraError(value.into_shopfeed())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
