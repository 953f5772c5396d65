//! Application constants
//!
//! Values the shopping-content integration treats as fixed.

/// Application name reported to the Google API client.
pub const APPLICATION_NAME: &str = "shopfeed GoogleShopping V2";

/// OAuth scope for the Content API for Shopping.
pub const CONTENT_API_SCOPE: &str = "https://www.googleapis.com/auth/content";

/// Default REST root of the Content API v2.1.
pub const CONTENT_API_BASE_URL: &str = "https://shoppingcontent.googleapis.com/content/v2.1";

// Store configuration keys
pub const CONFIG_KEY_CLIENT_ID: &str = "client_id";
pub const CONFIG_KEY_MERCHANT_ID: &str = "merchant_id";
pub const CONFIG_KEY_ACCOUNT_ID: &str = "account_id";

/// Products pushed to the feed expire this many days after upload.
pub const PRODUCT_EXPIRATION_DAYS: i64 = 30;

/// Tokens are treated as expired this many seconds before their real expiry.
pub const TOKEN_EXPIRY_SKEW_SECS: i64 = 30;

/// Query parameter that scopes the re-authorization URL to a store.
pub const STORE_ID_QUERY_PARAM: &str = "store_id";

/// Error shown when a store has no OAuth application configured.
pub const MISSING_API_ACCESS_MESSAGE: &str = "Please specify API access data for this store";
