//! OAuth access token as stored by the host after authorization
//!
//! The JSON shape matches what Google's token endpoint returns once the host
//! has stamped it with a `created` timestamp:
//!
//! ```json
//! {"access_token": "ya29...", "token_type": "Bearer", "expires_in": 3599,
//!  "created": 1700000000, "refresh_token": "1//..."}
//! ```

use std::fmt;

use chrono::{DateTime, Duration, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::TOKEN_EXPIRY_SKEW_SECS;

/// Bearer token for the Content API, keyed by OAuth client id in the token
/// store.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessToken {
    pub access_token: String,

    #[serde(default = "default_token_type")]
    pub token_type: String,

    /// Lifetime in seconds, counted from `created`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<i64>,

    /// Unix timestamp (seconds) at which the token was issued
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
}

fn default_token_type() -> String {
    "Bearer".to_string()
}

impl AccessToken {
    /// Token issued at `created` that lives for `expires_in` seconds.
    pub fn issued_at(
        access_token: impl Into<String>,
        created: DateTime<Utc>,
        expires_in: i64,
    ) -> Self {
        Self {
            access_token: access_token.into(),
            token_type: default_token_type(),
            expires_in: Some(expires_in),
            created: Some(created.timestamp()),
            refresh_token: None,
            scope: None,
        }
    }

    /// Token without expiry metadata.
    pub fn bearer(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            token_type: default_token_type(),
            expires_in: None,
            created: None,
            refresh_token: None,
            scope: None,
        }
    }

    /// Parse the JSON document kept in the token store.
    pub fn from_json(raw: &str) -> serde_json::Result<Self> {
        serde_json::from_str(raw)
    }

    /// Whether the bearer string carries anything at all.
    pub fn is_empty(&self) -> bool {
        self.access_token.trim().is_empty()
    }

    /// Absolute expiry, when the token records one that fits in a
    /// `DateTime`.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        let created = Utc.timestamp_opt(self.created?, 0).single()?;
        created.checked_add_signed(Duration::try_seconds(self.expires_in?)?)
    }

    /// Expired tokens are those within the skew window of `expires_at`.
    ///
    /// Tokens without expiry metadata never expire. Metadata that cannot be
    /// turned into an instant counts as expired.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        if self.created.is_none() || self.expires_in.is_none() {
            return false;
        }

        self.expires_at()
            .and_then(|expires_at| {
                expires_at.checked_sub_signed(Duration::seconds(TOKEN_EXPIRY_SKEW_SECS))
            })
            .map_or(true, |deadline| deadline < now)
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessToken")
            .field("access_token", &"<redacted>")
            .field("token_type", &self.token_type)
            .field("expires_in", &self.expires_in)
            .field("created", &self.created)
            .field("has_refresh_token", &self.refresh_token.is_some())
            .finish()
    }
}
