//! Debug request capture through `tracing`

use std::sync::Arc;

use shopfeed_core::{RequestLogger, RequestLoggerFactory};
use shopfeed_domain::StoreId;
use tracing::debug;

/// Bodies longer than this are cut before logging.
pub const DEFAULT_MAX_BODY_CHARS: usize = 2048;

/// Request logger that emits one `debug` event per request and response on
/// the `shopfeed::requests` target, tagged with the store id.
#[derive(Debug, Clone)]
pub struct TracingRequestLogger {
    store_id: StoreId,
    max_body_chars: usize,
}

impl TracingRequestLogger {
    pub fn new(store_id: StoreId) -> Self {
        Self { store_id, max_body_chars: DEFAULT_MAX_BODY_CHARS }
    }

    pub fn with_max_body_chars(mut self, max: usize) -> Self {
        self.max_body_chars = max;
        self
    }

    pub fn store_id(&self) -> &StoreId {
        &self.store_id
    }
}

impl RequestLogger for TracingRequestLogger {
    fn log_request(&self, method: &str, url: &str, body: Option<&str>) {
        debug!(
            target: "shopfeed::requests",
            store_id = %self.store_id,
            method,
            url,
            body = %truncate(body.unwrap_or_default(), self.max_body_chars),
            "Content API request"
        );
    }

    fn log_response(&self, method: &str, url: &str, status: u16, body: &str) {
        debug!(
            target: "shopfeed::requests",
            store_id = %self.store_id,
            method,
            url,
            status,
            body = %truncate(body, self.max_body_chars),
            "Content API response"
        );
    }
}

/// Hands out [`TracingRequestLogger`]s.
#[derive(Debug, Clone)]
pub struct TracingRequestLoggerFactory {
    max_body_chars: usize,
}

impl TracingRequestLoggerFactory {
    pub fn new() -> Self {
        Self { max_body_chars: DEFAULT_MAX_BODY_CHARS }
    }

    pub fn with_max_body_chars(mut self, max: usize) -> Self {
        self.max_body_chars = max;
        self
    }
}

impl Default for TracingRequestLoggerFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl RequestLoggerFactory for TracingRequestLoggerFactory {
    fn for_store(&self, store: &StoreId) -> Arc<dyn RequestLogger> {
        Arc::new(TracingRequestLogger::new(store.clone()).with_max_body_chars(self.max_body_chars))
    }
}

/// Cut `body` to at most `max` characters, marking the cut.
fn truncate(body: &str, max: usize) -> String {
    match body.char_indices().nth(max) {
        Some((idx, _)) => format!("{}… ({} bytes total)", &body[..idx], body.len()),
        None => body.to_string(),
    }
}
