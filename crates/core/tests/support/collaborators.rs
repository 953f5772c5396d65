use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use shopfeed_core::{RequestLogger, RequestLoggerFactory, StoreConfigProvider, TokenStore};
use shopfeed_domain::{AccessToken, Result as DomainResult, ShopFeedError, StoreId};

/// In-memory store configuration keyed by `(store, key)`.
#[derive(Default)]
pub struct MockConfigProvider {
    values: HashMap<(String, String), String>,
    secrets: HashMap<String, String>,
    debug: HashSet<String>,
    lookups: AtomicUsize,
}

impl MockConfigProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store with client id, secret, merchant id `111` and account id `222`.
    pub fn with_store(self, store: &str) -> Self {
        self.with_value(store, "client_id", &format!("client-{store}.apps.googleusercontent.com"))
            .with_secret(store, "secret")
            .with_value(store, "merchant_id", "111")
            .with_value(store, "account_id", "222")
    }

    pub fn with_value(mut self, store: &str, key: &str, value: &str) -> Self {
        self.values.insert((store.to_string(), key.to_string()), value.to_string());
        self
    }

    pub fn without_value(mut self, store: &str, key: &str) -> Self {
        self.values.remove(&(store.to_string(), key.to_string()));
        self
    }

    pub fn with_secret(mut self, store: &str, secret: &str) -> Self {
        self.secrets.insert(store.to_string(), secret.to_string());
        self
    }

    pub fn without_secret(mut self, store: &str) -> Self {
        self.secrets.remove(store);
        self
    }

    pub fn with_debug(mut self, store: &str) -> Self {
        self.debug.insert(store.to_string());
        self
    }

    /// Number of client id / secret / debug lookups made so far.
    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

impl StoreConfigProvider for MockConfigProvider {
    fn config_value(&self, key: &str, store: &StoreId) -> Option<String> {
        if key == "client_id" {
            self.lookups.fetch_add(1, Ordering::SeqCst);
        }
        self.values.get(&(store.to_string(), key.to_string())).cloned()
    }

    fn client_secret(&self, store: &StoreId) -> Option<String> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.secrets.get(store.as_str()).cloned()
    }

    fn is_debug(&self, store: &StoreId) -> bool {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.debug.contains(store.as_str())
    }
}

/// Token store backed by a map, counting every lookup.
#[derive(Default)]
pub struct MockTokenStore {
    tokens: Mutex<HashMap<String, AccessToken>>,
    lookups: AtomicUsize,
    failure: Option<ShopFeedError>,
}

impl MockTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(self, client_id: &str, token: AccessToken) -> Self {
        self.tokens.lock().unwrap().insert(client_id.to_string(), token);
        self
    }

    pub fn failing(mut self, error: ShopFeedError) -> Self {
        self.failure = Some(error);
        self
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

impl TokenStore for MockTokenStore {
    fn access_token(&self, client_id: &str) -> DomainResult<Option<AccessToken>> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        if let Some(error) = &self.failure {
            return Err(error.clone());
        }
        Ok(self.tokens.lock().unwrap().get(client_id).cloned())
    }
}

/// Logger that remembers what it was asked to log.
#[derive(Default)]
pub struct RecordingLogger {
    pub store: String,
    pub requests: Mutex<Vec<String>>,
}

impl RequestLogger for RecordingLogger {
    fn log_request(&self, method: &str, url: &str, _body: Option<&str>) {
        self.requests.lock().unwrap().push(format!("{method} {url}"));
    }

    fn log_response(&self, _method: &str, _url: &str, _status: u16, _body: &str) {}
}

/// Logger factory counting how often a logger was handed out.
#[derive(Default)]
pub struct RecordingLoggerFactory {
    created_for: Mutex<Vec<String>>,
}

impl RecordingLoggerFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn created_for(&self) -> Vec<String> {
        self.created_for.lock().unwrap().clone()
    }
}

impl RequestLoggerFactory for RecordingLoggerFactory {
    fn for_store(&self, store: &StoreId) -> Arc<dyn RequestLogger> {
        self.created_for.lock().unwrap().push(store.to_string());
        Arc::new(RecordingLogger { store: store.to_string(), requests: Mutex::default() })
    }
}
