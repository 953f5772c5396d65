//! Configuration loader
//!
//! Loads the shopfeed configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If incomplete, falls back to loading from file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! Environment loading fills the `default` store section only.
//! - `SHOPFEED_REAUTHORIZE_URL`: OAuth entry point users are redirected to
//! - `SHOPFEED_CLIENT_ID`: OAuth client id
//! - `SHOPFEED_CLIENT_SECRET`: OAuth client secret
//! - `SHOPFEED_MERCHANT_ID`: Merchant id used for listing (optional)
//! - `SHOPFEED_ACCOUNT_ID`: Merchant id used for single products (optional)
//! - `SHOPFEED_DEBUG`: Capture outbound requests (true/false, optional)
//! - `SHOPFEED_CONTENT_API_BASE_URL`: Content API root (optional)
//! - `SHOPFEED_HTTP_TIMEOUT_SECS`: HTTP timeout in seconds (optional)
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./config.json` or `./config.toml` (current working directory)
//! 2. `./shopfeed.json` or `./shopfeed.toml` (current working directory)
//! 3. `../config.json` or `../config.toml` (parent directory)
//! 4. `../../config.json` or `../../config.toml` (grandparent directory)
//! 5. Relative to executable location

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use shopfeed_domain::config::DEFAULT_STORE_SCOPE;
use shopfeed_domain::{
    ContentApiConfig, OAuthRedirectConfig, Result, ShopFeedConfig, ShopFeedError, StoreConfig,
};

/// Load configuration with automatic fallback strategy
///
/// First attempts to load from environment variables. If any required
/// variables are missing, falls back to loading from a config file.
///
/// # Errors
/// Returns `ShopFeedError::Config` if:
/// - Configuration cannot be loaded from either source
/// - File format is invalid
/// - Required fields are missing
pub fn load() -> Result<ShopFeedConfig> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Failed to load from environment, trying file");
            load_from_file(None)
        }
    }
}

/// Load configuration from environment variables
///
/// # Errors
/// Returns `ShopFeedError::Config` if required variables are missing
/// or have invalid values.
pub fn load_from_env() -> Result<ShopFeedConfig> {
    let reauthorize_url = env_var("SHOPFEED_REAUTHORIZE_URL")?;
    let client_id = env_var("SHOPFEED_CLIENT_ID")?;
    let client_secret = env_var("SHOPFEED_CLIENT_SECRET")?;

    let mut content_api = ContentApiConfig::default();
    if let Ok(base_url) = std::env::var("SHOPFEED_CONTENT_API_BASE_URL") {
        content_api.base_url = base_url;
    }
    if let Ok(timeout) = std::env::var("SHOPFEED_HTTP_TIMEOUT_SECS") {
        content_api.timeout_seconds = timeout
            .parse::<u64>()
            .map_err(|e| ShopFeedError::Config(format!("Invalid HTTP timeout: {}", e)))?;
    }

    let default_store = StoreConfig {
        client_id: Some(client_id),
        client_secret: Some(client_secret),
        client_secret_env: None,
        merchant_id: std::env::var("SHOPFEED_MERCHANT_ID").ok(),
        account_id: std::env::var("SHOPFEED_ACCOUNT_ID").ok(),
        debug: Some(env_bool("SHOPFEED_DEBUG", false)),
    };

    Ok(ShopFeedConfig {
        content_api,
        oauth: OAuthRedirectConfig { reauthorize_url },
        stores: BTreeMap::from([(DEFAULT_STORE_SCOPE.to_string(), default_store)]),
    })
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `ShopFeedError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
/// - Required fields are missing
pub fn load_from_file(path: Option<PathBuf>) -> Result<ShopFeedConfig> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(ShopFeedError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            ShopFeedError::Config(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| ShopFeedError::Config(format!("Failed to read config file: {}", e)))?;

    parse_config(&contents, &config_path)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<ShopFeedConfig> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| ShopFeedError::Config(format!("Invalid TOML format: {}", e))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| ShopFeedError::Config(format!("Invalid JSON format: {}", e))),
        _ => Err(ShopFeedError::Config(format!("Unsupported config format: {}", extension))),
    }
}

/// Probe multiple paths for configuration files
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        candidates.extend(candidate_files(&cwd));
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            candidates.extend(candidate_files(exe_dir));
        }
    }

    candidates.into_iter().find(|path| path.exists())
}

fn candidate_files(dir: &Path) -> Vec<PathBuf> {
    vec![
        dir.join("config.json"),
        dir.join("config.toml"),
        dir.join("shopfeed.json"),
        dir.join("shopfeed.toml"),
        dir.join("../config.json"),
        dir.join("../config.toml"),
        dir.join("../../config.json"),
        dir.join("../../config.toml"),
    ]
}

/// Get required environment variable
///
/// # Errors
/// Returns `ShopFeedError::Config` if the variable is not set.
fn env_var(key: &str) -> Result<String> {
    std::env::var(key).map_err(|_| {
        ShopFeedError::Config(format!("Missing required environment variable: {}", key))
    })
}

/// Parse boolean from environment variable
///
/// Accepts: `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive)
fn env_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .ok()
        .map(|s| matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(default)
}
