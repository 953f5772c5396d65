//! # shopfeed Infrastructure
//!
//! Infrastructure implementations of core ports.
//!
//! This crate contains:
//! - The HTTP Content API products resource and service factory
//! - Configuration loading and the store-scoped config provider
//! - Session and keychain token stores
//! - Tracing bootstrap and request capture
//!
//! ## Architecture
//! - Implements traits defined in `shopfeed-core`
//! - Contains all "impure" code (HTTP, keychain, files, environment)

pub mod auth;
pub mod config;
pub mod errors;
pub mod http;
pub mod integrations;
pub mod observability;

// Re-export commonly used items
pub use auth::{KeychainTokenStore, SessionTokenStore};
pub use config::StaticConfigProvider;
pub use errors::InfraError;
pub use http::{HttpClient, HttpClientBuilder};
pub use integrations::google_shopping::{
    build_adapter, ContentApiProducts, ContentApiServiceFactory, TracingRequestLogger,
    TracingRequestLoggerFactory,
};
pub use observability::{init_tracing, LogFormat};
