//! # shopfeed Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - Port/adapter interfaces (traits) for configuration, tokens and the
//!   remote products resource
//! - The client and service handles
//! - The shopping client adapter
//!
//! ## Architecture Principles
//! - Only depends on `shopfeed-domain`
//! - No HTTP, keychain or file access
//! - All external dependencies via traits

pub mod clock;
pub mod shopping;

pub use clock::{Clock, SystemClock};
pub use shopping::{
    ContentClient, ProductsApi, ReauthorizationTarget, RequestLogger, RequestLoggerFactory,
    ServiceFactory, ShoppingClientAdapter, ShoppingService, StoreConfigProvider, TokenStore,
};
