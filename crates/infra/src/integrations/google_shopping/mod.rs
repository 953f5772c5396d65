//! Google Shopping Content API adapters
//!
//! - [`ContentApiProducts`]: REST implementation of the `products` resource
//! - [`ContentApiServiceFactory`]: builds service handles around it
//! - [`TracingRequestLogger`]: debug capture of outbound calls
//!
//! [`build_adapter`] wires these together with a config provider and a token
//! store.

pub mod factory;
pub mod logger;
pub mod products;

use std::sync::Arc;

use shopfeed_core::{ShoppingClientAdapter, TokenStore};
use shopfeed_domain::{Result, ShopFeedConfig};

pub use factory::ContentApiServiceFactory;
pub use logger::{TracingRequestLogger, TracingRequestLoggerFactory};
pub use products::ContentApiProducts;

use crate::config::StaticConfigProvider;

/// Adapter backed by the HTTP Content API, configured from `config` and
/// reading tokens from `tokens`.
pub fn build_adapter(
    config: ShopFeedConfig,
    tokens: Arc<dyn TokenStore>,
) -> Result<ShoppingClientAdapter> {
    let services = ContentApiServiceFactory::from_config(&config.content_api)?;
    let provider = StaticConfigProvider::new(config);
    let reauthorize = provider.reauthorization_target()?;

    Ok(ShoppingClientAdapter::new(
        Arc::new(provider),
        tokens,
        Arc::new(services),
        Arc::new(TracingRequestLoggerFactory::new()),
        reauthorize,
    ))
}
