//! Typed service handle wrapping the products resource

use std::fmt;
use std::sync::Arc;

use super::client::ContentClient;
use super::ports::ProductsApi;

/// Service handle derived from a [`ContentClient`].
///
/// Cloning is cheap; clones share the client and the products resource.
#[derive(Clone)]
pub struct ShoppingService {
    client: Arc<ContentClient>,
    products: Arc<dyn ProductsApi>,
}

impl ShoppingService {
    pub fn new(client: Arc<ContentClient>, products: Arc<dyn ProductsApi>) -> Self {
        Self { client, products }
    }

    /// Client this service authenticates with
    pub fn client(&self) -> &Arc<ContentClient> {
        &self.client
    }

    /// The `products` resource
    pub fn products(&self) -> &dyn ProductsApi {
        self.products.as_ref()
    }
}

impl fmt::Debug for ShoppingService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShoppingService").field("client", &self.client).finish_non_exhaustive()
    }
}
