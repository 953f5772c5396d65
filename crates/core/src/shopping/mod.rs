//! Google Shopping Content API integration: ports, handles and the adapter

pub mod adapter;
pub mod client;
pub mod ports;
pub mod reauthorize;
pub mod service;

pub use adapter::ShoppingClientAdapter;
pub use client::ContentClient;
pub use ports::{
    ProductsApi, RequestLogger, RequestLoggerFactory, ServiceFactory, StoreConfigProvider,
    TokenStore,
};
pub use reauthorize::ReauthorizationTarget;
pub use service::ShoppingService;
