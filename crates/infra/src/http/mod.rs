//! HTTP transport shared by the remote integrations

pub mod client;

pub use client::{HttpClient, HttpClientBuilder};
