//! External service integrations

pub mod google_shopping;
