//! Token store adapters
//!
//! Read access for the adapter plus the write helpers a host needs after
//! completing the OAuth flow.

pub mod keychain;
pub mod session;

pub use keychain::KeychainTokenStore;
pub use session::SessionTokenStore;
