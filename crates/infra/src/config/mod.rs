//! Configuration loading and management
//!
//! This module provides utilities for loading the shopfeed configuration
//! from environment variables and files, and a store-scoped provider over
//! the loaded document.

pub mod loader;
pub mod provider;

// Re-export commonly used items
pub use loader::{load, load_from_env, load_from_file, probe_config_paths};
pub use provider::StaticConfigProvider;
