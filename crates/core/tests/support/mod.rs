//! Shared test helpers for `shopfeed-core` integration tests.
//!
//! Hand-written in-memory collaborators so adapter tests can focus on
//! behaviour instead of wiring.

#![allow(dead_code)]

pub mod clock;
pub mod collaborators;
pub mod products;
