//! Lifecycle of the cached client/service handle pair

use serde::{Deserialize, Serialize};

use crate::impl_string_enum_conversions;

/// Where an adapter instance stands with its cached handles.
///
/// `Expired` is terminal: the instance never rebuilds its handles and every
/// further call asks for re-authorization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HandleState {
    #[default]
    Uninitialized,
    Ready,
    Expired,
}

impl_string_enum_conversions!(HandleState {
    Uninitialized => "uninitialized",
    Ready => "ready",
    Expired => "expired",
});
