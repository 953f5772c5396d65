//! Tracing subscriber bootstrap
//!
//! Hosts call [`init_tracing`] once at startup. `RUST_LOG` controls the
//! filter; outbound request capture for debug stores is emitted on the
//! `shopfeed::requests` target at `debug` level.

use std::io;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable lines for development
    #[default]
    Pretty,
    /// One JSON object per event for log aggregation
    Json,
}

impl LogFormat {
    /// `SHOPFEED_LOG_FORMAT=json` selects JSON, anything else pretty output.
    pub fn from_env() -> Self {
        match std::env::var("SHOPFEED_LOG_FORMAT").unwrap_or_default().to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Pretty,
        }
    }
}

/// Install the global subscriber.
///
/// `default_filter` applies when `RUST_LOG` is unset. Returns `false` when a
/// global subscriber was already installed.
pub fn init_tracing(format: LogFormat, default_filter: &str) -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let registry = tracing_subscriber::registry().with(filter);

    let result = match format {
        LogFormat::Pretty => {
            registry.with(fmt::layer().with_target(true).with_writer(io::stderr)).try_init()
        }
        LogFormat::Json => registry
            .with(fmt::layer().json().with_current_span(true).with_writer(io::stderr))
            .try_init(),
    };

    result.is_ok()
}
