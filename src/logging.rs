//! Logging setup.
//!
//! Diagnostics go to stderr so stdout only ever carries the road status line.
//! The default filter is quiet; set `RUST_LOG=road_status=debug` to see the
//! requests being made and why a lookup failed.

use std::io;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_FILTER: &str = "road_status=warn";

/// Installs the global subscriber. Fails if one is already installed.
pub fn init_logging() -> Result<(), tracing_subscriber::util::TryInitError> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_target(true)
                .with_level(true),
        )
        .try_init()
}
