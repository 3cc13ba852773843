pub mod app;
pub mod config;
mod error;
pub mod model;
pub mod web;

pub use app::{serve, App, AppState};
pub use error::{Error, Result};

use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};

const DEFAULT_DBG_FILTER: &str = "clubhouse=debug,tower_http=debug";

/// Human readable, compact console logging used in debug builds.
/// Respects `RUST_LOG` and falls back to `DEFAULT_DBG_FILTER`.
pub fn init_dbg_tracing() {
    tracing_subscriber::fmt()
        .without_time()
        .with_span_events(FmtSpan::CLOSE)
        .with_target(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DBG_FILTER)),
        )
        .compact()
        .init();
}

/// JSON logging for release builds.
pub fn init_production_tracing() {
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}
