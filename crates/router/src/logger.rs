//! Logging sub-system setup and macro re-exports, so call sites read
//! `logger::info!(...)` throughout the crate.

pub use tracing::{debug, error, info, warn};

use crate::configs::settings;

/// Initialize the tracing subscriber once at process start.
///
/// `RUST_LOG` wins over the configured level when set.
pub fn setup(conf: &settings::Log) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(conf.level.clone()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
