//! Telemetry initialization (tracing, fmt subscriber, etc.)
//!
//! Log verbosity is controlled through the standard `RUST_LOG` environment
//! variable and defaults to `info` when unset. For example:
//!
//! ```bash
//! RUST_LOG=katalog=debug,sqlx=warn katalog
//! ```

use tracing::info;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Initialize tracing with console output.
///
/// Fails if a global subscriber is already installed.
pub fn init_telemetry() -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()?;

    info!("Telemetry initialized");

    Ok(())
}
