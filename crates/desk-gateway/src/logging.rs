//! Logging and tracing setup

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber
///
/// Honors `RUST_LOG`; without it, gateway crates log at debug and everything
/// else at info.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new("info,desk_gateway=debug,desk_breeze=debug,desk_genai=debug")
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();
}
