//! Fleetbook ties together the fleet bookkeeping workspace: domain models,
//! business services, JSON persistence, configuration, and AI insights.

pub use fleetbook_config as config;
pub use fleetbook_core as services;
pub use fleetbook_domain as domain;
pub use fleetbook_insights as insights;
pub use fleetbook_storage_json as storage;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes the global tracing subscriber with sensible defaults and
/// emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter =
            EnvFilter::from_default_env().add_directive("fleetbook=info".parse().unwrap());

        fmt().with_env_filter(filter).init();
        tracing::info!("Fleetbook tracing initialized.");
    });
}
