// src/infrastructure/telemetry.rs
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub const SERVER_LOG_FILTER: &str = "info,tower_http=info,reqwest=warn";
pub const JOB_LOG_FILTER: &str = "warn,sitedesk_core=info";

/// Installs the global subscriber. `RUST_LOG` overrides `default_filter`.
pub fn init_tracing(default_filter: &str) {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| default_filter.to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}
