// src/bin/check_store_connection.rs
use anyhow::Result;
use sitedesk_core::application::maintenance::ConnectionCheckService;
use sitedesk_core::config::MaintenanceConfig;
use sitedesk_core::infrastructure::rest::RestSiteStore;
use sitedesk_core::infrastructure::telemetry::{JOB_LOG_FILTER, init_tracing};
use std::sync::Arc;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let config = MaintenanceConfig::from_env()?;
    init_tracing(JOB_LOG_FILTER);

    println!("Checking store at {}", config.store().base_url());
    let store = Arc::new(RestSiteStore::from_config(config.store())?);
    match ConnectionCheckService::new(store).run().await {
        Ok(report) => print!("{report}"),
        Err(err) => eprintln!("connection check failed: {err}"),
    }
    Ok(())
}
