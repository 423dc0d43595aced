// src/bin/list_sites.rs
//! Prints the newest sites and every site carrying the E2E marker.
use anyhow::Result;
use sitedesk_core::application::maintenance::SiteListingService;
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

    let store = Arc::new(RestSiteStore::from_config(config.store())?);
    let service = SiteListingService::new(store);

    match service.run(config.marker().clone()).await {
        Ok(report) => print!("{report}"),
        Err(err) => eprintln!("listing aborted: {err}"),
    }
    Ok(())
}
