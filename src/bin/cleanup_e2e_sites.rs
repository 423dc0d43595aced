// src/bin/cleanup_e2e_sites.rs
//! Deletes sites left behind by E2E runs (names containing the marker).
use anyhow::Result;
use sitedesk_core::application::maintenance::SiteCleanupService;
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
    let service = SiteCleanupService::new(store);
    let plan = config.cleanup_plan();

    println!(
        "Cleaning up sites matching \"{}\" (delete mode: {})",
        plan.marker.pattern(),
        plan.mode
    );
    match service.run(plan).await {
        Ok(report) => print!("{report}"),
        // Remote failures end the job without a failing exit status.
        Err(err) => eprintln!("cleanup aborted: {err}"),
    }
    Ok(())
}
