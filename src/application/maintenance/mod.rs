// src/application/maintenance/mod.rs
mod cleanup;
mod connection;
mod listing;

pub use cleanup::{CleanupOutcome, CleanupPlan, CleanupReport, DeleteMode, SiteCleanupService};
pub use connection::{ConnectionCheckService, ConnectionReport};
pub use listing::{RECENT_SITES_LIMIT, SiteListingReport, SiteListingService};

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::errors::DomainResult;
use crate::domain::site::SiteRow;
use std::fmt;

/// Remote call inside a maintenance job. Each stage runs only after the
/// previous one succeeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaintenanceStage {
    FetchMatching,
    Delete,
    Verify,
    FetchRecent,
    Probe,
}

impl MaintenanceStage {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FetchMatching => "fetch matching sites",
            Self::Delete => "delete sites",
            Self::Verify => "verify cleanup",
            Self::FetchRecent => "fetch recent sites",
            Self::Probe => "probe store",
        }
    }
}

impl fmt::Display for MaintenanceStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn write_rows(f: &mut fmt::Formatter<'_>, rows: &[SiteRow]) -> fmt::Result {
    for row in rows {
        writeln!(
            f,
            "  - {} (id: {}, created {})",
            row.name,
            row.id,
            row.created_at.format("%Y-%m-%d %H:%M:%S")
        )?;
    }
    Ok(())
}

fn checked<T>(stage: MaintenanceStage, result: DomainResult<T>) -> ApplicationResult<T> {
    result.map_err(|err| {
        tracing::error!(stage = %stage, error = %err, "maintenance stage failed");
        ApplicationError::stage(stage, err)
    })
}
