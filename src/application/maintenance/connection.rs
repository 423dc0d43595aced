// src/application/maintenance/connection.rs
use super::{MaintenanceStage, checked};
use crate::application::error::ApplicationResult;
use crate::domain::site::{SiteFilter, SiteQuery, SiteRow, SiteStore};
use std::{fmt, sync::Arc};

#[derive(Debug, Clone)]
pub struct ConnectionReport {
    pub newest: Option<SiteRow>,
}

impl ConnectionReport {
    #[must_use]
    pub const fn table_has_rows(&self) -> bool {
        self.newest.is_some()
    }
}

impl fmt::Display for ConnectionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Connection OK: the sites table answered.")?;
        let Some(row) = &self.newest else {
            return writeln!(f, "The sites table is empty.");
        };
        writeln!(
            f,
            "Newest site: {} (id: {}, created {})",
            row.name,
            row.id,
            row.created_at.format("%Y-%m-%d %H:%M:%S")
        )
    }
}

/// Smoke test for the store credentials: one bounded read, no mutation.
pub struct ConnectionCheckService {
    store: Arc<dyn SiteStore>,
}

impl ConnectionCheckService {
    #[must_use]
    pub const fn new(store: Arc<dyn SiteStore>) -> Self {
        Self { store }
    }

    /// # Errors
    /// Fails with the `Probe` stage when the store does not answer.
    pub async fn run(&self) -> ApplicationResult<ConnectionReport> {
        let probe = SiteQuery::new(SiteFilter::All).newest_first().limit(1);
        let rows = checked(MaintenanceStage::Probe, self.store.select(&probe).await)?;
        Ok(ConnectionReport {
            newest: rows.into_iter().next(),
        })
    }
}
