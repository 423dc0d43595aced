// src/application/maintenance/listing.rs
use super::{MaintenanceStage, checked, write_rows};
use crate::application::error::ApplicationResult;
use crate::domain::site::{SiteFilter, SiteMarker, SiteQuery, SiteRow, SiteStore};
use std::{fmt, sync::Arc};

pub const RECENT_SITES_LIMIT: usize = 10;

#[derive(Debug, Clone)]
pub struct SiteListingReport {
    pub marker: SiteMarker,
    /// Newest sites first, at most [`RECENT_SITES_LIMIT`].
    pub recent: Vec<SiteRow>,
    pub marked: Vec<SiteRow>,
}

impl fmt::Display for SiteListingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Most recent sites ({}):", self.recent.len())?;
        write_rows(f, &self.recent)?;
        writeln!(
            f,
            "Sites matching \"{}\" ({}):",
            self.marker.pattern(),
            self.marked.len()
        )?;
        write_rows(f, &self.marked)
    }
}

/// Read-only report of the `sites` table.
pub struct SiteListingService {
    store: Arc<dyn SiteStore>,
}

impl SiteListingService {
    #[must_use]
    pub const fn new(store: Arc<dyn SiteStore>) -> Self {
        Self { store }
    }

    /// # Errors
    /// Fails with the stage of the first read that failed; the second read
    /// is skipped when the first one fails.
    #[tracing::instrument(name = "site_listing", skip(self, marker), fields(marker = %marker))]
    pub async fn run(&self, marker: SiteMarker) -> ApplicationResult<SiteListingReport> {
        let recent_query = SiteQuery::new(SiteFilter::All)
            .newest_first()
            .limit(RECENT_SITES_LIMIT);
        let recent = checked(
            MaintenanceStage::FetchRecent,
            self.store.select(&recent_query).await,
        )?;
        tracing::debug!(count = recent.len(), "fetched recent sites");

        let marked_query = SiteQuery::new(SiteFilter::NameContains(marker.clone())).newest_first();
        let marked = checked(
            MaintenanceStage::FetchMatching,
            self.store.select(&marked_query).await,
        )?;
        tracing::debug!(count = marked.len(), "fetched marked sites");

        Ok(SiteListingReport {
            marker,
            recent,
            marked,
        })
    }
}
