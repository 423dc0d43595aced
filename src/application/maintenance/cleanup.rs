// src/application/maintenance/cleanup.rs
use super::{MaintenanceStage, checked, write_rows};
use crate::application::error::ApplicationResult;
use crate::domain::site::{SiteFilter, SiteMarker, SiteQuery, SiteRow, SiteStore};
use std::{fmt, str::FromStr, sync::Arc};

/// How the cleanup job selects rows to delete after the initial read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeleteMode {
    /// Delete exactly the identifiers returned by the read. Rows inserted
    /// after the read survive.
    #[default]
    ByIds,
    /// Re-evaluate the name pattern on the server at delete time. Anything
    /// matching at that moment is removed, including rows the read never saw.
    ByPredicate,
}

impl DeleteMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ByIds => "ids",
            Self::ByPredicate => "predicate",
        }
    }
}

impl fmt::Display for DeleteMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeleteMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ids" | "by_ids" => Ok(Self::ByIds),
            "predicate" | "by_predicate" => Ok(Self::ByPredicate),
            other => Err(format!("unknown delete mode '{other}'")),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CleanupPlan {
    pub marker: SiteMarker,
    pub mode: DeleteMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CleanupOutcome {
    NothingToDelete,
    Cleaned,
    /// Verification still found this many matching rows.
    Remaining(usize),
}

#[derive(Debug, Clone)]
pub struct CleanupReport {
    pub marker: SiteMarker,
    pub mode: DeleteMode,
    pub matched: Vec<SiteRow>,
    pub deleted: Vec<SiteRow>,
    pub outcome: CleanupOutcome,
}

impl CleanupReport {
    #[must_use]
    pub const fn is_clean(&self) -> bool {
        !matches!(self.outcome, CleanupOutcome::Remaining(_))
    }
}

impl fmt::Display for CleanupReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pattern = self.marker.pattern();
        if self.outcome == CleanupOutcome::NothingToDelete {
            return writeln!(f, "No sites matching \"{pattern}\" found. Nothing to clean up.");
        }

        writeln!(f, "Found {} site(s) matching \"{pattern}\":", self.matched.len())?;
        write_rows(f, &self.matched)?;
        writeln!(
            f,
            "Deleted {} site(s) (delete mode: {}).",
            self.deleted.len(),
            self.mode
        )?;
        if self.deleted.len() != self.matched.len() {
            writeln!(
                f,
                "Note: the store removed {} row(s) but {} were listed before the delete.",
                self.deleted.len(),
                self.matched.len()
            )?;
        }
        if let CleanupOutcome::Remaining(count) = self.outcome {
            writeln!(
                f,
                "Warning: {count} site(s) matching \"{pattern}\" are still present."
            )
        } else {
            writeln!(f, "Verification passed: no sites matching \"{pattern}\" remain.")
        }
    }
}

/// Removes disposable E2E sites: read, delete, then verify.
pub struct SiteCleanupService {
    store: Arc<dyn SiteStore>,
}

impl SiteCleanupService {
    #[must_use]
    pub const fn new(store: Arc<dyn SiteStore>) -> Self {
        Self { store }
    }

    /// # Errors
    /// Fails with `ApplicationError::Maintenance` naming the first remote call
    /// that failed. Later stages are skipped.
    #[tracing::instrument(name = "site_cleanup", skip(self, plan), fields(marker = %plan.marker, mode = %plan.mode))]
    pub async fn run(&self, plan: CleanupPlan) -> ApplicationResult<CleanupReport> {
        let CleanupPlan { marker, mode } = plan;
        let matching = SiteQuery::new(SiteFilter::NameContains(marker.clone())).newest_first();

        let matched = checked(
            MaintenanceStage::FetchMatching,
            self.store.select(&matching).await,
        )?;
        tracing::info!(count = matched.len(), "matched sites for cleanup");

        if matched.is_empty() {
            return Ok(CleanupReport {
                marker,
                mode,
                matched,
                deleted: Vec::new(),
                outcome: CleanupOutcome::NothingToDelete,
            });
        }

        let delete_filter = match mode {
            DeleteMode::ByIds => SiteFilter::ids_of(&matched),
            DeleteMode::ByPredicate => matching.filter.clone(),
        };
        let deleted = checked(MaintenanceStage::Delete, self.store.delete(&delete_filter).await)?;
        if deleted.len() != matched.len() {
            tracing::warn!(
                matched = matched.len(),
                deleted = deleted.len(),
                "deleted row count differs from the rows read"
            );
        }

        let remaining = checked(MaintenanceStage::Verify, self.store.select(&matching).await)?;
        let outcome = if remaining.is_empty() {
            CleanupOutcome::Cleaned
        } else {
            tracing::warn!(
                remaining = remaining.len(),
                "sites matching marker remain after cleanup"
            );
            CleanupOutcome::Remaining(remaining.len())
        };

        Ok(CleanupReport {
            marker,
            mode,
            matched,
            deleted,
            outcome,
        })
    }
}
