use super::entity::SiteRow;
use super::filter::{SiteFilter, SiteQuery};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

/// Narrow view of the hosted `sites` table used by the maintenance jobs.
#[async_trait]
pub trait SiteStore: Send + Sync {
    /// Every row matching the query. No pagination.
    async fn select(&self, query: &SiteQuery) -> DomainResult<Vec<SiteRow>>;

    /// Removes the rows matching `filter` and returns what was actually removed.
    async fn delete(&self, filter: &SiteFilter) -> DomainResult<Vec<SiteRow>>;
}
