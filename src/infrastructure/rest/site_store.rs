// src/infrastructure/rest/site_store.rs
use super::client::RestClient;
use super::error::{RestError, map_rest};
use super::query::{delete_batches, delete_params, select_params};
use crate::config::StoreConfig;
use crate::domain::errors::DomainResult;
use crate::domain::site::{SiteFilter, SiteQuery, SiteRow, SiteStore};
use async_trait::async_trait;

pub const SITES_TABLE: &str = "sites";
/// Identifiers per `in.(…)` delete request.
pub const DELETE_BATCH_SIZE: usize = 100;

#[derive(Clone)]
pub struct RestSiteStore {
    client: RestClient,
}

impl RestSiteStore {
    #[must_use]
    pub const fn new(client: RestClient) -> Self {
        Self { client }
    }

    /// # Errors
    /// See [`RestClient::new`].
    pub fn from_config(config: &StoreConfig) -> Result<Self, RestError> {
        Ok(Self::new(RestClient::new(config)?))
    }
}

#[async_trait]
impl SiteStore for RestSiteStore {
    async fn select(&self, query: &SiteQuery) -> DomainResult<Vec<SiteRow>> {
        let params = select_params(query).map_err(map_rest)?;
        self.client
            .select(SITES_TABLE, &params)
            .await
            .map_err(map_rest)
    }

    /// Id filters go out in batches of [`DELETE_BATCH_SIZE`]. A failing batch
    /// stops the rest; rows removed by earlier batches stay removed.
    async fn delete(&self, filter: &SiteFilter) -> DomainResult<Vec<SiteRow>> {
        let batches = delete_batches(filter, DELETE_BATCH_SIZE);
        let mut removed = Vec::new();
        for (index, batch) in batches.iter().enumerate() {
            let params = delete_params(batch).map_err(map_rest)?;
            tracing::debug!(batch = index + 1, of = batches.len(), "delete batch");
            let rows: Vec<SiteRow> = self
                .client
                .delete(SITES_TABLE, &params)
                .await
                .map_err(map_rest)?;
            removed.extend(rows);
        }
        Ok(removed)
    }
}
