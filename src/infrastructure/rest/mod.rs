// src/infrastructure/rest/mod.rs
mod client;
mod error;
mod query;
mod site_store;

pub use client::RestClient;
pub use error::{RestError, map_rest};
pub use query::{QueryParams, delete_batches, delete_params, filter_params, select_params};
pub use site_store::{DELETE_BATCH_SIZE, RestSiteStore, SITES_TABLE};
