// src/infrastructure/rest/query.rs
//! Encoding of site queries into `PostgREST` query parameters.
use super::error::RestError;
use crate::domain::site::{SiteFilter, SiteId, SiteOrder, SiteQuery};

pub type QueryParams = Vec<(String, String)>;

/// # Errors
/// Propagates [`filter_params`] failures.
pub fn select_params(query: &SiteQuery) -> Result<QueryParams, RestError> {
    let mut params = vec![("select".to_string(), "*".to_string())];
    params.extend(filter_params(&query.filter)?);
    if let Some(order) = query.order {
        params.push(("order".to_string(), order_param(order).to_string()));
    }
    if let Some(limit) = query.limit {
        params.push(("limit".to_string(), limit.to_string()));
    }
    Ok(params)
}

/// # Errors
/// Rejects filters that would delete every row or carry no ids.
pub fn delete_params(filter: &SiteFilter) -> Result<QueryParams, RestError> {
    let params = filter_params(filter)?;
    if params.is_empty() {
        // PostgREST refuses unfiltered deletes; fail before the round trip.
        return Err(RestError::Request("refusing to delete without a filter".into()));
    }
    Ok(params)
}

/// Splits an id filter into chunks of at most `batch_size` identifiers so
/// each `in.(…)` list stays short enough for the request line. Other filters
/// pass through unchanged.
#[must_use]
pub fn delete_batches(filter: &SiteFilter, batch_size: usize) -> Vec<SiteFilter> {
    match filter {
        SiteFilter::IdIn(ids) if ids.len() > batch_size.max(1) => ids
            .chunks(batch_size.max(1))
            .map(|chunk| SiteFilter::IdIn(chunk.to_vec()))
            .collect(),
        other => vec![other.clone()],
    }
}

/// # Errors
/// Rejects an id filter without identifiers.
pub fn filter_params(filter: &SiteFilter) -> Result<QueryParams, RestError> {
    match filter {
        SiteFilter::All => Ok(Vec::new()),
        SiteFilter::NameContains(marker) => {
            Ok(vec![("name".to_string(), format!("ilike.{}", marker.pattern()))])
        }
        SiteFilter::IdIn(ids) => {
            if ids.is_empty() {
                return Err(RestError::Request("id filter needs at least one id".into()));
            }
            let list = ids.iter().map(quote_id).collect::<Vec<_>>().join(",");
            Ok(vec![("id".to_string(), format!("in.({list})"))])
        }
    }
}

/// # Errors
/// Returns [`RestError::Request`] when a pair cannot be encoded.
pub fn to_query_string(params: &QueryParams) -> Result<String, RestError> {
    serde_urlencoded::to_string(params).map_err(|e| RestError::Request(e.to_string()))
}

fn order_param(order: SiteOrder) -> &'static str {
    match order {
        SiteOrder::NewestFirst => "created_at.desc",
    }
}

fn quote_id(id: &SiteId) -> String {
    match id {
        SiteId::Number(n) => n.to_string(),
        SiteId::Text(s) => format!("\"{}\"", s.replace('\\', "\\\\").replace('"', "\\\"")),
    }
}
