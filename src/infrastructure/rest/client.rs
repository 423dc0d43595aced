// src/infrastructure/rest/client.rs
use super::error::RestError;
use super::query::{QueryParams, to_query_string};
use crate::config::StoreConfig;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderName, HeaderValue};
use serde::de::DeserializeOwned;
use tracing::instrument;

const REST_PATH: &str = "rest/v1";

/// Thin `PostgREST` client. Stateless per call: no retries, no caching.
#[derive(Clone)]
pub struct RestClient {
    http: reqwest::Client,
    base_url: String,
}

impl RestClient {
    /// # Errors
    /// Fails when the key is not a valid header value or the HTTP client
    /// cannot be built.
    pub fn new(config: &StoreConfig) -> Result<Self, RestError> {
        Self::with_builder(reqwest::Client::builder(), config)
    }

    /// Finishes `builder` with the store's credentials and timeout.
    ///
    /// # Errors
    /// Same as [`RestClient::new`].
    pub fn with_builder(
        builder: reqwest::ClientBuilder,
        config: &StoreConfig,
    ) -> Result<Self, RestError> {
        let mut headers = HeaderMap::new();
        let mut key = HeaderValue::from_str(config.anon_key())
            .map_err(|e| RestError::Request(format!("invalid api key header: {e}")))?;
        key.set_sensitive(true);
        let mut bearer = HeaderValue::from_str(&format!("Bearer {}", config.anon_key()))
            .map_err(|e| RestError::Request(format!("invalid auth header: {e}")))?;
        bearer.set_sensitive(true);
        headers.insert(HeaderName::from_static("apikey"), key);
        headers.insert(AUTHORIZATION, bearer);

        let http = builder
            .default_headers(headers)
            .timeout(config.timeout())
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url().to_string(),
        })
    }

    /// # Errors
    /// Returns [`RestError::Request`] when the parameters cannot be encoded.
    pub fn table_url(&self, table: &str, params: &QueryParams) -> Result<String, RestError> {
        let mut url = format!("{}/{REST_PATH}/{table}", self.base_url);
        if !params.is_empty() {
            url.push('?');
            url.push_str(&to_query_string(params)?);
        }
        Ok(url)
    }

    /// # Errors
    /// Transport failures, non-2xx answers and undecodable bodies.
    #[instrument(name = "rest_select", skip(self, params))]
    pub async fn select<T: DeserializeOwned>(
        &self,
        table: &str,
        params: &QueryParams,
    ) -> Result<Vec<T>, RestError> {
        let url = self.table_url(table, params)?;
        tracing::debug!(%url, "select");
        let response = self.http.get(&url).send().await?;
        decode_rows(response).await
    }

    /// Filtered delete. Asks the store to echo the removed rows back.
    ///
    /// # Errors
    /// Same as [`RestClient::select`].
    #[instrument(name = "rest_delete", skip(self, params))]
    pub async fn delete<T: DeserializeOwned>(
        &self,
        table: &str,
        params: &QueryParams,
    ) -> Result<Vec<T>, RestError> {
        let url = self.table_url(table, params)?;
        tracing::debug!(%url, "delete");
        let response = self
            .http
            .delete(&url)
            .header(HeaderName::from_static("prefer"), "return=representation")
            .send()
            .await?;
        decode_rows(response).await
    }
}

async fn decode_rows<T: DeserializeOwned>(response: reqwest::Response) -> Result<Vec<T>, RestError> {
    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        return Err(RestError::from_response_body(status.as_u16(), &body));
    }
    if body.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str(&body).map_err(|e| RestError::Decode(e.to_string()))
}
