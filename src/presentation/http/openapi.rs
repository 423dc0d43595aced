// src/presentation/http/openapi.rs
use crate::application::feed::{FeedRow, FeedView};
use crate::presentation::http::controllers::feed::{ActivityPayload, FeedRenderRequest};
use crate::presentation::http::error::ErrorResponse;
use axum::{Json, Router, routing::get};
use serde::{Deserialize, Serialize};
use std::{fs::File, io::BufWriter, path::Path};
use utoipa::{OpenApi, ToSchema};

pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::feed::render_activity_feed,
        crate::presentation::http::controllers::feed::render_activity_feed_html,
        super::routes::health
    ),
    components(schemas(
        StatusResponse,
        ErrorResponse,
        FeedRenderRequest,
        ActivityPayload,
        FeedView,
        FeedRow
    )),
    tags(
        (name = "Activity", description = "Activity feed rendering"),
        (name = "System", description = "Service health")
    )
)]
pub struct ApiDoc;

#[must_use]
pub fn docs_router() -> Router {
    Router::new().route(OPENAPI_JSON_PATH, get(openapi_json))
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// # Errors
/// Fails when the file or its parent directory cannot be written.
pub fn write_openapi_snapshot(path: impl AsRef<Path>) -> anyhow::Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(writer, &ApiDoc::openapi())?;
    Ok(())
}
