// src/presentation/http/routes.rs
use crate::presentation::http::{
    controllers::feed,
    openapi::{self, StatusResponse},
};
use axum::{
    Router,
    http::Method,
    routing::{get, post},
};
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

#[must_use]
pub fn build_router() -> Router {
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(tower_http::cors::Any)
        .max_age(Duration::from_secs(3600));

    Router::new()
        .merge(openapi::docs_router())
        .route("/health", get(health))
        .route("/api/v1/activity-feed", post(feed::render_activity_feed))
        .route(
            "/api/v1/activity-feed/html",
            post(feed::render_activity_feed_html),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = crate::presentation::http::openapi::StatusResponse)
    ),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
