// src/presentation/http/controllers/feed.rs
use crate::application::{
    ApplicationResult,
    feed::{FeedRequest, FeedView, render_feed},
};
use crate::domain::activity::{Activity, ActivityId, ActivityKind};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use axum::{Json, response::Html};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use utoipa::ToSchema;

/// Props the host UI passes to the activity feed.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FeedRenderRequest {
    #[serde(default)]
    pub activities: Vec<ActivityPayload>,
    #[serde(default)]
    pub loading: bool,
    /// Maximum rows to render. Defaults to 5.
    #[serde(default)]
    pub max_items: Option<usize>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ActivityPayload {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub actor: Option<String>,
}

impl TryFrom<ActivityPayload> for Activity {
    type Error = crate::domain::errors::DomainError;

    fn try_from(payload: ActivityPayload) -> Result<Self, Self::Error> {
        Ok(Activity::new(
            ActivityId::new(payload.id)?,
            ActivityKind::from(payload.kind),
            payload.description,
            payload.timestamp,
            payload.actor,
        ))
    }
}

impl FeedRenderRequest {
    fn into_feed_request(self) -> ApplicationResult<FeedRequest> {
        let activities = self
            .activities
            .into_iter()
            .map(Activity::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(FeedRequest {
            activities,
            loading: self.loading,
            max_items: self.max_items,
        })
    }
}

#[utoipa::path(
    post,
    path = "/api/v1/activity-feed",
    request_body = FeedRenderRequest,
    responses(
        (status = 200, description = "Rendered feed state.", body = FeedView),
        (status = 400, description = "Invalid activity record.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Activity"
)]
pub async fn render_activity_feed(
    Json(body): Json<FeedRenderRequest>,
) -> HttpResult<Json<FeedView>> {
    let request = body.into_feed_request().into_http()?;
    Ok(Json(render_feed(&request)))
}

#[utoipa::path(
    post,
    path = "/api/v1/activity-feed/html",
    request_body = FeedRenderRequest,
    responses(
        (status = 200, description = "Feed as an HTML fragment with data-testid locators.", body = String, content_type = "text/html"),
        (status = 400, description = "Invalid activity record.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Activity"
)]
pub async fn render_activity_feed_html(
    Json(body): Json<FeedRenderRequest>,
) -> HttpResult<Html<String>> {
    let request = body.into_feed_request().into_http()?;
    Ok(Html(render_feed(&request).to_html()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::DomainError;

    fn payload(id: &str) -> ActivityPayload {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "type": "assignment_created",
            "description": "Assigned Sato to Harbor Depot",
            "timestamp": "2024-03-01T09:30:00Z",
            "actor": "Admin"
        }))
        .unwrap()
    }

    #[test]
    fn host_payload_becomes_domain_activity() {
        let activity = Activity::try_from(payload("act-7")).unwrap();
        assert_eq!(activity.id.as_str(), "act-7");
        assert_eq!(activity.kind, ActivityKind::AssignmentCreated);
        assert_eq!(activity.actor(), Some("Admin"));
    }

    #[test]
    fn blank_id_never_reaches_the_domain() {
        let err = Activity::try_from(payload("  ")).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }
}
