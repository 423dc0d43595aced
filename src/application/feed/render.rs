// src/application/feed/render.rs
use super::view::{
    DEFAULT_MAX_ITEMS, EMPTY_MESSAGE, FEED_TITLE, FeedRow, FeedView, PERFORMED_BY_PREFIX,
    SKELETON_ROWS, subheader_for,
};
use crate::domain::activity::Activity;
use chrono::{DateTime, Utc};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Inputs of one rendering pass. `activities` is expected most-recent-first;
/// the renderer keeps the caller's order.
#[derive(Debug, Clone, Default)]
pub struct FeedRequest {
    pub activities: Vec<Activity>,
    pub loading: bool,
    pub max_items: Option<usize>,
}

impl FeedRequest {
    #[must_use]
    pub fn new(activities: Vec<Activity>) -> Self {
        Self {
            activities,
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    #[must_use]
    pub const fn max_items(mut self, max_items: usize) -> Self {
        self.max_items = Some(max_items);
        self
    }
}

#[must_use]
pub fn render_feed(request: &FeedRequest) -> FeedView {
    if request.loading {
        return FeedView::Loading {
            title: FEED_TITLE.to_string(),
            placeholders: SKELETON_ROWS,
        };
    }

    if request.activities.is_empty() {
        return FeedView::Empty {
            title: FEED_TITLE.to_string(),
            message: EMPTY_MESSAGE.to_string(),
        };
    }

    let cap = request.max_items.unwrap_or(DEFAULT_MAX_ITEMS);
    let rows: Vec<FeedRow> = request.activities.iter().take(cap).map(render_row).collect();

    FeedView::Populated {
        title: FEED_TITLE.to_string(),
        subheader: subheader_for(rows.len()),
        rows,
    }
}

#[must_use]
pub fn render_row(activity: &Activity) -> FeedRow {
    FeedRow {
        id: activity.id.to_string(),
        label: activity.kind.label().to_string(),
        description: activity.description.clone(),
        timestamp: format_timestamp(&activity.timestamp),
        performed_by: activity
            .actor()
            .map(|actor| format!("{PERFORMED_BY_PREFIX}{actor}")),
    }
}

#[must_use]
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.format(TIMESTAMP_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::activity::{ActivityId, ActivityKind};
    use chrono::TimeZone;

    fn activity(id: &str, kind: &str, actor: Option<&str>) -> Activity {
        Activity::new(
            ActivityId::new(id).unwrap(),
            ActivityKind::from(kind),
            format!("description {id}"),
            Utc.with_ymd_and_hms(2024, 3, 1, 9, 5, 0).unwrap(),
            actor.map(str::to_string),
        )
    }

    #[test]
    fn timestamp_is_minute_precision_utc() {
        let ts = Utc.with_ymd_and_hms(2024, 3, 1, 9, 5, 59).unwrap();
        assert_eq!(format_timestamp(&ts), "2024-03-01 09:05");
    }

    #[test]
    fn default_cap_is_five() {
        let activities = (0..8)
            .map(|i| activity(&i.to_string(), "site_updated", None))
            .collect();
        let view = render_feed(&FeedRequest::new(activities));
        assert_eq!(view.rows().len(), DEFAULT_MAX_ITEMS);
        assert_eq!(view.subheader(), Some("5 recent updates"));
    }

    #[test]
    fn single_row_uses_singular_subheader() {
        let view = render_feed(&FeedRequest::new(vec![activity("1", "site_created", None)]));
        assert_eq!(view.subheader(), Some("1 recent update"));
    }

    #[test]
    fn row_attributes_actor_only_when_present() {
        let with_actor = render_row(&activity("1", "employee_created", Some("Tanaka")));
        assert_eq!(with_actor.performed_by.as_deref(), Some("performed by: Tanaka"));

        let without_actor = render_row(&activity("2", "employee_created", None));
        assert_eq!(without_actor.performed_by, None);
    }
}
