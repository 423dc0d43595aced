// src/application/feed/view.rs
use serde::Serialize;
use utoipa::ToSchema;

pub const FEED_TITLE: &str = "Recent activity";
pub const EMPTY_MESSAGE: &str = "No recent activity";
pub const PERFORMED_BY_PREFIX: &str = "performed by: ";
pub const DEFAULT_MAX_ITEMS: usize = 5;
/// Placeholder rows shown while loading, independent of the data.
pub const SKELETON_ROWS: usize = 3;

/// Rendered state of the activity feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum FeedView {
    Loading { title: String, placeholders: usize },
    Empty { title: String, message: String },
    Populated {
        title: String,
        subheader: String,
        rows: Vec<FeedRow>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FeedRow {
    pub id: String,
    pub label: String,
    pub description: String,
    pub timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performed_by: Option<String>,
}

impl FeedView {
    #[must_use]
    pub fn title(&self) -> &str {
        match self {
            Self::Loading { title, .. } | Self::Empty { title, .. } | Self::Populated { title, .. } => {
                title
            }
        }
    }

    /// Rows carrying activity content. Empty for the loading and empty states.
    #[must_use]
    pub fn rows(&self) -> &[FeedRow] {
        match self {
            Self::Populated { rows, .. } => rows,
            _ => &[],
        }
    }

    #[must_use]
    pub fn subheader(&self) -> Option<&str> {
        match self {
            Self::Populated { subheader, .. } => Some(subheader),
            _ => None,
        }
    }
}

#[must_use]
pub fn subheader_for(count: usize) -> String {
    if count == 1 {
        "1 recent update".to_string()
    } else {
        format!("{count} recent updates")
    }
}
