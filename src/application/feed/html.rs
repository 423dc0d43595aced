// src/application/feed/html.rs
use super::view::{FeedRow, FeedView};
use std::fmt::Write as _;

/// `data-testid` locators emitted in the fragment. E2E checks select on
/// these instead of visible text.
pub mod test_ids {
    pub const FEED: &str = "activity-feed";
    pub const TITLE: &str = "activity-feed-title";
    pub const SUBHEADER: &str = "activity-feed-subheader";
    pub const EMPTY: &str = "activity-feed-empty";
    pub const SKELETON: &str = "activity-feed-skeleton";
    pub const ROW: &str = "activity-row";
    pub const LABEL: &str = "activity-label";
    pub const DESCRIPTION: &str = "activity-description";
    pub const TIMESTAMP: &str = "activity-timestamp";
    pub const ACTOR: &str = "activity-actor";
}

impl FeedView {
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        let state = match self {
            Self::Loading { .. } => "loading",
            Self::Empty { .. } => "empty",
            Self::Populated { .. } => "populated",
        };
        let _ = write!(
            out,
            r#"<section class="activity-feed" data-testid="{}" data-state="{state}">"#,
            test_ids::FEED
        );
        let _ = write!(
            out,
            r#"<h2 data-testid="{}">{}</h2>"#,
            test_ids::TITLE,
            escape(self.title())
        );

        match self {
            Self::Loading { placeholders, .. } => {
                for _ in 0..*placeholders {
                    let _ = write!(
                        out,
                        r#"<div class="activity-skeleton" data-testid="{}" aria-hidden="true"></div>"#,
                        test_ids::SKELETON
                    );
                }
            }
            Self::Empty { message, .. } => {
                let _ = write!(
                    out,
                    r#"<p data-testid="{}">{}</p>"#,
                    test_ids::EMPTY,
                    escape(message)
                );
            }
            Self::Populated {
                subheader, rows, ..
            } => {
                let _ = write!(
                    out,
                    r#"<p data-testid="{}">{}</p><ul>"#,
                    test_ids::SUBHEADER,
                    escape(subheader)
                );
                for row in rows {
                    write_row(&mut out, row);
                }
                out.push_str("</ul>");
            }
        }

        out.push_str("</section>");
        out
    }
}

fn write_row(out: &mut String, row: &FeedRow) {
    let _ = write!(
        out,
        r#"<li data-testid="{}" data-activity-id="{}"><strong data-testid="{}">{}</strong><p data-testid="{}">{}</p><time data-testid="{}">{}</time>"#,
        test_ids::ROW,
        escape(&row.id),
        test_ids::LABEL,
        escape(&row.label),
        test_ids::DESCRIPTION,
        escape(&row.description),
        test_ids::TIMESTAMP,
        escape(&row.timestamp),
    );
    if let Some(performed_by) = &row.performed_by {
        let _ = write!(
            out,
            r#"<small data-testid="{}">{}</small>"#,
            test_ids::ACTOR,
            escape(performed_by)
        );
    }
    out.push_str("</li>");
}

fn escape(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}
