// tests/support/builders.rs
use super::mocks::{fixed_now, minutes_ago};
use chrono::Duration;
use sitedesk_core::domain::activity::{Activity, ActivityId, ActivityKind};
use sitedesk_core::domain::site::{SiteId, SiteRow};

pub fn activity(id: &str, kind: &str, description: &str, actor: Option<&str>) -> Activity {
    Activity::new(
        ActivityId::new(id).expect("valid activity id"),
        ActivityKind::from(kind),
        description,
        fixed_now(),
        actor.map(str::to_string),
    )
}

/// Five records, most recent first, covering every shape the feed cares
/// about: known kinds, an unknown kind, and rows with and without an actor.
pub fn sample_activities() -> Vec<Activity> {
    let base = fixed_now();
    let entries = [
        ("a1", "employee_created", "Added employee Sato Hanako", Some("Admin")),
        ("a2", "site_updated", "Updated site Harbor Depot", None),
        ("a3", "assignment_created", "Assigned Sato Hanako to Harbor Depot", Some("Kimura")),
        ("a4", "site_deleted", "Removed site Old Warehouse", Some("Admin")),
        ("a5", "payroll_exported", "Exported March payroll", None),
    ];
    entries
        .into_iter()
        .zip(0_i64..)
        .map(|((id, kind, description, actor), i)| {
            Activity::new(
                ActivityId::new(id).expect("valid activity id"),
                ActivityKind::from(kind),
                description,
                base - Duration::hours(i),
                actor.map(str::to_string),
            )
        })
        .collect()
}

pub fn site(id: i64, name: &str, minutes_old: i64) -> SiteRow {
    SiteRow::new(SiteId::Number(id), name, minutes_ago(minutes_old))
}
