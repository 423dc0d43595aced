// src/domain/activity/kind.rs
use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of an audited event.
///
/// The set is closed on the Rust side but the wire format is not: tags the
/// back office does not know yet land in [`ActivityKind::Unknown`] with the
/// raw tag preserved, so decoding a feed never fails on a new event type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ActivityKind {
    EmployeeCreated,
    EmployeeUpdated,
    EmployeeDeleted,
    SiteCreated,
    SiteUpdated,
    SiteDeleted,
    AssignmentCreated,
    AssignmentUpdated,
    AssignmentDeleted,
    Unknown(String),
}

pub const FALLBACK_LABEL: &str = "Activity";

impl ActivityKind {
    #[must_use]
    pub fn parse(tag: &str) -> Self {
        let normalized = tag.trim().to_ascii_lowercase().replace('-', "_");
        match normalized.as_str() {
            "employee_created" => Self::EmployeeCreated,
            "employee_updated" => Self::EmployeeUpdated,
            "employee_deleted" => Self::EmployeeDeleted,
            "site_created" => Self::SiteCreated,
            "site_updated" => Self::SiteUpdated,
            "site_deleted" => Self::SiteDeleted,
            "assignment_created" => Self::AssignmentCreated,
            "assignment_updated" => Self::AssignmentUpdated,
            "assignment_deleted" => Self::AssignmentDeleted,
            _ => Self::Unknown(tag.to_string()),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::EmployeeCreated => "employee_created",
            Self::EmployeeUpdated => "employee_updated",
            Self::EmployeeDeleted => "employee_deleted",
            Self::SiteCreated => "site_created",
            Self::SiteUpdated => "site_updated",
            Self::SiteDeleted => "site_deleted",
            Self::AssignmentCreated => "assignment_created",
            Self::AssignmentUpdated => "assignment_updated",
            Self::AssignmentDeleted => "assignment_deleted",
            Self::Unknown(raw) => raw,
        }
    }

    /// Human-readable label shown in the activity feed. Total over every
    /// kind, unknown tags included.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::EmployeeCreated => "Employee added",
            Self::EmployeeUpdated => "Employee updated",
            Self::EmployeeDeleted => "Employee removed",
            Self::SiteCreated => "Site added",
            Self::SiteUpdated => "Site updated",
            Self::SiteDeleted => "Site removed",
            Self::AssignmentCreated => "Assignment created",
            Self::AssignmentUpdated => "Assignment updated",
            Self::AssignmentDeleted => "Assignment removed",
            Self::Unknown(_) => FALLBACK_LABEL,
        }
    }

    #[must_use]
    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown(_))
    }
}

impl From<String> for ActivityKind {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<&str> for ActivityKind {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl From<ActivityKind> for String {
    fn from(value: ActivityKind) -> Self {
        match value {
            ActivityKind::Unknown(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
