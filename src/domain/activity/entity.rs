// src/domain/activity/entity.rs
use super::kind::ActivityKind;
use crate::domain::errors::{DomainError, DomainResult};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

/// Non-blank activity identifier. Only built through [`ActivityId::new`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ActivityId(String);

impl ActivityId {
    /// # Errors
    /// Returns [`DomainError::Validation`] when `value` is blank.
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value: String = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("activity id cannot be empty".into()));
        }
        Ok(Self(value))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ActivityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One audited event as handed to the feed by upstream application logic.
/// Records are read-only once built; the feed never sorts or edits them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Activity {
    pub id: ActivityId,
    #[serde(rename = "type")]
    pub kind: ActivityKind,
    pub description: String,
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actor: Option<String>,
}

impl Activity {
    #[must_use]
    pub fn new(
        id: ActivityId,
        kind: ActivityKind,
        description: impl Into<String>,
        timestamp: DateTime<Utc>,
        actor: Option<String>,
    ) -> Self {
        Self {
            id,
            kind,
            description: description.into(),
            timestamp,
            actor,
        }
    }

    /// Actor name when one is recorded. Blank names count as absent.
    #[must_use]
    pub fn actor(&self) -> Option<&str> {
        self.actor
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }
}
