// src/domain/site/filter.rs
use super::entity::{SiteId, SiteRow};
use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

/// Substring that tags disposable rows created by E2E runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteMarker(String);

impl SiteMarker {
    pub const DEFAULT: &'static str = "E2E";

    /// # Errors
    /// Returns [`DomainError::Validation`] when the trimmed marker is empty.
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value: String = value.into();
        let value = value.trim().to_string();
        if value.is_empty() {
            return Err(DomainError::Validation("site marker cannot be empty".into()));
        }
        Ok(Self(value))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// ILIKE pattern matching the marker anywhere in a name. `%`, `_` and
    /// `\` inside the marker are matched literally.
    #[must_use]
    pub fn pattern(&self) -> String {
        let mut escaped = String::with_capacity(self.0.len() + 2);
        escaped.push('%');
        for c in self.0.chars() {
            if matches!(c, '%' | '_' | '\\') {
                escaped.push('\\');
            }
            escaped.push(c);
        }
        escaped.push('%');
        escaped
    }
}

impl Default for SiteMarker {
    fn default() -> Self {
        Self(Self::DEFAULT.to_string())
    }
}

impl fmt::Display for SiteMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SiteFilter {
    All,
    /// Case-insensitive substring match on `name`.
    NameContains(SiteMarker),
    IdIn(Vec<SiteId>),
}

impl SiteFilter {
    #[must_use]
    pub fn matches(&self, row: &SiteRow) -> bool {
        match self {
            Self::All => true,
            Self::NameContains(marker) => row
                .name
                .to_lowercase()
                .contains(&marker.as_str().to_lowercase()),
            Self::IdIn(ids) => ids.contains(&row.id),
        }
    }

    #[must_use]
    pub fn ids_of(rows: &[SiteRow]) -> Self {
        Self::IdIn(rows.iter().map(|row| row.id.clone()).collect())
    }
}

impl fmt::Display for SiteFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all sites"),
            Self::NameContains(marker) => write!(f, "name ilike \"{}\"", marker.pattern()),
            Self::IdIn(ids) => write!(f, "id in {} identifier(s)", ids.len()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SiteOrder {
    NewestFirst,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteQuery {
    pub filter: SiteFilter,
    pub order: Option<SiteOrder>,
    pub limit: Option<usize>,
}

impl SiteQuery {
    #[must_use]
    pub const fn new(filter: SiteFilter) -> Self {
        Self {
            filter,
            order: None,
            limit: None,
        }
    }

    #[must_use]
    pub const fn newest_first(mut self) -> Self {
        self.order = Some(SiteOrder::NewestFirst);
        self
    }

    #[must_use]
    pub const fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}
