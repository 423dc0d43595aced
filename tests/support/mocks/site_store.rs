// tests/support/mocks/site_store.rs
use async_trait::async_trait;
use sitedesk_core::domain::errors::{DomainError, DomainResult};
use sitedesk_core::domain::site::{SiteFilter, SiteOrder, SiteQuery, SiteRow, SiteStore};
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq)]
pub enum StoreCall {
    Select(SiteQuery),
    Delete(SiteFilter),
}

/// In-memory stand-in for the hosted `sites` table.
#[derive(Default)]
pub struct InMemorySiteStore {
    rows: Mutex<Vec<SiteRow>>,
    calls: Mutex<Vec<StoreCall>>,
    fail_select_call: Option<usize>,
    fail_delete: bool,
    ignore_deletes: bool,
    insert_after_first_select: Mutex<Option<SiteRow>>,
}

impl InMemorySiteStore {
    pub fn with_rows(rows: Vec<SiteRow>) -> Self {
        Self {
            rows: Mutex::new(rows),
            ..Self::default()
        }
    }

    /// Fail the `n`-th select (1-based).
    #[must_use]
    pub fn failing_select(mut self, n: usize) -> Self {
        self.fail_select_call = Some(n);
        self
    }

    #[must_use]
    pub fn failing_delete(mut self) -> Self {
        self.fail_delete = true;
        self
    }

    /// Report deletions without removing anything, like a row-level policy
    /// silently filtering the delete.
    #[must_use]
    pub fn ignoring_deletes(mut self) -> Self {
        self.ignore_deletes = true;
        self
    }

    /// Simulate a concurrent writer inserting `row` right after the first read.
    #[must_use]
    pub fn inserting_after_first_select(self, row: SiteRow) -> Self {
        *self.insert_after_first_select.lock().unwrap() = Some(row);
        self
    }

    pub fn rows(&self) -> Vec<SiteRow> {
        self.rows.lock().unwrap().clone()
    }

    pub fn names(&self) -> Vec<String> {
        self.rows().into_iter().map(|row| row.name).collect()
    }

    pub fn calls(&self) -> Vec<StoreCall> {
        self.calls.lock().unwrap().clone()
    }

    fn select_count(&self) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|call| matches!(call, StoreCall::Select(_)))
            .count()
    }
}

#[async_trait]
impl SiteStore for InMemorySiteStore {
    async fn select(&self, query: &SiteQuery) -> DomainResult<Vec<SiteRow>> {
        self.calls
            .lock()
            .unwrap()
            .push(StoreCall::Select(query.clone()));
        let call_number = self.select_count();
        if self.fail_select_call == Some(call_number) {
            return Err(DomainError::Transport("connection reset by peer".into()));
        }

        let mut matched: Vec<SiteRow> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|row| query.filter.matches(row))
            .cloned()
            .collect();
        if query.order == Some(SiteOrder::NewestFirst) {
            matched.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        }
        if let Some(limit) = query.limit {
            matched.truncate(limit);
        }

        if call_number == 1 {
            if let Some(row) = self.insert_after_first_select.lock().unwrap().take() {
                self.rows.lock().unwrap().push(row);
            }
        }
        Ok(matched)
    }

    async fn delete(&self, filter: &SiteFilter) -> DomainResult<Vec<SiteRow>> {
        self.calls
            .lock()
            .unwrap()
            .push(StoreCall::Delete(filter.clone()));
        if self.fail_delete {
            return Err(DomainError::Persistence(
                "permission denied for table sites".into(),
            ));
        }
        if let SiteFilter::IdIn(ids) = filter {
            if ids.is_empty() {
                return Err(DomainError::Validation("id filter needs at least one id".into()));
            }
        }

        let mut rows = self.rows.lock().unwrap();
        let removed: Vec<SiteRow> = rows.iter().filter(|row| filter.matches(row)).cloned().collect();
        if !self.ignore_deletes {
            rows.retain(|row| !filter.matches(row));
        }
        Ok(removed)
    }
}
