// src/application/error.rs
use crate::application::maintenance::MaintenanceStage;
use crate::domain::errors::DomainError;
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// A remote call inside a maintenance job failed; later stages were skipped.
    #[error("{stage} failed: {source}")]
    Maintenance {
        stage: MaintenanceStage,
        #[source]
        source: DomainError,
    },
}

impl ApplicationError {
    #[must_use]
    pub const fn stage(stage: MaintenanceStage, source: DomainError) -> Self {
        Self::Maintenance { stage, source }
    }

    #[must_use]
    pub const fn failed_stage(&self) -> Option<MaintenanceStage> {
        match self {
            Self::Maintenance { stage, .. } => Some(*stage),
            _ => None,
        }
    }
}
