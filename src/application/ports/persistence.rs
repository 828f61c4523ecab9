//! Persistence port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::job::Job;
use crate::domain::settings::UserSettings;

/// Persistence errors
#[derive(Debug, Clone, Error)]
pub enum PersistenceError {
    #[error("Failed to read stored document: {0}")]
    ReadError(String),

    #[error("Failed to parse stored document: {0}")]
    ParseError(String),

    #[error("Failed to write stored document: {0}")]
    WriteError(String),
}

/// Port for the two stored documents: the job list and the settings record.
///
/// Each document is rewritten in full on every change. Load failures are
/// recoverable by the caller (fall back to a default document); they are
/// never fatal.
#[async_trait]
pub trait Persistence: Send + Sync {
    async fn load_jobs(&self) -> Result<Vec<Job>, PersistenceError>;

    async fn save_jobs(&self, jobs: &[Job]) -> Result<(), PersistenceError>;

    async fn load_settings(&self) -> Result<UserSettings, PersistenceError>;

    async fn save_settings(&self, settings: &UserSettings) -> Result<(), PersistenceError>;
}
