//! Application store for jobs and settings
//!
//! Owns the in-memory job list and settings record, with an injected
//! persistence collaborator: documents are read once at init and the
//! affected document is rewritten in full after every mutation. Jobs are
//! mutated by whole-record replacement only.

use thiserror::Error;

use crate::domain::job::{Job, JobStatus, VoiceNote};
use crate::domain::settings::UserSettings;

use super::ports::{Persistence, PersistenceError};

/// Store errors
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    #[error(transparent)]
    Persistence(#[from] PersistenceError),

    #[error("No job matches \"{0}\"")]
    JobNotFound(String),

    #[error("\"{0}\" matches more than one job; use a longer id prefix")]
    AmbiguousJobId(String),
}

/// In-memory store backed by a persistence adapter
pub struct AppStore<P: Persistence> {
    jobs: Vec<Job>,
    settings: UserSettings,
    persistence: P,
}

impl<P: Persistence> AppStore<P> {
    /// Load both documents. A document that is missing or fails to parse is
    /// replaced by its default, with a warning returned to the caller;
    /// startup is never fatal.
    pub async fn load(persistence: P) -> (Self, Vec<String>) {
        let mut warnings = Vec::new();

        let jobs = match persistence.load_jobs().await {
            Ok(jobs) => jobs,
            Err(e) => {
                warnings.push(format!("Could not load saved jobs, starting empty: {}", e));
                Vec::new()
            }
        };

        let settings = match persistence.load_settings().await {
            Ok(settings) => settings,
            Err(e) => {
                warnings.push(format!("Could not load settings, using defaults: {}", e));
                UserSettings::default()
            }
        };

        (
            Self {
                jobs,
                settings,
                persistence,
            },
            warnings,
        )
    }

    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    pub fn settings(&self) -> &UserSettings {
        &self.settings
    }

    /// Find a job by full id or unique id prefix
    pub fn find_job(&self, id_prefix: &str) -> Result<&Job, StoreError> {
        let prefix = id_prefix.to_lowercase();
        let mut matches = self
            .jobs
            .iter()
            .filter(|job| job.id.to_string().starts_with(&prefix));

        match (matches.next(), matches.next()) {
            (Some(job), None) => Ok(job),
            (Some(_), Some(_)) => Err(StoreError::AmbiguousJobId(id_prefix.to_string())),
            (None, _) => Err(StoreError::JobNotFound(id_prefix.to_string())),
        }
    }

    /// List jobs for one view: the archived view shows only archived jobs,
    /// the active view everything else. `status` narrows the active view
    /// only and is ignored in the archived view; the CLI rejects the
    /// combination before it reaches here. `search` filters
    /// case-insensitively over customer name and address.
    pub fn list(
        &self,
        archived_view: bool,
        status: Option<JobStatus>,
        search: Option<&str>,
    ) -> Vec<&Job> {
        self.jobs
            .iter()
            .filter(|job| {
                if archived_view != job.is_archived() {
                    return false;
                }
                if let Some(status) = status {
                    if !archived_view && job.status != status {
                        return false;
                    }
                }
                search.map_or(true, |query| job.matches_search(query))
            })
            .collect()
    }

    /// Insert a new job at the head of the list
    pub async fn insert_job(&mut self, job: Job) -> Result<(), StoreError> {
        self.jobs.insert(0, job);
        self.persist_jobs().await
    }

    /// Replace a job wholesale by id
    pub async fn replace_job(&mut self, updated: Job) -> Result<(), StoreError> {
        let slot = self
            .jobs
            .iter_mut()
            .find(|job| job.id == updated.id)
            .ok_or_else(|| StoreError::JobNotFound(updated.id.to_string()))?;
        *slot = updated;
        self.persist_jobs().await
    }

    /// Prepend a voice note to a job. Exactly one store update: the note
    /// arrives fully formed, with or without its analysis.
    pub async fn prepend_voice_note(
        &mut self,
        id_prefix: &str,
        note: VoiceNote,
    ) -> Result<(), StoreError> {
        let mut job = self.find_job(id_prefix)?.clone();
        job.voice_notes.insert(0, note);
        self.replace_job(job).await
    }

    /// Archive a job or restore it to its pre-archive status
    pub async fn toggle_archive(&mut self, id_prefix: &str) -> Result<JobStatus, StoreError> {
        let mut job = self.find_job(id_prefix)?.clone();
        job.toggle_archive();
        let status = job.status;
        self.replace_job(job).await?;
        Ok(status)
    }

    /// Mark a job completed, or re-open it
    pub async fn toggle_complete(&mut self, id_prefix: &str) -> Result<JobStatus, StoreError> {
        let mut job = self.find_job(id_prefix)?.clone();
        job.toggle_complete();
        let status = job.status;
        self.replace_job(job).await?;
        Ok(status)
    }

    /// Permanently delete a job and all its data. The caller is responsible
    /// for confirming with the user first.
    pub async fn delete_job(&mut self, id_prefix: &str) -> Result<Job, StoreError> {
        let id = self.find_job(id_prefix)?.id;
        let index = self
            .jobs
            .iter()
            .position(|job| job.id == id)
            .ok_or_else(|| StoreError::JobNotFound(id_prefix.to_string()))?;
        let removed = self.jobs.remove(index);
        self.persist_jobs().await?;
        Ok(removed)
    }

    /// Replace the settings record wholesale
    pub async fn replace_settings(&mut self, settings: UserSettings) -> Result<(), StoreError> {
        self.settings = settings;
        self.persistence.save_settings(&self.settings).await?;
        Ok(())
    }

    async fn persist_jobs(&self) -> Result<(), StoreError> {
        self.persistence.save_jobs(&self.jobs).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::job::PropertyType;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    /// In-memory persistence stub that counts writes
    #[derive(Default, Clone)]
    struct MemoryPersistence {
        job_writes: Arc<AtomicUsize>,
        fail_loads: bool,
    }

    #[async_trait]
    impl Persistence for MemoryPersistence {
        async fn load_jobs(&self) -> Result<Vec<Job>, PersistenceError> {
            if self.fail_loads {
                Err(PersistenceError::ParseError("corrupt".to_string()))
            } else {
                Ok(Vec::new())
            }
        }

        async fn save_jobs(&self, _jobs: &[Job]) -> Result<(), PersistenceError> {
            self.job_writes.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        async fn load_settings(&self) -> Result<UserSettings, PersistenceError> {
            if self.fail_loads {
                Err(PersistenceError::ReadError("missing".to_string()))
            } else {
                Ok(UserSettings::default())
            }
        }

        async fn save_settings(&self, _settings: &UserSettings) -> Result<(), PersistenceError> {
            Ok(())
        }
    }

    fn sample_job(name: &str) -> Job {
        Job::new(name, "555-0100", "9 Circuit Ct", PropertyType::Residential, 85.0)
    }

    #[tokio::test]
    async fn corrupt_documents_recover_to_defaults_with_warnings() {
        let persistence = MemoryPersistence {
            fail_loads: true,
            ..Default::default()
        };
        let (store, warnings) = AppStore::load(persistence).await;

        assert!(store.jobs().is_empty());
        assert_eq!(store.settings(), &UserSettings::default());
        assert_eq!(warnings.len(), 2);
    }

    #[tokio::test]
    async fn insert_prepends_and_persists() {
        let persistence = MemoryPersistence::default();
        let writes = Arc::clone(&persistence.job_writes);
        let (mut store, _) = AppStore::load(persistence).await;

        store.insert_job(sample_job("First")).await.unwrap();
        store.insert_job(sample_job("Second")).await.unwrap();

        assert_eq!(store.jobs()[0].customer_name, "Second");
        assert_eq!(writes.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn find_job_by_unique_prefix() {
        let (mut store, _) = AppStore::load(MemoryPersistence::default()).await;
        let job = sample_job("Prefix Test");
        let id = job.id.to_string();
        store.insert_job(job).await.unwrap();

        assert!(store.find_job(&id[..8]).is_ok());
        assert!(matches!(
            store.find_job("zzzzzzzz"),
            Err(StoreError::JobNotFound(_))
        ));
    }

    #[tokio::test]
    async fn list_separates_archived_view() {
        let (mut store, _) = AppStore::load(MemoryPersistence::default()).await;
        let kept = sample_job("Kept");
        let archived = sample_job("Archived");
        let archived_id = archived.id.to_string();
        store.insert_job(kept).await.unwrap();
        store.insert_job(archived).await.unwrap();
        store.toggle_archive(&archived_id).await.unwrap();

        let active = store.list(false, None, None);
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].customer_name, "Kept");

        let archived = store.list(true, None, None);
        assert_eq!(archived.len(), 1);
        assert_eq!(archived[0].customer_name, "Archived");
    }

    #[tokio::test]
    async fn completed_job_survives_archive_round_trip() {
        let (mut store, _) = AppStore::load(MemoryPersistence::default()).await;
        let job = sample_job("Round Trip");
        let id = job.id.to_string();
        store.insert_job(job).await.unwrap();

        store.toggle_complete(&id).await.unwrap();
        assert_eq!(store.toggle_archive(&id).await.unwrap(), JobStatus::Archived);
        assert_eq!(store.toggle_archive(&id).await.unwrap(), JobStatus::Completed);
    }

    #[tokio::test]
    async fn delete_removes_job() {
        let (mut store, _) = AppStore::load(MemoryPersistence::default()).await;
        let job = sample_job("Doomed");
        let id = job.id.to_string();
        store.insert_job(job).await.unwrap();

        let removed = store.delete_job(&id).await.unwrap();
        assert_eq!(removed.customer_name, "Doomed");
        assert!(store.jobs().is_empty());
    }

    #[tokio::test]
    async fn voice_note_prepends() {
        let (mut store, _) = AppStore::load(MemoryPersistence::default()).await;
        let job = sample_job("Notes");
        let id = job.id.to_string();
        store.insert_job(job).await.unwrap();

        store
            .prepend_voice_note(&id, VoiceNote::new("older"))
            .await
            .unwrap();
        store
            .prepend_voice_note(&id, VoiceNote::new("newer"))
            .await
            .unwrap();

        let notes = &store.find_job(&id).unwrap().voice_notes;
        assert_eq!(notes.len(), 2);
        assert_eq!(notes[0].transcript, "newer");
    }
}
