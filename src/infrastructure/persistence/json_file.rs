//! JSON file persistence adapter
//!
//! Two documents under the data directory: `jobs.json` and `settings.json`.
//! Each carries a versioned envelope; legacy documents written before the
//! envelope existed (a bare job array or settings object) still load.

use std::path::PathBuf;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::fs;

use crate::application::ports::{Persistence, PersistenceError};
use crate::domain::job::Job;
use crate::domain::settings::UserSettings;

const DOCUMENT_VERSION: u32 = 1;

const JOBS_FILE: &str = "jobs.json";
const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Serialize, Deserialize)]
struct JobsDocument {
    version: u32,
    jobs: Vec<Job>,
}

#[derive(Debug, Serialize, Deserialize)]
struct SettingsDocument {
    version: u32,
    settings: UserSettings,
}

/// File-backed persistence rooted at a data directory
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Create a store at the platform data directory
    pub fn new() -> Self {
        let dir = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("~/.local/share"))
            .join("fieldvolt");
        Self { dir }
    }

    /// Create a store at a custom directory
    pub fn with_dir(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn jobs_path(&self) -> PathBuf {
        self.dir.join(JOBS_FILE)
    }

    pub fn settings_path(&self) -> PathBuf {
        self.dir.join(SETTINGS_FILE)
    }

    async fn read_file(&self, path: &PathBuf) -> Result<Option<String>, PersistenceError> {
        if !path.exists() {
            return Ok(None);
        }
        fs::read_to_string(path)
            .await
            .map(Some)
            .map_err(|e| PersistenceError::ReadError(e.to_string()))
    }

    async fn write_file(&self, path: &PathBuf, content: String) -> Result<(), PersistenceError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| PersistenceError::WriteError(e.to_string()))?;
        }
        fs::write(path, content)
            .await
            .map_err(|e| PersistenceError::WriteError(e.to_string()))
    }
}

impl Default for JsonFileStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Persistence for JsonFileStore {
    async fn load_jobs(&self) -> Result<Vec<Job>, PersistenceError> {
        let Some(content) = self.read_file(&self.jobs_path()).await? else {
            return Ok(Vec::new());
        };

        if let Ok(document) = serde_json::from_str::<JobsDocument>(&content) {
            return Ok(document.jobs);
        }

        // Legacy document: a bare array of jobs
        serde_json::from_str::<Vec<Job>>(&content)
            .map_err(|e| PersistenceError::ParseError(e.to_string()))
    }

    async fn save_jobs(&self, jobs: &[Job]) -> Result<(), PersistenceError> {
        let document = JobsDocument {
            version: DOCUMENT_VERSION,
            jobs: jobs.to_vec(),
        };
        let content = serde_json::to_string_pretty(&document)
            .map_err(|e| PersistenceError::WriteError(e.to_string()))?;
        self.write_file(&self.jobs_path(), content).await
    }

    async fn load_settings(&self) -> Result<UserSettings, PersistenceError> {
        let Some(content) = self.read_file(&self.settings_path()).await? else {
            return Ok(UserSettings::default());
        };

        if let Ok(document) = serde_json::from_str::<SettingsDocument>(&content) {
            return Ok(document.settings);
        }

        // Legacy document: a bare settings object
        serde_json::from_str::<UserSettings>(&content)
            .map_err(|e| PersistenceError::ParseError(e.to_string()))
    }

    async fn save_settings(&self, settings: &UserSettings) -> Result<(), PersistenceError> {
        let document = SettingsDocument {
            version: DOCUMENT_VERSION,
            settings: settings.clone(),
        };
        let content = serde_json::to_string_pretty(&document)
            .map_err(|e| PersistenceError::WriteError(e.to_string()))?;
        self.write_file(&self.settings_path(), content).await
    }
}
