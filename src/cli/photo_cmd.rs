//! Photo command handlers

use std::path::Path;

use tokio::fs;

use crate::application::ports::Persistence;
use crate::application::AppStore;
use crate::domain::job::photo::{mime_for_extension, Photo};

use super::args::PhotoAction;
use super::presenter::Presenter;

/// Handle photo subcommand
pub async fn handle_photo_action<P: Persistence>(
    action: PhotoAction,
    store: &mut AppStore<P>,
    presenter: &Presenter,
) -> Result<(), String> {
    match action {
        PhotoAction::Add { job, path } => {
            let bytes = fs::read(&path)
                .await
                .map_err(|e| format!("Failed to read {}: {}", path, e))?;
            let mime = mime_for_extension(
                Path::new(&path)
                    .extension()
                    .and_then(|ext| ext.to_str())
                    .unwrap_or(""),
            );

            let photo = Photo::from_bytes(mime, &bytes);
            let id = photo.id;
            let mut updated = store.find_job(&job).map_err(|e| e.to_string())?.clone();
            updated.photos.insert(0, photo);
            store.replace_job(updated).await.map_err(|e| e.to_string())?;
            presenter.success(&format!(
                "Photo {} embedded ({} bytes)",
                &id.to_string()[..8],
                bytes.len()
            ));
            Ok(())
        }

        PhotoAction::List { job } => {
            let job = store.find_job(&job).map_err(|e| e.to_string())?;
            if job.photos.is_empty() {
                presenter.info("No photos on this job");
                return Ok(());
            }
            for photo in &job.photos {
                presenter.output(&format!(
                    "{}  {}  {} bytes",
                    &photo.id.to_string()[..8],
                    photo.timestamp.format("%Y-%m-%d %H:%M"),
                    photo.payload_size()
                ));
            }
            Ok(())
        }

        PhotoAction::Rm { job, photo } => {
            let mut updated = store.find_job(&job).map_err(|e| e.to_string())?.clone();
            // Order-preserving removal of exactly one photo; an ambiguous
            // prefix is an error, never a multi-record delete
            let prefix = photo.to_lowercase();
            let index = {
                let mut matches = updated
                    .photos
                    .iter()
                    .enumerate()
                    .filter(|(_, p)| p.id.to_string().starts_with(&prefix));
                match (matches.next(), matches.next()) {
                    (Some((index, _)), None) => index,
                    (Some(_), Some(_)) => {
                        return Err(format!(
                            "\"{}\" matches more than one photo; use a longer id prefix",
                            photo
                        ));
                    }
                    (None, _) => return Err(format!("No photo matches \"{}\"", photo)),
                }
            };
            updated.photos.remove(index);
            store.replace_job(updated).await.map_err(|e| e.to_string())?;
            presenter.success("Photo removed");
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::PersistenceError;
    use crate::domain::job::{Job, PropertyType};
    use crate::domain::settings::UserSettings;
    use async_trait::async_trait;
    use uuid::Uuid;

    struct MemoryPersistence;

    #[async_trait]
    impl Persistence for MemoryPersistence {
        async fn load_jobs(&self) -> Result<Vec<Job>, PersistenceError> {
            Ok(Vec::new())
        }
        async fn save_jobs(&self, _jobs: &[Job]) -> Result<(), PersistenceError> {
            Ok(())
        }
        async fn load_settings(&self) -> Result<UserSettings, PersistenceError> {
            Ok(UserSettings::default())
        }
        async fn save_settings(&self, _settings: &UserSettings) -> Result<(), PersistenceError> {
            Ok(())
        }
    }

    fn photo_with_id(id: &str) -> Photo {
        let mut photo = Photo::from_bytes("image/png", &[0x89, 0x50]);
        photo.id = Uuid::parse_str(id).unwrap();
        photo
    }

    async fn store_with_two_photos() -> (AppStore<MemoryPersistence>, String) {
        let (mut store, _) = AppStore::load(MemoryPersistence).await;
        let mut job = Job::new("Rm Test", "555-0100", "3 Bus Bar Blvd", PropertyType::Commercial, 85.0);
        job.photos.push(photo_with_id("aa000000-0000-0000-0000-000000000001"));
        job.photos.push(photo_with_id("aa000000-0000-0000-0000-000000000002"));
        let id = job.id.to_string();
        store.insert_job(job).await.unwrap();
        (store, id)
    }

    #[tokio::test]
    async fn rm_rejects_ambiguous_prefix_and_removes_nothing() {
        let (mut store, job_id) = store_with_two_photos().await;

        let result = handle_photo_action(
            PhotoAction::Rm {
                job: job_id.clone(),
                photo: "aa".to_string(),
            },
            &mut store,
            &Presenter::new(),
        )
        .await;

        assert!(result.unwrap_err().contains("more than one photo"));
        assert_eq!(store.find_job(&job_id).unwrap().photos.len(), 2);
    }

    #[tokio::test]
    async fn rm_unique_prefix_removes_exactly_one() {
        let (mut store, job_id) = store_with_two_photos().await;

        handle_photo_action(
            PhotoAction::Rm {
                job: job_id.clone(),
                photo: "aa000000-0000-0000-0000-000000000001".to_string(),
            },
            &mut store,
            &Presenter::new(),
        )
        .await
        .unwrap();

        let photos = &store.find_job(&job_id).unwrap().photos;
        assert_eq!(photos.len(), 1);
        assert!(photos[0].id.to_string().ends_with("0002"));
    }
}
