//! Part and catalog command handlers

use crate::application::ports::Persistence;
use crate::application::AppStore;
use crate::domain::catalog;
use crate::domain::job::Part;

use super::args::PartAction;
use super::presenter::Presenter;

/// Handle part subcommand
pub async fn handle_part_action<P: Persistence>(
    action: PartAction,
    store: &mut AppStore<P>,
    presenter: &Presenter,
) -> Result<(), String> {
    match action {
        PartAction::Add {
            job,
            item,
            name,
            qty,
            cost,
        } => {
            let draft = match (item, name) {
                (Some(item), None) => seed_from_catalog(&item)?,
                (None, Some(name)) => {
                    if name.trim().is_empty() {
                        return Err("Part name must not be empty".to_string());
                    }
                    catalog::custom_part(name.trim())
                }
                _ => return Err("Provide --item (catalog) or --name (custom)".to_string()),
            };

            // Quantity and cost stay editable until the part is committed
            let part = Part {
                quantity: qty.unwrap_or(draft.quantity).max(1),
                cost: cost.unwrap_or(draft.cost),
                ..draft
            };

            let mut updated = store.find_job(&job).map_err(|e| e.to_string())?.clone();
            let line = format!("{} x{} @ ${:.2}", part.name, part.quantity, part.cost);
            updated.parts.push(part);
            store.replace_job(updated).await.map_err(|e| e.to_string())?;
            presenter.success(&format!("Added {}", line));
            Ok(())
        }

        PartAction::List { job } => {
            let job = store.find_job(&job).map_err(|e| e.to_string())?;
            if job.parts.is_empty() {
                presenter.info("No parts on this job");
                return Ok(());
            }
            for part in &job.parts {
                presenter.output(&format!(
                    "{}  {:<40}  x{:<3}  ${:>8.2}",
                    &part.id.to_string()[..8],
                    part.name,
                    part.quantity,
                    part.line_cost()
                ));
            }
            Ok(())
        }

        PartAction::Rm { job, part } => {
            let mut updated = store.find_job(&job).map_err(|e| e.to_string())?.clone();
            // Exactly one part may be removed per invocation; an ambiguous
            // prefix is an error, never a multi-record delete
            let prefix = part.to_lowercase();
            let index = {
                let mut matches = updated
                    .parts
                    .iter()
                    .enumerate()
                    .filter(|(_, p)| p.id.to_string().starts_with(&prefix));
                match (matches.next(), matches.next()) {
                    (Some((index, _)), None) => index,
                    (Some(_), Some(_)) => {
                        return Err(format!(
                            "\"{}\" matches more than one part; use a longer id prefix",
                            part
                        ));
                    }
                    (None, _) => return Err(format!("No part matches \"{}\"", part)),
                }
            };
            updated.parts.remove(index);
            store.replace_job(updated).await.map_err(|e| e.to_string())?;
            presenter.success("Part removed");
            Ok(())
        }
    }
}

/// Seed a draft part from the catalog; the query must match exactly one item
fn seed_from_catalog(query: &str) -> Result<Part, String> {
    let matches: Vec<_> = catalog::search(None, query)
        .into_iter()
        .flat_map(|cat| cat.items)
        .collect();

    match matches.as_slice() {
        [] => Err(format!("No catalog item matches \"{}\"", query)),
        [item] => Ok(item.draft_part()),
        items => Err(format!(
            "\"{}\" matches {} catalog items; be more specific",
            query,
            items.len()
        )),
    }
}

/// Handle the `catalog` command
pub fn handle_catalog(
    category: Option<&str>,
    search: &str,
    presenter: &Presenter,
) -> Result<(), String> {
    let results = catalog::search(category, search);
    if results.is_empty() {
        presenter.info("No catalog items match");
        return Ok(());
    }

    for cat in results {
        presenter.heading(&format!("{} ({})", cat.name, cat.id));
        for item in &cat.items {
            presenter.output(&format!(
                "  {:<40}  ${:>8.2} / {}",
                item.name, item.default_cost, item.unit
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::PersistenceError;
    use crate::domain::job::{Job, PropertyType};
    use crate::domain::settings::UserSettings;
    use async_trait::async_trait;
    use uuid::Uuid;

    #[test]
    fn catalog_seed_requires_unique_match() {
        assert!(seed_from_catalog("gfci").is_err());
        let part = seed_from_catalog("gfci outlet").unwrap();
        assert_eq!(part.cost, 18.50);
        assert_eq!(part.quantity, 1);
    }

    #[test]
    fn unknown_catalog_item_is_an_error() {
        assert!(seed_from_catalog("flux capacitor").is_err());
    }

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

    fn part_with_id(id: &str) -> Part {
        let mut part = Part::new("15A Duplex Outlet (White)", 1, 1.25);
        part.id = Uuid::parse_str(id).unwrap();
        part
    }

    async fn store_with_two_parts() -> (AppStore<MemoryPersistence>, String) {
        let (mut store, _) = AppStore::load(MemoryPersistence).await;
        let mut job = Job::new("Rm Test", "555-0100", "3 Bus Bar Blvd", PropertyType::Commercial, 85.0);
        job.parts.push(part_with_id("aa000000-0000-0000-0000-000000000001"));
        job.parts.push(part_with_id("aa000000-0000-0000-0000-000000000002"));
        let id = job.id.to_string();
        store.insert_job(job).await.unwrap();
        (store, id)
    }

    #[tokio::test]
    async fn rm_rejects_ambiguous_prefix_and_removes_nothing() {
        let (mut store, job_id) = store_with_two_parts().await;

        let result = handle_part_action(
            PartAction::Rm {
                job: job_id.clone(),
                part: "aa".to_string(),
            },
            &mut store,
            &Presenter::new(),
        )
        .await;

        assert!(result.unwrap_err().contains("more than one part"));
        assert_eq!(store.find_job(&job_id).unwrap().parts.len(), 2);
    }

    #[tokio::test]
    async fn rm_unique_prefix_removes_exactly_one() {
        let (mut store, job_id) = store_with_two_parts().await;

        handle_part_action(
            PartAction::Rm {
                job: job_id.clone(),
                part: "aa000000-0000-0000-0000-000000000002".to_string(),
            },
            &mut store,
            &Presenter::new(),
        )
        .await
        .unwrap();

        let parts = &store.find_job(&job_id).unwrap().parts;
        assert_eq!(parts.len(), 1);
        assert!(parts[0].id.to_string().ends_with("0001"));
    }
}
