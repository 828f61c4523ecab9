//! Job, clock, checklist, notes, and summary command handlers

use chrono::Utc;

use crate::application::ports::Persistence;
use crate::application::AppStore;
use crate::domain::job::billing;
use crate::domain::job::{Job, JobStatus};

use super::args::{JobAction, StatusArg};
use super::presenter::Presenter;

/// Short id prefix used when listing records
fn short_id(id: &uuid::Uuid) -> String {
    id.to_string()[..8].to_string()
}

/// Handle job subcommand
pub async fn handle_job_action<P: Persistence>(
    action: JobAction,
    store: &mut AppStore<P>,
    presenter: &Presenter,
) -> Result<(), String> {
    match action {
        JobAction::New {
            customer,
            phone,
            address,
            property,
        } => {
            if customer.trim().is_empty() || address.trim().is_empty() {
                return Err("Customer and address must not be empty".to_string());
            }
            let job = Job::new(
                customer.trim(),
                phone.trim(),
                address.trim(),
                property.into(),
                store.settings().default_hourly_rate,
            );
            let id = job.id;
            store.insert_job(job).await.map_err(|e| e.to_string())?;
            presenter.success(&format!("Created job {}", short_id(&id)));
            Ok(())
        }

        JobAction::List {
            archived,
            status,
            search,
        } => {
            if status == Some(StatusArg::Archived) {
                return Err("Archived jobs are a separate view; use --archived".to_string());
            }
            let jobs = store.list(archived, status.map(Into::into), search.as_deref());
            if jobs.is_empty() {
                presenter.info("No jobs match");
                return Ok(());
            }
            for job in jobs {
                presenter.output(&format!(
                    "{}  {:<9}  {:<24}  {}",
                    short_id(&job.id),
                    job.status.label(),
                    job.customer_name,
                    job.address
                ));
            }
            Ok(())
        }

        JobAction::Show { job } => {
            let job = store.find_job(&job).map_err(|e| e.to_string())?;
            show_job(job, presenter);
            Ok(())
        }

        JobAction::Complete { job } => {
            let status = store
                .toggle_complete(&job)
                .await
                .map_err(|e| e.to_string())?;
            match status {
                JobStatus::Completed => presenter.success("Job marked completed"),
                _ => presenter.success("Job re-opened"),
            }
            Ok(())
        }

        JobAction::Archive { job } => {
            let current = store.find_job(&job).map_err(|e| e.to_string())?;
            if current.is_archived() {
                return Err("Job is already archived".to_string());
            }
            store.toggle_archive(&job).await.map_err(|e| e.to_string())?;
            presenter.success("Job archived");
            Ok(())
        }

        JobAction::Restore { job } => {
            let current = store.find_job(&job).map_err(|e| e.to_string())?;
            if !current.is_archived() {
                return Err("Job is not archived".to_string());
            }
            let status = store.toggle_archive(&job).await.map_err(|e| e.to_string())?;
            presenter.success(&format!("Job restored as {}", status.label()));
            Ok(())
        }

        JobAction::Delete { job, yes } => {
            let target = store.find_job(&job).map_err(|e| e.to_string())?;
            if !yes {
                return Err(format!(
                    "Deleting \"{}\" is permanent and cannot be undone. Re-run with --yes to confirm.",
                    target.customer_name
                ));
            }
            let removed = store.delete_job(&job).await.map_err(|e| e.to_string())?;
            presenter.success(&format!(
                "Deleted job {} ({})",
                short_id(&removed.id),
                removed.customer_name
            ));
            Ok(())
        }
    }
}

fn show_job(job: &Job, presenter: &Presenter) {
    let now = Utc::now();
    presenter.heading(&job.customer_name);
    presenter.key_value("id", &job.id.to_string());
    presenter.key_value("status", job.status.label());
    presenter.key_value("property", job.property_type.label());
    presenter.key_value("address", &job.address);
    presenter.key_value("phone", &job.phone);
    presenter.key_value(
        "created",
        &job.created_at.format("%Y-%m-%d %H:%M UTC").to_string(),
    );
    presenter.key_value(
        "clock",
        if billing::is_clocked_in(job) {
            "clocked in"
        } else {
            "clocked out"
        },
    );
    presenter.key_value(
        "time",
        &billing::format_duration(billing::total_duration_ms(job, now)),
    );
    presenter.key_value(
        "safety",
        &format!("{}/4 checks", job.safety_checklist.completed_count()),
    );
    presenter.key_value("photos", &job.photos.len().to_string());
    presenter.key_value("parts", &job.parts.len().to_string());
    presenter.key_value("notes", &job.voice_notes.len().to_string());

    if !job.tech_notes.is_empty() {
        presenter.output("");
        presenter.heading("Tech notes");
        presenter.output(&job.tech_notes);
    }
    if !job.customer_notes.is_empty() {
        presenter.output("");
        presenter.heading("Customer notes");
        presenter.output(&job.customer_notes);
    }

    for note in &job.voice_notes {
        presenter.output("");
        presenter.output(&format!(
            "[{}] {}",
            note.timestamp.format("%Y-%m-%d %H:%M"),
            note.transcript
        ));
        if let Some(analysis) = &note.analysis {
            presenter.output(&format!("  Summary: {}", analysis.summary));
        }
    }
}

/// Clock in or out of a job
pub async fn handle_clock<P: Persistence>(
    job: &str,
    store: &mut AppStore<P>,
    presenter: &Presenter,
) -> Result<(), String> {
    let current = store.find_job(job).map_err(|e| e.to_string())?;
    let now = Utc::now();
    let updated = billing::toggle_clock(current, now);
    let clocked_in = billing::is_clocked_in(&updated);
    let total = billing::total_duration_ms(&updated, now);
    store.replace_job(updated).await.map_err(|e| e.to_string())?;

    if clocked_in {
        presenter.success("Clocked in");
    } else {
        presenter.success(&format!(
            "Clocked out, {} total on this job",
            billing::format_duration(total)
        ));
    }
    Ok(())
}

/// Toggle checklist flags on a job
pub async fn handle_checklist<P: Persistence>(
    job: &str,
    ppe: bool,
    voltage: bool,
    lockout: bool,
    hazards: bool,
    store: &mut AppStore<P>,
    presenter: &Presenter,
) -> Result<(), String> {
    let mut updated = store.find_job(job).map_err(|e| e.to_string())?.clone();

    if !(ppe || voltage || lockout || hazards) {
        let checklist = &updated.safety_checklist;
        presenter.key_value("ppe_worn", &checklist.ppe_worn.to_string());
        presenter.key_value("voltage_tested", &checklist.voltage_tested.to_string());
        presenter.key_value("lockout_tagout", &checklist.lockout_tagout.to_string());
        presenter.key_value("hazards_noted", &checklist.hazards_noted.to_string());
        return Ok(());
    }

    if ppe {
        updated.safety_checklist.ppe_worn = !updated.safety_checklist.ppe_worn;
    }
    if voltage {
        updated.safety_checklist.voltage_tested = !updated.safety_checklist.voltage_tested;
    }
    if lockout {
        updated.safety_checklist.lockout_tagout = !updated.safety_checklist.lockout_tagout;
    }
    if hazards {
        updated.safety_checklist.hazards_noted = !updated.safety_checklist.hazards_noted;
    }

    let completed = updated.safety_checklist.completed_count();
    store.replace_job(updated).await.map_err(|e| e.to_string())?;
    presenter.success(&format!("Safety checklist: {}/4 checks", completed));
    Ok(())
}

/// Replace free-text notes on a job
pub async fn handle_notes<P: Persistence>(
    job: &str,
    tech: Option<String>,
    customer: Option<String>,
    store: &mut AppStore<P>,
    presenter: &Presenter,
) -> Result<(), String> {
    if tech.is_none() && customer.is_none() {
        return Err("Provide --tech and/or --customer".to_string());
    }

    let mut updated = store.find_job(job).map_err(|e| e.to_string())?.clone();
    if let Some(tech) = tech {
        updated.tech_notes = tech;
    }
    if let Some(customer) = customer {
        updated.customer_notes = customer;
    }
    store.replace_job(updated).await.map_err(|e| e.to_string())?;
    presenter.success("Notes updated");
    Ok(())
}

/// Show time and cost totals for a job
pub fn handle_summary<P: Persistence>(
    job: &str,
    store: &AppStore<P>,
    presenter: &Presenter,
) -> Result<(), String> {
    let job = store.find_job(job).map_err(|e| e.to_string())?;
    let now = Utc::now();

    let duration = billing::total_duration_ms(job, now);
    let labor = billing::labor_cost(job, now);
    let parts = billing::parts_cost(job);

    presenter.heading(&format!("Summary: {}", job.customer_name));
    presenter.key_value("time", &billing::format_duration(duration));
    presenter.key_value(
        "rate",
        &format!("${:.2}/hr", job.hourly_rate),
    );
    presenter.key_value("labor", &format!("${:.2}", labor));
    presenter.key_value("parts", &format!("${:.2}", parts));
    presenter.key_value("total", &format!("${:.2}", labor + parts));
    if billing::is_clocked_in(job) {
        presenter.info("Clock is running; totals grow until clock-out");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::PersistenceError;
    use crate::domain::job::PropertyType;
    use crate::domain::settings::UserSettings;
    use async_trait::async_trait;

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

    #[tokio::test]
    async fn list_rejects_archived_as_a_status_filter() {
        let (mut store, _) = AppStore::load(MemoryPersistence).await;
        let archived = Job::new("Archived", "555-0100", "1 Main St", PropertyType::Residential, 85.0);
        let archived_id = archived.id.to_string();
        store.insert_job(archived).await.unwrap();
        store.toggle_archive(&archived_id).await.unwrap();

        let result = handle_job_action(
            JobAction::List {
                archived: false,
                status: Some(StatusArg::Archived),
                search: None,
            },
            &mut store,
            &Presenter::new(),
        )
        .await;

        assert!(result.unwrap_err().contains("--archived"));
    }
}
