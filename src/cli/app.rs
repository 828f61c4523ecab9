//! Main app runner

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::application::ports::ConfigStore;
use crate::application::AppStore;
use crate::domain::config::AppConfig;
use crate::infrastructure::{JsonFileStore, XdgConfigStore};

use super::args::{Cli, Commands};
use super::capture_cmd::handle_note;
use super::config_cmd::handle_config_command;
use super::job_cmd::{
    handle_checklist, handle_clock, handle_job_action, handle_notes, handle_summary,
};
use super::parts_cmd::{handle_catalog, handle_part_action};
use super::photo_cmd::handle_photo_action;
use super::presenter::Presenter;
use super::settings_cmd::handle_settings_action;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;

/// Load config from file, or fall back to defaults on any failure
pub async fn load_config(config_store: &XdgConfigStore, presenter: &Presenter) -> AppConfig {
    match config_store.load().await {
        Ok(config) => AppConfig::defaults().merge(config),
        Err(e) => {
            presenter.warn(&format!("Could not load config, using defaults: {}", e));
            AppConfig::defaults()
        }
    }
}

/// Get API key from environment or config file
pub fn resolve_api_key(config: &AppConfig) -> Option<String> {
    if let Ok(key) = env::var("GEMINI_API_KEY") {
        if !key.is_empty() {
            return Some(key);
        }
    }
    config.api_key.clone()
}

/// Run the parsed CLI command
pub async fn run(cli: Cli) -> ExitCode {
    let mut presenter = Presenter::new();
    let config_store = XdgConfigStore::new();

    // Config management and catalog browsing need no data store
    let command = match cli.command {
        Commands::Config { action } => {
            return match handle_config_command(action, &config_store, &presenter).await {
                Ok(()) => ExitCode::from(EXIT_SUCCESS),
                Err(e) => {
                    presenter.error(&e.to_string());
                    ExitCode::from(EXIT_ERROR)
                }
            };
        }
        Commands::Catalog { category, search } => {
            return match handle_catalog(category.as_deref(), &search, &presenter) {
                Ok(()) => ExitCode::from(EXIT_SUCCESS),
                Err(e) => {
                    presenter.error(&e);
                    ExitCode::from(EXIT_ERROR)
                }
            };
        }
        command => command,
    };

    let config = load_config(&config_store, &presenter).await;

    let persistence = match &config.data_dir {
        Some(dir) => JsonFileStore::with_dir(PathBuf::from(dir)),
        None => JsonFileStore::new(),
    };

    let (mut store, warnings) = AppStore::load(persistence).await;
    for warning in &warnings {
        presenter.warn(warning);
    }

    let result = match command {
        Commands::Job { action } => handle_job_action(action, &mut store, &presenter).await,
        Commands::Clock { job } => handle_clock(&job, &mut store, &presenter).await,
        Commands::Note {
            job,
            text,
            dictate,
            no_analysis,
        } => {
            let api_key = resolve_api_key(&config);
            handle_note(
                &job,
                text,
                dictate,
                no_analysis,
                api_key,
                &config,
                &mut store,
                &mut presenter,
            )
            .await
        }
        Commands::Photo { action } => handle_photo_action(action, &mut store, &presenter).await,
        Commands::Part { action } => handle_part_action(action, &mut store, &presenter).await,
        Commands::Checklist {
            job,
            ppe,
            voltage,
            lockout,
            hazards,
        } => handle_checklist(&job, ppe, voltage, lockout, hazards, &mut store, &presenter).await,
        Commands::Notes { job, tech, customer } => {
            handle_notes(&job, tech, customer, &mut store, &presenter).await
        }
        Commands::Summary { job } => handle_summary(&job, &store, &presenter),
        Commands::Settings { action } => {
            handle_settings_action(action, &mut store, &presenter).await
        }
        // Handled above
        Commands::Config { .. } | Commands::Catalog { .. } => unreachable!(),
    };

    match result {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(e) => {
            presenter.error(&e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}
