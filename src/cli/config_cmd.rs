//! Config command handler

use crate::application::ports::ConfigStore;
use crate::domain::config::app_config::PromptConfig;
use crate::domain::error::ConfigError;

use super::args::{is_valid_config_key, ConfigAction, VALID_CONFIG_KEYS};
use super::presenter::Presenter;

/// Handle config subcommand
pub async fn handle_config_command<S: ConfigStore>(
    action: ConfigAction,
    store: &S,
    presenter: &Presenter,
) -> Result<(), ConfigError> {
    match action {
        ConfigAction::Init => handle_init(store, presenter).await,
        ConfigAction::Set { key, value } => handle_set(store, presenter, &key, &value).await,
        ConfigAction::Get { key } => handle_get(store, presenter, &key).await,
        ConfigAction::List => handle_list(store, presenter).await,
        ConfigAction::Path => handle_path(store, presenter),
    }
}

async fn handle_init<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    store.init().await?;
    presenter.success(&format!(
        "Config file created at: {}",
        store.path().display()
    ));
    Ok(())
}

async fn handle_set<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
    value: &str,
) -> Result<(), ConfigError> {
    if !is_valid_config_key(key) {
        return Err(ConfigError::ValidationError {
            key: key.to_string(),
            message: format!("Unknown key. Valid keys: {}", VALID_CONFIG_KEYS.join(", ")),
        });
    }

    let mut config = store.load().await?;

    match key {
        "api_key" => config.api_key = Some(value.to_string()),
        "model" => config.model = Some(value.to_string()),
        "data_dir" => config.data_dir = Some(value.to_string()),
        "prompt.persona" => {
            prompt_mut(&mut config).persona = Some(value.to_string());
        }
        "prompt.jurisdiction" => {
            prompt_mut(&mut config).jurisdiction = Some(value.to_string());
        }
        "prompt.code_references" => {
            // Semicolon-separated list
            let references: Vec<String> = value
                .split(';')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
            if references.is_empty() {
                return Err(ConfigError::ValidationError {
                    key: key.to_string(),
                    message: "Provide at least one reference (semicolon-separated)".to_string(),
                });
            }
            prompt_mut(&mut config).code_references = Some(references);
        }
        _ => unreachable!(), // Already validated
    }

    store.save(&config).await?;
    presenter.success(&format!("{} = {}", key, value));

    Ok(())
}

fn prompt_mut(config: &mut crate::domain::config::AppConfig) -> &mut PromptConfig {
    config.prompt.get_or_insert_with(PromptConfig::default)
}

async fn handle_get<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
) -> Result<(), ConfigError> {
    if !is_valid_config_key(key) {
        return Err(ConfigError::ValidationError {
            key: key.to_string(),
            message: format!("Unknown key. Valid keys: {}", VALID_CONFIG_KEYS.join(", ")),
        });
    }

    let config = store.load().await?;

    let value = match key {
        "api_key" => config.api_key.map(|s| mask_api_key(&s)),
        "model" => config.model,
        "data_dir" => config.data_dir,
        "prompt.persona" => config.prompt.as_ref().and_then(|p| p.persona.clone()),
        "prompt.jurisdiction" => config.prompt.as_ref().and_then(|p| p.jurisdiction.clone()),
        "prompt.code_references" => config
            .prompt
            .as_ref()
            .and_then(|p| p.code_references.as_ref())
            .map(|refs| refs.join("; ")),
        _ => unreachable!(),
    };

    match value {
        Some(v) => presenter.output(&v),
        None => presenter.output("(not set)"),
    }

    Ok(())
}

async fn handle_list<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    let config = store.load().await?;

    presenter.key_value(
        "api_key",
        &config
            .api_key
            .map(|s| mask_api_key(&s))
            .unwrap_or_else(|| "(not set)".to_string()),
    );
    presenter.key_value("model", config.model.as_deref().unwrap_or("(not set)"));
    presenter.key_value("data_dir", config.data_dir.as_deref().unwrap_or("(not set)"));
    presenter.key_value(
        "prompt.persona",
        config
            .prompt
            .as_ref()
            .and_then(|p| p.persona.as_deref())
            .unwrap_or("(built-in)"),
    );
    presenter.key_value(
        "prompt.jurisdiction",
        config
            .prompt
            .as_ref()
            .and_then(|p| p.jurisdiction.as_deref())
            .unwrap_or("(built-in)"),
    );
    presenter.key_value(
        "prompt.code_references",
        &config
            .prompt
            .as_ref()
            .and_then(|p| p.code_references.as_ref())
            .map(|refs| refs.join("; "))
            .unwrap_or_else(|| "(built-in)".to_string()),
    );

    Ok(())
}

fn handle_path<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    presenter.output(&store.path().display().to_string());
    Ok(())
}

/// Mask an API key for display, keeping only a short prefix
fn mask_api_key(key: &str) -> String {
    if key.len() <= 4 {
        "****".to_string()
    } else {
        format!("{}****", &key[..4])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mask_hides_most_of_the_key() {
        assert_eq!(mask_api_key("abcdef123456"), "abcd****");
        assert_eq!(mask_api_key("ab"), "****");
    }
}
