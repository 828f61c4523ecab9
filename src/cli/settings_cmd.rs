//! Settings command handler

use crate::application::ports::Persistence;
use crate::application::AppStore;

use super::args::{SettingsAction, VALID_SETTINGS_KEYS};
use super::presenter::Presenter;

/// Handle settings subcommand
pub async fn handle_settings_action<P: Persistence>(
    action: SettingsAction,
    store: &mut AppStore<P>,
    presenter: &Presenter,
) -> Result<(), String> {
    match action {
        SettingsAction::Show => {
            let settings = store.settings();
            presenter.key_value("name", &settings.name);
            presenter.key_value("company", &settings.company);
            presenter.key_value(
                "default_hourly_rate",
                &format!("{:.2}", settings.default_hourly_rate),
            );
            presenter.key_value("dark_mode", &settings.dark_mode.to_string());
            Ok(())
        }

        SettingsAction::Set { key, value } => {
            let mut settings = store.settings().clone();
            match key.as_str() {
                "name" => settings.name = value.clone(),
                "company" => settings.company = value.clone(),
                "default_hourly_rate" => {
                    let rate: f64 = value
                        .parse()
                        .map_err(|_| "default_hourly_rate must be a number".to_string())?;
                    if !rate.is_finite() || rate < 0.0 {
                        return Err("default_hourly_rate must be a non-negative number".to_string());
                    }
                    settings.default_hourly_rate = rate;
                }
                "dark_mode" => {
                    settings.dark_mode = match value.as_str() {
                        "true" | "on" => true,
                        "false" | "off" => false,
                        _ => return Err("dark_mode must be 'true' or 'false'".to_string()),
                    };
                }
                _ => {
                    return Err(format!(
                        "Unknown key \"{}\". Valid keys: {}",
                        key,
                        VALID_SETTINGS_KEYS.join(", ")
                    ));
                }
            }

            store
                .replace_settings(settings)
                .await
                .map_err(|e| e.to_string())?;
            presenter.success(&format!("{} = {}", key, value));
            Ok(())
        }
    }
}
