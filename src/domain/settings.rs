//! User settings record

use serde::{Deserialize, Serialize};

/// Technician preferences, persisted as a single document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSettings {
    pub name: String,
    pub company: String,
    pub default_hourly_rate: f64,
    pub dark_mode: bool,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            name: "Technician".to_string(),
            company: "Pro Volt Electric".to_string(),
            default_hourly_rate: 85.0,
            dark_mode: true,
        }
    }
}
