//! Application configuration value object

use serde::{Deserialize, Serialize};

use crate::domain::diagnosis::PromptTemplate;

/// Overrides for the analysis prompt's regulatory framing.
/// Absent fields fall back to the built-in North Carolina template.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PromptConfig {
    pub persona: Option<String>,
    pub jurisdiction: Option<String>,
    pub code_references: Option<Vec<String>>,
}

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_key: Option<String>,
    pub model: Option<String>,
    pub data_dir: Option<String>,
    pub prompt: Option<PromptConfig>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            api_key: None,
            model: Some("gemini-3-flash-preview".to_string()),
            data_dir: None,
            prompt: Some(PromptConfig::default()),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            api_key: other.api_key.or(self.api_key),
            model: other.model.or(self.model),
            data_dir: other.data_dir.or(self.data_dir),
            prompt: Self::merge_prompt_config(self.prompt, other.prompt),
        }
    }

    fn merge_prompt_config(
        base: Option<PromptConfig>,
        other: Option<PromptConfig>,
    ) -> Option<PromptConfig> {
        match (base, other) {
            (None, None) => None,
            (Some(b), None) => Some(b),
            (None, Some(o)) => Some(o),
            (Some(b), Some(o)) => Some(PromptConfig {
                persona: o.persona.or(b.persona),
                jurisdiction: o.jurisdiction.or(b.jurisdiction),
                code_references: o.code_references.or(b.code_references),
            }),
        }
    }

    /// Get the model name, or the built-in default if not set
    pub fn model_or_default(&self) -> &str {
        self.model.as_deref().unwrap_or("gemini-3-flash-preview")
    }

    /// Build the prompt template, applying any configured overrides
    pub fn prompt_template(&self) -> PromptTemplate {
        let mut template = PromptTemplate::default();
        if let Some(prompt) = &self.prompt {
            if let Some(persona) = &prompt.persona {
                template.persona = persona.clone();
            }
            if let Some(jurisdiction) = &prompt.jurisdiction {
                template.jurisdiction = jurisdiction.clone();
            }
            if let Some(references) = &prompt.code_references {
                template.code_references = references.clone();
            }
        }
        template
    }
}
