//! Diagnostic analysis port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::diagnosis::{AiAnalysis, AnalysisPrompt};

/// Analysis errors
#[derive(Debug, Clone, Error)]
pub enum AnalysisError {
    #[error("Invalid API key")]
    InvalidApiKey,

    #[error("Rate limit exceeded. Please try again later.")]
    RateLimited,

    #[error("Empty analysis response")]
    EmptyResponse,

    #[error("API request failed: {0}")]
    RequestFailed(String),

    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    #[error("Analysis response violated the schema: missing or empty '{0}'")]
    SchemaViolation(&'static str),

    #[error("API error: {0}")]
    ApiError(String),
}

/// Port for the external diagnostic analysis service
#[async_trait]
pub trait Analyzer: Send + Sync {
    /// Analyze a technician's problem description.
    ///
    /// # Arguments
    /// * `prompt` - The rendered instruction block plus the transcript
    ///
    /// # Returns
    /// A schema-valid analysis, or an error. A response that does not parse
    /// against the schema is an error, never a partial analysis.
    async fn analyze(&self, prompt: &AnalysisPrompt) -> Result<AiAnalysis, AnalysisError>;
}
