//! Gemini API analyzer adapter

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::application::ports::{AnalysisError, Analyzer};
use crate::domain::diagnosis::{AiAnalysis, AnalysisPrompt};

/// Gemini API model to use
const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

/// Gemini API base URL
const API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

// Request types for Gemini API

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content {
    role: String,
    parts: Vec<TextPart>,
}

#[derive(Debug, Serialize)]
struct TextPart {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: String,
    response_schema: serde_json::Value,
}

// Response types for Gemini API

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
    error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    parts: Option<Vec<ResponsePart>>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    message: String,
}

/// The fixed response schema the service must answer with
fn response_schema() -> serde_json::Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "summary": {
                "type": "STRING",
                "description": "A professional one-sentence summary of the electrical issue."
            },
            "causes": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "At least 3 potential root causes based on electrical theory and NEC standards."
            },
            "steps": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "Prioritized troubleshooting or repair steps that comply with safety regulations and the NEC."
            },
            "parts": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "name": { "type": "STRING" },
                        "quantity": { "type": "INTEGER" }
                    },
                    "required": ["name", "quantity"]
                },
                "description": "Parts the repair is expected to need."
            },
            "estimatedCost": {
                "type": "STRING",
                "description": "Rough parts-and-labor estimate, e.g. \"$150-$250\"."
            }
        },
        "required": ["summary", "causes", "steps"]
    })
}

/// Gemini API analyzer
pub struct GeminiAnalyzer {
    api_key: String,
    model: String,
    base_url: String,
    client: reqwest::Client,
}

impl GeminiAnalyzer {
    /// Create a new Gemini analyzer with the given API key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            base_url: API_BASE_URL.to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Create a new Gemini analyzer with a custom model
    pub fn with_model(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            ..Self::new(api_key)
        }
    }

    /// Point the analyzer at a different base URL, e.g. a local mock server
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::new(api_key)
        }
    }

    /// Build the API URL
    fn api_url(&self) -> String {
        format!(
            "{}/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        )
    }

    /// Build the request body
    fn build_request(&self, prompt: &AnalysisPrompt) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![TextPart {
                    text: prompt.content().to_string(),
                }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: response_schema(),
            },
        }
    }

    /// Extract text from response
    fn extract_text(response: &GenerateContentResponse) -> Option<String> {
        let parts: Vec<&str> = response
            .candidates
            .as_ref()?
            .first()?
            .content
            .as_ref()?
            .parts
            .as_ref()?
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();

        if parts.is_empty() {
            None
        } else {
            Some(parts.join(""))
        }
    }

    /// Parse the candidate text as an analysis and check the schema contract
    fn parse_analysis(text: &str) -> Result<AiAnalysis, AnalysisError> {
        let analysis: AiAnalysis = serde_json::from_str(text)
            .map_err(|e| AnalysisError::ParseError(e.to_string()))?;
        analysis
            .validate()
            .map_err(AnalysisError::SchemaViolation)?;
        Ok(analysis)
    }
}

#[async_trait]
impl Analyzer for GeminiAnalyzer {
    async fn analyze(&self, prompt: &AnalysisPrompt) -> Result<AiAnalysis, AnalysisError> {
        let url = self.api_url();
        let body = self.build_request(prompt);

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| AnalysisError::RequestFailed(e.to_string()))?;

        let status = response.status();

        // Handle HTTP errors
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(AnalysisError::InvalidApiKey);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(AnalysisError::RateLimited);
        }

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AnalysisError::ApiError(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        // Parse response
        let response: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| AnalysisError::ParseError(e.to_string()))?;

        // Check for API error in response body
        if let Some(error) = response.error {
            return Err(AnalysisError::ApiError(error.message));
        }

        // Extract the candidate text and parse it against the schema
        let text = Self::extract_text(&response).ok_or(AnalysisError::EmptyResponse)?;
        Self::parse_analysis(text.trim())
    }
}
