//! Voice note record

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::diagnosis::AiAnalysis;

/// One technician-submitted problem description plus optional AI-derived
/// analysis.
///
/// Created once, fully formed: the analysis is attached up front, or
/// omitted when the external call failed. Never edited afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoiceNote {
    pub id: Uuid,
    pub transcript: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis: Option<AiAnalysis>,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
}

impl VoiceNote {
    /// Create a note holding the verbatim transcript, with no analysis
    pub fn new(transcript: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            transcript: transcript.into(),
            analysis: None,
            timestamp: Utc::now(),
        }
    }

    /// Attach the analysis result, consuming the note
    pub fn with_analysis(mut self, analysis: AiAnalysis) -> Self {
        self.analysis = Some(analysis);
        self
    }
}
