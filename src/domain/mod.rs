//! Domain layer - Core business logic
//!
//! Contains value objects, entities, and domain errors.
//! This layer has no dependencies on external systems.

pub mod catalog;
pub mod config;
pub mod diagnosis;
pub mod error;
pub mod job;
pub mod settings;

// Re-export common types
pub use config::AppConfig;
pub use diagnosis::{AiAnalysis, AnalysisPrompt, PromptTemplate, RequiredPart, TranscriptBuffer};
pub use error::*;
pub use job::{Job, JobStatus, Part, Photo, PropertyType, SafetyChecklist, TimeLog, VoiceNote};
pub use settings::UserSettings;
