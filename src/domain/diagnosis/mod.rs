//! Diagnostic capture value objects

pub mod analysis;
pub mod prompt;
pub mod transcript;

pub use analysis::{AiAnalysis, RequiredPart};
pub use prompt::{AnalysisPrompt, PromptTemplate};
pub use transcript::TranscriptBuffer;
