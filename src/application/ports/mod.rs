//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod analyzer;
pub mod config;
pub mod persistence;
pub mod speech;

// Re-export common types
pub use analyzer::{AnalysisError, Analyzer};
pub use config::ConfigStore;
pub use persistence::{Persistence, PersistenceError};
pub use speech::{Fragment, SpeechError, SpeechSource};
