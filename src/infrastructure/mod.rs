//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with external systems: the Gemini API, the on-disk
//! JSON documents, the terminal dictation source.

pub mod analysis;
pub mod config;
pub mod persistence;
pub mod speech;

// Re-export adapters
pub use analysis::GeminiAnalyzer;
pub use config::XdgConfigStore;
pub use persistence::JsonFileStore;
pub use speech::{NoopSpeech, StdinSpeech};
