//! Analysis adapters

pub mod gemini;

pub use gemini::GeminiAnalyzer;
