//! Application layer - Use cases and port interfaces
//!
//! Contains the core business operations and trait definitions
//! for external system interactions.

pub mod capture;
pub mod ports;
pub mod store;

// Re-export use cases
pub use capture::{collect_transcript, CaptureOutcome, CapturePipeline};
pub use store::{AppStore, StoreError};
