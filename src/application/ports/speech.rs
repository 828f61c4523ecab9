//! Speech capture port interface

use async_trait::async_trait;
use thiserror::Error;

/// One transcript fragment from a speech source. Interim fragments may be
/// revised by the source; only final fragments are accumulated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub text: String,
    pub is_final: bool,
}

/// Speech capture errors
#[derive(Debug, Clone, Error)]
pub enum SpeechError {
    #[error("Speech capture is not supported on this surface")]
    Unsupported,

    #[error("Speech capture failed: {0}")]
    CaptureFailed(String),
}

/// Port for a streaming speech-to-text facility.
///
/// Implementations that have no dictation facility available return
/// `is_supported() == false` and act as null objects.
#[async_trait]
pub trait SpeechSource: Send {
    fn is_supported(&self) -> bool;

    /// Begin a capture session
    async fn start(&mut self) -> Result<(), SpeechError>;

    /// Next fragment, or `None` when the session has ended
    async fn next_fragment(&mut self) -> Result<Option<Fragment>, SpeechError>;

    /// End the capture session
    async fn stop(&mut self) -> Result<(), SpeechError>;
}
