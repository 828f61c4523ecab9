//! No-op speech source
//!
//! Null object for surfaces without a dictation facility.

use async_trait::async_trait;

use crate::application::ports::{Fragment, SpeechError, SpeechSource};

/// Speech source that reports itself unsupported
pub struct NoopSpeech;

#[async_trait]
impl SpeechSource for NoopSpeech {
    fn is_supported(&self) -> bool {
        false
    }

    async fn start(&mut self) -> Result<(), SpeechError> {
        Err(SpeechError::Unsupported)
    }

    async fn next_fragment(&mut self) -> Result<Option<Fragment>, SpeechError> {
        Ok(None)
    }

    async fn stop(&mut self) -> Result<(), SpeechError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn noop_is_unsupported() {
        let mut source = NoopSpeech;
        assert!(!source.is_supported());
        assert!(matches!(source.start().await, Err(SpeechError::Unsupported)));
        assert!(source.next_fragment().await.unwrap().is_none());
    }
}
