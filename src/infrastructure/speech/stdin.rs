//! Terminal dictation speech source
//!
//! Treats interactive stdin as the dictation facility: every complete line
//! is a finalized fragment, and an empty line or EOF ends the session.

use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

use crate::application::ports::{Fragment, SpeechError, SpeechSource};

/// Line-oriented speech source over stdin
pub struct StdinSpeech {
    lines: Option<Lines<BufReader<Stdin>>>,
}

impl StdinSpeech {
    pub fn new() -> Self {
        Self { lines: None }
    }
}

impl Default for StdinSpeech {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SpeechSource for StdinSpeech {
    fn is_supported(&self) -> bool {
        true
    }

    async fn start(&mut self) -> Result<(), SpeechError> {
        self.lines = Some(BufReader::new(tokio::io::stdin()).lines());
        Ok(())
    }

    async fn next_fragment(&mut self) -> Result<Option<Fragment>, SpeechError> {
        let Some(lines) = self.lines.as_mut() else {
            return Ok(None);
        };

        let line = lines
            .next_line()
            .await
            .map_err(|e| SpeechError::CaptureFailed(e.to_string()))?;

        match line {
            // Empty line ends the session, like a final-result silence
            Some(text) if text.trim().is_empty() => Ok(None),
            Some(text) => Ok(Some(Fragment {
                text,
                is_final: true,
            })),
            None => Ok(None),
        }
    }

    async fn stop(&mut self) -> Result<(), SpeechError> {
        self.lines = None;
        Ok(())
    }
}
