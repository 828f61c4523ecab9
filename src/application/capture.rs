//! Diagnostic capture use case
//!
//! Turns a technician's free-text or dictated description into a voice
//! note, enriched with an analysis from the external service when the call
//! succeeds. The note and its analysis are committed together in a single
//! job update; a failed analysis downgrades to an analysis-less note, never
//! to a lost record.

use uuid::Uuid;

use crate::domain::diagnosis::{AnalysisPrompt, PromptTemplate, TranscriptBuffer};
use crate::domain::job::VoiceNote;

use super::ports::{AnalysisError, Analyzer, Persistence, SpeechError, SpeechSource};
use super::store::{AppStore, StoreError};

/// Result of one capture submission
#[derive(Debug)]
pub enum CaptureOutcome {
    /// Whitespace-only input; nothing was created or mutated
    Rejected,
    /// A voice note was committed to the job
    Captured {
        note_id: Uuid,
        /// The analysis failure, when enrichment was lost
        analysis_failure: Option<AnalysisError>,
    },
}

impl CaptureOutcome {
    pub fn was_captured(&self) -> bool {
        matches!(self, Self::Captured { .. })
    }
}

/// Capture pipeline over an analyzer port.
///
/// Callers await `submit` linearly; there is no retry, no queueing, and no
/// cancellation. Overlapping submissions are prevented at the interaction
/// surface, not here.
pub struct CapturePipeline<A: Analyzer> {
    analyzer: A,
    template: PromptTemplate,
}

impl<A: Analyzer> CapturePipeline<A> {
    pub fn new(analyzer: A, template: PromptTemplate) -> Self {
        Self { analyzer, template }
    }

    /// Submit a transcript against a job.
    ///
    /// Exactly one store update happens for non-empty input: the note is
    /// prepended to the job's voice notes with its analysis already
    /// attached, or with none when the external call failed.
    pub async fn submit<P: Persistence>(
        &self,
        store: &mut AppStore<P>,
        job_id: &str,
        text: &str,
    ) -> Result<CaptureOutcome, StoreError> {
        let transcript = text.trim();
        if transcript.is_empty() {
            return Ok(CaptureOutcome::Rejected);
        }

        // Resolve the job before calling out, so a bad id fails fast
        store.find_job(job_id)?;

        let note = VoiceNote::new(transcript);
        let note_id = note.id;

        let prompt = AnalysisPrompt::build(&self.template, transcript);
        let (note, analysis_failure) = match self.analyzer.analyze(&prompt).await {
            Ok(analysis) => (note.with_analysis(analysis), None),
            Err(e) => (note, Some(e)),
        };

        store.prepend_voice_note(job_id, note).await?;

        Ok(CaptureOutcome::Captured {
            note_id,
            analysis_failure,
        })
    }
}

/// Drain a speech source, accumulating only finalized fragments.
///
/// Returns the assembled transcript, which may be empty if the session
/// produced no final fragments.
pub async fn collect_transcript(source: &mut dyn SpeechSource) -> Result<String, SpeechError> {
    if !source.is_supported() {
        return Err(SpeechError::Unsupported);
    }

    source.start().await?;

    let mut buffer = TranscriptBuffer::new();
    while let Some(fragment) = source.next_fragment().await? {
        if fragment.is_final {
            buffer.push_final(&fragment.text);
        }
    }

    source.stop().await?;
    Ok(buffer.into_text())
}
