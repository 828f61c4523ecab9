//! Diagnostic note capture command handler

use crate::application::ports::SpeechError;
use crate::application::{collect_transcript, AppStore, CaptureOutcome, CapturePipeline};
use crate::domain::config::AppConfig;
use crate::domain::job::VoiceNote;
use crate::infrastructure::persistence::JsonFileStore;
use crate::infrastructure::{GeminiAnalyzer, StdinSpeech};

use super::presenter::Presenter;

/// Handle the `note` command: capture a transcript from the argument or
/// terminal dictation, analyze it when possible, and commit it to the job.
///
/// The capture surface awaits the analysis call linearly: the process
/// accepts no further input until the call returns, so only one request is
/// ever in flight.
pub async fn handle_note(
    job: &str,
    text: Option<String>,
    dictate: bool,
    no_analysis: bool,
    api_key: Option<String>,
    config: &AppConfig,
    store: &mut AppStore<JsonFileStore>,
    presenter: &mut Presenter,
) -> Result<(), String> {
    let transcript = match text {
        Some(text) if !dictate => text,
        _ => dictate_transcript(presenter).await?,
    };

    let transcript = transcript.trim().to_string();
    if transcript.is_empty() {
        presenter.info("Nothing to record");
        return Ok(());
    }

    // Without analysis (opted out or no key), the record is still kept
    let api_key = match (no_analysis, api_key) {
        (true, _) => None,
        (false, Some(key)) => Some(key),
        (false, None) => {
            presenter.warn(
                "No API key configured (set GEMINI_API_KEY or 'fieldvolt config set api_key'); \
                 saving the note without analysis",
            );
            None
        }
    };

    let Some(api_key) = api_key else {
        store.find_job(job).map_err(|e| e.to_string())?;
        let note = VoiceNote::new(transcript);
        let note_id = note.id;
        store
            .prepend_voice_note(job, note)
            .await
            .map_err(|e| e.to_string())?;
        presenter.success(&format!("Note {} saved", &note_id.to_string()[..8]));
        return Ok(());
    };

    let analyzer = GeminiAnalyzer::with_model(api_key, config.model_or_default());
    let pipeline = CapturePipeline::new(analyzer, config.prompt_template());

    presenter.start_spinner("Analyzing description...");
    let outcome = pipeline.submit(store, job, &transcript).await;

    match outcome {
        Ok(CaptureOutcome::Captured {
            note_id,
            analysis_failure: None,
        }) => {
            presenter.spinner_success("Analysis complete");
            presenter.success(&format!("Note {} saved with analysis", &note_id.to_string()[..8]));
            if let Some(analysis) = store
                .find_job(job)
                .ok()
                .and_then(|j| j.voice_notes.first())
                .and_then(|n| n.analysis.as_ref())
            {
                render_analysis(analysis, presenter);
            }
            Ok(())
        }
        Ok(CaptureOutcome::Captured {
            note_id,
            analysis_failure: Some(failure),
        }) => {
            presenter.spinner_fail("Analysis unavailable");
            presenter.warn(&format!("{}; note saved without analysis", failure));
            presenter.success(&format!("Note {} saved", &note_id.to_string()[..8]));
            Ok(())
        }
        Ok(CaptureOutcome::Rejected) => {
            presenter.stop_spinner();
            presenter.info("Nothing to record");
            Ok(())
        }
        Err(e) => {
            presenter.stop_spinner();
            Err(e.to_string())
        }
    }
}

async fn dictate_transcript(presenter: &Presenter) -> Result<String, String> {
    presenter.info("Dictation: one phrase per line, empty line to finish");
    let mut source = StdinSpeech::new();
    match collect_transcript(&mut source).await {
        Ok(transcript) => Ok(transcript),
        Err(SpeechError::Unsupported) => {
            Err("Dictation is not available on this surface; pass the text directly".to_string())
        }
        Err(e) => Err(e.to_string()),
    }
}

fn render_analysis(analysis: &crate::domain::diagnosis::AiAnalysis, presenter: &Presenter) {
    presenter.output("");
    presenter.heading("Diagnosis");
    presenter.output(&analysis.summary);

    presenter.output("");
    presenter.heading("Likely causes");
    for cause in &analysis.causes {
        presenter.output(&format!("  - {}", cause));
    }

    presenter.output("");
    presenter.heading("Recommended steps");
    for (i, step) in analysis.steps.iter().enumerate() {
        presenter.output(&format!("  {}. {}", i + 1, step));
    }

    if let Some(parts) = &analysis.parts {
        presenter.output("");
        presenter.heading("Parts");
        for part in parts {
            presenter.output(&format!("  {} x{}", part.name, part.quantity));
        }
    }

    if let Some(estimate) = &analysis.estimated_cost {
        presenter.output("");
        presenter.key_value("Estimated cost", estimate);
    }
}
