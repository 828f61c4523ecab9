//! Transcript accumulation buffer

/// Accumulates finalized speech fragments into the transcript handed to the
/// capture pipeline. Interim fragments are dropped; only final fragments
/// contribute, separated by single spaces.
#[derive(Debug, Clone, Default)]
pub struct TranscriptBuffer {
    fragments: Vec<String>,
}

impl TranscriptBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a finalized fragment. Whitespace-only fragments are ignored.
    pub fn push_final(&mut self, fragment: &str) {
        let trimmed = fragment.trim();
        if !trimmed.is_empty() {
            self.fragments.push(trimmed.to_string());
        }
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// The accumulated transcript
    pub fn text(&self) -> String {
        self.fragments.join(" ")
    }

    /// Consume the buffer, returning the transcript
    pub fn into_text(self) -> String {
        self.fragments.join(" ")
    }
}
