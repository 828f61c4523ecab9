//! Structured diagnostic analysis payload

use serde::{Deserialize, Serialize};

/// A part the analysis recommends stocking for the repair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequiredPart {
    pub name: String,
    pub quantity: u32,
}

/// Structured diagnostic output from the external inference call.
///
/// The schema is the upstream service's contract; locally this is an opaque
/// success payload. [`validate`](AiAnalysis::validate) only checks the
/// structural minimums the contract promises, so a response that fails it
/// surfaces as an analysis error rather than a half-populated record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiAnalysis {
    /// One-sentence professional summary of the issue
    pub summary: String,
    /// Potential root causes, most likely first
    pub causes: Vec<String>,
    /// Prioritized troubleshooting or repair steps
    pub steps: Vec<String>,
    /// Parts the repair is expected to need
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parts: Option<Vec<RequiredPart>>,
    /// Rough cost estimate, free-form (e.g. "$150-$250")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_cost: Option<String>,
}

impl AiAnalysis {
    /// Check the structural contract: non-empty summary, causes, and steps.
    /// Returns the first violated field name on failure.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.summary.trim().is_empty() {
            return Err("summary");
        }
        if self.causes.is_empty() {
            return Err("causes");
        }
        if self.steps.is_empty() {
            return Err("steps");
        }
        Ok(())
    }
}
