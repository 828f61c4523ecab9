//! Analysis prompt value object
//!
//! The regulatory framing sent upstream is static instruction content, kept
//! as a template so the persona and jurisdiction are swappable without
//! touching the analyzer.

/// Default persona, matching the analyses produced by earlier releases
const DEFAULT_PERSONA: &str = "an expert master electrician licensed in North Carolina";

const DEFAULT_JURISDICTION: &str =
    "North Carolina, under the State Board of Examiners of Electrical Contractors";

const DEFAULT_CODE_REFERENCES: &[&str] = &[
    "The National Electrical Code (NEC) latest standards.",
    "NC General Statutes Chapter 87, Article 4.",
    "Title 21, Chapter 18 of the NC Administrative Code.",
];

/// Configurable instruction template for the analysis call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptTemplate {
    pub persona: String,
    pub jurisdiction: String,
    pub code_references: Vec<String>,
}

impl Default for PromptTemplate {
    fn default() -> Self {
        Self {
            persona: DEFAULT_PERSONA.to_string(),
            jurisdiction: DEFAULT_JURISDICTION.to_string(),
            code_references: DEFAULT_CODE_REFERENCES
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

/// Value object holding the complete rendered prompt for one analysis call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisPrompt {
    content: String,
}

impl AnalysisPrompt {
    /// Render the instruction block plus the technician's description
    pub fn build(template: &PromptTemplate, transcript: &str) -> Self {
        let references = template
            .code_references
            .iter()
            .enumerate()
            .map(|(i, reference)| format!("{}. {}", i + 1, reference))
            .collect::<Vec<_>>()
            .join("\n");

        let content = format!(
            "You are {persona}.\n\
             Analyze the following field technician description.\n\
             Your analysis MUST strictly adhere to:\n\
             {references}\n\n\
             Ensure all troubleshooting steps prioritize safety and compliance \
             with the electrical licensing authority in {jurisdiction}.\n\n\
             Problem description: {transcript}",
            persona = template.persona,
            references = references,
            jurisdiction = template.jurisdiction,
            transcript = transcript,
        );

        Self { content }
    }

    /// Get the prompt content
    pub fn content(&self) -> &str {
        &self.content
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_template_carries_nc_framing() {
        let prompt = AnalysisPrompt::build(&PromptTemplate::default(), "breaker trips");
        assert!(prompt.content().contains("master electrician"));
        assert!(prompt.content().contains("National Electrical Code"));
        assert!(prompt.content().contains("Chapter 87, Article 4"));
        assert!(prompt.content().contains("State Board of Examiners"));
    }

    #[test]
    fn transcript_appears_after_instructions() {
        let prompt = AnalysisPrompt::build(&PromptTemplate::default(), "240V present at panel");
        assert!(prompt
            .content()
            .ends_with("Problem description: 240V present at panel"));
    }

    #[test]
    fn references_are_numbered() {
        let template = PromptTemplate {
            persona: "a journeyman".to_string(),
            jurisdiction: "Oregon".to_string(),
            code_references: vec!["NEC 2023.".to_string(), "OAR 918.".to_string()],
        };
        let prompt = AnalysisPrompt::build(&template, "x");
        assert!(prompt.content().contains("1. NEC 2023."));
        assert!(prompt.content().contains("2. OAR 918."));
        assert!(prompt.content().contains("Oregon"));
    }

    #[test]
    fn different_templates_different_prompts() {
        let default_prompt = AnalysisPrompt::build(&PromptTemplate::default(), "x");
        let custom = PromptTemplate {
            persona: "an apprentice".to_string(),
            ..PromptTemplate::default()
        };
        assert_ne!(
            default_prompt,
            AnalysisPrompt::build(&custom, "x")
        );
    }
}
