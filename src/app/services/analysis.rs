//! Parse-then-summarize analysis
//!
//! Wraps [`parse_edi`] for a downstream text summarizer. The summarizer is an
//! explicit collaborator passed in by the caller; the only built-in client is
//! [`SimulatedSummarizer`], which answers offline.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::app::models::ParseResult;
use crate::app::services::transaction_router::parse_edi;
use crate::constants::{ANALYSIS_ERROR_PREFIX, ANALYSIS_SKIPPED_ERROR, SIMULATED_SUMMARIZER_MODEL};
use crate::{Error, Result};

/// Text summarizer consulted after a successful parse
pub trait Summarizer: Send + Sync {
    /// Produce an analysis for the given prompt
    fn summarize(&self, prompt: &str) -> Result<String>;

    /// Model label used in logs
    fn model(&self) -> &str;
}

/// Offline summarizer returning a canned note
#[derive(Debug, Clone, Default)]
pub struct SimulatedSummarizer;

impl SimulatedSummarizer {
    pub fn new() -> Self {
        Self
    }
}

impl Summarizer for SimulatedSummarizer {
    fn summarize(&self, prompt: &str) -> Result<String> {
        let label = document_label(prompt).unwrap_or("EDI document");
        Ok(format!(
            "<b>Simulated AI Response:</b> (Configure a summarizer model to enable real analysis)\
             <br><br>This is an <b>{}</b>. No anomalies detected.",
            label
        ))
    }

    fn model(&self) -> &str {
        SIMULATED_SUMMARIZER_MODEL
    }
}

/// Build the summarizer client named by a config value
pub fn summarizer_for_model(model: &str) -> Result<Arc<dyn Summarizer>> {
    match model {
        SIMULATED_SUMMARIZER_MODEL => Ok(Arc::new(SimulatedSummarizer::new())),
        other => Err(Error::configuration(format!(
            "Unknown summarizer model '{}' (available: {})",
            other, SIMULATED_SUMMARIZER_MODEL
        ))),
    }
}

/// Pull the `doc_type` value out of a prompt built by [`build_prompt`]
fn document_label(prompt: &str) -> Option<&str> {
    let marker = "\"doc_type\": \"";
    let start = prompt.find(marker)? + marker.len();
    let rest = &prompt[start..];
    rest.find('"').map(|end| &rest[..end])
}

/// Build the analyst prompt around pretty-printed record JSON
pub fn build_prompt(data_json: &str) -> String {
    format!(
        "You are an expert Supply Chain AI Agent.\n\
         Analyze the following parsed EDI (Electronic Data Interchange) data.\n\n\
         DATA:\n{}\n\n\
         YOUR TASK:\n\
         1. Summarize: What is happening in this document in plain English?\n\
         2. Anomalies: Are there any weird dates, missing SKUs, or urgent status codes?\n\
         3. Action Item: What should the warehouse manager do next?\n\n\
         Output Format: HTML (Use <b> for bold, <ul> for lists). Keep it concise.\n",
        data_json
    )
}

/// Outcome of [`analyze_edi`]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AnalysisOutcome {
    /// Parsing succeeded; `ai_analysis` holds the summary or an "AI Error" note
    Analyzed {
        parsed: ParseResult,
        ai_analysis: String,
    },
    /// Parsing failed so the summarizer was never called
    Skipped { error: String, details: ParseResult },
}

impl AnalysisOutcome {
    /// The underlying parse result
    pub fn parse_result(&self) -> &ParseResult {
        match self {
            Self::Analyzed { parsed, .. } => parsed,
            Self::Skipped { details, .. } => details,
        }
    }

    pub fn is_analyzed(&self) -> bool {
        matches!(self, Self::Analyzed { .. })
    }
}

/// Parse raw EDI and, on success, ask the summarizer about the extracted record
///
/// Summarizer failures never fail the outcome.
pub fn analyze_edi(raw: &str, summarizer: &dyn Summarizer) -> AnalysisOutcome {
    let parsed = parse_edi(raw);

    if !parsed.success {
        warn!("Skipping analysis: {}", parsed.error.as_deref().unwrap_or("parse failed"));
        return AnalysisOutcome::Skipped {
            error: ANALYSIS_SKIPPED_ERROR.to_string(),
            details: parsed,
        };
    }

    info!("Requesting analysis from summarizer '{}'", summarizer.model());

    let ai_analysis = match summarize_record(&parsed, summarizer) {
        Ok(text) => {
            debug!("Summarizer returned {} characters", text.len());
            text
        }
        Err(e) => {
            warn!("Summarizer '{}' failed: {}", summarizer.model(), e);
            format!("{}{}", ANALYSIS_ERROR_PREFIX, e)
        }
    };

    AnalysisOutcome::Analyzed {
        parsed,
        ai_analysis,
    }
}

fn summarize_record(parsed: &ParseResult, summarizer: &dyn Summarizer) -> Result<String> {
    let data_json = serde_json::to_string_pretty(&parsed.data)
        .map_err(|e| Error::json("Failed to serialize record for analysis", e))?;
    summarizer.summarize(&build_prompt(&data_json))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_850: &str =
        "ST*850*0001~BEG*00*SA*PO-1**20231204~PO1*1*100*EA*10.50**VP*PART123~SE*4*0001~";

    struct FailingSummarizer;

    impl Summarizer for FailingSummarizer {
        fn summarize(&self, _prompt: &str) -> Result<String> {
            Err(Error::summarizer("quota exceeded"))
        }

        fn model(&self) -> &str {
            "failing"
        }
    }

    struct EchoSummarizer;

    impl Summarizer for EchoSummarizer {
        fn summarize(&self, prompt: &str) -> Result<String> {
            Ok(prompt.to_string())
        }

        fn model(&self) -> &str {
            "echo"
        }
    }

    #[test]
    fn test_analysis_of_valid_document() {
        let outcome = analyze_edi(SAMPLE_850, &SimulatedSummarizer::new());

        let AnalysisOutcome::Analyzed { parsed, ai_analysis } = &outcome else {
            panic!("expected analysis");
        };
        assert!(parsed.success);
        assert!(ai_analysis.contains("850 Purchase Order"));
        assert!(ai_analysis.starts_with("<b>Simulated AI Response:</b>"));
    }

    #[test]
    fn test_analysis_skipped_when_parse_fails() {
        let outcome = analyze_edi("", &EchoSummarizer);

        let AnalysisOutcome::Skipped { error, details } = &outcome else {
            panic!("expected skipped analysis");
        };
        assert_eq!(error, "Could not parse EDI, so AI analysis was skipped.");
        assert_eq!(details.error.as_deref(), Some("Empty or invalid EDI content"));
        assert!(!outcome.is_analyzed());
    }

    #[test]
    fn test_summarizer_failure_is_reported_inline() {
        let outcome = analyze_edi(SAMPLE_850, &FailingSummarizer);

        let AnalysisOutcome::Analyzed { parsed, ai_analysis } = &outcome else {
            panic!("expected analysis");
        };
        assert!(parsed.success);
        assert_eq!(ai_analysis, "AI Error: Summarizer error: quota exceeded");
    }

    #[test]
    fn test_prompt_carries_record_json() {
        let outcome = analyze_edi(SAMPLE_850, &EchoSummarizer);

        let AnalysisOutcome::Analyzed { ai_analysis, .. } = &outcome else {
            panic!("expected analysis");
        };
        assert!(ai_analysis.contains("You are an expert Supply Chain AI Agent."));
        assert!(ai_analysis.contains("\"po_number\": \"PO-1\""));
        assert!(ai_analysis.contains("Output Format: HTML"));
    }

    #[test]
    fn test_outcome_json_shapes() {
        let analyzed = serde_json::to_value(analyze_edi(SAMPLE_850, &SimulatedSummarizer)).unwrap();
        assert_eq!(analyzed["parsed"]["detected_type"], "850");
        assert!(analyzed["ai_analysis"].is_string());

        let skipped = serde_json::to_value(analyze_edi("   ", &SimulatedSummarizer)).unwrap();
        assert_eq!(skipped["details"]["success"], false);
        assert!(skipped.get("parsed").is_none());
    }

    #[test]
    fn test_summarizer_for_model() {
        let summarizer = summarizer_for_model("simulated").unwrap();
        assert_eq!(summarizer.model(), "simulated");
        assert!(matches!(
            summarizer_for_model("gpt-9"),
            Err(Error::Configuration { .. })
        ));
    }

    #[test]
    fn test_document_label() {
        assert_eq!(
            document_label(&build_prompt("{\n  \"doc_type\": \"810 Invoice\"\n}")),
            Some("810 Invoice")
        );
        assert_eq!(document_label("no record here"), None);
    }
}
