//! # Summary Generation and Response Parsing
//!
//! The `Summarizer` sends the repository summary prompt to the configured
//! AI provider and turns the free-text reply into a `SummaryPair`. The
//! reply is expected to contain one fenced JSON block with the technical
//! summary, followed by a plain-text section under `NON_TECHNICAL_HEADING`.
//! Parsing is best-effort: every failure path substitutes a fixed fallback
//! pair instead of propagating an error.

use crate::prompts::summary::{build_summary_prompt, NON_TECHNICAL_HEADING};
use crate::providers::ai::AiProvider;
use crate::types::{CodeSummary, Extraction, SummaryPair};
use regex::Regex;
use tracing::{debug, error, instrument, warn};

/// Extracts the contents of the first ```json fenced block, if any.
fn extract_json_block(text: &str) -> Option<String> {
    let re = Regex::new(r"(?s)```json\s*(.*?)\s*```").ok()?;
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Parses a raw model reply into a summary pair.
///
/// Never fails: a reply without a parseable JSON block yields
/// `SummaryPair::unparsed`, and a missing non-technical section is
/// substituted with a fixed placeholder sentence.
pub fn parse_summary_response(text: &str) -> SummaryPair {
    let Some(json_block) = extract_json_block(text) else {
        error!("No JSON block found in AI response.");
        return SummaryPair::unparsed();
    };

    let technical: CodeSummary = match serde_json::from_str(&json_block) {
        Ok(summary) => summary,
        Err(e) => {
            error!("Error parsing JSON from AI response: {e}");
            error!("Raw JSON part: {json_block}");
            return SummaryPair::unparsed();
        }
    };

    let non_technical = text
        .split_once(NON_TECHNICAL_HEADING)
        .map(|(_, tail)| tail.trim())
        .filter(|tail| !tail.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| "Non-technical summary not provided.".to_string());

    SummaryPair {
        technical,
        non_technical,
    }
}

/// Generates repository summaries through a configurable AI provider.
#[derive(Clone, Debug)]
pub struct Summarizer {
    ai_provider: Box<dyn AiProvider>,
}

impl Summarizer {
    /// Creates a new `Summarizer` backed by the given provider.
    pub fn new(ai_provider: Box<dyn AiProvider>) -> Self {
        Self { ai_provider }
    }

    /// Summarizes an extraction result.
    ///
    /// A provider failure is logged and substituted with the fixed
    /// service-error pair, so the caller always receives a well-formed
    /// summary and the surrounding extraction flow stays successful.
    #[instrument(skip(self, extraction), fields(repo = %extraction.repository.full_name))]
    pub async fn summarize(&self, extraction: &Extraction) -> SummaryPair {
        let prompt = build_summary_prompt(extraction);
        debug!("--> Sending summary prompt ({} chars)", prompt.len());

        match self.ai_provider.generate(&prompt).await {
            Ok(reply) => {
                debug!("<-- Model reply ({} chars)", reply.len());
                parse_summary_response(&reply)
            }
            Err(e) => {
                warn!("Error generating summary: {e}");
                SummaryPair::service_error()
            }
        }
    }
}
