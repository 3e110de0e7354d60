use serde::Deserialize;
use thiserror::Error;

/// Engine-side view of the target rewrite style. The label is the exact
/// string interpolated into the instruction template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptStyle {
    Professional,
    Creative,
    Academic,
    Technical,
    Direct,
}

impl PromptStyle {
    pub fn label(self) -> &'static str {
        match self {
            PromptStyle::Professional => "Professional",
            PromptStyle::Creative => "Ijodiy",
            PromptStyle::Academic => "Akademik",
            PromptStyle::Technical => "Texnik (Kod)",
            PromptStyle::Direct => "To'g'ridan-to'g'ri va qisqa",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComplexityLevel {
    Simple,
    Moderate,
    Complex,
}

impl ComplexityLevel {
    pub fn label(self) -> &'static str {
        match self {
            ComplexityLevel::Simple => "Oddiy",
            ComplexityLevel::Moderate => "O'rtacha",
            ComplexityLevel::Complex => "Murakkab (Chain-of-Thought)",
        }
    }
}

/// One optimization call's worth of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptimizeRequest {
    pub input_prompt: String,
    pub style: PromptStyle,
    pub complexity: ComplexityLevel,
}

/// The structured reply the model must produce. The whole object arrives
/// atomically as one JSON document or the call fails.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationPayload {
    pub original_analysis: AnalysisPayload,
    /// Exactly 3 entries expected; deviations are logged, not fatal.
    pub variants: Vec<VariantPayload>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisPayload {
    pub grammar_issues: Vec<String>,
    pub clarity_score: f64,
    pub intent_detected: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VariantPayload {
    pub title: String,
    pub content: String,
    pub reasoning: String,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    OptimizeCompleted {
        result: Result<OptimizationPayload, OptimizeError>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OptimizeErrorKind {
    /// No credential available; fatal for every call.
    #[error("missing credential")]
    Configuration,
    /// Transport failure, remote-side failure, or a reply with no content.
    #[error("remote call failed")]
    Remote,
    /// Reply text did not parse into the declared schema.
    #[error("malformed response")]
    MalformedResponse,
}

/// A failed call. `message` carries the technical detail for the logs;
/// the app layer decides what the user sees per kind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct OptimizeError {
    pub kind: OptimizeErrorKind,
    pub message: String,
}

impl OptimizeError {
    pub(crate) fn new(kind: OptimizeErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}
