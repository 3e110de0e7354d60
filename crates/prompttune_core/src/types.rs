/// Target rewrite style selected by the user.
///
/// The labels are the product's fixed display strings and are embedded
/// verbatim into the remote instruction template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PromptStyle {
    #[default]
    Professional,
    Creative,
    Academic,
    Technical,
    Direct,
}

impl PromptStyle {
    pub const ALL: [PromptStyle; 5] = [
        PromptStyle::Professional,
        PromptStyle::Creative,
        PromptStyle::Academic,
        PromptStyle::Technical,
        PromptStyle::Direct,
    ];

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

/// Requested depth of the rewrite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ComplexityLevel {
    Simple,
    #[default]
    Moderate,
    Complex,
}

impl ComplexityLevel {
    pub const ALL: [ComplexityLevel; 3] = [
        ComplexityLevel::Simple,
        ComplexityLevel::Moderate,
        ComplexityLevel::Complex,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ComplexityLevel::Simple => "Oddiy",
            ComplexityLevel::Moderate => "O'rtacha",
            ComplexityLevel::Complex => "Murakkab (Chain-of-Thought)",
        }
    }
}

/// One submission's worth of user input. Immutable once sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptimizationRequest {
    pub input_prompt: String,
    pub style: PromptStyle,
    pub complexity: ComplexityLevel,
}

/// Remote model's analysis of the original prompt.
#[derive(Debug, Clone, PartialEq)]
pub struct PromptAnalysis {
    /// Issues found in the input. A leading sentinel entry ("None" or
    /// "Yo'q") means the model found nothing to report.
    pub grammar_issues: Vec<String>,
    /// 0..=100, where 100 is perfect clarity.
    pub clarity_score: f64,
    pub intent_detected: String,
}

/// One of the rewrites returned by the remote model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptimizedVariant {
    pub title: String,
    pub content: String,
    pub reasoning: String,
    pub tags: Vec<String>,
}

/// Full payload of a successful optimization call. Replaces any prior
/// result wholesale; there is no merging.
#[derive(Debug, Clone, PartialEq)]
pub struct OptimizationResult {
    pub original_analysis: PromptAnalysis,
    pub variants: Vec<OptimizedVariant>,
}

/// Displayed pipeline progress. Decorative: the four inner stages are
/// driven by fixed timers, not by the actual remote call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PipelineStage {
    #[default]
    Idle,
    Preprocessing,
    Optimizing,
    Generating,
    Formatting,
    Complete,
    Error,
}

impl PipelineStage {
    /// The scripted stage order. The sequencer visits exactly these, in
    /// this order, once per submission.
    pub const SEQUENCE: [PipelineStage; 4] = [
        PipelineStage::Preprocessing,
        PipelineStage::Optimizing,
        PipelineStage::Generating,
        PipelineStage::Formatting,
    ];

    /// True while a submission is in flight (between submit and settle).
    pub fn is_running(self) -> bool {
        matches!(
            self,
            PipelineStage::Preprocessing
                | PipelineStage::Optimizing
                | PipelineStage::Generating
                | PipelineStage::Formatting
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallErrorKind {
    /// Missing or invalid credential; message is surfaced verbatim.
    Configuration,
    /// Transport failure, remote-side failure, or an empty reply.
    Remote,
    /// Reply text did not parse into the declared schema.
    MalformedResponse,
}

/// A failed optimization call as the UI sees it. `message` is already
/// the user-visible text; technical detail stays in the engine logs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallError {
    pub kind: CallErrorKind,
    pub message: String,
}
