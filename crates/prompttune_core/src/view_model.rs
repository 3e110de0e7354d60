use crate::{AppState, ComplexityLevel, PipelineStage, PromptStyle};

/// Display status of one cell in the stage indicator row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    Pending,
    Active,
    Completed,
    Error,
}

/// Derives a cell's status purely from the current stage and the fixed
/// sequence order.
pub fn step_status(current: PipelineStage, step: PipelineStage) -> StepStatus {
    match current {
        PipelineStage::Idle => StepStatus::Pending,
        PipelineStage::Complete => StepStatus::Completed,
        PipelineStage::Error => StepStatus::Error,
        _ => {
            let position = |stage| {
                PipelineStage::SEQUENCE
                    .iter()
                    .position(|candidate| *candidate == stage)
            };
            match (position(step), position(current)) {
                (Some(step_idx), Some(current_idx)) if step_idx < current_idx => {
                    StepStatus::Completed
                }
                (Some(step_idx), Some(current_idx)) if step_idx == current_idx => {
                    StepStatus::Active
                }
                _ => StepStatus::Pending,
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageRowView {
    pub stage: PipelineStage,
    pub status: StepStatus,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisView {
    pub intent_detected: String,
    /// Clamped to 0..=100 for display; storage keeps the raw number.
    pub clarity_score: f64,
    /// Empty when the model reported the no-issue sentinel.
    pub grammar_issues: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantCardView {
    pub title: String,
    /// The card's local edit buffer, not the original reply text.
    pub content: String,
    pub reasoning: String,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppViewModel {
    pub input: String,
    pub style: PromptStyle,
    pub complexity: ComplexityLevel,
    pub stage: PipelineStage,
    pub stage_rows: Vec<StageRowView>,
    pub busy: bool,
    pub can_submit: bool,
    pub error: Option<String>,
    pub analysis: Option<AnalysisView>,
    pub variants: Vec<VariantCardView>,
    pub dirty: bool,
}

impl AppViewModel {
    pub(crate) fn from_state(state: &AppState) -> Self {
        let stage = state.stage();
        let stage_rows = PipelineStage::SEQUENCE
            .iter()
            .map(|step| StageRowView {
                stage: *step,
                status: step_status(stage, *step),
            })
            .collect();

        // A result is displayable only at Complete: an error (or a new
        // run) hides any stored result without touching its storage.
        let (analysis, variants) = if stage == PipelineStage::Complete {
            match state.result() {
                Some(result) => (
                    Some(AnalysisView {
                        intent_detected: result.original_analysis.intent_detected.clone(),
                        clarity_score: result.original_analysis.clarity_score.clamp(0.0, 100.0),
                        grammar_issues: visible_grammar_issues(
                            &result.original_analysis.grammar_issues,
                        ),
                    }),
                    result
                        .variants
                        .iter()
                        .enumerate()
                        .map(|(index, variant)| VariantCardView {
                            title: variant.title.clone(),
                            content: state
                                .variant_drafts()
                                .get(index)
                                .cloned()
                                .unwrap_or_else(|| variant.content.clone()),
                            reasoning: variant.reasoning.clone(),
                            tags: variant.tags.clone(),
                        })
                        .collect(),
                ),
                None => (None, Vec::new()),
            }
        } else {
            (None, Vec::new())
        };

        Self {
            input: state.input().to_owned(),
            style: state.style(),
            complexity: state.complexity(),
            stage,
            stage_rows,
            busy: stage.is_running(),
            can_submit: state.can_submit(),
            error: state.error().map(|error| error.message.clone()),
            analysis,
            variants,
            dirty: state.is_dirty(),
        }
    }
}

/// The model reports "no issues" through a sentinel first entry; the
/// instruction template asks for "Yo'q" and older replies used "None".
fn visible_grammar_issues(issues: &[String]) -> Vec<String> {
    match issues.first().map(String::as_str) {
        None | Some("None") | Some("Yo'q") => Vec::new(),
        _ => issues.to_vec(),
    }
}
