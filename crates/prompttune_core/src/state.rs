use crate::view_model::AppViewModel;
use crate::{
    CallError, ComplexityLevel, OptimizationRequest, OptimizationResult, PipelineStage,
    PromptStyle,
};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    input: String,
    style: PromptStyle,
    complexity: ComplexityLevel,
    stage: PipelineStage,
    result: Option<OptimizationResult>,
    error: Option<CallError>,
    /// Per-card edit buffers, seeded from the variants on settle.
    variant_drafts: Vec<String>,
    /// Both of these must arrive before the run settles into
    /// Complete or Error.
    sequencer_done: bool,
    pending_outcome: Option<Result<OptimizationResult, CallError>>,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel::from_state(self)
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn style(&self) -> PromptStyle {
        self.style
    }

    pub fn complexity(&self) -> ComplexityLevel {
        self.complexity
    }

    pub fn stage(&self) -> PipelineStage {
        self.stage
    }

    pub fn error(&self) -> Option<&CallError> {
        self.error.as_ref()
    }

    /// The stored result. Callers must not display it unless the stage
    /// is `Complete`; the view model enforces this.
    pub fn result(&self) -> Option<&OptimizationResult> {
        self.result.as_ref()
    }

    pub fn variant_drafts(&self) -> &[String] {
        &self.variant_drafts
    }

    /// Submission gate: never while a run is in flight, never with a
    /// whitespace-only input.
    pub fn can_submit(&self) -> bool {
        !self.stage.is_running() && !self.input.trim().is_empty()
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn consume_dirty(&mut self) -> bool {
        let was = self.dirty;
        self.dirty = false;
        was
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn set_input(&mut self, input: String) {
        if self.input != input {
            self.input = input;
            self.mark_dirty();
        }
    }

    pub(crate) fn set_style(&mut self, style: PromptStyle) {
        if self.style != style {
            self.style = style;
            self.mark_dirty();
        }
    }

    pub(crate) fn set_complexity(&mut self, complexity: ComplexityLevel) {
        if self.complexity != complexity {
            self.complexity = complexity;
            self.mark_dirty();
        }
    }

    /// Starts a run: clears the previous outcome and enters the first
    /// scripted stage. Returns the immutable request for this submission.
    pub(crate) fn begin_run(&mut self) -> OptimizationRequest {
        self.result = None;
        self.error = None;
        self.variant_drafts.clear();
        self.sequencer_done = false;
        self.pending_outcome = None;
        self.stage = PipelineStage::Preprocessing;
        self.mark_dirty();
        OptimizationRequest {
            input_prompt: self.input.clone(),
            style: self.style,
            complexity: self.complexity,
        }
    }

    pub(crate) fn apply_sequencer_stage(&mut self, stage: PipelineStage) {
        if self.stage.is_running() && PipelineStage::SEQUENCE.contains(&stage) {
            self.stage = stage;
            self.mark_dirty();
        }
    }

    pub(crate) fn finish_sequencer(&mut self) {
        if self.stage.is_running() {
            self.sequencer_done = true;
            self.try_settle();
        }
    }

    pub(crate) fn record_outcome(&mut self, outcome: Result<OptimizationResult, CallError>) {
        if self.stage.is_running() {
            self.pending_outcome = Some(outcome);
            self.try_settle();
        }
    }

    /// Joins the two in-flight tasks: the run settles only once the
    /// scripted sequence has finished AND the call outcome has arrived.
    fn try_settle(&mut self) {
        if !self.sequencer_done {
            return;
        }
        let Some(outcome) = self.pending_outcome.take() else {
            return;
        };
        match outcome {
            Ok(result) => {
                self.variant_drafts = result
                    .variants
                    .iter()
                    .map(|variant| variant.content.clone())
                    .collect();
                self.result = Some(result);
                self.stage = PipelineStage::Complete;
            }
            Err(error) => {
                self.error = Some(error);
                self.stage = PipelineStage::Error;
            }
        }
        self.mark_dirty();
    }

    pub(crate) fn edit_draft(&mut self, index: usize, content: String) {
        if let Some(draft) = self.variant_drafts.get_mut(index) {
            if *draft != content {
                *draft = content;
                self.mark_dirty();
            }
        }
    }

    pub(crate) fn draft(&self, index: usize) -> Option<&str> {
        self.variant_drafts.get(index).map(String::as_str)
    }

    pub(crate) fn replace_input_with_draft(&mut self, index: usize) {
        if let Some(text) = self.draft(index).map(ToOwned::to_owned) {
            self.set_input(text);
        }
    }

    pub(crate) fn append_draft_to_input(&mut self, index: usize) {
        if let Some(text) = self.draft(index).map(ToOwned::to_owned) {
            let trimmed = self.input.trim();
            let joined = if trimmed.is_empty() {
                text
            } else {
                format!("{trimmed}\n\n{text}")
            };
            self.set_input(joined);
        }
    }
}
