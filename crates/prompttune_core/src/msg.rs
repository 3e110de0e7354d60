#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// User edited the prompt input box (full replacement text).
    InputChanged(String),
    /// User picked a target style.
    StyleSelected(crate::PromptStyle),
    /// User picked a complexity level.
    ComplexitySelected(crate::ComplexityLevel),
    /// User asked to optimize the current input.
    OptimizeRequested,
    /// Timer thread advanced the decorative stage display.
    SequencerAdvanced(crate::PipelineStage),
    /// Timer thread reached the end of the scripted sequence.
    SequencerFinished,
    /// Engine completion for the in-flight request.
    CallFinished(Result<crate::OptimizationResult, crate::CallError>),
    /// User edited a variant card's local text.
    VariantEdited { index: usize, content: String },
    /// Replace the prompt input with a card's (possibly edited) text.
    ReplaceRequested { index: usize },
    /// Append a card's (possibly edited) text to the prompt input.
    AppendRequested { index: usize },
    /// Copy a card's (possibly edited) text to the clipboard.
    CopyRequested { index: usize },
    /// Fallback for placeholder wiring.
    NoOp,
}
