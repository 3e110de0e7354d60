#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Issue the single remote optimization call for this submission.
    CallModel { request: crate::OptimizationRequest },
    /// Run the scripted stage timers for this submission.
    RunStageTimers,
    /// Copy the given text to the system clipboard.
    CopyToClipboard { text: String },
}
