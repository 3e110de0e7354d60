//! PromptTune core: pure state machine and view-model helpers.
mod effect;
mod msg;
mod state;
mod types;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::Msg;
pub use state::AppState;
pub use types::{
    CallError, CallErrorKind, ComplexityLevel, OptimizationRequest, OptimizationResult,
    OptimizedVariant, PipelineStage, PromptAnalysis, PromptStyle,
};
pub use update::update;
pub use view_model::{
    step_status, AnalysisView, AppViewModel, StageRowView, StepStatus, VariantCardView,
};
