//! PromptTune engine: the remote optimization call and its plumbing.
mod client;
mod engine;
mod request;
mod types;

pub use client::{GeminiClient, ModelClient, ModelSettings};
pub use engine::EngineHandle;
pub use request::{response_schema, system_instruction, user_prompt};
pub use types::{
    AnalysisPayload, ComplexityLevel, EngineEvent, OptimizationPayload, OptimizeError,
    OptimizeErrorKind, OptimizeRequest, PromptStyle, VariantPayload,
};
