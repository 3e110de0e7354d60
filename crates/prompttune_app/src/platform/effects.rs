use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use prompttune_core::{
    CallError, CallErrorKind, Effect, Msg, OptimizationResult, OptimizedVariant, PipelineStage,
    PromptAnalysis,
};
use prompttune_engine::{EngineHandle, ModelSettings};
use prompttune_logging::{tune_info, tune_warn};

use super::clipboard::{ClipboardSink, Osc52Clipboard};

/// Fixed delays for the decorative pipeline. Order matters; the
/// durations are illustrative, not measured from real work.
const STAGE_SCHEDULE: [(u64, PipelineStage); 3] = [
    (800, PipelineStage::Optimizing),
    (1000, PipelineStage::Generating),
    (800, PipelineStage::Formatting),
];
const LAST_STAGE_MS: u64 = 600;

pub struct EffectRunner {
    engine: EngineHandle,
    msg_tx: mpsc::Sender<Msg>,
    clipboard: Box<dyn ClipboardSink>,
}

impl EffectRunner {
    pub fn new(msg_tx: mpsc::Sender<Msg>) -> Self {
        let engine = EngineHandle::new(ModelSettings::from_env());
        Self {
            engine,
            msg_tx,
            clipboard: Box::new(Osc52Clipboard),
        }
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::CallModel { request } => {
                    tune_info!(
                        "CallModel style={:?} complexity={:?} prompt_len={}",
                        request.style,
                        request.complexity,
                        request.input_prompt.len()
                    );
                    self.engine.optimize(map_request(request));
                }
                Effect::RunStageTimers => self.spawn_stage_timers(),
                Effect::CopyToClipboard { text } => self.clipboard.copy(&text),
            }
        }
    }

    /// Fire-and-forget: walks the scripted stage order on fixed delays,
    /// then reports completion. Carries no data and cannot fail.
    fn spawn_stage_timers(&self) {
        let msg_tx = self.msg_tx.clone();
        thread::spawn(move || {
            for (delay_ms, stage) in STAGE_SCHEDULE {
                thread::sleep(Duration::from_millis(delay_ms));
                if msg_tx.send(Msg::SequencerAdvanced(stage)).is_err() {
                    return;
                }
            }
            thread::sleep(Duration::from_millis(LAST_STAGE_MS));
            let _ = msg_tx.send(Msg::SequencerFinished);
        });
    }

    /// Drains engine completions into the message channel. Called from
    /// the UI loop; the engine never pushes into the UI thread itself.
    pub fn poll(&self) {
        while let Some(event) = self.engine.try_recv() {
            match event {
                prompttune_engine::EngineEvent::OptimizeCompleted { result } => {
                    let outcome = match result {
                        Ok(payload) => Ok(map_payload(payload)),
                        Err(error) => {
                            tune_warn!("optimize failed: {}", error);
                            Err(map_error(&error))
                        }
                    };
                    let _ = self.msg_tx.send(Msg::CallFinished(outcome));
                }
            }
        }
    }
}

fn map_request(request: prompttune_core::OptimizationRequest) -> prompttune_engine::OptimizeRequest {
    prompttune_engine::OptimizeRequest {
        input_prompt: request.input_prompt,
        style: map_style(request.style),
        complexity: map_complexity(request.complexity),
    }
}

fn map_style(style: prompttune_core::PromptStyle) -> prompttune_engine::PromptStyle {
    match style {
        prompttune_core::PromptStyle::Professional => prompttune_engine::PromptStyle::Professional,
        prompttune_core::PromptStyle::Creative => prompttune_engine::PromptStyle::Creative,
        prompttune_core::PromptStyle::Academic => prompttune_engine::PromptStyle::Academic,
        prompttune_core::PromptStyle::Technical => prompttune_engine::PromptStyle::Technical,
        prompttune_core::PromptStyle::Direct => prompttune_engine::PromptStyle::Direct,
    }
}

fn map_complexity(
    complexity: prompttune_core::ComplexityLevel,
) -> prompttune_engine::ComplexityLevel {
    match complexity {
        prompttune_core::ComplexityLevel::Simple => prompttune_engine::ComplexityLevel::Simple,
        prompttune_core::ComplexityLevel::Moderate => prompttune_engine::ComplexityLevel::Moderate,
        prompttune_core::ComplexityLevel::Complex => prompttune_engine::ComplexityLevel::Complex,
    }
}

fn map_payload(payload: prompttune_engine::OptimizationPayload) -> OptimizationResult {
    OptimizationResult {
        original_analysis: PromptAnalysis {
            grammar_issues: payload.original_analysis.grammar_issues,
            clarity_score: payload.original_analysis.clarity_score,
            intent_detected: payload.original_analysis.intent_detected,
        },
        variants: payload
            .variants
            .into_iter()
            .map(|variant| OptimizedVariant {
                title: variant.title,
                content: variant.content,
                reasoning: variant.reasoning,
                tags: variant.tags,
            })
            .collect(),
    }
}

/// The user sees the configuration message verbatim; everything else is
/// the generic retry suggestion. Technical detail stays in the log.
fn map_error(error: &prompttune_engine::OptimizeError) -> CallError {
    let kind = match error.kind {
        prompttune_engine::OptimizeErrorKind::Configuration => CallErrorKind::Configuration,
        prompttune_engine::OptimizeErrorKind::Remote => CallErrorKind::Remote,
        prompttune_engine::OptimizeErrorKind::MalformedResponse => CallErrorKind::MalformedResponse,
    };
    let message = match kind {
        CallErrorKind::Configuration => {
            "API kaliti mavjud emas. Iltimos, muhit o'zgaruvchilarini tekshiring."
        }
        CallErrorKind::Remote | CallErrorKind::MalformedResponse => {
            "Promptni optimallashtirish amalga oshmadi. Iltimos, qaytadan urinib ko'ring."
        }
    };
    CallError {
        kind,
        message: message.to_string(),
    }
}
