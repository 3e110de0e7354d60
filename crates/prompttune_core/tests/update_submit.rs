use std::sync::Once;

use prompttune_core::{
    update, AppState, ComplexityLevel, Effect, Msg, OptimizationResult, OptimizedVariant,
    PipelineStage, PromptAnalysis, PromptStyle,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(prompttune_logging::initialize_for_tests);
}

fn submit(state: AppState, input: &str) -> (AppState, Vec<Effect>) {
    let (state, _) = update(state, Msg::InputChanged(input.to_string()));
    update(state, Msg::OptimizeRequested)
}

fn sample_result() -> OptimizationResult {
    OptimizationResult {
        original_analysis: PromptAnalysis {
            grammar_issues: vec!["Yo'q".to_string()],
            clarity_score: 70.0,
            intent_detected: "Blog post".to_string(),
        },
        variants: (1..=3)
            .map(|n| OptimizedVariant {
                title: format!("Variant {n}"),
                content: format!("content {n}"),
                reasoning: format!("reasoning {n}"),
                tags: vec!["tag".to_string()],
            })
            .collect(),
    }
}

fn settle(state: AppState, outcome: Result<OptimizationResult, prompttune_core::CallError>) -> AppState {
    let (state, _) = update(state, Msg::SequencerAdvanced(PipelineStage::Optimizing));
    let (state, _) = update(state, Msg::SequencerAdvanced(PipelineStage::Generating));
    let (state, _) = update(state, Msg::SequencerAdvanced(PipelineStage::Formatting));
    let (state, _) = update(state, Msg::SequencerFinished);
    let (state, _) = update(state, Msg::CallFinished(outcome));
    state
}

#[test]
fn submit_issues_one_call_with_selected_configuration() {
    init_logging();
    let state = AppState::new();
    let (state, _) = update(state, Msg::StyleSelected(PromptStyle::Technical));
    let (state, _) = update(state, Msg::ComplexitySelected(ComplexityLevel::Complex));

    let (next, effects) = submit(state, "  write a blog post about coffee  ");

    assert_eq!(next.stage(), PipelineStage::Preprocessing);
    assert_eq!(effects.len(), 2);
    assert_eq!(effects[0], Effect::RunStageTimers);
    match &effects[1] {
        Effect::CallModel { request } => {
            // The raw input is sent untrimmed; only the emptiness check trims.
            assert_eq!(request.input_prompt, "  write a blog post about coffee  ");
            assert_eq!(request.style, PromptStyle::Technical);
            assert_eq!(request.complexity, ComplexityLevel::Complex);
        }
        other => panic!("expected CallModel, got {other:?}"),
    }
}

#[test]
fn whitespace_only_input_is_a_total_noop() {
    init_logging();
    let state = AppState::new();

    let (next, effects) = submit(state, "   \n\t ");

    assert_eq!(next.stage(), PipelineStage::Idle);
    assert!(effects.is_empty());
    assert!(!next.view().can_submit);
}

#[test]
fn resubmission_is_blocked_while_in_flight() {
    init_logging();
    let state = AppState::new();
    let (state, _) = submit(state, "first");

    let (next, effects) = update(state, Msg::OptimizeRequested);

    assert!(effects.is_empty());
    assert_eq!(next.stage(), PipelineStage::Preprocessing);
}

#[test]
fn input_edits_are_ignored_while_in_flight() {
    init_logging();
    let state = AppState::new();
    let (state, _) = submit(state, "first");

    let (next, effects) = update(state, Msg::InputChanged("second".to_string()));

    assert!(effects.is_empty());
    assert_eq!(next.input(), "first");
}

#[test]
fn resubmission_from_complete_restarts_the_sequence() {
    init_logging();
    let state = AppState::new();
    let (state, _) = submit(state, "first");
    let state = settle(state, Ok(sample_result()));
    assert_eq!(state.stage(), PipelineStage::Complete);

    let (next, effects) = update(state, Msg::OptimizeRequested);

    assert_eq!(next.stage(), PipelineStage::Preprocessing);
    assert_eq!(effects.len(), 2);
    // The prior result is no longer visible during the new run.
    assert!(next.view().variants.is_empty());
    assert!(next.view().analysis.is_none());
}

#[test]
fn resubmission_from_error_clears_the_message() {
    init_logging();
    let state = AppState::new();
    let (state, _) = submit(state, "first");
    let state = settle(
        state,
        Err(prompttune_core::CallError {
            kind: prompttune_core::CallErrorKind::Remote,
            message: "failed".to_string(),
        }),
    );
    assert_eq!(state.stage(), PipelineStage::Error);

    let (next, _effects) = update(state, Msg::OptimizeRequested);

    assert_eq!(next.stage(), PipelineStage::Preprocessing);
    assert!(next.view().error.is_none());
}
