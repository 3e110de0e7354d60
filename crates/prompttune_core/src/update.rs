use crate::{AppState, Effect, Msg, PipelineStage};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::InputChanged(text) => {
            // The input box is locked while a run is in flight.
            if state.stage().is_running() {
                return (state, Vec::new());
            }
            state.set_input(text);
            Vec::new()
        }
        Msg::StyleSelected(style) => {
            state.set_style(style);
            Vec::new()
        }
        Msg::ComplexitySelected(complexity) => {
            state.set_complexity(complexity);
            Vec::new()
        }
        Msg::OptimizeRequested => {
            // Whitespace-only input is a no-op, not an error; in-flight
            // runs block resubmission (no cancellation is supported).
            if !state.can_submit() {
                return (state, Vec::new());
            }
            let request = state.begin_run();
            vec![Effect::RunStageTimers, Effect::CallModel { request }]
        }
        Msg::SequencerAdvanced(stage) => {
            state.apply_sequencer_stage(stage);
            Vec::new()
        }
        Msg::SequencerFinished => {
            state.finish_sequencer();
            Vec::new()
        }
        Msg::CallFinished(outcome) => {
            state.record_outcome(outcome);
            Vec::new()
        }
        Msg::VariantEdited { index, content } => {
            state.edit_draft(index, content);
            Vec::new()
        }
        Msg::ReplaceRequested { index } => {
            if state.stage() == PipelineStage::Complete {
                state.replace_input_with_draft(index);
            }
            Vec::new()
        }
        Msg::AppendRequested { index } => {
            if state.stage() == PipelineStage::Complete {
                state.append_draft_to_input(index);
            }
            Vec::new()
        }
        Msg::CopyRequested { index } => {
            if state.stage() == PipelineStage::Complete {
                if let Some(text) = state.draft(index) {
                    vec![Effect::CopyToClipboard {
                        text: text.to_owned(),
                    }]
                } else {
                    Vec::new()
                }
            } else {
                Vec::new()
            }
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
