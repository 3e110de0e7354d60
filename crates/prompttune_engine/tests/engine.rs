use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use prompttune_engine::{
    AnalysisPayload, ComplexityLevel, EngineEvent, EngineHandle, ModelClient, OptimizationPayload,
    OptimizeError, OptimizeErrorKind, OptimizeRequest, PromptStyle, VariantPayload,
};

struct StubClient {
    reply: Result<OptimizationPayload, OptimizeError>,
}

#[async_trait::async_trait]
impl ModelClient for StubClient {
    async fn optimize(
        &self,
        _request: &OptimizeRequest,
    ) -> Result<OptimizationPayload, OptimizeError> {
        self.reply.clone()
    }
}

fn sample_request() -> OptimizeRequest {
    OptimizeRequest {
        input_prompt: "prompt".to_string(),
        style: PromptStyle::Direct,
        complexity: ComplexityLevel::Simple,
    }
}

fn sample_payload() -> OptimizationPayload {
    OptimizationPayload {
        original_analysis: AnalysisPayload {
            grammar_issues: vec!["Yo'q".to_string()],
            clarity_score: 80.0,
            intent_detected: "x".to_string(),
        },
        variants: vec![VariantPayload {
            title: "t".to_string(),
            content: "c".to_string(),
            reasoning: "r".to_string(),
            tags: Vec::new(),
        }],
    }
}

fn wait_for_event(handle: &EngineHandle) -> EngineEvent {
    let deadline = Instant::now() + Duration::from_secs(5);
    loop {
        if let Some(event) = handle.try_recv() {
            return event;
        }
        assert!(Instant::now() < deadline, "no engine event within 5s");
        thread::sleep(Duration::from_millis(10));
    }
}

#[test]
fn engine_delivers_one_completion_per_request() {
    let handle = EngineHandle::with_client(Arc::new(StubClient {
        reply: Ok(sample_payload()),
    }));

    handle.optimize(sample_request());

    let EngineEvent::OptimizeCompleted { result } = wait_for_event(&handle);
    assert_eq!(result, Ok(sample_payload()));
    // Exactly one event per command.
    assert!(handle.try_recv().is_none());
}

#[test]
fn engine_carries_failures_through_unchanged() {
    let error = OptimizeError {
        kind: OptimizeErrorKind::Remote,
        message: "boom".to_string(),
    };
    let handle = EngineHandle::with_client(Arc::new(StubClient {
        reply: Err(error.clone()),
    }));

    handle.optimize(sample_request());

    let EngineEvent::OptimizeCompleted { result } = wait_for_event(&handle);
    assert_eq!(result, Err(error));
}
