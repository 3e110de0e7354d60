use std::time::Duration;

use serde::Deserialize;

use crate::request::build_body;
use crate::{OptimizationPayload, OptimizeError, OptimizeErrorKind, OptimizeRequest};

/// Connection settings for the remote model service.
#[derive(Debug, Clone)]
pub struct ModelSettings {
    /// Access token; its absence fails every call with a
    /// configuration error. Never read lazily from the environment by
    /// the client itself, so tests can inject one.
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for ModelSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            model: "gemini-2.5-flash".to_string(),
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(90),
        }
    }
}

impl ModelSettings {
    /// Process-environment configuration: `GEMINI_API_KEY` first, then
    /// the legacy `API_KEY`; model and endpoint overridable for
    /// self-hosted proxies.
    pub fn from_env() -> Self {
        let mut settings = Self {
            api_key: std::env::var("GEMINI_API_KEY")
                .or_else(|_| std::env::var("API_KEY"))
                .ok()
                .filter(|key| !key.is_empty()),
            ..Self::default()
        };
        if let Ok(model) = std::env::var("PROMPTTUNE_MODEL") {
            if !model.is_empty() {
                settings.model = model;
            }
        }
        if let Ok(base_url) = std::env::var("PROMPTTUNE_API_BASE") {
            if !base_url.is_empty() {
                settings.base_url = base_url.trim_end_matches('/').to_string();
            }
        }
        settings
    }
}

#[async_trait::async_trait]
pub trait ModelClient: Send + Sync {
    async fn optimize(
        &self,
        request: &OptimizeRequest,
    ) -> Result<OptimizationPayload, OptimizeError>;
}

#[derive(Debug, Clone)]
pub struct GeminiClient {
    settings: ModelSettings,
}

impl GeminiClient {
    pub fn new(settings: ModelSettings) -> Self {
        Self { settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, OptimizeError> {
        reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .timeout(self.settings.request_timeout)
            .build()
            .map_err(|err| OptimizeError::new(OptimizeErrorKind::Remote, err.to_string()))
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.settings.base_url.trim_end_matches('/'),
            self.settings.model
        )
    }
}

/// `generateContent` response envelope; only the reply text is of
/// interest here.
#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

#[async_trait::async_trait]
impl ModelClient for GeminiClient {
    /// One request, one structured reply. No streaming, no retries: a
    /// failure surfaces immediately to the caller.
    async fn optimize(
        &self,
        request: &OptimizeRequest,
    ) -> Result<OptimizationPayload, OptimizeError> {
        let api_key = self
            .settings
            .api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                OptimizeError::new(
                    OptimizeErrorKind::Configuration,
                    "no api key in environment",
                )
            })?;

        let client = self.build_client()?;
        let response = client
            .post(self.endpoint())
            .header("x-goog-api-key", api_key)
            .json(&build_body(request))
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(OptimizeError::new(
                OptimizeErrorKind::Remote,
                format!("http status {status}"),
            ));
        }

        let envelope: GenerateContentResponse = response
            .json()
            .await
            .map_err(|err| OptimizeError::new(OptimizeErrorKind::Remote, err.to_string()))?;

        let text = envelope
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .and_then(|content| content.parts.into_iter().find_map(|part| part.text))
            .filter(|text| !text.is_empty())
            .ok_or_else(|| {
                OptimizeError::new(OptimizeErrorKind::Remote, "reply carried no text content")
            })?;

        let payload: OptimizationPayload = serde_json::from_str(&text).map_err(|err| {
            OptimizeError::new(OptimizeErrorKind::MalformedResponse, err.to_string())
        })?;

        if payload.variants.len() != 3 {
            log::warn!(
                "model returned {} variants instead of 3",
                payload.variants.len()
            );
        }

        Ok(payload)
    }
}

fn map_reqwest_error(err: reqwest::Error) -> OptimizeError {
    if err.is_timeout() {
        return OptimizeError::new(OptimizeErrorKind::Remote, "request timed out");
    }
    OptimizeError::new(OptimizeErrorKind::Remote, err.to_string())
}
