/// LLM Client — the single point of entry for all Gemini API calls in ModelMinds.
///
/// ARCHITECTURAL RULE: No other module may call the Gemini API directly.
/// All LLM interactions MUST go through this module.
///
/// Model: gemini-3-pro-preview (hardcoded — do not make configurable to prevent drift)
use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, warn};

pub mod types;

pub use types::{
    Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, Part,
    ThinkingConfig,
};

use types::ApiErrorResponse;

/// The model used for all LLM calls in ModelMinds.
/// Chosen for STEM reasoning; intentionally hardcoded.
pub const MODEL: &str = "gemini-3-pro-preview";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(300);

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("LLM returned empty content")]
    EmptyContent,
}

impl LlmError {
    /// Transport failures, rate limits and server errors are worth another attempt.
    fn is_retryable(&self) -> bool {
        match self {
            LlmError::Http(_) => true,
            LlmError::Api { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }
}

/// The single LLM client used by all services in ModelMinds.
/// Wraps the Gemini `generateContent` endpoint with optional retry and structured output helpers.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: String,
    base_url: String,
    max_attempts: u32,
}

impl LlmClient {
    pub fn new(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        max_attempts: u32,
    ) -> Result<Self, LlmError> {
        Ok(Self {
            client: Client::builder().timeout(REQUEST_TIMEOUT).build()?,
            api_key: api_key.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            max_attempts: max_attempts.max(1),
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/v1beta/models/{}:generateContent", self.base_url, MODEL)
    }

    /// Makes a raw call to the Gemini API, returning the full response object.
    /// With `max_attempts > 1`, retries 429, 5xx and transport errors with
    /// exponential backoff (1s, 2s, 4s, ...).
    pub async fn generate(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, LlmError> {
        let mut attempt = 0;
        loop {
            if attempt > 0 {
                let delay = Duration::from_millis(1000 * (1 << (attempt - 1).min(6)));
                warn!(
                    "LLM call attempt {} failed, retrying after {}ms...",
                    attempt,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }
            attempt += 1;

            match self.send_once(request).await {
                Ok(response) => return Ok(response),
                Err(e) if e.is_retryable() && attempt < self.max_attempts => {
                    warn!("LLM call failed: {e}");
                }
                Err(e) => return Err(e),
            }
        }
    }

    async fn send_once(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, LlmError> {
        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .header("content-type", "application/json")
            .json(request)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            // Try to parse error message
            let message = serde_json::from_str::<ApiErrorResponse>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        let parsed: GenerateContentResponse = serde_json::from_str(&body)?;

        if let Some(usage) = &parsed.usage_metadata {
            debug!(
                "LLM call succeeded: prompt_tokens={}, candidate_tokens={}, thought_tokens={}",
                usage.prompt_token_count,
                usage.candidates_token_count,
                usage.thoughts_token_count
            );
        }

        Ok(parsed)
    }

    /// Calls the LLM and deserializes the answer text as JSON.
    /// The request should set a JSON response mime type and schema.
    pub async fn generate_json<T: DeserializeOwned>(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<T, LlmError> {
        let response = self.generate(request).await?;

        let text = response.text().ok_or_else(|| {
            let finish_reason = response
                .candidates
                .first()
                .and_then(|c| c.finish_reason.as_deref());
            warn!("LLM returned no answer text (finish_reason={finish_reason:?})");
            LlmError::EmptyContent
        })?;

        // Strip markdown code fences if the model wraps JSON in them
        let text = strip_json_fences(&text);

        serde_json::from_str(text).map_err(LlmError::Parse)
    }
}

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use httpmock::prelude::*;
    use serde::Deserialize;
    use serde_json::json;

    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Answer {
        value: u32,
    }

    fn request() -> GenerateContentRequest {
        GenerateContentRequest {
            contents: vec![Content::user(vec![Part::text("what is 6 * 7?")])],
            generation_config: None,
        }
    }

    fn path() -> String {
        format!("/v1beta/models/{MODEL}:generateContent")
    }

    fn answer_body(text: &str) -> serde_json::Value {
        json!({
            "candidates": [{
                "content": {"role": "model", "parts": [{"text": text}]},
                "finishReason": "STOP"
            }],
            "usageMetadata": {"promptTokenCount": 10, "candidatesTokenCount": 5, "totalTokenCount": 15}
        })
    }

    #[test]
    fn test_strip_json_fences_with_json_tag() {
        let input = "```json\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_without_tag() {
        let input = "```\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_no_fences() {
        let input = "{\"key\": \"value\"}";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_zero_attempts_is_clamped_to_one() {
        let client = LlmClient::new("k", "http://localhost/", 0).unwrap();
        assert_eq!(client.max_attempts, 1);
        assert_eq!(
            client.endpoint(),
            format!("http://localhost/v1beta/models/{MODEL}:generateContent")
        );
    }

    #[tokio::test]
    async fn test_generate_json_sends_key_and_parses_text() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path(path())
                    .header("x-goog-api-key", "test-key");
                then.status(200).json_body(answer_body("{\"value\": 42}"));
            })
            .await;

        let client = LlmClient::new("test-key", server.base_url(), 1).unwrap();
        let answer: Answer = client.generate_json(&request()).await.unwrap();

        mock.assert_async().await;
        assert_eq!(answer, Answer { value: 42 });
    }

    #[tokio::test]
    async fn test_missing_text_is_empty_content() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path(path());
                then.status(200).json_body(json!({"candidates": []}));
            })
            .await;

        let client = LlmClient::new("k", server.base_url(), 1).unwrap();
        let err = client.generate_json::<Answer>(&request()).await.unwrap_err();
        assert!(matches!(err, LlmError::EmptyContent));
    }

    #[tokio::test]
    async fn test_malformed_text_is_parse_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path(path());
                then.status(200).json_body(answer_body("I think the answer is 42"));
            })
            .await;

        let client = LlmClient::new("k", server.base_url(), 1).unwrap();
        let err = client.generate_json::<Answer>(&request()).await.unwrap_err();
        assert!(matches!(err, LlmError::Parse(_)));
    }

    #[tokio::test]
    async fn test_api_error_message_is_extracted() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path(path());
                then.status(400).json_body(json!({
                    "error": {"code": 400, "message": "API key not valid", "status": "INVALID_ARGUMENT"}
                }));
            })
            .await;

        let client = LlmClient::new("bad", server.base_url(), 3).unwrap();
        match client.generate(&request()).await.unwrap_err() {
            LlmError::Api { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message, "API key not valid");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_single_attempt_does_not_retry_server_errors() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST).path(path());
                then.status(503).body("overloaded");
            })
            .await;

        let client = LlmClient::new("k", server.base_url(), 1).unwrap();
        let err = client.generate(&request()).await.unwrap_err();

        assert!(matches!(err, LlmError::Api { status: 503, .. }));
        mock.assert_hits_async(1).await;
    }

    #[tokio::test]
    async fn test_retries_server_errors_when_enabled() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST).path(path());
                then.status(500).body("boom");
            })
            .await;

        let client = LlmClient::new("k", server.base_url(), 2).unwrap();
        let err = client.generate(&request()).await.unwrap_err();

        assert!(matches!(err, LlmError::Api { status: 500, .. }));
        mock.assert_hits_async(2).await;
    }
}
