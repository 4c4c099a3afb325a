//! Turns a submission into an `AnalysisResult` with one model call.

use async_trait::async_trait;
use tracing::info;

use crate::analysis::models::AnalysisResult;
use crate::analysis::prompts::build_prompt;
use crate::analysis::schema::analysis_schema;
use crate::analysis::submission::Submission;
use crate::errors::AppError;
use crate::ingest::PDF_MIME;
use crate::llm_client::{
    Content, GenerateContentRequest, GenerationConfig, LlmClient, Part, ThinkingConfig, MODEL,
};

/// Reasoning budget for complex math problems.
pub const THINKING_BUDGET: u32 = 4096;

#[async_trait]
pub trait ProblemAnalyzer: Send + Sync {
    async fn analyze(&self, submission: &Submission) -> Result<AnalysisResult, AppError>;

    /// Model identifier reported to API clients.
    fn model(&self) -> &str;
}

pub struct GeminiAnalyzer {
    llm: LlmClient,
}

impl GeminiAnalyzer {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl ProblemAnalyzer for GeminiAnalyzer {
    async fn analyze(&self, submission: &Submission) -> Result<AnalysisResult, AppError> {
        submission.validate()?;

        info!(
            "Analyzing problem: {} chars of text, pdf attached: {}",
            submission.problem_text.len(),
            submission.attachment.is_some()
        );

        let request = build_request(submission);
        let result: AnalysisResult = self
            .llm
            .generate_json(&request)
            .await
            .map_err(|e| AppError::Llm(format!("Problem analysis failed: {e}")))?;

        info!(
            "Analysis complete: '{}' ({}), {} approaches",
            result.title,
            result.problem_type,
            result.approaches.len()
        );
        Ok(result.normalize())
    }

    fn model(&self) -> &str {
        MODEL
    }
}

/// Builds the single outbound request: the inline PDF (if any) first, then the prompt.
pub fn build_request(submission: &Submission) -> GenerateContentRequest {
    let mut parts = Vec::with_capacity(2);
    if let Some(attached) = &submission.attachment {
        parts.push(Part::inline(PDF_MIME, attached.data.clone()));
    }
    parts.push(Part::text(build_prompt(
        &submission.problem_text,
        submission.attachment.is_some(),
    )));

    GenerateContentRequest {
        contents: vec![Content::user(parts)],
        generation_config: Some(GenerationConfig {
            response_mime_type: Some("application/json".to_string()),
            response_schema: Some(analysis_schema()),
            thinking_config: Some(ThinkingConfig {
                thinking_budget: THINKING_BUDGET,
            }),
        }),
    }
}
