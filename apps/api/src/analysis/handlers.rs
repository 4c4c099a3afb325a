//! Axum route handlers for the JSON API.

use axum::{
    extract::{Multipart, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::analysis::models::AnalysisResult;
use crate::analysis::submission::Submission;
use crate::errors::AppError;
use crate::ingest::{normalize_upload, read_submission_form, NormalizedFile};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub analysis: AnalysisResult,
    pub model: String,
    pub analyzed_at: DateTime<Utc>,
}

/// POST /api/v1/documents
/// Normalizes one uploaded file without analyzing it.
pub async fn handle_normalize_document(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<NormalizedFile>, AppError> {
    let form = read_submission_form(multipart).await?;
    let upload = form
        .upload
        .ok_or_else(|| AppError::Validation("Missing 'file' field".to_string()))?;
    let normalized = normalize_upload(upload, state.config.ingest_options()).await?;
    Ok(Json(normalized))
}

/// POST /api/v1/analyze
pub async fn handle_analyze(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let mut form = read_submission_form(multipart).await?;
    let mut submission = Submission::from_form(&form);
    if let Some(upload) = form.upload.take() {
        submission.ingest(upload, state.config.ingest_options()).await?;
    }
    submission.validate()?;

    let analysis = state.analyzer.analyze(&submission).await?;
    Ok(Json(AnalyzeResponse {
        analysis,
        model: state.analyzer.model().to_string(),
        analyzed_at: Utc::now(),
    }))
}
