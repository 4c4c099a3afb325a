use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::ingest::FileKind;

pub const UNSUPPORTED_FILE_MESSAGE: &str =
    "Unsupported file format. Please upload PDF or Word (.docx) files.";
pub const WORD_READ_MESSAGE: &str = "Failed to read Word document. Please copy the text manually.";
pub const PDF_READ_MESSAGE: &str = "Failed to read PDF file. Please copy the text manually.";
pub const FILE_TOO_LARGE_MESSAGE: &str =
    "File is too large. Please upload a smaller file or copy the text manually.";
pub const EMPTY_SUBMISSION_MESSAGE: &str = "Please enter the problem text or upload a PDF file.";
pub const UPLOAD_FAILED_MESSAGE: &str =
    "The upload could not be received. Please try again with a smaller file.";
pub const ANALYSIS_FAILED_MESSAGE: &str =
    "An error occurred while analyzing the problem. Please check your connection or try again.";

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
/// The HTML flow renders `user_message()` into the error banner instead.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Unsupported file: {0}")]
    UnsupportedFile(String),

    #[error("Failed to read {kind:?} document: {detail}")]
    DocumentRead { kind: FileKind, detail: String },

    #[error("Upload '{name}' is {size} bytes, over the {limit} byte limit")]
    PayloadTooLarge {
        name: String,
        size: usize,
        limit: usize,
    },

    #[error("Malformed upload: {0}")]
    Upload(#[from] MultipartError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn empty_submission() -> Self {
        AppError::Validation(EMPTY_SUBMISSION_MESSAGE.to_string())
    }

    /// The message shown to the user. Provider and internal details stay in the logs.
    pub fn user_message(&self) -> String {
        match self {
            AppError::UnsupportedFile(_) => UNSUPPORTED_FILE_MESSAGE.to_string(),
            AppError::DocumentRead {
                kind: FileKind::Pdf,
                ..
            } => PDF_READ_MESSAGE.to_string(),
            AppError::DocumentRead { .. } => WORD_READ_MESSAGE.to_string(),
            AppError::PayloadTooLarge { .. } => FILE_TOO_LARGE_MESSAGE.to_string(),
            AppError::Upload(_) => UPLOAD_FAILED_MESSAGE.to_string(),
            AppError::Validation(msg) => msg.clone(),
            AppError::Llm(_) => ANALYSIS_FAILED_MESSAGE.to_string(),
            AppError::Internal(_) => "An internal server error occurred".to_string(),
        }
    }

    /// Logs the underlying cause at a level matching its severity.
    pub fn log(&self) {
        match self {
            AppError::UnsupportedFile(name) => tracing::info!("Rejected unsupported upload: {name}"),
            AppError::DocumentRead { kind, detail } => {
                tracing::warn!("Document read failed ({kind:?}): {detail}")
            }
            AppError::PayloadTooLarge { .. } => tracing::info!("Rejected upload: {self}"),
            AppError::Upload(e) => tracing::warn!("Multipart read failed: {e}"),
            AppError::Validation(msg) => tracing::debug!("Validation failed: {msg}"),
            AppError::Llm(msg) => tracing::error!("LLM error: {msg}"),
            AppError::Internal(e) => tracing::error!("Internal error: {e:?}"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.log();

        let (status, code) = match &self {
            AppError::PayloadTooLarge { .. } => {
                (StatusCode::PAYLOAD_TOO_LARGE, "PAYLOAD_TOO_LARGE")
            }
            AppError::Upload(e) => (e.status(), "UPLOAD_ERROR"),
            AppError::UnsupportedFile(_) => {
                (StatusCode::UNSUPPORTED_MEDIA_TYPE, "UNSUPPORTED_FILE")
            }
            AppError::DocumentRead { .. } => {
                (StatusCode::UNPROCESSABLE_ENTITY, "DOCUMENT_READ_ERROR")
            }
            AppError::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            AppError::Llm(_) => (StatusCode::BAD_GATEWAY, "LLM_ERROR"),
            AppError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": self.user_message()
            }
        }));

        (status, body).into_response()
    }
}
