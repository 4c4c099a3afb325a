//! File ingestion: turns one uploaded file into either an inline PDF attachment
//! or plain text to merge into the problem statement.
//!
//! PDF handling depends on `PdfMode`; Word documents are always reduced to text.

pub mod docx;
pub mod pdf;
pub mod upload;

use std::str::FromStr;

use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;

pub use upload::{read_submission_form, SubmissionForm, Upload};

pub const PDF_MIME: &str = "application/pdf";
pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
/// Matches the provider's ceiling for inline request data.
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

/// Kind of an uploaded file, decided from its name and declared content type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    Pdf,
    Docx,
    Unsupported,
}

/// How PDFs reach the model.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PdfMode {
    /// Sent as base64 inline data next to the prompt.
    #[default]
    Inline,
    /// Text extracted locally and merged into the problem text.
    Text,
}

impl FromStr for PdfMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "inline" => Ok(PdfMode::Inline),
            "text" => Ok(PdfMode::Text),
            other => anyhow::bail!("PDF_MODE must be 'inline' or 'text', got '{other}'"),
        }
    }
}

/// Per-deployment ingestion settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IngestOptions {
    pub pdf_mode: PdfMode,
    pub max_upload_bytes: usize,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self {
            pdf_mode: PdfMode::default(),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

/// A PDF carried alongside the prompt as base64 data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttachedFile {
    pub name: String,
    pub data: String,
}

/// Result of ingesting a single upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum NormalizedFile {
    Pdf(AttachedFile),
    Text { name: String, text: String },
}

pub fn detect_kind(file_name: &str, content_type: Option<&str>) -> FileKind {
    let name = file_name.to_ascii_lowercase();
    let content_type = content_type.map(|c| c.trim().to_ascii_lowercase());

    if content_type.as_deref() == Some(PDF_MIME) || name.ends_with(".pdf") {
        FileKind::Pdf
    } else if name.ends_with(".docx") || content_type.as_deref() == Some(DOCX_MIME) {
        FileKind::Docx
    } else {
        FileKind::Unsupported
    }
}

/// Normalizes an upload according to its detected kind.
pub async fn normalize_upload(
    upload: Upload,
    options: IngestOptions,
) -> Result<NormalizedFile, AppError> {
    let kind = detect_kind(&upload.file_name, upload.content_type.as_deref());
    if kind == FileKind::Unsupported {
        return Err(AppError::UnsupportedFile(upload.file_name));
    }
    if upload.bytes.len() > options.max_upload_bytes {
        return Err(AppError::PayloadTooLarge {
            name: upload.file_name,
            size: upload.bytes.len(),
            limit: options.max_upload_bytes,
        });
    }
    if upload.bytes.is_empty() {
        return Err(AppError::DocumentRead {
            kind,
            detail: format!("'{}' is empty", upload.file_name),
        });
    }

    info!(
        "Normalizing {:?} upload '{}' ({} bytes)",
        kind,
        upload.file_name,
        upload.bytes.len()
    );

    let Upload {
        file_name, bytes, ..
    } = upload;

    match (kind, options.pdf_mode) {
        (FileKind::Pdf, PdfMode::Inline) => Ok(NormalizedFile::Pdf(AttachedFile {
            name: file_name,
            data: pdf::encode_inline(&bytes),
        })),
        (FileKind::Pdf, PdfMode::Text) => {
            let text = pdf::extract_text(bytes).await?;
            Ok(NormalizedFile::Text {
                name: file_name,
                text,
            })
        }
        _ => {
            let text = extract_docx(bytes).await?;
            Ok(NormalizedFile::Text {
                name: file_name,
                text,
            })
        }
    }
}

async fn extract_docx(bytes: Bytes) -> Result<String, AppError> {
    tokio::task::spawn_blocking(move || docx::extract_raw_text(&bytes))
        .await
        .map_err(|e| AppError::DocumentRead {
            kind: FileKind::Docx,
            detail: format!("extraction task failed: {e}"),
        })?
}
