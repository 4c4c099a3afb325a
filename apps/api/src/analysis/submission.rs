use crate::errors::AppError;
use crate::ingest::{
    normalize_upload, AttachedFile, IngestOptions, NormalizedFile, SubmissionForm, Upload,
};

/// What the user is about to send: the text buffer plus at most one attached PDF.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Submission {
    pub problem_text: String,
    pub attachment: Option<AttachedFile>,
}

impl Submission {
    pub fn from_form(form: &SubmissionForm) -> Self {
        Self {
            problem_text: form.problem_text.clone(),
            attachment: form.attached.clone(),
        }
    }

    /// Applies a normalized file. A PDF replaces any attached file; extracted
    /// text is merged into the buffer.
    pub fn apply(&mut self, file: NormalizedFile) {
        match file {
            NormalizedFile::Pdf(attached) => self.attachment = Some(attached),
            NormalizedFile::Text { text, .. } => self.merge_text(&text),
        }
    }

    /// Normalizes `upload` and applies it. On error the submission is unchanged.
    pub async fn ingest(&mut self, upload: Upload, options: IngestOptions) -> Result<(), AppError> {
        let file = normalize_upload(upload, options).await?;
        self.apply(file);
        Ok(())
    }

    pub fn merge_text(&mut self, extracted: &str) {
        if self.problem_text.is_empty() {
            self.problem_text = extracted.to_string();
        } else {
            self.problem_text.push_str("\n\n");
            self.problem_text.push_str(extracted);
        }
    }

    pub fn remove_attachment(&mut self) {
        self.attachment = None;
    }

    pub fn is_ready(&self) -> bool {
        !self.problem_text.trim().is_empty() || self.attachment.is_some()
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.is_ready() {
            Ok(())
        } else {
            Err(AppError::empty_submission())
        }
    }
}
