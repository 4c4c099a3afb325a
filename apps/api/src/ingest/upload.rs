use axum::extract::Multipart;
use bytes::Bytes;

use crate::errors::AppError;
use crate::ingest::AttachedFile;

/// One file received in a multipart form.
#[derive(Debug, Clone)]
pub struct Upload {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

/// Fields shared by the HTML form and the JSON API.
///
/// `attached_name` / `attached_data` carry a previously attached PDF between
/// page renders; the server keeps no session state.
#[derive(Debug, Default)]
pub struct SubmissionForm {
    pub problem_text: String,
    pub upload: Option<Upload>,
    pub attached: Option<AttachedFile>,
    pub action: Option<String>,
}

pub async fn read_submission_form(mut multipart: Multipart) -> Result<SubmissionForm, AppError> {
    let mut form = SubmissionForm::default();
    let mut attached_name = String::new();
    let mut attached_data = String::new();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "problem_text" => form.problem_text = field.text().await?,
            "attached_name" => attached_name = field.text().await?,
            "attached_data" => attached_data = field.text().await?,
            "action" => form.action = Some(field.text().await?),
            "file" => {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let content_type = field.content_type().map(String::from);
                let bytes = field.bytes().await?;
                // Browsers send an empty part when no file was picked.
                if file_name.is_empty() && bytes.is_empty() {
                    continue;
                }
                form.upload = Some(Upload {
                    file_name,
                    content_type,
                    bytes,
                });
            }
            other => tracing::debug!("Ignoring unknown form field '{other}'"),
        }
    }

    if !attached_name.is_empty() && !attached_data.is_empty() {
        form.attached = Some(AttachedFile {
            name: attached_name,
            data: attached_data,
        });
    }

    Ok(form)
}
