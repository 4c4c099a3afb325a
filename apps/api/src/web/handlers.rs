//! Server-rendered page. Every form post re-renders the whole page from the
//! submitted state; errors land in the banner instead of an error status.

use axum::{
    extract::{Multipart, State},
    response::Html,
};

use crate::analysis::Submission;
use crate::errors::AppError;
use crate::ingest::read_submission_form;
use crate::state::AppState;
use crate::web::page::{render_page, PageState};

/// Button that submitted the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    Attach,
    Remove,
    Analyze,
}

impl FormAction {
    /// Unknown or missing values (e.g. submit via Enter) mean analyze.
    pub fn parse(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some("attach") => FormAction::Attach,
            Some("remove") => FormAction::Remove,
            _ => FormAction::Analyze,
        }
    }
}

/// GET /
pub async fn handle_index() -> Html<String> {
    Html(render_page(&PageState::default()))
}

/// POST /
pub async fn handle_form(State(state): State<AppState>, multipart: Multipart) -> Html<String> {
    let mut form = match read_submission_form(multipart).await {
        Ok(form) => form,
        Err(e) => return Html(render_page(&error_page(Submission::default(), e))),
    };

    let mut page = PageState {
        submission: Submission::from_form(&form),
        ..Default::default()
    };

    if let Some(upload) = form.upload.take() {
        let ingested = page.submission.ingest(upload, state.config.ingest_options()).await;
        if let Err(e) = ingested {
            return Html(render_page(&error_page(page.submission, e)));
        }
    }

    match FormAction::parse(form.action.as_deref()) {
        FormAction::Attach => {}
        FormAction::Remove => page.submission.remove_attachment(),
        FormAction::Analyze => {
            let outcome = match page.submission.validate() {
                Ok(()) => state.analyzer.analyze(&page.submission).await,
                Err(e) => Err(e),
            };
            match outcome {
                Ok(result) => page.result = Some(result),
                Err(e) => return Html(render_page(&error_page(page.submission, e))),
            }
        }
    }

    Html(render_page(&page))
}

fn error_page(submission: Submission, error: AppError) -> PageState {
    error.log();
    PageState {
        submission,
        result: None,
        error: Some(error.user_message()),
    }
}
