use std::fmt::Write;

use crate::analysis::{AnalysisResult, Submission};
use crate::web::components::render_results;
use crate::web::html::escape;

const ACCEPT: &str = ".pdf,.docx,application/pdf,application/vnd.openxmlformats-officedocument.wordprocessingml.document";

const STYLE: &str = "body{font-family:sans-serif;max-width:64rem;margin:0 auto;padding:1rem}\
.error{border:1px solid #fecaca;background:#fef2f2;color:#b91c1c;padding:1rem}\
.chip{display:inline-block;padding:.1rem .5rem;margin:.1rem;border-radius:.5rem;background:#f1f5f9}\
.approach{border-top:4px solid;padding:1rem;margin:1rem 0}\
.accent-0{border-color:#10b981}.accent-1{border-color:#3b82f6}\
.accent-2{border-color:#a855f7}.accent-3{border-color:#f59e0b}";

/// Everything one render of the page shows.
#[derive(Debug, Default)]
pub struct PageState {
    pub submission: Submission,
    pub result: Option<AnalysisResult>,
    pub error: Option<String>,
}

pub fn render_page(state: &PageState) -> String {
    let mut out = String::from("<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"utf-8\">");
    let _ = write!(
        out,
        "<title>ModelMinds</title><style>{STYLE}</style></head><body>"
    );
    out.push_str("<header><h1>ModelMinds</h1></header><main>");
    out.push_str("<h2>Master Your Math Modeling Competition</h2>");
    out.push_str(
        "<p>Upload your problem file (PDF/Word) or paste the text below. \
         The analysis identifies key variables, the problem type, and suggests 3 distinct approaches.</p>",
    );

    out.push_str(&render_form(&state.submission));

    if let Some(error) = &state.error {
        let _ = write!(out, "<div class=\"error\" role=\"alert\"><p>{}</p></div>", escape(error));
    }
    if let Some(result) = &state.result {
        out.push_str(&render_results(result));
    }

    out.push_str("</main></body></html>");
    out
}

fn render_form(submission: &Submission) -> String {
    let mut out = String::from("<form method=\"post\" action=\"/\" enctype=\"multipart/form-data\">");

    match &submission.attachment {
        None => {
            let _ = write!(
                out,
                "<label class=\"upload\">Click to upload PDF or Word file \
                 <input type=\"file\" name=\"file\" accept=\"{ACCEPT}\"></label>\
                 <button type=\"submit\" name=\"action\" value=\"attach\">Attach</button>\
                 <small>.pdf, .docx supported</small>"
            );
        }
        Some(attached) => {
            let _ = write!(
                out,
                "<div class=\"attachment\"><strong>{name}</strong> <span>PDF Attached</span>\
                 <button type=\"submit\" name=\"action\" value=\"remove\" title=\"Remove file\">Remove</button>\
                 <input type=\"hidden\" name=\"attached_name\" value=\"{name}\">\
                 <input type=\"hidden\" name=\"attached_data\" value=\"{data}\"></div>",
                name = escape(&attached.name),
                data = escape(&attached.data)
            );
        }
    }

    let placeholder = if submission.attachment.is_some() {
        "Add any specific questions or additional context here..."
    } else {
        "Paste your problem description here..."
    };
    // Browsers drop one newline right after the opening tag.
    let _ = write!(
        out,
        "<textarea name=\"problem_text\" rows=\"8\" placeholder=\"{placeholder}\">\n{}</textarea>",
        escape(&submission.problem_text)
    );
    out.push_str(
        "<div class=\"actions\"><span>AI-Powered Analysis</span>\
         <button type=\"submit\" name=\"action\" value=\"analyze\">Analyze Problem</button></div>",
    );
    out.push_str("</form>");
    out
}
