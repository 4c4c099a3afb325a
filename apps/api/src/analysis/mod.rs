// Problem analysis: submission state, request construction, the model call
// and the typed result. All LLM calls go through llm_client.

pub mod analyzer;
pub mod handlers;
pub mod models;
pub mod prompts;
pub mod schema;
pub mod submission;

pub use analyzer::{GeminiAnalyzer, ProblemAnalyzer};
pub use models::AnalysisResult;
pub use submission::Submission;
