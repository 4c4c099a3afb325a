// Prompt text for problem analysis. The output shape is enforced by the
// response schema, so the prompt only describes the task.

/// Analysis prompt template. Replace `{pdf_notice}` and `{problem_text}` before sending.
pub const ANALYSIS_PROMPT_TEMPLATE: &str = r#"You are an expert Mathematical Modeling Coach (MCM/ICM/CUMCM level).
Your task is to analyze the following competition problem statement deeply.

{pdf_notice}

Additional Instructions / Problem Text:
"""
{problem_text}
"""

Requirements:
1. Analyze the problem type (Optimization, Forecasting, Network, etc.).
2. Define key variables and necessary assumptions.
3. Provide AT LEAST 3 DISTINCT solving strategies (e.g., one using differential equations, one using heuristics/machine learning, one using statistical models, or whatever fits best).
4. Compare the pros and cons of each approach.
5. Recommend software tools (Python, MATLAB, Lingo, SAS) for each.

Think step-by-step about the mathematical structures involved before generating the JSON response."#;

pub const PDF_NOTICE: &str = "The problem statement is contained in the attached PDF file.";

pub fn build_prompt(problem_text: &str, has_pdf: bool) -> String {
    let pdf_notice = if has_pdf { PDF_NOTICE } else { "" };
    ANALYSIS_PROMPT_TEMPLATE
        .replace("{pdf_notice}", pdf_notice)
        .replace("{problem_text}", problem_text)
}
