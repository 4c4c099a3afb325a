//! Result view fragments: overview, variable table, approach cards, conclusion.

use std::fmt::Write;

use crate::analysis::models::{AnalysisResult, Approach, Variable};
use crate::web::html::{bullet_list, escape};

/// Number of accent themes approach cards cycle through.
pub const ACCENT_COUNT: usize = 4;

pub fn accent_class(index: usize) -> String {
    format!("accent-{}", index % ACCENT_COUNT)
}

pub fn render_overview(result: &AnalysisResult) -> String {
    let mut out = String::from("<section class=\"overview\">");
    let _ = write!(
        out,
        "<span class=\"badge\">{}</span><h2>{}</h2>",
        escape(&result.problem_type),
        escape(&result.title)
    );
    let _ = write!(
        out,
        "<div class=\"summary\"><h3>Executive Summary</h3><p>{}</p></div>",
        escape(&result.summary)
    );
    let _ = write!(
        out,
        "<div class=\"challenges\"><h3>Key Challenges</h3>{}</div>",
        bullet_list("challenge-list", &result.key_challenges)
    );
    out.push_str("<div class=\"assumptions\"><h3>Core Assumptions</h3>");
    for assumption in &result.assumptions {
        let _ = write!(out, "<span class=\"chip\">{}</span>", escape(assumption));
    }
    out.push_str("</div></section>");
    out
}

pub fn render_variable_table(variables: &[Variable]) -> String {
    let mut out = String::from(
        "<section class=\"variables\"><h3>Defined Variables</h3><table>\
         <thead><tr><th>Symbol</th><th>Type</th><th>Description</th><th>Unit</th></tr></thead><tbody>",
    );
    for v in variables {
        let _ = write!(
            out,
            "<tr><td class=\"symbol\">{}</td><td><span class=\"chip\">{}</span></td><td>{}</td><td class=\"unit\">{}</td></tr>",
            escape(&v.symbol),
            escape(&v.var_type),
            escape(&v.description),
            escape(v.unit_or_dash())
        );
    }
    out.push_str("</tbody></table></section>");
    out
}

pub fn render_approach_card(approach: &Approach, index: usize) -> String {
    let mut out = String::new();
    let _ = write!(
        out,
        "<article class=\"approach {}\" id=\"approach-{}\">",
        accent_class(index),
        escape(&approach.id)
    );
    let _ = write!(
        out,
        "<div class=\"badge\">Strategy {}: {}</div><h3>{}</h3>",
        index + 1,
        escape(&approach.category),
        escape(&approach.name)
    );
    let _ = write!(
        out,
        "<div class=\"complexity\">Complexity: <strong>{}</strong></div><p>{}</p>",
        escape(&approach.complexity),
        escape(&approach.summary)
    );

    out.push_str("<h4>Recommended Tools</h4><div class=\"tools\">");
    for tool in &approach.tools_recommendation {
        let _ = write!(out, "<span class=\"chip\">{}</span>", escape(tool));
    }
    out.push_str("</div>");

    out.push_str("<h4>Implementation Steps</h4><ol class=\"steps\">");
    for step in &approach.steps {
        let _ = write!(out, "<li>{}</li>", escape(step));
    }
    out.push_str("</ol>");

    let _ = write!(
        out,
        "<div class=\"tradeoffs\"><div class=\"pros\"><h4>Pros</h4>{}</div>\
         <div class=\"cons\"><h4>Cons</h4>{}</div></div>",
        bullet_list("pro-list", &approach.pros),
        bullet_list("con-list", &approach.cons)
    );
    out.push_str("</article>");
    out
}

pub fn render_results(result: &AnalysisResult) -> String {
    let mut out = String::from("<div class=\"results\">");
    out.push_str(&render_overview(result));
    out.push_str(&render_variable_table(&result.variables));

    out.push_str("<section class=\"strategies\"><h2>Proposed Solution Strategies</h2>");
    for (index, approach) in result.approaches.iter().enumerate() {
        out.push_str(&render_approach_card(approach, index));
    }
    out.push_str("</section>");

    let _ = write!(
        out,
        "<section class=\"conclusion\"><h3>Coach's Final Recommendation</h3><p>{}</p></section>",
        escape(&result.conclusion)
    );
    out.push_str("</div>");
    out
}
