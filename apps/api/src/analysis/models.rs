//! Analysis result returned by the model. Field names are the camelCase wire
//! contract declared in `schema.rs`.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variable {
    pub symbol: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    /// e.g. Continuous, Discrete, Binary
    #[serde(rename = "type")]
    pub var_type: String,
}

impl Variable {
    /// Unit for display; `-` when missing or blank.
    pub fn unit_or_dash(&self) -> &str {
        match self.unit.as_deref().map(str::trim) {
            Some(unit) if !unit.is_empty() => unit,
            _ => "-",
        }
    }
}

/// One proposed solution strategy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Approach {
    #[serde(default)]
    pub id: String,
    pub name: String,
    /// e.g. Differential Equations, Machine Learning, Graph Theory
    #[serde(default)]
    pub category: String,
    pub summary: String,
    /// Ordered implementation steps.
    pub steps: Vec<String>,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
    #[serde(default)]
    pub complexity: String,
    /// e.g. MATLAB, Python (Pandas/Scikit-learn), Lingo
    pub tools_recommendation: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub title: String,
    /// e.g. Optimization, Prediction, Evaluation
    pub problem_type: String,
    pub summary: String,
    #[serde(default)]
    pub key_challenges: Vec<String>,
    #[serde(default)]
    pub assumptions: Vec<String>,
    pub variables: Vec<Variable>,
    pub approaches: Vec<Approach>,
    #[serde(default)]
    pub conclusion: String,
}

impl AnalysisResult {
    /// Gives every approach a usable id; the model may omit it.
    pub fn normalize(mut self) -> Self {
        for approach in &mut self.approaches {
            if approach.id.trim().is_empty() {
                approach.id = Uuid::new_v4().to_string();
            }
        }
        self
    }
}


#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_deserializes_minimal_required_fields() {
        let value = json!({
            "title": "Traffic Flow",
            "problemType": "Differential Equations",
            "summary": "Model congestion.",
            "variables": [{"symbol": "rho", "description": "density", "type": "Continuous"}],
            "approaches": [{
                "name": "LWR model",
                "summary": "Conservation law",
                "steps": ["Derive PDE", "Discretize"],
                "pros": ["Physical"],
                "cons": ["Shock handling"],
                "toolsRecommendation": ["MATLAB"]
            }]
        });

        let result: AnalysisResult = serde_json::from_value(value).unwrap();
        assert!(result.key_challenges.is_empty());
        assert!(result.assumptions.is_empty());
        assert_eq!(result.conclusion, "");
        assert_eq!(result.variables[0].var_type, "Continuous");
        assert_eq!(result.variables[0].unit, None);
        assert_eq!(result.approaches[0].steps, vec!["Derive PDE", "Discretize"]);
        assert_eq!(result.approaches[0].complexity, "");
    }

    #[test]
    fn test_missing_required_field_fails() {
        let value = json!({
            "title": "Traffic Flow",
            "summary": "Model congestion.",
            "variables": [],
            "approaches": []
        });
        assert!(serde_json::from_value::<AnalysisResult>(value).is_err());
    }

    #[test]
    fn test_serializes_camel_case_wire_names() {
        let value = serde_json::to_value(fixtures::sample_result()).unwrap();
        assert!(value.get("problemType").is_some());
        assert!(value.get("keyChallenges").is_some());
        assert!(value["approaches"][0].get("toolsRecommendation").is_some());
        assert_eq!(value["variables"][0]["type"], "Binary");
        assert!(value["variables"][0].get("unit").is_none());
    }

    #[test]
    fn test_normalize_fills_blank_ids_only() {
        let mut result = fixtures::sample_result();
        result.approaches[1].id = "  ".to_string();

        let result = result.normalize();
        assert_eq!(result.approaches[0].id, "a1");
        assert!(Uuid::parse_str(&result.approaches[1].id).is_ok());
    }

    #[test]
    fn test_unit_or_dash() {
        let result = fixtures::sample_result();
        assert_eq!(result.variables[0].unit_or_dash(), "-");
        assert_eq!(result.variables[1].unit_or_dash(), "km");

        let mut blank = result.variables[1].clone();
        blank.unit = Some(String::new());
        assert_eq!(blank.unit_or_dash(), "-");
    }
}
