//! Response schema sent with every analysis request, in the provider's
//! OpenAPI-subset dialect. Must stay in sync with `models.rs`.

use serde_json::{json, Value};

pub fn analysis_schema() -> Value {
    let string_list = json!({ "type": "ARRAY", "items": { "type": "STRING" } });

    json!({
        "type": "OBJECT",
        "properties": {
            "title": {
                "type": "STRING",
                "description": "A concise title for the problem analysis"
            },
            "problemType": {
                "type": "STRING",
                "description": "The category of the math problem (e.g., Optimization, Differential Equations)"
            },
            "summary": {
                "type": "STRING",
                "description": "A brief executive summary of the problem statement"
            },
            "keyChallenges": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "List of the main difficulties or ambiguities in the problem"
            },
            "assumptions": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "Necessary simplifying assumptions to make the problem solvable"
            },
            "variables": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "symbol": { "type": "STRING" },
                        "description": { "type": "STRING" },
                        "unit": { "type": "STRING" },
                        "type": {
                            "type": "STRING",
                            "description": "Variable type (e.g., Continuous, Integer)"
                        }
                    },
                    "required": ["symbol", "description", "type"]
                }
            },
            "approaches": {
                "type": "ARRAY",
                "description": "At least 3 distinct mathematical approaches to solve the problem",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "id": { "type": "STRING" },
                        "name": { "type": "STRING" },
                        "category": { "type": "STRING" },
                        "summary": { "type": "STRING" },
                        "steps": string_list.clone(),
                        "pros": string_list.clone(),
                        "cons": string_list.clone(),
                        "complexity": { "type": "STRING" },
                        "toolsRecommendation": string_list
                    },
                    "required": ["name", "summary", "steps", "pros", "cons", "toolsRecommendation"]
                }
            },
            "conclusion": {
                "type": "STRING",
                "description": "Final advice on which method might be best based on data availability"
            }
        },
        "required": ["title", "problemType", "summary", "variables", "approaches"]
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::models::fixtures::sample_result;

    fn required(v: &Value) -> Vec<&str> {
        v["required"]
            .as_array()
            .unwrap()
            .iter()
            .map(|s| s.as_str().unwrap())
            .collect()
    }

    #[test]
    fn test_top_level_required_fields() {
        assert_eq!(
            required(&analysis_schema()),
            vec!["title", "problemType", "summary", "variables", "approaches"]
        );
    }

    #[test]
    fn test_item_required_fields() {
        let schema = analysis_schema();
        assert_eq!(
            required(&schema["properties"]["variables"]["items"]),
            vec!["symbol", "description", "type"]
        );
        assert_eq!(
            required(&schema["properties"]["approaches"]["items"]),
            vec!["name", "summary", "steps", "pros", "cons", "toolsRecommendation"]
        );
    }

    /// Every field the model can return is declared in the schema.
    #[test]
    fn test_schema_covers_model_fields() {
        let schema = analysis_schema();
        let value = serde_json::to_value(sample_result()).unwrap();

        for key in value.as_object().unwrap().keys() {
            assert!(schema["properties"].get(key).is_some(), "missing {key}");
        }
        for key in value["approaches"][0].as_object().unwrap().keys() {
            assert!(
                schema["properties"]["approaches"]["items"]["properties"]
                    .get(key)
                    .is_some(),
                "missing approach field {key}"
            );
        }
        for key in value["variables"][1].as_object().unwrap().keys() {
            assert!(
                schema["properties"]["variables"]["items"]["properties"]
                    .get(key)
                    .is_some(),
                "missing variable field {key}"
            );
        }
    }
}
