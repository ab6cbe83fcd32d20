//! Extracting the tips JSON from model output
//!
//! Models often wrap the JSON payload in prose or code fences, so the
//! outermost `{...}` is taken and parsed.

use crate::error::{BudgetError, BudgetResult};

use super::request::TipsResponse;

/// Longest slice of raw model output quoted in an error message
const MAX_RAW_IN_ERROR: usize = 200;

fn truncate_raw(raw: &str) -> String {
    if raw.chars().count() > MAX_RAW_IN_ERROR {
        let head: String = raw.chars().take(MAX_RAW_IN_ERROR).collect();
        format!("{}...", head)
    } else {
        raw.to_string()
    }
}

/// Parse a tips response from model output
pub fn parse_tips_response(response: &str) -> BudgetResult<TipsResponse> {
    let response = response.trim();
    let start = response.find('{');
    let end = response.rfind('}');

    match (start, end) {
        (Some(s), Some(e)) if s < e => {
            let json_str = &response[s..=e];
            serde_json::from_str(json_str).map_err(|e| {
                BudgetError::Ai(format!(
                    "Invalid tips JSON from model: {} | Raw: {}",
                    e,
                    truncate_raw(json_str)
                ))
            })
        }
        _ => Err(BudgetError::Ai(format!(
            "No JSON found in model response | Raw: {}",
            truncate_raw(response)
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_json() {
        let parsed = parse_tips_response(
            r#"{"recommendations": ["Cook at home"], "summary": "Dining is high."}"#,
        )
        .unwrap();

        assert_eq!(parsed.recommendations, vec!["Cook at home"]);
        assert_eq!(parsed.summary, "Dining is high.");
    }

    #[test]
    fn test_json_wrapped_in_prose() {
        let raw = "Sure! Here you go:\n```json\n{\"recommendations\": [\"a\", \"b\"], \"summary\": \"s\"}\n```\nGood luck.";
        let parsed = parse_tips_response(raw).unwrap();
        assert_eq!(parsed.recommendations.len(), 2);
    }

    #[test]
    fn test_no_json_is_ai_error() {
        let err = parse_tips_response("I cannot help with that.").unwrap_err();
        assert!(err.is_ai());
        assert!(err.to_string().contains("No JSON found"));
    }

    #[test]
    fn test_wrong_shape_is_ai_error() {
        let err = parse_tips_response(r#"{"tips": []}"#).unwrap_err();
        assert!(err.is_ai());
        assert!(err.to_string().contains("Invalid tips JSON"));
    }

    #[test]
    fn test_long_raw_output_is_truncated() {
        let raw = "x".repeat(500);
        let message = parse_tips_response(&raw).unwrap_err().to_string();
        assert!(message.ends_with("..."));
        assert!(message.len() < 300);
    }
}
