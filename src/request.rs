//! Process I/O payloads
//!
//! One JSON object in on stdin, one JSON object out on stdout. Failures
//! surface as a structured error object plus a non-zero exit code.

use serde::{Deserialize, Serialize};

/// Incoming query read from stdin
///
/// Grade is any JSON scalar usable as an equality filter; absent fields
/// resolve to a null filter value / empty subject.
#[derive(Debug, Clone, Deserialize)]
pub struct RecommendRequest {
    #[serde(default)]
    pub grade: Option<serde_json::Value>,
    #[serde(default)]
    pub subject: Option<String>,
}

/// Result written to stdout: ordered video ids, best match first
#[derive(Debug, Clone, Serialize)]
pub struct RecommendResponse {
    pub recommendations: Vec<String>,
}

/// Structured failure payload written to stdout before exiting non-zero
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_parses_with_both_fields() {
        let req: RecommendRequest =
            serde_json::from_str(r#"{"grade": "10", "subject": "Math"}"#).unwrap();
        assert_eq!(req.grade, Some(serde_json::json!("10")));
        assert_eq!(req.subject.as_deref(), Some("Math"));
    }

    #[test]
    fn request_tolerates_absent_fields() {
        let req: RecommendRequest = serde_json::from_str("{}").unwrap();
        assert!(req.grade.is_none());
        assert!(req.subject.is_none());
    }

    #[test]
    fn request_accepts_numeric_grade() {
        let req: RecommendRequest =
            serde_json::from_str(r#"{"grade": 10, "subject": "Math"}"#).unwrap();
        assert_eq!(req.grade, Some(serde_json::json!(10)));
    }

    #[test]
    fn response_serializes_to_expected_shape() {
        let resp = RecommendResponse {
            recommendations: vec!["a".to_string(), "b".to_string()],
        };
        let json = serde_json::to_string(&resp).unwrap();
        assert_eq!(json, r#"{"recommendations":["a","b"]}"#);
    }

    #[test]
    fn empty_response_serializes_to_empty_list() {
        let resp = RecommendResponse {
            recommendations: vec![],
        };
        assert_eq!(
            serde_json::to_string(&resp).unwrap(),
            r#"{"recommendations":[]}"#
        );
    }
}
