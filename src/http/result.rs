use serde::Serialize;
use serde_json::Value;

/// Outcome of a single HTTP call.
///
/// Either the decoded JSON response body, or the failure's string
/// description. Serializes untagged, so the error variant round-trips as
/// `{"error": "<message>"}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ApiResult {
    Json(Value),
    Error { error: String },
}

impl ApiResult {
    pub(crate) fn error(message: impl Into<String>) -> Self {
        ApiResult::Error {
            error: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ApiResult::Json(_))
    }

    /// The decoded response body, if the call succeeded.
    pub fn json(&self) -> Option<&Value> {
        match self {
            ApiResult::Json(value) => Some(value),
            ApiResult::Error { .. } => None,
        }
    }

    /// The failure description, if the call failed.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            ApiResult::Json(_) => None,
            ApiResult::Error { error } => Some(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_accessors_follow_variant() {
        let ok = ApiResult::Json(json!({"id": 1}));
        assert!(ok.is_success());
        assert_eq!(ok.json(), Some(&json!({"id": 1})));
        assert!(ok.error_message().is_none());

        let err = ApiResult::error("connection refused");
        assert!(!err.is_success());
        assert!(err.json().is_none());
        assert_eq!(err.error_message(), Some("connection refused"));
    }

    #[test]
    fn test_error_serializes_as_error_object() {
        let err = ApiResult::error("boom");
        assert_eq!(
            serde_json::to_value(&err).expect("serialization failed"),
            json!({"error": "boom"})
        );
    }

    #[test]
    fn test_success_serializes_as_plain_body() {
        let ok = ApiResult::Json(json!({"users": [1, 2]}));
        assert_eq!(
            serde_json::to_value(&ok).expect("serialization failed"),
            json!({"users": [1, 2]})
        );
    }
}
