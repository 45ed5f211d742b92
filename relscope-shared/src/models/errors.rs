use serde::{Deserialize, Serialize};

/// The backend's JSON error body.
///
/// Every non-success response carries `{"detail": "..."}`.
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct ErrorResponse {
    /// Human-readable description of what went wrong.
    pub detail: String,
}

impl ErrorResponse {
    /// Creates a new error response with the given detail message.
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}

impl std::fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.detail)
    }
}

impl std::error::Error for ErrorResponse {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response_new() {
        let error = ErrorResponse::new("Email already registered");
        assert_eq!(error.detail, "Email already registered");
    }

    #[test]
    fn test_error_response_display() {
        let error = ErrorResponse::new("Project not found");
        assert_eq!(format!("{error}"), "Project not found");
    }

    #[test]
    fn test_error_response_deserialization() {
        let json = r#"{"detail":"Could not validate credentials"}"#;
        let error: ErrorResponse = serde_json::from_str(json).unwrap();
        assert_eq!(error.detail, "Could not validate credentials");
    }

    #[test]
    fn test_error_response_as_error() {
        let error = ErrorResponse::new("boom");
        let as_trait: &dyn std::error::Error = &error;
        assert_eq!(as_trait.to_string(), "boom");
    }
}
