//! Tests for the API client functionality
//!
//! Validates URL construction, the error taxonomy, and the header shapes
//! attached to authenticated requests.

use reqwest::StatusCode;
use shared::models::ErrorResponse;

use crate::api::{ApiError, ReleaseScopeClient};

/// Tests API client creation
#[test]
fn test_api_client_creation() {
    let client = ReleaseScopeClient::new("http://localhost:8000/api");
    assert_eq!(client.api_url("auth/me"), "http://localhost:8000/api/auth/me");
}

/// Tests that trailing and leading slashes collapse
#[test]
fn test_api_url_normalization() {
    let client = ReleaseScopeClient::new("/api/");
    assert_eq!(client.api_url("/projects"), "/api/projects");
    assert_eq!(client.api_url("projects"), "/api/projects");
}

/// Tests endpoint URL shapes
#[test]
fn test_api_endpoints() {
    let client = ReleaseScopeClient::new("/api");

    assert_eq!(client.api_url("auth/login"), "/api/auth/login");
    assert_eq!(client.api_url("auth/register"), "/api/auth/register");
    assert_eq!(client.api_url("releases/feed"), "/api/releases/feed");

    let project_id = 42;
    assert_eq!(
        client.api_url(&format!("projects/{project_id}")),
        "/api/projects/42"
    );
    assert_eq!(
        client.api_url(&format!("releases/project/{project_id}")),
        "/api/releases/project/42"
    );

    let subscription_id = 7;
    assert_eq!(
        client.api_url(&format!("subscriptions/{subscription_id}")),
        "/api/subscriptions/7"
    );
}

/// Tests the bearer header shape sent with authenticated requests
#[test]
fn test_bearer_header_format() {
    let token = "xyz";
    assert_eq!(format!("Bearer {token}"), "Bearer xyz");
}

/// Tests that unauthorized errors are distinguishable from other statuses
#[test]
fn test_error_taxonomy() {
    let unauthorized = ApiError::Unauthorized;
    assert!(unauthorized.is_unauthorized());

    let conflict = ApiError::Status {
        status: StatusCode::BAD_REQUEST,
        detail: "Email already registered".to_string(),
    };
    assert!(!conflict.is_unauthorized());
}

/// Tests that status errors surface the backend's detail message
#[test]
fn test_status_error_display() {
    let error = ApiError::Status {
        status: StatusCode::NOT_FOUND,
        detail: "Project not found".to_string(),
    };
    assert_eq!(error.to_string(), "Project not found");
}

/// Tests the backend error body shape
#[test]
fn test_error_body_parsing() {
    let body: ErrorResponse =
        serde_json::from_str(r#"{"detail":"Could not validate credentials"}"#).unwrap();
    assert_eq!(body.detail, "Could not validate credentials");
}
