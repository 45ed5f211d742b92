use serde::{Deserialize, Serialize};

use super::Timestamp;

/// An authenticated user account as returned by `GET /auth/me`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    /// Unique identifier for the user.
    pub id: i64,

    /// The user's email address.
    pub email: String,

    /// The user's given name.
    pub first_name: String,

    /// The user's family name.
    pub last_name: String,

    /// Whether the account is active.
    pub is_active: bool,

    /// When the account was created.
    pub created_at: Timestamp,
}

impl User {
    /// The user's full display name.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Credentials posted form-encoded to `POST /auth/login`.
///
/// The backend speaks the OAuth2 password-grant field names, so the email
/// travels as `username`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct LoginForm {
    /// The user's email address.
    pub username: String,

    /// The user's password.
    pub password: String,
}

/// Request to create a new account via `POST /auth/register`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisterRequest {
    /// The user's email address.
    pub email: String,

    /// The user's password.
    pub password: String,

    /// The user's given name.
    pub first_name: String,

    /// The user's family name.
    pub last_name: String,
}

/// A bearer credential issued by `POST /auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenResponse {
    /// The opaque bearer token.
    pub access_token: String,

    /// Token scheme, always `bearer`.
    pub token_type: String,

    /// Seconds until the token expires.
    pub expires_in: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample_user() -> User {
        User {
            id: 1,
            email: "a@b.com".to_string(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            is_active: true,
            created_at: Timestamp(Utc::now()),
        }
    }

    #[test]
    fn test_full_name() {
        assert_eq!(sample_user().full_name(), "Ada Lovelace");
    }

    #[test]
    fn test_user_deserialization() {
        let json = r#"{
            "id": 1,
            "email": "a@b.com",
            "first_name": "Ada",
            "last_name": "Lovelace",
            "is_active": true,
            "created_at": "2026-01-05T08:00:00"
        }"#;

        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, 1);
        assert_eq!(user.email, "a@b.com");
        assert!(user.is_active);
    }

    #[test]
    fn test_user_equality() {
        let user = sample_user();
        let same = user.clone();
        let mut other = user.clone();
        other.id = 2;

        assert_eq!(user, same);
        assert_ne!(user, other);
    }

    #[test]
    fn test_login_form_field_names() {
        let form = LoginForm {
            username: "a@b.com".to_string(),
            password: "pw".to_string(),
        };

        let json = serde_json::to_string(&form).unwrap();
        assert!(json.contains("\"username\""));
        assert!(json.contains("\"password\""));
    }

    #[test]
    fn test_token_response_deserialization() {
        let json = r#"{"access_token":"abc","token_type":"bearer","expires_in":1800}"#;
        let token: TokenResponse = serde_json::from_str(json).unwrap();
        assert_eq!(token.access_token, "abc");
        assert_eq!(token.token_type, "bearer");
        assert_eq!(token.expires_in, 1800);
    }

    #[test]
    fn test_register_request_serialization() {
        let request = RegisterRequest {
            email: "a@b.com".to_string(),
            password: "password123".to_string(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
        };

        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"first_name\":\"Ada\""));
        assert!(json.contains("\"last_name\":\"Lovelace\""));
    }
}
