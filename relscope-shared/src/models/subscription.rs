use serde::{Deserialize, Serialize};

use super::Timestamp;
use super::project::ReleaseSource;

/// A subscription record from `GET /subscriptions`.
///
/// This is the only shape that links a project to a subscription id; views
/// that only ever saw a boolean have to re-fetch this list to recover the
/// id before they can delete anything.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Subscription {
    /// Unique identifier for the subscription.
    pub id: i64,

    /// The owning user.
    pub user_id: i64,

    /// The subscribed project.
    pub project_id: i64,

    /// Whether release emails are sent.
    pub notify_email: bool,

    /// Whether a webhook is called on release.
    #[serde(default)]
    pub notify_webhook: bool,

    /// Webhook target, when `notify_webhook` is set.
    #[serde(default)]
    pub webhook_url: Option<String>,

    /// When the subscription was created.
    pub created_at: Timestamp,

    /// Denormalized project name for display.
    pub project_name: String,

    /// Denormalized project source for display.
    pub project_source: ReleaseSource,
}

/// Request to create a subscription via `POST /subscriptions`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SubscriptionCreate {
    /// The project to subscribe to.
    pub project_id: i64,

    /// Whether release emails should be sent.
    pub notify_email: bool,
}

impl SubscriptionCreate {
    /// Subscribe to a project with email notifications on, the backend's
    /// default.
    #[must_use]
    pub fn for_project(project_id: i64) -> Self {
        Self {
            project_id,
            notify_email: true,
        }
    }
}

/// Partial update for `PUT /subscriptions/{id}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SubscriptionUpdate {
    /// New email-notification setting, when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notify_email: Option<bool>,

    /// New webhook setting, when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notify_webhook: Option<bool>,

    /// New webhook target, when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subscription_deserialization() {
        let json = r#"{
            "id": 7,
            "user_id": 1,
            "project_id": 42,
            "notify_email": true,
            "notify_webhook": false,
            "webhook_url": null,
            "created_at": "2026-01-01T00:00:00",
            "project_name": "tokio",
            "project_source": "crates"
        }"#;

        let sub: Subscription = serde_json::from_str(json).unwrap();
        assert_eq!(sub.id, 7);
        assert_eq!(sub.project_id, 42);
        assert_eq!(sub.project_source, ReleaseSource::Crates);
    }

    #[test]
    fn create_defaults_to_email_on() {
        let request = SubscriptionCreate::for_project(42);
        assert_eq!(request.project_id, 42);
        assert!(request.notify_email);
    }

    #[test]
    fn update_skips_absent_fields() {
        let update = SubscriptionUpdate {
            notify_email: Some(false),
            ..SubscriptionUpdate::default()
        };

        let json = serde_json::to_string(&update).unwrap();
        assert_eq!(json, r#"{"notify_email":false}"#);
    }
}
