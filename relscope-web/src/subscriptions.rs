//! Subscription reconciliation for views that only hold a boolean.
//!
//! Three views care whether a project is subscribed, but none of them keeps
//! a subscription id around: the detail endpoint embeds a bare flag and the
//! list endpoints are fetched independently. Subscribing needs no id.
//! Unsubscribing has no delete-by-project endpoint, so the authoritative
//! list is re-fetched and scanned to recover the id first.

use shared::models::{Subscription, SubscriptionCreate};

use crate::api::{ApiError, ReleaseScopeClient};

/// Recover the subscription id covering `project_id` from the
/// authoritative list, if present.
#[must_use]
pub fn find_for_project(subscriptions: &[Subscription], project_id: i64) -> Option<i64> {
    subscriptions
        .iter()
        .find(|subscription| subscription.project_id == project_id)
        .map(|subscription| subscription.id)
}

/// Flip the subscription state for a project, returning the state the view
/// should now hold.
///
/// The flag is reported only after the backend call succeeds; callers keep
/// their current state on error. When unsubscribing, the list-then-delete
/// pair is sequential and not atomic: an entry that has already vanished
/// (removed elsewhere between the two calls, or before them) still settles
/// on unsubscribed rather than failing.
pub async fn toggle(
    client: &ReleaseScopeClient,
    project_id: i64,
    subscribed: bool,
) -> Result<bool, ApiError> {
    if subscribed {
        let subscriptions = client.list_subscriptions().await?;
        if let Some(subscription_id) = find_for_project(&subscriptions, project_id) {
            client.delete_subscription(subscription_id).await?;
        }
        Ok(false)
    } else {
        client
            .create_subscription(&SubscriptionCreate::for_project(project_id))
            .await?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use shared::models::{ReleaseSource, Timestamp};

    fn subscription(id: i64, project_id: i64) -> Subscription {
        Subscription {
            id,
            user_id: 1,
            project_id,
            notify_email: true,
            notify_webhook: false,
            webhook_url: None,
            created_at: Timestamp(Utc::now()),
            project_name: format!("project-{project_id}"),
            project_source: ReleaseSource::Github,
        }
    }

    #[test]
    fn scan_finds_the_matching_entry() {
        let subscriptions = vec![
            subscription(3, 10),
            subscription(7, 42),
            subscription(9, 99),
        ];
        assert_eq!(find_for_project(&subscriptions, 42), Some(7));
    }

    #[test]
    fn scan_misses_when_no_entry_covers_the_project() {
        let subscriptions = vec![subscription(3, 10)];
        assert_eq!(find_for_project(&subscriptions, 42), None);
        assert_eq!(find_for_project(&[], 42), None);
    }

    #[test]
    fn scan_returns_the_first_match() {
        // The backend should never hand out duplicates, but the scan must
        // still be deterministic if it does.
        let subscriptions = vec![subscription(7, 42), subscription(8, 42)];
        assert_eq!(find_for_project(&subscriptions, 42), Some(7));
    }

    #[test]
    fn scan_matches_on_project_id_not_subscription_id() {
        let subscriptions = vec![subscription(42, 7)];
        assert_eq!(find_for_project(&subscriptions, 42), None);
        assert_eq!(find_for_project(&subscriptions, 7), Some(42));
    }
}
