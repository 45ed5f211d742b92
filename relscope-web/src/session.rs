//! Session manager: in-memory identity and the transitions that mutate it.
//!
//! All session mutation funnels through the functions here; components only
//! ever read [`SessionState`] through the store. The state machine is
//! `probing -> authenticated | anonymous`, with `authenticated -> anonymous`
//! on logout or forced invalidation from the API layer.

use shared::models::{LoginForm, RegisterRequest, User};
use yewdux::Dispatch;
use yewdux::Store;

use crate::api::{ApiError, ReleaseScopeClient};
use crate::token;

/// The session as the routed tree observes it.
#[derive(Debug, Clone, PartialEq, Store)]
pub struct SessionState {
    /// The authenticated identity, absent while anonymous.
    pub user: Option<User>,
    /// True only while the cold-start identity probe is outstanding.
    pub loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        // The probe has not resolved yet at process start.
        Self {
            user: None,
            loading: true,
        }
    }
}

impl SessionState {
    /// A resolved, signed-in session.
    #[must_use]
    pub fn authenticated(user: User) -> Self {
        Self {
            user: Some(user),
            loading: false,
        }
    }

    /// A resolved, signed-out session.
    #[must_use]
    pub fn anonymous() -> Self {
        Self {
            user: None,
            loading: false,
        }
    }

    /// True iff an identity is present.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

/// Cold-start identity probe.
///
/// Without a stored credential this resolves to anonymous immediately, no
/// network involved. With one, the identity is fetched; any failure lands
/// on anonymous with the credential cleared. The probe never surfaces an
/// error to the user.
pub async fn probe(dispatch: &Dispatch<SessionState>) {
    if token::read().is_none() {
        dispatch.set(SessionState::anonymous());
        return;
    }
    let client = ReleaseScopeClient::shared();
    match client.me().await {
        Ok(user) => dispatch.set(SessionState::authenticated(user)),
        Err(err) => {
            log::warn!("session probe failed: {err}");
            token::clear();
            dispatch.set(SessionState::anonymous());
        }
    }
}

/// Exchange credentials for a token, persist it, and load the identity.
///
/// Failures propagate to the caller and leave both the store and the
/// session untouched, except that a failed identity fetch after a
/// successful exchange clears the just-stored token again.
pub async fn login(
    dispatch: &Dispatch<SessionState>,
    email: String,
    password: String,
) -> Result<(), ApiError> {
    let client = ReleaseScopeClient::shared();
    let issued = client
        .login(&LoginForm {
            username: email,
            password,
        })
        .await?;
    token::store(&issued.access_token);

    match client.me().await {
        Ok(user) => {
            dispatch.set(SessionState::authenticated(user));
            Ok(())
        }
        Err(err) => {
            token::clear();
            Err(err)
        }
    }
}

/// Create an account, then sign in with the same credentials.
///
/// A failed registration propagates without attempting the login.
pub async fn register(
    dispatch: &Dispatch<SessionState>,
    request: RegisterRequest,
) -> Result<(), ApiError> {
    let client = ReleaseScopeClient::shared();
    client.register(&request).await?;
    login(dispatch, request.email, request.password).await
}

/// Drop the credential and the identity. Synchronous, no network call,
/// and a no-op when already anonymous.
pub fn logout(dispatch: &Dispatch<SessionState>) {
    token::clear();
    dispatch.set(SessionState::anonymous());
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use shared::models::Timestamp;

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
    fn default_state_is_probing() {
        let state = SessionState::default();
        assert!(state.loading);
        assert!(state.user.is_none());
        assert!(!state.is_authenticated());
    }

    #[test]
    fn authenticated_iff_user_present() {
        let signed_in = SessionState::authenticated(sample_user());
        assert!(signed_in.is_authenticated());
        assert!(!signed_in.loading);

        let signed_out = SessionState::anonymous();
        assert!(!signed_out.is_authenticated());
        assert!(!signed_out.loading);
    }

    #[test]
    fn resolved_states_never_load() {
        assert!(!SessionState::authenticated(sample_user()).loading);
        assert!(!SessionState::anonymous().loading);
    }

    #[test]
    fn anonymous_transition_is_idempotent() {
        // Dropping to anonymous from anonymous changes nothing observable.
        let first = SessionState::anonymous();
        let second = SessionState::anonymous();
        assert_eq!(first, second);
    }

    #[test]
    fn state_equality_tracks_identity() {
        let user = sample_user();
        let one = SessionState::authenticated(user.clone());
        let two = SessionState::authenticated(user);
        assert_eq!(one, two);
        assert_ne!(one, SessionState::anonymous());
    }
}
