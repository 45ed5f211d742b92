use std::fmt;
use std::sync::{Arc, Mutex};

use once_cell::unsync::OnceCell;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use shared::models::{
    ErrorResponse, LoginForm, Project, ProjectCreate, ProjectDetail, RegisterRequest, Release,
    ReleaseFeedItem, Subscription, SubscriptionCreate, SubscriptionUpdate, TokenResponse, User,
};
use thiserror::Error;
use yew::Callback;

use crate::config::FrontendConfig;
use crate::token;

thread_local! {
    static SHARED_CLIENT: OnceCell<ReleaseScopeClient> = OnceCell::new();
}

/// Errors surfaced to callers of the API client.
///
/// Unauthorized responses are a separate variant because their side effects
/// (credential cleared, session notified) have already happened by the time
/// the caller sees the error.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The backend rejected the credential.
    #[error("authentication required")]
    Unauthorized,

    /// Any other non-success status, carrying the backend's detail message.
    #[error("{detail}")]
    Status {
        /// The HTTP status of the response.
        status: StatusCode,
        /// The backend's `detail` message, or the status reason when the
        /// body was not parseable.
        detail: String,
    },

    /// Transport-level failure before a status was available.
    #[error("unable to reach the server")]
    Http(#[from] reqwest::Error),
}

impl ApiError {
    /// Whether this error is the unauthorized variant.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }
}

/// API client for the ReleaseScope backend.
///
/// Every request in the application flows through this client: it attaches
/// the stored bearer credential per call and funnels every response through
/// one unauthorized choke point.
#[derive(Clone)]
pub struct ReleaseScopeClient {
    base_url: String,
    client: Client,
    on_unauthorized: Arc<Mutex<Option<Callback<()>>>>,
}

impl fmt::Debug for ReleaseScopeClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReleaseScopeClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl ReleaseScopeClient {
    /// Create a new API client with the provided base URL.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
            on_unauthorized: Arc::new(Mutex::new(None)),
        }
    }

    /// The process-wide client instance.
    pub fn shared() -> Self {
        SHARED_CLIENT.with(|cell| {
            cell.get_or_init(|| Self::new(FrontendConfig::default().api_base_url()))
                .clone()
        })
    }

    pub(crate) fn api_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Register the callback fired when a response invalidates the stored
    /// credential. The session layer uses this to drop to anonymous; the
    /// route guard then lands the user on the login surface.
    pub fn set_unauthorized_hook(&self, hook: Option<Callback<()>>) {
        if let Ok(mut guard) = self.on_unauthorized.lock() {
            *guard = hook;
        }
    }

    /// Attach `Authorization: Bearer <token>` when a credential is stored.
    ///
    /// The store is re-read on every call; nothing caches the value.
    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match token::read() {
            Some(token) => request.header("Authorization", format!("Bearer {token}")),
            None => request,
        }
    }

    /// The choke point every response passes through.
    ///
    /// 401 clears the credential store and fires the unauthorized hook, but
    /// only when a credential was actually cleared, so repeated 401s cannot
    /// double up the side effects. Every other error status propagates to
    /// the caller with the backend's detail message.
    async fn check(&self, response: Response) -> Result<Response, ApiError> {
        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            if token::take().is_some() {
                let hook = self
                    .on_unauthorized
                    .lock()
                    .ok()
                    .and_then(|guard| guard.as_ref().cloned());
                if let Some(hook) = hook {
                    hook.emit(());
                }
            }
            return Err(ApiError::Unauthorized);
        }
        if !status.is_success() {
            let detail = response
                .json::<ErrorResponse>()
                .await
                .map(|body| body.detail)
                .unwrap_or_else(|_| {
                    status
                        .canonical_reason()
                        .unwrap_or("request failed")
                        .to_string()
                });
            return Err(ApiError::Status { status, detail });
        }
        Ok(response)
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let response = request.send().await?;
        self.check(response).await
    }

    /// Exchange credentials for a bearer token.
    pub async fn login(&self, form: &LoginForm) -> Result<TokenResponse, ApiError> {
        let request = self.client.post(self.api_url("auth/login")).form(form);
        Ok(self.send(request).await?.json().await?)
    }

    /// Create a new account.
    pub async fn register(&self, payload: &RegisterRequest) -> Result<User, ApiError> {
        let request = self.client.post(self.api_url("auth/register")).json(payload);
        Ok(self.send(request).await?.json().await?)
    }

    /// Fetch the identity behind the stored credential.
    pub async fn me(&self) -> Result<User, ApiError> {
        let request = self.authorize(self.client.get(self.api_url("auth/me")));
        Ok(self.send(request).await?.json().await?)
    }

    /// List every tracked project.
    pub async fn list_projects(&self) -> Result<Vec<Project>, ApiError> {
        let request = self.authorize(self.client.get(self.api_url("projects")));
        Ok(self.send(request).await?.json().await?)
    }

    /// Fetch one project with its recent releases and subscription flag.
    pub async fn get_project(&self, id: i64) -> Result<ProjectDetail, ApiError> {
        let request = self.authorize(self.client.get(self.api_url(&format!("projects/{id}"))));
        Ok(self.send(request).await?.json().await?)
    }

    /// Start tracking a new project.
    pub async fn create_project(&self, payload: &ProjectCreate) -> Result<Project, ApiError> {
        let request = self.authorize(self.client.post(self.api_url("projects")).json(payload));
        Ok(self.send(request).await?.json().await?)
    }

    /// Stop tracking a project.
    pub async fn delete_project(&self, id: i64) -> Result<(), ApiError> {
        let request = self.authorize(self.client.delete(self.api_url(&format!("projects/{id}"))));
        self.send(request).await?;
        Ok(())
    }

    /// Fetch the cross-project release feed.
    pub async fn release_feed(
        &self,
        limit: u32,
        days: u32,
    ) -> Result<Vec<ReleaseFeedItem>, ApiError> {
        let request = self.authorize(
            self.client
                .get(self.api_url("releases/feed"))
                .query(&[("limit", limit), ("days", days)]),
        );
        Ok(self.send(request).await?.json().await?)
    }

    /// Fetch the releases of one project, newest first.
    pub async fn project_releases(&self, project_id: i64) -> Result<Vec<Release>, ApiError> {
        let request = self.authorize(
            self.client
                .get(self.api_url(&format!("releases/project/{project_id}"))),
        );
        Ok(self.send(request).await?.json().await?)
    }

    /// List the current user's subscriptions.
    pub async fn list_subscriptions(&self) -> Result<Vec<Subscription>, ApiError> {
        let request = self.authorize(self.client.get(self.api_url("subscriptions")));
        Ok(self.send(request).await?.json().await?)
    }

    /// Subscribe to a project.
    pub async fn create_subscription(
        &self,
        payload: &SubscriptionCreate,
    ) -> Result<Subscription, ApiError> {
        let request = self.authorize(self.client.post(self.api_url("subscriptions")).json(payload));
        Ok(self.send(request).await?.json().await?)
    }

    /// Update notification settings on a subscription.
    pub async fn update_subscription(
        &self,
        id: i64,
        payload: &SubscriptionUpdate,
    ) -> Result<Subscription, ApiError> {
        let request = self.authorize(
            self.client
                .put(self.api_url(&format!("subscriptions/{id}")))
                .json(payload),
        );
        Ok(self.send(request).await?.json().await?)
    }

    /// Delete a subscription by its own id.
    pub async fn delete_subscription(&self, id: i64) -> Result<(), ApiError> {
        let request = self.authorize(
            self.client
                .delete(self.api_url(&format!("subscriptions/{id}"))),
        );
        self.send(request).await?;
        Ok(())
    }
}
