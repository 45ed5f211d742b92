//! Wire models exchanged with the ReleaseScope backend.

pub mod errors;
pub mod project;
pub mod release;
pub mod subscription;
pub mod timestamp;
pub mod user;

pub use errors::ErrorResponse;
pub use project::{Project, ProjectCreate, ProjectDetail, ReleaseSource};
pub use release::{Release, ReleaseFeedItem};
pub use subscription::{Subscription, SubscriptionCreate, SubscriptionUpdate};
pub use timestamp::Timestamp;
pub use user::{LoginForm, RegisterRequest, TokenResponse, User};
