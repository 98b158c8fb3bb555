use async_trait::async_trait;
use thiserror::Error;

use crate::domain::models::chat::{Channel, Post, Team, User};

/// Errors returned by a [`ChatClient`]
#[derive(Error, Debug)]
pub enum ChatClientError {
    /// Missing, expired or rejected credentials (HTTP 401/403)
    #[error("authentication failed: {0}")]
    Unauthorized(String),

    /// Requested resource does not exist (HTTP 404)
    #[error("not found: {0}")]
    NotFound(String),

    /// Server-side failure (HTTP 5xx)
    #[error("server error ({status}): {body}")]
    Server { status: u16, body: String },

    /// Any other non-success status
    #[error("unexpected response ({status}): {body}")]
    Unexpected { status: u16, body: String },

    /// Connection, TLS or timeout failure
    #[error("network error: {0}")]
    Network(String),

    /// Response body could not be decoded
    #[error("failed to decode response: {0}")]
    Decode(String),

    /// The client has no session token yet
    #[error("client is not logged in")]
    NotLoggedIn,
}

impl ChatClientError {
    /// Returns true for failures caused by credentials rather than the service
    pub const fn is_auth_failure(&self) -> bool {
        matches!(self, Self::Unauthorized(_) | Self::NotLoggedIn)
    }
}

/// Result type for chat client operations
pub type ChatResult<T> = Result<T, ChatClientError>;

/// Port trait for the monitored chat service
///
/// One handle represents one authenticated session. Probes share handles
/// through `Arc<dyn ChatClient>` and only issue requests through them; the
/// session token is the only state a call may change (`login`).
#[async_trait]
pub trait ChatClient: Send + Sync {
    /// Authenticate and keep the returned session token for later calls
    async fn login(&self, username: &str, password: &str) -> ChatResult<User>;

    /// Unauthenticated liveness check
    async fn ping(&self) -> ChatResult<()>;

    /// Fetch the user that owns the current session
    async fn get_me(&self) -> ChatResult<User>;

    /// Look up a team by its URL name
    async fn get_team_by_name(&self, name: &str) -> ChatResult<Team>;

    /// Look up a channel by team ID and channel name
    async fn get_channel_by_name(&self, team_id: &str, name: &str) -> ChatResult<Channel>;

    /// Add a user to a channel
    async fn join_channel(&self, channel_id: &str, user_id: &str) -> ChatResult<()>;

    /// Remove a user from a channel
    async fn leave_channel(&self, channel_id: &str, user_id: &str) -> ChatResult<()>;

    /// Post a message to a channel
    async fn create_post(&self, channel_id: &str, message: &str) -> ChatResult<Post>;

    /// Posts in a channel created after `since_ms` (Unix epoch milliseconds)
    async fn get_posts_since(&self, channel_id: &str, since_ms: i64) -> ChatResult<Vec<Post>>;

    /// Full-text search of posts in a team
    async fn search_posts(&self, team_id: &str, terms: &str) -> ChatResult<Vec<Post>>;
}
