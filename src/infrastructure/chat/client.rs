use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client as ReqwestClient, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use tokio::sync::RwLock;
use tracing::{debug, instrument};

use super::types::{AddMemberRequest, CreatePostRequest, LoginRequest, PostList, SearchRequest};
use crate::domain::models::chat::{Channel, Post, Team, User};
use crate::domain::ports::{ChatClient, ChatClientError, ChatResult};

const API_PREFIX: &str = "/api/v4";

/// Response header carrying the session token after login
const TOKEN_HEADER: &str = "Token";

/// Configuration for the chat HTTP client
#[derive(Debug, Clone)]
pub struct HttpChatClientConfig {
    /// Base URL of the chat service (e.g. `https://chat.example.com`)
    pub base_url: String,

    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for HttpChatClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8065".to_string(),
            timeout_secs: 30,
        }
    }
}

/// HTTP client for the chat service REST API
///
/// One instance is one session: `login` stores the returned token and every
/// later request sends it as a bearer token.
pub struct HttpChatClient {
    /// Reusable HTTP client with connection pooling
    http_client: ReqwestClient,

    /// Base URL without trailing slash
    base_url: String,

    /// Session token, set by `login`
    token: RwLock<Option<String>>,
}

impl HttpChatClient {
    /// Create a new client
    ///
    /// # Returns
    /// * `Err(anyhow::Error)` - Failed to build HTTP client
    pub fn new(config: HttpChatClientConfig) -> Result<Self> {
        let http_client = ReqwestClient::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .pool_max_idle_per_host(4)
            .tcp_nodelay(true)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http_client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: RwLock::new(None),
        })
    }

    /// Returns true once a session token has been obtained
    pub async fn is_logged_in(&self) -> bool {
        self.token.read().await.is_some()
    }

    fn url(&self, path: &str) -> String {
        format!("{}{API_PREFIX}{path}", self.base_url)
    }

    async fn authorized(&self, request: RequestBuilder) -> ChatResult<RequestBuilder> {
        let token = self.token.read().await;
        let token = token.as_deref().ok_or(ChatClientError::NotLoggedIn)?;
        Ok(request.bearer_auth(token))
    }

    /// Send a request and convert non-success statuses into errors
    async fn send(request: RequestBuilder) -> ChatResult<Response> {
        let response = request.send().await.map_err(transport_error)?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Failed to read error response".to_string());
        Err(status_error(status, body))
    }

    async fn send_json<T: DeserializeOwned>(request: RequestBuilder) -> ChatResult<T> {
        Self::send(request)
            .await?
            .json()
            .await
            .map_err(|e| ChatClientError::Decode(e.to_string()))
    }
}

/// Map an HTTP error status onto the client error taxonomy
pub fn status_error(status: StatusCode, body: String) -> ChatClientError {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ChatClientError::Unauthorized(body),
        StatusCode::NOT_FOUND => ChatClientError::NotFound(body),
        s if s.is_server_error() => ChatClientError::Server {
            status: s.as_u16(),
            body,
        },
        s => ChatClientError::Unexpected {
            status: s.as_u16(),
            body,
        },
    }
}

fn transport_error(err: reqwest::Error) -> ChatClientError {
    if err.is_decode() {
        ChatClientError::Decode(err.to_string())
    } else {
        ChatClientError::Network(err.to_string())
    }
}

#[async_trait]
impl ChatClient for HttpChatClient {
    #[instrument(skip(self, password))]
    async fn login(&self, username: &str, password: &str) -> ChatResult<User> {
        let request = self
            .http_client
            .post(self.url("/users/login"))
            .json(&LoginRequest {
                login_id: username,
                password,
            });

        let response = Self::send(request).await?;
        let token = response
            .headers()
            .get(TOKEN_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
            .ok_or_else(|| ChatClientError::Decode("login response had no token".to_string()))?;

        let user: User = response
            .json()
            .await
            .map_err(|e| ChatClientError::Decode(e.to_string()))?;

        *self.token.write().await = Some(token);
        debug!(user_id = %user.id, "Logged in");
        Ok(user)
    }

    async fn ping(&self) -> ChatResult<()> {
        Self::send(self.http_client.get(self.url("/system/ping"))).await?;
        Ok(())
    }

    async fn get_me(&self) -> ChatResult<User> {
        let request = self
            .authorized(self.http_client.get(self.url("/users/me")))
            .await?;
        Self::send_json(request).await
    }

    async fn get_team_by_name(&self, name: &str) -> ChatResult<Team> {
        let request = self
            .authorized(self.http_client.get(self.url(&format!("/teams/name/{name}"))))
            .await?;
        Self::send_json(request).await
    }

    async fn get_channel_by_name(&self, team_id: &str, name: &str) -> ChatResult<Channel> {
        let path = format!("/teams/{team_id}/channels/name/{name}");
        let request = self.authorized(self.http_client.get(self.url(&path))).await?;
        Self::send_json(request).await
    }

    async fn join_channel(&self, channel_id: &str, user_id: &str) -> ChatResult<()> {
        let path = format!("/channels/{channel_id}/members");
        let request = self
            .authorized(
                self.http_client
                    .post(self.url(&path))
                    .json(&AddMemberRequest { user_id }),
            )
            .await?;
        Self::send(request).await?;
        Ok(())
    }

    async fn leave_channel(&self, channel_id: &str, user_id: &str) -> ChatResult<()> {
        let path = format!("/channels/{channel_id}/members/{user_id}");
        let request = self
            .authorized(self.http_client.delete(self.url(&path)))
            .await?;
        Self::send(request).await?;
        Ok(())
    }

    async fn create_post(&self, channel_id: &str, message: &str) -> ChatResult<Post> {
        let request = self
            .authorized(
                self.http_client
                    .post(self.url("/posts"))
                    .json(&CreatePostRequest {
                        channel_id,
                        message,
                    }),
            )
            .await?;
        Self::send_json(request).await
    }

    async fn get_posts_since(&self, channel_id: &str, since_ms: i64) -> ChatResult<Vec<Post>> {
        let path = format!("/channels/{channel_id}/posts");
        let request = self
            .authorized(
                self.http_client
                    .get(self.url(&path))
                    .query(&[("since", since_ms)]),
            )
            .await?;
        let list: PostList = Self::send_json(request).await?;
        Ok(list.into_ordered())
    }

    async fn search_posts(&self, team_id: &str, terms: &str) -> ChatResult<Vec<Post>> {
        let path = format!("/teams/{team_id}/posts/search");
        let request = self
            .authorized(self.http_client.post(self.url(&path)).json(&SearchRequest {
                terms,
                is_or_search: false,
            }))
            .await?;
        let list: PostList = Self::send_json(request).await?;
        Ok(list.into_ordered())
    }
}
