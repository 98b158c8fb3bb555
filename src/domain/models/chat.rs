use serde::{Deserialize, Serialize};

/// Authenticated user account on the chat service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Server-assigned user ID
    pub id: String,

    /// Login name
    pub username: String,
}

/// Team (workspace) containing channels
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    /// Server-assigned team ID
    pub id: String,

    /// URL-safe team name
    pub name: String,

    /// Human-readable team name
    #[serde(default)]
    pub display_name: String,
}

/// Channel within a team
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channel {
    /// Server-assigned channel ID
    pub id: String,

    /// Owning team ID
    pub team_id: String,

    /// URL-safe channel name
    pub name: String,
}

/// Message posted in a channel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Server-assigned post ID
    pub id: String,

    /// Channel the post belongs to
    pub channel_id: String,

    /// Author user ID
    #[serde(default)]
    pub user_id: String,

    /// Message body
    pub message: String,

    /// Creation time in milliseconds since the Unix epoch
    #[serde(default)]
    pub create_at: i64,
}
