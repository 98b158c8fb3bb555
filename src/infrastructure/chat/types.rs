//! Wire types for the chat service REST API (v4).

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::models::chat::Post;

/// Body of `POST /users/login`
#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub login_id: &'a str,
    pub password: &'a str,
}

/// Body of `POST /channels/{id}/members`
#[derive(Debug, Serialize)]
pub struct AddMemberRequest<'a> {
    pub user_id: &'a str,
}

/// Body of `POST /posts`
#[derive(Debug, Serialize)]
pub struct CreatePostRequest<'a> {
    pub channel_id: &'a str,
    pub message: &'a str,
}

/// Body of `POST /teams/{id}/posts/search`
#[derive(Debug, Serialize)]
pub struct SearchRequest<'a> {
    pub terms: &'a str,
    pub is_or_search: bool,
}

/// Post list returned by the posts and search endpoints
///
/// `order` lists post IDs newest first; `posts` holds the bodies.
#[derive(Debug, Default, Deserialize)]
pub struct PostList {
    #[serde(default)]
    pub order: Vec<String>,
    #[serde(default)]
    pub posts: HashMap<String, Post>,
}

impl PostList {
    /// Posts in the server's order; IDs missing from `posts` are skipped
    pub fn into_ordered(mut self) -> Vec<Post> {
        self.order
            .iter()
            .filter_map(|id| self.posts.remove(id))
            .collect()
    }
}
