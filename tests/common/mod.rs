//! Common test utilities for integration tests
//!
//! Provides an in-memory chat service fake, an instrumented probe, a
//! recording logger and config builders shared across test files.

#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use chatprobe::domain::models::chat::{Channel, Post, Team, User};
use chatprobe::domain::models::config::{Config, UserConfig};
use chatprobe::domain::ports::{
    ChatClient, ChatClientError, ChatResult, Level, Logger, Probe, ProbeKind,
};
use chatprobe::ProbeError;

pub const TEAM_ID: &str = "team-ops";
pub const CHANNEL_ID: &str = "chan-town-square";

/// Setup test logging
///
/// Initializes tracing subscriber for test output.
pub fn setup_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

/// Wait for a condition to be true with timeout
///
/// Polls the predicate every 20ms until it returns true or timeout is reached.
pub async fn wait_for<F>(mut predicate: F, timeout_ms: u64) -> bool
where
    F: FnMut() -> bool,
{
    let start = std::time::Instant::now();
    let timeout = Duration::from_millis(timeout_ms);

    while start.elapsed() < timeout {
        if predicate() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }

    false
}

// ---------------------------------------------------------------------------
// FakeChatClient
// ---------------------------------------------------------------------------

/// In-memory chat service session.
///
/// Records every call as `"op"` or `"op:arg"`. Operations listed with
/// [`fail_on`](Self::fail_on) return a server error. Clients created by
/// [`pair`](Self::pair) share one message store, so a post made through one
/// is visible through the other.
pub struct FakeChatClient {
    pub label: &'static str,
    user_id: Mutex<Option<String>>,
    calls: Mutex<Vec<String>>,
    failing: Mutex<HashSet<&'static str>>,
    posts: Arc<Mutex<Vec<Post>>>,
}

impl FakeChatClient {
    pub fn new(label: &'static str) -> Arc<Self> {
        Arc::new(Self::with_store(label, Arc::new(Mutex::new(Vec::new()))))
    }

    pub fn pair() -> (Arc<Self>, Arc<Self>) {
        let store = Arc::new(Mutex::new(Vec::new()));
        (
            Arc::new(Self::with_store("client1", store.clone())),
            Arc::new(Self::with_store("client2", store)),
        )
    }

    fn with_store(label: &'static str, posts: Arc<Mutex<Vec<Post>>>) -> Self {
        Self {
            label,
            user_id: Mutex::new(None),
            calls: Mutex::new(Vec::new()),
            failing: Mutex::new(HashSet::new()),
            posts,
        }
    }

    pub fn fail_on(&self, op: &'static str) {
        self.failing.lock().unwrap().insert(op);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn calls_to(&self, op: &str) -> usize {
        self.calls()
            .iter()
            .filter(|c| c.as_str() == op || c.starts_with(&format!("{op}:")))
            .count()
    }

    pub fn as_dyn(self: &Arc<Self>) -> Arc<dyn ChatClient> {
        self.clone()
    }

    fn record(&self, op: &'static str, arg: Option<&str>) -> ChatResult<()> {
        let entry = match arg {
            Some(arg) => format!("{op}:{arg}"),
            None => op.to_string(),
        };
        self.calls.lock().unwrap().push(entry);

        if self.failing.lock().unwrap().contains(op) {
            return Err(ChatClientError::Server {
                status: 503,
                body: format!("{op} unavailable"),
            });
        }
        Ok(())
    }

    fn current_user(&self) -> User {
        let id = self
            .user_id
            .lock()
            .unwrap()
            .clone()
            .unwrap_or_else(|| format!("{}-user", self.label));
        User {
            id: id.clone(),
            username: id,
        }
    }
}

#[async_trait]
impl ChatClient for FakeChatClient {
    async fn login(&self, username: &str, password: &str) -> ChatResult<User> {
        self.record("login", Some(username))?;
        if password.is_empty() {
            return Err(ChatClientError::Unauthorized("empty password".to_string()));
        }
        let id = format!("id-{username}");
        *self.user_id.lock().unwrap() = Some(id.clone());
        Ok(User {
            id,
            username: username.to_string(),
        })
    }

    async fn ping(&self) -> ChatResult<()> {
        self.record("ping", None)
    }

    async fn get_me(&self) -> ChatResult<User> {
        self.record("get_me", None)?;
        Ok(self.current_user())
    }

    async fn get_team_by_name(&self, name: &str) -> ChatResult<Team> {
        self.record("get_team", Some(name))?;
        Ok(Team {
            id: TEAM_ID.to_string(),
            name: name.to_string(),
            display_name: name.to_uppercase(),
        })
    }

    async fn get_channel_by_name(&self, team_id: &str, name: &str) -> ChatResult<Channel> {
        self.record("get_channel", Some(name))?;
        Ok(Channel {
            id: CHANNEL_ID.to_string(),
            team_id: team_id.to_string(),
            name: name.to_string(),
        })
    }

    async fn join_channel(&self, channel_id: &str, _user_id: &str) -> ChatResult<()> {
        self.record("join_channel", Some(channel_id))
    }

    async fn leave_channel(&self, channel_id: &str, _user_id: &str) -> ChatResult<()> {
        self.record("leave_channel", Some(channel_id))
    }

    async fn create_post(&self, channel_id: &str, message: &str) -> ChatResult<Post> {
        self.record("create_post", Some(channel_id))?;
        let mut posts = self.posts.lock().unwrap();
        let post = Post {
            id: format!("post-{}", posts.len() + 1),
            channel_id: channel_id.to_string(),
            user_id: self.current_user().id,
            message: message.to_string(),
            create_at: 1_000 + posts.len() as i64,
        };
        posts.push(post.clone());
        Ok(post)
    }

    async fn get_posts_since(&self, channel_id: &str, since_ms: i64) -> ChatResult<Vec<Post>> {
        self.record("get_posts_since", Some(channel_id))?;
        Ok(self
            .posts
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.channel_id == channel_id && p.create_at > since_ms)
            .cloned()
            .collect())
    }

    async fn search_posts(&self, team_id: &str, terms: &str) -> ChatResult<Vec<Post>> {
        self.record("search_posts", Some(terms))?;
        Ok(self
            .posts
            .lock()
            .unwrap()
            .iter()
            .filter(|p| team_id == TEAM_ID && p.message.contains(terms))
            .cloned()
            .collect())
    }
}

// ---------------------------------------------------------------------------
// RecordingLogger
// ---------------------------------------------------------------------------

/// Logger that keeps every line for assertions.
#[derive(Default)]
pub struct RecordingLogger {
    lines: Mutex<Vec<(Level, String)>>,
}

impl RecordingLogger {
    pub fn lines(&self) -> Vec<(Level, String)> {
        self.lines.lock().unwrap().clone()
    }

    pub fn messages_at(&self, level: Level) -> Vec<String> {
        self.lines()
            .into_iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m)
            .collect()
    }
}

#[async_trait]
impl Logger for RecordingLogger {
    async fn log(&self, level: Level, message: &str) {
        self.lines.lock().unwrap().push((level, message.to_string()));
    }
}

// ---------------------------------------------------------------------------
// FakeProbe
// ---------------------------------------------------------------------------

/// Probe that records its lifecycle calls into a shared journal.
pub struct FakeProbe {
    name: String,
    journal: Arc<Mutex<Vec<String>>>,
    fail_setup: Option<String>,
    fail_start: Option<String>,
}

impl FakeProbe {
    pub fn new(name: &str, journal: &Arc<Mutex<Vec<String>>>) -> Self {
        Self {
            name: name.to_string(),
            journal: journal.clone(),
            fail_setup: None,
            fail_start: None,
        }
    }

    pub fn failing_setup(mut self, detail: &str) -> Self {
        self.fail_setup = Some(detail.to_string());
        self
    }

    pub fn failing_start(mut self, detail: &str) -> Self {
        self.fail_start = Some(detail.to_string());
        self
    }

    pub fn boxed(self) -> Box<dyn Probe> {
        Box::new(self)
    }
}

#[async_trait]
impl Probe for FakeProbe {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn kind(&self) -> ProbeKind {
        ProbeKind::Ping
    }

    async fn setup(&mut self) -> Result<(), ProbeError> {
        self.journal
            .lock()
            .unwrap()
            .push(format!("setup:{}", self.name));
        match &self.fail_setup {
            Some(detail) => Err(ProbeError::Setup(detail.clone())),
            None => Ok(()),
        }
    }

    async fn start(&mut self) -> Result<(), ProbeError> {
        self.journal
            .lock()
            .unwrap()
            .push(format!("start:{}", self.name));
        match &self.fail_start {
            Some(detail) => Err(ProbeError::Start(detail.clone())),
            None => Ok(()),
        }
    }
}

// ---------------------------------------------------------------------------
// Config builders
// ---------------------------------------------------------------------------

/// Config with both users set and every probe disabled.
pub fn base_config() -> Config {
    let mut config = Config {
        host: "https://chat.example.com".to_string(),
        ..Default::default()
    };
    config.user_a = UserConfig {
        username: "alice".to_string(),
        password: "alice-pw".to_string(),
    };
    config.user_b = UserConfig {
        username: "bob".to_string(),
        password: "bob-pw".to_string(),
    };

    config.broadcast_probe.team_name = "ops".to_string();
    config.broadcast_probe.channel_name = "town-square".to_string();
    config.broadcast_probe.timeout_secs = 2;
    config.channel_join_probe.team_name = "ops".to_string();
    config.channel_join_probe.channel_name = "town-square".to_string();
    config.search_probe.team_name = "ops".to_string();
    config.search_probe.terms = "chatprobe".to_string();
    config
}

/// Config with every probe enabled.
pub fn all_enabled_config() -> Config {
    let mut config = base_config();
    config.broadcast_probe.enabled = true;
    config.channel_join_probe.enabled = true;
    config.ping_probe.enabled = true;
    config.search_probe.enabled = true;
    config.login_probe.enabled = true;
    config.api_ping_probe.enabled = true;
    config
}

/// Config with exactly one probe kind enabled.
pub fn single_probe_config(kind: ProbeKind) -> Config {
    let mut config = base_config();
    match kind {
        ProbeKind::Broadcast => config.broadcast_probe.enabled = true,
        ProbeKind::ChannelJoin => config.channel_join_probe.enabled = true,
        ProbeKind::Ping => config.ping_probe.enabled = true,
        ProbeKind::Search => config.search_probe.enabled = true,
        ProbeKind::Login => config.login_probe.enabled = true,
        ProbeKind::ApiPing => config.api_ping_probe.enabled = true,
    }
    config
}

pub const ALL_KINDS: [ProbeKind; 6] = [
    ProbeKind::Broadcast,
    ProbeKind::ChannelJoin,
    ProbeKind::Ping,
    ProbeKind::Search,
    ProbeKind::Login,
    ProbeKind::ApiPing,
];
