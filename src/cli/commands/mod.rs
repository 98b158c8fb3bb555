//! CLI command implementations.

pub mod run;
pub mod validate;

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;

use crate::domain::models::config::Config;
use crate::domain::ports::ChatClient;
use crate::infrastructure::chat::{HttpChatClient, HttpChatClientConfig};
use crate::infrastructure::config::ConfigLoader;

/// Load from `path` if given, otherwise from the default location.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => ConfigLoader::load_from_file(path),
        None => ConfigLoader::load(),
    }
}

/// Build one unauthenticated HTTP session against the configured host.
pub fn http_client(config: &Config) -> Result<Arc<HttpChatClient>> {
    let client = HttpChatClient::new(HttpChatClientConfig {
        base_url: config.host.clone(),
        timeout_secs: config.client.timeout_secs,
    })?;
    Ok(Arc::new(client))
}

/// Upcast a concrete client for the probe factory.
pub fn as_dyn(client: &Arc<HttpChatClient>) -> Arc<dyn ChatClient> {
    client.clone()
}
