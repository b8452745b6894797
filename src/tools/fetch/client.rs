use reqwest::{redirect, Client};
use std::time::Duration;

use crate::error::{MetagenError, Result};

const REDIRECT_LIMIT: usize = 10;
const POOL_IDLE_TIMEOUT_SEC: u64 = 90;

pub(crate) const USER_AGENT: &str = concat!(
    "Mozilla/5.0 (compatible; metagen/",
    env!("CARGO_PKG_VERSION"),
    ")"
);

/// Build the reqwest client shared by both tag sources.
pub(crate) fn build_client(timeout_ms: u64) -> Result<Client> {
    Client::builder()
        .user_agent(USER_AGENT)
        .redirect(redirect::Policy::limited(REDIRECT_LIMIT))
        .gzip(true)
        .brotli(true)
        .deflate(true)
        .timeout(Duration::from_millis(timeout_ms))
        .pool_idle_timeout(Duration::from_secs(POOL_IDLE_TIMEOUT_SEC))
        .build()
        .map_err(|e| MetagenError::Other(format!("Failed to build client: {}", e)))
}
