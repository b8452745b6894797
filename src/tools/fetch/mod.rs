//! Fetch Tools
//!
//! A [`TagSource`] turns a URL into a validated [`ScrapeResponse`]. The
//! default source is [`RemoteScraper`], which asks the hosted scraping
//! service; `tools::scrape::LocalScraper` reads the page directly.

mod client;
mod utils;

pub mod types;

pub use types::*;

pub(crate) use client::build_client;
pub(crate) use utils::check_status;

use async_trait::async_trait;
use reqwest::Client;

use crate::error::{MetagenError, Result};
use crate::tools::validate::is_valid_url;

/// Hosted scraping service used when nothing else is configured.
pub const DEFAULT_ENDPOINT: &str = "https://react-metadata-scrapper-backend.onrender.com";

pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Something that can produce meta tags for a URL.
#[async_trait]
pub trait TagSource: Send + Sync {
    fn name(&self) -> &'static str;
    async fn fetch_tags(&self, url: &str) -> Result<ScrapeResponse>;
}

/// Client for the remote scraping service.
///
/// # Examples
/// ```no_run
/// use metagen::tools::fetch::{RemoteScraper, TagSource, DEFAULT_ENDPOINT};
///
/// # async fn example() -> metagen::Result<()> {
/// let scraper = RemoteScraper::new(DEFAULT_ENDPOINT, 30_000)?;
/// let response = scraper.fetch_tags("https://example.com").await?;
/// println!("{:?}", response.og_title);
/// # Ok(())
/// # }
/// ```
pub struct RemoteScraper {
    client: Client,
    endpoint: String,
}

impl RemoteScraper {
    pub fn new(endpoint: impl Into<String>, timeout_ms: u64) -> Result<Self> {
        Ok(Self {
            client: build_client(timeout_ms)?,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl TagSource for RemoteScraper {
    fn name(&self) -> &'static str {
        "remote"
    }

    /// POST `{"url": ...}` to the service and validate the reply.
    ///
    /// The URL is checked again here even if the caller already did; an
    /// invalid one fails before any request is made.
    async fn fetch_tags(&self, url: &str) -> Result<ScrapeResponse> {
        if !is_valid_url(url) {
            return Err(MetagenError::InvalidUrl(url.to_string()));
        }

        let response = self
            .client
            .post(&self.endpoint)
            .json(&types::ScrapeRequest { url })
            .send()
            .await
            .map_err(|e| MetagenError::Fetch(format!("HTTP request failed: {}", e)))?;

        check_status(response.status())?;

        let body = response
            .text()
            .await
            .map_err(|e| MetagenError::Fetch(format!("Failed to read response: {}", e)))?;

        utils::parse_scrape_response(&body)
    }
}
