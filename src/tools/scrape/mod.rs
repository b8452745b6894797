//! Scrape Tools
//!
//! [`LocalScraper`] fetches a page itself and reads its `<title>` and
//! `<meta>` tags, producing the same [`ScrapeResponse`] the remote service
//! returns. Useful when the hosted service is down or rate limited.

mod tests;
mod utils;

pub use utils::scrape_metadata;

use async_trait::async_trait;
use reqwest::Client;

use crate::error::{MetagenError, Result};
use crate::tools::fetch::{build_client, check_status, ScrapeResponse, TagSource};
use crate::tools::validate::is_valid_url;

pub struct LocalScraper {
    client: Client,
}

impl LocalScraper {
    pub fn new(timeout_ms: u64) -> Result<Self> {
        Ok(Self {
            client: build_client(timeout_ms)?,
        })
    }
}

#[async_trait]
impl TagSource for LocalScraper {
    fn name(&self) -> &'static str {
        "local"
    }

    async fn fetch_tags(&self, url: &str) -> Result<ScrapeResponse> {
        if !is_valid_url(url) {
            return Err(MetagenError::InvalidUrl(url.to_string()));
        }

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| MetagenError::Fetch(format!("HTTP request failed: {}", e)))?;

        check_status(response.status())?;
        let final_url = response.url().to_string();

        let html = response
            .text()
            .await
            .map_err(|e| MetagenError::Fetch(format!("Failed to read response: {}", e)))?;

        Ok(scrape_metadata(&html, &final_url))
    }
}
