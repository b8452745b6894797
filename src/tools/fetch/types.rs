use serde::Serialize;
use std::collections::BTreeMap;

/// Scrape result after schema validation.
///
/// `og_title`, `og_description` and `request_url` are the service's summary
/// fields; `tags` holds whatever known meta tags it reported verbatim.
#[derive(Serialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ScrapeResponse {
    pub og_title: Option<String>,
    pub og_description: Option<String>,
    pub request_url: Option<String>,
    pub tags: BTreeMap<String, String>,
}

impl ScrapeResponse {
    /// Response carrying only the summary fields.
    pub fn summary(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            og_title: Some(title.into()),
            og_description: Some(description.into()),
            ..Default::default()
        }
    }

    pub fn with_tag(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.tags.insert(key.into(), value.into());
        self
    }
}

/// Request body sent to the scraping service.
#[derive(Serialize, Debug, Clone)]
pub(crate) struct ScrapeRequest<'a> {
    pub url: &'a str,
}
