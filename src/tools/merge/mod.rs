//! Merge Tools
//!
//! Build the complete tag set shown in the preview and the editor: a set of
//! defaults derived from the scrape summary, overlaid with every known tag
//! the scrape reported. Reported values always win, even empty ones.


use crate::tools::fetch::ScrapeResponse;
use crate::tools::types::MetaTagSet;

/// Longest description kept before truncation.
pub const DESCRIPTION_LIMIT: usize = 160;

const ELLIPSIS: &str = "...";

/// Cut `text` to [`DESCRIPTION_LIMIT`] characters, marking the cut.
pub fn truncate_description(text: &str) -> String {
    match text.char_indices().nth(DESCRIPTION_LIMIT) {
        Some((cut, _)) => format!("{}{}", &text[..cut], ELLIPSIS),
        None => text.to_string(),
    }
}

/// Defaults derived from the summary fields.
pub fn default_tags(response: &ScrapeResponse) -> MetaTagSet {
    let title = response.og_title.clone().unwrap_or_default();
    let description = response
        .og_description
        .as_deref()
        .map(truncate_description)
        .unwrap_or_default();
    let url = response.request_url.clone().unwrap_or_default();

    let mut tags = MetaTagSet::empty();
    tags.insert("title", title.clone());
    tags.insert("description", description);
    tags.insert("og:title", title);
    tags.insert("og:url", url);
    tags
}

/// Defaults overlaid with the scraped tags.
pub fn merge_tags(response: &ScrapeResponse) -> MetaTagSet {
    let mut combined = default_tags(response);
    for (key, value) in &response.tags {
        combined.insert(key.as_str(), value.as_str());
    }
    combined
}
