use once_cell::sync::Lazy;
use scraper::{Html, Selector};

use crate::tools::fetch::ScrapeResponse;
use crate::tools::types::is_known_key;

static TITLE_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("title").expect("valid title selector"));

static META_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("meta[name], meta[property]").expect("valid metadata selector"));

/// Read title and known meta tags out of an HTML document.
///
/// The first occurrence of a tag wins. `<title>` and
/// `<meta name="description">` only feed the summary fields, as fallbacks
/// for `og:title` and `og:description`, so the merged set derives `title`
/// and `description` from the summary the same way it does for the hosted
/// service.
pub fn scrape_metadata(html: &str, page_url: &str) -> ScrapeResponse {
    let document = Html::parse_document(html);
    let mut response = ScrapeResponse {
        request_url: Some(page_url.to_string()),
        ..Default::default()
    };

    let page_title = document
        .select(&TITLE_SELECTOR)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .filter(|t| !t.is_empty());
    let mut page_description = None;

    for el in document.select(&META_SELECTOR) {
        let key = el
            .value()
            .attr("property")
            .or_else(|| el.value().attr("name"))
            .map(|s| s.trim().to_ascii_lowercase());
        let value = el.value().attr("content").map(|s| s.trim().to_string());
        if let (Some(k), Some(v)) = (key, value) {
            if v.is_empty() || !is_known_key(&k) || k == "title" {
                continue;
            }
            if k == "description" {
                page_description.get_or_insert(v);
                continue;
            }
            response.tags.entry(k).or_insert(v);
        }
    }

    response.og_title = response.tags.get("og:title").cloned().or(page_title);
    response.og_description = response
        .tags
        .get("og:description")
        .cloned()
        .or(page_description);

    response
}
