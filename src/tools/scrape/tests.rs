#[cfg(test)]
mod tests {
    use crate::error::MetagenError;
    use crate::test_support::serve_once;
    use crate::tools::fetch::TagSource;
    use crate::tools::merge::{merge_tags, DESCRIPTION_LIMIT};
    use crate::tools::scrape::*;

    const PAGE: &str = r#"
        <html>
            <head>
                <title> Example Page </title>
                <meta name="description" content="Plain description">
                <meta property="og:title" content="OG Example">
                <meta property="og:image" content="https://example.com/og.png">
                <meta property="og:image" content="https://example.com/second.png">
                <meta name="twitter:card" content="summary_large_image">
                <meta name="twitter:title" content="   ">
                <meta name="viewport" content="width=device-width">
            </head>
            <body><h1>Hello</h1></body>
        </html>
    "#;

    #[test]
    fn reads_known_tags() {
        let resp = scrape_metadata(PAGE, "https://example.com/");
        assert!(!resp.tags.contains_key("title"));
        assert!(!resp.tags.contains_key("description"));
        assert_eq!(
            resp.tags.get("twitter:card").map(String::as_str),
            Some("summary_large_image")
        );
        assert_eq!(resp.request_url.as_deref(), Some("https://example.com/"));
    }

    #[test]
    fn first_occurrence_wins() {
        let resp = scrape_metadata(PAGE, "https://example.com/");
        assert_eq!(
            resp.tags.get("og:image").map(String::as_str),
            Some("https://example.com/og.png")
        );
    }

    #[test]
    fn skips_blank_and_unknown_tags() {
        let resp = scrape_metadata(PAGE, "https://example.com/");
        assert!(!resp.tags.contains_key("twitter:title"));
        assert!(!resp.tags.contains_key("viewport"));
    }

    #[test]
    fn summary_prefers_open_graph() {
        let resp = scrape_metadata(PAGE, "https://example.com/");
        assert_eq!(resp.og_title.as_deref(), Some("OG Example"));
        assert_eq!(resp.og_description.as_deref(), Some("Plain description"));
    }

    #[test]
    fn summary_falls_back_to_title_tag() {
        let html = "<html><head><title>Only Title</title></head><body></body></html>";
        let resp = scrape_metadata(html, "https://example.com/");
        assert_eq!(resp.og_title.as_deref(), Some("Only Title"));
        assert!(resp.og_description.is_none());
    }

    #[test]
    fn long_page_description_is_truncated_after_merge() {
        let long = "d".repeat(300);
        let html = format!(
            r#"<html><head>
                <meta name="description" content="{0}">
                <meta property="og:description" content="{0}">
            </head></html>"#,
            long
        );
        let merged = merge_tags(&scrape_metadata(&html, "https://example.com/"));
        assert_eq!(merged.value("description").chars().count(), DESCRIPTION_LIMIT + 3);
        assert!(merged.value("description").ends_with("..."));
        assert_eq!(merged.value("og:description"), long);
    }

    #[test]
    fn page_title_feeds_merged_title() {
        let html = r#"<html><head>
            <title>Page Title</title>
            <meta name="description" content="Short">
        </head></html>"#;
        let merged = merge_tags(&scrape_metadata(html, "https://example.com/"));
        assert_eq!(merged.value("title"), "Page Title");
        assert_eq!(merged.value("og:title"), "Page Title");
        assert_eq!(merged.value("description"), "Short");
        assert_eq!(merged.value("og:url"), "https://example.com/");
    }

    #[tokio::test]
    async fn fetches_page_and_scrapes_it() {
        let (base, request) = serve_once("200 OK", "text/html", PAGE).await;
        let scraper = LocalScraper::new(5_000).unwrap();

        let resp = scraper.fetch_tags(&format!("{}/page", base)).await.unwrap();
        assert_eq!(resp.og_title.as_deref(), Some("OG Example"));
        assert_eq!(resp.request_url, Some(format!("{}/page", base)));

        let raw = request.await.unwrap();
        assert!(raw.starts_with("GET /page "));
    }

    #[tokio::test]
    async fn missing_page_is_a_fetch_error() {
        let (base, _request) = serve_once("404 Not Found", "text/html", "gone").await;
        let scraper = LocalScraper::new(5_000).unwrap();

        let err = scraper.fetch_tags(&format!("{}/page", base)).await.unwrap_err();
        assert!(matches!(err, MetagenError::Fetch(_)));
    }
}
