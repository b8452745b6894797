//! Render Tools
//!
//! Presentation only: the `<meta>` snippet preview, the editable field
//! list, and a standalone HTML page showing the whole widget.

mod utils;

use html_escape::{encode_double_quoted_attribute, encode_text};
use serde::{Deserialize, Serialize};

use crate::tools::types::{MetaTagSet, EDITABLE_KEYS};
use crate::widget::state::WidgetState;
use utils::field_label;

pub const PAGE_TITLE: &str = "Try The Free Meta Tag Generator";
pub const LOADING_TEXT: &str = "Loading meta tags...";

const OPEN_GRAPH_KEYS: [&str; 5] = ["og:url", "og:type", "og:title", "og:description", "og:image"];
const TWITTER_KEYS: [&str; 5] = [
    "twitter:card",
    "twitter:url",
    "twitter:title",
    "twitter:description",
    "twitter:image",
];

/// One input of the editable form.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct EditableField {
    pub key: String,
    pub label: String,
    pub value: String,
}

/// Render `tags` as a ready-to-paste block of HTML meta tags.
pub fn render_snippet(tags: &MetaTagSet) -> String {
    let title = match tags.value("title") {
        "" => "No title",
        t => t,
    };

    let mut lines = vec![
        "<!-- HTML Meta Tags -->".to_string(),
        format!("<title>{}</title>", encode_text(title)),
        meta_line("name", "description", tags.value("description")),
        "<!-- Facebook Meta Tags -->".to_string(),
    ];
    lines.extend(
        OPEN_GRAPH_KEYS
            .iter()
            .map(|key| meta_line("property", key, tags.value(key))),
    );
    lines.push("<!-- Twitter Meta Tags -->".to_string());
    lines.extend(
        TWITTER_KEYS
            .iter()
            .map(|key| meta_line("name", key, tags.value(key))),
    );

    lines.join("\n")
}

fn meta_line(attr: &str, key: &str, value: &str) -> String {
    format!(
        r#"<meta {}="{}" content="{}" />"#,
        attr,
        key,
        encode_double_quoted_attribute(value)
    )
}

/// The editable inputs, in form order.
pub fn editable_fields(tags: &MetaTagSet) -> Vec<EditableField> {
    EDITABLE_KEYS
        .iter()
        .map(|key| EditableField {
            key: key.to_string(),
            label: field_label(key),
            value: tags.value(key).to_string(),
        })
        .collect()
}

/// Render the full widget for its current state.
pub fn render_page(state: &WidgetState) -> String {
    let mut body = String::new();

    body.push_str(&format!("<h1>{}</h1>\n", PAGE_TITLE));
    body.push_str("<form class=\"url-form\">\n");
    body.push_str(&format!(
        "  <input type=\"url\" name=\"url\" placeholder=\"Enter website URL\" value=\"{}\"{} />\n",
        encode_double_quoted_attribute(state.url()),
        if state.error_text().is_some() {
            " aria-invalid=\"true\""
        } else {
            ""
        }
    ));
    if let Some(error) = state.error_text() {
        body.push_str(&format!(
            "  <p class=\"helper-text\">{}</p>\n",
            encode_text(error)
        ));
    }
    body.push_str(&format!(
        "  <button type=\"submit\"{}>Check Website</button>\n",
        if state.can_submit() { "" } else { " disabled" }
    ));
    body.push_str("</form>\n");

    if state.is_loading() {
        body.push_str(&format!("<p class=\"loading\">{}</p>\n", LOADING_TEXT));
    }
    if let Some(failure) = state.failure_text() {
        body.push_str(&format!(
            "<p class=\"error\" style=\"color: red\">{}</p>\n",
            encode_text(failure)
        ));
    }

    if let (Some(display), Some(editable)) = (state.display(), state.editable()) {
        body.push_str("<section class=\"scraped\">\n");
        body.push_str("  <h2>Scraped Meta Tags:</h2>\n");
        body.push_str("  <form class=\"editor\">\n");
        body.push_str("    <h3>Edit Meta Tags:</h3>\n");
        for field in editable_fields(editable) {
            body.push_str(&format!(
                "    <label>{} <input type=\"text\" name=\"{}\" value=\"{}\" /></label>\n",
                encode_text(&field.label),
                encode_double_quoted_attribute(&field.key),
                encode_double_quoted_attribute(&field.value)
            ));
        }
        body.push_str("  </form>\n");
        body.push_str(&format!(
            "  <pre class=\"preview\"><code>{}</code></pre>\n",
            encode_text(&render_snippet(display))
        ));
        body.push_str("</section>\n");
    }

    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\" />\n<title>{}</title>\n</head>\n<body>\n{}</body>\n</html>\n",
        PAGE_TITLE, body
    )
}
