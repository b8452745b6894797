use serde_json::{Map, Value};

use super::types::ScrapeResponse;
use crate::error::{MetagenError, Result};
use crate::tools::types::is_known_key;

/// Reject non-success statuses with a short reason.
pub(crate) fn check_status(status: reqwest::StatusCode) -> Result<()> {
    if status.is_success() {
        return Ok(());
    }
    let reason = status.canonical_reason().unwrap_or("unknown error");
    Err(MetagenError::Fetch(format!(
        "status {} ({})",
        status.as_u16(),
        reason.to_ascii_lowercase()
    )))
}

/// Parse and validate a scraping service reply.
///
/// The payload must be a JSON object. Known tag keys and the summary fields
/// (`ogTitle`, `ogDescription`, `requestUrl`) must be strings or null, and a
/// nested `data` object may carry the summary fields too; top-level values
/// win over nested ones. Anything else in the payload is ignored.
pub(crate) fn parse_scrape_response(body: &str) -> Result<ScrapeResponse> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| MetagenError::MalformedResponse(format!("invalid json: {}", e)))?;

    let root = value
        .as_object()
        .ok_or_else(|| MetagenError::MalformedResponse("expected a json object".into()))?;

    let nested = match root.get("data") {
        None | Some(Value::Null) => None,
        Some(Value::Object(obj)) => Some(obj),
        Some(_) => {
            return Err(MetagenError::MalformedResponse(
                "`data` must be an object".into(),
            ))
        }
    };

    let mut response = ScrapeResponse {
        og_title: summary_field(root, nested, "ogTitle")?,
        og_description: summary_field(root, nested, "ogDescription")?,
        request_url: summary_field(root, nested, "requestUrl")?,
        ..Default::default()
    };

    for (key, value) in root {
        if !is_known_key(key) {
            continue;
        }
        if let Some(text) = optional_string(value, key)? {
            response.tags.insert(key.clone(), text);
        }
    }

    Ok(response)
}

fn summary_field(
    root: &Map<String, Value>,
    nested: Option<&Map<String, Value>>,
    key: &str,
) -> Result<Option<String>> {
    if let Some(value) = root.get(key) {
        if let Some(text) = optional_string(value, key)? {
            return Ok(Some(text));
        }
    }
    match nested.and_then(|obj| obj.get(key)) {
        Some(value) => optional_string(value, key),
        None => Ok(None),
    }
}

fn optional_string(value: &Value, key: &str) -> Result<Option<String>> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s.clone())),
        other => Err(MetagenError::MalformedResponse(format!(
            "`{}` must be a string, got {}",
            key,
            json_kind(other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
