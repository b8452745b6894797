use std::time::Instant;

use crate::error::{MetagenError, Result};
use crate::services::log::ActivityLogger;
use crate::tools::fetch::TagSource;
use crate::tools::render::{editable_fields, render_snippet};
use crate::tools::types::is_editable_key;
use crate::tools::validate::{input_status, validation_error};
use crate::types::{CheckReport, ValidationReport};
use crate::widget::state::Phase;
use crate::widget::Widget;

/// Classify `url` the way the URL input does.
pub fn validate_url(url: &str) -> ValidationReport {
    let status = input_status(url);
    ValidationReport {
        url: url.to_string(),
        status,
        can_submit: status.can_submit(),
        error: validation_error(url).map(str::to_string),
    }
}

/// Run one full check: validate, fetch, merge, apply `edits`.
///
/// Edit keys are checked before anything is fetched. A failed fetch is
/// not an `Err`: it comes back as [`CheckReport::failure`] with no tags,
/// the same way the widget shows it.
pub async fn check_url(
    source: Box<dyn TagSource>,
    url: &str,
    edits: &[(String, String)],
    logger: Option<ActivityLogger>,
) -> Result<CheckReport> {
    if let Some((key, _)) = edits.iter().find(|(key, _)| !is_editable_key(key)) {
        return Err(MetagenError::UnknownField(key.clone()));
    }

    let started = Instant::now();
    let mut widget = Widget::new(source);
    if let Some(logger) = logger {
        widget = widget.with_logger(logger);
    }

    widget.input(url);
    if !widget.state().can_submit() {
        return Err(MetagenError::InvalidUrl(url.to_string()));
    }
    widget.check_website().await;

    if widget.state().editable().is_some() {
        for (key, value) in edits {
            widget.edit(key.as_str(), value.as_str());
        }
    }

    let state = widget.state();
    Ok(CheckReport {
        url: url.to_string(),
        source: widget.source_name().to_string(),
        duration_ms: started.elapsed().as_millis() as u64,
        failure: match state.phase() {
            Phase::Failed { kind } => Some(kind),
            _ => None,
        },
        tags: state.display().cloned(),
        edited: state.editable().cloned(),
        fields: state.editable().map(editable_fields).unwrap_or_default(),
        snippet: state.editable().map(render_snippet),
        page: widget.render_page(),
    })
}
