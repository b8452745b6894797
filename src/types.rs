use serde::{Deserialize, Serialize};

use crate::tools::render::EditableField;
use crate::tools::types::MetaTagSet;
use crate::tools::validate::InputStatus;
use crate::widget::state::FailureKind;

/// Outcome of checking a URL without fetching it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationReport {
    pub url: String,
    pub status: InputStatus,
    pub can_submit: bool,
    pub error: Option<String>,
}

/// Everything one check produced.
#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    pub url: String,
    pub source: String,
    pub duration_ms: u64,
    pub failure: Option<FailureKind>,
    /// Tags as fetched.
    pub tags: Option<MetaTagSet>,
    /// Tags after `--set` edits.
    pub edited: Option<MetaTagSet>,
    pub fields: Vec<EditableField>,
    pub snippet: Option<String>,
    #[serde(skip)]
    pub page: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub ok: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}
impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            ok: true,
            data: Some(data),
            error: None,
        }
    }
    pub fn err(msg: impl Into<String>) -> Self {
        Self {
            ok: false,
            data: None,
            error: Some(msg.into()),
        }
    }
}
