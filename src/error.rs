use thiserror::Error;

use crate::widget::state::FailureKind;

pub type Result<T> = std::result::Result<T, MetagenError>;

#[derive(Debug, Error)]
pub enum MetagenError {
    /// Shown to the user verbatim, the rejected input is kept for logs.
    #[error("Invalid URL format")]
    InvalidUrl(String),
    #[error("fetch failed: {0}")]
    Fetch(String),
    #[error("malformed response: {0}")]
    MalformedResponse(String),
    #[error("unknown or read-only field: {0}")]
    UnknownField(String),
    #[error("config error: {0}")]
    Config(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Other(String),
}

impl MetagenError {
    /// Collapse an error into the kind the widget surfaces.
    pub fn failure_kind(&self) -> FailureKind {
        match self {
            MetagenError::MalformedResponse(_) => FailureKind::MalformedResponse,
            _ => FailureKind::Fetch,
        }
    }
}

/* Conversions so `?` works smoothly */
impl From<reqwest::Error> for MetagenError {
    fn from(e: reqwest::Error) -> Self {
        MetagenError::Fetch(e.to_string())
    }
}
