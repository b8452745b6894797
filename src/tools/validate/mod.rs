//! URL validation

mod tests;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Message shown next to the URL input for a rejected, non-empty value.
pub const INVALID_URL_MESSAGE: &str = "Invalid URL format";

// http(s) scheme, a first host character that is not `$ . ? #`, then at
// least one more character, no whitespace anywhere.
static URL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^https?://[^\s$.?#]\S+$").expect("valid url regex"));

/// State of the URL input after a keystroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum InputStatus {
    /// Nothing typed yet. Blocks submission but shows no error.
    #[default]
    Empty,
    Invalid,
    Valid,
}

impl InputStatus {
    pub fn can_submit(self) -> bool {
        self == InputStatus::Valid
    }
}

/// Check whether `candidate` has the accepted URL shape.
pub fn is_valid_url(candidate: &str) -> bool {
    URL_PATTERN.is_match(candidate)
}

/// Classify raw input text.
pub fn input_status(candidate: &str) -> InputStatus {
    if candidate.is_empty() {
        InputStatus::Empty
    } else if is_valid_url(candidate) {
        InputStatus::Valid
    } else {
        InputStatus::Invalid
    }
}

/// Helper text for the URL input, `None` when nothing should be shown.
pub fn validation_error(candidate: &str) -> Option<&'static str> {
    match input_status(candidate) {
        InputStatus::Invalid => Some(INVALID_URL_MESSAGE),
        InputStatus::Empty | InputStatus::Valid => None,
    }
}
