//! Widget state machine
//!
//! Every change goes through [`WidgetState::dispatch`]. Fetches are
//! identified by a [`RequestToken`]; a result is only applied when its
//! token matches the fetch currently in flight, so a late reply for an
//! abandoned URL can never overwrite newer state.

use serde::Serialize;

use crate::tools::fetch::ScrapeResponse;
use crate::tools::merge::merge_tags;
use crate::tools::types::{is_editable_key, MetaTagSet};
use crate::tools::validate::{input_status, InputStatus, INVALID_URL_MESSAGE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct RequestToken(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// Transport error, bad status, or rejected URL.
    Fetch,
    /// The service answered with something that is not a tag object.
    MalformedResponse,
}

impl FailureKind {
    pub fn message(self) -> &'static str {
        match self {
            FailureKind::Fetch => "Error fetching meta tags",
            FailureKind::MalformedResponse => "Malformed response from scraping service",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum Phase {
    #[default]
    Idle,
    Fetching {
        token: RequestToken,
    },
    Ready,
    Failed {
        kind: FailureKind,
    },
}

/// Work the caller must start after a dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub token: RequestToken,
    pub url: String,
}

#[derive(Debug, Clone)]
pub enum Action {
    InputChanged(String),
    Submit,
    FetchSucceeded {
        token: RequestToken,
        response: ScrapeResponse,
    },
    FetchFailed {
        token: RequestToken,
        kind: FailureKind,
    },
    FieldEdited {
        key: String,
        value: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// State changed, nothing else to do.
    None,
    StartFetch(FetchTicket),
    /// The action did not apply (blocked submit, stale result, bad field).
    Ignored,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct WidgetState {
    url: String,
    input: InputStatus,
    #[serde(flatten)]
    phase: Phase,
    display: Option<MetaTagSet>,
    editable: Option<MetaTagSet>,
    #[serde(skip)]
    next_token: u64,
}

impl WidgetState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dispatch(&mut self, action: Action) -> Effect {
        match action {
            Action::InputChanged(url) => {
                self.input = input_status(&url);
                self.url = url;
                self.display = None;
                self.editable = None;
                self.phase = Phase::Idle;
                Effect::None
            }
            Action::Submit => {
                if !self.can_submit() {
                    return Effect::Ignored;
                }
                self.next_token += 1;
                let token = RequestToken(self.next_token);
                self.phase = Phase::Fetching { token };
                Effect::StartFetch(FetchTicket {
                    token,
                    url: self.url.clone(),
                })
            }
            Action::FetchSucceeded { token, response } => {
                if !self.is_current(token) {
                    return Effect::Ignored;
                }
                let combined = merge_tags(&response);
                self.editable = Some(combined.clone());
                self.display = Some(combined);
                self.phase = Phase::Ready;
                Effect::None
            }
            Action::FetchFailed { token, kind } => {
                if !self.is_current(token) {
                    return Effect::Ignored;
                }
                self.display = None;
                self.editable = None;
                self.phase = Phase::Failed { kind };
                Effect::None
            }
            Action::FieldEdited { key, value } => {
                if !is_editable_key(&key) {
                    return Effect::Ignored;
                }
                match &self.editable {
                    Some(current) => {
                        self.editable = Some(current.with_value(&key, value));
                        Effect::None
                    }
                    None => Effect::Ignored,
                }
            }
        }
    }

    fn is_current(&self, token: RequestToken) -> bool {
        self.phase == Phase::Fetching { token }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn input(&self) -> InputStatus {
        self.input
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Snapshot taken when the fetch completed.
    pub fn display(&self) -> Option<&MetaTagSet> {
        self.display.as_ref()
    }

    /// Copy that receives field edits.
    pub fn editable(&self) -> Option<&MetaTagSet> {
        self.editable.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, Phase::Fetching { .. })
    }

    pub fn is_error(&self) -> bool {
        matches!(self.phase, Phase::Failed { .. })
    }

    /// Validation message for the URL input.
    pub fn error_text(&self) -> Option<&'static str> {
        match self.input {
            InputStatus::Invalid => Some(INVALID_URL_MESSAGE),
            InputStatus::Empty | InputStatus::Valid => None,
        }
    }

    /// Message for a failed fetch.
    pub fn failure_text(&self) -> Option<&'static str> {
        match self.phase {
            Phase::Failed { kind } => Some(kind.message()),
            _ => None,
        }
    }

    /// Submission needs a non-empty URL and no validation error.
    pub fn can_submit(&self) -> bool {
        self.input.can_submit()
    }
}
