//! Meta tag generator widget
//!
//! Couples a [`WidgetState`] with a [`TagSource`]. All state changes still
//! go through the reducer; this type only runs the fetch the reducer asks
//! for and records the outcome in the activity log.

pub mod state;

use std::time::Instant;
use url::Url;

use crate::services::log::ActivityLogger;
use crate::tools::fetch::TagSource;
use crate::tools::render::render_page;
use state::{Action, Effect, FetchTicket, WidgetState};

pub struct Widget {
    state: WidgetState,
    source: Box<dyn TagSource>,
    logger: Option<ActivityLogger>,
}

impl Widget {
    pub fn new(source: Box<dyn TagSource>) -> Self {
        Self {
            state: WidgetState::new(),
            source,
            logger: None,
        }
    }

    pub fn with_logger(mut self, logger: ActivityLogger) -> Self {
        self.logger = Some(logger);
        self
    }

    pub fn state(&self) -> &WidgetState {
        &self.state
    }

    pub fn source_name(&self) -> &'static str {
        self.source.name()
    }

    /// Replace the URL input text.
    pub fn input(&mut self, text: impl Into<String>) -> Effect {
        self.state.dispatch(Action::InputChanged(text.into()))
    }

    /// Update one editable field.
    pub fn edit(&mut self, key: impl Into<String>, value: impl Into<String>) -> Effect {
        self.state.dispatch(Action::FieldEdited {
            key: key.into(),
            value: value.into(),
        })
    }

    /// Submit the current URL and wait for the tags.
    ///
    /// Does nothing when submission is blocked. Whatever the outcome, the
    /// widget has left the loading phase when this returns.
    pub async fn check_website(&mut self) -> &WidgetState {
        if let Effect::StartFetch(ticket) = self.state.dispatch(Action::Submit) {
            self.run_fetch(ticket).await;
        }
        &self.state
    }

    async fn run_fetch(&mut self, ticket: FetchTicket) {
        let started = Instant::now();
        let host = host_of(&ticket.url);
        let result = self.source.fetch_tags(&ticket.url).await;
        let elapsed = started.elapsed().as_millis();

        let action = match result {
            Ok(response) => {
                self.log_info(
                    host.as_deref(),
                    &format!("{} succeeded in {}ms", self.source.name(), elapsed),
                );
                Action::FetchSucceeded {
                    token: ticket.token,
                    response,
                }
            }
            Err(e) => {
                self.log_error(
                    host.as_deref(),
                    &format!("{} failed in {}ms: {}", self.source.name(), elapsed, e),
                );
                Action::FetchFailed {
                    token: ticket.token,
                    kind: e.failure_kind(),
                }
            }
        };
        self.state.dispatch(action);
    }

    pub fn render_page(&self) -> String {
        render_page(&self.state)
    }

    // Logging never breaks a check.
    fn log_info(&self, host: Option<&str>, details: &str) {
        if let Some(logger) = &self.logger {
            let _ = logger.info(host, "check_website", Some(details));
        }
    }

    fn log_error(&self, host: Option<&str>, details: &str) {
        if let Some(logger) = &self.logger {
            let _ = logger.error(host, "check_website", Some(details));
        }
    }
}

pub(crate) fn host_of(url: &str) -> Option<String> {
    Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(|h| h.to_ascii_lowercase()))
}
