//! State of the library view: the story list and the creation form.

use crate::{
    error::Result,
    model::Story,
    routes,
    ticket::{FetchTicket, RequestSeq},
};

/// Alert shown when story creation fails.
pub const CREATE_FAILED_ALERT: &str = "Failed to create story. Please try again.";

/// Fetch state of the story list.
#[derive(Debug, Clone, PartialEq)]
pub enum LibraryState {
    Loading,
    Ready(Vec<Story>),
    Failed(String),
}

/// The story list, with stale-response suppression.
#[derive(Debug, Clone, PartialEq)]
pub struct Library {
    state: LibraryState,
    seq: RequestSeq,
}

impl Default for Library {
    fn default() -> Self {
        Self::new()
    }
}

impl Library {
    pub fn new() -> Self {
        Self {
            state: LibraryState::Loading,
            seq: RequestSeq::new(),
        }
    }

    pub fn state(&self) -> &LibraryState {
        &self.state
    }

    /// Stories to render; empty unless the list has loaded.
    pub fn stories(&self) -> &[Story] {
        match &self.state {
            LibraryState::Ready(stories) => stories,
            _ => &[],
        }
    }

    /// Start fetching the list. A loaded list stays visible until the new one arrives.
    pub fn begin_load(&mut self) -> FetchTicket {
        if !matches!(self.state, LibraryState::Ready(_)) {
            self.state = LibraryState::Loading;
        }
        self.seq.issue()
    }

    /// Apply a list response. Returns `false` when the response was superseded.
    pub fn finish_load(&mut self, ticket: FetchTicket, result: Result<Vec<Story>>) -> bool {
        if !self.seq.is_current(ticket) {
            log::debug!("dropping superseded library response #{}", ticket.value());
            return false;
        }

        self.state = match result {
            Ok(stories) => LibraryState::Ready(stories),
            Err(e) => {
                log::warn!("Failed to load stories: {e}");
                match &self.state {
                    // Keep what is on screen if a reload fails.
                    LibraryState::Ready(stories) if !stories.is_empty() => return true,
                    _ => LibraryState::Failed(e.to_string()),
                }
            }
        };
        true
    }
}

/// Submission state of the creation form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CreateState {
    #[default]
    Idle,
    Submitting,
    Failed(String),
}

/// What the view must do once a submission completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateOutcome {
    /// Go to the new story's viewer.
    Navigate(String),
    /// Show a blocking alert and stay on the form.
    Alert(&'static str),
}

/// The story creation form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateForm {
    theme: String,
    state: CreateState,
}

impl CreateForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn theme(&self) -> &str {
        &self.theme
    }

    pub fn set_theme(&mut self, theme: impl Into<String>) {
        self.theme = theme.into();
    }

    pub fn state(&self) -> &CreateState {
        &self.state
    }

    /// Reason the last submission failed, until the next one starts.
    pub fn error(&self) -> Option<&str> {
        match &self.state {
            CreateState::Failed(reason) => Some(reason),
            _ => None,
        }
    }

    /// The form's "loading" flag: a creation request is in flight.
    pub fn is_submitting(&self) -> bool {
        self.state == CreateState::Submitting
    }

    /// Text of the submit control.
    pub fn submit_label(&self) -> &'static str {
        if self.is_submitting() {
            "Generating..."
        } else {
            "Create Magic"
        }
    }

    /// Start a submission.
    ///
    /// Returns the theme to send, or `None` when the theme is blank or a
    /// submission is already in flight. A `None` leaves the form untouched.
    pub fn begin_submit(&mut self) -> Option<String> {
        if self.is_submitting() || self.theme.trim().is_empty() {
            return None;
        }
        self.state = CreateState::Submitting;
        Some(self.theme.clone())
    }

    /// Finish a submission. The form is never left submitting.
    pub fn finish_submit(&mut self, result: Result<Story>) -> CreateOutcome {
        match result {
            Ok(story) => {
                log::info!("created story {} ({:?})", story.id, story.title);
                self.state = CreateState::Idle;
                self.theme.clear();
                CreateOutcome::Navigate(routes::story_path(story.id))
            }
            Err(e) => {
                log::error!("Failed to create story: {e}");
                self.state = CreateState::Failed(e.to_string());
                CreateOutcome::Alert(CREATE_FAILED_ALERT)
            }
        }
    }
}
