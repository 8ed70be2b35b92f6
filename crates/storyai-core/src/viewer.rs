//! State machine of the story viewer.
//!
//! The viewer is driven by its route parameter:
//!
//! - `open` on mount and whenever the identifier changes: a new identifier
//!   resets the page cursor and shows the loading placeholder.
//! - `refresh` re-fetches the same story (the manual "Refresh" action while
//!   generation is in progress, and the reload after audio generation).
//! - `finish_fetch` applies a snapshot wholesale, keeping the page index.
//!
//! Each fetch carries a [`FetchTicket`]; responses that were superseded by a
//! later `open`/`refresh` are dropped.

use crate::{
    error::Result,
    model::{Page, Story, StoryId},
    pager::Pager,
    ticket::{FetchTicket, RequestSeq},
};

/// Fetch state of the viewed story.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ViewerState {
    #[default]
    Idle,
    Loading,
    Ready(Story),
    /// Loading failed. `retryable` is false when fetching again cannot help.
    Failed { reason: String, retryable: bool },
}

/// State of the "generate audio" request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AudioState {
    #[default]
    Idle,
    Generating,
    Failed(String),
}

/// What the viewer should render.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewerScreen<'a> {
    /// Nothing resolved yet.
    Loading,
    /// The story could not be loaded.
    Failed { reason: &'a str, retryable: bool },
    /// The story exists but has no pages yet.
    Generating { story: &'a Story },
    /// A page of the story.
    Page(PageScreen<'a>),
}

/// The current page and everything around it.
#[derive(Debug, Clone, PartialEq)]
pub struct PageScreen<'a> {
    pub story: &'a Story,
    pub page: &'a Page,
    pub pager: Pager,
    pub audio: AudioAffordance<'a>,
}

/// Narration control for the current page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AudioAffordance<'a> {
    /// Audio exists: auto-play it.
    Player { locator: &'a str },
    /// No audio yet: offer to generate it for the whole story.
    Generate { busy: bool, error: Option<&'a str> },
}

/// The story viewer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoryViewer {
    story_id: Option<StoryId>,
    state: ViewerState,
    pager: Pager,
    audio: AudioState,
    notice: Option<String>,
    fetches: RequestSeq,
    audio_requests: RequestSeq,
    /// Re-fetch issued after audio generation; audio stays busy until it lands.
    audio_refetch: Option<FetchTicket>,
}

impl StoryViewer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ViewerState {
        &self.state
    }

    pub fn pager(&self) -> Pager {
        self.pager
    }

    pub fn audio(&self) -> &AudioState {
        &self.audio
    }

    /// Error from a failed re-fetch while a snapshot is on screen.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn story(&self) -> Option<&Story> {
        match &self.state {
            ViewerState::Ready(story) => Some(story),
            _ => None,
        }
    }

    pub fn current_page(&self) -> Option<&Page> {
        self.story()?.pages.get(self.pager.index())
    }

    /// Show the story named by the route parameter.
    ///
    /// Returns the fetch to start, or `None` when the parameter is invalid.
    pub fn open(&mut self, param: Result<StoryId>) -> Option<(StoryId, FetchTicket)> {
        let id = match param {
            Ok(id) => id,
            Err(e) => {
                log::warn!("cannot open story: {e}");
                self.switch_to(None);
                self.state = ViewerState::Failed {
                    reason: e.to_string(),
                    retryable: false,
                };
                return None;
            }
        };

        if self.story_id != Some(id) {
            self.switch_to(Some(id));
        }
        self.refresh()
    }

    fn switch_to(&mut self, id: Option<StoryId>) {
        self.story_id = id;
        self.state = ViewerState::Loading;
        self.pager.reset(0);
        self.audio = AudioState::Idle;
        self.audio_refetch = None;
        self.notice = None;
        self.fetches.invalidate();
        self.audio_requests.invalidate();
    }

    /// Re-fetch the current story. Keeps a loaded snapshot on screen meanwhile.
    pub fn refresh(&mut self) -> Option<(StoryId, FetchTicket)> {
        let id = self.story_id?;
        if !matches!(self.state, ViewerState::Ready(_)) {
            self.state = ViewerState::Loading;
        }
        Some((id, self.fetches.issue()))
    }

    /// Apply a `get_story` response. Returns `false` when it was superseded.
    pub fn finish_fetch(&mut self, ticket: FetchTicket, result: Result<Story>) -> bool {
        if !self.fetches.is_current(ticket) {
            log::debug!("dropping superseded story response #{}", ticket.value());
            return false;
        }

        // Any current response is at least as new as the post-audio re-fetch.
        if self.audio_refetch.take().is_some() {
            self.audio = AudioState::Idle;
        }

        match result {
            Ok(story) => {
                self.pager.set_len(story.pages.len());
                self.state = ViewerState::Ready(story);
                self.notice = None;
            }
            Err(e) => {
                log::warn!("Failed to load story: {e}");
                if matches!(self.state, ViewerState::Ready(_)) {
                    self.notice = Some(e.to_string());
                } else {
                    self.state = ViewerState::Failed {
                        reason: e.to_string(),
                        retryable: !e.is_not_found(),
                    };
                }
            }
        }
        true
    }

    pub fn next(&mut self) -> bool {
        self.story().is_some() && self.pager.next()
    }

    pub fn previous(&mut self) -> bool {
        self.story().is_some() && self.pager.previous()
    }

    /// Start generating narration for the whole story.
    ///
    /// Returns `None` when no story is loaded or a request is already running.
    pub fn begin_audio(&mut self) -> Option<(StoryId, FetchTicket)> {
        let id = self.story()?.id;
        if self.audio == AudioState::Generating {
            return None;
        }
        self.audio = AudioState::Generating;
        Some((id, self.audio_requests.issue()))
    }

    /// Apply a `generate_audio` response.
    ///
    /// On success returns the re-fetch that picks up the new audio locators.
    /// The audio action stays busy until that re-fetch is applied.
    pub fn finish_audio(
        &mut self,
        ticket: FetchTicket,
        result: Result<Story>,
    ) -> Option<(StoryId, FetchTicket)> {
        if !self.audio_requests.is_current(ticket) {
            log::debug!("dropping superseded audio response #{}", ticket.value());
            return None;
        }

        match result {
            Ok(story) => {
                log::info!(
                    "audio generated for story {} ({} pages still silent)",
                    story.id,
                    story.pages_without_audio()
                );
                let refetch = self.refresh()?;
                self.audio_refetch = Some(refetch.1);
                Some(refetch)
            }
            Err(e) => {
                log::error!("Failed to generate audio: {e}");
                self.audio = AudioState::Failed(e.to_string());
                None
            }
        }
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// Decide what to render.
    pub fn screen(&self) -> ViewerScreen<'_> {
        match &self.state {
            ViewerState::Idle | ViewerState::Loading => ViewerScreen::Loading,
            ViewerState::Failed { reason, retryable } => ViewerScreen::Failed {
                reason: reason.as_str(),
                retryable: *retryable,
            },
            ViewerState::Ready(story) => match story.pages.get(self.pager.index()) {
                None => ViewerScreen::Generating { story },
                Some(page) => ViewerScreen::Page(PageScreen {
                    story,
                    page,
                    pager: self.pager,
                    audio: match page.audio() {
                        Some(locator) => AudioAffordance::Player { locator },
                        None => AudioAffordance::Generate {
                            busy: self.audio == AudioState::Generating,
                            error: match &self.audio {
                                AudioState::Failed(reason) => Some(reason.as_str()),
                                _ => None,
                            },
                        },
                    },
                }),
            },
        }
    }
}
