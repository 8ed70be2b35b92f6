//! StoryAI Core Library
//!
//! Wire types, the backend API client and the view-state machines of the
//! StoryAI browser client. Nothing in here touches the DOM, so every state
//! transition is testable natively.
//!
//! # Modules
//!
//! - [`api`] - [`StoryApi`] and its `gloo-net` implementation
//! - [`library`] - story list and creation form state
//! - [`viewer`] - story viewer state machine
//! - [`pager`] - bounded page cursor
//! - [`ticket`] - stale-response suppression
//!
//! # Example
//!
//! ```ignore
//! use storyai_core::{ClientConfig, HttpStoryApi, StoryApi, StoryId};
//!
//! let api = HttpStoryApi::new(ClientConfig::new("http://localhost:8000")?);
//! let story = api.get_story(StoryId(1)).await?;
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod library;
pub mod model;
pub mod pager;
pub mod routes;
pub mod ticket;
pub mod viewer;

#[cfg(test)]
mod testing;

pub use api::{HttpStoryApi, SharedStoryApi, StoryApi};
pub use config::ClientConfig;
pub use error::{ClientError, Result};
pub use library::{CreateForm, CreateOutcome, CreateState, Library, LibraryState};
pub use model::{Page, PageId, Story, StoryId};
pub use pager::Pager;
pub use ticket::{FetchTicket, RequestSeq};
pub use viewer::{AudioAffordance, AudioState, PageScreen, StoryViewer, ViewerScreen, ViewerState};
