//! StoryAI UI Components
//!
//! Presentational Leptos components for the StoryAI client. They hold no
//! fetch state of their own: views pass signals in and get callbacks out.
//!
//! # Components
//!
//! ## Library
//! - [`CreateStoryForm`] - Theme input with submit control
//! - [`StoryGrid`] - Grid of [`StoryCard`]s linking to the viewer
//!
//! ## Reader
//! - [`PagePanel`] - Illustration and text of one page
//! - [`AudioPlayer`] - Auto-playing narration
//! - [`GenerateAudioButton`] - Request narration for the story
//! - [`PageNav`] - Previous/next controls with page label
//!
//! ## Status
//! - [`StatusPanel`] - Full-screen placeholder (loading, generating, failed)
//! - [`Notice`] - Dismissible inline error
//!
//! # Example
//!
//! ```ignore
//! use leptos::prelude::*;
//! use storyai_ui::PageNav;
//!
//! #[component]
//! fn Controls() -> impl IntoView {
//!     let index = RwSignal::new(0usize);
//!     view! {
//!         <PageNav
//!             label=Signal::derive(move || format!("Page {} / 3", index.get() + 1))
//!             can_previous=Signal::derive(move || index.get() > 0)
//!             can_next=Signal::derive(move || index.get() < 2)
//!             on_previous=move |_| index.update(|i| *i -= 1)
//!             on_next=move |_| index.update(|i| *i += 1)
//!         />
//!     }
//! }
//! ```

pub mod library;
pub mod reader;
pub mod status;

pub use library::{CreateStoryForm, StoryCard, StoryGrid, page_count_label};
pub use reader::{AudioPlayer, GenerateAudioButton, PageNav, PagePanel};
pub use status::{Notice, StatusPanel};
