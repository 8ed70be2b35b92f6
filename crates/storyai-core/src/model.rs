//! Wire types shared with the story backend.

use std::{fmt, num::ParseIntError, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize};

/// Backend identifier of a story.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StoryId(pub i64);

impl fmt::Display for StoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for StoryId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

/// Backend identifier of a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageId(pub i64);

/// A generated story.
///
/// An empty `pages` list means the backend is still generating it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Story {
    pub id: StoryId,

    #[serde(default)]
    pub title: String,

    pub theme: String,

    /// Pages in `page_number` order, as returned by the backend.
    #[serde(default)]
    pub pages: Vec<Page>,
}

impl Story {
    /// Whether the backend has not produced any pages yet.
    pub fn is_generating(&self) -> bool {
        self.pages.is_empty()
    }

    /// Number of pages that still lack narration.
    pub fn pages_without_audio(&self) -> usize {
        self.pages.iter().filter(|p| p.audio().is_none()).count()
    }
}

/// One page of a story.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub id: PageId,

    /// 1-based position within the story.
    pub page_number: u32,

    pub text_content: String,

    #[serde(default)]
    pub image_url: String,

    #[serde(default, deserialize_with = "empty_as_none")]
    pub audio_url: Option<String>,
}

impl Page {
    /// The narration locator, if one has been generated.
    pub fn audio(&self) -> Option<&str> {
        self.audio_url.as_deref().filter(|url| !url.is_empty())
    }
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}

/// Body of `POST /stories/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateStoryRequest {
    pub theme: String,

    /// Optional explicit title; the backend derives one from the theme otherwise.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl CreateStoryRequest {
    pub fn new(theme: impl Into<String>) -> Self {
        Self {
            theme: theme.into(),
            title: None,
        }
    }
}

/// FastAPI-style error body: `{"detail": "..."}`.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub detail: serde_json::Value,
}

impl ErrorBody {
    /// Human readable detail, flattening validation error arrays to their first message.
    pub fn message(&self) -> Option<String> {
        match &self.detail {
            serde_json::Value::String(s) => Some(s.clone()),
            serde_json::Value::Array(items) => items
                .first()
                .and_then(|item| item.get("msg"))
                .and_then(|msg| msg.as_str())
                .map(str::to_string),
            _ => None,
        }
    }
}
