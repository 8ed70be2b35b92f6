//! Story backend API.
//!
//! [`StoryApi`] is the seam the views talk through. [`HttpStoryApi`] is the
//! browser implementation built on `gloo-net`.

use std::sync::Arc;

use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

use crate::{
    config::ClientConfig,
    error::{ClientError, Result},
    model::{CreateStoryRequest, ErrorBody, Story, StoryId},
};

/// Handle to the API shared through the view tree.
pub type SharedStoryApi = Arc<dyn StoryApi + Send + Sync>;

/// The four operations of the story backend.
///
/// Each call is a single request/response round trip: no retries, no caching.
#[async_trait(?Send)]
pub trait StoryApi {
    /// Ask the backend to create and generate a story for `theme`.
    ///
    /// Callers must not pass a blank theme.
    async fn create_story(&self, theme: &str) -> Result<Story>;

    /// Fetch the current snapshot of one story.
    async fn get_story(&self, id: StoryId) -> Result<Story>;

    /// Fetch the whole library, in backend order.
    async fn list_stories(&self) -> Result<Vec<Story>>;

    /// Request narration for every page of a story that lacks it.
    async fn generate_audio(&self, id: StoryId) -> Result<Story>;
}

/// HTTP implementation of [`StoryApi`].
#[derive(Debug, Clone)]
pub struct HttpStoryApi {
    config: ClientConfig,
}

impl HttpStoryApi {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    /// Wrap into the shared handle the views expect.
    pub fn shared(self) -> SharedStoryApi {
        Arc::new(self)
    }

    fn url(&self, path: &str) -> String {
        self.config.url_for(path)
    }
}

/// Send one request and decode its JSON response.
async fn send<T: DeserializeOwned>(request: Request) -> Result<T> {
    log::debug!("{:?} {}", request.method(), request.url());
    decode(request.send().await?).await
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    if !response.ok() {
        let status = response.status();
        let fallback = response.status_text();
        let body = response.text().await.unwrap_or_default();
        return Err(status_error(status, &fallback, &body));
    }

    let text = response.text().await?;
    Ok(serde_json::from_str(&text)?)
}

/// Build the error for a non-success response, preferring the backend's `detail`.
pub(crate) fn status_error(status: u16, status_text: &str, body: &str) -> ClientError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message())
        .unwrap_or_else(|| {
            if status_text.is_empty() {
                "request failed".to_string()
            } else {
                status_text.to_string()
            }
        });
    ClientError::status(status, message)
}

const STORIES_PATH: &str = "/stories/";

pub(crate) fn story_path(id: StoryId) -> String {
    format!("/stories/{id}")
}

pub(crate) fn audio_path(id: StoryId) -> String {
    format!("/stories/{id}/generate-audio")
}

#[async_trait(?Send)]
impl StoryApi for HttpStoryApi {
    async fn create_story(&self, theme: &str) -> Result<Story> {
        let request = Request::post(&self.url(STORIES_PATH)).json(&CreateStoryRequest::new(theme))?;
        send(request).await
    }

    async fn get_story(&self, id: StoryId) -> Result<Story> {
        send(Request::get(&self.url(&story_path(id))).build()?).await
    }

    async fn list_stories(&self) -> Result<Vec<Story>> {
        send(Request::get(&self.url(STORIES_PATH)).build()?).await
    }

    async fn generate_audio(&self, id: StoryId) -> Result<Story> {
        send(Request::post(&self.url(&audio_path(id))).build()?).await
    }
}
