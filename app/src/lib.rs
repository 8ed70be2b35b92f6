use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};
use storyai_core::{ClientConfig, SharedStoryApi, routes};
use storyai_ui::StatusPanel;

mod pages;

pub use pages::{LibraryPage, StoryPage};

/// Root component: provides the API client and routes between the two views.
#[component]
pub fn App(
    /// Backend client shared by both views.
    api: SharedStoryApi,
    /// Configuration the client was built with, used to resolve asset locators.
    config: ClientConfig,
) -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_context(api);
    provide_context(config);

    view! {
      <Title text="MyStory AI" />

      <Router>
        <main class="storyai-main">
          <Routes fallback=|| view! { <StatusPanel message="Page not found." back_link=true /> }>
            <Route path=StaticSegment("") view=LibraryPage />
            <Route
              path=(StaticSegment(routes::STORY_SEGMENT), ParamSegment(routes::STORY_PARAM))
              view=StoryPage
            />
          </Routes>
        </main>
      </Router>
    }
}

/// Show a blocking browser alert.
pub(crate) fn alert(message: &str) {
    if let Err(e) = window().alert_with_message(message) {
        log::warn!("alert failed: {e:?}");
    }
}
