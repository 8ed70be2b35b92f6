//! Placeholders and notices.

use leptos::prelude::*;
use storyai_core::routes;

/// Full-screen placeholder with a message and optional actions.
#[component]
pub fn StatusPanel(
    /// Message to show.
    #[prop(into)]
    message: String,
    /// Whether to render a link back to the library.
    #[prop(default = false)]
    back_link: bool,
    /// Extra actions, such as a refresh button.
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    view! {
      <div class="storyai-status">
        <p class="storyai-status-message">{message}</p>
        {children.map(|children| children())}
        <Show when=move || back_link>
          <a href=routes::LIBRARY_PATH class="storyai-back-link">
            "Back to Home"
          </a>
        </Show>
      </div>
    }
}

/// Inline error with a dismiss action.
#[component]
pub fn Notice(
    /// Error text.
    #[prop(into)]
    message: String,
    /// Called when the notice is dismissed.
    #[prop(into)]
    on_dismiss: Callback<()>,
) -> impl IntoView {
    view! {
      <div class="storyai-notice" role="alert">
        <span class="storyai-notice-message">{message}</span>
        <button
          type="button"
          class="storyai-notice-dismiss"
          aria-label="Dismiss"
          on:click=move |_| on_dismiss.run(())
        >
          "×"
        </button>
      </div>
    }
}
