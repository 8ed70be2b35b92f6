//! Reader components for paging through one story.

use leptos::prelude::*;

/// Illustration and text of one page.
///
/// `image_url` must already be resolved against the backend origin.
#[component]
pub fn PagePanel(
    /// Resolved image URL.
    image_url: String,
    /// 1-based page number, used for the image's alt text.
    page_number: u32,
    /// Page text.
    text: String,
) -> impl IntoView {
    let alt = format!("Page {page_number}");

    view! {
      <div class="storyai-page">
        <figure class="storyai-page-image">
          <img src=image_url alt=alt />
        </figure>
        <h2 class="storyai-page-text">{text}</h2>
      </div>
    }
}

/// Inline narration player. Starts playing as soon as it is mounted.
#[component]
pub fn AudioPlayer(
    /// Resolved audio URL.
    src: String,
) -> impl IntoView {
    view! { <audio class="storyai-audio" controls=true autoplay=true src=src></audio> }
}

/// Action that requests narration for every page of the story.
#[component]
pub fn GenerateAudioButton(
    /// Whether a generation request is already running.
    #[prop(into)]
    busy: Signal<bool>,
    /// Error from the last attempt, if it failed.
    #[prop(optional, into)]
    error: MaybeProp<String>,
    /// Called when the action is invoked.
    #[prop(into)]
    on_generate: Callback<()>,
) -> impl IntoView {
    view! {
      <div class="storyai-generate-audio">
        <button
          type="button"
          class="storyai-generate-audio-button"
          disabled=move || busy.get()
          on:click=move |_| on_generate.run(())
        >
          {move || if busy.get() { "Generating audio..." } else { "Generate Audio" }}
        </button>
        {move || {
          error
            .get()
            .map(|reason| view! { <p class="storyai-generate-audio-error">{reason}</p> })
        }}
      </div>
    }
}

/// Previous/next controls.
///
/// Controls are disabled at the boundaries instead of wrapping.
#[component]
pub fn PageNav(
    /// Position label, e.g. "Page 2 / 5".
    #[prop(into)]
    label: Signal<String>,
    /// Whether there is a page before the current one.
    #[prop(into)]
    can_previous: Signal<bool>,
    /// Whether there is a page after the current one.
    #[prop(into)]
    can_next: Signal<bool>,
    /// Go back one page.
    #[prop(into)]
    on_previous: Callback<()>,
    /// Go forward one page.
    #[prop(into)]
    on_next: Callback<()>,
) -> impl IntoView {
    view! {
      <nav class="storyai-page-nav" aria-label="Page navigation">
        <button
          type="button"
          class="storyai-page-nav-previous"
          disabled=move || !can_previous.get()
          on:click=move |_| on_previous.run(())
        >
          "Previous"
        </button>
        <span class="storyai-page-nav-label">{move || label.get()}</span>
        <button
          type="button"
          class="storyai-page-nav-next"
          disabled=move || !can_next.get()
          on:click=move |_| on_next.run(())
        >
          "Next"
        </button>
      </nav>
    }
}
