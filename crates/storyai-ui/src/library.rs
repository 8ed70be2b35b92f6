//! Library components: the creation form and the story grid.

use leptos::prelude::*;
use storyai_core::{Story, routes};

/// Placeholder shown in the empty theme input.
const THEME_PLACEHOLDER: &str = "Enter a theme (e.g., 'A brave bunny in space')";

/// Short description of how far along a story is.
pub fn page_count_label(story: &Story) -> String {
    match story.pages.len() {
        0 => "Generating...".to_string(),
        1 => "1 page".to_string(),
        n => format!("{n} pages"),
    }
}

/// Story creation form.
///
/// The input and the submit control are disabled while `submitting` is set.
#[component]
pub fn CreateStoryForm(
    /// Current contents of the theme input.
    #[prop(into)]
    theme: Signal<String>,
    /// Whether a creation request is in flight.
    #[prop(into)]
    submitting: Signal<bool>,
    /// Text of the submit control.
    #[prop(into)]
    submit_label: Signal<&'static str>,
    /// Called with the new input value on every keystroke.
    #[prop(into)]
    on_input: Callback<String>,
    /// Called when the form is submitted.
    #[prop(into)]
    on_submit: Callback<()>,
    /// Reason the last submission failed.
    #[prop(optional, into)]
    error: MaybeProp<String>,
) -> impl IntoView {
    view! {
      <section class="storyai-create">
        <h2 class="storyai-create-title">"Create a New Story"</h2>
        <form
          class="storyai-create-form"
          on:submit=move |ev| {
            ev.prevent_default();
            on_submit.run(());
          }
        >
          <input
            type="text"
            class="storyai-create-input"
            placeholder=THEME_PLACEHOLDER
            prop:value=move || theme.get()
            disabled=move || submitting.get()
            on:input=move |ev| on_input.run(event_target_value(&ev))
          />
          <button type="submit" class="storyai-create-submit" disabled=move || submitting.get()>
            {move || submit_label.get()}
          </button>
        </form>
        {move || {
          error.get().map(|reason| view! { <p class="storyai-create-error">{reason}</p> })
        }}
      </section>
    }
}

/// Grid of story cards.
#[component]
pub fn StoryGrid(
    /// Stories in the order the backend returned them.
    #[prop(into)]
    stories: Signal<Vec<Story>>,
) -> impl IntoView {
    view! {
      <div class="storyai-grid">
        <For
          each=move || stories.get()
          key=|story| story.id
          children=move |story| {
            view! { <StoryCard story=story /> }
          }
        />
      </div>
    }
}

/// A single story in the library, linking to its viewer.
#[component]
pub fn StoryCard(story: Story) -> impl IntoView {
    let href = routes::story_path(story.id);
    let summary = page_count_label(&story);

    view! {
      <a href=href class="storyai-card">
        <h3 class="storyai-card-title">{story.title}</h3>
        <p class="storyai-card-summary">{summary}</p>
      </a>
    }
}
