//! Library view: story list and creation form.

use leptos::{prelude::*, task::spawn_local};
use leptos_router::hooks::use_navigate;
use storyai_core::{CreateForm, CreateOutcome, Library, LibraryState, SharedStoryApi};
use storyai_ui::{CreateStoryForm, StoryGrid};

use crate::alert;

/// Renders the library and the story creation form.
#[component]
pub fn LibraryPage() -> impl IntoView {
    let api = expect_context::<SharedStoryApi>();
    let navigate = StoredValue::new_local(use_navigate());
    let library = RwSignal::new(Library::new());
    let form = RwSignal::new(CreateForm::new());

    let load = {
        let api = api.clone();
        move || {
            let Some(ticket) = library.try_update(Library::begin_load) else {
                return;
            };
            let api = api.clone();
            spawn_local(async move {
                let result = api.list_stories().await;
                // None once the view is gone.
                library.try_update(|l| l.finish_load(ticket, result));
            });
        }
    };

    // Fetch once on mount.
    Effect::new({
        let load = load.clone();
        move |_| load()
    });

    let on_submit = move |_: ()| {
        let Some(theme) = form.try_update(CreateForm::begin_submit).flatten() else {
            return;
        };
        let api = api.clone();
        spawn_local(async move {
            let result = api.create_story(&theme).await;
            match form.try_update(|f| f.finish_submit(result)) {
                Some(CreateOutcome::Navigate(path)) => {
                    navigate.try_with_value(|nav| nav(&path, Default::default()));
                }
                Some(CreateOutcome::Alert(message)) => alert(message),
                None => log::debug!("library view closed before story creation finished"),
            }
        });
    };

    let status = move || {
        let load = load.clone();
        library.with(|l| match l.state() {
            LibraryState::Loading => {
                view! { <p class="storyai-library-status">"Loading stories..."</p> }.into_any()
            }
            LibraryState::Failed(reason) => {
                let reason = reason.clone();
                view! {
                  <div class="storyai-library-status storyai-library-error" role="alert">
                    <p>"Could not load your library: " {reason}</p>
                    <button type="button" on:click=move |_| load()>
                      "Try again"
                    </button>
                  </div>
                }
                .into_any()
            }
            LibraryState::Ready(stories) if stories.is_empty() => {
                view! { <p class="storyai-library-status">"No stories yet. Create one above!"</p> }
                    .into_any()
            }
            LibraryState::Ready(_) => ().into_any(),
        })
    };

    view! {
      <div class="storyai-library">
        <h1 class="storyai-brand">"MyStory AI"</h1>

        <CreateStoryForm
          theme=Signal::derive(move || form.with(|f| f.theme().to_string()))
          submitting=Signal::derive(move || form.with(CreateForm::is_submitting))
          submit_label=Signal::derive(move || form.with(CreateForm::submit_label))
          on_input=move |value: String| form.update(|f| f.set_theme(value))
          on_submit=on_submit
          error=Signal::derive(move || form.with(|f| f.error().map(str::to_string)))
        />

        <h2 class="storyai-library-title">"Your Library"</h2>
        {status}
        <StoryGrid stories=Signal::derive(move || library.with(|l| l.stories().to_vec())) />
      </div>
    }
}
