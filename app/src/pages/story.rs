//! Story viewer: one story, page by page.

use leptos::{prelude::*, task::spawn_local};
use leptos_meta::Title;
use leptos_router::hooks::use_params_map;
use storyai_core::{
    AudioAffordance, ClientConfig, FetchTicket, SharedStoryApi, StoryId, StoryViewer, ViewerScreen,
    routes,
};
use storyai_ui::{AudioPlayer, GenerateAudioButton, Notice, PageNav, PagePanel, StatusPanel};

/// Coarse shape of the screen. The reading view is only rebuilt when this changes.
#[derive(Debug, Clone, PartialEq)]
enum Screen {
    Loading,
    Failed { reason: String, retryable: bool },
    Generating,
    Reading,
}

impl From<ViewerScreen<'_>> for Screen {
    fn from(screen: ViewerScreen<'_>) -> Self {
        match screen {
            ViewerScreen::Loading => Self::Loading,
            ViewerScreen::Failed { reason, retryable } => Self::Failed {
                reason: reason.to_string(),
                retryable,
            },
            ViewerScreen::Generating { .. } => Self::Generating,
            ViewerScreen::Page(_) => Self::Reading,
        }
    }
}

/// Narration control for the current page, with URLs resolved.
#[derive(Debug, Clone, PartialEq)]
enum AudioView {
    Play(String),
    Generate { busy: bool, error: Option<String> },
}

/// Renders the story named by the `id` route parameter.
#[component]
pub fn StoryPage() -> impl IntoView {
    let api = expect_context::<SharedStoryApi>();
    let config = expect_context::<ClientConfig>();
    let params = use_params_map();
    let viewer = RwSignal::new(StoryViewer::new());

    let fetch = {
        let api = api.clone();
        move |(id, ticket): (StoryId, FetchTicket)| {
            let api = api.clone();
            spawn_local(async move {
                let result = api.get_story(id).await;
                // None once the view is gone.
                viewer.try_update(|v| v.finish_fetch(ticket, result));
            });
        }
    };

    // Runs on mount and again whenever the identifier changes.
    Effect::new({
        let fetch = fetch.clone();
        move |_| {
            let raw = params.with(|p| p.get(routes::STORY_PARAM));
            let param = routes::parse_story_param(raw.as_deref());
            if let Some(request) = viewer.try_update(|v| v.open(param)).flatten() {
                fetch(request);
            }
        }
    });

    let refresh = Callback::new({
        let fetch = fetch.clone();
        move |_: ()| {
            if let Some(request) = viewer.try_update(StoryViewer::refresh).flatten() {
                fetch(request);
            }
        }
    });

    let generate_audio = Callback::new(move |_: ()| {
        let Some((id, ticket)) = viewer.try_update(StoryViewer::begin_audio).flatten() else {
            return;
        };
        let api = api.clone();
        let fetch = fetch.clone();
        spawn_local(async move {
            let result = api.generate_audio(id).await;
            if let Some(request) = viewer.try_update(|v| v.finish_audio(ticket, result)).flatten() {
                fetch(request);
            }
        });
    });

    let screen = Memo::new(move |_| viewer.with(|v| Screen::from(v.screen())));
    let title = move || {
        viewer.with(|v| {
            v.story()
                .map(|s| s.title.clone())
                .unwrap_or_else(|| "MyStory AI".to_string())
        })
    };

    view! {
      <Title text=title />
      <div class="storyai-viewer">
        {move || match screen.get() {
          Screen::Loading => view! { <StatusPanel message="Loading story..." /> }.into_any(),
          Screen::Failed { reason, retryable } => {
            view! {
              <StatusPanel message=reason back_link=true>
                <Show when=move || retryable>
                  <button type="button" class="storyai-refresh" on:click=move |_| refresh.run(())>
                    "Try again"
                  </button>
                </Show>
              </StatusPanel>
            }
              .into_any()
          }
          Screen::Generating => {
            view! {
              <StatusPanel message="Story is being generated..." back_link=true>
                <button type="button" class="storyai-refresh" on:click=move |_| refresh.run(())>
                  "Refresh"
                </button>
              </StatusPanel>
            }
              .into_any()
          }
          Screen::Reading => {
            view! {
              <Reader viewer=viewer config=config.clone() on_generate_audio=generate_audio />
            }
              .into_any()
          }
        }}
      </div>
    }
}

/// The reading view for a story that has pages.
#[component]
fn Reader(
    viewer: RwSignal<StoryViewer>,
    config: ClientConfig,
    on_generate_audio: Callback<()>,
) -> impl IntoView {
    let page = Memo::new(move |_| viewer.with(|v| v.current_page().cloned()));
    let pager = Memo::new(move |_| viewer.with(StoryViewer::pager));
    let notice = Memo::new(move |_| viewer.with(|v| v.notice().map(str::to_string)));
    let audio = Memo::new({
        let config = config.clone();
        move |_| {
            viewer.with(|v| match v.screen() {
                ViewerScreen::Page(screen) => Some(match screen.audio {
                    AudioAffordance::Player { locator } => {
                        AudioView::Play(config.resolve_asset(locator))
                    }
                    AudioAffordance::Generate { busy, error } => AudioView::Generate {
                        busy,
                        error: error.map(str::to_string),
                    },
                }),
                _ => None,
            })
        }
    });

    view! {
      <div class="storyai-reader">
        <a href=routes::LIBRARY_PATH class="storyai-back-link">
          "← Back to Library"
        </a>

        {move || {
          notice
            .get()
            .map(|message| {
              view! {
                <Notice message=message on_dismiss=move |_: ()| viewer.update(StoryViewer::dismiss_notice) />
              }
            })
        }}

        {move || {
          page
            .get()
            .map(|page| {
              view! {
                <PagePanel
                  image_url=config.resolve_asset(&page.image_url)
                  page_number=page.page_number
                  text=page.text_content
                />
              }
            })
        }}

        {move || match audio.get() {
          Some(AudioView::Play(src)) => view! { <AudioPlayer src=src /> }.into_any(),
          Some(AudioView::Generate { busy, error }) => {
            view! { <GenerateAudioButton busy=busy error=error on_generate=on_generate_audio /> }
              .into_any()
          }
          None => ().into_any(),
        }}

        <PageNav
          label=Signal::derive(move || pager.get().label())
          can_previous=Signal::derive(move || pager.get().can_previous())
          can_next=Signal::derive(move || pager.get().can_next())
          on_previous=move |_: ()| {
            viewer.update(|v| {
              v.previous();
            })
          }
          on_next=move |_: ()| {
            viewer.update(|v| {
              v.next();
            })
          }
        />
      </div>
    }
}
