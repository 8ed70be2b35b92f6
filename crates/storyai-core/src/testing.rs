//! In-memory backend double and end-to-end flows over it.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::{
    api::StoryApi,
    error::{ClientError, Result},
    model::{Page, PageId, Story, StoryId},
};

#[derive(Default)]
struct FakeState {
    stories: Vec<Story>,
    next_id: i64,
    calls: Vec<&'static str>,
    fail_next: Option<ClientError>,
}

/// Behaves like the story backend: derived titles, 404 details, audio filled
/// only for pages that lack it.
#[derive(Default)]
pub(crate) struct FakeStoryApi {
    state: Mutex<FakeState>,
}

impl FakeStoryApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next call fail with `err`.
    pub fn fail_next(&self, err: ClientError) {
        self.state.lock().expect("lock").fail_next = Some(err);
    }

    /// Finish "generating" a story by giving it `count` pages.
    pub fn add_pages(&self, id: StoryId, count: u32) {
        let mut state = self.state.lock().expect("lock");
        let story = state
            .stories
            .iter_mut()
            .find(|s| s.id == id)
            .expect("story exists");
        story.pages = (1..=count)
            .map(|n| Page {
                id: PageId(id.0 * 100 + i64::from(n)),
                page_number: n,
                text_content: format!("Page {n} of {}", story.theme),
                image_url: format!("/static/images/{}_{n}.png", id.0),
                audio_url: None,
            })
            .collect();
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.state.lock().expect("lock").calls.clone()
    }

    fn record(&self, call: &'static str) -> Result<std::sync::MutexGuard<'_, FakeState>> {
        let mut state = self.state.lock().expect("lock");
        state.calls.push(call);
        match state.fail_next.take() {
            Some(err) => Err(err),
            None => Ok(state),
        }
    }
}

fn not_found() -> ClientError {
    ClientError::status(404, "Story not found")
}

#[async_trait(?Send)]
impl StoryApi for FakeStoryApi {
    async fn create_story(&self, theme: &str) -> Result<Story> {
        let mut state = self.record("create_story")?;
        state.next_id += 1;
        let story = Story {
            id: StoryId(state.next_id),
            title: format!("Story about {theme}"),
            theme: theme.to_string(),
            pages: Vec::new(),
        };
        state.stories.push(story.clone());
        Ok(story)
    }

    async fn get_story(&self, id: StoryId) -> Result<Story> {
        let state = self.record("get_story")?;
        state
            .stories
            .iter()
            .find(|s| s.id == id)
            .cloned()
            .ok_or_else(not_found)
    }

    async fn list_stories(&self) -> Result<Vec<Story>> {
        let state = self.record("list_stories")?;
        Ok(state.stories.clone())
    }

    async fn generate_audio(&self, id: StoryId) -> Result<Story> {
        let mut state = self.record("generate_audio")?;
        let story = state
            .stories
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(not_found)?;
        for page in story.pages.iter_mut().filter(|p| p.audio().is_none()) {
            page.audio_url = Some(format!(
                "/static/audio/story_{}_page_{}.mp3",
                id.0, page.page_number
            ));
        }
        Ok(story.clone())
    }
}

mod flows {
    use super::*;
    use crate::{
        config::ClientConfig,
        library::{CreateForm, CreateOutcome, Library},
        routes,
        viewer::{AudioAffordance, StoryViewer, ViewerScreen},
    };

    /// Drive one submission the way the library view does.
    async fn submit(form: &mut CreateForm, api: &dyn StoryApi) -> Option<CreateOutcome> {
        let theme = form.begin_submit()?;
        let result = api.create_story(&theme).await;
        Some(form.finish_submit(result))
    }

    async fn open(viewer: &mut StoryViewer, api: &dyn StoryApi, raw: &str) {
        if let Some((id, ticket)) = viewer.open(routes::parse_story_param(Some(raw))) {
            let result = api.get_story(id).await;
            viewer.finish_fetch(ticket, result);
        }
    }

    #[tokio::test]
    async fn test_blank_submit_makes_no_call() {
        let api = FakeStoryApi::new();
        let mut form = CreateForm::new();
        form.set_theme("   ");

        assert_eq!(submit(&mut form, &api).await, None);
        assert!(api.calls().is_empty());
        assert!(!form.is_submitting());
    }

    #[tokio::test]
    async fn test_create_then_view_round_trip() {
        let api = FakeStoryApi::new();
        let mut form = CreateForm::new();
        form.set_theme("A brave bunny in space");

        let outcome = submit(&mut form, &api).await.expect("submitted");
        assert_eq!(outcome, CreateOutcome::Navigate("/story/1".to_string()));
        assert!(!form.is_submitting());

        let story = api.get_story(StoryId(1)).await.expect("story");
        assert_eq!(story.theme, "A brave bunny in space");
        assert_eq!(story.title, "Story about A brave bunny in space");
    }

    #[tokio::test]
    async fn test_create_failure_alerts_without_navigation() {
        let api = FakeStoryApi::new();
        api.fail_next(ClientError::network("connection refused"));
        let mut form = CreateForm::new();
        form.set_theme("A brave bunny in space");

        let outcome = submit(&mut form, &api).await.expect("submitted");
        assert!(matches!(outcome, CreateOutcome::Alert(_)));
        assert!(!form.is_submitting());
        assert_eq!(api.calls(), vec!["create_story"]);
    }

    #[tokio::test]
    async fn test_library_lists_created_stories() {
        let api = FakeStoryApi::new();
        api.create_story("owls").await.expect("create");
        api.create_story("foxes").await.expect("create");

        let mut library = Library::new();
        let ticket = library.begin_load();
        library.finish_load(ticket, api.list_stories().await);

        let themes: Vec<_> = library.stories().iter().map(|s| s.theme.as_str()).collect();
        assert_eq!(themes, vec!["owls", "foxes"]);
    }

    #[tokio::test]
    async fn test_viewer_generation_then_audio_flow() {
        let api = FakeStoryApi::new();
        let created = api.create_story("dragons").await.expect("create");
        let config = ClientConfig::default();

        let mut viewer = StoryViewer::new();
        open(&mut viewer, &api, &created.id.to_string()).await;
        assert!(matches!(viewer.screen(), ViewerScreen::Generating { .. }));

        // Manual refresh once the backend has produced pages.
        api.add_pages(created.id, 3);
        let (id, ticket) = viewer.refresh().expect("refresh");
        let result = api.get_story(id).await;
        viewer.finish_fetch(ticket, result);
        assert!(viewer.next());

        let (id, ticket) = viewer.begin_audio().expect("audio");
        let result = api.generate_audio(id).await;
        let (id, ticket) = viewer.finish_audio(ticket, result).expect("re-fetch");
        assert!(viewer.begin_audio().is_none());
        let result = api.get_story(id).await;
        viewer.finish_fetch(ticket, result);

        let ViewerScreen::Page(screen) = viewer.screen() else {
            panic!("expected a page");
        };
        assert_eq!(screen.pager.index(), 1);
        let AudioAffordance::Player { locator } = screen.audio else {
            panic!("expected a player");
        };
        assert_eq!(
            config.resolve_asset(locator),
            "http://localhost:8000/static/audio/story_1_page_2.mp3"
        );
        assert_eq!(
            api.calls(),
            vec![
                "create_story",
                "get_story",
                "get_story",
                "generate_audio",
                "get_story"
            ]
        );
    }

    #[tokio::test]
    async fn test_viewer_missing_story_fails() {
        let api = FakeStoryApi::new();
        let mut viewer = StoryViewer::new();
        open(&mut viewer, &api, "99").await;
        assert!(matches!(
            viewer.screen(),
            ViewerScreen::Failed { reason, retryable: false } if reason.contains("Story not found")
        ));
    }

    #[tokio::test]
    async fn test_viewer_invalid_id_makes_no_call() {
        let api = FakeStoryApi::new();
        let mut viewer = StoryViewer::new();
        open(&mut viewer, &api, "not-a-number").await;
        assert!(matches!(viewer.screen(), ViewerScreen::Failed { .. }));
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_switching_stories_resets_page() {
        let api = FakeStoryApi::new();
        let a = api.create_story("a").await.expect("create");
        let b = api.create_story("b").await.expect("create");
        api.add_pages(a.id, 4);
        api.add_pages(b.id, 4);

        let mut viewer = StoryViewer::new();
        open(&mut viewer, &api, &a.id.to_string()).await;
        viewer.next();
        viewer.next();
        viewer.next();
        assert_eq!(viewer.pager().index(), 3);

        open(&mut viewer, &api, &b.id.to_string()).await;
        assert_eq!(viewer.pager().index(), 0);
        assert_eq!(viewer.story().map(|s| s.id), Some(b.id));
    }
}
