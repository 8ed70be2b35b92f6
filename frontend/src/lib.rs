//! Browser entry point of the StoryAI client.

use app::App;
use leptos::prelude::*;
use storyai_core::{ClientConfig, HttpStoryApi, config::API_ORIGIN_META};
use wasm_bindgen::prelude::wasm_bindgen;

/// Mount the application on `<body>`.
///
/// The backend origin comes from the host page's `<meta name="storyai-api-origin">`,
/// then the `STORYAI_API_ORIGIN` build variable, then the built-in default.
#[wasm_bindgen]
pub fn mount() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log_level(option_env!("STORYAI_LOG"))).unwrap_or(());

    let meta = meta_api_origin();
    let config = ClientConfig::resolve([meta.as_deref(), option_env!("STORYAI_API_ORIGIN")]);
    log::info!("story backend: {}", config.api_origin);

    let api = HttpStoryApi::new(config.clone()).shared();
    leptos::mount::mount_to_body(move || view! { <App api=api config=config /> });
}

fn log_level(configured: Option<&str>) -> log::Level {
    match configured.and_then(|level| level.parse().ok()) {
        Some(level) => level,
        None if cfg!(debug_assertions) => log::Level::Debug,
        None => log::Level::Info,
    }
}

fn meta_api_origin() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let selector = format!("meta[name=\"{API_ORIGIN_META}\"]");
    document
        .query_selector(&selector)
        .ok()
        .flatten()?
        .get_attribute("content")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_from_build_env() {
        assert_eq!(log_level(Some("warn")), log::Level::Warn);
        assert_eq!(log_level(Some("TRACE")), log::Level::Trace);
    }

    #[test]
    fn test_log_level_default() {
        let expected = if cfg!(debug_assertions) {
            log::Level::Debug
        } else {
            log::Level::Info
        };
        assert_eq!(log_level(None), expected);
        assert_eq!(log_level(Some("loud")), expected);
    }
}
