//! HTTP routing: compiled assets from disk, the page shell for everything else.

use std::sync::Arc;

use axum::{
    Router,
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::{config::ServerConfig, shell::render_shell};

/// Create the host router.
///
/// Files under `site_root` are served as-is. Any other path that does not
/// name a file gets the page shell, so client routes like `/story/7`
/// survive a reload.
pub fn create_router(config: &ServerConfig) -> Router {
    let shell: Arc<str> = Arc::from(render_shell(config));
    let fallback = get(move |uri: Uri| {
        let shell = Arc::clone(&shell);
        async move { shell_or_not_found(&uri, &shell) }
    });

    Router::new()
        .fallback_service(ServeDir::new(&config.server.site_root).fallback(fallback))
        .layer(TraceLayer::new_for_http())
}

fn shell_or_not_found(uri: &Uri, shell: &str) -> Response {
    if names_file(uri.path()) {
        tracing::debug!(path = uri.path(), "asset not found");
        return StatusCode::NOT_FOUND.into_response();
    }
    Html(shell.to_owned()).into_response()
}

/// Whether the last path segment has an extension.
fn names_file(path: &str) -> bool {
    path.rsplit('/')
        .next()
        .is_some_and(|segment| segment.contains('.'))
}
