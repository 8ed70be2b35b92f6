//! StoryAI host
//!
//! Serves the compiled browser client and a page shell that tells it which
//! backend to talk to. Story data never passes through this process.
//!
//! # Modules
//!
//! - [`config`] - Layered host configuration
//! - [`router`] - Static assets with a client-route fallback
//! - [`shell`] - The HTML document that boots the client

pub mod config;
pub mod error;
pub mod router;
pub mod shell;

pub use config::ServerConfig;
pub use error::{Result, ServerError};
pub use router::create_router;

use tokio::net::TcpListener;

/// Initialize tracing with the specified verbosity level.
///
/// # Arguments
///
/// * `verbose` - Verbosity level (0 = WARN, 1 = INFO, 2 = DEBUG, 3+ = TRACE)
pub fn init_tracing(verbose: u8) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}

/// Bind the listener and serve until Ctrl-C.
pub async fn serve(config: ServerConfig) -> Result<()> {
    let addr = config.socket_addr()?;
    let pkg = config.server.site_root.join(&config.server.pkg_dir);
    if !pkg.is_dir() {
        tracing::warn!(path = %pkg.display(), "bundle directory missing; build the client first");
    }

    let router = create_router(&config);
    let listener = TcpListener::bind(addr).await?;

    tracing::info!(
        %addr,
        site_root = %config.server.site_root.display(),
        api_origin = %config.client.api_origin,
        "serving StoryAI client"
    );
    println!("  StoryAI running at http://{addr}");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
    }
}
