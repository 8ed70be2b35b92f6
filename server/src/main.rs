//! StoryAI host binary.

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use server::ServerConfig;

/// Command-line interface for the StoryAI host.
#[derive(Parser)]
#[command(name = "storyai", version, about = "Serve the StoryAI browser client")]
struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Address to listen on (e.g., 0.0.0.0:3000)
    #[arg(long)]
    addr: Option<String>,

    /// Directory holding the compiled client
    #[arg(long)]
    site_root: Option<PathBuf>,

    /// Story backend origin handed to the client
    #[arg(long)]
    api_origin: Option<String>,
}

impl Cli {
    /// Apply command-line overrides on top of the loaded configuration.
    fn apply(&self, mut config: ServerConfig) -> server::Result<ServerConfig> {
        if let Some(addr) = &self.addr {
            config.server.addr = addr.clone();
        }
        if let Some(root) = &self.site_root {
            config.server.site_root = root.clone();
        }
        if let Some(origin) = &self.api_origin {
            config.client.api_origin = origin.clone();
        }
        config.validate()
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    server::init_tracing(cli.verbose);

    let config = ServerConfig::load(cli.config.as_deref())
        .and_then(|config| cli.apply(config))
        .wrap_err("Failed to load configuration")?;

    server::serve(config).await.wrap_err("Server error")?;

    Ok(())
}
