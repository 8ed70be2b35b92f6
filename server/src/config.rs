//! Host configuration.
//!
//! Settings are layered: built-in defaults, then `LEPTOS_SITE_ADDR`/`LEPTOS_SITE_ROOT`
//! (as exported by `cargo leptos`), then an optional TOML file, then `STORYAI__*`
//! environment variables. Command-line flags are applied on top by the binary.

use std::{
    net::SocketAddr,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use storyai_core::ClientConfig;

use crate::error::{Result, ServerError};

/// Environment variable prefix for overrides, e.g. `STORYAI__SERVER__ADDR`.
pub const ENV_PREFIX: &str = "STORYAI";

/// Complete host configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ServerConfig {
    /// Listener and asset settings.
    #[serde(default)]
    pub server: HostSettings,

    /// Settings handed to the browser client through the page shell.
    #[serde(default)]
    pub client: ClientConfig,
}

/// Listener and asset settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HostSettings {
    /// Socket address to listen on.
    #[serde(default = "default_addr")]
    pub addr: String,

    /// Directory holding the compiled site (`pkg/` lives beneath it).
    #[serde(default = "default_site_root")]
    pub site_root: PathBuf,

    /// Directory under `site_root` holding the wasm bundle.
    #[serde(default = "default_pkg_dir")]
    pub pkg_dir: String,

    /// Base name of the bundle files (`<name>.js`, `<name>.wasm`, `<name>.css`).
    #[serde(default = "default_output_name")]
    pub output_name: String,

    /// Document title before the client takes over.
    #[serde(default = "default_title")]
    pub title: String,
}

fn default_addr() -> String {
    "127.0.0.1:3000".to_string()
}

fn default_site_root() -> PathBuf {
    PathBuf::from("target/site")
}

fn default_pkg_dir() -> String {
    "pkg".to_string()
}

fn default_output_name() -> String {
    "storyai".to_string()
}

fn default_title() -> String {
    "MyStory AI".to_string()
}

impl Default for HostSettings {
    fn default() -> Self {
        Self {
            addr: default_addr(),
            site_root: default_site_root(),
            pkg_dir: default_pkg_dir(),
            output_name: default_output_name(),
            title: default_title(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from an optional file plus environment overrides.
    ///
    /// A missing explicit `path` is an error; with `None` only defaults and
    /// the environment apply.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = config::Config::builder();

        if let Ok(addr) = std::env::var("LEPTOS_SITE_ADDR") {
            builder = builder.set_default("server.addr", addr)?;
        }
        if let Ok(root) = std::env::var("LEPTOS_SITE_ROOT") {
            builder = builder.set_default("server.site_root", root)?;
        }
        if let Some(path) = path {
            if !path.exists() {
                return Err(ServerError::config(format!(
                    "config file not found: {}",
                    path.display()
                )));
            }
            builder = builder.add_source(config::File::from(path));
        }

        let settings = builder
            .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()?;

        let config: ServerConfig = settings.try_deserialize()?;
        config.validate()
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: ServerConfig = toml::from_str(content)
            .map_err(|e| ServerError::config(format!("invalid TOML: {e}")))?;
        config.validate()
    }

    /// Check the settings and normalize the client origin.
    pub fn validate(mut self) -> Result<Self> {
        self.socket_addr()?;

        if self.server.output_name.trim().is_empty() {
            return Err(ServerError::config("server.output_name cannot be empty"));
        }
        if self.server.pkg_dir.contains("..") {
            return Err(ServerError::config("server.pkg_dir must stay inside site_root"));
        }
        self.server.pkg_dir = self.server.pkg_dir.trim_matches('/').to_string();

        self.client = ClientConfig::new(&self.client.api_origin)?;
        Ok(self)
    }

    /// The parsed listener address.
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        self.server
            .addr
            .parse()
            .map_err(|e| ServerError::config(format!("invalid server.addr {:?}: {e}", self.server.addr)))
    }

    /// Public URL of a bundle file, e.g. `asset_url("js")` -> `/pkg/storyai.js`.
    pub fn asset_url(&self, extension: &str) -> String {
        let name = &self.server.output_name;
        if self.server.pkg_dir.is_empty() {
            format!("/{name}.{extension}")
        } else {
            format!("/{}/{name}.{extension}", self.server.pkg_dir)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default().validate().unwrap();
        assert_eq!(config.server.addr, "127.0.0.1:3000");
        assert_eq!(config.server.site_root, PathBuf::from("target/site"));
        assert_eq!(config.client.api_origin, "http://localhost:8000");
        assert_eq!(config.asset_url("js"), "/pkg/storyai.js");
    }

    #[test]
    fn test_from_toml() {
        let config = ServerConfig::from_toml(
            r#"
[server]
addr = "0.0.0.0:8080"
site_root = "dist"
pkg_dir = "/assets/"

[client]
api_origin = "https://stories.example.com/"
"#,
        )
        .unwrap();

        assert_eq!(config.socket_addr().unwrap().port(), 8080);
        assert_eq!(config.server.site_root, PathBuf::from("dist"));
        assert_eq!(config.asset_url("wasm"), "/assets/storyai.wasm");
        assert_eq!(config.client.api_origin, "https://stories.example.com");
        assert_eq!(config.server.title, "MyStory AI");
    }

    #[test]
    fn test_invalid_addr() {
        let result = ServerConfig::from_toml("[server]\naddr = \"not an address\"\n");
        assert!(matches!(result, Err(ServerError::Config(_))));
    }

    #[test]
    fn test_invalid_api_origin() {
        let result = ServerConfig::from_toml("[client]\napi_origin = \"ftp://example.com\"\n");
        assert!(matches!(result, Err(ServerError::Client(_))));
    }

    #[test]
    fn test_pkg_dir_escape_rejected() {
        let result = ServerConfig::from_toml("[server]\npkg_dir = \"../outside\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storyai.toml");
        let mut file = std::fs::File::create(&path).expect("create file");
        file.write_all(b"[server]\ntitle = \"Bedtime\"\n").expect("write");

        let config = ServerConfig::load(Some(&path)).unwrap();
        assert_eq!(config.server.title, "Bedtime");
    }

    #[test]
    fn test_load_missing_file() {
        let result = ServerConfig::load(Some(Path::new("/nonexistent/storyai.toml")));
        assert!(matches!(result, Err(ServerError::Config(_))));
    }
}
