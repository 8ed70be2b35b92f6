//! Client configuration.

use serde::{Deserialize, Serialize};

use crate::error::{ClientError, Result};

/// Origin used when nothing else is configured.
pub const DEFAULT_API_ORIGIN: &str = "http://localhost:8000";

/// Name of the `<meta>` tag the host page uses to hand the origin to the client.
pub const API_ORIGIN_META: &str = "storyai-api-origin";

/// Configuration handed to the API client at construction time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Backend origin, e.g. `http://localhost:8000`. Stored without a trailing slash.
    #[serde(default = "default_api_origin")]
    pub api_origin: String,
}

fn default_api_origin() -> String {
    DEFAULT_API_ORIGIN.to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_origin: default_api_origin(),
        }
    }
}

impl ClientConfig {
    /// Create a validated configuration for the given backend origin.
    pub fn new(api_origin: impl Into<String>) -> Result<Self> {
        let api_origin = api_origin.into();
        let config = Self {
            api_origin: api_origin.trim().trim_end_matches('/').to_string(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Pick the first usable origin out of a list of candidates, falling back to the default.
    ///
    /// Candidates that are missing, blank or invalid are skipped with a warning.
    pub fn resolve<'a>(candidates: impl IntoIterator<Item = Option<&'a str>>) -> Self {
        for candidate in candidates.into_iter().flatten() {
            if candidate.trim().is_empty() {
                continue;
            }
            match Self::new(candidate) {
                Ok(config) => return config,
                Err(e) => log::warn!("ignoring API origin {candidate:?}: {e}"),
            }
        }
        Self::default()
    }

    fn validate(&self) -> Result<()> {
        if self.api_origin.is_empty() {
            return Err(ClientError::config("api_origin cannot be empty"));
        }

        let Some((scheme, rest)) = self.api_origin.split_once("://") else {
            return Err(ClientError::config(format!(
                "api_origin must be an absolute http(s) URL, got {:?}",
                self.api_origin
            )));
        };

        if !matches!(scheme, "http" | "https") || rest.is_empty() {
            return Err(ClientError::config(format!(
                "api_origin must be an absolute http(s) URL, got {:?}",
                self.api_origin
            )));
        }

        Ok(())
    }

    /// Get the full URL for a backend path.
    pub fn url_for(&self, path: &str) -> String {
        let base = self.api_origin.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }

    /// Resolve an image or audio locator returned by the backend.
    ///
    /// Absolute locators pass through, anything else is taken as relative to the origin.
    pub fn resolve_asset(&self, locator: &str) -> String {
        const ABSOLUTE: [&str; 5] = ["http://", "https://", "//", "data:", "blob:"];
        if ABSOLUTE.iter().any(|prefix| locator.starts_with(prefix)) {
            locator.to_string()
        } else {
            self.url_for(locator)
        }
    }
}
