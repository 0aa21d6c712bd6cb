//! Configuration constants and profile loading for cinesearch
//!
//! Settings come from an INI profile file, overridden by environment
//! variables. The API token may also be baked in at build time through
//! `TMDB_API_TOKEN`.

use anyhow::{Context, Result};
use ini::Ini;
use std::path::Path;
use std::time::Duration;

/// Default profile file path for cinesearch
pub const DEFAULT_PROFILE_PATH: &str = "~/.cinesearch/profile";

/// Environment variable name for overriding the profile path
pub const PROFILE_PATH_ENV_VAR: &str = "CINESEARCH_PROFILE_PATH";

/// Environment variable holding the API bearer token at runtime
pub const API_TOKEN_ENV_VAR: &str = "CINESEARCH_API_TOKEN";

/// Default TMDB movie search endpoint
pub const DEFAULT_API_URL: &str = "https://api.themoviedb.org/3/search/movie";

/// Base URL for poster images
pub const POSTER_BASE_URL: &str = "https://image.tmdb.org/t/p/w500";

/// Maximum number of cached query pages kept in memory
pub const DEFAULT_CACHE_CAPACITY: usize = 64;

/// Token captured from the build environment, if any
const BUILD_TIME_TOKEN: Option<&str> = option_env!("TMDB_API_TOKEN");

/// Get the profile file path, checking environment variable first, then falling back to default
pub fn get_profile_path() -> String {
    std::env::var_os(PROFILE_PATH_ENV_VAR)
        .and_then(|val| val.into_string().ok())
        .unwrap_or_else(|| DEFAULT_PROFILE_PATH.to_string())
}

/// Resolved application settings
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Search endpoint URL
    pub api_url: String,
    /// Bearer token sent with every request
    pub token: String,
    /// Optional `language` query parameter
    pub language: Option<String>,
    /// Age after which a cached page is refetched in the background
    pub stale_time: Duration,
    /// Maximum number of cached pages
    pub cache_capacity: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            token: BUILD_TIME_TOKEN.unwrap_or_default().to_string(),
            language: None,
            stale_time: Duration::ZERO,
            cache_capacity: DEFAULT_CACHE_CAPACITY,
        }
    }
}

impl AppConfig {
    /// Load the named profile from the profile file and apply environment overrides
    pub fn load(profile_name: &str, profile_path: &str) -> Result<Self> {
        let mut config = Self::from_profile_file(profile_name, profile_path)?;

        if let Ok(token) = std::env::var(API_TOKEN_ENV_VAR) {
            if !token.trim().is_empty() {
                tracing::debug!("Using API token from {}", API_TOKEN_ENV_VAR);
                config.token = token.trim().to_string();
            }
        }

        if config.token.is_empty() {
            tracing::warn!("No API token configured; requests will be rejected by the server");
        }

        Ok(config)
    }

    /// Read settings from an INI profile file
    ///
    /// A missing file or profile section yields the defaults.
    pub fn from_profile_file(profile_name: &str, profile_path: &str) -> Result<Self> {
        let expanded = shellexpand::tilde(profile_path).to_string();
        let mut config = Self::default();

        if !Path::new(&expanded).exists() {
            tracing::debug!("Profile file '{}' not found, using defaults", expanded);
            return Ok(config);
        }

        let ini = Ini::load_from_file(&expanded)
            .with_context(|| format!("Failed to read profile file '{expanded}'"))?;

        let Some(section) = ini.section(Some(profile_name)) else {
            tracing::debug!(
                "Profile '{}' not found in '{}', using defaults",
                profile_name,
                expanded
            );
            return Ok(config);
        };

        if let Some(api_url) = section.get("api_url") {
            config.api_url = api_url.trim().to_string();
        }
        if let Some(token) = section.get("token") {
            config.token = token.trim().to_string();
        }
        if let Some(language) = section.get("language") {
            let language = language.trim();
            if !language.is_empty() {
                config.language = Some(language.to_string());
            }
        }
        if let Some(secs) = section.get("stale_time_secs") {
            let secs: u64 = secs
                .trim()
                .parse()
                .with_context(|| format!("Invalid stale_time_secs '{secs}'"))?;
            config.stale_time = Duration::from_secs(secs);
        }
        if let Some(capacity) = section.get("cache_capacity") {
            config.cache_capacity = capacity
                .trim()
                .parse()
                .with_context(|| format!("Invalid cache_capacity '{capacity}'"))?;
        }

        tracing::debug!("Profile '{}' loaded, api_url: {}", profile_name, config.api_url);
        Ok(config)
    }
}
