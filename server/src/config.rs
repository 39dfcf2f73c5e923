//! Server configuration parsed from environment variables.
//!
//! `main` loads a `.env` file first (via `dotenvy`), so every variable here
//! may come from either the process environment or that file.

use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BACKEND_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_BACKEND_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Errors produced while reading configuration.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A required variable is unset or empty.
    #[error("missing required env var {0}")]
    Missing(&'static str),

    /// A variable is set but cannot be parsed.
    #[error("invalid value for {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackendTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

impl BackendTimeouts {
    #[must_use]
    pub fn request(&self) -> Duration {
        Duration::from_secs(self.request_secs)
    }

    #[must_use]
    pub fn connect(&self) -> Duration {
        Duration::from_secs(self.connect_secs)
    }
}

/// Connection settings for the PostgREST backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    /// Project URL without trailing slash, e.g. `https://xyz.supabase.co`.
    pub url: String,
    /// Public anonymous key sent as both `apikey` and bearer token.
    pub anon_key: String,
    pub timeouts: BackendTimeouts,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Overrides the Leptos site root (where `pkg/` is served from).
    pub site_root: Option<String>,
    pub backend: BackendConfig,
}

impl ServerConfig {
    /// Build typed config from the process environment.
    ///
    /// Required:
    /// - `BACKEND_URL`
    /// - `BACKEND_ANON_KEY`
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `SITE_ROOT`: default from the Leptos configuration
    /// - `BACKEND_REQUEST_TIMEOUT_SECS`: default 30
    /// - `BACKEND_CONNECT_TIMEOUT_SECS`: default 10
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a required variable is missing or a value is malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build typed config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Same as [`ServerConfig::from_env`].
    pub fn from_lookup<F>(get: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| get(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let port = parse_or("PORT", non_empty("PORT"), DEFAULT_PORT)?;
        let url = non_empty("BACKEND_URL")
            .ok_or(ConfigError::Missing("BACKEND_URL"))?
            .trim_end_matches('/')
            .to_owned();
        let anon_key = non_empty("BACKEND_ANON_KEY").ok_or(ConfigError::Missing("BACKEND_ANON_KEY"))?;
        let timeouts = BackendTimeouts {
            request_secs: parse_or(
                "BACKEND_REQUEST_TIMEOUT_SECS",
                non_empty("BACKEND_REQUEST_TIMEOUT_SECS"),
                DEFAULT_BACKEND_REQUEST_TIMEOUT_SECS,
            )?,
            connect_secs: parse_or(
                "BACKEND_CONNECT_TIMEOUT_SECS",
                non_empty("BACKEND_CONNECT_TIMEOUT_SECS"),
                DEFAULT_BACKEND_CONNECT_TIMEOUT_SECS,
            )?,
        };

        Ok(Self {
            port,
            site_root: non_empty("SITE_ROOT"),
            backend: BackendConfig { url, anon_key, timeouts },
        })
    }
}

fn parse_or<T: std::str::FromStr>(var: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value.parse::<T>().map_err(|_| ConfigError::Invalid { var, value }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
