//! Configuration management for the now-playing proxy.
//!
//! Values come from the process environment, optionally seeded from `.env`
//! files. The lookup order is:
//! 1. Environment variables (highest priority)
//! 2. `.env` in the current working directory
//! 3. `.env` in the local data directory (`nowplaying/.env`)
//! 4. Application defaults (endpoints, server address)
//!
//! Credentials are turned into an explicit [`Credentials`] value once and handed
//! to the proxy, so nothing below this module reads the environment.

use std::{env, path::PathBuf, time::Duration};

use crate::warning;

pub const SPOTIFY_CLIENT_ID: &str = "SPOTIFY_CLIENT_ID";
pub const SPOTIFY_CLIENT_SECRET: &str = "SPOTIFY_CLIENT_SECRET";
pub const SPOTIFY_REFRESH_TOKEN: &str = "SPOTIFY_REFRESH_TOKEN";
pub const SPOTIFY_API_TOKEN_URL: &str = "SPOTIFY_API_TOKEN_URL";
pub const SPOTIFY_API_URL: &str = "SPOTIFY_API_URL";
pub const SPOTIFY_HTTP_TIMEOUT_SECS: &str = "SPOTIFY_HTTP_TIMEOUT_SECS";

pub const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:3000";

/// Loads `.env` files from the working directory and the local data directory.
///
/// Both files are optional. `dotenv` never overrides a variable that is already
/// set, so the process environment always wins and the working directory file
/// wins over the data directory one.
///
/// # Errors
///
/// Returns an error string if a file exists but cannot be read or parsed.
///
/// # Example
///
/// ```
/// use nowplaying::config;
///
/// if let Err(e) = config::load_env() {
///     eprintln!("Configuration error: {}", e);
/// }
/// ```
pub fn load_env() -> Result<(), String> {
    let local = PathBuf::from(".env");
    if local.is_file() {
        dotenv::from_path(&local).map_err(|e| e.to_string())?;
    }

    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("nowplaying/.env");
    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| e.to_string())?;
    }

    Ok(())
}

/// The three secrets needed to mint an access token.
#[derive(Clone)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
    pub refresh_token: String,
}

impl Credentials {
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        refresh_token: impl Into<String>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            refresh_token: refresh_token.into(),
        }
    }

    /// Reads the credentials from the process environment.
    ///
    /// Returns `None` when any of `SPOTIFY_CLIENT_ID`, `SPOTIFY_CLIENT_SECRET`
    /// or `SPOTIFY_REFRESH_TOKEN` is unset or empty.
    pub fn from_env() -> Option<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds credentials from an arbitrary key lookup.
    ///
    /// Empty values count as missing.
    pub fn from_lookup<F>(lookup: F) -> Option<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.is_empty());

        Some(Self {
            client_id: get(SPOTIFY_CLIENT_ID)?,
            client_secret: get(SPOTIFY_CLIENT_SECRET)?,
            refresh_token: get(SPOTIFY_REFRESH_TOKEN)?,
        })
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("refresh_token", &"<redacted>")
            .finish()
    }
}

/// Upstream URLs used by the proxy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    /// Full URL of the accounts service token endpoint.
    pub token_url: String,
    /// Base URL of the Web API, without a trailing slash.
    pub api_url: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            token_url: DEFAULT_TOKEN_URL.to_string(),
            api_url: DEFAULT_API_URL.to_string(),
        }
    }
}

impl Endpoints {
    /// Production endpoints, overridable with `SPOTIFY_API_TOKEN_URL` and
    /// `SPOTIFY_API_URL`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds endpoints from an arbitrary key lookup.
    ///
    /// Keys that are absent keep the production URL. A trailing `/` on the API
    /// base URL is dropped so paths can be appended to it.
    ///
    /// # Example
    ///
    /// ```
    /// let endpoints = Endpoints::from_lookup(|key| match key {
    ///     "SPOTIFY_API_URL" => Some("http://127.0.0.1:9000/v1/".to_string()),
    ///     _ => None,
    /// });
    /// assert_eq!(endpoints.api_url, "http://127.0.0.1:9000/v1");
    /// assert_eq!(endpoints.token_url, DEFAULT_TOKEN_URL);
    /// ```
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            token_url: lookup(SPOTIFY_API_TOKEN_URL).unwrap_or(defaults.token_url),
            api_url: lookup(SPOTIFY_API_URL)
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_url),
        }
    }

    /// Full URL of the currently-playing endpoint under [`api_url`](Self::api_url).
    pub fn currently_playing_url(&self) -> String {
        format!("{}/me/player/currently-playing", self.api_url)
    }
}

/// Returns the timeout applied to each upstream request, if one is configured.
///
/// Reads `SPOTIFY_HTTP_TIMEOUT_SECS`; see [`http_timeout_from`].
pub fn http_timeout() -> Option<Duration> {
    http_timeout_from(|key| env::var(key).ok())
}

/// Resolves the upstream timeout from an arbitrary key lookup.
///
/// # Returns
///
/// - `Some(duration)` for a positive integer number of seconds
/// - `None` when `SPOTIFY_HTTP_TIMEOUT_SECS` is unset
/// - `None` plus a warning when the value is zero or not an integer
///
/// # Example
///
/// ```
/// let timeout = http_timeout_from(|_| Some("5".to_string()));
/// assert_eq!(timeout, Some(Duration::from_secs(5)));
/// ```
pub fn http_timeout_from<F>(lookup: F) -> Option<Duration>
where
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(SPOTIFY_HTTP_TIMEOUT_SECS)?;
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Some(Duration::from_secs(secs)),
        _ => {
            warning!("Ignoring invalid {} value: {}", SPOTIFY_HTTP_TIMEOUT_SECS, raw);
            None
        }
    }
}

/// Returns the address the HTTP server binds to.
///
/// Reads `SERVER_ADDRESS`, falling back to `127.0.0.1:3000`.
pub fn server_addr() -> String {
    env::var("SERVER_ADDRESS").unwrap_or_else(|_| DEFAULT_SERVER_ADDRESS.to_string())
}
