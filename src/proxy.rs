//! The per-request now-playing flow.
//!
//! [`NowPlayingProxy::handle`] runs the whole chain for one caller:
//!
//! ```text
//! CheckingConfig -> FetchingToken -> FetchingNowPlaying -> Responding
//!        \______________\___________________\___________-> Failed
//! ```
//!
//! Every step returns a [`ProxyError`] on failure, so the HTTP layer is the only
//! place that turns error kinds into status codes and bodies.

use std::{fmt, time::Duration};

use reqwest::Client;

use crate::{
    config::{self, Credentials, Endpoints},
    spotify,
    types::NowPlaying,
};

pub const MISSING_CONFIG_MESSAGE: &str = "Missing Spotify env vars";

#[derive(Debug)]
pub enum ProxyError {
    /// One or more credentials are not configured. No upstream call was made.
    ConfigMissing,
    /// The token endpoint answered with a non-success status. Holds its body.
    AuthFailure(String),
    /// The currently-playing endpoint answered with an unexpected status. Holds its body.
    QueryFailure(String),
    /// Transport failures and client construction errors.
    Http(reqwest::Error),
    /// A success response whose body did not match the expected shape.
    Json(serde_json::Error),
}

impl fmt::Display for ProxyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProxyError::ConfigMissing => f.write_str(MISSING_CONFIG_MESSAGE),
            ProxyError::AuthFailure(body) => write!(f, "Failed to get access token: {}", body),
            ProxyError::QueryFailure(body) => {
                write!(f, "Failed to get currently playing: {}", body)
            }
            ProxyError::Http(e) => write!(f, "{}", e),
            ProxyError::Json(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ProxyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProxyError::Http(e) => Some(e),
            ProxyError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ProxyError {
    fn from(err: reqwest::Error) -> Self {
        ProxyError::Http(err)
    }
}

impl From<serde_json::Error> for ProxyError {
    fn from(err: serde_json::Error) -> Self {
        ProxyError::Json(err)
    }
}

/// Mints a token and reads the player state, once per call.
///
/// Holds no per-request state. The inner [`Client`] is only shared for its
/// connection pool, so one proxy can serve concurrent requests.
pub struct NowPlayingProxy {
    client: Client,
    credentials: Option<Credentials>,
    endpoints: Endpoints,
}

impl NowPlayingProxy {
    /// Creates a proxy for the given configuration.
    ///
    /// `credentials` may be `None`; every call to [`handle`](Self::handle) then
    /// fails with [`ProxyError::ConfigMissing`] before touching the network.
    pub fn new(
        credentials: Option<Credentials>,
        endpoints: Endpoints,
        timeout: Option<Duration>,
    ) -> Result<Self, ProxyError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            credentials,
            endpoints,
        })
    }

    /// Creates a proxy from the process environment.
    pub fn from_env() -> Result<Self, ProxyError> {
        Self::new(
            Credentials::from_env(),
            Endpoints::from_env(),
            config::http_timeout(),
        )
    }

    pub fn has_credentials(&self) -> bool {
        self.credentials.is_some()
    }

    /// Runs one now-playing lookup.
    pub async fn handle(&self) -> Result<NowPlaying, ProxyError> {
        let credentials = self
            .credentials
            .as_ref()
            .ok_or(ProxyError::ConfigMissing)?;

        let token =
            spotify::auth::get_access_token(&self.client, &self.endpoints.token_url, credentials)
                .await?;

        spotify::player::get_now_playing(
            &self.client,
            &self.endpoints.currently_playing_url(),
            &token,
        )
        .await
    }
}
