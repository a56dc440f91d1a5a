//! Spotify "now playing" proxy library
//!
//! Exchanges a stored refresh token for a short-lived access token, asks the
//! Spotify Web API what is currently playing and reshapes the answer into a
//! small public JSON document that widgets on other sites can fetch.
//!
//! # Modules
//!
//! - `api` - HTTP handlers served by the proxy
//! - `cli` - Command implementations behind the binary
//! - `config` - Environment loading, credentials and upstream endpoints
//! - `proxy` - The per-request now-playing flow and its error taxonomy
//! - `server` - Axum router and listener
//! - `spotify` - Calls against the Spotify accounts service and Web API
//! - `types` - Upstream payloads and the normalized response
//!
//! # Example
//!
//! ```
//! use nowplaying::{config, proxy::NowPlayingProxy};
//!
//! #[tokio::main]
//! async fn main() -> nowplaying::Res<()> {
//!     config::load_env()?;
//!     let proxy = NowPlayingProxy::from_env()?;
//!     let now_playing = proxy.handle().await?;
//!     println!("{}", serde_json::to_string(&now_playing)?);
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod proxy;
pub mod server;
pub mod spotify;
pub mod types;

/// A convenient Result type alias for process-level setup that may fail.
///
/// Request handling uses [`proxy::ProxyError`] instead, so that the HTTP
/// boundary can tell failure kinds apart.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Listening on http://{}", addr);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark to stderr and exits
/// the program.
///
/// Only meant for startup problems the process cannot recover from. Failures
/// while serving a request go through [`failure!`] so the server keeps running.
///
/// # Example
///
/// ```
/// error!("Failed to bind server address: {}", e);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a failure message with a red cross to stderr without exiting.
///
/// Used by the request handlers to report upstream and internal failures to
/// the operator while the caller receives a JSON error body.
#[macro_export]
macro_rules! failure {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "x".red().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a warning message with a yellow exclamation mark to stderr.
///
/// # Example
///
/// ```
/// warning!("Ignoring invalid SPOTIFY_HTTP_TIMEOUT_SECS value: {}", raw);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
