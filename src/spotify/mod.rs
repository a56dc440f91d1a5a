//! # Spotify Integration Module
//!
//! The two upstream calls the proxy makes, in the order it makes them:
//!
//! ```text
//! NowPlayingProxy
//!      ↓
//! auth::get_access_token     POST {token_url}                        (Basic auth)
//!      ↓
//! player::get_now_playing    GET  {api_url}/me/player/currently-playing (Bearer)
//! ```
//!
//! Both functions take the shared [`reqwest::Client`] and the target URL as
//! arguments, so tests can point them at a local fake. Non-success statuses are
//! turned into [`ProxyError`](crate::proxy::ProxyError) variants carrying the
//! upstream body text; nothing is retried.

pub mod auth;
pub mod player;
