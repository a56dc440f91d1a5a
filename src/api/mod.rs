//! # API Module
//!
//! HTTP handlers served by the proxy.
//!
//! ## Endpoints
//!
//! - [`now_playing`] - Mints a Spotify access token, reads the current playback
//!   state and answers with the normalized JSON document. Open to any origin and
//!   any method; callers need no credentials.
//! - [`health`] - Liveness check with the crate name and version, for load
//!   balancers and deployment checks.
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use axum::{Router, routing::{any, get}};
//! use nowplaying::api::{health, now_playing};
//!
//! let app = Router::new()
//!     .route("/api/spotify", any(now_playing))
//!     .route("/health", get(health))
//!     .with_state(proxy);
//! ```

mod health;
mod now_playing;

pub use health::health;
pub use now_playing::now_playing;
