//! # CLI Module
//!
//! Command implementations behind the `nowplaying` binary.
//!
//! - [`serve`] - Runs the HTTP server exposing the now-playing endpoint
//! - [`fetch`] - Performs a single lookup and prints the JSON document
//!
//! Both build a [`NowPlayingProxy`](crate::proxy::NowPlayingProxy) from the
//! environment loaded by [`config::load_env`](crate::config::load_env). Startup
//! problems terminate the process through the crate's `error!` macro.

mod fetch;
mod serve;

pub use fetch::fetch;
pub use serve::serve;
