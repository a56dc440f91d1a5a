use axum::{
    Router,
    routing::{any, get},
};
use std::{net::SocketAddr, str::FromStr, sync::Arc};

use crate::{Res, api, info, proxy::NowPlayingProxy};

pub const NOW_PLAYING_PATH: &str = "/api/spotify";

/// Builds the application router around a shared proxy.
///
/// # Routes
///
/// - `GET /health` - liveness check, never calls Spotify
/// - `ANY /api/spotify` - one now-playing lookup per request
///
/// # Example
///
/// ```rust,ignore
/// let app = server::router(Arc::new(NowPlayingProxy::from_env()?));
/// axum::serve(listener, app).await?;
/// ```
pub fn router(proxy: Arc<NowPlayingProxy>) -> Router {
    Router::new()
        .route("/health", get(api::health))
        .route(NOW_PLAYING_PATH, any(api::now_playing))
        .with_state(proxy)
}

/// Binds `addr` and serves [`router`] until the listener fails.
///
/// # Errors
///
/// Returns an error when `addr` is not a socket address, the bind fails, or
/// the server stops with an I/O error.
pub async fn start_api_server(proxy: Arc<NowPlayingProxy>, addr: &str) -> Res<()> {
    let addr = SocketAddr::from_str(addr)?;

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(
        "Serving now playing on http://{}{}",
        listener.local_addr()?,
        NOW_PLAYING_PATH
    );

    axum::serve(listener, router(proxy)).await?;
    Ok(())
}
