use std::sync::Arc;

use axum::{
    Json,
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::{
    failure,
    proxy::{NowPlayingProxy, ProxyError},
};

/// Serves the normalized now-playing document.
///
/// - `200` with `Access-Control-Allow-Origin: *` on success, including when
///   nothing is playing
/// - `500 { "error": "Missing Spotify env vars" }` when credentials are absent
/// - `500 { "error": "Internal server error", "message": ... }` for everything
///   else, after logging the failure
pub async fn now_playing(State(proxy): State<Arc<NowPlayingProxy>>) -> Response {
    match proxy.handle().await {
        Ok(now_playing) => (
            StatusCode::OK,
            [(header::ACCESS_CONTROL_ALLOW_ORIGIN, "*")],
            Json(now_playing),
        )
            .into_response(),
        Err(e @ ProxyError::ConfigMissing) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": e.to_string() })),
        )
            .into_response(),
        Err(e) => {
            failure!("{}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "Internal server error",
                    "message": e.to_string(),
                })),
            )
                .into_response()
        }
    }
}
