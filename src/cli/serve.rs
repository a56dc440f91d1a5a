use std::sync::Arc;

use crate::{config, error, proxy::NowPlayingProxy, server, success, warning};

pub async fn serve(address: Option<String>) {
    let proxy = match NowPlayingProxy::from_env() {
        Ok(proxy) => proxy,
        Err(e) => error!("Failed to build HTTP client: {}", e),
    };

    if proxy.has_credentials() {
        success!("Spotify credentials loaded");
    } else {
        warning!(
            "{}, {} or {} is not set; requests will fail until they are",
            config::SPOTIFY_CLIENT_ID,
            config::SPOTIFY_CLIENT_SECRET,
            config::SPOTIFY_REFRESH_TOKEN
        );
    }

    let address = address.unwrap_or_else(config::server_addr);
    if let Err(e) = server::start_api_server(Arc::new(proxy), &address).await {
        error!("Server stopped: {}", e);
    }
}
