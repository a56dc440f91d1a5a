use crate::{error, proxy::NowPlayingProxy};

/// Prints the current playback state as pretty JSON.
pub async fn fetch() {
    let proxy = match NowPlayingProxy::from_env() {
        Ok(proxy) => proxy,
        Err(e) => error!("Failed to build HTTP client: {}", e),
    };

    let now_playing = match proxy.handle().await {
        Ok(now_playing) => now_playing,
        Err(e) => error!("{}", e),
    };

    match serde_json::to_string_pretty(&now_playing) {
        Ok(json) => println!("{}", json),
        Err(e) => error!("Failed to serialize response: {}", e),
    }
}
