#![allow(dead_code)]

use std::{
    net::SocketAddr,
    sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    },
    time::Duration,
};

use axum::{
    Router,
    extract::State,
    http::{HeaderMap, StatusCode, header},
    routing::{get, post},
};
use nowplaying::{
    config::{Credentials, Endpoints},
    proxy::NowPlayingProxy,
};
use tokio::net::TcpListener;

pub const CLIENT_ID: &str = "client-id";
pub const CLIENT_SECRET: &str = "client-secret";
pub const REFRESH_TOKEN: &str = "refresh-123";
pub const ACCESS_TOKEN: &str = "fake-access-token";

// Canned answer for one fake endpoint
#[derive(Clone)]
pub struct Reply {
    pub status: StatusCode,
    pub body: String,
    pub delay: Option<Duration>,
}

impl Reply {
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Reply {
            status,
            body: body.into(),
            delay: None,
        }
    }

    pub fn ok(body: impl Into<String>) -> Self {
        Self::new(StatusCode::OK, body)
    }

    pub fn status(status: StatusCode) -> Self {
        Self::new(status, "")
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

pub fn token_ok() -> Reply {
    Reply::ok(format!(
        r#"{{"access_token":"{}","token_type":"Bearer","scope":"user-read-currently-playing","expires_in":3600}}"#,
        ACCESS_TOKEN
    ))
}

pub fn full_track(is_playing: bool) -> String {
    format!(
        r#"{{
            "timestamp": 1700000000000,
            "progress_ms": 42000,
            "is_playing": {},
            "currently_playing_type": "track",
            "item": {{
                "name": "Song",
                "duration_ms": 200000,
                "artists": [{{"name": "A", "id": "a1"}}, {{"name": "B", "id": "b1"}}],
                "album": {{
                    "name": "Al",
                    "images": [
                        {{"url": "U", "height": 640, "width": 640}},
                        {{"url": "U-small", "height": 64, "width": 64}}
                    ]
                }},
                "external_urls": {{"spotify": "X"}}
            }}
        }}"#,
        is_playing
    )
}

#[derive(Debug, Clone)]
pub struct RecordedTokenRequest {
    pub authorization: Option<String>,
    pub content_type: Option<String>,
    pub body: String,
}

/// In-process stand-in for the accounts service and the Web API.
pub struct FakeSpotify {
    token_reply: Reply,
    player_reply: Reply,
    token_calls: AtomicUsize,
    player_calls: AtomicUsize,
    token_requests: Mutex<Vec<RecordedTokenRequest>>,
    player_authorizations: Mutex<Vec<Option<String>>>,
    pub addr: SocketAddr,
}

impl FakeSpotify {
    pub async fn start(token_reply: Reply, player_reply: Reply) -> Arc<FakeSpotify> {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let fake = Arc::new(FakeSpotify {
            token_reply,
            player_reply,
            token_calls: AtomicUsize::new(0),
            player_calls: AtomicUsize::new(0),
            token_requests: Mutex::new(Vec::new()),
            player_authorizations: Mutex::new(Vec::new()),
            addr,
        });

        let app = Router::new()
            .route("/api/token", post(token))
            .route("/v1/me/player/currently-playing", get(currently_playing))
            .with_state(Arc::clone(&fake));

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        fake
    }

    pub fn endpoints(&self) -> Endpoints {
        Endpoints {
            token_url: format!("http://{}/api/token", self.addr),
            api_url: format!("http://{}/v1", self.addr),
        }
    }

    pub fn proxy(&self) -> NowPlayingProxy {
        NowPlayingProxy::new(Some(credentials()), self.endpoints(), None).unwrap()
    }

    pub fn token_calls(&self) -> usize {
        self.token_calls.load(Ordering::SeqCst)
    }

    pub fn player_calls(&self) -> usize {
        self.player_calls.load(Ordering::SeqCst)
    }

    pub fn token_requests(&self) -> Vec<RecordedTokenRequest> {
        self.token_requests.lock().unwrap().clone()
    }

    pub fn player_authorizations(&self) -> Vec<Option<String>> {
        self.player_authorizations.lock().unwrap().clone()
    }
}

pub fn credentials() -> Credentials {
    Credentials::new(CLIENT_ID, CLIENT_SECRET, REFRESH_TOKEN)
}

fn header_string(headers: &HeaderMap, name: header::HeaderName) -> Option<String> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
}

async fn respond(reply: &Reply) -> (StatusCode, String) {
    if let Some(delay) = reply.delay {
        tokio::time::sleep(delay).await;
    }
    (reply.status, reply.body.clone())
}

async fn token(
    State(fake): State<Arc<FakeSpotify>>,
    headers: HeaderMap,
    body: String,
) -> (StatusCode, String) {
    fake.token_calls.fetch_add(1, Ordering::SeqCst);
    fake.token_requests
        .lock()
        .unwrap()
        .push(RecordedTokenRequest {
            authorization: header_string(&headers, header::AUTHORIZATION),
            content_type: header_string(&headers, header::CONTENT_TYPE),
            body,
        });
    respond(&fake.token_reply).await
}

async fn currently_playing(
    State(fake): State<Arc<FakeSpotify>>,
    headers: HeaderMap,
) -> (StatusCode, String) {
    fake.player_calls.fetch_add(1, Ordering::SeqCst);
    fake.player_authorizations
        .lock()
        .unwrap()
        .push(header_string(&headers, header::AUTHORIZATION));
    respond(&fake.player_reply).await
}

/// Returns an address nothing is listening on.
pub async fn closed_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    addr
}
