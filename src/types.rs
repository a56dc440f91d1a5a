use serde::{Deserialize, Serialize};

/// Bearer token minted from the refresh token. Lives for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessToken(pub String);

/// Body of `GET /me/player/currently-playing`.
///
/// Only the fields the proxy reads are modeled. `item` is `null` when the
/// player state is ambiguous, and `is_playing` may be `null` or absent; both
/// read as not playing.
///
/// # Example
///
/// ```
/// let body = r#"{"is_playing": true, "item": null}"#;
/// let playing: CurrentlyPlaying = serde_json::from_str(body)?;
/// assert!(playing.item.is_none());
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct CurrentlyPlaying {
    pub is_playing: Option<bool>,
    pub item: Option<PlayingItem>,
}

/// The track currently loaded in the player.
///
/// `artists` and `album` are required, so items without them (podcast
/// episodes) fail to decode. Every name inside may be missing or `null`.
#[derive(Debug, Clone, Deserialize)]
pub struct PlayingItem {
    pub name: Option<String>,
    pub artists: Vec<PlayingArtist>,
    pub album: PlayingAlbum,
    pub external_urls: Option<ExternalUrls>,
}

/// One contributing artist of the playing track.
#[derive(Debug, Clone, Deserialize)]
pub struct PlayingArtist {
    pub name: Option<String>,
}

/// Album of the playing track. `images` is ordered largest first upstream.
#[derive(Debug, Clone, Deserialize)]
pub struct PlayingAlbum {
    pub name: Option<String>,
    pub images: Option<Vec<Image>>,
}

/// Cover art entry; only the URL is kept.
#[derive(Debug, Clone, Deserialize)]
pub struct Image {
    pub url: Option<String>,
}

/// Links to the track outside the API.
#[derive(Debug, Clone, Deserialize)]
pub struct ExternalUrls {
    /// Open-in-Spotify web link.
    pub spotify: Option<String>,
}

/// Normalized answer returned to callers.
///
/// Serializes to `{ "isPlaying": false }` when there is no track, otherwise
/// all track fields are written, with `null` for anything the upstream did
/// not provide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NowPlaying {
    pub is_playing: bool,
    #[serde(flatten)]
    pub track: Option<TrackInfo>,
}

/// Track fields of [`NowPlaying`], flattened into it when present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackInfo {
    pub title: Option<String>,
    /// Artist names joined with `", "` in upstream order.
    pub artist: String,
    pub album: Option<String>,
    pub album_art: Option<String>,
    pub url: Option<String>,
}

impl NowPlaying {
    /// The "nothing playing" answer.
    pub fn idle() -> Self {
        Self {
            is_playing: false,
            track: None,
        }
    }
}

impl From<PlayingItem> for TrackInfo {
    fn from(item: PlayingItem) -> Self {
        let artist = item
            .artists
            .iter()
            .map(|a| a.name.as_deref().unwrap_or_default())
            .collect::<Vec<_>>()
            .join(", ");

        let album_art = item
            .album
            .images
            .and_then(|images| images.into_iter().next())
            .and_then(|image| image.url);

        TrackInfo {
            title: item.name,
            artist,
            album: item.album.name,
            album_art,
            url: item.external_urls.and_then(|urls| urls.spotify),
        }
    }
}

impl From<CurrentlyPlaying> for NowPlaying {
    fn from(playing: CurrentlyPlaying) -> Self {
        match playing.item {
            Some(item) => NowPlaying {
                is_playing: playing.is_playing.unwrap_or(false),
                track: Some(item.into()),
            },
            None => NowPlaying::idle(),
        }
    }
}
