use reqwest::{Client, StatusCode};

use crate::{
    proxy::ProxyError,
    types::{AccessToken, CurrentlyPlaying, NowPlaying},
};

/// Asks the Web API what the account is playing right now.
///
/// `204 No Content` means nothing is playing. `202 Accepted` is treated the
/// same way; the body is not read in either case. A success body of `null`, or
/// one without an `item`, also reports nothing playing.
///
/// # Errors
///
/// - [`ProxyError::QueryFailure`] with the response body for any other
///   non-success status
/// - [`ProxyError::Http`] on transport failures
/// - [`ProxyError::Json`] when the body is not the expected JSON
pub async fn get_now_playing(
    client: &Client,
    url: &str,
    token: &AccessToken,
) -> Result<NowPlaying, ProxyError> {
    let res = client.get(url).bearer_auth(&token.0).send().await?;

    let status = res.status();
    if status == StatusCode::NO_CONTENT || status == StatusCode::ACCEPTED {
        return Ok(NowPlaying::idle());
    }

    if !status.is_success() {
        let body = res.text().await?;
        return Err(ProxyError::QueryFailure(body));
    }

    let body = res.text().await?;
    Ok(normalize(serde_json::from_str(&body)?))
}

/// Maps a decoded upstream body onto the public response shape.
///
/// # Arguments
///
/// * `playing` - The decoded success body; `None` when the body was JSON `null`
///
/// # Returns
///
/// - [`NowPlaying::idle`] when there is no body or no `item`, whatever
///   `is_playing` says
/// - Otherwise `is_playing` copied from the upstream plus the track fields, with
///   `null` for names, cover art or link the upstream left out
///
/// # Example
///
/// ```
/// let playing: Option<CurrentlyPlaying> = serde_json::from_str("null")?;
/// assert_eq!(normalize(playing), NowPlaying::idle());
/// ```
pub fn normalize(playing: Option<CurrentlyPlaying>) -> NowPlaying {
    playing.map(NowPlaying::from).unwrap_or_else(NowPlaying::idle)
}
