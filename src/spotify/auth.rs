use base64::{Engine, engine::general_purpose::STANDARD};
use reqwest::{Client, header};
use serde_json::Value;

use crate::{config::Credentials, proxy::ProxyError, types::AccessToken};

/// Builds the `Authorization` value for the client credentials.
///
/// # Example
///
/// ```
/// assert_eq!(basic_authorization("id", "secret"), "Basic aWQ6c2VjcmV0");
/// ```
pub fn basic_authorization(client_id: &str, client_secret: &str) -> String {
    let encoded = STANDARD.encode(format!("{}:{}", client_id, client_secret));
    format!("Basic {}", encoded)
}

/// Exchanges the stored refresh token for a fresh access token.
///
/// Sends the `refresh_token` grant to the accounts service, authenticated with
/// the client id and secret as HTTP Basic credentials.
///
/// # Errors
///
/// - [`ProxyError::AuthFailure`] with the response body when the status is not
///   a success
/// - [`ProxyError::Http`] on transport failures
/// - [`ProxyError::Json`] when the success body is not JSON
///
/// A JSON body without `access_token` yields an empty token. The Web API then
/// rejects it, which surfaces as a query failure on the next call.
pub async fn get_access_token(
    client: &Client,
    token_url: &str,
    credentials: &Credentials,
) -> Result<AccessToken, ProxyError> {
    let res = client
        .post(token_url)
        .header(
            header::AUTHORIZATION,
            basic_authorization(&credentials.client_id, &credentials.client_secret),
        )
        .form(&[
            ("grant_type", "refresh_token"),
            ("refresh_token", credentials.refresh_token.as_str()),
        ])
        .send()
        .await?;

    if !res.status().is_success() {
        let body = res.text().await?;
        return Err(ProxyError::AuthFailure(body));
    }

    let body = res.text().await?;
    let json: Value = serde_json::from_str(&body)?;

    Ok(AccessToken(
        json["access_token"]
            .as_str()
            .unwrap_or_default()
            .to_string(),
    ))
}
