use chrono::Utc;
use reqwest::Client;
use serde_json::Value;

use crate::{config, types::Token};

/// Builds the Spotify authorization URL the `/login` route redirects to.
///
/// The scope set is fixed (see [`config::SPOTIFY_SCOPE`]); `state` is the
/// random value generated for this login attempt and must come back
/// unchanged on the callback.
pub fn authorize_url(state: &str) -> String {
    format!(
        "{auth_url}?client_id={client_id}&response_type=code&redirect_uri={redirect_uri}&state={state}&scope={scope}",
        auth_url = config::SPOTIFY_AUTH_URL,
        client_id = &config::spotify_client_id(),
        redirect_uri = &config::spotify_redirect_uri(),
        state = state,
        scope = config::SPOTIFY_SCOPE.replace(' ', "%20"),
    )
}

/// Exchanges an authorization code for an access token.
///
/// Completes the OAuth authorization-code flow: the code received on the
/// callback is posted to the token endpoint together with the client id and
/// secret. The resulting token pair is stamped with the time it was obtained.
///
/// # Errors
///
/// Returns an error string for network failures and for token responses that
/// carry no `access_token` (Spotify reports a rejected code that way rather
/// than with an HTTP error the client library would catch).
pub async fn exchange_code(code: &str) -> Result<Token, String> {
    let client_id = config::spotify_client_id();
    let client_secret = config::spotify_client_secret();
    let redirect_uri = config::spotify_redirect_uri();

    let client = Client::new();
    let res = client
        .post(config::SPOTIFY_TOKEN_URL)
        .form(&[
            ("grant_type", "authorization_code"),
            ("code", code),
            ("redirect_uri", redirect_uri.as_str()),
            ("client_id", client_id.as_str()),
            ("client_secret", client_secret.as_str()),
        ])
        .send()
        .await
        .map_err(|e| e.to_string())?;

    let json: Value = res.json().await.map_err(|e| e.to_string())?;

    if json.get("access_token").and_then(Value::as_str).is_none() {
        return Err(format!("token response contained no access token: {}", json));
    }

    Ok(Token {
        access_token: json["access_token"]
            .as_str()
            .unwrap_or_default()
            .to_string(),
        refresh_token: json["refresh_token"]
            .as_str()
            .unwrap_or_default()
            .to_string(),
        scope: json["scope"].as_str().unwrap_or_default().to_string(),
        expires_in: json["expires_in"].as_i64().unwrap_or(3600) as u64,
        obtained_at: Utc::now().timestamp() as u64,
    })
}
