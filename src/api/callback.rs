use std::collections::HashMap;

use axum::{Extension, extract::Query, response::Html};

use crate::{api, management::TokenManager, server::AppState, spotify, success, warning};

pub async fn callback(
    Query(params): Query<HashMap<String, String>>,
    Extension(shared_state): Extension<AppState>,
) -> Html<String> {
    let Some(code) = params.get("code") else {
        return Html("Error getting access token.".to_string());
    };

    // The state parameter must match the one stored at /login.
    {
        let mut pending = shared_state.pending_auth.lock().await;
        let matches = match (pending.as_ref(), params.get("state")) {
            (Some(p), Some(s)) => p.state == *s,
            _ => false,
        };
        if !matches {
            warning!("Callback state mismatch; rejecting authorization code");
            return Html("Error getting access token.".to_string());
        }
        *pending = None;
    }

    match spotify::auth::exchange_code(code).await {
        Ok(token) => {
            // The credential must be on disk before this response goes out.
            let token_manager = TokenManager::new(token.clone());
            if let Err(e) = token_manager.persist().await {
                warning!("Failed to save token: {}", e);
                return Html("Error getting access token.".to_string());
            }

            let mut session = shared_state.session.lock().await;
            *session = Some(spotify::SpotifySession::new(token));

            success!("Authentication successful.");
            Html(api::UPLOAD_FORM.to_string())
        }
        Err(e) => {
            warning!("Token exchange failed: {}", e);
            Html("Error getting access token.".to_string())
        }
    }
}
