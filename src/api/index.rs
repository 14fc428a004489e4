use axum::{Extension, response::Html};

use crate::{api, server::AppState};

pub async fn index(Extension(state): Extension<AppState>) -> Html<String> {
    let session = state.session.lock().await;
    if session.is_some() {
        Html(api::UPLOAD_FORM.to_string())
    } else {
        Html(r#"<p>Not authenticated. <a href="/login">Log in with Spotify</a> first.</p>"#.to_string())
    }
}
