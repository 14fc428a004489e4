use axum::{Extension, response::Redirect};

use crate::{server::AppState, spotify, types::PendingAuth, utils};

pub async fn login(Extension(state): Extension<AppState>) -> Redirect {
    let state_param = utils::generate_state_param();

    // Store the state before the redirect; the callback compares against it.
    {
        let mut pending = state.pending_auth.lock().await;
        *pending = Some(PendingAuth {
            state: state_param.clone(),
        });
    }

    Redirect::temporary(&spotify::auth::authorize_url(&state_param))
}
