use axum::{
    Extension, Router,
    routing::{get, post},
};
use std::{net::SocketAddr, str::FromStr, sync::Arc};
use tokio::sync::Mutex;

use crate::{api, config, error, spotify::SpotifySession, types::PendingAuth};

/// Shared state of the local server: the `state` parameter of a login
/// attempt awaiting its callback, and the session of the most recently
/// authenticated user. Both are last-write-wins.
#[derive(Clone)]
pub struct AppState {
    pub pending_auth: Arc<Mutex<Option<PendingAuth>>>,
    pub session: Arc<Mutex<Option<SpotifySession>>>,
}

impl AppState {
    pub fn new() -> Self {
        AppState {
            pending_auth: Arc::new(Mutex::new(None)),
            session: Arc::new(Mutex::new(None)),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

pub async fn start_api_server(state: AppState) {
    let app = Router::new()
        .route("/", get(api::index))
        .route("/health", get(api::health))
        .route("/login", get(api::login))
        .route("/callback", get(api::callback))
        .route("/upload", post(api::upload))
        .layer(Extension(state));

    let addr = match SocketAddr::from_str(&config::server_addr()) {
        Ok(addr) => addr,
        Err(e) => error!("Failed to parse server address: {}", e),
    };

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
