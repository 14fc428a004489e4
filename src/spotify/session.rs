use reqwest::Client;

use crate::types::Token;

/// Per-user API context: one HTTP client plus the token it authenticates
/// with. Created after a successful code exchange (or restored from the
/// persisted token at startup) and passed explicitly into every Spotify
/// operation.
#[derive(Debug, Clone)]
pub struct SpotifySession {
    http: Client,
    token: Token,
}

impl SpotifySession {
    pub fn new(token: Token) -> Self {
        SpotifySession {
            http: Client::new(),
            token,
        }
    }

    pub fn http(&self) -> &Client {
        &self.http
    }

    pub fn bearer(&self) -> &str {
        &self.token.access_token
    }

    pub fn token(&self) -> &Token {
        &self.token
    }
}
