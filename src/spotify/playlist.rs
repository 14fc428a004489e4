use std::fmt;

use chrono::Utc;

use crate::{
    config,
    spotify::SpotifySession,
    types::{
        AddTracksRequest, AddTracksResponse, CreatePlaylistRequest, CreatePlaylistResponse,
        CurrentUserResponse,
    },
    warning,
};

#[derive(Debug)]
pub enum AssembleError {
    User(reqwest::Error),
    Create(reqwest::Error),
    MissingId,
    AddTracks(reqwest::Error),
}

impl fmt::Display for AssembleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssembleError::User(e) => write!(f, "failed to resolve current user: {}", e),
            AssembleError::Create(e) => write!(f, "failed to create playlist: {}", e),
            AssembleError::MissingId => {
                write!(f, "playlist creation response contained no playlist id")
            }
            AssembleError::AddTracks(e) => write!(f, "failed to add tracks to playlist: {}", e),
        }
    }
}

/// Fetches the authenticated user's profile. Playlist creation is scoped to
/// a user id, so assembly always starts here.
pub async fn current_user(session: &SpotifySession) -> Result<CurrentUserResponse, reqwest::Error> {
    let api_url = format!("{uri}/me", uri = config::SPOTIFY_API_URL);

    let response = session
        .http()
        .get(&api_url)
        .bearer_auth(session.bearer())
        .send()
        .await?
        .error_for_status()?;

    response.json::<CurrentUserResponse>().await
}

/// Creates an empty private playlist named `name` under `user_id`.
pub async fn create(
    session: &SpotifySession,
    user_id: &str,
    name: &str,
) -> Result<CreatePlaylistResponse, reqwest::Error> {
    let api_url = format!(
        "{uri}/users/{user_id}/playlists",
        uri = config::SPOTIFY_API_URL,
        user_id = user_id
    );

    let request = CreatePlaylistRequest {
        name: name.to_string(),
        description: format!(
            "Created by spotlist from an uploaded song list on {}.",
            Utc::now().format("%Y-%m-%d")
        ),
        public: false,
        collaborative: false,
    };

    let response = session
        .http()
        .post(&api_url)
        .bearer_auth(session.bearer())
        .json(&request)
        .send()
        .await?
        .error_for_status()?;

    response.json::<CreatePlaylistResponse>().await
}

/// Appends `uris` to the playlist in one batch call, preserving order.
pub async fn add_tracks(
    session: &SpotifySession,
    playlist_id: &str,
    uris: Vec<String>,
) -> Result<AddTracksResponse, reqwest::Error> {
    let api_url = format!(
        "{uri}/playlists/{playlist_id}/tracks",
        uri = config::SPOTIFY_API_URL,
        playlist_id = playlist_id
    );

    let response = session
        .http()
        .post(&api_url)
        .bearer_auth(session.bearer())
        .json(&AddTracksRequest { uris })
        .send()
        .await?
        .error_for_status()?;

    response.json::<AddTracksResponse>().await
}

/// Removes the playlist from the user's account again. Unfollowing an owned
/// playlist is how the Web API deletes it.
pub async fn unfollow(session: &SpotifySession, playlist_id: &str) -> Result<(), reqwest::Error> {
    let api_url = format!(
        "{uri}/playlists/{playlist_id}/followers",
        uri = config::SPOTIFY_API_URL,
        playlist_id = playlist_id
    );

    session
        .http()
        .delete(&api_url)
        .bearer_auth(session.bearer())
        .send()
        .await?
        .error_for_status()?;

    Ok(())
}

/// Assembles a playlist from an ordered, non-empty sequence of track URIs.
///
/// Resolves the current user, creates the playlist, validates the returned
/// id, and appends all tracks in one batch. A failing append discards the
/// just-created playlist so no empty orphan stays behind on the account; the
/// discard itself is best-effort and only logged when it fails too.
///
/// Returns the playlist's public Spotify URL.
pub async fn assemble(
    session: &SpotifySession,
    name: &str,
    uris: Vec<String>,
) -> Result<String, AssembleError> {
    let user = current_user(session).await.map_err(AssembleError::User)?;

    let playlist = create(session, &user.id, name)
        .await
        .map_err(AssembleError::Create)?;
    if playlist.id.is_empty() {
        return Err(AssembleError::MissingId);
    }

    if let Err(e) = add_tracks(session, &playlist.id, uris).await {
        warning!("Discarding playlist {} after failed append", playlist.id);
        if let Err(e) = unfollow(session, &playlist.id).await {
            warning!("Failed to discard playlist {}: {}", playlist.id, e);
        }
        return Err(AssembleError::AddTracks(e));
    }

    Ok(playlist.external_urls.spotify)
}
