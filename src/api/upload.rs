use std::path::Path;

use axum::{Extension, body::Bytes, extract::Multipart, response::Html};
use tabled::Table;

use crate::{
    config, info, resolver,
    server::AppState,
    spotify::{self, SpotifySession},
    success, titles, utils, warning,
};

const GENERIC_FAILURE: &str = "Error creating playlist.";

/// Handles a multipart upload of a song-title file plus a playlist name and
/// runs the whole pipeline: read titles, resolve each one against search,
/// assemble the playlist. The uploaded file is written to the upload
/// directory for the duration of the request and removed again on every
/// outcome.
pub async fn upload(
    Extension(state): Extension<AppState>,
    mut multipart: Multipart,
) -> Html<String> {
    let session = { state.session.lock().await.clone() };
    let Some(session) = session else {
        return Html(
            r#"No active Spotify session. <a href="/login">Log in</a> first."#.to_string(),
        );
    };

    let mut file_bytes: Option<Bytes> = None;
    let mut playlist_title: Option<String> = None;

    loop {
        match multipart.next_field().await {
            Ok(Some(field)) => {
                let name = field.name().map(str::to_string);
                match name.as_deref() {
                    Some("file") => match field.bytes().await {
                        Ok(bytes) => file_bytes = Some(bytes),
                        Err(e) => {
                            warning!("Failed to read uploaded file field: {}", e);
                            return Html(GENERIC_FAILURE.to_string());
                        }
                    },
                    Some("title") => match field.text().await {
                        Ok(text) => playlist_title = Some(text),
                        Err(e) => {
                            warning!("Failed to read playlist title field: {}", e);
                            return Html(GENERIC_FAILURE.to_string());
                        }
                    },
                    _ => {}
                }
            }
            Ok(None) => break,
            Err(e) => {
                warning!("Malformed multipart upload: {}", e);
                return Html(GENERIC_FAILURE.to_string());
            }
        }
    }

    let (Some(bytes), Some(playlist_title)) = (file_bytes, playlist_title) else {
        warning!("Upload is missing the file or the playlist title field");
        return Html(GENERIC_FAILURE.to_string());
    };

    let file_path = config::upload_dir().join(utils::upload_file_name());
    if let Some(parent) = file_path.parent() {
        if let Err(e) = async_fs::create_dir_all(parent).await {
            warning!("Failed to create upload directory: {}", e);
            return Html(GENERIC_FAILURE.to_string());
        }
    }
    if let Err(e) = async_fs::write(&file_path, &bytes).await {
        warning!("Failed to store uploaded file: {}", e);
        return Html(GENERIC_FAILURE.to_string());
    }

    let result = process_upload(&session, &file_path, &playlist_title).await;

    // Clean up the uploaded file whatever happened above.
    if let Err(e) = async_fs::remove_file(&file_path).await {
        warning!(
            "Failed to remove uploaded file {}: {}",
            file_path.display(),
            e
        );
    }

    match result {
        Ok(body) => Html(body),
        Err(e) => {
            warning!("Upload processing failed: {}", e);
            Html(GENERIC_FAILURE.to_string())
        }
    }
}

async fn process_upload(
    session: &SpotifySession,
    file_path: &Path,
    playlist_title: &str,
) -> Result<String, String> {
    let song_titles = titles::read_song_titles(file_path)
        .await
        .map_err(|e| format!("failed to read uploaded file: {}", e))?;
    info!("Read {} song titles from upload", song_titles.len());

    let pb = utils::spinner("Resolving titles against Spotify search...");
    let resolutions = resolver::resolve_titles(session, &song_titles).await;
    pb.finish_and_clear();

    let rows = resolver::resolution_rows(&resolutions);
    if !rows.is_empty() {
        println!("{}", Table::new(rows));
    }

    let track_uris = resolver::resolved_uris(&resolutions);
    if track_uris.is_empty() {
        return Ok("No valid tracks found.".to_string());
    }

    let playlist_url = spotify::playlist::assemble(session, playlist_title, track_uris)
        .await
        .map_err(|e| e.to_string())?;
    success!("Playlist '{}' created: {}", playlist_title, playlist_url);

    Ok(format!(
        "Playlist created successfully! Check your Spotify account. Direct link: <a href='{}'>Spotify</a>",
        playlist_url
    ))
}
