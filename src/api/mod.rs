//! # API Module
//!
//! HTTP handlers for the local server routes. The flow mirrors the tool's
//! one-shot usage: `/login` redirects to Spotify's authorization page,
//! `/callback` completes the code exchange and serves the upload form, and
//! `/upload` turns the posted song-title file into a playlist. `/` serves
//! the form again for a restored session, and `/health` reports liveness.
//!
//! All failure responses are deliberately plain human-readable text; nothing
//! here returns structured error codes.

mod callback;
mod health;
mod index;
mod login;
mod upload;

pub use callback::callback;
pub use health::health;
pub use index::index;
pub use login::login;
pub use upload::upload;

/// Form served once a session is active. Field names are the contract of the
/// `/upload` route: `file` carries the song-title list, `title` the playlist
/// name.
pub(crate) const UPLOAD_FORM: &str = r#"
      <form action="/upload" method="post" enctype="multipart/form-data">
        <label for="file">Select a file:</label>
        <input type="file" id="file" name="file" accept=".txt" required>
        <label for="title">Playlist Title:</label>
        <input type="text" id="title" name="title" required>
        <button type="submit">Submit</button>
      </form>
    "#;
