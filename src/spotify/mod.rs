//! # Spotify Integration Module
//!
//! This module is the integration layer between Spotlist and the Spotify Web
//! API. It covers the authorization-code OAuth flow, track search, and
//! playlist assembly, abstracting the HTTP requests and response shapes away
//! from the route handlers.
//!
//! ## Architecture
//!
//! ```text
//! HTTP handlers (api)
//!          ↓
//! Spotify Integration Layer
//!     ├── Session (per-user client + token)
//!     ├── Authentication (authorization-code flow)
//!     ├── Track Search (one query per title)
//!     └── Playlist Operations (create, append, discard)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## Core Modules
//!
//! - [`session`] - [`SpotifySession`], the explicit per-user context object.
//!   Every operation takes a `&SpotifySession` rather than reaching for
//!   ambient process state; the session is created once per successful
//!   authentication and holds the HTTP client and the current token.
//! - [`auth`] - Builds the authorization URL (fixed scope set plus a random
//!   `state` parameter) and exchanges the callback's authorization code for
//!   a token using the client id and secret.
//! - [`search`] - `GET /search` constrained to `type=track&limit=1`; returns
//!   the first candidate, if any. Implements the resolver's search seam.
//! - [`playlist`] - Resolves the current user, creates a private playlist,
//!   appends the resolved tracks in one batch call, and discards the
//!   playlist again if the append fails.
//!
//! ## API Coverage
//!
//! - `POST /api/token` - authorization-code exchange
//! - `GET /me` - current user profile (playlist creation is user-scoped)
//! - `GET /search` - track search
//! - `POST /users/{user_id}/playlists` - create playlist
//! - `POST /playlists/{playlist_id}/tracks` - append tracks
//! - `DELETE /playlists/{playlist_id}/followers` - discard playlist
//!
//! ## Error Handling
//!
//! Functions return `Result` with `reqwest::Error` for plain HTTP operations
//! and `String` where responses need validation beyond status codes. Nothing
//! in this layer retries; a failed call surfaces to the handler that issued
//! it. Per-title search failures are absorbed by the resolver, not here.

pub mod auth;
pub mod playlist;
pub mod search;
mod session;

pub use session::SpotifySession;
