use crate::{
    config,
    resolver::TrackSearch,
    spotify::SpotifySession,
    types::{SearchTracksResponse, Track},
};

/// Searches for the best-matching track for one title.
///
/// Issues a single search constrained to `type=track&limit=1` and returns
/// the first candidate, or `None` when the search comes back empty. The
/// candidate is taken as-is; no scoring or fuzzy-match confirmation happens
/// anywhere downstream.
pub async fn search_track(
    session: &SpotifySession,
    title: &str,
) -> Result<Option<Track>, reqwest::Error> {
    let api_url = format!("{uri}/search", uri = config::SPOTIFY_API_URL);

    let response = session
        .http()
        .get(&api_url)
        .query(&[("q", title), ("type", "track"), ("limit", "1")])
        .bearer_auth(session.bearer())
        .send()
        .await?
        .error_for_status()?;

    let res = response.json::<SearchTracksResponse>().await?;
    Ok(res.tracks.items.into_iter().next())
}

impl TrackSearch for SpotifySession {
    async fn search_track(&self, title: &str) -> Result<Option<Track>, String> {
        search_track(self, title).await.map_err(|e| e.to_string())
    }
}
