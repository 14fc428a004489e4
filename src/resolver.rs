//! Sequential title-to-track resolution.
//!
//! Each title is looked up with one search request, strictly one at a time.
//! The first candidate of a search is taken unconditionally; a title with no
//! candidate, or whose search fails outright, yields an explicit error in its
//! [`TitleResolution`] and processing continues with the next title. Callers
//! project the successful track URIs out of the resolution list, so
//! unresolved titles end up omitted from the playlist while the summary still
//! accounts for them.

use std::{fmt, future::Future};

use crate::{
    info,
    types::{ResolutionTableRow, Track},
    warning,
};

/// Search seam the resolver runs against. Implemented by the live Spotify
/// session; tests substitute a scripted stub.
pub trait TrackSearch {
    fn search_track(
        &self,
        title: &str,
    ) -> impl Future<Output = Result<Option<Track>, String>> + Send;
}

#[derive(Debug, Clone)]
pub enum ResolveError {
    NotFound,
    Search(String),
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolveError::NotFound => write!(f, "not found"),
            ResolveError::Search(e) => write!(f, "search failed: {}", e),
        }
    }
}

/// Outcome for one input title, in input order.
#[derive(Debug, Clone)]
pub struct TitleResolution {
    pub title: String,
    pub outcome: Result<Track, ResolveError>,
}

/// Resolves `titles` one after another against `search`.
///
/// The output has exactly one entry per input title, in input order. Search
/// failures are logged and recorded, never propagated; a failing title does
/// not stop the remaining titles from being processed.
pub async fn resolve_titles<S: TrackSearch>(search: &S, titles: &[String]) -> Vec<TitleResolution> {
    let mut resolutions = Vec::with_capacity(titles.len());

    for title in titles {
        let outcome = match search.search_track(title).await {
            Ok(Some(track)) => {
                info!("Found: {}", title);
                Ok(track)
            }
            Ok(None) => {
                warning!("Not found: {}", title);
                Err(ResolveError::NotFound)
            }
            Err(e) => {
                warning!("Error searching for \"{}\": {}", title, e);
                Err(ResolveError::Search(e))
            }
        };

        resolutions.push(TitleResolution {
            title: title.clone(),
            outcome,
        });
    }

    resolutions
}

/// Projects the successfully resolved track URIs, preserving the relative
/// order of their titles. Unresolved titles are absent; no placeholder keeps
/// their position.
pub fn resolved_uris(resolutions: &[TitleResolution]) -> Vec<String> {
    resolutions
        .iter()
        .filter_map(|r| r.outcome.as_ref().ok().map(|track| track.uri.clone()))
        .collect()
}

/// Builds the per-title summary rows printed to the operator terminal after
/// an upload has been processed.
pub fn resolution_rows(resolutions: &[TitleResolution]) -> Vec<ResolutionTableRow> {
    resolutions
        .iter()
        .map(|r| ResolutionTableRow {
            title: r.title.clone(),
            status: match &r.outcome {
                Ok(track) => format!("found ({})", track.name),
                Err(e) => e.to_string(),
            },
        })
        .collect()
}
