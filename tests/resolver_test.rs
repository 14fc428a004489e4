use std::collections::HashMap;

use spotlist::resolver::{
    ResolveError, TrackSearch, resolution_rows, resolve_titles, resolved_uris,
};
use spotlist::types::Track;

// Scripted search results keyed by title; unknown titles resolve to nothing.
struct ScriptedSearch {
    results: HashMap<String, Result<Option<Track>, String>>,
}

impl ScriptedSearch {
    fn new() -> Self {
        ScriptedSearch {
            results: HashMap::new(),
        }
    }

    fn found(mut self, title: &str, uri: &str) -> Self {
        self.results.insert(
            title.to_string(),
            Ok(Some(make_track(title, uri))),
        );
        self
    }

    fn missing(mut self, title: &str) -> Self {
        self.results.insert(title.to_string(), Ok(None));
        self
    }

    fn failing(mut self, title: &str, message: &str) -> Self {
        self.results
            .insert(title.to_string(), Err(message.to_string()));
        self
    }
}

impl TrackSearch for ScriptedSearch {
    async fn search_track(&self, title: &str) -> Result<Option<Track>, String> {
        self.results.get(title).cloned().unwrap_or(Ok(None))
    }
}

fn make_track(name: &str, uri: &str) -> Track {
    Track {
        id: format!("{}_id", name),
        name: name.to_string(),
        uri: uri.to_string(),
    }
}

fn titles(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}

#[tokio::test]
async fn test_all_titles_resolve_in_order() {
    let search = ScriptedSearch::new()
        .found("Imagine", "spotify:track:A")
        .found("Yesterday", "spotify:track:B");

    let resolutions = resolve_titles(&search, &titles(&["Imagine", "Yesterday"])).await;

    assert_eq!(resolutions.len(), 2);
    assert!(resolutions.iter().all(|r| r.outcome.is_ok()));
    assert_eq!(
        resolved_uris(&resolutions),
        vec!["spotify:track:A", "spotify:track:B"]
    );
}

#[tokio::test]
async fn test_unmatched_title_is_dropped_from_uris() {
    let search = ScriptedSearch::new()
        .missing("Imagine")
        .found("Yesterday", "spotify:track:B");

    let resolutions = resolve_titles(&search, &titles(&["Imagine", "Yesterday"])).await;

    // One resolution per input title, but only one URI survives
    assert_eq!(resolutions.len(), 2);
    assert!(matches!(
        resolutions[0].outcome,
        Err(ResolveError::NotFound)
    ));
    assert_eq!(resolved_uris(&resolutions), vec!["spotify:track:B"]);
}

#[tokio::test]
async fn test_search_failure_is_recorded_and_processing_continues() {
    let search = ScriptedSearch::new()
        .failing("Imagine", "connection reset")
        .found("Yesterday", "spotify:track:B");

    let resolutions = resolve_titles(&search, &titles(&["Imagine", "Yesterday"])).await;

    assert_eq!(resolutions.len(), 2);
    match &resolutions[0].outcome {
        Err(ResolveError::Search(msg)) => assert!(msg.contains("connection reset")),
        other => panic!("expected search error, got {:?}", other),
    }
    // The failure does not stop the second title from resolving
    assert_eq!(resolved_uris(&resolutions), vec!["spotify:track:B"]);
}

#[tokio::test]
async fn test_output_never_exceeds_input_length() {
    let search = ScriptedSearch::new()
        .found("A", "spotify:track:1")
        .missing("B")
        .failing("C", "timeout")
        .found("D", "spotify:track:2");

    let input = titles(&["A", "B", "C", "D"]);
    let resolutions = resolve_titles(&search, &input).await;
    let uris = resolved_uris(&resolutions);

    assert_eq!(resolutions.len(), input.len());
    assert!(uris.len() <= input.len());
    assert_eq!(uris, vec!["spotify:track:1", "spotify:track:2"]);
}

#[tokio::test]
async fn test_empty_input_yields_empty_output() {
    let search = ScriptedSearch::new();

    let resolutions = resolve_titles(&search, &[]).await;

    assert!(resolutions.is_empty());
    assert!(resolved_uris(&resolutions).is_empty());
}

#[tokio::test]
async fn test_resolution_rows_describe_each_outcome() {
    let search = ScriptedSearch::new()
        .found("Imagine", "spotify:track:A")
        .missing("Nowhere Song")
        .failing("Yesterday", "boom");

    let resolutions =
        resolve_titles(&search, &titles(&["Imagine", "Nowhere Song", "Yesterday"])).await;
    let rows = resolution_rows(&resolutions);

    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].title, "Imagine");
    assert_eq!(rows[0].status, "found (Imagine)");
    assert_eq!(rows[1].status, "not found");
    assert_eq!(rows[2].status, "search failed: boom");
}
