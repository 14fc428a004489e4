//! Parsing of uploaded song-title files.
//!
//! An upload is a newline-delimited text file, one song title per line.
//! Lines are trimmed; lines that are empty after trimming are discarded.
//! File order is preserved and no deduplication happens.

use std::path::Path;

/// Splits file content into trimmed, non-empty titles in input order.
pub fn parse_titles(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Reads the uploaded file at `path` and returns its titles.
///
/// A read failure is fatal to the containing upload request; the caller
/// surfaces it as a generic error.
pub async fn read_song_titles(path: &Path) -> Result<Vec<String>, std::io::Error> {
    let content = async_fs::read_to_string(path).await?;
    Ok(parse_titles(&content))
}
