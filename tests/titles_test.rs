use std::path::PathBuf;

use spotlist::titles::{parse_titles, read_song_titles};

// Helper to place a throwaway file in the platform temp directory
fn temp_file_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("spotlist-test-{}-{}", std::process::id(), name))
}

#[test]
fn test_parse_titles_trims_and_drops_empty_lines() {
    let content = "Imagine\n\n  \nYesterday\n";
    let titles = parse_titles(content);

    assert_eq!(titles, vec!["Imagine", "Yesterday"]);
}

#[test]
fn test_parse_titles_preserves_order_and_duplicates() {
    let content = "  One  \nTwo\nOne\n\tThree\t\n";
    let titles = parse_titles(content);

    // Order follows the file, whitespace is trimmed, duplicates survive
    assert_eq!(titles, vec!["One", "Two", "One", "Three"]);
}

#[test]
fn test_parse_titles_counts_non_empty_lines_only() {
    // 3 non-empty lines mixed with 4 empty/whitespace-only ones
    let content = "\nA\n   \nB\n\n\t\nC";
    let titles = parse_titles(content);

    assert_eq!(titles.len(), 3);
    assert_eq!(titles, vec!["A", "B", "C"]);
}

#[test]
fn test_parse_titles_empty_input() {
    assert!(parse_titles("").is_empty());
    assert!(parse_titles("\n\n   \n").is_empty());
}

#[test]
fn test_parse_titles_handles_crlf_line_endings() {
    let content = "Imagine\r\nYesterday\r\n";
    let titles = parse_titles(content);

    assert_eq!(titles, vec!["Imagine", "Yesterday"]);
}

#[tokio::test]
async fn test_read_song_titles_from_file() {
    let path = temp_file_path("read.txt");
    std::fs::write(&path, "Imagine\n\n  \nYesterday").unwrap();

    let titles = read_song_titles(&path).await.unwrap();
    assert_eq!(titles, vec!["Imagine", "Yesterday"]);

    std::fs::remove_file(&path).unwrap();
}

#[tokio::test]
async fn test_read_song_titles_unreadable_path_fails() {
    let path = temp_file_path("does-not-exist.txt");

    let result = read_song_titles(&path).await;
    assert!(result.is_err());
}
