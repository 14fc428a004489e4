use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use rand::{Rng, distr::Alphanumeric};

/// Generates the random `state` parameter for the OAuth authorization
/// request. The value is stored before the redirect and compared against the
/// `state` query parameter the callback receives.
pub fn generate_state_param() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(32)
        .map(char::from)
        .collect()
}

/// Produces a unique file name for one uploaded song-title file. The file
/// only lives until its request finishes.
pub fn upload_file_name() -> String {
    let tag: String = rand::rng()
        .sample_iter(&Alphanumeric)
        .take(16)
        .map(char::from)
        .collect();
    format!("upload-{}.txt", tag)
}

/// Creates a ticking spinner shown while a batch of remote lookups runs.
pub fn spinner(message: &'static str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    pb
}
