use clap::{
    Parser,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};

use spotlist::{
    config, error, info, management::TokenManager, server, spotify::SpotifySession, warning,
};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    /// Do not open the login page in the default browser on startup
    #[clap(long)]
    no_open: bool,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();
    let state = server::AppState::new();

    // A previously saved token that has not lapsed yet spares the user a
    // fresh login; anything stale or unreadable is ignored.
    let restored = match TokenManager::load().await {
        Ok(manager) if !manager.is_expired() => {
            let mut session = state.session.lock().await;
            *session = Some(SpotifySession::new(manager.current_token().clone()));
            true
        }
        _ => false,
    };

    let start_url = if restored {
        info!("Restored saved Spotify credentials");
        format!("http://{}/", config::server_addr())
    } else {
        format!("http://{}/login", config::server_addr())
    };

    info!("Login at: http://{}/login", config::server_addr());

    if !cli.no_open && webbrowser::open(&start_url).is_err() {
        warning!(
            "Failed to open browser. Please navigate to the following URL manually:\n{}",
            start_url
        );
    }

    server::start_api_server(state).await;
}
