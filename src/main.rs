mod catalog;
mod config;
mod form;
mod render;
mod routes;
mod services;
mod state;
mod submission;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = config::AppConfig::from_env();
    let addr = config.listen_addr();
    let state = state::AppState::new(config);

    // Spawn background idle-session eviction.
    let _sweeper = services::session::spawn_session_sweeper(state.clone());

    let app = routes::app(state);
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(error = %e, %addr, "failed to bind");
            std::process::exit(1);
        }
    };

    info!(%addr, "audio-agenda listening");
    if let Err(e) = axum::serve(listener, app).await {
        error!(error = %e, "server failed");
        std::process::exit(1);
    }
}
