// Composition root for the mock movies server.
//
// Responsibilities:
// - Read config from environment.
// - Wire the in-memory store and the event sink into the router state.
// - Bind and serve.

pub mod config;
pub mod event_sink;
pub mod http;
pub mod state;

use crate::shell::config::Config;
use crate::shell::state::AppState;

pub async fn serve(config: Config) -> anyhow::Result<()> {
    let state = AppState::new(&config);
    let listener =
        tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
    tracing::info!(
        port = config.port,
        log_path = %config.log_path.display(),
        "movies mock server listening"
    );
    axum::serve(listener, http::router(state)).await?;
    Ok(())
}
