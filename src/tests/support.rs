// Shared scenario plumbing: a mock server on an ephemeral port with its own
// event log in a temp directory, plus a client pointed at it.

use std::time::Duration;

use crate::modules::movies::adapters::outbound::api_client::MovieApiClient;
use crate::shared::infrastructure::event_log::EventLogReader;
use crate::shell::config::Config;
use crate::shell::http;
use crate::shell::state::AppState;

pub struct TestHarness {
    pub client: MovieApiClient,
    pub reader: EventLogReader,
    // Held so the log directory outlives the scenario.
    _log_dir: tempfile::TempDir,
}

pub async fn spawn_server(emit_delay: Duration) -> TestHarness {
    let log_dir = tempfile::tempdir().unwrap();
    let log_path = log_dir.path().join("movie-events.log");

    let state = AppState::new(&Config {
        port: 0,
        log_path: log_path.clone(),
        emit_delay,
    });

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, http::router(state)).await.unwrap();
    });

    TestHarness {
        client: MovieApiClient::new(format!("http://{addr}")),
        reader: EventLogReader::new(log_path),
        _log_dir: log_dir,
    }
}
