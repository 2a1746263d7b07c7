use std::sync::Arc;

use tokio::sync::Mutex;

use crate::modules::movies::adapters::outbound::movies_in_memory::InMemoryMovies;
use crate::shell::config::Config;
use crate::shell::event_sink::EventSink;

#[derive(Clone)]
pub struct AppState {
    pub movies: Arc<Mutex<InMemoryMovies>>,
    pub events: EventSink,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            movies: Arc::new(Mutex::new(InMemoryMovies::new())),
            events: EventSink::new(&config.log_path, config.emit_delay),
        }
    }
}
