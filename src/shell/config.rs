use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub log_path: PathBuf,
    /// Lag between a CRUD action and its event landing in the log. Simulates
    /// broker delivery delay; scenarios must poll, not assume immediacy.
    pub emit_delay: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 3001,
            log_path: PathBuf::from("movie-events.log"),
            emit_delay: Duration::from_millis(100),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            port: env_parsed("SERVER_PORT").unwrap_or(defaults.port),
            log_path: std::env::var("EVENT_LOG_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.log_path),
            emit_delay: env_parsed("EVENT_EMIT_DELAY_MS")
                .map(Duration::from_millis)
                .unwrap_or(defaults.emit_delay),
        }
    }
}

fn env_parsed<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|value| value.parse().ok())
}
