// Reader for an append-only, line-delimited JSON event log written by an
// external producer. Read-only: the harness never appends through this type,
// and every call re-reads the full file so a polling caller always sees the
// latest appends.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use thiserror::Error;

/// One parsed line of the log, addressable by topic and correlation key.
pub trait LogRecord {
    fn topic(&self) -> &str;
    fn correlation_id(&self) -> i64;
}

#[derive(Debug, Error)]
pub enum EventLogError {
    #[error("failed to read event log {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed record at line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}

/// Keeps only the records addressed to `topic` with the given correlation
/// id, preserving input order.
pub fn filter_records<R: LogRecord>(records: Vec<R>, correlation_id: i64, topic: &str) -> Vec<R> {
    records
        .into_iter()
        .filter(|record| record.topic() == topic && record.correlation_id() == correlation_id)
        .collect()
}

pub struct EventLogReader {
    path: PathBuf,
}

impl EventLogReader {
    /// The log path is explicit per reader; there is no process-wide default.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads and parses the whole log. A single malformed line fails the
    /// whole call; no partial results are returned. An external writer may
    /// be mid-append, leaving a partial trailing line; that surfaces as
    /// `Parse` and an outer polling loop retries past it.
    pub async fn read_all<R>(&self) -> Result<Vec<R>, EventLogError>
    where
        R: LogRecord + DeserializeOwned,
    {
        let content =
            tokio::fs::read_to_string(&self.path)
                .await
                .map_err(|source| EventLogError::Io {
                    path: self.path.clone(),
                    source,
                })?;

        content
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.is_empty())
            .map(|(index, line)| {
                serde_json::from_str(line).map_err(|source| EventLogError::Parse {
                    line: index + 1,
                    source,
                })
            })
            .collect()
    }

    /// Reads the whole log and returns the records matching `topic` and
    /// `correlation_id`, in file order. An empty result is not an error; it
    /// means "no matching event yet".
    pub async fn read_matching<R>(
        &self,
        correlation_id: i64,
        topic: &str,
    ) -> Result<Vec<R>, EventLogError>
    where
        R: LogRecord + DeserializeOwned,
    {
        let records = self.read_all().await?;
        Ok(filter_records(records, correlation_id, topic))
    }
}
