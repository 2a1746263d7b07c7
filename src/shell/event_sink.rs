// Outbound side effects of the mock server: one JSON line appended to the
// log file per emitted event, after the configured delivery delay. Appends
// happen on a spawned task so request handlers never wait on the log.

use std::path::{Path, PathBuf};
use std::time::Duration;

use tokio::io::AsyncWriteExt;

use crate::modules::movies::core::events::MovieEvent;

#[derive(Debug, Clone)]
pub struct EventSink {
    path: PathBuf,
    delay: Duration,
}

impl EventSink {
    pub fn new(path: impl Into<PathBuf>, delay: Duration) -> Self {
        Self {
            path: path.into(),
            delay,
        }
    }

    /// Fire-and-forget, like a broker publish: the handler moves on and the
    /// line lands in the log after the delay. A failed append is logged and
    /// dropped; the server keeps serving.
    pub fn emit(&self, event: MovieEvent) {
        let path = self.path.clone();
        let delay = self.delay;
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if let Err(err) = append_line(&path, &event).await {
                tracing::error!(topic = %event.topic, id = event.id, %err, "failed to append event");
            }
        });
    }
}

async fn append_line(path: &Path, event: &MovieEvent) -> anyhow::Result<()> {
    let mut line = serde_json::to_string(event)?;
    line.push('\n');
    let mut file = tokio::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .await?;
    file.write_all(line.as_bytes()).await?;
    file.flush().await?;
    Ok(())
}
