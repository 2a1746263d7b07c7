// Event shapes emitted by the movies API. One JSON line per event in the
// log; the line carries `topic`, the movie `id`, and the movie fields at the
// top level.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::modules::movies::core::movie::Movie;
use crate::shared::infrastructure::event_log::LogRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovieAction {
    Created,
    Updated,
    Deleted,
}

impl MovieAction {
    pub const fn topic(self) -> &'static str {
        match self {
            MovieAction::Created => "movie-created",
            MovieAction::Updated => "movie-updated",
            MovieAction::Deleted => "movie-deleted",
        }
    }
}

/// One log line. Fields beyond `topic` and `id` are action-specific and kept
/// opaque; `flatten` keeps the wire shape flat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieEvent {
    pub topic: String,
    pub id: i64,
    #[serde(flatten)]
    pub payload: Map<String, Value>,
}

impl MovieEvent {
    /// The event a CRUD action on `movie` emits: topic from the action, the
    /// movie's id as correlation key, and the remaining movie fields as
    /// payload.
    pub fn for_movie(action: MovieAction, movie: &Movie) -> Self {
        let mut payload = match serde_json::to_value(movie) {
            Ok(Value::Object(map)) => map,
            _ => Map::new(),
        };
        payload.remove("id");

        Self {
            topic: action.topic().to_string(),
            id: movie.id,
            payload,
        }
    }
}

impl LogRecord for MovieEvent {
    fn topic(&self) -> &str {
        &self.topic
    }

    fn correlation_id(&self) -> i64 {
        self.id
    }
}
