// The event-side counterpart of the CRUD scenario: each state change is
// verified against the asynchronously-appended event log by re-running the
// assertion until the event lands or the deadline expires.

use std::time::Duration;

use anyhow::ensure;

use crate::modules::movies::core::events::{MovieAction, MovieEvent};
use crate::modules::movies::core::movie::{Movie, UpdateMovieInput};
use crate::shared::core::poll::{PollSpec, verify_eventually};
use crate::shared::infrastructure::event_log::{EventLogError, EventLogReader};
use crate::test_support::factories::generate_movie;
use crate::tests::support::spawn_server;

const POLL: PollSpec = PollSpec::from_millis(100, 5_000);

async fn expect_single_event(
    reader: &EventLogReader,
    action: MovieAction,
    movie: &Movie,
) -> anyhow::Result<()> {
    verify_eventually(
        || async {
            let events: Vec<MovieEvent> = match reader
                .read_matching(movie.id, action.topic())
                .await
            {
                Ok(events) => events,
                // The log file only exists once the first event is flushed;
                // until then there is simply no matching event yet.
                Err(EventLogError::Io { .. }) => Vec::new(),
                Err(err) => return Err(err.into()),
            };
            let expected = MovieEvent::for_movie(action, movie);
            ensure!(
                events == [expected],
                "expected exactly one {} event for movie {}, got {events:?}",
                action.topic(),
                movie.id
            );
            Ok(())
        },
        POLL,
    )
    .await
}

#[tokio::test]
async fn crud_movie_with_event_verification() {
    let harness = spawn_server(Duration::from_millis(200)).await;
    let client = &harness.client;
    let movie = generate_movie();

    // Add a movie, then wait for its movie-created event
    let created = client.add_movie(&movie).await.unwrap();
    assert_eq!(created.status, 200);
    let created = created.data;

    expect_single_event(&harness.reader, MovieAction::Created, &created)
        .await
        .unwrap();

    // Update, then wait for movie-updated carrying the new field values
    let update = UpdateMovieInput {
        name: Some("Updated Name".into()),
        year: Some(2000),
        ..Default::default()
    };
    let updated = client.update_movie(created.id, &update).await.unwrap().data;
    assert_eq!(updated.name, "Updated Name");

    expect_single_event(&harness.reader, MovieAction::Updated, &updated)
        .await
        .unwrap();

    // Delete, then wait for movie-deleted carrying the last known fields
    let deleted = client.delete_movie_by_id(created.id).await.unwrap();
    assert!(deleted.message.contains(&created.id.to_string()));

    expect_single_event(&harness.reader, MovieAction::Deleted, &updated)
        .await
        .unwrap();
}

#[tokio::test]
async fn events_for_other_movies_do_not_leak_into_a_scenario() {
    let harness = spawn_server(Duration::ZERO).await;
    let client = &harness.client;

    let first = client.add_movie(&generate_movie()).await.unwrap().data;
    let second = client.add_movie(&generate_movie()).await.unwrap().data;

    expect_single_event(&harness.reader, MovieAction::Created, &second)
        .await
        .unwrap();

    // The other movie's event is still the only one under its own key
    expect_single_event(&harness.reader, MovieAction::Created, &first)
        .await
        .unwrap();

    // No movie-updated event exists for either yet
    let updated: Vec<MovieEvent> = harness
        .reader
        .read_matching(first.id, MovieAction::Updated.topic())
        .await
        .unwrap();
    assert!(updated.is_empty());
}
