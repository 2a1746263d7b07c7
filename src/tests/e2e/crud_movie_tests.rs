use std::time::Duration;

use crate::modules::movies::adapters::outbound::api_client::ApiClientError;
use crate::modules::movies::core::movie::UpdateMovieInput;
use crate::test_support::factories::generate_movie;
use crate::tests::support::spawn_server;

#[tokio::test]
async fn crud_movie() {
    let harness = spawn_server(Duration::ZERO).await;
    let client = &harness.client;
    let movie = generate_movie();

    let health = client.health().await.unwrap();
    assert_eq!(health.message, "Server is running");

    // Add a movie
    let created = client.add_movie(&movie).await.unwrap();
    assert_eq!(created.status, 200);
    assert_eq!(created.data.name, movie.name);
    assert_eq!(created.data.year, movie.year);
    let movie_id = created.data.id;

    // The new movie shows up in the full listing
    let all = client.get_movies().await.unwrap();
    assert_eq!(all.status, 200);
    assert!(all.data.iter().any(|m| m.id == movie_id));

    // Get by id
    let by_id = client.get_movie_by_id(movie_id).await.unwrap();
    assert_eq!(by_id.status, 200);
    assert_eq!(by_id.data.id, movie_id);

    // Get by name
    let by_name = client.get_movie_by_name(&movie.name).await.unwrap();
    assert_eq!(by_name.status, 200);
    assert_eq!(by_name.data.id, movie_id);

    // Update
    let update = UpdateMovieInput {
        name: Some("Updated Name".into()),
        year: Some(2000),
        ..Default::default()
    };
    let updated = client.update_movie(movie_id, &update).await.unwrap();
    assert_eq!(updated.status, 200);
    assert_eq!(updated.data.name, "Updated Name");
    assert_eq!(updated.data.year, 2000);
    assert_eq!(updated.data.director, movie.director);

    // Delete
    let deleted = client.delete_movie_by_id(movie_id).await.unwrap();
    assert_eq!(deleted.status, 200);
    assert!(deleted.message.contains(&movie_id.to_string()));

    // Gone afterwards
    let gone = client.get_movie_by_id(movie_id).await;
    match gone {
        Err(ApiClientError::Api { status, message }) => {
            assert_eq!(status, 404);
            assert!(message.contains(&movie_id.to_string()));
        }
        other => panic!("expected 404, got {other:?}"),
    }
}
