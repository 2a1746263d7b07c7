// HTTP surface of the mock movies server. Every body carries its own
// `status` next to `data` or `message`, matching the provider contract the
// scenarios assert against.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::modules::movies::core::events::{MovieAction, MovieEvent};
use crate::modules::movies::core::movie::{Movie, MovieInput, UpdateMovieInput};
use crate::shell::state::AppState;

#[derive(Serialize)]
struct DataBody<T> {
    status: u16,
    data: T,
}

#[derive(Serialize)]
struct MessageBody {
    status: u16,
    message: String,
}

fn ok<T: Serialize>(data: T) -> Response {
    (StatusCode::OK, Json(DataBody { status: 200, data })).into_response()
}

fn not_found(message: String) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(MessageBody {
            status: 404,
            message,
        }),
    )
        .into_response()
}

async fn health() -> Response {
    (
        StatusCode::OK,
        Json(serde_json::json!({ "message": "Server is running" })),
    )
        .into_response()
}

#[derive(Deserialize)]
struct MoviesQuery {
    name: Option<String>,
}

async fn get_movies(State(state): State<AppState>, Query(query): Query<MoviesQuery>) -> Response {
    let movies = state.movies.lock().await;
    match query.name {
        Some(name) => match movies.find_by_name(&name) {
            Some(movie) => ok(movie),
            None => not_found(format!("Movie with name \"{name}\" not found")),
        },
        None => ok(movies.list()),
    }
}

async fn get_movie_by_id(State(state): State<AppState>, Path(id): Path<i64>) -> Response {
    match state.movies.lock().await.get(id) {
        Some(movie) => ok(movie),
        None => not_found(format!("Movie with id {id} not found")),
    }
}

async fn add_movie(State(state): State<AppState>, Json(input): Json<MovieInput>) -> Response {
    let movie = state.movies.lock().await.insert(input);
    emit(&state, MovieAction::Created, &movie);
    ok(movie)
}

async fn update_movie(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(update): Json<UpdateMovieInput>,
) -> Response {
    match state.movies.lock().await.update(id, update) {
        Some(movie) => {
            emit(&state, MovieAction::Updated, &movie);
            ok(movie)
        }
        None => not_found(format!("Movie with id {id} not found")),
    }
}

async fn delete_movie(State(state): State<AppState>, Path(id): Path<i64>) -> Response {
    match state.movies.lock().await.delete(id) {
        Some(movie) => {
            emit(&state, MovieAction::Deleted, &movie);
            (
                StatusCode::OK,
                Json(MessageBody {
                    status: 200,
                    message: format!("Movie {id} has been deleted"),
                }),
            )
                .into_response()
        }
        None => not_found(format!("Movie with id {id} not found")),
    }
}

fn emit(state: &AppState, action: MovieAction, movie: &Movie) {
    state.events.emit(MovieEvent::for_movie(action, movie));
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health))
        .route("/movies", get(get_movies).post(add_movie))
        .route(
            "/movies/{id}",
            get(get_movie_by_id)
                .put(update_movie)
                .delete(delete_movie),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
