// HTTP client for the movies API, the consumer side of the harness. Response
// bodies carry their own `status` next to `data` or `message`, mirroring the
// provider contract.

use reqwest::Client;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::modules::movies::core::movie::{Movie, MovieInput, UpdateMovieInput};

#[derive(Debug, Error)]
pub enum ApiClientError {
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    #[error("api returned {status}: {message}")]
    Api { status: u16, message: String },
}

#[derive(Debug, Deserialize)]
pub struct HealthResponse {
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct GetMoviesResponse {
    pub status: u16,
    pub data: Vec<Movie>,
}

#[derive(Debug, Deserialize)]
pub struct MovieResponse {
    pub status: u16,
    pub data: Movie,
}

#[derive(Debug, Deserialize)]
pub struct DeleteMovieResponse {
    pub status: u16,
    pub message: String,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    status: u16,
    message: String,
}

pub struct MovieApiClient {
    base_url: String,
    client: Client,
}

impl MovieApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn decode<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ApiClientError> {
        let status = response.status();
        if status.is_success() {
            Ok(response.json().await?)
        } else {
            match response.json::<ErrorBody>().await {
                Ok(body) => Err(ApiClientError::Api {
                    status: body.status,
                    message: body.message,
                }),
                Err(_) => Err(ApiClientError::Api {
                    status: status.as_u16(),
                    message: status.to_string(),
                }),
            }
        }
    }

    pub async fn health(&self) -> Result<HealthResponse, ApiClientError> {
        Self::decode(self.client.get(self.url("/")).send().await?).await
    }

    pub async fn get_movies(&self) -> Result<GetMoviesResponse, ApiClientError> {
        Self::decode(self.client.get(self.url("/movies")).send().await?).await
    }

    pub async fn get_movie_by_id(&self, id: i64) -> Result<MovieResponse, ApiClientError> {
        Self::decode(
            self.client
                .get(self.url(&format!("/movies/{id}")))
                .send()
                .await?,
        )
        .await
    }

    pub async fn get_movie_by_name(&self, name: &str) -> Result<MovieResponse, ApiClientError> {
        Self::decode(
            self.client
                .get(self.url("/movies"))
                .query(&[("name", name)])
                .send()
                .await?,
        )
        .await
    }

    pub async fn add_movie(&self, movie: &MovieInput) -> Result<MovieResponse, ApiClientError> {
        Self::decode(
            self.client
                .post(self.url("/movies"))
                .json(movie)
                .send()
                .await?,
        )
        .await
    }

    pub async fn update_movie(
        &self,
        id: i64,
        update: &UpdateMovieInput,
    ) -> Result<MovieResponse, ApiClientError> {
        Self::decode(
            self.client
                .put(self.url(&format!("/movies/{id}")))
                .json(update)
                .send()
                .await?,
        )
        .await
    }

    pub async fn delete_movie_by_id(&self, id: i64) -> Result<DeleteMovieResponse, ApiClientError> {
        Self::decode(
            self.client
                .delete(self.url(&format!("/movies/{id}")))
                .send()
                .await?,
        )
        .await
    }
}
