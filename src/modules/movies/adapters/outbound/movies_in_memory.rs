// In-memory movie store backing the mock server. Single-process, id-ordered,
// ids assigned monotonically. Shared-state locking is the shell's concern.

use std::collections::BTreeMap;

use crate::modules::movies::core::movie::{Movie, MovieInput, UpdateMovieInput};

#[derive(Debug)]
pub struct InMemoryMovies {
    movies: BTreeMap<i64, Movie>,
    next_id: i64,
}

impl Default for InMemoryMovies {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryMovies {
    pub fn new() -> Self {
        Self {
            movies: BTreeMap::new(),
            next_id: 1,
        }
    }

    pub fn insert(&mut self, input: MovieInput) -> Movie {
        let id = self.next_id;
        self.next_id += 1;
        let movie = input.into_movie(id);
        self.movies.insert(id, movie.clone());
        movie
    }

    pub fn get(&self, id: i64) -> Option<Movie> {
        self.movies.get(&id).cloned()
    }

    pub fn list(&self) -> Vec<Movie> {
        self.movies.values().cloned().collect()
    }

    pub fn find_by_name(&self, name: &str) -> Option<Movie> {
        self.movies.values().find(|m| m.name == name).cloned()
    }

    pub fn update(&mut self, id: i64, update: UpdateMovieInput) -> Option<Movie> {
        let movie = self.movies.get_mut(&id)?;
        movie.apply_update(update);
        Some(movie.clone())
    }

    pub fn delete(&mut self, id: i64) -> Option<Movie> {
        self.movies.remove(&id)
    }
}
