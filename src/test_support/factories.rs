// Builders for scenario input data. Names are unique per call so parallel
// scenarios never collide on name lookups.

use uuid::Uuid;

use crate::modules::movies::core::movie::MovieInput;

const DIRECTORS: [&str; 5] = [
    "Kathryn Bigelow",
    "Denis Villeneuve",
    "Greta Gerwig",
    "Bong Joon-ho",
    "Lynne Ramsay",
];

/// A plausible movie with a unique name.
pub fn generate_movie() -> MovieInput {
    let seed = Uuid::now_v7();
    let bytes = seed.as_bytes();
    let short = seed.simple().to_string()[..8].to_string();

    MovieInput {
        name: format!("Movie {short}"),
        year: 1950 + i32::from(bytes[14] % 75),
        director: DIRECTORS[usize::from(bytes[15]) % DIRECTORS.len()].to_string(),
        rating: f64::from(bytes[13] % 90) / 10.0 + 1.0,
    }
}

pub struct MovieBuilder {
    inner: MovieInput,
}

impl Default for MovieBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl MovieBuilder {
    pub fn new() -> Self {
        Self {
            inner: generate_movie(),
        }
    }

    pub fn name(mut self, v: impl Into<String>) -> Self {
        self.inner.name = v.into();
        self
    }

    pub fn year(mut self, v: i32) -> Self {
        self.inner.year = v;
        self
    }

    pub fn director(mut self, v: impl Into<String>) -> Self {
        self.inner.director = v.into();
        self
    }

    pub fn rating(mut self, v: f64) -> Self {
        self.inner.rating = v;
        self
    }

    pub fn build(self) -> MovieInput {
        self.inner
    }
}
