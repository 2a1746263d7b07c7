use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: i64,
    pub name: String,
    pub year: i32,
    pub director: String,
    pub rating: f64,
}

/// Transport shape for `POST /movies`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieInput {
    pub name: String,
    pub year: i32,
    pub director: String,
    pub rating: f64,
}

impl MovieInput {
    pub fn into_movie(self, id: i64) -> Movie {
        Movie {
            id,
            name: self.name,
            year: self.year,
            director: self.director,
            rating: self.rating,
        }
    }
}

/// Transport shape for `PUT /movies/:id`; absent fields keep their value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateMovieInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub director: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
}

impl Movie {
    pub fn apply_update(&mut self, update: UpdateMovieInput) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(year) = update.year {
            self.year = year;
        }
        if let Some(director) = update.director {
            self.director = director;
        }
        if let Some(rating) = update.rating {
            self.rating = rating;
        }
    }
}
